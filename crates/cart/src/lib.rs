//! Cart and checkout domain module.
//!
//! This crate contains the cart pricing rules and the checkout draft,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no
//! storage). Totals are derived values: they are recomputed on every read and
//! never stored.

pub mod checkout;
pub mod pricing;

pub use checkout::{Address, CheckoutDraft, OrderConfirmation, PaymentMethod};
pub use pricing::{
    Cart, CartLineItem, OrderTotals, QuantityAdjustment, FLAT_SHIPPING_FEE,
    FREE_SHIPPING_THRESHOLD, TAX_RATE, adjust_quantity, compute_totals,
};
