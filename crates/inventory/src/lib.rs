//! Inventory domain module.
//!
//! This crate contains business rules for the pantry inventory, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage). Any
//! notion of "now" is injected by the caller.

pub mod expiry;
pub mod item;
pub mod pantry;

pub use expiry::{EXPIRY_DATE_FORMAT, SOON_THRESHOLD_DAYS, is_expiring_soon};
pub use item::{InventoryItem, InventoryItemId};
pub use pantry::Pantry;
