//! Grocery catalog domain module.
//!
//! This crate contains the purchasable item catalog and the grocery picklist,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no
//! storage).

pub mod grocery;
pub mod item;

pub use grocery::{GroceryEntry, GroceryList};
pub use item::{CatalogItem, CatalogItemId, starter_catalog, suggested_items, suggestions_for};
