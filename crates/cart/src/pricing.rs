use serde::{Deserialize, Serialize};
use tracing::debug;

use pantrykit_catalog::{CatalogItem, CatalogItemId};

/// Subtotals strictly above this ship for free.
pub const FREE_SHIPPING_THRESHOLD: f64 = 30.0;

/// Flat shipping fee charged at or below the free-shipping threshold.
pub const FLAT_SHIPPING_FEE: f64 = 4.99;

/// Sales tax rate, applied to the subtotal only.
pub const TAX_RATE: f64 = 0.05;

/// One product entry in the cart.
///
/// Invariant: a quantity of zero means the line is logically absent. The
/// mutators in this module remove such lines rather than retain a zero row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLineItem {
    pub id: CatalogItemId,
    pub name: String,
    /// Non-negative display-precision currency amount.
    pub unit_price: f64,
    pub quantity: u32,
}

impl CartLineItem {
    pub fn new(
        id: impl Into<CatalogItemId>,
        name: impl Into<String>,
        unit_price: f64,
        quantity: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            unit_price,
            quantity,
        }
    }

    pub fn line_total(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }
}

/// Derived order totals. Recomputed on every read from the current lines;
/// never persisted, so no staleness to worry about.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrderTotals {
    pub subtotal: f64,
    pub shipping: f64,
    pub tax: f64,
    pub grand_total: f64,
}

/// Compute order totals from the current cart lines.
///
/// Pure: no rounding is applied mid-computation, the empty cart yields zero
/// subtotal/tax but still pays the flat shipping fee (0 is not > 30), and the
/// threshold comparison is strict — a subtotal of exactly 30.00 still pays.
pub fn compute_totals(lines: &[CartLineItem]) -> OrderTotals {
    let subtotal: f64 = lines.iter().map(CartLineItem::line_total).sum();
    let shipping = if subtotal > FREE_SHIPPING_THRESHOLD {
        0.0
    } else {
        FLAT_SHIPPING_FEE
    };
    let tax = subtotal * TAX_RATE;

    OrderTotals {
        subtotal,
        shipping,
        tax,
        grand_total: subtotal + shipping + tax,
    }
}

/// Outcome of [`adjust_quantity`].
///
/// A missing id is reported rather than silently swallowed, but it is not an
/// error: callers that want the original permissive behavior ignore the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum QuantityAdjustment {
    Updated,
    Removed,
    NotFound,
}

/// Set the quantity of the line identified by `id`.
///
/// A new quantity of zero or less removes the line entirely (see the
/// zero-quantity invariant on [`CartLineItem`]). Positive quantities beyond
/// `u32::MAX` clamp to it, so an updated line always stays positive. An
/// unknown id leaves the list unchanged.
pub fn adjust_quantity(
    lines: &mut Vec<CartLineItem>,
    id: &CatalogItemId,
    new_quantity: i64,
) -> QuantityAdjustment {
    let Some(index) = lines.iter().position(|line| &line.id == id) else {
        debug!(%id, "quantity adjustment for unknown cart line");
        return QuantityAdjustment::NotFound;
    };

    if new_quantity > 0 {
        lines[index].quantity = u32::try_from(new_quantity).unwrap_or(u32::MAX);
        debug!(%id, quantity = lines[index].quantity, "cart line quantity updated");
        QuantityAdjustment::Updated
    } else {
        lines.remove(index);
        debug!(%id, "cart line removed (quantity reached zero)");
        QuantityAdjustment::Removed
    }
}

/// The shopping cart: an owned list of lines plus derived totals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLineItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a cart from existing lines (e.g. a restored session).
    pub fn from_lines(lines: Vec<CartLineItem>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[CartLineItem] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line_ids(&self) -> Vec<CatalogItemId> {
        self.lines.iter().map(|line| line.id.clone()).collect()
    }

    /// Add a catalog item to the cart.
    ///
    /// If a line with the same id already exists its quantity is bumped by
    /// one; otherwise a new line with quantity 1 is inserted.
    pub fn add(&mut self, item: &CatalogItem) {
        if let Some(line) = self.lines.iter_mut().find(|line| line.id == item.id) {
            line.quantity += 1;
            debug!(id = %item.id, quantity = line.quantity, "merged into existing cart line");
        } else {
            self.lines.push(CartLineItem::new(
                item.id.clone(),
                item.name.clone(),
                item.unit_price,
                1,
            ));
            debug!(id = %item.id, "new cart line added");
        }
    }

    /// Set the quantity of an existing line; zero or negative removes it.
    pub fn adjust_quantity(
        &mut self,
        id: &CatalogItemId,
        new_quantity: i64,
    ) -> QuantityAdjustment {
        adjust_quantity(&mut self.lines, id, new_quantity)
    }

    /// Explicit user delete of a line, regardless of its quantity.
    pub fn remove(&mut self, id: &CatalogItemId) -> Option<CartLineItem> {
        let index = self.lines.iter().position(|line| &line.id == id)?;
        Some(self.lines.remove(index))
    }

    pub fn totals(&self) -> OrderTotals {
        compute_totals(&self.lines)
    }
}
