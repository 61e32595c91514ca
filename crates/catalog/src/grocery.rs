use serde::{Deserialize, Serialize};

use pantrykit_core::{DomainError, DomainResult};

/// One row of the grocery picklist: a named product with a unit price and the
/// quantity the shopper has picked so far (0 = not picked).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroceryEntry {
    pub name: String,
    pub unit_price: f64,
    pub quantity: u32,
}

/// The grocery picklist.
///
/// A fixed set of entries whose picked quantities are the only mutable state.
/// Totals are derived on every read, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroceryList {
    entries: Vec<GroceryEntry>,
}

impl GroceryList {
    pub fn new(entries: impl IntoIterator<Item = (String, f64)>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(name, unit_price)| GroceryEntry {
                    name,
                    unit_price,
                    quantity: 0,
                })
                .collect(),
        }
    }

    /// The stock picklist shipped with the app.
    pub fn starter() -> Self {
        let rows: [(&str, f64); 13] = [
            ("Organic Apples", 4.99),
            ("Almond Milk", 3.49),
            ("Whole Wheat Bread", 2.99),
            ("Free-range Eggs", 3.99),
            ("Cherry Tomatoes", 2.49),
            ("Avocados", 1.99),
            ("Greek Yogurt", 3.29),
            ("Spinach", 1.79),
            ("Chicken Breast", 8.99),
            ("Salmon Fillet", 12.99),
            ("Quinoa", 5.49),
            ("Extra Virgin Olive Oil", 7.99),
            ("Dark Chocolate", 4.49),
        ];
        Self::new(rows.iter().map(|(name, price)| ((*name).to_owned(), *price)))
    }

    pub fn entries(&self) -> &[GroceryEntry] {
        &self.entries
    }

    /// Increase the picked quantity of the named entry by one.
    pub fn increment(&mut self, name: &str) -> DomainResult<u32> {
        let entry = self.entry_mut(name)?;
        entry.quantity += 1;
        Ok(entry.quantity)
    }

    /// Decrease the picked quantity of the named entry by one.
    ///
    /// Quantities floor at zero: decrementing an unpicked entry is a no-op.
    pub fn decrement(&mut self, name: &str) -> DomainResult<u32> {
        let entry = self.entry_mut(name)?;
        entry.quantity = entry.quantity.saturating_sub(1);
        Ok(entry.quantity)
    }

    /// Total number of picked units across all entries.
    pub fn total_items(&self) -> u32 {
        self.entries.iter().map(|e| e.quantity).sum()
    }

    /// Total price of all picked units.
    pub fn total_price(&self) -> f64 {
        self.entries
            .iter()
            .map(|e| e.unit_price * f64::from(e.quantity))
            .sum()
    }

    fn entry_mut(&mut self, name: &str) -> DomainResult<&mut GroceryEntry> {
        self.entries
            .iter_mut()
            .find(|e| e.name == name)
            .ok_or_else(DomainError::not_found)
    }
}
