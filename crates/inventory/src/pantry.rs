use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use pantrykit_core::{DomainError, DomainResult};

use crate::item::{InventoryItem, InventoryItemId};

/// The in-memory pantry: the current items plus a one-slot undo buffer for
/// the most recent removal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pantry {
    items: Vec<InventoryItem>,
    last_removed: Option<InventoryItem>,
}

impl Pantry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[InventoryItem] {
        &self.items
    }

    /// Item names, for recipe matching and the assistant.
    pub fn names(&self) -> Vec<String> {
        self.items.iter().map(|item| item.name().to_owned()).collect()
    }

    pub fn add(&mut self, item: InventoryItem) {
        debug!(id = %item.id(), name = item.name(), "inventory item added");
        self.items.push(item);
    }

    /// Remove an item by id, keeping it in the undo buffer.
    ///
    /// Each removal replaces the buffer: only the most recent removal can be
    /// undone.
    pub fn remove(&mut self, id: InventoryItemId) -> DomainResult<&InventoryItem> {
        let index = self
            .items
            .iter()
            .position(|item| item.id() == id)
            .ok_or_else(DomainError::not_found)?;

        let removed = self.items.remove(index);
        debug!(%id, name = removed.name(), "inventory item removed");
        Ok(self.last_removed.insert(removed))
    }

    /// Restore the most recently removed item, if any.
    pub fn undo_remove(&mut self) -> Option<&InventoryItem> {
        let item = self.last_removed.take()?;
        debug!(id = %item.id(), name = item.name(), "inventory removal undone");
        self.items.push(item);
        self.items.last()
    }

    /// Items ordered by their expiry text, as entered.
    pub fn items_by_expiry(&self) -> Vec<&InventoryItem> {
        let mut sorted: Vec<&InventoryItem> = self.items.iter().collect();
        sorted.sort_by(|a, b| a.expiry_date().cmp(b.expiry_date()));
        sorted
    }

    /// How many items are urgent relative to the injected instant.
    pub fn expiring_soon_count(&self, now: DateTime<Utc>) -> usize {
        self.items
            .iter()
            .filter(|item| item.is_expiring_soon(now))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn item(name: &str, expiry: &str) -> InventoryItem {
        InventoryItem::new(name, "Jan 01, 2025", expiry).unwrap()
    }

    #[test]
    fn remove_then_undo_restores_the_item() {
        let mut pantry = Pantry::new();
        let milk = item("Milk", "Jan 08, 2025");
        let id = milk.id();
        pantry.add(milk);

        let removed_name = pantry.remove(id).unwrap().name().to_owned();
        assert_eq!(removed_name, "Milk");
        assert!(pantry.is_empty());

        let restored = pantry.undo_remove().unwrap();
        assert_eq!(restored.id(), id);
        assert_eq!(pantry.len(), 1);
    }

    #[test]
    fn undo_is_single_level() {
        let mut pantry = Pantry::new();
        let a = item("Milk", "Jan 08, 2025");
        let b = item("Eggs", "Jan 09, 2025");
        let (id_a, id_b) = (a.id(), b.id());
        pantry.add(a);
        pantry.add(b);

        pantry.remove(id_a).unwrap();
        pantry.remove(id_b).unwrap();

        // Only the most recent removal is recoverable, exactly once.
        assert_eq!(pantry.undo_remove().unwrap().id(), id_b);
        assert!(pantry.undo_remove().is_none());
        assert_eq!(pantry.len(), 1);
    }

    #[test]
    fn removing_unknown_id_is_reported() {
        let mut pantry = Pantry::new();
        let stray = item("Milk", "Jan 08, 2025");
        let err = pantry.remove(stray.id()).unwrap_err();
        assert_eq!(err, DomainError::NotFound);
    }

    #[test]
    fn expiring_count_uses_the_injected_instant() {
        let now = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let mut pantry = Pantry::new();
        pantry.add(item("Milk", "Jan 02, 2025"));
        pantry.add(item("Yogurt", "Dec 30, 2024"));
        pantry.add(item("Rice", "Jun 30, 2025"));
        pantry.add(item("Eggs", "someday"));

        assert_eq!(pantry.expiring_soon_count(now), 2);
    }

    #[test]
    fn listing_is_ordered_by_expiry_text() {
        let mut pantry = Pantry::new();
        pantry.add(item("Rice", "Jun 30, 2025"));
        pantry.add(item("Milk", "Jan 08, 2025"));

        let ordered = pantry.items_by_expiry();
        assert_eq!(ordered[0].name(), "Milk");
        assert_eq!(ordered[1].name(), "Rice");
    }
}
