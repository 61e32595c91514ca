use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use pantrykit_core::{DomainError, DomainResult, EntityId};

use crate::expiry;

/// Inventory item identifier, minted at creation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InventoryItemId(pub EntityId);

impl InventoryItemId {
    pub fn new(id: EntityId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for InventoryItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// A pantry inventory item.
///
/// Immutable once created except for deletion. Both dates are stored as text
/// in the fixed display format (`"Jan 05, 2025"`); the expiry date is used
/// solely to derive the "expiring soon" flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    id: InventoryItemId,
    name: String,
    purchase_date: String,
    expiry_date: String,
    quantity: u32,
}

impl InventoryItem {
    /// Create an item with a freshly minted id and quantity 1.
    pub fn new(
        name: impl Into<String>,
        purchase_date: impl Into<String>,
        expiry_date: impl Into<String>,
    ) -> DomainResult<Self> {
        let name = name.into();
        let purchase_date = purchase_date.into();
        let expiry_date = expiry_date.into();

        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if purchase_date.trim().is_empty() {
            return Err(DomainError::validation("purchase date cannot be empty"));
        }
        if expiry_date.trim().is_empty() {
            return Err(DomainError::validation("expiry date cannot be empty"));
        }

        Ok(Self {
            id: InventoryItemId::new(EntityId::new()),
            name,
            purchase_date,
            expiry_date,
            quantity: 1,
        })
    }

    /// Replace the default quantity of 1. Quantity must stay positive.
    pub fn with_quantity(mut self, quantity: u32) -> DomainResult<Self> {
        if quantity == 0 {
            return Err(DomainError::validation("quantity must be positive"));
        }
        self.quantity = quantity;
        Ok(self)
    }

    pub fn id(&self) -> InventoryItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn purchase_date(&self) -> &str {
        &self.purchase_date
    }

    pub fn expiry_date(&self) -> &str {
        &self.expiry_date
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Whether this item expires today, tomorrow, or has already expired,
    /// relative to the injected instant.
    pub fn is_expiring_soon(&self, now: DateTime<Utc>) -> bool {
        expiry::is_expiring_soon(&self.expiry_date, now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn new_item_defaults_to_quantity_one() {
        let item = InventoryItem::new("Milk", "Jan 01, 2025", "Jan 08, 2025").unwrap();
        assert_eq!(item.quantity(), 1);
        assert_eq!(item.name(), "Milk");
    }

    #[test]
    fn blank_name_is_rejected() {
        let err = InventoryItem::new("   ", "Jan 01, 2025", "Jan 08, 2025").unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn blank_dates_are_rejected() {
        assert!(InventoryItem::new("Milk", "", "Jan 08, 2025").is_err());
        assert!(InventoryItem::new("Milk", "Jan 01, 2025", "").is_err());
    }

    #[test]
    fn zero_quantity_is_rejected() {
        let item = InventoryItem::new("Milk", "Jan 01, 2025", "Jan 08, 2025").unwrap();
        assert!(item.with_quantity(0).is_err());
    }

    #[test]
    fn items_get_distinct_ids() {
        let a = InventoryItem::new("Milk", "Jan 01, 2025", "Jan 08, 2025").unwrap();
        let b = InventoryItem::new("Milk", "Jan 01, 2025", "Jan 08, 2025").unwrap();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn expiry_flag_follows_the_classifier() {
        let now = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let urgent = InventoryItem::new("Milk", "Dec 28, 2024", "Jan 02, 2025").unwrap();
        let fine = InventoryItem::new("Rice", "Dec 28, 2024", "Jun 30, 2025").unwrap();
        let garbled = InventoryItem::new("Eggs", "Dec 28, 2024", "someday").unwrap();

        assert!(urgent.is_expiring_soon(now));
        assert!(!fine.is_expiring_soon(now));
        assert!(!garbled.is_expiring_soon(now));
    }
}
