use serde::{Deserialize, Serialize};

/// Catalog item identifier.
///
/// Catalog rows carry opaque string ids assigned by the hosted backend, so
/// this is a string newtype rather than a UUID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CatalogItemId(String);

impl CatalogItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for CatalogItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<&str> for CatalogItemId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

/// A purchasable catalog item.
///
/// `unit_price` is a display-precision currency amount (two fractional digits
/// of display precision; no rounding is applied in computations).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: CatalogItemId,
    pub name: String,
    pub unit_price: f64,
    pub image_url: String,
}

impl CatalogItem {
    pub fn new(
        id: impl Into<CatalogItemId>,
        name: impl Into<String>,
        unit_price: f64,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            unit_price,
            image_url: image_url.into(),
        }
    }
}

impl From<String> for CatalogItemId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Items seeded into a fresh cart.
pub fn starter_catalog() -> Vec<CatalogItem> {
    vec![
        CatalogItem::new(
            "1",
            "Organic Apples",
            3.99,
            "https://images.unsplash.com/photo-1568702846914-96b305d2aaeb?w=500",
        ),
        CatalogItem::new(
            "2",
            "Almond Milk",
            4.49,
            "https://images.unsplash.com/photo-1550583724-b2692b85b150?w=500",
        ),
    ]
}

/// "You might also like" candidates.
pub fn suggested_items() -> Vec<CatalogItem> {
    vec![
        CatalogItem::new(
            "3",
            "Organic Tomatoes",
            3.99,
            "https://images.unsplash.com/photo-1594282418426-62d45d4a3793?w=500",
        ),
        CatalogItem::new(
            "4",
            "Fresh Avocados",
            2.49,
            "https://images.unsplash.com/photo-1601493700631-2b16ec4b4716?w=500",
        ),
    ]
}

/// Filter suggestion candidates down to those not already in the cart.
pub fn suggestions_for<'a>(
    candidates: &'a [CatalogItem],
    cart_ids: &[CatalogItemId],
) -> Vec<&'a CatalogItem> {
    candidates
        .iter()
        .filter(|candidate| !cart_ids.contains(&candidate.id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggestions_exclude_items_already_in_cart() {
        let candidates = suggested_items();
        let cart_ids = vec![CatalogItemId::from("3")];

        let remaining = suggestions_for(&candidates, &cart_ids);
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].name, "Fresh Avocados");
    }

    #[test]
    fn suggestions_unchanged_for_empty_cart() {
        let candidates = suggested_items();
        let remaining = suggestions_for(&candidates, &[]);
        assert_eq!(remaining.len(), candidates.len());
    }
}
