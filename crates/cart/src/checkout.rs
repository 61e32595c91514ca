use serde::{Deserialize, Serialize};
use tracing::info;

use pantrykit_core::{DomainError, DomainResult};

use crate::pricing::{CartLineItem, OrderTotals, compute_totals};

/// A saved shipping address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub label: String,
    pub street: String,
    pub city: String,
    pub recipient: String,
}

impl Address {
    pub fn new(
        label: impl Into<String>,
        street: impl Into<String>,
        city: impl Into<String>,
        recipient: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            street: street.into(),
            city: city.into(),
            recipient: recipient.into(),
        }
    }
}

/// A saved payment method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethod {
    pub kind: String,
    pub details: String,
    pub provider: String,
}

impl PaymentMethod {
    pub fn new(
        kind: impl Into<String>,
        details: impl Into<String>,
        provider: impl Into<String>,
    ) -> Self {
        Self {
            kind: kind.into(),
            details: details.into(),
            provider: provider.into(),
        }
    }
}

/// Caller-owned checkout selection state.
///
/// The address/payment choice lives on this draft, owned by whoever drives
/// the checkout flow, rather than in process-wide shared state. Selections
/// are indices into the draft's own lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutDraft {
    addresses: Vec<Address>,
    payment_methods: Vec<PaymentMethod>,
    selected_address: Option<usize>,
    selected_payment: Option<usize>,
}

/// Snapshot of a successfully placed order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderConfirmation {
    pub address: Address,
    pub payment: PaymentMethod,
    pub totals: OrderTotals,
}

impl CheckoutDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// A draft seeded with the demo profile's saved addresses and payment
    /// methods.
    pub fn with_saved_profiles() -> Self {
        let mut draft = Self::new();
        draft.add_address(Address::new(
            "Home",
            "123 Main St, Apt 4B",
            "New York, NY 10001",
            "John Doe",
        ));
        draft.add_address(Address::new(
            "Work",
            "456 Business Ave, Floor 12",
            "New York, NY 10005",
            "John Doe",
        ));
        draft.add_payment_method(PaymentMethod::new(
            "Credit Card",
            "\u{2022}\u{2022}\u{2022}\u{2022} \u{2022}\u{2022}\u{2022}\u{2022} \u{2022}\u{2022}\u{2022}\u{2022} 4242",
            "VISA",
        ));
        draft.add_payment_method(PaymentMethod::new("PayPal", "user@example.com", "PayPal"));
        draft
    }

    pub fn addresses(&self) -> &[Address] {
        &self.addresses
    }

    pub fn payment_methods(&self) -> &[PaymentMethod] {
        &self.payment_methods
    }

    pub fn add_address(&mut self, address: Address) {
        self.addresses.push(address);
    }

    pub fn add_payment_method(&mut self, payment: PaymentMethod) {
        self.payment_methods.push(payment);
    }

    pub fn select_address(&mut self, index: usize) -> DomainResult<()> {
        if index >= self.addresses.len() {
            return Err(DomainError::validation(format!(
                "address index {index} out of range"
            )));
        }
        self.selected_address = Some(index);
        Ok(())
    }

    pub fn select_payment(&mut self, index: usize) -> DomainResult<()> {
        if index >= self.payment_methods.len() {
            return Err(DomainError::validation(format!(
                "payment index {index} out of range"
            )));
        }
        self.selected_payment = Some(index);
        Ok(())
    }

    pub fn selected_address(&self) -> Option<&Address> {
        self.selected_address.map(|i| &self.addresses[i])
    }

    pub fn selected_payment(&self) -> Option<&PaymentMethod> {
        self.selected_payment.map(|i| &self.payment_methods[i])
    }

    /// Both an address and a payment method have been chosen.
    pub fn is_ready(&self) -> bool {
        self.selected_address.is_some() && self.selected_payment.is_some()
    }

    /// Place the order for the given cart lines.
    ///
    /// Requires a non-empty cart and both selections. On success returns a
    /// confirmation snapshotting the chosen address/payment and the totals
    /// computed at this instant.
    pub fn place_order(&self, lines: &[CartLineItem]) -> DomainResult<OrderConfirmation> {
        if lines.is_empty() {
            return Err(DomainError::validation("cannot place an order for an empty cart"));
        }

        let address = self
            .selected_address()
            .ok_or_else(|| DomainError::invariant("no shipping address selected"))?;
        let payment = self
            .selected_payment()
            .ok_or_else(|| DomainError::invariant("no payment method selected"))?;

        let totals = compute_totals(lines);
        info!(
            grand_total = totals.grand_total,
            address = %address.label,
            payment = %payment.kind,
            "order placed"
        );

        Ok(OrderConfirmation {
            address: address.clone(),
            payment: payment.clone(),
            totals,
        })
    }
}
