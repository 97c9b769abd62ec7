use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stockline_catalog::Product;
use stockline_core::{DomainError, DomainResult};

/// One (product, quantity) pairing held in a session's cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product: Product,
    /// Always positive; enforced on every mutation.
    pub quantity: i32,
}

/// In-process, single-session selection state.
///
/// Holds at most one line per product identifier, in insertion order. Not
/// internally synchronized: one cart instance belongs to one session and is
/// passed by reference into the services for the duration of a call. No
/// stock checks happen here; that is the inventory service's job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of line quantities.
    pub fn total_quantity(&self) -> i32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Add `quantity` of `product`, merging into an existing line for the
    /// same product identifier.
    ///
    /// Fails with `InvalidArgument` when the product carries no assigned
    /// catalog identifier or when `quantity <= 0`; the cart is left
    /// untouched on failure.
    pub fn add_item(&mut self, product: Product, quantity: i32) -> DomainResult<()> {
        if !product.id.is_assigned() {
            return Err(DomainError::invalid_argument(
                "product must carry an assigned catalog identifier",
            ));
        }
        if quantity <= 0 {
            return Err(DomainError::invalid_argument("quantity must be positive"));
        }

        match self
            .lines
            .iter_mut()
            .find(|line| line.product.id == product.id)
        {
            Some(line) => line.quantity += quantity,
            None => self.lines.push(CartLine { product, quantity }),
        }
        Ok(())
    }

    /// Remove the line matching this product's identifier; no-op when absent.
    pub fn remove_line(&mut self, product: &Product) {
        self.lines.retain(|line| line.product.id != product.id);
    }

    /// Weighted average unit price across all lines: Σ(price×qty)/Σ(qty).
    ///
    /// Zero for an empty cart. Exact decimal division; no truncation.
    pub fn average_value(&self) -> Decimal {
        let total_quantity = self.total_quantity();
        if total_quantity == 0 {
            return Decimal::ZERO;
        }

        let total_value: Decimal = self
            .lines
            .iter()
            .map(|line| line.product.price * Decimal::from(line.quantity))
            .sum();
        total_value / Decimal::from(total_quantity)
    }

    /// Empty the line set; used after a successful checkout.
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}
