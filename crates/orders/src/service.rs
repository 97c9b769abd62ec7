use chrono::Utc;
use tracing::{info, warn};

use stockline_cart::Cart;
use stockline_catalog::CatalogStore;
use stockline_core::{DomainResult, MessageTable, OrderId};
use stockline_inventory::InventoryService;

use crate::order::{CheckoutValidationCode, Order, OrderDetails, OrderLine};
use crate::store::OrderStore;

/// Result of a checkout attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// The order was persisted, stock decremented, and the cart cleared.
    Placed(Order),
    /// Business validation failed; localized codes for the caller to
    /// surface. Cart and catalog are untouched.
    Rejected(Vec<String>),
}

/// Orchestrates checkout: validate, persist, decrement stock, clear cart.
#[derive(Debug)]
pub struct OrderService<O, S, M> {
    orders: O,
    inventory: InventoryService<S, M>,
    messages: M,
}

impl<O, S, M> OrderService<O, S, M>
where
    O: OrderStore,
    S: CatalogStore,
    M: MessageTable,
{
    pub fn new(orders: O, inventory: InventoryService<S, M>, messages: M) -> Self {
        Self {
            orders,
            inventory,
            messages,
        }
    }

    /// Convert the session cart plus `details` into a persisted order.
    ///
    /// An empty cart or blank required fields reject the checkout with
    /// localized codes (data, not an error). On the success path the order
    /// is persisted **before** the stock decrement; a decrement failure
    /// propagates with the order already committed. That composite is not
    /// atomic — a known limitation of the observed behavior, kept as is.
    pub fn checkout(
        &self,
        cart: &mut Cart,
        details: &OrderDetails,
    ) -> DomainResult<CheckoutOutcome> {
        let mut codes = Vec::new();
        if cart.is_empty() {
            codes.push(CheckoutValidationCode::CartEmpty);
        }
        codes.extend(details.validate());
        if !codes.is_empty() {
            warn!(code_count = codes.len(), "checkout rejected");
            return Ok(CheckoutOutcome::Rejected(
                codes
                    .iter()
                    .map(|code| self.messages.resolve(code.key()))
                    .collect(),
            ));
        }

        let order = self.orders.insert(Order {
            id: OrderId::unassigned(),
            name: details.name.clone(),
            address: details.address.clone(),
            city: details.city.clone(),
            zip: details.zip.clone(),
            country: details.country.clone(),
            placed_at: Utc::now(),
            lines: cart
                .lines()
                .iter()
                .map(|line| OrderLine {
                    product: line.product.clone(),
                    quantity: line.quantity,
                })
                .collect(),
        });

        self.inventory.apply_cart_to_stock(cart)?;
        cart.clear();
        info!(order_id = %order.id, line_count = order.lines.len(), "order placed");
        Ok(CheckoutOutcome::Placed(order))
    }

    /// Identifier-based read; `None` when absent.
    pub fn order(&self, id: OrderId) -> Option<Order> {
        self.orders.get(id)
    }

    /// All persisted orders in store order.
    pub fn orders(&self) -> Vec<Order> {
        self.orders.list()
    }

    /// Signal checkout completion to the presentation layer by emptying the
    /// session cart. Idempotent on an already-empty cart.
    pub fn complete_checkout(&self, cart: &mut Cart) {
        cart.clear();
    }
}
