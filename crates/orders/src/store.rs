use std::sync::Arc;

use stockline_core::OrderId;

use crate::order::Order;

/// Order persistence port. Identifier-based throughout; no positional
/// lookups here, unlike the catalog side.
pub trait OrderStore: Send + Sync {
    /// Persist a new order, assigning its identifier. Returns the stored order.
    fn insert(&self, order: Order) -> Order;

    /// Lookup by stored identifier.
    fn get(&self, id: OrderId) -> Option<Order>;

    /// Full listing in insertion order.
    fn list(&self) -> Vec<Order>;
}

impl<S> OrderStore for Arc<S>
where
    S: OrderStore + ?Sized,
{
    fn insert(&self, order: Order) -> Order {
        (**self).insert(order)
    }

    fn get(&self, id: OrderId) -> Option<Order> {
        (**self).get(id)
    }

    fn list(&self) -> Vec<Order> {
        (**self).list()
    }
}
