use std::sync::RwLock;

use stockline_core::OrderId;
use stockline_orders::{Order, OrderStore};

/// In-memory order adapter for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryOrderStore {
    rows: RwLock<Vec<Order>>,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OrderStore for InMemoryOrderStore {
    fn insert(&self, mut order: Order) -> Order {
        if let Ok(mut rows) = self.rows.write() {
            let max = rows.iter().map(|o| o.id.get()).max().unwrap_or(0);
            order.id = OrderId::new(max + 1);
            rows.push(order.clone());
        }
        order
    }

    fn get(&self, id: OrderId) -> Option<Order> {
        let rows = self.rows.read().ok()?;
        rows.iter().find(|o| o.id == id).cloned()
    }

    fn list(&self) -> Vec<Order> {
        match self.rows.read() {
            Ok(rows) => rows.clone(),
            Err(_) => vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn draft(name: &str) -> Order {
        Order {
            id: OrderId::unassigned(),
            name: name.to_owned(),
            address: String::new(),
            city: String::new(),
            zip: String::new(),
            country: String::new(),
            placed_at: Utc::now(),
            lines: vec![],
        }
    }

    #[test]
    fn insert_assigns_identifiers_and_get_finds_them() {
        let store = InMemoryOrderStore::new();
        let one = store.insert(draft("one"));
        let two = store.insert(draft("two"));

        assert_eq!(one.id, OrderId::new(1));
        assert_eq!(store.get(two.id).unwrap().name, "two");
        assert!(store.get(OrderId::new(9)).is_none());
    }

    #[test]
    fn list_returns_all_orders_in_insertion_order() {
        let store = InMemoryOrderStore::new();
        for name in ["one", "two", "three", "four"] {
            store.insert(draft(name));
        }

        let listed = store.list();
        assert_eq!(listed.len(), 4);
        assert!(listed.iter().any(|o| o.name == "three"));
    }
}
