use std::sync::RwLock;

use stockline_catalog::{CatalogStore, Product};
use stockline_core::ProductId;

/// In-memory catalog adapter.
///
/// Intended for tests/dev. Listing order is insertion order, which keeps
/// positional lookups deterministic. Identifiers are assigned monotonically
/// from the current maximum.
#[derive(Debug, Default)]
pub struct InMemoryCatalogStore {
    rows: RwLock<Vec<Product>>,
}

impl InMemoryCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(rows: &[Product]) -> ProductId {
        let max = rows.iter().map(|p| p.id.get()).max().unwrap_or(0);
        ProductId::new(max + 1)
    }
}

impl CatalogStore for InMemoryCatalogStore {
    fn list(&self) -> Vec<Product> {
        match self.rows.read() {
            Ok(rows) => rows.clone(),
            Err(_) => vec![],
        }
    }

    fn get(&self, id: ProductId) -> Option<Product> {
        let rows = self.rows.read().ok()?;
        rows.iter().find(|p| p.id == id).cloned()
    }

    fn insert(&self, mut product: Product) -> Product {
        if let Ok(mut rows) = self.rows.write() {
            product.id = Self::next_id(&rows);
            rows.push(product.clone());
        }
        product
    }

    fn update(&self, product: Product) {
        if let Ok(mut rows) = self.rows.write() {
            if let Some(slot) = rows.iter_mut().find(|p| p.id == product.id) {
                *slot = product;
            }
        }
    }

    fn delete(&self, id: ProductId) {
        if let Ok(mut rows) = self.rows.write() {
            rows.retain(|p| p.id != id);
        }
    }
}
