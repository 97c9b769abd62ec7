use std::sync::Arc;

use stockline_core::ProductId;

use crate::product::Product;

/// Catalog persistence port.
///
/// `list` must return a deterministic ordering (insertion order); the
/// inventory service's positional lookups lean on it. Identifiers are
/// store-assigned and distinct from positional ids.
pub trait CatalogStore: Send + Sync {
    /// Full listing in insertion order.
    fn list(&self) -> Vec<Product>;

    /// Lookup by stored identifier.
    fn get(&self, id: ProductId) -> Option<Product>;

    /// Insert a new record, assigning its identifier. Returns the stored record.
    fn insert(&self, product: Product) -> Product;

    /// Replace the record with a matching identifier; no-op when absent.
    fn update(&self, product: Product);

    /// Remove the record with this identifier; no-op when absent.
    fn delete(&self, id: ProductId);
}

impl<S> CatalogStore for Arc<S>
where
    S: CatalogStore + ?Sized,
{
    fn list(&self) -> Vec<Product> {
        (**self).list()
    }

    fn get(&self, id: ProductId) -> Option<Product> {
        (**self).get(id)
    }

    fn insert(&self, product: Product) -> Product {
        (**self).insert(product)
    }

    fn update(&self, product: Product) {
        (**self).update(product)
    }

    fn delete(&self, id: ProductId) {
        (**self).delete(id)
    }
}
