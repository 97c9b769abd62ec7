use tracing::{debug, info};

use stockline_cart::Cart;
use stockline_catalog::{CatalogStore, Product, ProductInput};
use stockline_core::{DomainError, DomainResult, MessageTable};

/// Validates product input and applies cart quantities against stored stock.
///
/// Bridges the form representation and the persisted record. Public lookups
/// take a **positional id**: a 1-based rank into the catalog's current full
/// listing, not the store-assigned identifier.
#[derive(Debug)]
pub struct InventoryService<S, M> {
    store: S,
    messages: M,
}

impl<S, M> InventoryService<S, M>
where
    S: CatalogStore,
    M: MessageTable,
{
    pub fn new(store: S, messages: M) -> Self {
        Self { store, messages }
    }

    /// Full catalog listing in store order.
    pub fn all_products(&self) -> Vec<Product> {
        self.store.list()
    }

    /// Full catalog listing projected into form representations.
    pub fn all_views(&self) -> Vec<ProductInput> {
        self.store.list().iter().map(ProductInput::from).collect()
    }

    /// Resolve the `rank`-th element of the current catalog listing.
    ///
    /// This positional resolution (rather than identifier lookup) is kept
    /// for compatibility with the existing callers; it is deliberately
    /// isolated here so a future revision can swap in identifier-based
    /// lookup without touching call sites. Unstable under concurrent
    /// catalog changes.
    fn at_position(&self, rank: i32) -> DomainResult<Product> {
        let listing = self.store.list();
        if rank <= 0 || rank as usize > listing.len() {
            return Err(DomainError::IndexOutOfRange);
        }
        Ok(listing[(rank - 1) as usize].clone())
    }

    /// Fetch the `rank`-th product of the listing (1-based).
    pub fn product_by_position(&self, rank: i32) -> DomainResult<Product> {
        self.at_position(rank)
    }

    /// Fetch the `rank`-th product projected into its form representation.
    pub fn view_by_position(&self, rank: i32) -> DomainResult<ProductInput> {
        Ok(ProductInput::from(&self.at_position(rank)?))
    }

    /// Delete the `rank`-th product of the listing and drop any cart line
    /// referencing it, keeping the session consistent with the catalog.
    pub fn delete_by_position(&self, rank: i32, cart: &mut Cart) -> DomainResult<Product> {
        let product = self.at_position(rank)?;
        self.store.delete(product.id);
        cart.remove_line(&product);
        info!(product_id = %product.id, "product removed from catalog");
        Ok(product)
    }

    /// Validate `input` and upsert it into the catalog.
    ///
    /// When any field check fails, the localized code list is returned and
    /// nothing is written. Otherwise the input is converted to a record and
    /// inserted (store assigns the identifier) or, when its identifier
    /// matches an existing record, updated in place.
    pub fn save_product(&self, input: &ProductInput) -> Result<Product, Vec<String>> {
        let record = input.to_product().map_err(|codes| {
            codes
                .iter()
                .map(|code| self.messages.resolve(code.key()))
                .collect::<Vec<_>>()
        })?;

        let exists = record.id.is_assigned() && self.store.get(record.id).is_some();
        let stored = if exists {
            self.store.update(record.clone());
            record
        } else {
            self.store.insert(record)
        };
        info!(product_id = %stored.id, updated = exists, "product saved");
        Ok(stored)
    }

    /// Decrement stored stock by every line quantity in the session cart.
    ///
    /// Each line is validated then applied independently; when a later line
    /// exceeds its product's stock, earlier lines have already been
    /// committed. Fails with `InvalidOperation` before mutating the
    /// offending product, so no stock ever drops below zero.
    pub fn apply_cart_to_stock(&self, cart: &Cart) -> DomainResult<()> {
        for line in cart.lines() {
            let mut product = self
                .store
                .get(line.product.id)
                .ok_or(DomainError::NotFound)?;
            if line.quantity > product.quantity {
                return Err(DomainError::invalid_operation(
                    "quantity to remove should be within the number of products available",
                ));
            }
            product.quantity -= line.quantity;
            debug!(
                product_id = %product.id,
                removed = line.quantity,
                remaining = product.quantity,
                "stock decremented"
            );
            self.store.update(product);
        }
        Ok(())
    }
}
