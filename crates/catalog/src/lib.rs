//! Catalog domain module.
//!
//! This crate contains the persisted product record, the untrusted form
//! input and its field validation, and the catalog persistence port. No IO,
//! no HTTP, no storage.

pub mod product;
pub mod store;

pub use product::{Product, ProductInput, ProductValidationCode};
pub use store::CatalogStore;
