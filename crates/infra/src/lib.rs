//! Infrastructure layer: store adapters and cross-crate wiring.
//!
//! The in-memory adapters back the service crates in tests and development;
//! a persistent engine would implement the same ports.

pub mod catalog_store;
pub mod order_store;


pub use catalog_store::InMemoryCatalogStore;
pub use order_store::InMemoryOrderStore;
