//! Inventory service module.
//!
//! This crate contains the stock-quantity rules: product input validation
//! orchestration, positional catalog lookups, and the cart-to-stock
//! application. All persistence goes through the catalog store port.

pub mod service;

pub use service::InventoryService;
