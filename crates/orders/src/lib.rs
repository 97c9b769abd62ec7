//! Orders domain module.
//!
//! This crate contains the persisted order records, the order persistence
//! port, and the checkout orchestration service.

pub mod order;
pub mod service;
pub mod store;

pub use order::{CheckoutValidationCode, Order, OrderDetails, OrderLine};
pub use service::{CheckoutOutcome, OrderService};
pub use store::OrderStore;
