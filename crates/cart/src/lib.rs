//! Session cart domain module.
//!
//! This crate contains the in-process cart aggregate: pure selection state,
//! no IO and no storage. Lifetime equals one user session.

pub mod cart;

pub use cart::{Cart, CartLine};
