//! `custodesk-core` — domain foundation for the customer records service.
//!
//! This crate contains the customer record model, the data-access error
//! taxonomy, and the `CustomerStore` trait the HTTP layer programs against.
//! It carries no HTTP or storage concerns.

pub mod customer;
pub mod error;
pub mod store;

pub use customer::{Customer, CustomerId};
pub use error::{DataError, DataResult};
pub use store::CustomerStore;
