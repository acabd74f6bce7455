//! `custodesk-infra` — data-access implementations.
//!
//! The customer collection lives behind the `CustomerStore` trait from
//! `custodesk-core`; this crate provides the in-memory implementation used
//! in dev and tests. A database-backed store would slot in behind the same
//! trait.

pub mod memory;

pub use memory::MemoryCustomerStore;
