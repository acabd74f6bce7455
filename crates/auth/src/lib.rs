//! `custodesk-auth` — shared-secret credential checking.
//!
//! This crate is intentionally decoupled from HTTP: it knows nothing about
//! headers or status codes, only about a configured secret and a presented
//! credential. The transport layer decides how rejection variants map onto
//! responses.

pub mod credential;

pub use credential::{ApiKey, CredentialError, CredentialValidator, StaticKeyValidator};
