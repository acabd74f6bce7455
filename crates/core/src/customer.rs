//! Customer record model.
//!
//! The service treats most customer fields as opaque: clients may send any
//! JSON object and the extra fields travel through unchanged. Only the two
//! identifiers are modeled explicitly — the numeric application id (`id`)
//! and the store-assigned internal id (`_id`).

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::error::DataError;

/// Numeric application-level customer identifier.
///
/// Path parameters parse into this type explicitly; a non-numeric id is a
/// parse error, never a silently propagated bogus value.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(i64);

impl CustomerId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<i64> for CustomerId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl FromStr for CustomerId {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s
            .parse::<i64>()
            .map_err(|e| DataError::rejected(format!("invalid customer id: {e}")))?;
        Ok(Self(id))
    }
}

/// A customer record.
///
/// `id` is the numeric identifier clients address records by. `internal_id`
/// (`_id` on the wire) is assigned by the store on creation and must never be
/// taken from a client on update. Everything else lives in `fields`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<CustomerId>,

    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub internal_id: Option<Uuid>,

    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Customer {
    /// Parse a customer out of a client-supplied JSON body.
    ///
    /// The body must be a non-empty JSON object; anything else counts as a
    /// missing body. A client-supplied `_id` that is not a UUID is rejected
    /// here (on update it would be stripped anyway, but create keeps the
    /// payload honest).
    pub fn from_body(body: &Value) -> Result<Self, DataError> {
        match body.as_object() {
            Some(obj) if !obj.is_empty() => {}
            _ => return Err(DataError::rejected("missing request body")),
        }
        serde_json::from_value(body.clone())
            .map_err(|e| DataError::rejected(format!("malformed customer record: {e}")))
    }

    /// Rebind the record to a path-derived id, discarding any client-supplied
    /// internal identifier. Update handlers call this before forwarding so a
    /// spoofed `_id` never reaches the store.
    pub fn rebind(mut self, id: CustomerId) -> Self {
        self.internal_id = None;
        self.id = Some(id);
        self
    }
}
