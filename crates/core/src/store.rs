//! Data-access abstraction for the customer collection.

use crate::customer::{Customer, CustomerId};
use crate::error::DataResult;

/// Customer persistence boundary.
///
/// The HTTP layer owns no customer state; every read and mutation goes
/// through an implementation of this trait. Each operation returns exactly
/// one of a success value or a [`crate::DataError`].
pub trait CustomerStore: Send + Sync {
    /// List every customer.
    fn get_customers(&self) -> DataResult<Vec<Customer>>;

    /// Fetch one customer by numeric id.
    fn get_customer_by_id(&self, id: CustomerId) -> DataResult<Customer>;

    /// Restore the collection to its seed data. Returns a confirmation
    /// message.
    fn reset_customers(&self) -> DataResult<String>;

    /// Insert a new customer. The store assigns the numeric id (when the
    /// record carries none) and the internal `_id`; the stored record is
    /// returned with both populated.
    fn add_customer(&self, record: Customer) -> DataResult<Customer>;

    /// Replace the customer addressed by `record.id`. Returns a confirmation
    /// message. Callers must rebind the record to the path id first.
    fn update_customer(&self, record: Customer) -> DataResult<String>;

    /// Remove one customer by numeric id. Returns a confirmation message.
    fn delete_customer_by_id(&self, id: CustomerId) -> DataResult<String>;
}
