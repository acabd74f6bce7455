//! In-memory customer store for dev and tests.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde_json::{Map, Value};
use uuid::Uuid;

use custodesk_core::{Customer, CustomerId, CustomerStore, DataError, DataResult};

/// Seed records loaded at startup and restored by `reset_customers`.
fn seed_customers() -> BTreeMap<CustomerId, Customer> {
    fn record(id: i64, name: &str, email: &str, city: &str) -> (CustomerId, Customer) {
        let mut fields = Map::new();
        fields.insert("name".into(), Value::String(name.into()));
        fields.insert("email".into(), Value::String(email.into()));
        fields.insert("city".into(), Value::String(city.into()));
        let id = CustomerId::new(id);
        (
            id,
            Customer {
                id: Some(id),
                internal_id: Some(Uuid::now_v7()),
                fields,
            },
        )
    }

    BTreeMap::from([
        record(1, "Ann Aardvark", "ann@aardvark.com", "Anntown"),
        record(2, "Bob Beaver", "bob@beaver.com", "Bobtown"),
        record(3, "Carol Cheetah", "carol@cheetah.com", "Caroltown"),
        record(4, "Dave Dingo", "dave@dingo.com", "Davetown"),
    ])
}

/// `CustomerStore` backed by an in-process map.
///
/// Numeric ids are assigned monotonically above the current maximum; the
/// internal `_id` is a fresh UUIDv7 per insert and survives updates.
pub struct MemoryCustomerStore {
    customers: RwLock<BTreeMap<CustomerId, Customer>>,
}

impl MemoryCustomerStore {
    pub fn new() -> Self {
        Self {
            customers: RwLock::new(seed_customers()),
        }
    }

    pub fn arc() -> Arc<Self> {
        Arc::new(Self::new())
    }

    fn read(&self) -> DataResult<RwLockReadGuard<'_, BTreeMap<CustomerId, Customer>>> {
        self.customers
            .read()
            .map_err(|_| DataError::storage("customer table lock poisoned"))
    }

    fn write(&self) -> DataResult<RwLockWriteGuard<'_, BTreeMap<CustomerId, Customer>>> {
        self.customers
            .write()
            .map_err(|_| DataError::storage("customer table lock poisoned"))
    }
}

impl Default for MemoryCustomerStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CustomerStore for MemoryCustomerStore {
    fn get_customers(&self) -> DataResult<Vec<Customer>> {
        Ok(self.read()?.values().cloned().collect())
    }

    fn get_customer_by_id(&self, id: CustomerId) -> DataResult<Customer> {
        self.read()?.get(&id).cloned().ok_or(DataError::NotFound)
    }

    fn reset_customers(&self) -> DataResult<String> {
        let mut customers = self.write()?;
        *customers = seed_customers();
        Ok(format!("customer data reset to {} records", customers.len()))
    }

    fn add_customer(&self, mut record: Customer) -> DataResult<Customer> {
        let mut customers = self.write()?;
        let id = match record.id {
            Some(id) if customers.contains_key(&id) => {
                return Err(DataError::rejected(format!("customer {id} already exists")));
            }
            Some(id) => id,
            None => match customers.keys().next_back() {
                None => CustomerId::new(1),
                Some(max) => max
                    .as_i64()
                    .checked_add(1)
                    .map(CustomerId::new)
                    .ok_or_else(|| DataError::rejected("customer ids exhausted"))?,
            },
        };
        record.id = Some(id);
        record.internal_id = Some(Uuid::now_v7());
        customers.insert(id, record.clone());
        Ok(record)
    }

    fn update_customer(&self, mut record: Customer) -> DataResult<String> {
        let id = record
            .id
            .ok_or_else(|| DataError::rejected("customer record has no id"))?;
        let mut customers = self.write()?;
        let Some(existing) = customers.get(&id) else {
            return Err(DataError::rejected(format!("no customer with id {id}")));
        };
        // The internal id is ours, not the client's; carry it across.
        record.internal_id = existing.internal_id;
        customers.insert(id, record);
        Ok(format!("customer {id} updated"))
    }

    fn delete_customer_by_id(&self, id: CustomerId) -> DataResult<String> {
        match self.write()?.remove(&id) {
            Some(_) => Ok(format!("customer {id} deleted")),
            None => Err(DataError::NotFound),
        }
    }
}
