//! The in-memory customer store.
//!
//! An ordered `Vec` behind one `RwLock`. Reads share the lock; every mutation
//! takes it exclusively, so concurrent creates never hand out the same id.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use clap::ValueEnum;
use serde_json::Value;
use tracing::info;

use crate::customer::{self, Customer, CustomerId, CustomerPatch, NewCustomer};

/// How `PUT` treats supplied fields.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum UpdatePolicy {
    /// Replace a field only with a truthy value. `""`, `0` and `false` are
    /// ignored.
    #[default]
    SkipEmpty,
    /// Replace a field whenever it is supplied and not `null`, including `""`.
    Presence,
}

impl UpdatePolicy {
    fn apply(self, slot: &mut Value, value: Option<Value>) {
        match (self, value) {
            (Self::SkipEmpty, Some(v)) if !customer::is_truthy(&v) => {}
            (_, Some(v)) => *slot = v,
            (_, None) => {}
        }
    }
}

/// Ordered collection of customers, owned by the service instance.
#[derive(Debug, Default)]
pub struct CustomerStore {
    records: RwLock<Vec<Customer>>,
    policy: UpdatePolicy,
}

impl CustomerStore {
    /// An empty store.
    pub fn new(policy: UpdatePolicy) -> Self {
        Self::with_records(Vec::new(), policy)
    }

    /// A store holding the five seed records.
    pub fn seeded(policy: UpdatePolicy) -> Self {
        Self::with_records(customer::seed(), policy)
    }

    pub fn with_records(records: Vec<Customer>, policy: UpdatePolicy) -> Self {
        Self { records: RwLock::new(records), policy }
    }

    pub fn policy(&self) -> UpdatePolicy {
        self.policy
    }

    // The vector has no cross-record invariant a panicking writer could break
    // halfway, so a poisoned lock is still safe to use.
    fn read(&self) -> RwLockReadGuard<'_, Vec<Customer>> {
        self.records.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Customer>> {
        self.records.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Every record, in insertion order.
    pub fn list(&self) -> Vec<Customer> {
        self.read().clone()
    }

    pub fn get(&self, id: CustomerId) -> Option<Customer> {
        self.read().iter().find(|c| c.id == id).cloned()
    }

    /// Appends a record whose id is the last record's id plus one (or `1`
    /// when the store is empty).
    pub fn create(&self, new: NewCustomer) -> Customer {
        let mut records = self.write();
        let id = records.last().map_or(CustomerId(1), |last| last.id.next());
        let customer = Customer { id, name: new.name, site: new.site };
        records.push(customer.clone());
        info!(%id, "customer created");
        customer
    }

    /// Applies `patch` to the record with `id` under the store's policy.
    pub fn update(&self, id: CustomerId, patch: CustomerPatch) -> Option<Customer> {
        let mut records = self.write();
        let customer = records.iter_mut().find(|c| c.id == id)?;
        self.policy.apply(&mut customer.name, patch.name);
        self.policy.apply(&mut customer.site, patch.site);
        info!(%id, "customer updated");
        Some(customer.clone())
    }

    /// Removes the record with `id`. Returns whether one was removed.
    pub fn delete(&self, id: CustomerId) -> bool {
        let mut records = self.write();
        match records.iter().position(|c| c.id == id) {
            Some(index) => {
                records.remove(index);
                info!(%id, "customer deleted");
                true
            }
            None => false,
        }
    }
}
