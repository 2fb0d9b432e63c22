//! In-memory customer directory keyed by email.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use hotelres_core::{DomainError, DomainResult, Email};

use crate::customer::Customer;

/// Unique set of customers, keyed by email.
///
/// One instance per application; share it through `Arc` rather than a global.
#[derive(Debug, Default)]
pub struct CustomerDirectory {
    inner: RwLock<HashMap<Email, Arc<Customer>>>,
}

impl CustomerDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and register a new customer.
    ///
    /// Uniqueness is by email: a second registration under the same address
    /// fails with `CustomerAlreadyExists` even if the names differ.
    pub fn add_customer(
        &self,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> DomainResult<Arc<Customer>> {
        let customer = Customer::new(first_name, last_name, email)?;

        let mut customers = self.write();
        if customers.contains_key(customer.email()) {
            tracing::warn!(email = %customer.email(), "customer already exists");
            return Err(DomainError::customer_already_exists(customer.email().as_str()));
        }

        let customer = Arc::new(customer);
        customers.insert(customer.email().clone(), Arc::clone(&customer));
        tracing::info!(email = %customer.email(), "customer added");
        Ok(customer)
    }

    /// Look up a customer by email. Malformed addresses are simply not found.
    pub fn get_customer(&self, email: &str) -> Option<Arc<Customer>> {
        self.read().get(email).cloned()
    }

    /// Snapshot of every registered customer, in no particular order.
    pub fn get_all_customers(&self) -> Vec<Arc<Customer>> {
        self.read().values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // Writers only insert after every check has passed, so a poisoned map is
    // still consistent.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<Email, Arc<Customer>>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<Email, Arc<Customer>>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}
