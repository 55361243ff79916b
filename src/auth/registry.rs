//! User registry
//!
//! Read-only credential store seeded when the service is constructed.
//! Accounts are keyed by username and tenant together, so the same username
//! may exist independently under different tenants.

use std::collections::HashMap;

use serde::Deserialize;

use crate::namespace::TenantId;

/// A single account as declared in the service configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct UserAccount {
    pub username: String,
    pub password: String,
    /// Tenant the account belongs to. Absent for accounts in the global
    /// namespace.
    #[serde(default)]
    pub tenant: Option<TenantId>,
}

/// Immutable account store consulted by login validation.
#[derive(Debug, Clone, Default)]
pub struct UserRegistry {
    accounts: HashMap<(String, Option<TenantId>), UserAccount>,
}

impl UserRegistry {
    pub fn new(accounts: impl IntoIterator<Item = UserAccount>) -> Self {
        Self {
            accounts: accounts
                .into_iter()
                .map(|account| ((account.username.clone(), account.tenant.clone()), account))
                .collect(),
        }
    }

    /// Look up the account matching both username and claimed tenant.
    pub fn lookup(&self, username: &str, tenant: Option<&TenantId>) -> Option<&UserAccount> {
        self.accounts.get(&(username.to_string(), tenant.cloned()))
    }

    /// Iterate all registered accounts.
    pub fn accounts(&self) -> impl Iterator<Item = &UserAccount> {
        self.accounts.values()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}
