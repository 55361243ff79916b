//! Authentication result types
//!
//! Defines result structures returned by authentication operations.

use crate::namespace::TenantId;

/// Proof of a successful login.
///
/// Every storage operation takes one of these; the tenant on it decides
/// which namespace the operation runs in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub username: String,
    pub tenant: Option<TenantId>,
}
