//! Storage namespaces
//!
//! A namespace is the scope within which display names are unique. Three
//! layouts are selectable: a single flat directory, a shared directory with
//! `<tenant>_` key prefixes, and a per-tenant subdirectory layout that gives
//! tenants real physical scoping.

use serde::Deserialize;

/// Unique tenant identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct TenantId(String);

impl TenantId {
    /// Create new tenant ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the id stays a single path component when embedded in a
    /// physical key. Empty ids and separators are refused, as are `..`
    /// sequences and the bare dot.
    pub fn is_key_safe(&self) -> bool {
        !self.0.is_empty()
            && self.0 != "."
            && !self.0.contains("..")
            && !self.0.contains(['/', '\\'])
    }
}

impl std::fmt::Display for TenantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Namespace layout selected in the service configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamespaceLayout {
    /// One global namespace; physical key == display name.
    Flat,
    /// Shared flat directory, physical key `<tenant>_<display>`. Not a
    /// security boundary: listings walk the whole shared directory, so
    /// objects of other tenants stay visible under their prefixed names.
    TenantPrefix,
    /// Per-tenant subdirectory, physical key `<tenant>/<display>`.
    TenantDirectory,
}

/// A concrete namespace: the configured layout bound to the caller's tenant.
///
/// Invariant: within one namespace, display names are unique. Physical keys
/// are derived from display names and never stored separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Namespace {
    Flat,
    TenantPrefix(TenantId),
    TenantDirectory(TenantId),
}

impl Namespace {
    /// Physical storage key for a display name in this namespace.
    pub fn physical_key(&self, display_name: &str) -> String {
        match self {
            Namespace::Flat => display_name.to_string(),
            Namespace::TenantPrefix(tenant) => format!("{}_{}", tenant.as_str(), display_name),
            Namespace::TenantDirectory(tenant) => format!("{}/{}", tenant.as_str(), display_name),
        }
    }

    /// Physical storage key for a raw directory entry produced by a listing.
    ///
    /// In the prefix layout entries already carry their prefix; in the
    /// directory layout they are plain names inside the tenant directory.
    pub fn entry_key(&self, entry: &str) -> String {
        match self {
            Namespace::TenantDirectory(tenant) => format!("{}/{}", tenant.as_str(), entry),
            _ => entry.to_string(),
        }
    }

    /// Display name for a raw directory entry.
    ///
    /// Only the caller's own leading prefix is stripped. Entries that belong
    /// to other tenants in the prefix layout come back unchanged, raw prefix
    /// and all, so a shared-directory listing exposes foreign keys.
    pub fn display_name(&self, entry: &str) -> String {
        match self {
            Namespace::TenantPrefix(tenant) => {
                let own_prefix = format!("{}_", tenant.as_str());
                entry
                    .strip_prefix(own_prefix.as_str())
                    .unwrap_or(entry)
                    .to_string()
            }
            _ => entry.to_string(),
        }
    }

    /// Subdirectory to enumerate for listings, if the layout has one.
    pub fn list_scope(&self) -> Option<&str> {
        match self {
            Namespace::TenantDirectory(tenant) => Some(tenant.as_str()),
            _ => None,
        }
    }

    /// Tenant bound to this namespace, if any.
    pub fn tenant(&self) -> Option<&TenantId> {
        match self {
            Namespace::Flat => None,
            Namespace::TenantPrefix(tenant) | Namespace::TenantDirectory(tenant) => Some(tenant),
        }
    }
}
