//! Extension resolution and the upload allow-list
//!
//! Implements the extension half of the name resolver: pulling the extension
//! out of a display name and checking it against the configured set of
//! permitted extensions.

use std::collections::HashSet;

/// Returns the extension of a display name: the text after the last `.`,
/// lowercased. A name without any `.` has no extension.
///
/// Note that this is deliberately cruder than [`split_name`]: `.gitignore`
/// has the extension `gitignore` here, while the dedup split treats the whole
/// name as the stem.
///
/// [`split_name`]: crate::resolver::split_name
pub fn resolve_extension(name: &str) -> Option<String> {
    name.rsplit_once('.').map(|(_, ext)| ext.to_lowercase())
}

/// Immutable set of filename extensions permitted for upload.
///
/// Membership is case-insensitive; entries are normalized to lowercase when
/// the list is built.
#[derive(Debug, Clone)]
pub struct AllowList {
    extensions: HashSet<String>,
}

impl AllowList {
    pub fn new(extensions: &[String]) -> Self {
        Self {
            extensions: extensions.iter().map(|e| e.to_lowercase()).collect(),
        }
    }

    /// Membership test for a single extension.
    pub fn is_allowed(&self, extension: &str) -> bool {
        self.extensions.contains(&extension.to_lowercase())
    }

    /// Whether a display name carries an allowed extension.
    ///
    /// A name with no extension is never allowed.
    pub fn allows_name(&self, name: &str) -> bool {
        resolve_extension(name).is_some_and(|ext| self.is_allowed(&ext))
    }
}
