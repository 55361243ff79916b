//! Listing handler
//!
//! Reports the files visible in the caller's namespace.

use std::collections::HashSet;

use crate::error::StorageError;
use crate::namespace::Namespace;
use crate::storage::FileStore;

use super::results::FileRecord;

/// List stored files as the caller sees them.
///
/// Only regular files appear; directories and configured ignored names are
/// skipped. The ignore check runs against raw physical names, before any
/// tenant prefix is stripped for display. Entries come back in directory
/// order, unsorted.
pub fn process_list(
    store: &FileStore,
    namespace: &Namespace,
    ignored: &HashSet<String>,
) -> Result<Vec<FileRecord>, StorageError> {
    let mut records = Vec::new();
    for (entry, is_file) in store.list(namespace.list_scope())? {
        if !is_file || ignored.contains(&entry) {
            continue;
        }
        let size = store.size(&namespace.entry_key(&entry))?;
        records.push(FileRecord::listed(namespace.display_name(&entry), size));
    }
    Ok(records)
}
