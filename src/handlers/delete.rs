//! Delete handler
//!
//! Removes a stored file and acknowledges the result as a value. A delete
//! that cannot proceed is an answer for the client, not a service error.

use log::{error, info, warn};

use crate::namespace::Namespace;
use crate::resolver::validate_display_name;
use crate::storage::FileStore;

use super::results::DeleteOutcome;

pub fn process_delete(
    store: &FileStore,
    namespace: &Namespace,
    display_name: &str,
) -> DeleteOutcome {
    // 1. Refuse names that still look like paths
    if let Err(e) = validate_display_name(display_name) {
        warn!("Refusing delete of {}: {}", display_name, e);
        return DeleteOutcome::Failed {
            name: display_name.to_string(),
            reason: e.to_string(),
        };
    }

    // 2. A missing file is acknowledged, not errored
    let key = namespace.physical_key(display_name);
    if !store.exists(&key) {
        return DeleteOutcome::NotFound {
            name: display_name.to_string(),
        };
    }

    // 3. So is a removal fault
    match store.delete(&key) {
        Ok(()) => {
            info!("Deleted {}", key);
            DeleteOutcome::Deleted {
                name: display_name.to_string(),
            }
        }
        Err(e) => {
            error!("Delete failed for {}: {}", key, e);
            DeleteOutcome::Failed {
                name: display_name.to_string(),
                reason: e.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::namespace::TenantId;
    use tempfile::TempDir;

    fn store() -> (TempDir, FileStore) {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path());
        (dir, store)
    }

    #[test]
    fn test_delete_removes_file() {
        let (_dir, store) = store();
        store.write("a.txt", b"x").unwrap();

        let outcome = process_delete(&store, &Namespace::Flat, "a.txt");
        assert_eq!(outcome, DeleteOutcome::Deleted { name: "a.txt".to_string() });
        assert!(!store.exists("a.txt"));
    }

    #[test]
    fn test_missing_file_acknowledged_as_not_found() {
        let (_dir, store) = store();
        let outcome = process_delete(&store, &Namespace::Flat, "ghost.txt");
        assert_eq!(outcome, DeleteOutcome::NotFound { name: "ghost.txt".to_string() });
        assert!(!outcome.succeeded());
    }

    #[test]
    fn test_delete_is_scoped_to_namespace() {
        let (_dir, store) = store();
        store.write("acme_a.txt", b"x").unwrap();

        let bravo = Namespace::TenantPrefix(TenantId::new("bravo"));
        let outcome = process_delete(&store, &bravo, "a.txt");
        assert!(matches!(outcome, DeleteOutcome::NotFound { .. }));
        assert!(store.exists("acme_a.txt"));

        let acme = Namespace::TenantPrefix(TenantId::new("acme"));
        let outcome = process_delete(&store, &acme, "a.txt");
        assert!(outcome.succeeded());
        assert!(!store.exists("acme_a.txt"));
    }

    #[test]
    fn test_path_shaped_names_fail_without_touching_storage() {
        let (_dir, store) = store();
        store.write("a.txt", b"x").unwrap();

        let outcome = process_delete(&store, &Namespace::Flat, "../a.txt");
        assert!(matches!(outcome, DeleteOutcome::Failed { .. }));
        assert!(store.exists("a.txt"));
    }
}
