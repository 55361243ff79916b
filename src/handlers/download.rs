//! Download handler
//!
//! Resolves a display name to the stored file backing it.

use crate::error::StorageError;
use crate::namespace::Namespace;
use crate::resolver::validate_display_name;
use crate::storage::FileStore;

use super::results::DownloadSource;

/// Resolve a download request to the file's path and size.
///
/// Display names arrive from clients, so anything that still looks like a
/// path is refused before the namespace mapping runs.
pub fn process_download(
    store: &FileStore,
    namespace: &Namespace,
    display_name: &str,
) -> Result<DownloadSource, StorageError> {
    validate_display_name(display_name)?;

    let key = namespace.physical_key(display_name);
    if !store.exists(&key) {
        return Err(StorageError::FileNotFound(display_name.to_string()));
    }

    let size = store.size(&key)?;
    Ok(DownloadSource {
        display_name: display_name.to_string(),
        path: store.resolve(&key),
        size,
    })
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
    fn test_download_resolves_path_and_size() {
        let (_dir, store) = store();
        store.write("a.txt", b"hello").unwrap();

        let source = process_download(&store, &Namespace::Flat, "a.txt").unwrap();
        assert_eq!(source.display_name, "a.txt");
        assert_eq!(source.size, 5);
        assert_eq!(source.path, store.resolve("a.txt"));
    }

    #[test]
    fn test_download_is_scoped_to_namespace() {
        let (_dir, store) = store();
        store.write("acme_a.txt", b"x").unwrap();

        let acme = Namespace::TenantPrefix(TenantId::new("acme"));
        assert!(process_download(&store, &acme, "a.txt").is_ok());

        let bravo = Namespace::TenantPrefix(TenantId::new("bravo"));
        assert!(matches!(
            process_download(&store, &bravo, "a.txt"),
            Err(StorageError::FileNotFound(_))
        ));
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let (_dir, store) = store();
        assert!(matches!(
            process_download(&store, &Namespace::Flat, "ghost.txt"),
            Err(StorageError::FileNotFound(_))
        ));
    }

    #[test]
    fn test_path_shaped_names_are_refused() {
        let (_dir, store) = store();
        store.write("a.txt", b"x").unwrap();
        assert!(matches!(
            process_download(&store, &Namespace::Flat, "../a.txt"),
            Err(StorageError::PathTraversal(_))
        ));
    }
}
