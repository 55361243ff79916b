//! File system store
//!
//! All stored files live under a single root directory. Callers address them
//! by physical key, a root-relative path produced by the namespace layer, and
//! never by raw filesystem path.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Root-anchored file store.
///
/// Keys map directly onto paths below the root. The store does not interpret
/// keys beyond joining them to the root, so key hygiene is the caller's job.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the root directory if it does not exist yet.
    pub fn ensure_root(&self) -> io::Result<()> {
        fs::create_dir_all(&self.root)
    }

    /// Absolute path for a physical key.
    pub fn resolve(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }

    /// Check if a stored file exists under this key.
    pub fn exists(&self, key: &str) -> bool {
        let path = self.resolve(key);
        path.exists() && path.is_file()
    }

    /// Size in bytes of the stored file, read back from the file system.
    pub fn size(&self, key: &str) -> io::Result<u64> {
        fs::metadata(self.resolve(key)).map(|m| m.len())
    }

    /// Write file content under a key, creating intermediate directories as
    /// needed. An existing file under the same key is overwritten.
    pub fn write(&self, key: &str, bytes: &[u8]) -> io::Result<()> {
        let path = self.resolve(key);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, bytes)
    }

    /// Remove the stored file under a key.
    pub fn delete(&self, key: &str) -> io::Result<()> {
        fs::remove_file(self.resolve(key))
    }

    /// List directory entries, optionally inside a sub-directory of the root.
    ///
    /// Returns each entry's name together with whether it is a regular file.
    /// A missing sub-directory lists as empty since scoped directories only
    /// appear once their first file is written.
    pub fn list(&self, scope: Option<&str>) -> io::Result<Vec<(String, bool)>> {
        let dir = match scope {
            Some(sub) => self.root.join(sub),
            None => self.root.clone(),
        };
        if scope.is_some() && !dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut entries = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().into_owned();
            let is_file = entry.file_type()?.is_file();
            entries.push((name, is_file));
        }
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store() -> (TempDir, FileStore) {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path());
        (dir, store)
    }

    #[test]
    fn test_write_then_exists_and_size() {
        let (_dir, store) = store();
        store.write("a.txt", b"hello").unwrap();
        assert!(store.exists("a.txt"));
        assert_eq!(store.size("a.txt").unwrap(), 5);
    }

    #[test]
    fn test_exists_is_false_for_directories() {
        let (_dir, store) = store();
        store.write("acme/a.txt", b"x").unwrap();
        assert!(!store.exists("acme"));
        assert!(store.exists("acme/a.txt"));
    }

    #[test]
    fn test_write_creates_intermediate_directories() {
        let (_dir, store) = store();
        store.write("acme/report.txt", b"data").unwrap();
        assert!(store.resolve("acme").is_dir());
        assert_eq!(store.size("acme/report.txt").unwrap(), 4);
    }

    #[test]
    fn test_write_overwrites_existing_key() {
        let (_dir, store) = store();
        store.write("a.txt", b"first").unwrap();
        store.write("a.txt", b"second!").unwrap();
        assert_eq!(store.size("a.txt").unwrap(), 7);
    }

    #[test]
    fn test_delete_removes_file() {
        let (_dir, store) = store();
        store.write("a.txt", b"x").unwrap();
        store.delete("a.txt").unwrap();
        assert!(!store.exists("a.txt"));
        assert!(store.delete("a.txt").is_err());
    }

    #[test]
    fn test_list_reports_files_and_directories() {
        let (_dir, store) = store();
        store.write("a.txt", b"x").unwrap();
        store.write("sub/b.txt", b"y").unwrap();

        let mut entries = store.list(None).unwrap();
        entries.sort();
        assert_eq!(
            entries,
            vec![("a.txt".to_string(), true), ("sub".to_string(), false)]
        );
    }

    #[test]
    fn test_list_scoped_to_subdirectory() {
        let (_dir, store) = store();
        store.write("acme/a.txt", b"x").unwrap();
        store.write("top.txt", b"y").unwrap();

        let entries = store.list(Some("acme")).unwrap();
        assert_eq!(entries, vec![("a.txt".to_string(), true)]);
    }

    #[test]
    fn test_list_missing_scope_is_empty() {
        let (_dir, store) = store();
        assert_eq!(store.list(Some("nowhere")).unwrap(), Vec::new());
    }
}
