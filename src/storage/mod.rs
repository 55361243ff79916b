//! File system storage
//!
//! Root-anchored key-value store over the local file system.

pub mod filesystem;

pub use filesystem::FileStore;
