//! Error types
//!
//! Defines domain-specific error types for each module of the service core.

use std::fmt;
use std::io;

/// Authentication module errors
#[derive(Debug)]
pub enum AuthError {
    InvalidUsername(String),
    InvalidPassword(String),
    UserNotFound(String),
    MalformedInput(String),
    TenantRequired(String),
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::InvalidUsername(u) => write!(f, "Invalid username: {}", u),
            AuthError::InvalidPassword(u) => write!(f, "Invalid password for user: {}", u),
            AuthError::UserNotFound(u) => write!(f, "User not found: {}", u),
            AuthError::MalformedInput(s) => write!(f, "Malformed input: {}", s),
            AuthError::TenantRequired(u) => {
                write!(f, "User {} has no tenant id but the namespace layout needs one", u)
            }
        }
    }
}

impl std::error::Error for AuthError {}

/// Storage module errors
#[derive(Debug)]
pub enum StorageError {
    FileNotFound(String),
    InvalidPath(String),
    PathTraversal(String),
    FileTooLarge { name: String, size: u64, limit: u64 },
    IoError(io::Error),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::FileNotFound(p) => write!(f, "File not found: {}", p),
            StorageError::InvalidPath(p) => write!(f, "Invalid path: {}", p),
            StorageError::PathTraversal(p) => write!(f, "Path traversal attempt: {}", p),
            StorageError::FileTooLarge { name, size, limit } => {
                write!(f, "File {} too large: {} bytes (limit {})", name, size, limit)
            }
            StorageError::IoError(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<io::Error> for StorageError {
    fn from(error: io::Error) -> Self {
        StorageError::IoError(error)
    }
}

/// General service error that encompasses all error types
#[derive(Debug)]
pub enum FileboxError {
    Auth(AuthError),
    Storage(StorageError),
    Config(config::ConfigError),
    IoError(io::Error),
}

impl fmt::Display for FileboxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileboxError::Auth(e) => write!(f, "Authentication error: {}", e),
            FileboxError::Storage(e) => write!(f, "Storage error: {}", e),
            FileboxError::Config(e) => write!(f, "Configuration error: {}", e),
            FileboxError::IoError(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for FileboxError {}

// Implement conversions from specific errors to FileboxError
impl From<AuthError> for FileboxError {
    fn from(error: AuthError) -> Self {
        FileboxError::Auth(error)
    }
}

impl From<StorageError> for FileboxError {
    fn from(error: StorageError) -> Self {
        FileboxError::Storage(error)
    }
}

impl From<config::ConfigError> for FileboxError {
    fn from(error: config::ConfigError) -> Self {
        FileboxError::Config(error)
    }
}

impl From<io::Error> for FileboxError {
    fn from(error: io::Error) -> Self {
        FileboxError::IoError(error)
    }
}
