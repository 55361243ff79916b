//! Error handlers
//!
//! Provides error logging and mapping to boundary status codes.

use crate::error::types::{FileboxError, StorageError};
use log::error;

/// Handle a service error
pub fn handle_error(err: &FileboxError) {
    error!("Filebox error: {}", err);
}

/// Convert an error to the HTTP-ish status code the embedding boundary
/// should answer with.
pub fn error_to_status_code(err: &FileboxError) -> u16 {
    match err {
        FileboxError::Auth(_) => 401,
        FileboxError::Storage(e) => storage_status_code(e),
        FileboxError::Config(_) => 500,
        FileboxError::IoError(_) => 500,
    }
}

fn storage_status_code(err: &StorageError) -> u16 {
    match err {
        StorageError::FileNotFound(_) => 404,
        StorageError::InvalidPath(_) => 400,
        StorageError::PathTraversal(_) => 400,
        StorageError::FileTooLarge { .. } => 413,
        StorageError::IoError(_) => 500,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::types::AuthError;

    #[test]
    fn test_auth_errors_map_to_401() {
        let err = FileboxError::Auth(AuthError::UserNotFound("alice".to_string()));
        assert_eq!(error_to_status_code(&err), 401);
    }

    #[test]
    fn test_storage_errors_map_by_kind() {
        let not_found = FileboxError::Storage(StorageError::FileNotFound("a.txt".to_string()));
        assert_eq!(error_to_status_code(&not_found), 404);

        let traversal = FileboxError::Storage(StorageError::PathTraversal("../x".to_string()));
        assert_eq!(error_to_status_code(&traversal), 400);

        let too_large = FileboxError::Storage(StorageError::FileTooLarge {
            name: "big.zip".to_string(),
            size: 10,
            limit: 5,
        });
        assert_eq!(error_to_status_code(&too_large), 413);
    }

    #[test]
    fn test_io_errors_map_to_500() {
        let err = FileboxError::IoError(std::io::Error::other("disk gone"));
        assert_eq!(error_to_status_code(&err), 500);
    }
}
