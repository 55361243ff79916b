//! Filename sanitization
//!
//! Turns whatever filename a client claims into something safe to use as a
//! storage key component. Also validates display names arriving on download
//! and delete requests, which must already be clean.

use crate::error::StorageError;

/// Filesystem limit for a single name component.
pub const MAX_FILENAME_BYTES: usize = 255;

/// Sanitize a client-claimed filename so it cannot escape the storage root
/// or smuggle in control characters.
///
/// Always succeeds: a name that sanitizes to nothing becomes `unnamed`.
pub fn sanitize_filename(name: &str) -> String {
    // 1. Keep only the last path component
    let name = name.rsplit(['/', '\\']).next().unwrap_or(name);

    // 2. Drop control characters and characters unsafe in filenames
    let sanitized: String = name
        .chars()
        .filter(|&c| {
            !c.is_control() && !matches!(c, '<' | '>' | ':' | '"' | '/' | '\\' | '|' | '?' | '*')
        })
        .collect();

    // 3. Trim whitespace and leading dots, then trim again in case the dots
    //    were padded with spaces
    let sanitized = sanitized.trim().trim_start_matches('.').trim();

    // 4. A name that vanished entirely gets a placeholder
    if sanitized.is_empty() {
        return "unnamed".to_string();
    }

    // 5. Truncate to the component limit without splitting a character
    let mut result = String::with_capacity(sanitized.len().min(MAX_FILENAME_BYTES));
    for c in sanitized.chars() {
        if result.len() + c.len_utf8() > MAX_FILENAME_BYTES {
            break;
        }
        result.push(c);
    }

    result
}

/// Validate a display name supplied on a download or delete request.
///
/// These names refer to files already stored under sanitized names, so
/// anything that still looks like a path is rejected rather than cleaned.
pub fn validate_display_name(name: &str) -> Result<(), StorageError> {
    if name.is_empty() {
        return Err(StorageError::InvalidPath("empty filename".to_string()));
    }
    if name.contains("..") || name.contains('/') || name.contains('\\') {
        return Err(StorageError::PathTraversal(name.to_string()));
    }
    Ok(())
}
