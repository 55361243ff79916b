//! Upload handler
//!
//! Stores an uploaded file under a collision-free name inside the caller's
//! namespace. Never returns an error: anything that prevents storage becomes
//! a `Rejected` outcome for the client.

use log::{error, info, warn};

use crate::namespace::Namespace;
use crate::resolver::{AllowList, deduplicate, sanitize_filename};
use crate::storage::FileStore;

use super::results::{FileRecord, RejectedUpload, UploadOutcome};

/// Message reported when the claimed filename carries a disallowed extension.
const TYPE_NOT_ALLOWED: &str = "File type not supported";

pub fn process_upload(
    store: &FileStore,
    namespace: &Namespace,
    allow_list: &AllowList,
    claimed_name: &str,
    content_type: &str,
    body: &[u8],
) -> UploadOutcome {
    // 1. Sanitize the claimed filename and resolve name collisions
    let desired_name = sanitize_filename(claimed_name);
    let resolved = deduplicate(store, namespace, &desired_name);

    // 2. Extension check runs on the raw claimed name; the outcome still
    //    carries the resolved name
    if !allow_list.allows_name(claimed_name) {
        warn!("Rejected upload {}: extension not allowed", claimed_name);
        return UploadOutcome::Rejected(RejectedUpload::new(
            resolved.display_name,
            Some(content_type.to_string()),
            TYPE_NOT_ALLOWED,
        ));
    }

    // 3. Write the body under the resolved physical key
    if let Err(e) = store.write(&resolved.physical_key, body) {
        error!("Upload write failed for {}: {}", resolved.physical_key, e);
        let _ = store.delete(&resolved.physical_key);
        return UploadOutcome::Rejected(RejectedUpload::new(
            resolved.display_name,
            Some(content_type.to_string()),
            e.to_string(),
        ));
    }

    // 4. Report the size the store actually holds, not the body length
    let size = match store.size(&resolved.physical_key) {
        Ok(size) => size,
        Err(e) => {
            error!("Size check failed for {}: {}", resolved.physical_key, e);
            let _ = store.delete(&resolved.physical_key);
            return UploadOutcome::Rejected(RejectedUpload::new(
                resolved.display_name,
                Some(content_type.to_string()),
                e.to_string(),
            ));
        }
    };

    info!(
        "Stored upload {} as {} ({} bytes)",
        claimed_name, resolved.physical_key, size
    );
    UploadOutcome::Stored(FileRecord::stored(resolved.display_name, content_type, size))
}
