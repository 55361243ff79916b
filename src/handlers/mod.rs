//! Operation handlers
//!
//! One handler per service operation: upload, list, download, delete. Each
//! takes the store, the caller's namespace, and request inputs, and returns
//! the value the transport layer serializes.

pub mod delete;
pub mod download;
pub mod list;
pub mod results;
pub mod upload;

pub use delete::process_delete;
pub use download::process_download;
pub use list::process_list;
pub use results::{DeleteOutcome, DownloadSource, FileRecord, RejectedUpload, UploadOutcome};
pub use upload::process_upload;
