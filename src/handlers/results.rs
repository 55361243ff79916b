//! Operation result types
//!
//! Defines the values handlers return to the transport layer. The serialized
//! shapes of the upload records are part of the service's wire contract.

use std::path::PathBuf;

use serde::Serialize;

/// A stored file as reported to clients.
///
/// Upload responses carry the claimed content type; listing responses omit
/// the `type` key entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRecord {
    pub name: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    pub size: u64,
    pub url: String,
    #[serde(rename = "deleteUrl")]
    pub delete_url: String,
    #[serde(rename = "deleteType")]
    pub delete_type: String,
}

impl FileRecord {
    /// Record for a freshly stored upload.
    pub fn stored(name: impl Into<String>, content_type: impl Into<String>, size: u64) -> Self {
        Self::build(name.into(), Some(content_type.into()), size)
    }

    /// Record for a file reported by a listing.
    pub fn listed(name: impl Into<String>, size: u64) -> Self {
        Self::build(name.into(), None, size)
    }

    fn build(name: String, content_type: Option<String>, size: u64) -> Self {
        let url = format!("api/v1/files/{}", name);
        Self {
            delete_url: url.clone(),
            delete_type: "DELETE".to_string(),
            name,
            content_type,
            size,
            url,
        }
    }
}

/// An upload the service refused to store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedUpload {
    #[serde(rename = "error")]
    pub reason: String,
    pub name: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    pub size: u64,
}

impl RejectedUpload {
    /// Rejected uploads always report size 0 since nothing was written.
    pub fn new(
        name: impl Into<String>,
        content_type: Option<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            reason: reason.into(),
            name: name.into(),
            content_type,
            size: 0,
        }
    }
}

/// Outcome of an upload request.
///
/// Serializes without a tag so both arms keep their established wire shapes;
/// in code the two cases stay distinct instead of being signaled by a
/// message field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum UploadOutcome {
    Stored(FileRecord),
    Rejected(RejectedUpload),
}

impl UploadOutcome {
    pub fn is_stored(&self) -> bool {
        matches!(self, UploadOutcome::Stored(_))
    }
}

/// Acknowledgment of a delete request.
///
/// Deletion faults are reported as values rather than errors; only the
/// `Deleted` arm means the file is gone because of this request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted { name: String },
    NotFound { name: String },
    Failed { name: String, reason: String },
}

impl DeleteOutcome {
    pub fn succeeded(&self) -> bool {
        matches!(self, DeleteOutcome::Deleted { .. })
    }

    pub fn name(&self) -> &str {
        match self {
            DeleteOutcome::Deleted { name }
            | DeleteOutcome::NotFound { name }
            | DeleteOutcome::Failed { name, .. } => name,
        }
    }
}

/// A stored file resolved for download.
///
/// The transport layer streams the file from `path`; the service itself does
/// not read the content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadSource {
    pub display_name: String,
    pub path: PathBuf,
    pub size: u64,
}
