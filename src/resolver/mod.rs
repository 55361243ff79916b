//! Name resolution
//!
//! The naming core of the service: filename sanitization, extension
//! allow-listing, and the collision-avoiding rename loop. Everything here
//! only inspects storage; nothing in this module writes to it.

pub mod dedup;
pub mod extension;
pub mod sanitize;

pub use dedup::{ResolvedName, deduplicate, split_name};
pub use extension::{AllowList, resolve_extension};
pub use sanitize::{sanitize_filename, validate_display_name};
