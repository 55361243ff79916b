//! Filebox - File Upload Service Core
//!
//! An embeddable, authenticated file upload service: login, upload with an
//! extension allow-list and collision-avoiding renames, listing, download,
//! and delete, with optional tenant scoping of the storage namespace.

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod namespace;
pub mod resolver;
pub mod service;
pub mod storage;

pub use service::Filebox;
