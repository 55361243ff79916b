//! Logging utilities
//!
//! Provides logging setup for embedding applications.

use env_logger;

/// Initialize the logger (env_logger picks up RUST_LOG environment variable)
pub fn init() {
    env_logger::init();
}
