//! Authentication system
//!
//! Validates logins against a read-only user registry injected at service
//! construction.

pub mod registry;
pub mod results;
pub mod validator;

pub use registry::{UserAccount, UserRegistry};
pub use results::AuthenticatedUser;
pub use validator::authenticate;
