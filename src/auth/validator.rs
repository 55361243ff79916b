//! Authentication validator
//!
//! Implements login validation against the injected user registry, including
//! username and password input checks.

use super::registry::UserRegistry;
use super::results::AuthenticatedUser;
use crate::config::StartupConfig;
use crate::error::AuthError;
use crate::namespace::TenantId;

/// Performs basic input sanitation to check for malicious or malformed usernames/passwords.
fn is_valid_input(input: &str, max_length: usize) -> bool {
    !input.trim().is_empty() && input.len() <= max_length && !input.contains(['\r', '\n', '\0'])
}

/// Validates a login attempt against the registry.
///
/// Lookup is by username and claimed tenant together, so a wrong tenant is
/// indistinguishable from an unknown user. Only a found account with a wrong
/// password reports `InvalidPassword`.
pub fn authenticate(
    registry: &UserRegistry,
    username: &str,
    password: &str,
    tenant: Option<&TenantId>,
    config: &StartupConfig,
) -> Result<AuthenticatedUser, AuthError> {
    // Check for invalid username characters/format
    if username.contains(['@', '#', ',', '%']) || username.starts_with(char::is_numeric) {
        return Err(AuthError::InvalidUsername(username.to_string()));
    }

    if !is_valid_input(username, config.max_username_length) {
        return Err(AuthError::MalformedInput("Invalid username format".into()));
    }

    if !is_valid_input(password, config.max_username_length) {
        return Err(AuthError::MalformedInput("Invalid password format".into()));
    }

    let account = registry
        .lookup(username, tenant)
        .ok_or_else(|| AuthError::UserNotFound(username.to_string()))?;

    if account.password != password {
        return Err(AuthError::InvalidPassword(username.to_string()));
    }

    Ok(AuthenticatedUser {
        username: account.username.clone(),
        tenant: account.tenant.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::registry::UserAccount;

    fn registry() -> UserRegistry {
        UserRegistry::new([
            UserAccount {
                username: "alice".to_string(),
                password: "alice123".to_string(),
                tenant: Some(TenantId::new("acme")),
            },
            UserAccount {
                username: "bob".to_string(),
                password: "bob123".to_string(),
                tenant: None,
            },
        ])
    }

    fn config() -> StartupConfig {
        StartupConfig::default()
    }

    #[test]
    fn test_valid_login_returns_identity() {
        let acme = TenantId::new("acme");
        let user = authenticate(&registry(), "alice", "alice123", Some(&acme), &config()).unwrap();
        assert_eq!(user.username, "alice");
        assert_eq!(user.tenant, Some(acme));
    }

    #[test]
    fn test_untenanted_login() {
        let user = authenticate(&registry(), "bob", "bob123", None, &config()).unwrap();
        assert_eq!(user.tenant, None);
    }

    #[test]
    fn test_wrong_password_is_reported_as_such() {
        let acme = TenantId::new("acme");
        let result = authenticate(&registry(), "alice", "nope", Some(&acme), &config());
        assert!(matches!(result, Err(AuthError::InvalidPassword(_))));
    }

    #[test]
    fn test_tenant_mismatch_reads_as_unknown_user() {
        let bravo = TenantId::new("bravo");
        let result = authenticate(&registry(), "alice", "alice123", Some(&bravo), &config());
        assert!(matches!(result, Err(AuthError::UserNotFound(_))));

        let result = authenticate(&registry(), "alice", "alice123", None, &config());
        assert!(matches!(result, Err(AuthError::UserNotFound(_))));
    }

    #[test]
    fn test_username_character_rules() {
        let result = authenticate(&registry(), "al@ice", "alice123", None, &config());
        assert!(matches!(result, Err(AuthError::InvalidUsername(_))));

        let result = authenticate(&registry(), "1alice", "alice123", None, &config());
        assert!(matches!(result, Err(AuthError::InvalidUsername(_))));
    }

    #[test]
    fn test_malformed_inputs_rejected() {
        let result = authenticate(&registry(), "  ", "alice123", None, &config());
        assert!(matches!(result, Err(AuthError::MalformedInput(_))));

        let result = authenticate(&registry(), "bob", "pass\nword", None, &config());
        assert!(matches!(result, Err(AuthError::MalformedInput(_))));

        let long = "x".repeat(200);
        let result = authenticate(&registry(), &long, "alice123", None, &config());
        assert!(matches!(result, Err(AuthError::MalformedInput(_))));
    }
}
