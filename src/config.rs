//! Configuration management for the file service
//!
//! Separates startup configuration (requires restart) from runtime configuration
//! (can be updated while the service is running).

use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::auth::UserAccount;
use crate::namespace::NamespaceLayout;

/// Complete service configuration with startup/runtime separation
#[derive(Debug, Deserialize, Clone)]
pub struct ServiceConfig {
    #[serde(flatten)]
    pub startup: StartupConfig,

    #[serde(flatten)]
    pub runtime: RuntimeConfig,
}

/// Configuration that requires a service restart to take effect
/// These values are loaded once during service initialization
#[derive(Debug, Deserialize, Clone)]
pub struct StartupConfig {
    /// Root directory for stored files (restart required)
    /// Environment: FILEBOX_DATA_DIR
    pub data_dir: String,

    /// Filename extensions accepted for upload, without dots (restart required)
    pub allowed_extensions: Vec<String>,

    /// Physical names hidden from listings (restart required)
    pub ignored_files: Vec<String>,

    /// How display names map onto storage keys (restart required)
    pub namespace_layout: NamespaceLayout,

    /// Length limit applied to usernames and passwords (restart required)
    pub max_username_length: usize,

    /// Accounts seeded into the user registry (restart required)
    pub users: Vec<UserAccount>,
}

/// Configuration that can be updated at runtime
#[derive(Debug, Deserialize, Clone)]
pub struct RuntimeConfig {
    /// Maximum file upload size in MB (runtime updatable)
    /// Environment: FILEBOX_MAX_FILE_SIZE_MB
    pub max_file_size_mb: u64,
}

/// Thread-safe runtime configuration wrapper
pub type SharedRuntimeConfig = Arc<RwLock<RuntimeConfig>>;

impl ServiceConfig {
    /// Load configuration from config.toml with environment overrides.
    ///
    /// Every key has a built-in default, so a missing file is not an error.
    /// The deployment path is tried before the development path; whichever
    /// files exist are layered over the defaults, then the environment over
    /// those.
    pub fn load() -> Result<Self, config::ConfigError> {
        let settings = Config::builder()
            .set_default("data_dir", "data")?
            .set_default("allowed_extensions", vec!["txt", "zip", "xls", "xlsx"])?
            .set_default("ignored_files", vec![".gitignore"])?
            .set_default("namespace_layout", "flat")?
            .set_default("max_username_length", 64)?
            .set_default("users", Vec::<String>::new())?
            .set_default("max_file_size_mb", 5)?
            .add_source(File::with_name("filebox/config").required(false))
            .add_source(File::with_name("config").required(false))
            .add_source(Environment::with_prefix("FILEBOX"))
            .build()?;

        let config: ServiceConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Split into startup (immutable) and runtime (mutable) parts
    pub fn split(self) -> (StartupConfig, SharedRuntimeConfig) {
        let runtime = Arc::new(RwLock::new(self.runtime));
        (self.startup, runtime)
    }

    /// Validation for all configuration values
    pub(crate) fn validate(&self) -> Result<(), config::ConfigError> {
        // Validate startup config
        if self.startup.data_dir.is_empty() {
            return Err(config::ConfigError::Message("data_dir cannot be empty".into()));
        }

        if self.startup.allowed_extensions.is_empty() {
            return Err(config::ConfigError::Message(
                "allowed_extensions cannot be empty".into(),
            ));
        }

        if self.startup.max_username_length == 0 {
            return Err(config::ConfigError::Message(
                "max_username_length must be greater than 0".into(),
            ));
        }

        for account in &self.startup.users {
            validate_account(account)?;
        }

        // Validate runtime config
        if self.runtime.max_file_size_mb == 0 {
            return Err(config::ConfigError::Message(
                "max_file_size_mb must be greater than 0".into(),
            ));
        }

        Ok(())
    }
}

/// Per-account check applied to configured accounts and to registries
/// injected through `Filebox::with_users`. Tenant ids end up inside storage
/// keys, so ids that fail `TenantId::is_key_safe` are refused here.
pub(crate) fn validate_account(account: &UserAccount) -> Result<(), config::ConfigError> {
    if let Some(tenant) = &account.tenant {
        if !tenant.is_key_safe() {
            return Err(config::ConfigError::Message(format!(
                "user {} has an invalid tenant id {:?}",
                account.username,
                tenant.as_str()
            )));
        }
    }
    Ok(())
}

impl StartupConfig {
    /// Get data directory as PathBuf
    pub fn data_dir_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir)
    }
}

impl RuntimeConfig {
    /// Get maximum file size in bytes
    pub fn max_file_size_bytes(&self) -> u64 {
        self.max_file_size_mb * 1024 * 1024
    }
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            data_dir: "data".to_string(),
            allowed_extensions: vec![
                "txt".to_string(),
                "zip".to_string(),
                "xls".to_string(),
                "xlsx".to_string(),
            ],
            ignored_files: vec![".gitignore".to_string()],
            namespace_layout: NamespaceLayout::Flat,
            max_username_length: 64,
            users: Vec::new(),
        }
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self { max_file_size_mb: 5 }
    }
}
