//! Service facade
//!
//! Ties configuration, authentication, name resolution, and storage together
//! behind one entry point per operation. A transport layer embedding the
//! service calls `login` once per session and passes the returned identity
//! into every storage operation.

use std::collections::HashSet;

use log::{info, warn};

use crate::auth::{self, AuthenticatedUser, UserRegistry};
use crate::config::{ServiceConfig, SharedRuntimeConfig, StartupConfig, validate_account};
use crate::error::{AuthError, FileboxError, StorageError};
use crate::handlers::{
    DeleteOutcome, DownloadSource, FileRecord, UploadOutcome, process_delete, process_download,
    process_list, process_upload,
};
use crate::namespace::{Namespace, NamespaceLayout, TenantId};
use crate::resolver::AllowList;
use crate::storage::FileStore;

pub struct Filebox {
    startup: StartupConfig,
    runtime: SharedRuntimeConfig,
    store: FileStore,
    allow_list: AllowList,
    ignored: HashSet<String>,
    users: UserRegistry,
}

impl Filebox {
    /// Build the service from its configuration, seeding the user registry
    /// from the configured accounts.
    pub fn new(config: ServiceConfig) -> Result<Self, FileboxError> {
        let users = UserRegistry::new(config.startup.users.clone());
        Self::with_users(config, users)
    }

    /// Build the service with an externally supplied user registry.
    ///
    /// Registry accounts pass the same checks as accounts seeded from the
    /// configuration.
    pub fn with_users(config: ServiceConfig, users: UserRegistry) -> Result<Self, FileboxError> {
        config.validate()?;
        for account in users.accounts() {
            validate_account(account)?;
        }

        let (startup, runtime) = config.split();
        let store = FileStore::new(startup.data_dir_path());
        store.ensure_root()?;

        let allow_list = AllowList::new(&startup.allowed_extensions);
        let ignored: HashSet<String> = startup.ignored_files.iter().cloned().collect();

        info!(
            "File service ready: root {}, {} account(s), {:?} layout",
            startup.data_dir,
            users.len(),
            startup.namespace_layout
        );

        Ok(Self {
            startup,
            runtime,
            store,
            allow_list,
            ignored,
            users,
        })
    }

    /// Validate a login and hand back the identity operations are scoped by.
    pub fn login(
        &self,
        username: &str,
        password: &str,
        tenant: Option<&str>,
    ) -> Result<AuthenticatedUser, FileboxError> {
        let tenant = tenant.map(TenantId::new);
        let user = auth::authenticate(
            &self.users,
            username,
            password,
            tenant.as_ref(),
            &self.startup,
        )?;
        info!("User {} logged in", user.username);
        Ok(user)
    }

    /// Store an uploaded file in the caller's namespace.
    ///
    /// Oversized bodies are refused before any name is resolved, mirroring a
    /// transport that caps request sizes. Everything past the size gate
    /// reports through the returned outcome instead of an error.
    pub async fn upload(
        &self,
        user: &AuthenticatedUser,
        claimed_name: &str,
        content_type: &str,
        body: &[u8],
    ) -> Result<UploadOutcome, FileboxError> {
        let limit = self.runtime.read().await.max_file_size_bytes();
        if body.len() as u64 > limit {
            warn!(
                "Upload {} over size limit: {} > {} bytes",
                claimed_name,
                body.len(),
                limit
            );
            return Err(StorageError::FileTooLarge {
                name: claimed_name.to_string(),
                size: body.len() as u64,
                limit,
            }
            .into());
        }

        let namespace = self.namespace_for(user)?;
        Ok(process_upload(
            &self.store,
            &namespace,
            &self.allow_list,
            claimed_name,
            content_type,
            body,
        ))
    }

    /// List the files visible to the caller.
    pub fn list(&self, user: &AuthenticatedUser) -> Result<Vec<FileRecord>, FileboxError> {
        let namespace = self.namespace_for(user)?;
        Ok(process_list(&self.store, &namespace, &self.ignored)?)
    }

    /// Resolve a stored file for download.
    pub fn download(
        &self,
        user: &AuthenticatedUser,
        display_name: &str,
    ) -> Result<DownloadSource, FileboxError> {
        let namespace = self.namespace_for(user)?;
        Ok(process_download(&self.store, &namespace, display_name)?)
    }

    /// Delete a stored file, acknowledging the result as a value.
    pub fn delete(
        &self,
        user: &AuthenticatedUser,
        display_name: &str,
    ) -> Result<DeleteOutcome, FileboxError> {
        let namespace = self.namespace_for(user)?;
        Ok(process_delete(&self.store, &namespace, display_name))
    }

    /// Current upload size limit in MB.
    pub async fn max_file_size_mb(&self) -> u64 {
        self.runtime.read().await.max_file_size_mb
    }

    /// Update the upload size limit without a restart.
    pub async fn set_max_file_size_mb(&self, mb: u64) -> Result<(), FileboxError> {
        if mb == 0 {
            return Err(FileboxError::Config(config::ConfigError::Message(
                "max_file_size_mb must be greater than 0".into(),
            )));
        }
        self.runtime.write().await.max_file_size_mb = mb;
        info!("Upload size limit set to {} MB", mb);
        Ok(())
    }

    /// Bind the configured layout to the caller's tenant.
    fn namespace_for(&self, user: &AuthenticatedUser) -> Result<Namespace, AuthError> {
        match (self.startup.namespace_layout, &user.tenant) {
            (NamespaceLayout::Flat, _) => Ok(Namespace::Flat),
            (NamespaceLayout::TenantPrefix, Some(tenant)) => {
                Ok(Namespace::TenantPrefix(tenant.clone()))
            }
            (NamespaceLayout::TenantDirectory, Some(tenant)) => {
                Ok(Namespace::TenantDirectory(tenant.clone()))
            }
            (_, None) => Err(AuthError::TenantRequired(user.username.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::UserAccount;
    use crate::config::RuntimeConfig;
    use tempfile::TempDir;

    fn config_in(dir: &TempDir) -> ServiceConfig {
        ServiceConfig {
            startup: StartupConfig {
                data_dir: dir.path().to_string_lossy().into_owned(),
                ..StartupConfig::default()
            },
            runtime: RuntimeConfig::default(),
        }
    }

    #[test]
    fn test_new_creates_data_root() {
        let dir = TempDir::new().unwrap();
        let mut config = config_in(&dir);
        config.startup.data_dir = dir.path().join("deep/data").to_string_lossy().into_owned();

        let _service = Filebox::new(config).unwrap();
        assert!(dir.path().join("deep/data").is_dir());
    }

    #[test]
    fn test_flat_layout_ignores_tenant() {
        let dir = TempDir::new().unwrap();
        let service = Filebox::new(config_in(&dir)).unwrap();
        let user = AuthenticatedUser {
            username: "alice".to_string(),
            tenant: Some(TenantId::new("acme")),
        };
        assert_eq!(service.namespace_for(&user).unwrap(), Namespace::Flat);
    }

    #[test]
    fn test_with_users_applies_tenant_id_checks() {
        let dir = TempDir::new().unwrap();
        let mut config = config_in(&dir);
        config.startup.namespace_layout = NamespaceLayout::TenantDirectory;

        let registry = UserRegistry::new([UserAccount {
            username: "eve".to_string(),
            password: "eve123".to_string(),
            tenant: Some(TenantId::new("..")),
        }]);
        assert!(Filebox::with_users(config, registry).is_err());
    }

    #[test]
    fn test_scoped_layout_requires_tenant() {
        let dir = TempDir::new().unwrap();
        let mut config = config_in(&dir);
        config.startup.namespace_layout = NamespaceLayout::TenantPrefix;

        let service = Filebox::new(config).unwrap();
        let user = AuthenticatedUser {
            username: "bob".to_string(),
            tenant: None,
        };
        assert!(matches!(
            service.namespace_for(&user),
            Err(AuthError::TenantRequired(_))
        ));
    }

    #[tokio::test]
    async fn test_size_limit_is_runtime_updatable() {
        let dir = TempDir::new().unwrap();
        let service = Filebox::new(config_in(&dir)).unwrap();
        assert_eq!(service.max_file_size_mb().await, 5);

        service.set_max_file_size_mb(1).await.unwrap();
        assert_eq!(service.max_file_size_mb().await, 1);

        assert!(service.set_max_file_size_mb(0).await.is_err());
        assert_eq!(service.max_file_size_mb().await, 1);
    }
}
