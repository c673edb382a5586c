//! Host integration traits and error types
//!
//! Defines the interface the bootstrap uses to hand discovered module assets
//! to the surrounding application.

use std::path::Path;
use thiserror::Error;

use crate::registry::discovery::ModuleDescriptor;

/// Registration capabilities supplied by the host application.
///
/// The bootstrap never touches host registries directly: everything it finds
/// on disk is handed over through these four calls, so a host can be a real
/// framework, an in-memory registry, or a recording stub in tests. All calls
/// are assumed to be idempotent and side-effecting; a returned error aborts
/// the entire startup sequence.
pub trait HostHooks {
    /// Merge one configuration file into host configuration under `key`.
    ///
    /// `key` is derived from the file name without its extension, e.g.
    /// `config/auth.toml` merges under `auth`.
    fn merge_config(&mut self, key: &str, path: &Path) -> Result<(), BootstrapError>;

    /// Load one route file (`routes/web.<ext>` or `routes/api.<ext>`).
    fn load_routes(&mut self, path: &Path) -> Result<(), BootstrapError>;

    /// Register a module's migrations directory.
    ///
    /// Enumerating and ordering the individual migration files inside it is
    /// the host's concern (filename timestamp-prefix convention).
    fn register_migrations(&mut self, dir: &Path) -> Result<(), BootstrapError>;

    /// Register a module's views directory under a namespace.
    ///
    /// The namespace is the module name with path separators replaced by
    /// underscores, so nested modules cannot collide in a flat view
    /// namespace.
    fn register_views(&mut self, dir: &Path, namespace: &str) -> Result<(), BootstrapError>;

    /// Module-specific setup hook, invoked at the end of a module's boot
    /// phase. Default is a no-op.
    fn module_booted(&mut self, module: &ModuleDescriptor) -> Result<(), BootstrapError> {
        let _ = module;
        Ok(())
    }
}

/// Bootstrap errors
///
/// Any of these aborts startup: there is no partial-success mode where some
/// modules are registered and others silently skipped. Absence of an optional
/// subresource is never an error.
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("filesystem error: {0}")]
    Filesystem(String),

    #[error("config key `{key}` from module `{module}` already registered by module `{previous}`")]
    ConfigKeyCollision {
        key: String,
        module: String,
        previous: String,
    },

    #[error("invalid config file: {0}")]
    InvalidConfig(String),

    #[error("host hook failed: {0}")]
    Hook(String),
}

impl BootstrapError {
    /// Wrap an I/O failure on `path` as a fatal filesystem error.
    pub fn filesystem(path: &Path, err: std::io::Error) -> Self {
        BootstrapError::Filesystem(format!("{}: {}", path.display(), err))
    }
}

impl From<serde_json::Error> for BootstrapError {
    fn from(e: serde_json::Error) -> Self {
        BootstrapError::InvalidConfig(e.to_string())
    }
}

impl From<toml::de::Error> for BootstrapError {
    fn from(e: toml::de::Error) -> Self {
        BootstrapError::InvalidConfig(e.to_string())
    }
}
