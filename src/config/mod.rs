//! Bootstrap configuration
//!
//! Handles configuration loading, defaults, and the traversal/collision
//! policy flags.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::traits::BootstrapError;

/// Module bootstrap configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BootstrapConfig {
    /// Enable the module bootstrap
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Directory containing feature modules
    #[serde(default = "default_modules_root")]
    pub modules_root: PathBuf,

    /// Directory traversal depth policy
    #[serde(default)]
    pub traversal: TraversalDepth,

    /// What to do when two modules register the same config key
    #[serde(default)]
    pub collision_policy: ConfigCollisionPolicy,

    /// List of enabled modules by name (empty = register everything discovered)
    #[serde(default)]
    pub enabled_modules: Vec<String>,
}

fn default_true() -> bool {
    true
}

fn default_modules_root() -> PathBuf {
    PathBuf::from("modules")
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            modules_root: default_modules_root(),
            traversal: TraversalDepth::default(),
            collision_policy: ConfigCollisionPolicy::default(),
            enabled_modules: Vec::new(),
        }
    }
}

impl BootstrapConfig {
    /// Create a configuration for the given modules root, defaults elsewhere.
    pub fn with_root<P: AsRef<Path>>(modules_root: P) -> Self {
        Self {
            modules_root: modules_root.as_ref().to_path_buf(),
            ..Self::default()
        }
    }

    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, BootstrapError> {
        let contents = std::fs::read_to_string(path.as_ref())
            .map_err(|e| BootstrapError::filesystem(path.as_ref(), e))?;
        let config = toml::from_str(&contents)?;
        Ok(config)
    }
}

/// Directory traversal depth for module discovery
///
/// `Flat` treats each immediate subdirectory of the modules root as a module.
/// `Nested` treats each immediate subdirectory as a namespace: the namespace
/// directory itself is offered as a candidate module, and each of its own
/// subdirectories (reserved subresource names excluded) is a module named
/// `Namespace/Child`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraversalDepth {
    /// One level: immediate subdirectories are modules (default)
    Flat,
    /// Two levels: namespace directories plus their child modules
    Nested,
}

impl Default for TraversalDepth {
    fn default() -> Self {
        Self::Flat
    }
}

/// Policy for two modules registering the same configuration key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigCollisionPolicy {
    /// Abort startup with a collision error (default)
    Fail,
    /// Last registration wins; the overwrite is logged as a warning
    Overwrite,
}

impl Default for ConfigCollisionPolicy {
    fn default() -> Self {
        Self::Fail
    }
}
