//! In-memory host registry
//!
//! A [`HostHooks`] implementation that actually parses configuration files
//! and records registered routes, migrations, and views. Useful for
//! embedders without a surrounding framework and for inspecting a modules
//! tree without side effects.

use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::registry::discovery::ModuleDescriptor;
use crate::traits::{BootstrapError, HostHooks};

/// In-memory registry of everything a bootstrap run registered
#[derive(Debug, Default)]
pub struct InMemoryHost {
    config: Map<String, Value>,
    route_files: Vec<PathBuf>,
    migration_dirs: Vec<PathBuf>,
    view_roots: Vec<(String, PathBuf)>,
    booted: Vec<String>,
}

impl InMemoryHost {
    /// Create an empty host registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Merged configuration, one top-level entry per registered key
    pub fn config(&self) -> &Map<String, Value> {
        &self.config
    }

    /// Look up a merged value by dot-notation key (`auth.session.ttl`).
    pub fn config_value(&self, dotted: &str) -> Option<&Value> {
        let mut segments = dotted.split('.');
        let mut current = self.config.get(segments.next()?)?;
        for segment in segments {
            current = current.as_object()?.get(segment)?;
        }
        Some(current)
    }

    /// Route files, in registration order
    pub fn route_files(&self) -> &[PathBuf] {
        &self.route_files
    }

    /// Migration directories, in registration order
    pub fn migration_dirs(&self) -> &[PathBuf] {
        &self.migration_dirs
    }

    /// Registered view roots as (namespace, directory) pairs
    pub fn view_roots(&self) -> &[(String, PathBuf)] {
        &self.view_roots
    }

    /// Names of modules whose boot phase completed
    pub fn booted(&self) -> &[String] {
        &self.booted
    }
}

/// Parse a configuration file into a JSON value by extension.
fn parse_config_file(path: &Path) -> Result<Value, BootstrapError> {
    let contents =
        fs::read_to_string(path).map_err(|e| BootstrapError::filesystem(path, e))?;

    match path.extension().and_then(|e| e.to_str()) {
        Some("toml") => {
            let value: toml::Value = toml::from_str(&contents)?;
            Ok(serde_json::to_value(value)?)
        }
        Some("json") => Ok(serde_json::from_str(&contents)?),
        other => Err(BootstrapError::InvalidConfig(format!(
            "unsupported config extension {:?} for {}",
            other,
            path.display()
        ))),
    }
}

impl HostHooks for InMemoryHost {
    fn merge_config(&mut self, key: &str, path: &Path) -> Result<(), BootstrapError> {
        let value = parse_config_file(path)?;
        debug!("Merging config key `{}` from {:?}", key, path);
        self.config.insert(key.to_string(), value);
        Ok(())
    }

    fn load_routes(&mut self, path: &Path) -> Result<(), BootstrapError> {
        self.route_files.push(path.to_path_buf());
        Ok(())
    }

    fn register_migrations(&mut self, dir: &Path) -> Result<(), BootstrapError> {
        self.migration_dirs.push(dir.to_path_buf());
        Ok(())
    }

    fn register_views(&mut self, dir: &Path, namespace: &str) -> Result<(), BootstrapError> {
        self.view_roots.push((namespace.to_string(), dir.to_path_buf()));
        Ok(())
    }

    fn module_booted(&mut self, module: &ModuleDescriptor) -> Result<(), BootstrapError> {
        self.booted.push(module.name.clone());
        Ok(())
    }
}
