//! Shared test fixtures for bootstrap tests
//!
//! Provides a temporary modules-tree builder and a recording `HostHooks`
//! stub.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use modhost::registry::discovery::ModuleDescriptor;
use modhost::traits::{BootstrapError, HostHooks};

/// Temporary modules tree for a single test
pub struct ModuleFixture {
    /// Holds the tree alive for the test's duration
    pub temp_dir: TempDir,
    /// Modules root inside the temp dir
    pub root: PathBuf,
}

impl ModuleFixture {
    /// Fixture with an existing, empty modules root.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("modules");
        fs::create_dir_all(&root).unwrap();
        Self { temp_dir, root }
    }

    /// Fixture whose modules root was never created.
    pub fn without_root() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("modules");
        Self { temp_dir, root }
    }

    /// Create a bare module directory and return its path. `name` may
    /// contain `/` for nested layouts.
    pub fn add_module(&self, name: &str) -> PathBuf {
        let dir = self.root.join(name);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    /// Write a file inside a module, creating parent directories.
    pub fn write_file(&self, module: &Path, rel: &str, contents: &str) -> PathBuf {
        let path = module.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, contents).unwrap();
        path
    }
}

/// One observed host hook invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookEvent {
    MergeConfig { key: String, path: PathBuf },
    LoadRoutes(PathBuf),
    RegisterMigrations(PathBuf),
    RegisterViews { dir: PathBuf, namespace: String },
    Booted(String),
}

impl HookEvent {
    /// True for register-phase events (config merges).
    pub fn is_register_phase(&self) -> bool {
        matches!(self, HookEvent::MergeConfig { .. })
    }
}

/// `HostHooks` stub that records every call in invocation order
#[derive(Debug, Default)]
pub struct RecordingHooks {
    pub events: Vec<HookEvent>,
    /// When set, `load_routes` fails with this message
    pub fail_on_routes: Option<String>,
}

impl RecordingHooks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn merged_keys(&self) -> Vec<String> {
        self.events
            .iter()
            .filter_map(|e| match e {
                HookEvent::MergeConfig { key, .. } => Some(key.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn route_files(&self) -> Vec<PathBuf> {
        self.events
            .iter()
            .filter_map(|e| match e {
                HookEvent::LoadRoutes(path) => Some(path.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn migration_dirs(&self) -> Vec<PathBuf> {
        self.events
            .iter()
            .filter_map(|e| match e {
                HookEvent::RegisterMigrations(dir) => Some(dir.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn view_namespaces(&self) -> Vec<String> {
        self.events
            .iter()
            .filter_map(|e| match e {
                HookEvent::RegisterViews { namespace, .. } => Some(namespace.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn booted_modules(&self) -> Vec<String> {
        self.events
            .iter()
            .filter_map(|e| match e {
                HookEvent::Booted(name) => Some(name.clone()),
                _ => None,
            })
            .collect()
    }
}

impl HostHooks for RecordingHooks {
    fn merge_config(&mut self, key: &str, path: &Path) -> Result<(), BootstrapError> {
        self.events.push(HookEvent::MergeConfig {
            key: key.to_string(),
            path: path.to_path_buf(),
        });
        Ok(())
    }

    fn load_routes(&mut self, path: &Path) -> Result<(), BootstrapError> {
        if let Some(msg) = &self.fail_on_routes {
            return Err(BootstrapError::Hook(msg.clone()));
        }
        self.events.push(HookEvent::LoadRoutes(path.to_path_buf()));
        Ok(())
    }

    fn register_migrations(&mut self, dir: &Path) -> Result<(), BootstrapError> {
        self.events
            .push(HookEvent::RegisterMigrations(dir.to_path_buf()));
        Ok(())
    }

    fn register_views(&mut self, dir: &Path, namespace: &str) -> Result<(), BootstrapError> {
        self.events.push(HookEvent::RegisterViews {
            dir: dir.to_path_buf(),
            namespace: namespace.to_string(),
        });
        Ok(())
    }

    fn module_booted(&mut self, module: &ModuleDescriptor) -> Result<(), BootstrapError> {
        self.events.push(HookEvent::Booted(module.name.clone()));
        Ok(())
    }
}
