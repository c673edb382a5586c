//! Bootstrap orchestration
//!
//! Runs discovery once and drives per-module registration in two fixed
//! phases matching host-framework lifecycle conventions: a register phase
//! (config merge only) and a boot phase (routes, migrations, views, setup
//! hook). Configuration from ALL modules is merged before ANY module boots,
//! since boot-phase code may depend on configuration contributed by any
//! other module.

use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::config::{BootstrapConfig, ConfigCollisionPolicy};
use crate::registry::assets;
use crate::registry::discovery::{ModuleDescriptor, ModuleDiscovery};
use crate::traits::{BootstrapError, HostHooks};

/// Summary of one bootstrap run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BootstrapReport {
    /// Modules registered and booted
    pub modules: usize,
    /// Configuration keys merged across all modules
    pub config_keys: usize,
    /// Route files loaded
    pub route_files: usize,
    /// Migration directories registered
    pub migration_dirs: usize,
    /// View namespaces registered
    pub view_namespaces: usize,
}

/// Boot-phase outcome for a single module
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BootOutcome {
    /// Route files loaded for this module (0, 1, or 2)
    pub route_files: usize,
    /// Whether a migrations directory was registered
    pub migrations: bool,
    /// View namespace registered, if any
    pub view_namespace: Option<String>,
}

/// Two-phase module bootstrap
///
/// Runs once at process startup. Any error during discovery or registration
/// aborts the whole sequence; there is no partial-success mode and no retry.
pub struct BootstrapManager {
    config: BootstrapConfig,
    /// Config keys merged so far, with the contributing module's name
    merged_keys: HashMap<String, String>,
}

impl BootstrapManager {
    /// Create a new bootstrap manager
    pub fn new(config: BootstrapConfig) -> Self {
        Self {
            config,
            merged_keys: HashMap::new(),
        }
    }

    /// Run the whole bootstrap: discover, filter, register phase for all
    /// modules, then boot phase for all modules.
    pub fn bootstrap(&mut self, hooks: &mut dyn HostHooks) -> Result<BootstrapReport, BootstrapError> {
        if !self.config.enabled {
            info!("Module bootstrap disabled");
            return Ok(BootstrapReport::default());
        }
        self.merged_keys.clear();

        let discovery = ModuleDiscovery::new(&self.config.modules_root, self.config.traversal);
        let mut modules = discovery.discover_modules()?;

        if !self.config.enabled_modules.is_empty() {
            modules.retain(|m| self.config.enabled_modules.iter().any(|n| n == &m.name));
            debug!("{} modules after enabled_modules filter", modules.len());
        }

        let mut report = BootstrapReport {
            modules: modules.len(),
            ..BootstrapReport::default()
        };

        // Register phase: every module's config merge happens-before any
        // module's boot phase.
        for module in &modules {
            report.config_keys += self.register_module(module, hooks)?;
        }

        // Boot phase
        for module in &modules {
            let outcome = self.boot_module(module, hooks)?;
            report.route_files += outcome.route_files;
            if outcome.migrations {
                report.migration_dirs += 1;
            }
            if outcome.view_namespace.is_some() {
                report.view_namespaces += 1;
            }
        }

        info!(
            "Bootstrapped {} modules: {} config keys, {} route files, {} migration dirs, {} view namespaces",
            report.modules,
            report.config_keys,
            report.route_files,
            report.migration_dirs,
            report.view_namespaces
        );
        Ok(report)
    }

    /// Register phase for one module: merge its configuration files into the
    /// host, applying the collision policy across modules. Returns the number
    /// of keys merged.
    pub fn register_module(
        &mut self,
        module: &ModuleDescriptor,
        hooks: &mut dyn HostHooks,
    ) -> Result<usize, BootstrapError> {
        let files = assets::config_files(module)?;

        for file in &files {
            if let Some(previous) = self.merged_keys.get(&file.key) {
                match self.config.collision_policy {
                    ConfigCollisionPolicy::Fail => {
                        return Err(BootstrapError::ConfigKeyCollision {
                            key: file.key.clone(),
                            module: module.name.clone(),
                            previous: previous.clone(),
                        });
                    }
                    ConfigCollisionPolicy::Overwrite => {
                        warn!(
                            "Config key `{}` from module {} overwrites registration by module {}",
                            file.key, module.name, previous
                        );
                    }
                }
            }

            hooks.merge_config(&file.key, &file.path)?;
            self.merged_keys.insert(file.key.clone(), module.name.clone());
        }

        if !files.is_empty() {
            debug!("Merged {} config keys for module {}", files.len(), module.name);
        }
        Ok(files.len())
    }

    /// Boot phase for one module: routes, migrations, views, then the
    /// module-specific setup hook.
    pub fn boot_module(
        &self,
        module: &ModuleDescriptor,
        hooks: &mut dyn HostHooks,
    ) -> Result<BootOutcome, BootstrapError> {
        let route_files = assets::register_routes(module, hooks)?;
        let migrations = assets::register_migrations(module, hooks)?;
        let view_namespace = assets::register_views(module, hooks)?;
        hooks.module_booted(module)?;

        Ok(BootOutcome {
            route_files,
            migrations,
            view_namespace,
        })
    }
}

/// One-call bootstrap with default configuration rooted at `modules_root`.
///
/// This is the single startup entry point for hosts that do not need custom
/// traversal or collision settings.
pub fn bootstrap<P: AsRef<Path>>(
    modules_root: P,
    hooks: &mut dyn HostHooks,
) -> Result<BootstrapReport, BootstrapError> {
    let mut manager = BootstrapManager::new(BootstrapConfig::with_root(modules_root));
    manager.bootstrap(hooks)
}
