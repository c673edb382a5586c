//! Per-asset-kind registration
//!
//! Each function checks one optional subresource of a module and forwards it
//! to the host hooks when present. Absence produces no calls and no error.

use std::fs;
use std::path::PathBuf;
use tracing::debug;

use crate::registry::discovery::ModuleDescriptor;
use crate::traits::{BootstrapError, HostHooks};

/// Configuration file extensions recognized inside `config/`.
pub const CONFIG_EXTENSIONS: &[&str] = &["toml", "json"];

/// A configuration file discovered inside a module's `config/` directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    /// Host configuration key (file name without extension)
    pub key: String,
    /// File path
    pub path: PathBuf,
}

/// Enumerate a module's configuration files.
///
/// Only files directly inside `config/` with a recognized extension are
/// returned; subdirectories are not recursed into. Sorted by key so merge
/// order does not depend on directory-listing order.
pub fn config_files(module: &ModuleDescriptor) -> Result<Vec<ConfigFile>, BootstrapError> {
    let dir = match &module.config_dir {
        Some(dir) => dir,
        None => return Ok(Vec::new()),
    };

    let entries = fs::read_dir(dir).map_err(|e| BootstrapError::filesystem(dir, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| BootstrapError::filesystem(dir, e))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let recognized = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|ext| CONFIG_EXTENSIONS.contains(&ext))
            .unwrap_or(false);
        if !recognized {
            debug!("Skipping unrecognized config file {:?}", path);
            continue;
        }

        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            files.push(ConfigFile {
                key: stem.to_string(),
                path: path.clone(),
            });
        }
    }

    files.sort_by(|a, b| a.key.cmp(&b.key));
    Ok(files)
}

/// Register whichever of `routes/web.*` / `routes/api.*` resolved for this
/// module. Both, either, or neither may be present.
pub fn register_routes(
    module: &ModuleDescriptor,
    hooks: &mut dyn HostHooks,
) -> Result<usize, BootstrapError> {
    let mut count = 0;

    if let Some(path) = &module.web_routes {
        debug!("Loading web routes for module {}: {:?}", module.name, path);
        hooks.load_routes(path)?;
        count += 1;
    }
    if let Some(path) = &module.api_routes {
        debug!("Loading api routes for module {}: {:?}", module.name, path);
        hooks.load_routes(path)?;
        count += 1;
    }

    Ok(count)
}

/// Register the module's migrations directory, if present. The host
/// enumerates and orders the migration files inside it.
pub fn register_migrations(
    module: &ModuleDescriptor,
    hooks: &mut dyn HostHooks,
) -> Result<bool, BootstrapError> {
    match &module.migrations_dir {
        Some(dir) => {
            debug!("Registering migrations for module {}: {:?}", module.name, dir);
            hooks.register_migrations(dir)?;
            Ok(true)
        }
        None => Ok(false),
    }
}

/// Register the module's views directory under its derived namespace, if
/// present.
pub fn register_views(
    module: &ModuleDescriptor,
    hooks: &mut dyn HostHooks,
) -> Result<Option<String>, BootstrapError> {
    match &module.views_dir {
        Some(dir) => {
            let namespace = module.view_namespace();
            debug!(
                "Registering views for module {} under namespace {}: {:?}",
                module.name, namespace, dir
            );
            hooks.register_views(dir, &namespace)?;
            Ok(Some(namespace))
        }
        None => Ok(None),
    }
}
