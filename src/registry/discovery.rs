//! Module discovery
//!
//! Scans the modules root and discovers available modules.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::config::TraversalDepth;
use crate::traits::BootstrapError;

/// Subdirectory names reserved for module subresources. In nested traversal
/// these are never offered as child modules of a namespace.
pub(crate) const RESERVED_SUBDIRS: &[&str] = &["config", "routes", "database", "resources"];

/// Discovered module information
///
/// Derived purely from filesystem presence checks at discovery time; not
/// mutated afterwards and not persisted. The `config/` directory contents are
/// enumerated lazily at registration time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleDescriptor {
    /// Module root directory
    pub path: PathBuf,
    /// Module identifier relative to the modules root (`User`, `Learning/Course`)
    pub name: String,
    /// `config/` directory, if present
    pub config_dir: Option<PathBuf>,
    /// Resolved `routes/web.<ext>` file, if present
    pub web_routes: Option<PathBuf>,
    /// Resolved `routes/api.<ext>` file, if present
    pub api_routes: Option<PathBuf>,
    /// `database/migrations/` directory, if present
    pub migrations_dir: Option<PathBuf>,
    /// `resources/views/` directory, if present
    pub views_dir: Option<PathBuf>,
}

impl ModuleDescriptor {
    /// Probe a module directory for its optional subresources.
    ///
    /// Absence of any subresource is the expected common case, never an
    /// error. A subdirectory that exists but cannot be read is fatal.
    pub fn probe(path: PathBuf, name: String) -> Result<Self, BootstrapError> {
        let config_dir = existing_dir(path.join("config"));
        let (web_routes, api_routes) = match existing_dir(path.join("routes")) {
            Some(routes_dir) => (
                resolve_route_file(&routes_dir, "web")?,
                resolve_route_file(&routes_dir, "api")?,
            ),
            None => (None, None),
        };
        let migrations_dir = existing_dir(path.join("database").join("migrations"));
        let views_dir = existing_dir(path.join("resources").join("views"));

        Ok(Self {
            path,
            name,
            config_dir,
            web_routes,
            api_routes,
            migrations_dir,
            views_dir,
        })
    }

    /// View namespace: the module name with path separators flattened, so
    /// nested modules cannot collide in a flat view namespace.
    pub fn view_namespace(&self) -> String {
        self.name.replace('/', "_")
    }
}

fn existing_dir(path: PathBuf) -> Option<PathBuf> {
    if path.is_dir() {
        Some(path)
    } else {
        None
    }
}

/// Resolve `<stem>.<ext>` directly inside `dir`.
///
/// Only the exact stem is recognized and nothing is searched recursively.
/// When several extensions are present for one stem, the lexicographically
/// first is used and the rest are skipped with a warning.
fn resolve_route_file(dir: &Path, stem: &str) -> Result<Option<PathBuf>, BootstrapError> {
    let entries = fs::read_dir(dir).map_err(|e| BootstrapError::filesystem(dir, e))?;

    let mut candidates = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| BootstrapError::filesystem(dir, e))?;
        let path = entry.path();
        if !path.is_file() || path.extension().is_none() {
            continue;
        }
        if path.file_stem().map(|s| s == stem).unwrap_or(false) {
            candidates.push(path);
        }
    }

    candidates.sort();
    if candidates.len() > 1 {
        warn!(
            "Multiple {}.* route files in {:?}, using {:?}",
            stem, dir, candidates[0]
        );
    }

    Ok(candidates.into_iter().next())
}

/// Module discovery scanner
pub struct ModuleDiscovery {
    /// Base directory to scan for modules
    modules_root: PathBuf,
    /// Traversal depth policy
    depth: TraversalDepth,
}

impl ModuleDiscovery {
    /// Create a new module discovery scanner
    pub fn new<P: AsRef<Path>>(modules_root: P, depth: TraversalDepth) -> Self {
        Self {
            modules_root: modules_root.as_ref().to_path_buf(),
            depth,
        }
    }

    /// Discover all modules under the modules root.
    ///
    /// A missing root is a valid host with no modules and yields an empty
    /// result; the root is never created. Results come in directory-listing
    /// order, which is filesystem-dependent: callers needing a deterministic
    /// order must sort explicitly.
    pub fn discover_modules(&self) -> Result<Vec<ModuleDescriptor>, BootstrapError> {
        info!("Discovering modules in {:?}", self.modules_root);

        if !self.modules_root.exists() {
            debug!(
                "Modules root does not exist, nothing to discover: {:?}",
                self.modules_root
            );
            return Ok(Vec::new());
        }

        let mut modules = Vec::new();
        for dir in list_subdirs(&self.modules_root)? {
            let name = dir_name(&dir);
            match self.depth {
                TraversalDepth::Flat => {
                    modules.push(ModuleDescriptor::probe(dir, name)?);
                }
                TraversalDepth::Nested => {
                    // The namespace directory is itself a candidate module;
                    // both it and its children may register.
                    for child in list_subdirs(&dir)? {
                        let child_name = dir_name(&child);
                        if RESERVED_SUBDIRS.contains(&child_name.as_str()) {
                            continue;
                        }
                        modules.push(ModuleDescriptor::probe(
                            child,
                            format!("{}/{}", name, child_name),
                        )?);
                    }
                    modules.push(ModuleDescriptor::probe(dir, name)?);
                }
            }
        }

        info!("Discovered {} modules", modules.len());
        Ok(modules)
    }
}

/// List immediate subdirectories of `dir`. Non-directory entries are skipped.
fn list_subdirs(dir: &Path) -> Result<Vec<PathBuf>, BootstrapError> {
    let entries = fs::read_dir(dir).map_err(|e| BootstrapError::filesystem(dir, e))?;

    let mut dirs = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| BootstrapError::filesystem(dir, e))?;
        let path = entry.path();
        if path.is_dir() {
            dirs.push(path);
        }
    }
    Ok(dirs)
}

fn dir_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
