//! Module discovery and asset registration
//!
//! Handles scanning the modules root and the per-asset-kind registration
//! rules.

pub mod assets;
pub mod discovery;

pub use assets::{config_files, ConfigFile, CONFIG_EXTENSIONS};
pub use discovery::{ModuleDescriptor, ModuleDiscovery};
