//! Modhost - module auto-discovery and registration bootstrap
//!
//! This crate scans a configured modules root for self-contained feature
//! modules and registers each one's assets with a host application:
//! configuration files under `config/`, route files `routes/web.<ext>` and
//! `routes/api.<ext>`, a `database/migrations/` directory, and a
//! `resources/views/` directory. Modules are recognized by directory
//! convention alone; there is no central manifest of module names.
//!
//! ## Startup phases
//!
//! Bootstrap runs once at process startup, in two ordered phases:
//!
//! 1. **Register phase**: configuration from ALL modules is merged into the
//!    host before anything else runs, since boot-phase code may depend on
//!    configuration contributed by any module.
//! 2. **Boot phase**: routes, migrations, and views are loaded, and each
//!    module's setup hook fires.
//!
//! ## Design principles
//!
//! 1. **Explicit host hooks**: all side effects go through a [`HostHooks`]
//!    value passed into the bootstrap; there is no ambient global registry,
//!    so the whole pipeline is testable with recording stubs.
//! 2. **Absence is not an error**: a module with no recognized subresources
//!    simply contributes no registrations.
//! 3. **Fail fast**: a read failure or config key collision aborts startup;
//!    there is no partial-success mode.

pub mod bootstrap;
pub mod config;
pub mod host;
pub mod registry;
pub mod traits;
pub mod utils;

pub use bootstrap::{bootstrap, BootOutcome, BootstrapManager, BootstrapReport};
pub use config::{BootstrapConfig, ConfigCollisionPolicy, TraversalDepth};
pub use host::InMemoryHost;
pub use registry::{ModuleDescriptor, ModuleDiscovery};
pub use traits::{BootstrapError, HostHooks};
