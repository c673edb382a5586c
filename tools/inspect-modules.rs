//! Inspect a modules tree
//!
//! Dry-runs the module bootstrap against an in-memory host and reports what
//! a real startup would register.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

use modhost::utils::init_logging;
use modhost::{BootstrapConfig, BootstrapManager, InMemoryHost, TraversalDepth};

#[derive(Parser)]
#[command(
    name = "inspect-modules",
    about = "Discover modules under a root and report what a bootstrap would register"
)]
struct Args {
    /// Modules root directory
    root: PathBuf,

    /// Use two-level namespace traversal
    #[arg(long)]
    nested: bool,

    /// Load bootstrap configuration from a TOML file (overrides --nested)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Emit JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    init_logging(None);
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => BootstrapConfig::from_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => BootstrapConfig::default(),
    };
    config.modules_root = args.root.clone();
    if args.config.is_none() && args.nested {
        config.traversal = TraversalDepth::Nested;
    }

    let mut host = InMemoryHost::new();
    let report = BootstrapManager::new(config)
        .bootstrap(&mut host)
        .context("bootstrap failed")?;

    if args.json {
        let view_roots: Vec<_> = host
            .view_roots()
            .iter()
            .map(|(namespace, dir)| {
                serde_json::json!({ "namespace": namespace, "dir": dir })
            })
            .collect();
        let out = serde_json::json!({
            "modules": host.booted(),
            "config": host.config(),
            "route_files": host.route_files(),
            "migration_dirs": host.migration_dirs(),
            "view_roots": view_roots,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("modules booted: {}", report.modules);
        for name in host.booted() {
            println!("  {}", name);
        }
        println!("config keys merged: {}", report.config_keys);
        for key in host.config().keys() {
            println!("  {}", key);
        }
        println!("route files loaded: {}", report.route_files);
        for path in host.route_files() {
            println!("  {}", path.display());
        }
        println!("migration dirs registered: {}", report.migration_dirs);
        for dir in host.migration_dirs() {
            println!("  {}", dir.display());
        }
        println!("view namespaces registered: {}", report.view_namespaces);
        for (namespace, dir) in host.view_roots() {
            println!("  {} -> {}", namespace, dir.display());
        }
    }

    Ok(())
}
