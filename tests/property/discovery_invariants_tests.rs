//! Property tests for discovery invariants
//!
//! Discovery must find exactly the directories present, agree with itself on
//! an unchanged tree, and register nothing for bare modules.

#[path = "../common.rs"]
mod common;
use common::{HookEvent, RecordingHooks};

use proptest::prelude::*;
use std::collections::BTreeSet;
use std::fs;

use modhost::config::TraversalDepth;
use modhost::registry::discovery::ModuleDiscovery;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn discovery_finds_exactly_the_created_modules(
        names in prop::collection::btree_set("[a-z][a-z0-9]{0,11}", 0..8)
    ) {
        let temp = tempfile::tempdir().unwrap();
        let root = temp.path().join("modules");
        fs::create_dir_all(&root).unwrap();
        for name in &names {
            fs::create_dir_all(root.join(name)).unwrap();
        }

        let discovery = ModuleDiscovery::new(&root, TraversalDepth::Flat);
        let found: BTreeSet<String> = discovery
            .discover_modules()
            .unwrap()
            .into_iter()
            .map(|m| m.name)
            .collect();
        prop_assert_eq!(&found, &names);

        // unchanged tree, second scan agrees
        let again: BTreeSet<String> = discovery
            .discover_modules()
            .unwrap()
            .into_iter()
            .map(|m| m.name)
            .collect();
        prop_assert_eq!(again, found);
    }

    #[test]
    fn bare_modules_register_no_assets(
        names in prop::collection::btree_set("[a-z][a-z0-9]{0,11}", 1..6)
    ) {
        let temp = tempfile::tempdir().unwrap();
        let root = temp.path().join("modules");
        fs::create_dir_all(&root).unwrap();
        for name in &names {
            fs::create_dir_all(root.join(name)).unwrap();
        }

        let mut hooks = RecordingHooks::new();
        let report = modhost::bootstrap(&root, &mut hooks).unwrap();

        prop_assert_eq!(report.modules, names.len());
        prop_assert_eq!(report.config_keys, 0);
        prop_assert!(hooks
            .events
            .iter()
            .all(|e| matches!(e, HookEvent::Booted(_))));
    }
}
