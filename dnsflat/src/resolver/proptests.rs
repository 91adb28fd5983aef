//! Property-based tests for include resolution.
//!
//! Each case builds a real directory tree, so case counts are kept low.

use std::collections::BTreeSet;
use std::fs;

use proptest::prelude::*;
use tempfile::TempDir;

use super::{resolve_config, ConfigResolver, VisitedSet};
use crate::filter::SuffixPatterns;

fn file_name_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_-]{1,12}\\.(conf|txt|bak)"
}

fn unique_names_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::btree_set(file_name_strategy(), 1..12)
        .prop_map(|set| set.into_iter().collect::<Vec<_>>())
        .prop_shuffle()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    // Directory entries come out in name order whatever order they were created in
    #[test]
    fn conf_dir_emits_in_name_order(names in unique_names_strategy()) {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("dnsmasq.d");
        fs::create_dir(&dir).unwrap();
        for name in &names {
            fs::write(dir.join(name), format!("file={name}\n")).unwrap();
        }
        let main = tmp.path().join("dnsmasq.conf");
        fs::write(&main, format!("conf-dir={}\n", dir.display())).unwrap();

        let lines = resolve_config(&main, &SuffixPatterns::empty()).unwrap();

        let sorted: BTreeSet<&String> = names.iter().collect();
        let expected: Vec<String> = sorted.into_iter().map(|n| format!("file={n}")).collect();
        prop_assert_eq!(lines, expected);
    }

    // Resolving the same tree twice gives identical output
    #[test]
    fn resolution_is_idempotent(names in unique_names_strategy(), suffix in prop_oneof![Just(".conf"), Just(".txt"), Just(".bak")]) {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("dnsmasq.d");
        fs::create_dir(&dir).unwrap();
        for name in &names {
            fs::write(dir.join(name), format!("file={name}\nconf-dir={}\n", dir.display())).unwrap();
        }
        let main = tmp.path().join("dnsmasq.conf");
        fs::write(&main, format!("conf-dir={},*{suffix}\n", dir.display())).unwrap();

        let exclusions = SuffixPatterns::new([".bak"]);
        let first = resolve_config(&main, &exclusions).unwrap();
        let second = resolve_config(&main, &exclusions).unwrap();
        prop_assert_eq!(first, second);
    }

    // Every file reachable many times is still emitted exactly once
    #[test]
    fn every_file_emitted_once(names in unique_names_strategy(), repeats in 1..4usize) {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("dnsmasq.d");
        fs::create_dir(&dir).unwrap();

        let mut main_body = String::new();
        for name in &names {
            let path = dir.join(name);
            // Each file includes the whole directory again
            fs::write(&path, format!("file={name}\nconf-dir={}\n", dir.display())).unwrap();
            for _ in 0..repeats {
                main_body.push_str(&format!("conf-file={}\n", path.display()));
            }
        }
        let main = tmp.path().join("dnsmasq.conf");
        fs::write(&main, main_body).unwrap();

        let lines = resolve_config(&main, &SuffixPatterns::empty()).unwrap();

        prop_assert_eq!(lines.len(), names.len());
        let unique: BTreeSet<&String> = lines.iter().collect();
        prop_assert_eq!(unique.len(), lines.len());
        // The first file named in the main config comes first
        prop_assert_eq!(&lines[0], &format!("file={}", names[0]));
    }

    // A global exclusion always wins over a local allow-list
    #[test]
    fn global_exclusion_beats_allow_list(names in unique_names_strategy()) {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("dnsmasq.d");
        fs::create_dir(&dir).unwrap();
        for name in &names {
            fs::write(dir.join(name), format!("file={name}\n")).unwrap();
        }
        let main = tmp.path().join("dnsmasq.conf");
        fs::write(&main, format!("conf-dir={},*.conf,*.txt\n", dir.display())).unwrap();

        let exclusions = SuffixPatterns::new([".conf"]);
        let resolver = ConfigResolver::new(&exclusions);
        let lines = resolver.resolve(&main, &mut VisitedSet::new()).unwrap();

        for line in &lines {
            prop_assert!(line.ends_with(".txt"));
        }
        let expected = names.iter().filter(|n| n.ends_with(".txt")).count();
        prop_assert_eq!(lines.len(), expected);
    }
}
