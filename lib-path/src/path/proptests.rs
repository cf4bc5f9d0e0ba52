//! Property-based tests for path normalization.
//!
//! The unit tests in `normalize` and `normalizer` cover the fixed examples;
//! this module hammers the canonical-form invariants with generated paths
//! in every spelling (POSIX, drive letter, UNC, mixed separators).

use super::normalize::strip_and_replace_backslashes;
use super::{PathNormalizer, PathRelationship};
use crate::platform::HostPlatform;
use proptest::prelude::*;

fn component_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(".".to_string()),
        Just("..".to_string()),
        Just(String::new()),
        "[a-z0-9_.-]{1,10}",
    ]
}

fn separator_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("/"), Just("\\")]
}

fn prefix_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just(""),
        Just("/"),
        Just("//"),
        Just("\\\\"),
        Just("///"),
        Just("c:/"),
        Just("D:\\"),
    ]
}

fn raw_path_strategy() -> impl Strategy<Value = String> {
    (
        prefix_strategy(),
        prop::collection::vec((component_strategy(), separator_strategy()), 0..8),
    )
        .prop_map(|(prefix, parts)| {
            let mut path = prefix.to_string();
            for (component, sep) in parts {
                path.push_str(&component);
                path.push_str(sep);
            }
            path
        })
}

fn normalizers() -> [PathNormalizer; 2] {
    [
        PathNormalizer::new(HostPlatform::Linux).with_working_dir("/home/user/work"),
        PathNormalizer::new(HostPlatform::Windows).with_working_dir("c:/Users/user/work"),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 5000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // format_abs_norm_path(format_abs_norm_path(p)) == format_abs_norm_path(p)
    #[test]
    fn abs_norm_path_idempotent(raw in raw_path_strategy()) {
        for n in normalizers() {
            let once = n.format_abs_norm_path(&raw).unwrap();
            let twice = n.format_abs_norm_path(&once).unwrap();
            prop_assert_eq!(&once, &twice, "platform {}", n.platform());
        }
    }

    // format_norm_path is idempotent as well
    #[test]
    fn norm_path_idempotent(raw in raw_path_strategy()) {
        for n in normalizers() {
            let once = n.format_norm_path(&raw);
            prop_assert_eq!(n.format_norm_path(&once), once);
        }
    }

    // Canonical paths use forward slashes only and never end in a slash
    // unless they are a bare root
    #[test]
    fn canonical_form_shape(raw in raw_path_strategy()) {
        for n in normalizers() {
            let canonical = n.format_abs_norm_path(&raw).unwrap();
            prop_assert!(!canonical.contains('\\'));
            if canonical.ends_with('/') {
                prop_assert!(canonical == "/" || canonical == "//" || canonical.ends_with(":/"));
            }
        }
    }

    // Absolute canonical paths contain no `.` or `..` components
    #[test]
    fn abs_norm_path_has_no_dot_components(raw in raw_path_strategy()) {
        for n in normalizers() {
            let canonical = n.format_abs_norm_path(&raw).unwrap();
            for component in canonical.split('/') {
                prop_assert_ne!(component, ".");
                prop_assert_ne!(component, "..");
            }
        }
    }

    // UNC inputs stay UNC
    #[test]
    fn unc_prefix_preserved(parts in prop::collection::vec("[a-z0-9]{1,8}", 1..5)) {
        let raw = format!("\\\\{}", parts.join("\\"));
        for n in normalizers() {
            prop_assert!(n.format_abs_norm_path(&raw).unwrap().starts_with("//"));
            prop_assert!(n.format_norm_path(&raw).starts_with("//"));
        }
    }

    // Joined segments never reset the base, so the result stays below it
    #[test]
    fn join_stays_below_base(
        base in prop::collection::vec("[a-z0-9]{1,8}", 1..4),
        segments in prop::collection::vec("[/\\\\]{0,2}[a-z0-9]{1,8}", 0..4),
    ) {
        let base = format!("/{}", base.join("/"));
        for n in normalizers() {
            let joined = n.path_join_posix(&base, &segments);
            prop_assert!(
                PathRelationship::is_within(&joined, &base),
                "{} not within {}", joined, base
            );
        }
    }

    // Backslash replacement is idempotent and removes every backslash
    #[test]
    fn backslash_replacement_idempotent(raw in raw_path_strategy()) {
        let once = strip_and_replace_backslashes(&raw);
        prop_assert!(!once.contains('\\'));
        prop_assert_eq!(strip_and_replace_backslashes(&once), once);
    }
}
