//! Property-based tests for the path-string functions.
//!
//! The unit tests cover the documented cases; these properties check the
//! algebraic laws: augmentation with no overrides is the identity, and
//! lexical normalization is idempotent and free of `.` segments.

use proptest::prelude::*;

use crate::augment::Augment;
use crate::expand::expand_vars;
use crate::shrink::{normpath, shrinkuser};

// Filename-ish segments, dots included so extension splitting gets exercised
fn segment_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_.-]{1,12}"
}

fn relative_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(segment_strategy(), 1..6).prop_map(|parts| parts.join("/"))
}

fn path_strategy() -> impl Strategy<Value = String> {
    (prop::bool::ANY, relative_path_strategy())
        .prop_map(|(rooted, rel)| if rooted { format!("/{rel}") } else { rel })
}

fn path_with_dots_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just(".".to_string()),
            Just("..".to_string()),
            "[a-z0-9_-]{1,8}",
        ],
        1..8,
    )
    .prop_map(|parts| format!("/{}", parts.join("/")))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        .. ProptestConfig::default()
    })]

    // Augmentation with no overrides reproduces the input
    #[test]
    fn augment_identity(path in path_strategy()) {
        prop_assert_eq!(Augment::new().apply(&path), path);
    }

    // The identity also holds in multidot mode
    #[test]
    fn augment_identity_multidot(path in path_strategy()) {
        prop_assert_eq!(Augment::new().with_multidot(true).apply(&path), path);
    }

    // A replaced extension always terminates the result
    #[test]
    fn augment_ext_override_is_suffix(path in path_strategy()) {
        let replaced = Augment::new().with_ext(".new").apply(&path);
        prop_assert!(replaced.ends_with(".new"));
    }

    // Normalization is idempotent
    #[test]
    fn normpath_idempotent(path in path_with_dots_strategy()) {
        let once = normpath(&path);
        prop_assert_eq!(normpath(&once), once);
    }

    // Normalized absolute paths contain no "." or ".." segments
    #[test]
    fn normpath_absolute_no_dot_segments(path in path_with_dots_strategy()) {
        let normalized = normpath(&path);
        for segment in normalized.split('/') {
            prop_assert_ne!(segment, ".");
            prop_assert_ne!(segment, "..");
        }
    }

    // Shrinking is idempotent: a shrunk path never shrinks further
    #[test]
    fn shrinkuser_idempotent(path in path_strategy()) {
        let once = shrinkuser(&path);
        prop_assert_eq!(shrinkuser(&once), once);
    }

    // Variable expansion leaves reference-free strings alone
    #[test]
    fn expand_vars_no_references_unchanged(path in "[a-zA-Z0-9_/.-]{0,40}") {
        prop_assert_eq!(expand_vars(&path), path);
    }
}
