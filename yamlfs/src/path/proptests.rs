//! Property-based tests for path cleaning and common prefixes.
//!
//! The cheaper properties live next to the code; these run many more cases
//! over messier inputs.

use super::{clean, common_prefix};
use proptest::prelude::*;

fn segment_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => "[a-z0-9_-]{1,8}",
        1 => Just(".".to_string()),
        1 => Just("..".to_string()),
        1 => Just(String::new()),
    ]
}

fn messy_path_strategy() -> impl Strategy<Value = String> {
    (any::<bool>(), prop::collection::vec(segment_strategy(), 0..10)).prop_map(
        |(rooted, parts)| {
            let body = parts.join("/");
            if rooted {
                format!("/{body}")
            } else {
                body
            }
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Cleaning is idempotent: clean(clean(p)) == clean(p)
    #[test]
    fn clean_idempotent(path in messy_path_strategy()) {
        let once = clean(&path, b'/');
        prop_assert_eq!(clean(&once, b'/'), once);
    }

    // Rooted cleaned paths never keep ".." segments
    #[test]
    fn rooted_clean_has_no_parent_refs(path in messy_path_strategy()) {
        let cleaned = clean(&format!("/{path}"), b'/');
        prop_assert!(cleaned.split('/').all(|seg| seg != ".."));
    }

    // A single path is its own common prefix
    #[test]
    fn single_path_prefix_is_clean(path in messy_path_strategy()) {
        prop_assert_eq!(common_prefix(b'/', &[path.clone()]), clean(&path, b'/'));
    }

    // The prefix is shared by every cleaned input
    #[test]
    fn prefix_shared_by_all(paths in prop::collection::vec(messy_path_strategy(), 0..8)) {
        let prefix = common_prefix(b'/', &paths);
        for path in &paths {
            prop_assert!(clean(path, b'/').starts_with(&prefix));
        }
    }

    // Adding a path can only shorten the prefix
    #[test]
    fn prefix_shrinks_monotonically(
        paths in prop::collection::vec(messy_path_strategy(), 2..8),
        extra in messy_path_strategy(),
    ) {
        let before = common_prefix(b'/', &paths);
        let mut more = paths.clone();
        more.push(extra);
        let after = common_prefix(b'/', &more);
        prop_assert!(before.starts_with(&after));
    }

    // A path and its own subdirectory share exactly the path
    #[test]
    fn parent_and_child_share_parent(
        parts in prop::collection::vec("[a-z]{1,6}", 1..6),
        child in "[a-z]{1,6}",
    ) {
        let parent = format!("/{}", parts.join("/"));
        let nested = format!("{parent}/{child}");
        prop_assert_eq!(common_prefix(b'/', &[parent.clone(), nested]), parent);
    }
}
