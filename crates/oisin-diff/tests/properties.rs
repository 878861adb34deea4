// SPDX-License-Identifier: MIT OR Apache-2.0
//! Property tests for the comparison engine.

use proptest::collection::vec;
use proptest::prelude::*;

use oisin_core::value::Map;
use oisin_core::Value;
use oisin_diff::{ChangeKind, DiffOptions, Differ};

/// Arbitrary JSON-like trees of bounded depth and width.
fn arb_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        Just(Value::Undefined),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        "[a-z]{0,8}".prop_map(Value::from),
    ];
    leaf.prop_recursive(4, 32, 5, |inner| {
        prop_oneof![
            vec(inner.clone(), 0..5).prop_map(Value::Array),
            vec(("[a-z]{1,6}", inner), 0..5).prop_map(|entries| {
                let mut map = Map::new();
                for (key, value) in entries {
                    map.insert(key, value);
                }
                Value::Object(map)
            }),
        ]
    })
}

proptest! {
    /// Comparing any value against itself yields an identical result.
    #[test]
    fn identity(value in arb_value()) {
        let differ = Differ::new(DiffOptions::default());
        let result = differ.compare(&value, &value);
        prop_assert!(result.summary.identical);
        prop_assert!(result.differences.is_empty());
    }

    /// Swapping arguments mirrors added into removed (and vice versa) at
    /// the same paths, with the carried value moved to the other side.
    #[test]
    fn kind_symmetry(old in arb_value(), new in arb_value()) {
        let differ = Differ::new(DiffOptions::default());
        let forward = differ.compare(&old, &new);
        let backward = differ.compare(&new, &old);

        for diff in &forward.differences {
            if diff.kind == ChangeKind::Added {
                let mirrored = backward
                    .differences
                    .iter()
                    .find(|d| d.path == diff.path && d.kind == ChangeKind::Removed);
                prop_assert!(mirrored.is_some(), "no removed mirror at {}", diff.path);
                prop_assert_eq!(&mirrored.unwrap().old_value, &diff.new_value);
            }
        }
        prop_assert_eq!(forward.summary.added, backward.summary.removed);
        prop_assert_eq!(forward.summary.removed, backward.summary.added);
        prop_assert_eq!(forward.summary.changed, backward.summary.changed);
        prop_assert_eq!(forward.summary.type_changed, backward.summary.type_changed);
    }

    /// The summary always agrees with the difference list it was derived
    /// from.
    #[test]
    fn summary_consistency(old in arb_value(), new in arb_value()) {
        let differ = Differ::new(DiffOptions::default());
        let result = differ.compare(&old, &new);
        let summary = result.summary;

        prop_assert_eq!(summary.total, result.differences.len());
        let count = |kind: ChangeKind| {
            result.differences.iter().filter(|d| d.kind == kind).count()
        };
        prop_assert_eq!(summary.added, count(ChangeKind::Added));
        prop_assert_eq!(summary.removed, count(ChangeKind::Removed));
        prop_assert_eq!(summary.changed, count(ChangeKind::Changed));
        prop_assert_eq!(summary.type_changed, count(ChangeKind::TypeChanged));
        prop_assert_eq!(summary.identical, summary.total == 0);
    }

    /// Every difference carries exactly the fields its kind promises.
    #[test]
    fn carried_fields_match_kind(old in arb_value(), new in arb_value()) {
        let differ = Differ::new(DiffOptions::default());
        for diff in differ.compare(&old, &new).differences {
            match diff.kind {
                ChangeKind::Added => {
                    prop_assert!(diff.new_value.is_some() && diff.old_value.is_none());
                }
                ChangeKind::Removed => {
                    prop_assert!(diff.old_value.is_some() && diff.new_value.is_none());
                }
                ChangeKind::Changed => {
                    prop_assert!(diff.old_value.is_some() && diff.new_value.is_some());
                    prop_assert!(diff.old_type.is_none() && diff.new_type.is_none());
                }
                ChangeKind::TypeChanged => {
                    prop_assert!(diff.old_type.is_some() && diff.new_type.is_some());
                    prop_assert_ne!(diff.old_type, diff.new_type);
                }
            }
        }
    }
}
