// SPDX-License-Identifier: MIT OR Apache-2.0
//! Comparison result types.
//!
//! [`Difference`] records are created once at the point of detection and
//! owned by the result list; the [`Summary`] is always recomputed from the
//! full list so the two can never disagree.

use serde::{Deserialize, Deserializer, Serialize};

use oisin_core::{TypeTag, Value};

/// Classification of a single difference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChangeKind {
    /// Present only in the new tree.
    Added,
    /// Present only in the old tree.
    Removed,
    /// Same type, different value.
    Changed,
    /// Different type tags.
    TypeChanged,
}

/// Maps a present value field to `Some`, including a JSON `null` (which is
/// a carried [`Value::Null`], not absence). Plain `Option` deserialization
/// would fold present-null into `None` and lose it on a round trip; absence
/// is handled by `default`.
fn de_opt_value<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Value>, D::Error> {
    Value::deserialize(deserializer).map(Some)
}

/// One discrepancy at a path-addressed location.
///
/// Which optional fields are populated follows from the kind: `added`
/// carries only the new value, `removed` only the old, `changed` both
/// values, `type-changed` both values and both type tags. The constructors
/// enforce this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Difference {
    /// Location of the discrepancy within the tree.
    pub path: String,
    /// Classification of the discrepancy.
    pub kind: ChangeKind,
    /// Value on the old side, where the kind carries one.
    #[serde(
        default,
        deserialize_with = "de_opt_value",
        skip_serializing_if = "Option::is_none"
    )]
    pub old_value: Option<Value>,
    /// Value on the new side, where the kind carries one.
    #[serde(
        default,
        deserialize_with = "de_opt_value",
        skip_serializing_if = "Option::is_none"
    )]
    pub new_value: Option<Value>,
    /// Old-side type tag, populated for `type-changed` only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_type: Option<TypeTag>,
    /// New-side type tag, populated for `type-changed` only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_type: Option<TypeTag>,
}

impl Difference {
    /// A value present only in the new tree.
    #[must_use]
    pub fn added(path: impl Into<String>, new_value: &Value) -> Self {
        Self {
            path: path.into(),
            kind: ChangeKind::Added,
            old_value: None,
            new_value: Some(new_value.clone()),
            old_type: None,
            new_type: None,
        }
    }

    /// A value present only in the old tree.
    #[must_use]
    pub fn removed(path: impl Into<String>, old_value: &Value) -> Self {
        Self {
            path: path.into(),
            kind: ChangeKind::Removed,
            old_value: Some(old_value.clone()),
            new_value: None,
            old_type: None,
            new_type: None,
        }
    }

    /// A same-type value change.
    #[must_use]
    pub fn changed(path: impl Into<String>, old_value: &Value, new_value: &Value) -> Self {
        Self {
            path: path.into(),
            kind: ChangeKind::Changed,
            old_value: Some(old_value.clone()),
            new_value: Some(new_value.clone()),
            old_type: None,
            new_type: None,
        }
    }

    /// A type-tag mismatch; the tags are derived from the values.
    #[must_use]
    pub fn type_changed(path: impl Into<String>, old_value: &Value, new_value: &Value) -> Self {
        Self {
            path: path.into(),
            kind: ChangeKind::TypeChanged,
            old_type: Some(old_value.type_tag()),
            new_type: Some(new_value.type_tag()),
            old_value: Some(old_value.clone()),
            new_value: Some(new_value.clone()),
        }
    }
}

/// Aggregate counts derived from a difference list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Total number of differences.
    pub total: usize,
    /// Number of `added` differences.
    pub added: usize,
    /// Number of `removed` differences.
    pub removed: usize,
    /// Number of `changed` differences.
    pub changed: usize,
    /// Number of `type-changed` differences.
    pub type_changed: usize,
    /// True iff the list is empty.
    pub identical: bool,
}

impl Summary {
    /// Derive a summary from a difference list.
    #[must_use]
    pub fn from_differences(differences: &[Difference]) -> Self {
        let count = |kind| differences.iter().filter(|d| d.kind == kind).count();
        Self {
            total: differences.len(),
            added: count(ChangeKind::Added),
            removed: count(ChangeKind::Removed),
            changed: count(ChangeKind::Changed),
            type_changed: count(ChangeKind::TypeChanged),
            identical: differences.is_empty(),
        }
    }
}

/// The full outcome of one comparison: ordered differences plus summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompareResult {
    /// Differences in detection order (depth-first, pre-order).
    pub differences: Vec<Difference>,
    /// Aggregate counts over `differences`.
    pub summary: Summary,
}
