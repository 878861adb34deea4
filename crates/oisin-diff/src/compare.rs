// SPDX-License-Identifier: MIT OR Apache-2.0
//! The comparison engine.
//!
//! A [`Differ`] walks two value trees in lockstep, depth-first and
//! pre-order, building dotted/bracketed paths as it descends. Type tags are
//! classified before any recursion decision: a tag mismatch is recorded
//! once as `type-changed` and the subtree below it is never entered. Leaf
//! equality is structural (derived on [`Value`]), not serialize-and-compare,
//! so object key order never affects it.
//!
//! Recursion depth equals the nesting depth of the inputs. Callers feeding
//! adversarially deep trees would need an explicit worklist; the observable
//! behavior would be unchanged.

use ahash::AHashSet;

use oisin_core::path;
use oisin_core::value::Map;
use oisin_core::Value;

use crate::report::{CompareResult, Difference, Summary};

/// Configuration for a [`Differ`].
#[derive(Debug, Clone, Default)]
pub struct DiffOptions {
    /// Exact paths to exclude from comparison, each pruning its whole
    /// subtree. No pattern matching.
    pub ignore_paths: Vec<String>,
}

/// Structural comparison engine.
///
/// Holds only the immutable ignore set; every [`Differ::compare`] call is
/// independent, so one instance can serve many callers concurrently.
#[derive(Debug, Clone, Default)]
pub struct Differ {
    ignore: AHashSet<String>,
}

impl Differ {
    /// Create a differ with the given options.
    #[must_use]
    pub fn new(options: DiffOptions) -> Self {
        Self {
            ignore: options.ignore_paths.into_iter().collect(),
        }
    }

    /// Compare two values.
    ///
    /// Deterministic and total: any pair of well-formed values yields a
    /// result, never an error. Mismatched types, missing keys, and length
    /// differences are ordinary outcomes. Inputs are borrowed and never
    /// mutated; reported values are clones owned by the result.
    #[must_use]
    pub fn compare(&self, old: &Value, new: &Value) -> CompareResult {
        let mut differences = Vec::new();
        self.walk(old, new, "", &mut differences);
        let summary = Summary::from_differences(&differences);
        CompareResult {
            differences,
            summary,
        }
    }

    fn walk(&self, old: &Value, new: &Value, path: &str, out: &mut Vec<Difference>) {
        if self.ignore.contains(path) {
            return;
        }

        // Tag mismatch ends the walk here even when both sides are
        // composite; per-element noise below a type change is meaningless.
        if old.type_tag() != new.type_tag() {
            out.push(Difference::type_changed(path, old, new));
            return;
        }

        match (old, new) {
            (Value::Object(old_map), Value::Object(new_map)) => {
                self.walk_objects(old_map, new_map, path, out);
            }
            (Value::Array(old_items), Value::Array(new_items)) => {
                self.walk_arrays(old_items, new_items, path, out);
            }
            _ if old != new => out.push(Difference::changed(path, old, new)),
            _ => {}
        }
    }

    /// Per-key walk over the union of both objects, old keys first, then
    /// keys only the new object has.
    fn walk_objects(&self, old: &Map, new: &Map, base: &str, out: &mut Vec<Difference>) {
        for (key, old_value) in old {
            let child = path::child_key(base, key);
            // Ignore check precedes presence classification: an ignored
            // path suppresses added/removed records, not just recursion.
            if self.ignore.contains(&child) {
                continue;
            }
            match new.get(key) {
                Some(new_value) => self.walk(old_value, new_value, &child, out),
                None => out.push(Difference::removed(child, old_value)),
            }
        }

        for (key, new_value) in new {
            if old.contains_key(key) {
                continue;
            }
            let child = path::child_key(base, key);
            if self.ignore.contains(&child) {
                continue;
            }
            out.push(Difference::added(child, new_value));
        }
    }

    /// Per-index walk up to the longer array's length.
    fn walk_arrays(&self, old: &[Value], new: &[Value], base: &str, out: &mut Vec<Difference>) {
        let max_len = old.len().max(new.len());
        for index in 0..max_len {
            let child = path::child_index(base, index);
            match (old.get(index), new.get(index)) {
                (Some(old_value), Some(new_value)) => {
                    self.walk(old_value, new_value, &child, out);
                }
                (Some(old_value), None) => out.push(Difference::removed(child, old_value)),
                (None, Some(new_value)) => out.push(Difference::added(child, new_value)),
                (None, None) => unreachable!("index below max of both lengths"),
            }
        }
    }
}
