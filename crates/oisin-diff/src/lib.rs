// SPDX-License-Identifier: MIT OR Apache-2.0
//! # Structural JSON comparison
//!
//! Compares two JSON-compatible value trees and produces a path-addressed
//! list of differences plus an aggregate summary.
//!
//! ## Engine
//!
//! [`Differ`] walks both trees in lockstep, depth-first, classifying each
//! discrepancy as one of four kinds:
//!
//! - `added`: present only in the new tree
//! - `removed`: present only in the old tree
//! - `changed`: same type, different value
//! - `type-changed`: different type tags (recorded once, no recursion below)
//!
//! Configured ignore paths prune entire subtrees from the walk.
//!
//! ## Renderers
//!
//! The [`render`] module turns a [`CompareResult`] into a multi-line
//! human-oriented report, a one-line-per-difference compact listing, or a
//! round-trippable JSON document.
//!
//! ```
//! use oisin_core::Value;
//! use oisin_diff::{DiffOptions, Differ};
//!
//! let old: Value = r#"{"name":"test"}"#.parse().unwrap();
//! let new: Value = r#"{"name":"test","age":30}"#.parse().unwrap();
//!
//! let differ = Differ::new(DiffOptions::default());
//! let result = differ.compare(&old, &new);
//!
//! assert_eq!(result.summary.added, 1);
//! assert_eq!(result.differences[0].path, "age");
//! ```

#![deny(missing_docs)]
#![deny(rust_2018_idioms)]

mod compare;
mod report;

/// Rendering of comparison results into textual representations
pub mod render;

pub use compare::{DiffOptions, Differ};
pub use report::{ChangeKind, CompareResult, Difference, Summary};
