// SPDX-License-Identifier: MIT OR Apache-2.0
//! # oisin
//!
//! Umbrella crate for structural JSON comparison: compare two versions of
//! an API response or structured document and get a path-addressed,
//! kind-classified list of differences with an aggregate summary.
//!
//! ```
//! use oisin::{DiffOptions, Differ, Value};
//!
//! let old: Value = r#"{"user":{"name":"Alice","age":25}}"#.parse().unwrap();
//! let new: Value = r#"{"user":{"name":"Bob","age":25}}"#.parse().unwrap();
//!
//! let result = Differ::new(DiffOptions::default()).compare(&old, &new);
//! assert_eq!(result.summary.total, 1);
//! assert_eq!(result.differences[0].path, "user.name");
//! ```
//!
//! The constituent crates are re-exported as [`core`] and [`diff`].

#![deny(missing_docs)]
#![deny(rust_2018_idioms)]

/// Re-export of oisin-core: value model, type tags, path utilities.
pub use oisin_core as core;

/// Re-export of oisin-diff: comparison engine and renderers.
pub use oisin_diff as diff;

pub use oisin_core::{Map, ParseError, TypeTag, Value};
pub use oisin_diff::{ChangeKind, CompareResult, DiffOptions, Differ, Difference, Summary};
