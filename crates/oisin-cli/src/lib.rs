// SPDX-License-Identifier: MIT OR Apache-2.0
//! # oisin-cli
//!
//! Command-line interface for oisin - structural comparison of JSON
//! documents and API responses.
//!
//! ## Usage
//!
//! ```bash
//! # Compare two files
//! oisin old.json new.json
//!
//! # Compare two live endpoints
//! oisin https://api.example.com/v1/users https://api.example.com/v2/users
//!
//! # Two documents on stdin, separated by a --- line
//! cat payload.txt | oisin
//!
//! # Ignore volatile paths, machine-readable output
//! oisin old.json new.json -i user.id metadata.timestamp -f json
//! ```
//!
//! ## Exit codes
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0 | Inputs are identical |
//! | 1 | Differences found |
//! | 2 | Operational error (bad input, fetch failure, malformed JSON) |
//!
//! ## Library Usage
//!
//! This crate is primarily a CLI tool. For programmatic access use the
//! constituent library crates directly:
//!
//! - [`oisin-diff`](https://docs.rs/oisin-diff) - comparison engine and renderers
//! - [`oisin-core`](https://docs.rs/oisin-core) - value model and path utilities

#![warn(missing_docs)]

/// Argument surface, command execution, and exit-code mapping.
pub mod app;

/// Input acquisition: files, HTTP(S) URLs, and the stdin payload convention.
pub mod input;

/// Re-export of oisin-diff for comparison functionality.
pub use oisin_diff as diff;

/// Re-export of oisin-core for core types.
pub use oisin_core as core;
