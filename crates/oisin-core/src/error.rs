// SPDX-License-Identifier: MIT OR Apache-2.0
//! Error types for oisin operations.
//!
//! The comparison engine itself is total and never fails over in-memory
//! values; errors only arise when turning external text into a [`crate::Value`].

use thiserror::Error;

/// Errors produced while parsing external input into a value tree.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The input was not a well-formed JSON document.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias using [`ParseError`].
pub type Result<T> = std::result::Result<T, ParseError>;
