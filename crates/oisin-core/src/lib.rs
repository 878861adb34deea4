// SPDX-License-Identifier: MIT OR Apache-2.0
//! Core types and foundational utilities for oisin
//!
//! This crate provides the foundational types used across the oisin
//! workspace:
//!
//! - [`value`] - The JSON-compatible value model and type classification
//! - [`path`] - Dotted/bracketed path construction for tree addresses
//! - [`error`] - Error types and Result alias

#![deny(missing_docs)]
#![deny(rust_2018_idioms)]

/// Error types for oisin operations
pub mod error;
/// Path construction for value-tree addresses
pub mod path;
/// JSON-compatible value model and type classification
pub mod value;

// Re-exports for convenience
pub use error::{ParseError, Result};
pub use value::{Map, TypeTag, Value};
