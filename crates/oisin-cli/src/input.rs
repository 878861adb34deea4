// SPDX-License-Identifier: MIT OR Apache-2.0
//! Input acquisition for the CLI.
//!
//! A source argument is either a file path or an `http(s)://` URL. With no
//! source arguments, stdin is expected to carry two JSON documents
//! separated by a line holding only `---`.

use std::fs;

use anyhow::{Context, Result, bail};
use tracing::debug;

use oisin_core::Value;

/// Separator between the two stdin documents: a `---` line of its own.
pub const STDIN_SEPARATOR: &str = "\n---\n";

/// Load and parse a JSON document from a file path or HTTP(S) URL.
///
/// # Errors
///
/// Fails on unreadable files, fetch failures, non-success HTTP statuses,
/// and malformed JSON.
pub fn load_source(source: &str) -> Result<Value> {
    let text = if is_url(source) {
        fetch(source)?
    } else {
        debug!(path = source, "reading file source");
        fs::read_to_string(source).with_context(|| format!("failed to read file '{source}'"))?
    };
    text.parse()
        .with_context(|| format!("failed to parse JSON from '{source}'"))
}

/// Whether a source argument names an HTTP(S) URL rather than a file.
#[must_use]
pub fn is_url(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

fn fetch(url: &str) -> Result<String> {
    debug!(url, "fetching HTTP source");
    let response =
        reqwest::blocking::get(url).with_context(|| format!("failed to fetch '{url}'"))?;
    let status = response.status();
    if !status.is_success() {
        bail!("HTTP {status} fetching '{url}'");
    }
    response
        .text()
        .with_context(|| format!("failed to read response body from '{url}'"))
}

/// Split a stdin payload into its two JSON documents.
///
/// # Errors
///
/// Fails unless the payload splits into exactly two parts around the
/// separator, and each part parses as JSON.
pub fn split_payload(payload: &str) -> Result<(Value, Value)> {
    let parts: Vec<&str> = payload.split(STDIN_SEPARATOR).collect();
    let [old_text, new_text] = parts.as_slice() else {
        bail!(
            "stdin must contain exactly two JSON documents separated by a '---' line, found {} part(s)",
            parts.len()
        );
    };
    let old = old_text
        .parse()
        .context("failed to parse the first stdin document")?;
    let new = new_text
        .parse()
        .context("failed to parse the second stdin document")?;
    Ok((old, new))
}
