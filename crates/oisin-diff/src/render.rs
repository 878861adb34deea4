// SPDX-License-Identifier: MIT OR Apache-2.0
//! Rendering of comparison results.
//!
//! Three pure renderers over [`CompareResult`]:
//!
//! - [`render_pretty`]: multi-line human-oriented report with per-kind
//!   symbols, old/new values, and a trailing summary block
//! - [`render_compact`]: one `<symbol> <path>` line per difference
//! - [`render_json`]: the result serialized as pretty-printed JSON,
//!   round-trippable through deserialization
//!
//! Symbols: `+` added, `-` removed, `~` changed, `⚠` type-changed.

use std::fmt::Write;

use owo_colors::OwoColorize;

use crate::report::{ChangeKind, CompareResult, Difference, Summary};

/// Symbol used for a change kind in textual output.
#[must_use]
pub const fn symbol(kind: ChangeKind) -> char {
    match kind {
        ChangeKind::Added => '+',
        ChangeKind::Removed => '-',
        ChangeKind::Changed => '~',
        ChangeKind::TypeChanged => '⚠',
    }
}

fn kind_tint(kind: ChangeKind, s: &str, color: bool) -> String {
    if !color {
        return s.to_string();
    }
    match kind {
        ChangeKind::Added => s.green().to_string(),
        ChangeKind::Removed => s.red().to_string(),
        ChangeKind::Changed => s.yellow().to_string(),
        ChangeKind::TypeChanged => s.magenta().to_string(),
    }
}

fn bold(s: &str, color: bool) -> String {
    if color {
        s.bold().to_string()
    } else {
        s.to_string()
    }
}

fn dim(s: &str, color: bool) -> String {
    if color {
        s.dimmed().to_string()
    } else {
        s.to_string()
    }
}

fn render_difference(diff: &Difference, color: bool) -> String {
    let head = format!("{} {}", symbol(diff.kind), bold(&diff.path, color));
    let mut line = kind_tint(diff.kind, &head, color);

    // Hand-built or parsed records may lack fields; render what is there.
    let old = diff.old_value.as_ref().map_or_else(String::new, ToString::to_string);
    let new = diff.new_value.as_ref().map_or_else(String::new, ToString::to_string);

    match diff.kind {
        ChangeKind::Added => {
            let _ = write!(line, " {}", kind_tint(diff.kind, &new, color));
        }
        ChangeKind::Removed => {
            let _ = write!(line, " {}", kind_tint(diff.kind, &old, color));
        }
        ChangeKind::Changed => {
            let _ = write!(
                line,
                "\n  {}\n  {}",
                kind_tint(ChangeKind::Removed, &format!("- {old}"), color),
                kind_tint(ChangeKind::Added, &format!("+ {new}"), color),
            );
        }
        ChangeKind::TypeChanged => {
            let tags = match (diff.old_type, diff.new_type) {
                (Some(from), Some(to)) => format!("({from} → {to})"),
                _ => "(unknown → unknown)".to_string(),
            };
            let _ = write!(
                line,
                " {}\n  {}\n  {}",
                dim(&tags, color),
                kind_tint(ChangeKind::Removed, &format!("- {old}"), color),
                kind_tint(ChangeKind::Added, &format!("+ {new}"), color),
            );
        }
    }

    line
}

fn render_summary(summary: &Summary, color: bool) -> String {
    format!(
        "\n{}\n  Total changes: {}\n  {} Added: {}\n  {} Removed: {}\n  {} Changed: {}\n  {} Type changed: {}",
        bold("Summary:", color),
        summary.total,
        kind_tint(ChangeKind::Added, "+", color),
        summary.added,
        kind_tint(ChangeKind::Removed, "-", color),
        summary.removed,
        kind_tint(ChangeKind::Changed, "~", color),
        summary.changed,
        kind_tint(ChangeKind::TypeChanged, "⚠", color),
        summary.type_changed,
    )
}

/// Multi-line human-oriented report.
///
/// `color` gates ANSI styling; with it off the output is plain text.
#[must_use]
pub fn render_pretty(result: &CompareResult, color: bool) -> String {
    if result.summary.identical {
        let message = "✓ No differences found - documents are identical";
        return if color {
            message.green().to_string()
        } else {
            message.to_string()
        };
    }

    let mut lines = vec![bold("Differences detected:\n", color)];
    for diff in &result.differences {
        lines.push(render_difference(diff, color));
    }
    lines.push(render_summary(&result.summary, color));
    lines.join("\n")
}

/// One `<symbol> <path>` line per difference, newline-joined, no summary.
///
/// An identical result renders as the single sentinel line `IDENTICAL`.
#[must_use]
pub fn render_compact(result: &CompareResult) -> String {
    if result.summary.identical {
        return "IDENTICAL".to_string();
    }
    result
        .differences
        .iter()
        .map(|d| format!("{} {}", symbol(d.kind), d.path))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Pretty-printed JSON serialization of the whole result.
///
/// # Errors
///
/// Propagates serialization failures from serde_json; none occur for
/// results built by the engine.
pub fn render_json(result: &CompareResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(result)
}
