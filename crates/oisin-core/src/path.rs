// SPDX-License-Identifier: MIT OR Apache-2.0
//! Path construction for value-tree addresses.
//!
//! A path is a dotted/bracketed string address built incrementally while
//! walking a tree: `""` at the root, `base.key` for object members
//! (`key` alone when the base is empty), `base[index]` for array elements.
//! The same input tree always yields the same paths.
//!
//! Keys are spliced in verbatim. A key containing `.` or `[` produces an
//! address indistinguishable from deeper traversal; ignore-path matching
//! is exact-string, so such keys simply cannot be targeted unambiguously.

use std::fmt::Write;

/// Child path for object member `key` under `base`.
#[must_use]
pub fn child_key(base: &str, key: &str) -> String {
    if base.is_empty() {
        key.to_string()
    } else {
        let mut path = String::with_capacity(base.len() + 1 + key.len());
        path.push_str(base);
        path.push('.');
        path.push_str(key);
        path
    }
}

/// Child path for array element `index` under `base`.
#[must_use]
pub fn child_index(base: &str, index: usize) -> String {
    let mut path = String::with_capacity(base.len() + 4);
    path.push_str(base);
    // Writing into a String cannot fail.
    let _ = write!(path, "[{index}]");
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_child_key_from_root() {
        assert_eq!(child_key("", "name"), "name");
    }

    #[test]
    fn test_child_key_nested() {
        assert_eq!(child_key("user", "name"), "user.name");
        assert_eq!(child_key("user.address", "city"), "user.address.city");
    }

    #[test]
    fn test_child_index() {
        assert_eq!(child_index("", 0), "[0]");
        assert_eq!(child_index("items", 3), "items[3]");
        assert_eq!(child_index("a.b", 12), "a.b[12]");
    }

    #[test]
    fn test_mixed_nesting() {
        let p = child_key(&child_index(&child_key("", "users"), 1), "email");
        assert_eq!(p, "users[1].email");
    }
}
