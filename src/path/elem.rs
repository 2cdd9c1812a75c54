//! A single step of a path

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Name of the transient up-navigation element used by relative paths
pub const PARENT_ELEM: &str = "..";

/// One hierarchical step of a [`Path`](super::Path), optionally a list
/// instance selected by key/value pairs.
///
/// Keys live in a `BTreeMap` so that every rendering and comparison sees them
/// in ascending key-name order regardless of insertion order. Ordering is
/// derived: name first, then the sorted `(key, value)` pairs, a shorter key
/// set sorting first on a tie.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PathElem {
    /// Element name, possibly `prefix:name` until normalised
    pub name: String,
    /// List keys of this element
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub key: BTreeMap<String, String>,
}

impl PathElem {
    /// Create an element with the given keys
    pub fn new(name: impl Into<String>, key: BTreeMap<String, String>) -> Self {
        Self {
            name: name.into(),
            key,
        }
    }

    /// Create an element without keys
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(name, BTreeMap::new())
    }

    /// Create the `..` up-navigation element
    pub fn parent() -> Self {
        Self::named(PARENT_ELEM)
    }

    /// Add a key, replacing any previous value for the same key name
    pub fn with_key(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.key.insert(key.into(), value.into());
        self
    }

    /// Check if this is the `..` up-navigation element
    pub fn is_parent(&self) -> bool {
        self.name == PARENT_ELEM
    }

    /// Iterate the element name followed by its key values in key-name order.
    ///
    /// These are the levels this element occupies in a tree keyed by name and
    /// key values.
    pub fn path_elem_names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str()).chain(self.path_elem_names_keys_only())
    }

    /// Iterate only the key values, in key-name order (not value order)
    pub fn path_elem_names_keys_only(&self) -> impl Iterator<Item = &str> {
        self.key.values().map(String::as_str)
    }

    /// Write the element as xpath text, re-escaping brackets inside keys
    pub(crate) fn write_xpath(&self, out: &mut String, no_keys: bool) {
        out.push_str(&self.name);
        if no_keys {
            return;
        }
        for (k, v) in &self.key {
            out.push('[');
            push_escaped(out, k);
            out.push('=');
            push_escaped(out, v);
            out.push(']');
        }
    }
}

fn push_escaped(out: &mut String, s: &str) {
    for c in s.chars() {
        if c == '[' || c == ']' {
            out.push('\\');
        }
        out.push(c);
    }
}

impl fmt::Display for PathElem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        self.write_xpath(&mut out, false);
        f.write_str(&out)
    }
}
