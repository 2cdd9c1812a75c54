//! Hierarchical addresses for YANG-modeled trees
//!
//! A [`Path`] is an ordered sequence of [`PathElem`]s plus origin/target
//! metadata. Paths are parsed from and rendered to a restricted XPath dialect,
//! can be normalised against a current position, converted between absolute
//! and relative form, and are totally ordered so they can key ordered maps.
//!
//! Copies are always deep: `Clone` duplicates the element sequence and every
//! key map, so no two `Path` values share mutable state.

pub mod algebra;
pub mod elem;
pub mod error;
pub mod parser;
pub mod set;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use algebra::compare_paths;
pub use elem::{PARENT_ELEM, PathElem};
pub use error::{PathError, PathResult};
pub use parser::parse_path;
pub use set::PathSet;

/// An address in a YANG-modeled tree
///
/// Field order defines the derived ordering: origin, then the element
/// sequence (lexicographic, shorter first on a common prefix), then target,
/// then `is_root_based` with relative paths first.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Path {
    /// Schema origin, e.g. `openconfig`; empty when unset
    #[serde(default)]
    pub origin: String,
    /// Path elements from the root (or current position) downwards
    #[serde(default)]
    pub elem: Vec<PathElem>,
    /// Target device or datastore; empty when unset
    #[serde(default)]
    pub target: String,
    /// Whether the path is anchored at the tree root
    #[serde(default)]
    pub is_root_based: bool,
}

impl Path {
    /// Create a root-based path from elements
    pub fn root(elem: Vec<PathElem>) -> Self {
        Self {
            elem,
            is_root_based: true,
            ..Self::default()
        }
    }

    /// Create a relative path from elements
    pub fn relative(elem: Vec<PathElem>) -> Self {
        Self {
            elem,
            ..Self::default()
        }
    }

    /// Parse xpath text, see [`parse_path`]
    pub fn parse(text: &str) -> PathResult<Self> {
        parse_path(text)
    }

    /// Set the origin
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into();
        self
    }

    /// Set the target
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }

    /// Append an element in place and return `self` for chaining
    pub fn add_path_elem(&mut self, pe: PathElem) -> &mut Self {
        self.elem.push(pe);
        self
    }

    /// Build a child path: a copy of this path with `pe` appended.
    ///
    /// The parent is left untouched.
    pub fn copy_path_add_elem(&self, pe: PathElem) -> Self {
        let mut elem = Vec::with_capacity(self.elem.len() + 1);
        elem.extend(self.elem.iter().cloned());
        elem.push(pe);
        Self {
            origin: self.origin.clone(),
            elem,
            target: self.target.clone(),
            is_root_based: self.is_root_based,
        }
    }

    /// The last element, if any
    pub fn last_path_elem(&self) -> Option<&PathElem> {
        self.elem.last()
    }

    /// Set whether the path is anchored at the root
    pub fn set_is_root_based(&mut self, is_root_based: bool) -> &mut Self {
        self.is_root_based = is_root_based;
        self
    }

    /// A copy of this path without its first element
    pub fn copy_and_remove_first_path_elem(&self) -> Self {
        Self {
            origin: self.origin.clone(),
            elem: self.elem.iter().skip(1).cloned().collect(),
            target: self.target.clone(),
            is_root_based: self.is_root_based,
        }
    }

    /// Check whether the path contains a `..` element
    pub fn has_parent_elem(&self) -> bool {
        self.elem.iter().any(PathElem::is_parent)
    }

    /// Render the path as xpath text.
    ///
    /// Keys are emitted in ascending key-name order with brackets escaped.
    /// With `no_keys` only element names are written.
    pub fn to_xpath(&self, no_keys: bool) -> String {
        let mut out = String::new();
        if !self.origin.is_empty() {
            out.push_str(&self.origin);
            out.push(':');
        }
        if self.is_root_based {
            out.push('/');
        }
        for (i, pe) in self.elem.iter().enumerate() {
            if i > 0 {
                out.push('/');
            }
            pe.write_xpath(&mut out, no_keys);
        }
        out
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_xpath(false))
    }
}

impl FromStr for Path {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_path(s)
    }
}

/// An ordered list of paths
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paths(Vec<Path>);

impl Paths {
    /// Create an empty list
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Number of paths
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the list is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Append a path
    pub fn push(&mut self, path: Path) {
        self.0.push(path);
    }

    /// Iterate the paths
    pub fn iter(&self) -> std::slice::Iter<'_, Path> {
        self.0.iter()
    }

    /// Render every path as keyed xpath text
    pub fn to_xpath_vec(&self) -> Vec<String> {
        self.0.iter().map(|p| p.to_xpath(false)).collect()
    }
}

impl From<Vec<Path>> for Paths {
    fn from(paths: Vec<Path>) -> Self {
        Self(paths)
    }
}

impl FromIterator<Path> for Paths {
    fn from_iter<I: IntoIterator<Item = Path>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Paths {
    type Item = Path;
    type IntoIter = std::vec::IntoIter<Path>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
