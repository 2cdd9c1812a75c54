//! Deduplicating set of paths

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;

use super::Path;

/// A set of distinct paths keyed by their full keyed xpath text.
///
/// Iteration follows insertion order. The backing map is not synchronised;
/// concurrent accumulation needs external locking or one set per worker
/// merged with [`join`](Self::join).
#[derive(Debug, Clone, Default)]
pub struct PathSet {
    paths: IndexMap<String, Path, FxBuildHasher>,
}

impl PathSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a path unless an equal xpath is already present
    pub fn add_path(&mut self, path: Path) -> &mut Self {
        self.paths.entry(path.to_xpath(false)).or_insert(path);
        self
    }

    /// Merge another set into this one; on collision the other set's path wins
    pub fn join(&mut self, other: PathSet) -> &mut Self {
        for (key, path) in other.paths {
            self.paths.insert(key, path);
        }
        self
    }

    /// Check if a path with the same keyed xpath is present
    pub fn contains(&self, path: &Path) -> bool {
        self.paths.contains_key(&path.to_xpath(false))
    }

    /// Iterate the paths
    pub fn items(&self) -> impl Iterator<Item = &Path> {
        self.paths.values()
    }

    /// Number of distinct paths
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Check if the set is empty
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

impl FromIterator<Path> for PathSet {
    fn from_iter<I: IntoIterator<Item = Path>>(iter: I) -> Self {
        let mut set = Self::new();
        for path in iter {
            set.add_path(path);
        }
        set
    }
}

impl IntoIterator for PathSet {
    type Item = Path;
    type IntoIter = indexmap::map::IntoValues<String, Path>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.into_values()
    }
}
