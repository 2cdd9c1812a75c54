//! Path algebra: normalisation, absolute/relative conversion and ordering

use std::cmp::Ordering;
use std::collections::BTreeMap;

use super::elem::PathElem;
use super::error::{PathError, PathResult};
use super::Path;

impl Path {
    /// Normalise against the current position.
    ///
    /// `..` elements are resolved against `current` first, then module
    /// prefixes are stripped from element names, key names and every
    /// `/`-separated segment of key values. The subject's origin, target and
    /// root flag are kept.
    pub fn normalized_abs_path(&self, current: &Path) -> Path {
        let elem = if self.has_parent_elem() {
            resolve_parent_elems(&current.elem, &self.elem)
        } else {
            self.elem.clone()
        };
        Path {
            origin: self.origin.clone(),
            elem: elem.into_iter().map(strip_elem_prefixes).collect(),
            target: self.target.clone(),
            is_root_based: self.is_root_based,
        }
    }

    /// A copy of this path with module prefixes removed, see
    /// [`normalized_abs_path`](Self::normalized_abs_path)
    pub fn strip_path_elem_prefixes(&self) -> Path {
        Path {
            elem: self.elem.iter().cloned().map(strip_elem_prefixes).collect(),
            ..self.clone()
        }
    }

    /// Resolve this relative path against `current`.
    ///
    /// The result starts from `current`'s elements; each `..` drops the last
    /// accumulated element (a no-op once nothing is left) and every other
    /// element is appended. Origin, target and root flag come from `current`.
    pub fn relative_to_abs_path(&self, current: &Path) -> Path {
        Path {
            origin: current.origin.clone(),
            elem: resolve_parent_elems(&current.elem, &self.elem),
            target: current.target.clone(),
            is_root_based: current.is_root_based,
        }
    }

    /// Express this absolute path relative to `reference`.
    ///
    /// Emits one `..` for every reference element past the common prefix,
    /// followed by the remaining elements of `self`. Identical paths yield an
    /// empty relative path.
    pub fn abs_to_relative_path(&self, reference: &Path) -> PathResult<Path> {
        if !self.is_root_based || !reference.is_root_based {
            return Err(PathError::NotRootBased {
                operation: "abs_to_relative_path",
            });
        }

        let prefix = common_prefix_len(&self.elem, &reference.elem);
        let up = reference.elem.len() - prefix;

        let mut elem = Vec::with_capacity(up + self.elem.len() - prefix);
        elem.extend(std::iter::repeat_with(PathElem::parent).take(up));
        elem.extend(self.elem[prefix..].iter().cloned());

        Ok(Path::relative(elem))
    }

    /// Compare only the element sequences of two paths
    pub fn paths_equal(a: Option<&Path>, b: Option<&Path>) -> bool {
        match (a, b) {
            (None, None) => true,
            (Some(a), Some(b)) => a.elem == b.elem,
            _ => false,
        }
    }

    /// Flatten the path into index strings for map or trie keys.
    ///
    /// With `prefix`, non-empty target and origin come first. Each element
    /// contributes its name and, unless `no_keys`, its key values in key-name
    /// order.
    pub fn to_strings(&self, prefix: bool, no_keys: bool) -> Vec<String> {
        let mut out = Vec::new();
        if prefix {
            if !self.target.is_empty() {
                out.push(self.target.clone());
            }
            if !self.origin.is_empty() {
                out.push(self.origin.clone());
            }
        }
        for pe in &self.elem {
            out.push(pe.name.clone());
            if !no_keys {
                out.extend(pe.path_elem_names_keys_only().map(str::to_string));
            }
        }
        out
    }
}

/// Total order over optional paths; `None` sorts before any path.
pub fn compare_paths(a: Option<&Path>, b: Option<&Path>) -> Ordering {
    a.cmp(&b)
}

/// Number of leading elements two sequences share
pub fn common_prefix_len(a: &[PathElem], b: &[PathElem]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}

fn resolve_parent_elems(current: &[PathElem], relative: &[PathElem]) -> Vec<PathElem> {
    let mut elem = Vec::with_capacity(current.len() + relative.len());
    elem.extend(current.iter().cloned());
    for pe in relative {
        if pe.is_parent() {
            elem.pop();
        } else {
            elem.push(pe.clone());
        }
    }
    elem
}

fn strip_prefix(s: &str) -> &str {
    match s.find(':') {
        Some(i) if i > 0 => &s[i + 1..],
        _ => s,
    }
}

fn strip_elem_prefixes(pe: PathElem) -> PathElem {
    let key: BTreeMap<String, String> = pe
        .key
        .into_iter()
        .map(|(k, v)| {
            let v = if v.contains(':') {
                v.split('/').map(strip_prefix).collect::<Vec<_>>().join("/")
            } else {
                v
            };
            (strip_prefix(&k).to_string(), v)
        })
        .collect();
    PathElem {
        name: strip_prefix(&pe.name).to_string(),
        key,
    }
}
