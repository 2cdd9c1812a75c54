//! XPath text parser
//!
//! Grammar: `[origin:][/]elem1[/elem2...]` where each element is
//! `name[k1=v1][k2=v2]...`. A `/` inside a key clause does not split
//! elements; `\[` and `\]` are literal brackets.

use std::collections::BTreeMap;

use super::elem::PathElem;
use super::error::{PathError, PathResult};
use super::Path;

/// Parse xpath text into a [`Path`].
///
/// An empty string yields an empty, relative path.
pub fn parse_path(text: &str) -> PathResult<Path> {
    if text.is_empty() {
        return Ok(Path::default());
    }

    let (origin, rest) = split_origin(text);
    let offset = text.len() - rest.len();
    let is_root_based = rest.starts_with('/');

    let mut elem = Vec::new();
    for (start, segment) in split_segments(text, rest, offset)? {
        if segment.is_empty() {
            continue;
        }
        elem.push(parse_elem(text, segment, start)?);
    }
    log::trace!("parsed xpath {text:?} into {} elements", elem.len());

    Ok(Path {
        origin: origin.to_string(),
        elem,
        target: String::new(),
        is_root_based,
    })
}

/// Strip a leading `origin:` when the first `:` comes before any `/` or `[`
/// and is followed by `/` or the end of the text.
fn split_origin(text: &str) -> (&str, &str) {
    if text.starts_with('/') {
        return ("", text);
    }
    let Some(idx) = text.find(':') else {
        return ("", text);
    };
    let (candidate, rest) = (&text[..idx], &text[idx + 1..]);
    if candidate.contains(['/', '[']) {
        return ("", text);
    }
    if rest.is_empty() || rest.starts_with('/') {
        (candidate, rest)
    } else {
        ("", text)
    }
}

/// Split on `/` outside of key brackets, returning each segment with its
/// byte offset in the full text.
fn split_segments<'a>(
    text: &str,
    rest: &'a str,
    offset: usize,
) -> PathResult<Vec<(usize, &'a str)>> {
    let mut segments = Vec::new();
    let mut in_key = false;
    let mut prev = None;
    let mut start = 0;

    for (i, c) in rest.char_indices() {
        let escaped = prev == Some('\\');
        prev = Some(c);
        match c {
            '[' if !escaped => {
                if in_key {
                    return Err(PathError::malformed_path(text, offset + i));
                }
                in_key = true;
            }
            ']' if !escaped => {
                if !in_key {
                    return Err(PathError::malformed_path(text, offset + i));
                }
                in_key = false;
            }
            '/' if !in_key => {
                segments.push((offset + start, &rest[start..i]));
                start = i + 1;
            }
            _ => {}
        }
    }
    if in_key {
        return Err(PathError::malformed_key(&rest[start..]));
    }
    segments.push((offset + start, &rest[start..]));
    Ok(segments)
}

fn parse_elem(text: &str, segment: &str, start: usize) -> PathResult<PathElem> {
    let mut prev = None;
    let bracket = segment.char_indices().find_map(|(i, c)| {
        let found = c == '[' && prev != Some('\\');
        prev = Some(c);
        found.then_some(i)
    });

    match bracket {
        None => Ok(PathElem::named(segment)),
        Some(0) => Err(PathError::malformed_path(text, start)),
        Some(idx) => Ok(PathElem::new(
            &segment[..idx],
            parse_keys(segment, &segment[idx..])?,
        )),
    }
}

/// Parse `[k1=v1][k2=v2]...` into a key map.
fn parse_keys(segment: &str, clauses: &str) -> PathResult<BTreeMap<String, String>> {
    let mut keys = BTreeMap::new();
    let mut in_key = false;
    let mut start = 0;
    let mut prev = None;

    for (i, c) in clauses.char_indices() {
        let escaped = prev == Some('\\');
        prev = Some(c);
        match c {
            '[' if !escaped => {
                if in_key {
                    return Err(PathError::malformed_key(segment));
                }
                in_key = true;
                start = i + 1;
            }
            ']' if !escaped => {
                if !in_key {
                    return Err(PathError::malformed_key(segment));
                }
                let (k, v) = clauses[start..i]
                    .split_once('=')
                    .ok_or_else(|| PathError::malformed_key(segment))?;
                let (k, v) = (unescape_brackets(k), unescape_brackets(v));
                let (k, v) = (k.trim(), v.trim());
                if k.is_empty() || v.is_empty() {
                    return Err(PathError::malformed_key(segment));
                }
                keys.insert(k.to_string(), v.to_string());
                in_key = false;
            }
            // text between clauses would otherwise be dropped silently
            _ if !in_key => return Err(PathError::malformed_key(segment)),
            _ => {}
        }
    }
    if in_key {
        return Err(PathError::malformed_key(segment));
    }
    Ok(keys)
}

fn unescape_brackets(s: &str) -> String {
    s.replace(r"\]", "]").replace(r"\[", "[")
}
