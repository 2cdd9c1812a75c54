//! Integration tests for xpath parsing, rendering and path algebra

use pretty_assertions::assert_eq;
use rstest::rstest;
use sdc_yangpath::{Path, PathElem, PathError, PathSet, compare_paths};
use std::cmp::Ordering;

fn p(xpath: &str) -> Path {
    Path::parse(xpath).unwrap()
}

#[rstest]
#[case("/interface[name=eth0]/admin-state")]
#[case("/interface[name=ethernet-1/1]/subinterface[index=0]")]
#[case("/a[x=1][y=2]/b/c[k=v]")]
#[case("openconfig:/system/name")]
#[case("relative/path[k=v]")]
#[case("/list[name=a\\[0\\]]/leaf")]
#[case("/")]
fn test_render_parse_round_trip(#[case] xpath: &str) {
    let path = p(xpath);
    let rendered = path.to_xpath(false);
    assert_eq!(rendered, xpath);
    assert_eq!(p(&rendered), path);
}

#[test]
fn test_keys_render_sorted() {
    let path = p("/a[z=1][b=2]");
    assert_eq!(path.to_xpath(false), "/a[b=2][z=1]");
    assert_eq!(path.to_xpath(true), "/a");
}

#[test]
fn test_parse_keyed_root_path() {
    let path = p("/interface[name=eth0]/admin-state");
    assert!(path.is_root_based);
    assert_eq!(
        path.elem,
        vec![
            PathElem::named("interface").with_key("name", "eth0"),
            PathElem::named("admin-state"),
        ]
    );
}

#[rstest]
#[case("a[b=c][d")]
#[case("/a[b]")]
#[case("/a[=c]")]
#[case("/a[b=]")]
#[case("/a[b=c]x[d=e]")]
fn test_malformed_keys(#[case] xpath: &str) {
    assert!(matches!(
        Path::parse(xpath),
        Err(PathError::MalformedPathKey { .. })
    ));
}

#[rstest]
#[case("/a]b")]
#[case("/a[b=[c]]")]
#[case("/[k=v]")]
fn test_malformed_paths(#[case] xpath: &str) {
    assert!(matches!(
        Path::parse(xpath),
        Err(PathError::MalformedPath { .. })
    ));
}

#[test]
fn test_abs_to_relative_example() {
    let subject = p("/interface[name=eth0]/admin-state");
    let reference = p("/interface[name=eth1]/admin-state");
    let rel = subject.abs_to_relative_path(&reference).unwrap();
    assert_eq!(rel.to_xpath(false), "../../interface[name=eth0]/admin-state");
    assert!(!rel.is_root_based);
}

#[rstest]
#[case("/a/b/c", "/a/b/d")]
#[case("/a/b/c", "/a")]
#[case("/a", "/a/b/c")]
#[case("/x[k=1]/y", "/x[k=2]/y/z")]
#[case("/a/b", "/a/b")]
fn test_relative_absolute_inverse(#[case] subject: &str, #[case] reference: &str) {
    let subject = p(subject);
    let reference = p(reference);
    let rel = subject.abs_to_relative_path(&reference).unwrap();
    assert_eq!(rel.relative_to_abs_path(&reference), subject);
}

#[test]
fn test_abs_to_relative_requires_root_based() {
    let err = p("a/b").abs_to_relative_path(&p("/a")).unwrap_err();
    assert!(matches!(err, PathError::NotRootBased { .. }));
    assert!(p("/a").abs_to_relative_path(&p("a")).is_err());
}

#[test]
fn test_excess_parent_elems_are_ignored() {
    let abs = p("../../../b").relative_to_abs_path(&p("/a"));
    assert_eq!(abs.to_xpath(false), "/b");
}

#[test]
fn test_normalize_strips_prefixes_and_parents() {
    let current = p("/srl:interface[name=eth0]/srl:subinterface[index=0]");
    let path = p("../if:admin-state");
    let normalized = path.normalized_abs_path(&current);
    assert_eq!(normalized.to_xpath(false), "interface[name=eth0]/admin-state");
}

#[rstest]
#[case("/a", "/b", Ordering::Less)]
#[case("/a/b", "/a", Ordering::Greater)]
#[case("/a[k=1]", "/a[k=2]", Ordering::Less)]
#[case("/a[k=1]", "/a[k=1][l=0]", Ordering::Less)]
#[case("a", "/a", Ordering::Less)]
#[case("openconfig:/a", "/z", Ordering::Greater)]
#[case("/a[k=1]/b", "/a[k=1]/b", Ordering::Equal)]
fn test_compare_paths(#[case] a: &str, #[case] b: &str, #[case] expected: Ordering) {
    let (a, b) = (p(a), p(b));
    assert_eq!(compare_paths(Some(&a), Some(&b)), expected);
    assert_eq!(compare_paths(Some(&b), Some(&a)), expected.reverse());
}

#[test]
fn test_compare_paths_is_a_total_order() {
    let mut paths: Vec<Path> = ["/b", "/a[k=2]", "a", "/a", "/a[k=1]/c", "/a[k=1]", "x:/a"]
        .into_iter()
        .map(p)
        .collect();
    paths.sort_by(|a, b| compare_paths(Some(a), Some(b)));

    for w in paths.windows(2) {
        assert_ne!(compare_paths(Some(&w[0]), Some(&w[1])), Ordering::Greater);
    }
    for path in &paths {
        assert_eq!(compare_paths(Some(path), Some(path)), Ordering::Equal);
    }
    assert_eq!(compare_paths(None, Some(&paths[0])), Ordering::Less);
}

#[test]
fn test_index_strings() {
    let path = p("openconfig:/a[k=1]/b[y=2][x=1]")
        .with_target("dev1");
    assert_eq!(
        path.to_strings(true, false),
        vec!["dev1", "openconfig", "a", "1", "b", "1", "2"]
    );
    assert_eq!(path.to_strings(false, true), vec!["a", "b"]);
}

#[test]
fn test_copy_path_add_elem_leaves_parent_untouched() {
    let parent = p("/a[k=1]");
    let child = parent.copy_path_add_elem(PathElem::named("b"));
    assert_eq!(parent.to_xpath(false), "/a[k=1]");
    assert_eq!(child.to_xpath(false), "/a[k=1]/b");
}

#[test]
fn test_path_set_accumulates_unique_paths() {
    let mut set = PathSet::new();
    set.add_path(p("/a")).add_path(p("/b")).add_path(p("/a"));
    assert_eq!(set.len(), 2);

    let other: PathSet = [p("/c"), p("/a")].into_iter().collect();
    set.join(other);
    let xpaths: Vec<String> = set.items().map(|path| path.to_xpath(false)).collect();
    assert_eq!(xpaths, vec!["/a", "/b", "/c"]);
}
