//! Path and conversion benchmarks
//!
//! Covers xpath parsing, rendering, path ordering and schema-directed value
//! conversion.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use sdc_yangpath::{Path, SchemaLeafType, compare_paths, from_string};
use std::hint::black_box;

const TEST_PATHS: &[(&str, &str)] = &[
    ("simple", "/system/name"),
    ("keyed", "/interface[name=ethernet-1/1]/subinterface[index=0]/admin-state"),
    (
        "origin",
        "openconfig:/network-instance[name=default]/protocols/protocol[identifier=BGP][name=bgp]/bgp/neighbors",
    ),
];

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    group.throughput(Throughput::Elements(1));

    for (complexity, xpath) in TEST_PATHS {
        group.bench_with_input(BenchmarkId::new("parse", complexity), xpath, |b, xpath| {
            b.iter(|| black_box(Path::parse(black_box(xpath))))
        });
    }

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    group.throughput(Throughput::Elements(1));

    for (complexity, xpath) in TEST_PATHS {
        let Ok(path) = Path::parse(xpath) else {
            continue;
        };
        group.bench_with_input(BenchmarkId::new("to_xpath", complexity), &path, |b, path| {
            b.iter(|| black_box(path.to_xpath(false)))
        });
        group.bench_with_input(
            BenchmarkId::new("to_strings", complexity),
            &path,
            |b, path| b.iter(|| black_box(path.to_strings(true, false))),
        );
    }

    group.finish();
}

fn bench_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("compare");

    let paths: Vec<Path> = TEST_PATHS
        .iter()
        .filter_map(|(_, xpath)| Path::parse(xpath).ok())
        .collect();

    group.bench_function("compare_paths", |b| {
        b.iter(|| {
            for a in &paths {
                for other in &paths {
                    black_box(compare_paths(Some(a), Some(other)));
                }
            }
        })
    });

    group.finish();
}

fn bench_convert(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");
    group.throughput(Throughput::Elements(1));

    let cases = [
        ("uint8", SchemaLeafType::new("uint8"), "200"),
        ("decimal64", SchemaLeafType::new("decimal64"), "-3.14"),
        (
            "pattern",
            SchemaLeafType::new("string").with_pattern("[a-z]+-[0-9]+/[0-9]+", false),
            "ethernet-1/1",
        ),
        (
            "union",
            SchemaLeafType::new("union")
                .with_union_type(SchemaLeafType::new("uint8"))
                .with_union_type(SchemaLeafType::new("string")),
            "eth0",
        ),
    ];

    for (name, leaf_type, raw) in &cases {
        group.bench_with_input(BenchmarkId::new("from_string", name), raw, |b, raw| {
            b.iter(|| black_box(from_string(leaf_type, black_box(raw), 0)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parse, bench_render, bench_compare, bench_convert);
criterion_main!(benches);
