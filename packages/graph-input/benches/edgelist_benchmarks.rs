//! Performance benchmarks for edgelist loading
//!
//! - parse: text → EdgeTable
//! - remap: sparse original IDs → dense IDs
//! - csr: EdgeTable → CsrMatrix
//! - end_to_end: file → CsrMatrix through EdgelistLoader

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use graph_input::infrastructure::{remap_vertex_ids, CsrBuilder, EdgelistParser};
use graph_input::{DuplicatePolicy, EdgeTable, EdgelistConfig, EdgelistLoader};
use std::io::Write;

/// Deterministic pseudo-random graph with sparse vertex IDs
fn synthetic_pairs(edges: usize) -> Vec<(u64, u64)> {
    let mut state: u64 = 0x9E37_79B9_7F4A_7C15;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        state
    };
    let vertices = (edges / 8).max(1) as u64;
    (0..edges)
        .map(|_| ((next() % vertices) * 3, (next() % vertices) * 3))
        .collect()
}

fn synthetic_text(edges: usize) -> String {
    synthetic_pairs(edges)
        .iter()
        .map(|(s, d)| format!("{} {}\n", s, d))
        .collect()
}

// ============================================================================
// Stages
// ============================================================================

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    let parser = EdgelistParser::new(&EdgelistConfig::default()).unwrap();

    for edges in [1_000, 100_000] {
        let text = synthetic_text(edges);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(edges), &text, |b, text| {
            b.iter(|| black_box(parser.parse_str(text).unwrap()));
        });
    }

    group.finish();
}

fn bench_remap(c: &mut Criterion) {
    let mut group = c.benchmark_group("remap");

    for edges in [1_000, 100_000] {
        let table = EdgeTable::from(synthetic_pairs(edges));
        group.throughput(Throughput::Elements(edges as u64));
        group.bench_with_input(BenchmarkId::from_parameter(edges), &table, |b, table| {
            b.iter(|| {
                let mut table = table.clone();
                black_box(remap_vertex_ids(&mut table).unwrap())
            });
        });
    }

    group.finish();
}

fn bench_csr(c: &mut Criterion) {
    let mut group = c.benchmark_group("csr");

    for edges in [1_000, 100_000] {
        let mut table = EdgeTable::from(synthetic_pairs(edges));
        let vertices = remap_vertex_ids(&mut table).unwrap().len();
        group.throughput(Throughput::Elements(edges as u64));

        for policy in [DuplicatePolicy::Sum, DuplicatePolicy::KeepFirst] {
            group.bench_with_input(
                BenchmarkId::new(format!("{:?}", policy), edges),
                &table,
                |b, table| {
                    let builder = CsrBuilder::new(policy);
                    b.iter(|| black_box(builder.build(table, vertices).unwrap()));
                },
            );
        }
    }

    group.finish();
}

fn bench_end_to_end(c: &mut Criterion) {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(synthetic_text(100_000).as_bytes()).unwrap();

    c.bench_function("end_to_end_100k", |b| {
        b.iter(|| {
            let mut loader =
                EdgelistLoader::new(file.path(), EdgelistConfig::default()).unwrap();
            loader.read_from_file().unwrap();
            black_box(loader.to_ir().unwrap())
        });
    });
}

criterion_group!(benches, bench_parse, bench_remap, bench_csr, bench_end_to_end);
criterion_main!(benches);
