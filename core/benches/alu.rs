//! Benchmarks for the gate-level ALU.
//!
//! Run with: `cargo bench --bench alu` in the core/ directory.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use nibble_core::{Word, alu};

/// Every (a, b) pair of words.
fn all_pairs() -> Vec<(Word, Word)> {
    let words: Vec<Word> = (0..=15).filter_map(Word::new).collect();
    words
        .iter()
        .flat_map(|&a| words.iter().map(move |&b| (a, b)))
        .collect()
}

fn bench_alu(c: &mut Criterion) {
    let pairs = all_pairs();
    let mut group = c.benchmark_group("alu_all_pairs");

    group.bench_function("add", |b| {
        b.iter(|| {
            for &(x, y) in &pairs {
                black_box(alu::add(black_box(x), black_box(y)));
            }
        })
    });
    group.bench_function("sub", |b| {
        b.iter(|| {
            for &(x, y) in &pairs {
                black_box(alu::sub(black_box(x), black_box(y)));
            }
        })
    });
    group.bench_function("mul", |b| {
        b.iter(|| {
            for &(x, y) in &pairs {
                black_box(alu::mul(black_box(x), black_box(y)));
            }
        })
    });
    group.bench_function("div", |b| {
        b.iter(|| {
            for &(x, y) in &pairs {
                black_box(alu::div(black_box(x), black_box(y)));
            }
        })
    });
    group.bench_function("compare", |b| {
        b.iter(|| {
            for &(x, y) in &pairs {
                black_box(alu::compare(black_box(x), black_box(y)));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_alu);
criterion_main!(benches);
