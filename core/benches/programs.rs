//! Benchmarks for whole program runs.
//!
//! Benchmark groups:
//! 1. run_only: the VM driver loop over pre-loaded programs
//! 2. full_pipeline: parse + load + run together (for comparison)

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use nibble_core::api::{Engine, EngineOptions};
use nibble_core::vm;

const COUNTER: &str = "\
push 1
printHead
eq 15
ifNZero 7
inc
jump 2
stop
";

const FIZZBUZZ: &str = "\
push 1
push false
peek
mod 3
ifNZero 8
replace true
print \"fizz\"
peek
mod 5
ifNZero 13
replace true
print \"buzz\"
ifNZero 15
printHead
eq 15
ifNZero 19
inc
jump 2
pop
stop
";

const PROGRAMS: [(&str, &str); 2] = [("counter", COUNTER), ("fizzbuzz", FIZZBUZZ)];

fn bench_run_only(c: &mut Criterion) {
    let engine = Engine::new(EngineOptions::default());
    let mut group = c.benchmark_group("run_only");

    for (name, source) in PROGRAMS {
        let program = match engine.load(source) {
            Ok(program) => program,
            Err(e) => panic!("{name} failed to load: {e}"),
        };
        group.bench_with_input(BenchmarkId::from_parameter(name), &program, |b, program| {
            b.iter(|| vm::run(black_box(program)))
        });
    }

    group.finish();
}

fn bench_full_pipeline(c: &mut Criterion) {
    let engine = Engine::new(EngineOptions::default());
    let mut group = c.benchmark_group("full_pipeline");

    for (name, source) in PROGRAMS {
        group.bench_with_input(BenchmarkId::from_parameter(name), source, |b, source| {
            b.iter(|| {
                let program = engine.load(black_box(source)).ok()?;
                engine.run(&program).ok()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_run_only, bench_full_pipeline);
criterion_main!(benches);
