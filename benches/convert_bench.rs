//! Performance benchmarks for conversion paths

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use numscan::{convert_all, convert_all_par, convert_to_float, convert_to_int, Input, Policy, Target};

fn bench_convert_int(c: &mut Criterion) {
    let policy = Policy::default();
    c.bench_function("convert_to_int", |b| {
        b.iter(|| black_box(convert_to_int(Input::Text(black_box("123456789")), &policy)));
    });
}

fn bench_convert_float(c: &mut Criterion) {
    let policy = Policy::default();
    c.bench_function("convert_to_float", |b| {
        b.iter(|| black_box(convert_to_float(Input::Text(black_box("3.141592653589793")), &policy)));
    });
}

fn bench_batch_sequential_vs_parallel(c: &mut Criterion) {
    let policy = Policy::permissive();
    let texts: Vec<String> = (0..10_000)
        .map(|i| {
            if i % 3 == 0 {
                format!("{}.{}", i, i % 100)
            } else {
                i.to_string()
            }
        })
        .collect();
    let refs: Vec<&str> = texts.iter().map(String::as_str).collect();

    c.bench_function("batch_sequential_10k", |b| {
        b.iter(|| black_box(convert_all(black_box(&refs), Target::Real, &policy)));
    });
    c.bench_function("batch_parallel_10k", |b| {
        b.iter(|| black_box(convert_all_par(black_box(&refs), Target::Real, &policy)));
    });
}

criterion_group!(
    benches,
    bench_convert_int,
    bench_convert_float,
    bench_batch_sequential_vs_parallel
);
criterion_main!(benches);
