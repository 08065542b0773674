//! Performance benchmarks for classification
//!
//! The scanner is the hot path for every engine call; these keep its cost
//! visible across representative input shapes.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use numscan::{classify, Input, Policy};

const SAMPLES: &[&str] = &[
    "42",
    "-9876543210",
    "3.14159",
    "6.02e23",
    "1_000_000",
    "9007199254740993.0",
    "not a number",
    "   77   ",
    "inf",
];

fn bench_classify_mixed(c: &mut Criterion) {
    let policy = Policy::default();
    c.bench_function("classify_mixed", |b| {
        b.iter(|| {
            for &text in SAMPLES {
                black_box(classify(Input::Text(black_box(text)), &policy));
            }
        });
    });
}

fn bench_classify_long_integer(c: &mut Criterion) {
    let policy = Policy::default().with_max_int_len(100);
    let text = "9".repeat(96);
    c.bench_function("classify_long_integer", |b| {
        b.iter(|| black_box(classify(Input::Text(black_box(&text)), &policy)));
    });
}

fn bench_classify_unicode(c: &mut Criterion) {
    let policy = Policy::default().with_unicode_digits(true);
    c.bench_function("classify_unicode_digits", |b| {
        b.iter(|| black_box(classify(Input::Text(black_box("١٢٣٤٥٦٧٨٩")), &policy)));
    });
}

criterion_group!(
    benches,
    bench_classify_mixed,
    bench_classify_long_integer,
    bench_classify_unicode
);
criterion_main!(benches);
