use std::hint::black_box;

use calc_lexer::tokenize;
use criterion::{criterion_group, criterion_main, Criterion};

fn bench_tokenize(c: &mut Criterion) {
    let source = "let result99 = (12 + 345) * width / 7 - offset\n".repeat(256);

    c.bench_function("tokenize", |b| {
        b.iter(|| {
            let result = tokenize(black_box(&source));
            assert!(result.errors.is_empty());
            result.tokens.len()
        })
    });
}

criterion_group!(benches, bench_tokenize);
criterion_main!(benches);
