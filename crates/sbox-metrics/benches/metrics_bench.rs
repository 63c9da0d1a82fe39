use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sbox_core::{SBox, AES_CONSTANT, AES_MATRIX};
use sbox_metrics::{analyze, nonlinearity};

fn bench_nonlinearity(c: &mut Criterion) {
    let sbox = SBox::from_affine(&AES_MATRIX, AES_CONSTANT);
    c.bench_function("nonlinearity_aes", |b| {
        b.iter(|| nonlinearity(black_box(&sbox)))
    });
}

fn bench_full_report(c: &mut Criterion) {
    let sbox = SBox::from_affine(&AES_MATRIX, AES_CONSTANT);
    c.bench_function("analyze_aes", |b| b.iter(|| analyze(black_box(&sbox))));
}

criterion_group!(benches, bench_nonlinearity, bench_full_report);
criterion_main!(benches);
