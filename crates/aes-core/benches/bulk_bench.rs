use aes_core::{encrypt_bulk, AesContext, Aes128Key};
use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use sbox_core::{SBox, AES_CONSTANT, AES_MATRIX};

fn bench_single_block(c: &mut Criterion) {
    let sbox = SBox::from_affine(&AES_MATRIX, AES_CONSTANT);
    let ctx = AesContext::new(&Aes128Key::from([0u8; 16]), &sbox);
    let mut rng = ChaCha20Rng::from_seed([1u8; 32]);
    let mut block = [0u8; 16];
    rng.fill_bytes(&mut block);

    c.bench_function("encrypt_block", |b| {
        b.iter(|| ctx.encrypt_block(&block));
    });
}

fn bench_bulk(c: &mut Criterion) {
    let sbox = SBox::from_affine(&AES_MATRIX, AES_CONSTANT);
    let key = [0u8; 16];
    let mut rng = ChaCha20Rng::from_seed([2u8; 32]);
    let mut data = vec![0u8; 256 * 1024];
    rng.fill_bytes(&mut data);

    let mut group = c.benchmark_group("bulk");
    group.throughput(Throughput::Bytes(data.len() as u64));
    group.sample_size(20);
    group.bench_function("encrypt_bulk_256k", |b| {
        b.iter(|| encrypt_bulk(&data, &key, &sbox).expect("valid key"));
    });
    group.finish();
}

criterion_group!(benches, bench_single_block, bench_bulk);
criterion_main!(benches);
