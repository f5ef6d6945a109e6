// benches/batch.rs
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lockbox_rs::{decrypt_batch, encrypt_batch, Crypter, DecryptParameters, EncryptParameters};
use std::hint::black_box;

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_key_mode");
    let crypter = Crypter::default();
    let key = crypter.key_generator().generate_key(None, None, None).unwrap();

    for &count in &[8usize, 64, 512] {
        let inputs: Vec<Vec<u8>> = (0..count).map(|_| vec![0x33u8; 16 * 1024]).collect();
        let envelopes = encrypt_batch(&crypter, EncryptParameters::key(&key), &inputs).unwrap();

        group.throughput(Throughput::Bytes((count * 16 * 1024) as u64));
        group.bench_with_input(BenchmarkId::new("encrypt", count), &inputs, |b, inputs| {
            b.iter(|| black_box(encrypt_batch(&crypter, EncryptParameters::key(&key), inputs).unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("decrypt", count), &envelopes, |b, envelopes| {
            b.iter(|| black_box(decrypt_batch(&crypter, DecryptParameters::Key(&key), envelopes).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_batch);
criterion_main!(benches);
