// benches/encrypt.rs
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lockbox_rs::{Crypter, EncryptParameters, StreamAdapter};
use std::hint::black_box;

const SIZES: [usize; 4] = [16, 1024, 64 * 1024, 1024 * 1024];

fn bench_encrypt_key_mode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encrypt_key_mode");
    let crypter = Crypter::default();
    let key = crypter.key_generator().generate_key(None, None, None).unwrap();

    for &size in &SIZES {
        let input = vec![0x41u8; size]; // Repeating 'A'

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("one_shot", format_size(size)), &size, |b, _| {
            b.iter(|| black_box(crypter.encrypt(EncryptParameters::key(&key), black_box(&input)).unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("stream_4k_chunks", format_size(size)), &size, |b, _| {
            b.iter(|| {
                let mut stream = crypter.encrypt_stream(EncryptParameters::key(&key)).unwrap();
                let mut out = Vec::with_capacity(size + 128);
                for chunk in input.chunks(4096) {
                    out.extend(stream.feed(black_box(chunk)).unwrap());
                }
                out.extend(stream.end().unwrap().output);
                black_box(out)
            });
        });
    }

    group.finish();
}

fn format_size(bytes: usize) -> String {
    const KB: usize = 1024;
    const MB: usize = KB * 1024;
    if bytes >= MB {
        format!("{} MiB", bytes / MB)
    } else if bytes >= KB {
        format!("{} KiB", bytes / KB)
    } else {
        format!("{bytes} B")
    }
}

criterion_group!(benches, bench_encrypt_key_mode);
criterion_main!(benches);
