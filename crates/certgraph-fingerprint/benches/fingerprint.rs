use certgraph_fingerprint::Fingerprint;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

pub fn criterion_benchmark(c: &mut Criterion) {
    let certificate = vec![0x30u8; 1500];
    let certificate = certificate.as_slice();

    c.bench_function("from_raw_bytes", |b| {
        b.iter(|| Fingerprint::from_raw_bytes(black_box(certificate)))
    });

    let fingerprint = Fingerprint::from_raw_bytes(certificate);
    let hex = fingerprint.to_hex();
    let b64 = fingerprint.to_base64();

    c.bench_function("to_hex", |b| b.iter(|| black_box(&fingerprint).to_hex()));
    c.bench_function("from_hex", |b| {
        b.iter(|| Fingerprint::from_hex(black_box(&hex)))
    });
    c.bench_function("from_base64", |b| {
        b.iter(|| Fingerprint::from_base64(black_box(&b64)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
