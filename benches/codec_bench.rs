//! Criterion benchmarks for xdrpack
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use xdrpack::{Decoder, Encoder};

fn bench_scalar_encode(c: &mut Criterion) {
    c.bench_function("scalar_encode", |b| {
        let mut enc = Encoder::new();
        b.iter(|| {
            enc.reset();
            enc.put_u32(black_box(0xDEAD_BEEF));
            enc.put_i32(black_box(-12345));
            enc.put_u64(black_box(1_700_000_000_000_000_000));
            enc.put_f64(black_box(3.141592653589793));
            enc.put_bool(black_box(true));
            black_box(enc.len());
        });
    });
}

fn bench_string_roundtrip(c: &mut Criterion) {
    c.bench_function("string_roundtrip", |b| {
        let mut enc = Encoder::new();
        b.iter(|| {
            enc.reset();
            enc.put_string(black_box("hello world, this is a benchmark payload"))
                .unwrap();
            let mut dec = Decoder::new(enc.buffer());
            black_box(dec.get_string().unwrap());
        });
    });
}

fn bench_list_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("list_decode");
    for count in [10usize, 100, 1000] {
        let items: Vec<u32> = (0..count as u32).collect();
        let mut enc = Encoder::new();
        enc.put_list(&items, |e, &v| {
            e.put_u32(v);
            Ok(())
        })
        .unwrap();
        let buf = enc.into_buffer();

        group.bench_with_input(BenchmarkId::from_parameter(count), &buf, |b, buf| {
            b.iter(|| {
                let mut dec = Decoder::new(black_box(buf));
                black_box(dec.get_list(|d| d.get_u32()).unwrap());
            });
        });
    }
    group.finish();
}

fn bench_opaque_encode(c: &mut Criterion) {
    let payload = vec![0xA5u8; 4096];
    c.bench_function("opaque_encode_4k", |b| {
        let mut enc = Encoder::new();
        b.iter(|| {
            enc.reset();
            enc.put_opaque(black_box(&payload)).unwrap();
            black_box(enc.len());
        });
    });
}

criterion_group!(
    benches,
    bench_scalar_encode,
    bench_string_roundtrip,
    bench_list_decode,
    bench_opaque_encode
);
criterion_main!(benches);
