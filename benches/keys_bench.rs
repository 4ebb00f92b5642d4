//! Benchmarks for kvadmin key encoding

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use kvadmin::{keys, transcode};

fn key_benchmarks(c: &mut Criterion) {
    c.bench_function("object_key", |b| {
        b.iter(|| keys::object_key(black_box("bucket"), black_box("object"), black_box("0")))
    });

    c.bench_function("multipart_key", |b| {
        b.iter(|| {
            keys::multipart_key(
                black_box("bucket"),
                black_box("object"),
                black_box(1_700_000_000_000_000_000),
            )
        })
    });

    c.bench_function("object_part_key", |b| {
        b.iter(|| {
            keys::object_part_key(
                black_box("bucket"),
                black_box("object"),
                black_box("upload-id"),
                black_box("10000"),
            )
        })
    });

    c.bench_function("parse_byte_literal", |b| {
        b.iter(|| transcode::parse_byte_literal(black_box("[1 2 3 4 5 128 255 0 92 16]")))
    });
}

criterion_group!(benches, key_benchmarks);
criterion_main!(benches);
