use criterion::{black_box, criterion_group, criterion_main, Criterion};
use muhash3072::num3072::{Num3072, BYTE_SIZE};
use muhash3072::MuHash3072;

fn sample_element(tag: u8) -> Num3072 {
    let mut bytes = [0u8; BYTE_SIZE];
    for (i, byte) in bytes.iter_mut().enumerate() {
        *byte = (i as u8).wrapping_mul(97) ^ tag;
    }
    Num3072::from_le_bytes(&bytes)
}

fn bench_num3072(c: &mut Criterion) {
    let mut group = c.benchmark_group("num3072");
    let base = sample_element(0x17);
    let other = sample_element(0x6b);

    group.bench_function("multiply", |b| {
        b.iter(|| {
            let mut product = base;
            product.multiply(black_box(&other));
            black_box(product)
        });
    });

    group.bench_function("square", |b| {
        b.iter(|| {
            let mut squared = base;
            squared.square();
            black_box(squared)
        });
    });

    group.bench_function("inverse", |b| {
        b.iter(|| black_box(base.inverse()));
    });

    group.finish();
}

fn bench_accumulator(c: &mut Criterion) {
    let mut group = c.benchmark_group("muhash");
    let seed = [0x2au8; 32];
    let element = MuHash3072::from_seed(&seed);

    group.bench_function("from_seed", |b| {
        b.iter(|| black_box(MuHash3072::from_seed(black_box(&seed))));
    });

    group.bench_function("insert", |b| {
        b.iter(|| {
            let mut acc = MuHash3072::new();
            acc.insert(black_box(b"benchmark element payload"));
            black_box(acc)
        });
    });

    group.bench_function("mul_assign", |b| {
        b.iter(|| {
            let mut acc = MuHash3072::new();
            acc *= black_box(&element);
            black_box(acc)
        });
    });

    group.bench_function("div_assign", |b| {
        b.iter(|| {
            let mut acc = MuHash3072::new();
            acc /= black_box(&element);
            black_box(acc)
        });
    });

    group.bench_function("finalize", |b| {
        b.iter(|| black_box(element.finalize()));
    });

    group.finish();
}

criterion_group!(benches, bench_num3072, bench_accumulator);
criterion_main!(benches);
