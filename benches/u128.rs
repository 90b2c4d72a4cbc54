use wideuint::primitives::U128;

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_u128(c: &mut Criterion) {
    let a = U128::new(0x0123_4567_89AB_CDEF, 0xFEDC_BA98_7654_3210);
    let b = U128::new(0, 0xF0E1_D2C3_B4A5_9687);

    c.bench_function("U128 mul", |bench| bench.iter(|| black_box(a) * black_box(b)));
    c.bench_function("U128 div", |bench| bench.iter(|| black_box(a) / black_box(b)));
    c.bench_function("U128 to decimal", |bench| {
        bench.iter(|| black_box(a).to_string_radix(10, 0))
    });
}

criterion_group!(benches, bench_u128);
criterion_main!(benches);
