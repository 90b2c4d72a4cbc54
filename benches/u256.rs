use wideuint::primitives::{U128, U256};

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_u256(c: &mut Criterion) {
    let a = U256::new(
        U128::new(0x0123_4567_89AB_CDEF, 0xFEDC_BA98_7654_3210),
        U128::new(0x0F1E_2D3C_4B5A_6978, 0x8796_A5B4_C3D2_E1F0),
    );
    let b = U256::new(U128::ZERO, U128::new(46, 9408422516637784225));

    c.bench_function("U256 mul", |bench| bench.iter(|| black_box(a) * black_box(b)));
    c.bench_function("U256 div", |bench| bench.iter(|| black_box(a) / black_box(b)));
    c.bench_function("U256 shl 129", |bench| bench.iter(|| black_box(a) << black_box(129u32)));
    c.bench_function("U256 to decimal", |bench| {
        bench.iter(|| black_box(a).to_string_radix(10, 0))
    });
    c.bench_function("U256 parse hex", |bench| {
        bench.iter(|| U256::from_str_radix(black_box("ffeeddccbbaa99887766554433221100"), 16))
    });
}

criterion_group!(benches, bench_u256);
criterion_main!(benches);
