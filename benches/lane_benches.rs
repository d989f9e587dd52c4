//! Criterion benchmarks for the hot lane operations

use core::hint::black_box;
use criterion::{criterion_group, criterion_main, Criterion};
use lanevec::{DefaultLanes, LaneVector};

const BUFFER_LEN: usize = 1024;

fn bench_axpy(c: &mut Criterion) {
    let x = [1.25f64; BUFFER_LEN];
    let y = [0.5f64; BUFFER_LEN];
    let mut out = [0.0f64; BUFFER_LEN];
    let a = DefaultLanes::splat(3.0);

    c.bench_function("axpy_1024", |b| {
        b.iter(|| {
            for i in (0..BUFFER_LEN).step_by(DefaultLanes::LANES) {
                let vx = DefaultLanes::from_slice(&x[i..]);
                let vy = DefaultLanes::from_slice(&y[i..]);
                (a * vx + vy).to_slice(&mut out[i..]);
            }
            black_box(out[0])
        })
    });
}

fn bench_sqrt(c: &mut Criterion) {
    let x = [42.0f64; BUFFER_LEN];
    let mut out = [0.0f64; BUFFER_LEN];

    c.bench_function("sqrt_1024", |b| {
        b.iter(|| {
            for i in (0..BUFFER_LEN).step_by(DefaultLanes::LANES) {
                DefaultLanes::from_slice(&x[i..]).sqrt().to_slice(&mut out[i..]);
            }
            black_box(out[0])
        })
    });
}

fn bench_clamp_negative(c: &mut Criterion) {
    let mut x = [1.0f64; BUFFER_LEN];
    for (i, v) in x.iter_mut().enumerate() {
        if i % 3 == 0 {
            *v = -1.0;
        }
    }
    let mut out = [0.0f64; BUFFER_LEN];
    let zero = DefaultLanes::splat(0.0);

    c.bench_function("clamp_negative_1024", |b| {
        b.iter(|| {
            for i in (0..BUFFER_LEN).step_by(DefaultLanes::LANES) {
                let v = DefaultLanes::from_slice(&x[i..]);
                let clamped = DefaultLanes::select(v.lt(zero), zero, v);
                clamped.to_slice(&mut out[i..]);
            }
            black_box(out[0])
        })
    });
}

criterion_group!(benches, bench_axpy, bench_sqrt, bench_clamp_negative);
criterion_main!(benches);
