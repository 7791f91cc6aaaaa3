// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tensor_engine::{add, dot, full, mul};

fn bench_elementwise(c: &mut Criterion) {
    let mut group = c.benchmark_group("elementwise");
    for &n in &[1_024usize, 16_384, 262_144] {
        let a = full([n], 1.5f32);
        let b = full([n], 2.5f32);
        group.bench_with_input(BenchmarkId::new("add_f32", n), &n, |bench, _| {
            bench.iter(|| add(black_box(&a), black_box(&b)).unwrap());
        });
        let ai = full([n], 3i32);
        let bi = full([n], 5i32);
        group.bench_with_input(BenchmarkId::new("mul_i32", n), &n, |bench, _| {
            bench.iter(|| mul(black_box(&ai), black_box(&bi)).unwrap());
        });
    }
    group.finish();
}

fn bench_matmul(c: &mut Criterion) {
    let mut group = c.benchmark_group("matmul");
    for &n in &[16usize, 64, 128] {
        let a = full([n, n], 1.0f32);
        let b = full([n, n], 2.0f32);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |bench, _| {
            bench.iter(|| dot(black_box(&a), black_box(&b)).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_elementwise, bench_matmul);
criterion_main!(benches);
