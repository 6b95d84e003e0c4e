// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use abacus_arith::calculator::Calculator;
use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use std::hint::black_box;

const PAIR_COUNT: usize = 4096;

/// Generates a deterministic table of operand pairs with nonzero divisors.
fn operand_pairs(count: usize) -> Vec<(i64, i64)> {
    let mut state = 0x243F_6A88_85A3_08D3u64;
    let mut next = move || {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (state >> 16) as i64
    };

    (0..count)
        .map(|_| {
            let a = next();
            let b = next() | 1; // Keeps divisors nonzero
            (a, b)
        })
        .collect()
}

fn bench_ops(c: &mut Criterion) {
    let calc = Calculator::new();
    let pairs = operand_pairs(PAIR_COUNT);

    let mut group = c.benchmark_group("calculator_ops");
    group.throughput(Throughput::Elements(PAIR_COUNT as u64));

    group.bench_function("add", |bencher| {
        bencher.iter(|| {
            for &(a, b) in &pairs {
                black_box(calc.add(black_box(a), black_box(b)));
            }
        })
    });

    group.bench_function("multiply", |bencher| {
        bencher.iter(|| {
            for &(a, b) in &pairs {
                black_box(calc.multiply(black_box(a), black_box(b)));
            }
        })
    });

    group.bench_function("divide", |bencher| {
        bencher.iter(|| {
            for &(a, b) in &pairs {
                black_box(calc.divide(black_box(a), black_box(b)).unwrap());
            }
        })
    });

    group.bench_function("checked_mul", |bencher| {
        bencher.iter(|| {
            for &(a, b) in &pairs {
                black_box(calc.checked_mul(black_box(a), black_box(b)));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_ops);
criterion_main!(benches);
