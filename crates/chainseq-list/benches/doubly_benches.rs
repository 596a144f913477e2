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

use chainseq_list::DoublyLinkedSequence;
use criterion::{Criterion, criterion_group, criterion_main};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::hint::black_box;

// -----------------------
// Problem size constants
// -----------------------
const NUM_NODES: usize = 1_000;
const SEED: u64 = 0xC0FFEE;

fn build_sequence() -> DoublyLinkedSequence<u64> {
    (0..NUM_NODES as u64).collect()
}

// -----------------------
// 1) push_back churn
// -----------------------
fn bench_push_back(c: &mut Criterion) {
    c.bench_function("doubly/push_back_1000", |b| {
        b.iter(|| {
            let mut seq = DoublyLinkedSequence::with_capacity(NUM_NODES);
            for i in 0..NUM_NODES as u64 {
                seq.push_back(black_box(i));
            }
            black_box(seq.len())
        })
    });
}

// -----------------------
// 2) Positional access in the middle of the chain
// -----------------------
fn bench_get_middle(c: &mut Criterion) {
    let seq = build_sequence();
    let mid = NUM_NODES / 2;

    c.bench_function("doubly/get_middle", |b| {
        b.iter(|| {
            let out = seq.get(black_box(mid));
            black_box(out)
        })
    });
}

// -----------------------
// 3) find() over random probes (half hits, half misses)
// -----------------------
fn bench_find_random(c: &mut Criterion) {
    let seq = build_sequence();
    let mut rng = ChaCha8Rng::seed_from_u64(SEED);
    let probes: Vec<u64> = (0..64).map(|_| rng.random_range(0..2 * NUM_NODES as u64)).collect();

    c.bench_function("doubly/find_random", |b| {
        b.iter(|| {
            let mut hits = 0usize;
            for p in &probes {
                if seq.find(black_box(p)).is_some() {
                    hits += 1;
                }
            }
            black_box(hits)
        })
    });
}

// -----------------------
// 4) In-place reversal (column swap)
// -----------------------
fn bench_reverse(c: &mut Criterion) {
    c.bench_function("doubly/reverse", |b| {
        let mut seq = build_sequence();
        b.iter(|| {
            seq.reverse();
            black_box(seq.len())
        })
    });
}

// -----------------------
// 5) Full forward traversal
// -----------------------
fn bench_iter_sum(c: &mut Criterion) {
    let seq = build_sequence();
    c.bench_function("doubly/iter_sum", |b| {
        b.iter(|| {
            let sum: u64 = seq.iter().copied().sum();
            black_box(sum)
        })
    });
}

criterion_group!(
    benches,
    bench_push_back,
    bench_get_middle,
    bench_find_random,
    bench_reverse,
    bench_iter_sum
);
criterion_main!(benches);
