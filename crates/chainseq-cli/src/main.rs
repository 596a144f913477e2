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

use chainseq_core::math;
use chainseq_list::DoublyLinkedSequence;
use tracing_subscriber::EnvFilter;

fn enable_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

fn demo_sequence() {
    tracing::info!("=== Doubly Linked Sequence ===");

    let mut seq: DoublyLinkedSequence<i64> = DoublyLinkedSequence::new();
    tracing::info!("empty: {}", seq.display_forward());
    tracing::info!("is_empty: {}, len: {}", seq.is_empty(), seq.len());

    seq.push_back(10);
    seq.push_back(20);
    seq.push_back(30);
    seq.push_front(5);
    tracing::info!("after pushes: {}", seq.display_forward());

    if seq.insert(2, 15).is_ok() {
        tracing::info!("after insert(2, 15): {}", seq.display_forward());
    }
    if seq.insert(0, 1).is_ok() {
        tracing::info!("after insert(0, 1): {}", seq.display_forward());
    }

    tracing::info!("find(15): {:?}", seq.find(&15));
    tracing::info!("find(100): {:?}", seq.find(&100));
    match seq.get(3) {
        Ok(value) => tracing::info!("get(3): {}", value),
        Err(err) => tracing::warn!("get(3) failed: {}", err),
    }

    seq.remove(&15);
    tracing::info!("after remove(15): {}", seq.display_forward());
    match seq.remove_at(0) {
        Ok(value) => tracing::info!("remove_at(0) yielded {}: {}", value, seq.display_forward()),
        Err(err) => tracing::warn!("remove_at(0) failed: {}", err),
    }

    tracing::info!("forward:  {}", seq.display_forward());
    tracing::info!("backward: {}", seq.display_reverse());

    seq.reverse();
    tracing::info!("after reverse: {}", seq.display_forward());

    let mut single: DoublyLinkedSequence<i64> = DoublyLinkedSequence::new();
    single.push_back(42);
    single.reverse();
    tracing::info!("reversed single-element sequence: {}", single.display_forward());
}

fn demo_math() {
    tracing::info!("=== Numeric Utilities ===");

    tracing::info!("factorial(5): {:?}", math::factorial(5));
    tracing::info!("fibonacci(10): {:?}", math::fibonacci(10));
    tracing::info!("fibonacci_sequence(10): {:?}", math::fibonacci_sequence(10));
    tracing::info!("is_prime(17): {}", math::is_prime(17));
    tracing::info!("prime_factors(60): {:?}", math::prime_factors(60));
    tracing::info!("gcd(48, 18): {}", math::gcd(48u64, 18));
    tracing::info!("lcm(12, 8): {:?}", math::lcm(12u64, 8));
    tracing::info!("power(2, 10): {:?}", math::power(2u64, 10));

    let sample = [1.0, 2.0, 3.0, 4.0, 5.0, 5.0, 6.0, 7.0, 8.0, 9.0];
    match math::mean(&sample) {
        Ok(m) => tracing::info!("mean: {:.2}", m),
        Err(err) => tracing::warn!("mean failed: {}", err),
    }
    match math::median(&sample) {
        Ok(m) => tracing::info!("median: {}", m),
        Err(err) => tracing::warn!("median failed: {}", err),
    }
    match math::mode(&sample) {
        Ok(modes) => tracing::info!("mode: {:?}", modes),
        Err(err) => tracing::warn!("mode failed: {}", err),
    }
    match math::standard_deviation(&sample) {
        Ok(sd) => tracing::info!("standard deviation: {:.2}", sd),
        Err(err) => tracing::warn!("standard deviation failed: {}", err),
    }
    match math::square_root(25.0) {
        Ok(root) => tracing::info!("square_root(25): {}", root),
        Err(err) => tracing::warn!("square_root(25) failed: {}", err),
    }
    if let Err(err) = math::square_root(-4.0) {
        tracing::warn!("square_root(-4): {}", err);
    }

    tracing::info!("combination(5, 3): {:?}", math::combination(5, 3));
    tracing::info!("permutation(5, 3): {:?}", math::permutation(5, 3));
    tracing::info!("is_perfect_square(16): {}", math::is_perfect_square(16));
    tracing::info!("sum_of_digits(12345): {}", math::sum_of_digits(12345));
    tracing::info!("reverse_number(12345): {:?}", math::reverse_number(12345));
}

fn main() {
    enable_tracing();
    demo_sequence();
    demo_math();
}
