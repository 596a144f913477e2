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

//! Number-theoretic helpers. All arithmetic is checked; overflow
//! surfaces as `None` rather than wrapping.

use num_traits::{PrimInt, Unsigned};

/// `n!`, or `None` once the product leaves `u128`.
pub fn factorial(n: u32) -> Option<u128> {
    (2..=n as u128).try_fold(1u128, |acc, k| acc.checked_mul(k))
}

/// The `n`th Fibonacci number, zero-indexed (`fibonacci(0) == 0`).
pub fn fibonacci(n: u32) -> Option<u128> {
    if n == 0 {
        return Some(0);
    }
    let (mut a, mut b) = (0u128, 1u128);
    for _ in 1..n {
        let next = a.checked_add(b)?;
        a = b;
        b = next;
    }
    Some(b)
}

/// The first `n` Fibonacci numbers.
pub fn fibonacci_sequence(n: usize) -> Option<Vec<u128>> {
    let mut out: Vec<u128> = Vec::with_capacity(n);
    if n >= 1 {
        out.push(0);
    }
    if n >= 2 {
        out.push(1);
    }
    for i in 2..n {
        let next = out[i - 2].checked_add(out[i - 1])?;
        out.push(next);
    }
    Some(out)
}

/// Primality by trial division over odd candidates up to `sqrt(n)`.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }
    let mut d = 3u64;
    // Checked guard: `d * d` overflows for inputs at the top of the u64
    // range, where the divisor bound reaches 2^32. Once the square
    // leaves u64 no divisor up to sqrt(n) remains to try.
    while let Some(sq) = d.checked_mul(d) {
        if sq > n {
            break;
        }
        if n % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}

/// Prime factorisation in ascending order, with multiplicity.
/// Empty for `n <= 1`.
pub fn prime_factors(n: u64) -> Vec<u64> {
    let mut factors = Vec::new();
    let mut n = n;
    let mut d = 2u64;
    while let Some(sq) = d.checked_mul(d) {
        if sq > n {
            break;
        }
        while n % d == 0 {
            factors.push(d);
            n /= d;
        }
        d += 1;
    }
    if n > 1 {
        factors.push(n);
    }
    factors
}

/// Greatest common divisor by the Euclidean algorithm.
/// `gcd(x, 0) == gcd(0, x) == x`.
pub fn gcd<T: PrimInt + Unsigned>(a: T, b: T) -> T {
    let (mut a, mut b) = (a, b);
    while b != T::zero() {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Least common multiple; zero when either operand is zero, `None` on
/// overflow.
pub fn lcm<T: PrimInt + Unsigned>(a: T, b: T) -> Option<T> {
    if a == T::zero() || b == T::zero() {
        return Some(T::zero());
    }
    (a / gcd(a, b)).checked_mul(&b)
}

/// `base^exp` by binary exponentiation with checked multiplication.
pub fn power<T: PrimInt>(base: T, exp: u32) -> Option<T> {
    let mut result = T::one();
    let mut base = base;
    let mut exp = exp;
    while exp > 0 {
        if exp & 1 == 1 {
            result = result.checked_mul(&base)?;
        }
        exp >>= 1;
        if exp > 0 {
            base = base.checked_mul(&base)?;
        }
    }
    Some(result)
}

/// Binomial coefficient `C(n, r)`; zero when `r > n`, `None` on
/// overflow. Computed multiplicatively over the smaller of `r`, `n - r`.
pub fn combination(n: u64, r: u64) -> Option<u64> {
    if r > n {
        return Some(0);
    }
    let r = r.min(n - r);
    let mut result = 1u64;
    for i in 0..r {
        // Exact at every step: the running product of k consecutive
        // binomial ratios is itself a binomial coefficient.
        result = result.checked_mul(n - i)? / (i + 1);
    }
    Some(result)
}

/// Falling factorial `P(n, r)`; zero when `r > n`, `None` on overflow.
pub fn permutation(n: u64, r: u64) -> Option<u64> {
    if r > n {
        return Some(0);
    }
    let mut result = 1u64;
    for k in (n - r + 1)..=n {
        result = result.checked_mul(k)?;
    }
    Some(result)
}

/// Whether `n` is a perfect square.
pub fn is_perfect_square(n: u64) -> bool {
    // Float sqrt is only a candidate; verify in integer arithmetic with
    // a one-ulp safety margin on either side.
    let candidate = (n as f64).sqrt() as u64;
    for root in candidate.saturating_sub(1)..=candidate.saturating_add(1) {
        if let Some(sq) = root.checked_mul(root) {
            if sq == n {
                return true;
            }
        }
    }
    false
}

/// Sum of the decimal digits of `|n|`.
pub fn sum_of_digits(n: i64) -> u32 {
    let mut n = n.unsigned_abs();
    let mut sum = 0u32;
    while n > 0 {
        sum += (n % 10) as u32;
        n /= 10;
    }
    sum
}

/// `n` with its decimal digits reversed, keeping the sign.
/// `None` when the reversed magnitude leaves `i64`.
pub fn reverse_number(n: i64) -> Option<i64> {
    let negative = n < 0;
    let mut magnitude = n.unsigned_abs();
    let mut reversed = 0u64;
    while magnitude > 0 {
        reversed = reversed.checked_mul(10)?.checked_add(magnitude % 10)?;
        magnitude /= 10;
    }
    if negative {
        // i64::MIN magnitude fits only on the negative side.
        if reversed > i64::MIN.unsigned_abs() {
            return None;
        }
        Some((reversed as i64).wrapping_neg())
    } else {
        i64::try_from(reversed).ok()
    }
}
