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

//! Descriptive statistics over float samples, generic over
//! `num_traits::Float`.

use num_traits::Float;
use std::fmt::Debug;

/// Error type for operations that need a non-empty sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptySampleError;

impl std::fmt::Display for EmptySampleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Cannot compute a statistic over an empty sample")
    }
}

impl std::error::Error for EmptySampleError {}

/// Error type for operations that need a minimum sample size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsufficientSampleError {
    required: usize,
    actual: usize,
}

impl InsufficientSampleError {
    pub fn new(required: usize, actual: usize) -> Self {
        Self { required, actual }
    }

    pub fn required(&self) -> usize {
        self.required
    }

    pub fn actual(&self) -> usize {
        self.actual
    }
}

impl std::fmt::Display for InsufficientSampleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Sample of size {} is too small; at least {} values are required",
            self.actual, self.required
        )
    }
}

impl std::error::Error for InsufficientSampleError {}

/// Error type for a negative radicand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NegativeInputError<F> {
    value: F,
}

impl<F: Float + Debug> NegativeInputError<F> {
    pub fn new(value: F) -> Self {
        Self { value }
    }

    pub fn value(&self) -> F {
        self.value
    }
}

impl<F: Float + Debug> std::fmt::Display for NegativeInputError<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Square root is not defined for negative input {:?}", self.value)
    }
}

impl<F: Float + Debug> std::error::Error for NegativeInputError<F> {}

/// Arithmetic mean.
pub fn mean<F: Float>(sample: &[F]) -> Result<F, EmptySampleError> {
    if sample.is_empty() {
        return Err(EmptySampleError);
    }
    let sum = sample.iter().fold(F::zero(), |acc, &x| acc + x);
    Ok(sum / F::from(sample.len()).unwrap())
}

/// Median; the midpoint of the two central values for even sizes.
pub fn median<F: Float>(sample: &[F]) -> Result<F, EmptySampleError> {
    if sample.is_empty() {
        return Err(EmptySampleError);
    }
    let mut sorted = sample.to_vec();
    sorted.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let n = sorted.len();
    if n % 2 == 0 {
        let two = F::one() + F::one();
        Ok((sorted[n / 2 - 1] + sorted[n / 2]) / two)
    } else {
        Ok(sorted[n / 2])
    }
}

/// All values sharing the highest frequency, in first-seen order.
pub fn mode<T: PartialEq + Copy>(sample: &[T]) -> Result<Vec<T>, EmptySampleError> {
    if sample.is_empty() {
        return Err(EmptySampleError);
    }

    let mut distinct: Vec<T> = Vec::new();
    let mut counts: Vec<usize> = Vec::new();
    for &x in sample {
        match distinct.iter().position(|&d| d == x) {
            Some(at) => counts[at] += 1,
            None => {
                distinct.push(x);
                counts.push(1);
            }
        }
    }

    let best = counts.iter().copied().max().unwrap_or(0);
    Ok(distinct
        .into_iter()
        .zip(counts)
        .filter(|&(_, c)| c == best)
        .map(|(v, _)| v)
        .collect())
}

/// Sample standard deviation (Bessel-corrected, `n - 1` denominator).
pub fn standard_deviation<F: Float>(sample: &[F]) -> Result<F, InsufficientSampleError> {
    if sample.len() < 2 {
        return Err(InsufficientSampleError::new(2, sample.len()));
    }
    let m = mean(sample).unwrap_or_else(|_| F::zero());
    let sum_sq = sample
        .iter()
        .fold(F::zero(), |acc, &x| acc + (x - m) * (x - m));
    let variance = sum_sq / F::from(sample.len() - 1).unwrap();
    Ok(variance.sqrt())
}

/// Square root by Newton iteration, to a fixed convergence threshold.
pub fn square_root<F: Float + Debug>(n: F) -> Result<F, NegativeInputError<F>> {
    if n < F::zero() {
        return Err(NegativeInputError::new(n));
    }
    if n == F::zero() {
        return Ok(F::zero());
    }

    let precision = F::from(1e-10).unwrap();
    let half = F::from(0.5).unwrap();
    let mut x = n;
    loop {
        let root = half * (x + n / x);
        if (root - x).abs() < precision {
            return Ok(root);
        }
        x = root;
    }
}
