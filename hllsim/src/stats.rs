// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Summary statistics over estimate distributions.
//!
//! All helpers accept any slice and return `0` for degenerate input instead of
//! failing, since an interactive caller may legitimately have no data yet.

use std::collections::BTreeMap;

/// Arithmetic mean, `0` for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Harmonic mean, `0` for an empty slice or when any value is `0`.
///
/// # Examples
///
/// ```
/// use hllsim::stats::harmonic_mean;
///
/// assert!((harmonic_mean(&[1.0, 4.0]) - 1.6).abs() < 1e-12);
/// assert_eq!(harmonic_mean(&[0.0, 1.0]), 0.0);
/// ```
pub fn harmonic_mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut reciprocal_sum = 0.0;
    for &v in values {
        if v == 0.0 {
            return 0.0;
        }
        reciprocal_sum += 1.0 / v;
    }
    values.len() as f64 / reciprocal_sum
}

/// Median, averaging the two middle values for even lengths. `0` for an empty
/// slice. The input is left untouched.
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[mid]
    } else {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    }
}

/// Sample standard deviation (`n - 1` divisor), `0` for fewer than two values.
pub fn std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let m = mean(values);
    let sum_sq: f64 = values.iter().map(|v| (v - m) * (v - m)).sum();
    (sum_sq / (values.len() - 1) as f64).sqrt()
}

/// `|estimate - truth| / truth`.
///
/// When `truth` is `0` the error is `0` for a zero estimate and infinite
/// otherwise.
pub fn relative_error(estimate: f64, truth: f64) -> f64 {
    if truth == 0.0 {
        return if estimate == 0.0 { 0.0 } else { f64::INFINITY };
    }
    (estimate - truth).abs() / truth
}

/// Fraction of `estimates` whose relative error is at most `fraction`.
/// `0` for an empty slice.
pub fn percent_within_error(estimates: &[f64], truth: f64, fraction: f64) -> f64 {
    if estimates.is_empty() {
        return 0.0;
    }
    let within = estimates
        .iter()
        .filter(|&&e| relative_error(e, truth) <= fraction)
        .count();
    within as f64 / estimates.len() as f64
}

/// Headline numbers for a distribution of estimates of a known truth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    /// The true count the estimates aim at.
    pub truth: f64,
    /// Arithmetic mean of the estimates.
    pub mean: f64,
    /// Median of the estimates.
    pub median: f64,
    /// Sample standard deviation of the estimates.
    pub std_dev: f64,
    /// Smallest estimate.
    pub min: f64,
    /// Largest estimate.
    pub max: f64,
    /// `std_dev / truth`: the spread as a fraction of the true value.
    pub standard_error: f64,
    /// Fraction of estimates within 10% of the truth.
    pub within_ten_percent: f64,
}

impl Summary {
    /// Summarize `estimates` against `truth`. Every field is `0` for an empty
    /// slice.
    pub fn of(estimates: &[f64], truth: f64) -> Self {
        let (min, max) = if estimates.is_empty() {
            (0.0, 0.0)
        } else {
            estimates
                .iter()
                .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &e| {
                    (lo.min(e), hi.max(e))
                })
        };
        let std_dev = std_dev(estimates);
        Self {
            truth,
            mean: mean(estimates),
            median: median(estimates),
            std_dev,
            min,
            max,
            standard_error: if truth == 0.0 { 0.0 } else { std_dev / truth },
            within_ten_percent: percent_within_error(estimates, truth, 0.1),
        }
    }
}

/// Count power-of-two estimates by their exponent, e.g. `1024.0` lands in
/// bucket `10`. Values that are not positive powers of two are skipped.
pub fn power_of_two_histogram(estimates: &[f64]) -> BTreeMap<i32, usize> {
    let mut buckets = BTreeMap::new();
    for &e in estimates {
        if e <= 0.0 || !e.is_finite() {
            continue;
        }
        let exponent = e.log2();
        if exponent.fract() != 0.0 {
            continue;
        }
        *buckets.entry(exponent as i32).or_insert(0) += 1;
    }
    buckets
}
