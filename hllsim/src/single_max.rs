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

//! The single-max estimator.
//!
//! Remember only the longest streak `L` ever seen and guess that about `2^L`
//! people must have flipped to produce it. This is the simplest Flajolet–Martin
//! style estimator and the noisiest: every estimate is a power of two and one
//! lucky flipper doubles the answer.
//!
//! The estimator deliberately uses the raw streak `L`, not the register value
//! `ρ = L + 1` that HyperLogLog stores.

use std::fmt::Display;

use crate::hash::HASH_BITS;
use crate::hash::ItemHasher;
use crate::hash::count_leading_zeros;

/// `2^max(streaks)`, or `0` when there are no streaks.
///
/// # Examples
///
/// ```
/// use hllsim::single_max::single_max_estimate;
///
/// assert_eq!(single_max_estimate(&[]), 0.0);
/// assert_eq!(single_max_estimate(&[0, 3, 8, 5]), 256.0);
/// ```
pub fn single_max_estimate(streaks: &[u32]) -> f64 {
    match streaks.iter().max() {
        Some(&max) => 2f64.powi(max as i32),
        None => 0.0,
    }
}

/// Streaks of hashed items: the leading zeros of each item's full 32-bit hash.
///
/// Items are hashed through their `Display` form. The result does not depend on
/// any register partitioning, so it is the baseline to compare HyperLogLog with.
pub fn hashed_streaks<I, T>(items: I, seed: u32) -> Vec<u32>
where
    I: IntoIterator<Item = T>,
    T: Display,
{
    let mut hasher = ItemHasher::new(seed);
    items
        .into_iter()
        .map(|item| count_leading_zeros(hasher.hash(item), HASH_BITS))
        .collect()
}
