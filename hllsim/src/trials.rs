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

//! Repeated experiments for comparing estimators.
//!
//! Each runner returns one estimate per trial, ready to be summarized with
//! [`crate::stats`] or drawn as a histogram.

use crate::coinflip::simulate_crowd;
use crate::common::create_rng;
use crate::error::Error;
use crate::hll::check_precision;
use crate::hll::hll_count;
use crate::single_max::single_max_estimate;

/// Seed used by callers that do not care to pick one.
pub const DEFAULT_TRIAL_SEED: u32 = 42;

/// Run `trials` single-max experiments over a crowd of `n` coin flippers.
///
/// One generator seeded with `seed` drives all trials in sequence, so the
/// whole result is reproducible from `seed`. Every estimate is a power of two.
///
/// # Examples
///
/// ```
/// use hllsim::trials::single_max_trials;
///
/// let estimates = single_max_trials(1_000, 20, 42);
/// assert_eq!(estimates.len(), 20);
/// assert!(estimates.iter().all(|e| e.log2().fract() == 0.0));
/// ```
pub fn single_max_trials(n: usize, trials: u32, seed: u32) -> Vec<f64> {
    tracing::debug!(n, trials, seed, "running single-max trials");
    let mut rng = create_rng(seed);
    (0..trials)
        .map(|trial| {
            let estimate = single_max_estimate(&simulate_crowd(n, &mut rng));
            tracing::trace!(trial, estimate, "single-max trial");
            estimate
        })
        .collect()
}

/// Run `trials` HyperLogLog experiments over the items `0..n` with `2^p`
/// registers.
///
/// Trial `t` hashes the same items with seed `seed + t`, as if `trials`
/// independent sketches watched the same population.
///
/// # Errors
///
/// Returns [`ErrorKind::ConfigInvalid`](crate::error::ErrorKind::ConfigInvalid)
/// if `p` is out of range.
pub fn hll_trials(n: usize, p: u8, trials: u32, seed: u32) -> Result<Vec<f64>, Error> {
    check_precision(p)?;
    tracing::debug!(n, p, trials, seed, "running hll trials");
    (0..trials)
        .map(|trial| {
            let estimate = hll_count(0..n, p, seed.wrapping_add(trial))?;
            tracing::trace!(trial, estimate, "hll trial");
            Ok(estimate)
        })
        .collect()
}
