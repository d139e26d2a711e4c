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

//! Seeded random sources for the simulations.

use std::time::SystemTime;
use std::time::UNIX_EPOCH;

/// Uniform random number source.
///
/// Every stochastic routine in this crate is generic over a `RandomSource`, so
/// a seeded [`Mulberry32`] gives reproducible runs and tests can script draws.
pub trait RandomSource {
    /// Returns the next value, uniform in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Returns a fair coin flip: `true` is heads.
    fn next_bool(&mut self) -> bool {
        self.next_f64() >= 0.5
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}

/// Mulberry32: a 32-bit Weyl sequence followed by two xor-shift/multiply rounds.
///
/// Fast and small, good enough for simulations. Not suitable for anything
/// security related.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mulberry32 {
    state: u32,
}

const WEYL_INCREMENT: u32 = 0x6d2b79f5;
const TWO_POW_32: f64 = 4294967296.0;

impl Mulberry32 {
    /// Creates a new generator using the provided seed.
    pub fn seeded(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Returns the next raw 32-bit output.
    pub fn next_u32(&mut self) -> u32 {
        let s = self.state.wrapping_add(WEYL_INCREMENT);
        self.state = s;
        let mut t = (s ^ (s >> 15)).wrapping_mul(1 | s);
        t = t.wrapping_add((t ^ (t >> 7)).wrapping_mul(61 | t)) ^ t;
        t ^ (t >> 14)
    }
}

/// Creates a seeded generator. Equal seeds yield identical sequences.
///
/// # Examples
///
/// ```
/// use hllsim::common::RandomSource;
/// use hllsim::common::create_rng;
///
/// let mut a = create_rng(12345);
/// let mut b = create_rng(12345);
/// assert_eq!(a.next_f64(), b.next_f64());
/// ```
pub fn create_rng(seed: u32) -> Mulberry32 {
    Mulberry32::seeded(seed)
}

impl Default for Mulberry32 {
    fn default() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        Self::seeded((nanos as u32) ^ (nanos >> 32) as u32 ^ std::process::id())
    }
}

impl RandomSource for Mulberry32 {
    fn next_f64(&mut self) -> f64 {
        self.next_u32() as f64 / TWO_POW_32
    }
}

impl Iterator for Mulberry32 {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        Some(self.next_f64())
    }
}
