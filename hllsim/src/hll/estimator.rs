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

//! The HyperLogLog cardinality estimate.
//!
//! The raw estimate is `alpha(m) * m^2 / sum(2^-register)`. Two corrections
//! are applied on top of it:
//!
//! - **Small range**: while the raw estimate is at most `2.5 * m` and some
//!   registers are still empty, linear counting `m * ln(m / zeros)` is used
//!   instead. It reads the fraction of empty registers, which is far more
//!   accurate than the harmonic mean when most registers have seen nothing.
//! - **Large range**: above `2^32 / 30` the 32-bit hash space starts to collide
//!   and the estimate is replaced by `-2^32 * ln(1 - E / 2^32)`.

const TWO_POW_32: f64 = 4294967296.0;
const LARGE_RANGE_THRESHOLD: f64 = TWO_POW_32 / 30.0;
const SMALL_RANGE_FACTOR: f64 = 2.5;

/// Which regime produced an estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Correction {
    /// The raw harmonic-mean estimate was used as is.
    None,
    /// Linear counting over empty registers replaced the raw estimate.
    LinearCounting,
    /// The 32-bit hash collision correction was applied.
    LargeRange,
}

/// An estimate together with how it was reached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HllEstimate {
    /// The uncorrected `alpha(m) * m^2 / sum(2^-register)`.
    pub raw: f64,
    /// The final estimate.
    pub estimate: f64,
    /// The correction that produced `estimate`.
    pub correction: Correction,
    /// Number of registers still at zero.
    pub zero_registers: usize,
}

/// Bias correction constant for `m` registers.
///
/// # Examples
///
/// ```
/// use hllsim::hll::alpha_m;
///
/// assert_eq!(alpha_m(16), 0.673);
/// assert!((alpha_m(256) - 0.7213 / (1.0 + 1.079 / 256.0)).abs() < 1e-12);
/// ```
pub fn alpha_m(m: usize) -> f64 {
    match m {
        16 => 0.673,
        32 => 0.697,
        64 => 0.709,
        _ => 0.7213 / (1.0 + 1.079 / m as f64),
    }
}

/// Estimate the number of distinct items behind `registers`.
///
/// `m` is the length of the slice. All-zero registers, and an empty slice,
/// estimate `0`.
///
/// The large-range correction is only defined while the raw estimate stays
/// below `2^32`. Register arrays that are saturated near `max_rho(p)` for small
/// `p` (for example sixteen registers all at `29`) push it past that bound and
/// the result is `NaN`. Hashed items practically never get there.
pub fn hll_estimate(registers: &[u8]) -> f64 {
    estimate_detail(registers).estimate
}

/// Like [`hll_estimate`], also reporting the raw estimate and the correction
/// that was applied.
pub fn estimate_detail(registers: &[u8]) -> HllEstimate {
    let m = registers.len();
    if m == 0 {
        return HllEstimate {
            raw: 0.0,
            estimate: 0.0,
            correction: Correction::None,
            zero_registers: 0,
        };
    }

    let mut indicator = 0.0;
    let mut zeros = 0usize;
    for &r in registers {
        indicator += inv_pow2(r);
        if r == 0 {
            zeros += 1;
        }
    }

    let m_f = m as f64;
    let raw = alpha_m(m) * m_f * m_f / indicator;
    let mut estimate = raw;
    let mut correction = Correction::None;

    if estimate <= SMALL_RANGE_FACTOR * m_f && zeros > 0 {
        estimate = m_f * (m_f / zeros as f64).ln();
        correction = Correction::LinearCounting;
    }

    if estimate > LARGE_RANGE_THRESHOLD {
        estimate = -TWO_POW_32 * (1.0 - estimate / TWO_POW_32).ln();
        correction = Correction::LargeRange;
    }

    HllEstimate {
        raw,
        estimate,
        correction,
        zero_registers: zeros,
    }
}

#[inline]
fn inv_pow2(value: u8) -> f64 {
    // register values never exceed 33, well inside f64's exponent range
    2f64.powi(-(value as i32))
}
