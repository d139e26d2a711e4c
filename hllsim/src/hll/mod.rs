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

//! HyperLogLog over plain register arrays.
//!
//! # Overview
//!
//! Instead of one flipper's record, HyperLogLog keeps `m = 2^p` records. The low
//! `p` bits of an item's 32-bit hash pick its register ("which sub-crowd does
//! this person join?") and the remaining `32 - p` bits supply its streak. Each
//! register stores `ρ = L + 1`, the 1-indexed position of the first 1-bit, and
//! keeps the largest `ρ` routed to it. A register of `0` has seen nothing.
//!
//! The estimate combines the registers with a harmonic mean, which a single
//! lucky register cannot drag upwards, and switches to linear counting while
//! many registers are still empty. Expected standard error is about
//! `1.04 / sqrt(m)`.
//!
//! Registers are plain `Vec<u8>` values: building, estimating and merging are
//! free functions over them, so two sketches never share state.
//!
//! # Usage
//!
//! ```rust
//! use hllsim::hll::hll_count;
//! use hllsim::hll::hll_estimate;
//! use hllsim::hll::hll_registers;
//! use hllsim::hll::merge_registers;
//!
//! let monday = hll_registers(0..5_000, 10, 0).unwrap();
//! let tuesday = hll_registers(3_000..8_000, 10, 0).unwrap();
//! let both = merge_registers(&monday, &tuesday).unwrap();
//! let union = hll_estimate(&both);
//! assert!((union - 8_000.0).abs() < 800.0);
//!
//! let direct = hll_count(0..8_000, 10, 0).unwrap();
//! assert!((direct - 8_000.0).abs() < 800.0);
//! ```

mod estimator;
mod merge;
mod partition;
mod registers;

use std::fmt::Display;

pub use self::estimator::Correction;
pub use self::estimator::HllEstimate;
pub use self::estimator::alpha_m;
pub use self::estimator::estimate_detail;
pub use self::estimator::hll_estimate;
pub use self::merge::merge_all;
pub use self::merge::merge_into;
pub use self::merge::merge_registers;
pub use self::partition::CrowdPartition;
pub use self::partition::RegisterCrowd;
pub use self::partition::partition_crowd;
pub use self::registers::absorb;
pub use self::registers::hll_registers;
pub use self::registers::local_estimates;

use crate::error::Error;
use crate::error::ErrorKind;
use crate::hash::HASH_BITS;

/// Minimum number of register index bits.
pub const MIN_PRECISION: u8 = 2;
/// Maximum number of register index bits.
pub const MAX_PRECISION: u8 = 18;

/// Largest register value for precision `p`: every value bit zero gives
/// `L = 32 - p`, so `ρ = 33 - p`.
pub const fn max_rho(p: u8) -> u8 {
    (HASH_BITS as u8 + 1) - p
}

/// Number of registers for precision `p`.
pub const fn num_registers(p: u8) -> usize {
    1 << p
}

/// Check that `p` is a supported precision.
pub fn check_precision(p: u8) -> Result<(), Error> {
    if !(MIN_PRECISION..=MAX_PRECISION).contains(&p) {
        return Err(Error::new(
            ErrorKind::ConfigInvalid,
            format!("precision must be in [{MIN_PRECISION}, {MAX_PRECISION}]"),
        )
        .with_context("p", p));
    }
    Ok(())
}

/// Recover the precision a register array was built with from its length.
pub fn precision_of(registers: &[u8]) -> Result<u8, Error> {
    let m = registers.len();
    if !m.is_power_of_two() {
        return Err(Error::new(
            ErrorKind::InvalidArgument,
            "register count must be a power of two",
        )
        .with_context("registers", m));
    }
    let p = m.trailing_zeros() as u8;
    check_precision(p).map_err(|_| {
        Error::new(
            ErrorKind::InvalidArgument,
            "register count is outside the supported precision range",
        )
        .with_context("registers", m)
    })?;
    Ok(p)
}

/// Hash `items` into `2^p` registers and estimate their distinct count.
pub fn hll_count<I, T>(items: I, p: u8, seed: u32) -> Result<f64, Error>
where
    I: IntoIterator<Item = T>,
    T: Display,
{
    let registers = hll_registers(items, p, seed)?;
    Ok(hll_estimate(&registers))
}
