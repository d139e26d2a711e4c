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

use std::fmt::Display;

use crate::error::Error;
use crate::error::ErrorKind;
use crate::hash::HASH_BITS;
use crate::hash::ItemHasher;
use crate::hash::count_leading_zeros;
use crate::hll::check_precision;
use crate::hll::num_registers;

/// Build the `2^p` registers for `items` hashed with `seed`.
///
/// Items are hashed through their `Display` form, so `42` and `"42"` are the
/// same item. The result depends only on the set of distinct items: order and
/// repetition do not matter.
///
/// # Errors
///
/// Returns [`ErrorKind::ConfigInvalid`](crate::error::ErrorKind::ConfigInvalid)
/// if `p` is outside `[MIN_PRECISION, MAX_PRECISION]`.
///
/// # Examples
///
/// ```
/// use hllsim::hll::hll_registers;
///
/// let registers = hll_registers([1, 2, 3, 4, 5], 4, 0).unwrap();
/// assert_eq!(registers.len(), 16);
/// assert_eq!(registers, hll_registers([5, 4, 3, 2, 1, 1, 1], 4, 0).unwrap());
/// ```
pub fn hll_registers<I, T>(items: I, p: u8, seed: u32) -> Result<Vec<u8>, Error>
where
    I: IntoIterator<Item = T>,
    T: Display,
{
    check_precision(p)?;
    let mut registers = vec![0u8; num_registers(p)];
    let mut hasher = ItemHasher::new(seed);
    for item in items {
        raise(&mut registers, hasher.hash(item), p);
    }
    Ok(registers)
}

/// Route one hash into `registers`.
///
/// The low `p` bits select the register; the leading zeros of the remaining
/// `32 - p` bits, plus one, is the candidate `ρ`. Registers only ever grow.
///
/// # Errors
///
/// Returns [`ErrorKind::ConfigInvalid`] if `p` is out of range, and
/// [`ErrorKind::InvalidArgument`] if `registers` does not hold exactly `2^p`
/// slots. `registers` is left untouched on error.
///
/// # Examples
///
/// ```
/// use hllsim::hash::murmur3_32;
/// use hllsim::hll::absorb;
///
/// let mut registers = vec![0u8; 16];
/// absorb(&mut registers, murmur3_32("hello", 0), 4).unwrap();
/// assert_eq!(registers.iter().filter(|&&r| r > 0).count(), 1);
/// assert!(absorb(&mut registers, 0, 8).is_err());
/// ```
pub fn absorb(registers: &mut [u8], hash: u32, p: u8) -> Result<(), Error> {
    check_precision(p)?;
    if registers.len() != num_registers(p) {
        return Err(Error::new(
            ErrorKind::InvalidArgument,
            "register array does not match the precision",
        )
        .with_context("registers", registers.len())
        .with_context("p", p));
    }
    raise(registers, hash, p);
    Ok(())
}

/// Split a hash into its register index and `ρ`. `p` must be a checked
/// precision.
pub(crate) fn route(hash: u32, p: u8) -> (usize, u8) {
    let p = p as u32;
    let index = (hash & ((1u32 << p) - 1)) as usize;
    let rho = (count_leading_zeros(hash >> p, HASH_BITS - p) + 1) as u8;
    (index, rho)
}

fn raise(registers: &mut [u8], hash: u32, p: u8) {
    let (index, rho) = route(hash, p);
    let slot = &mut registers[index];
    if rho > *slot {
        *slot = rho;
    }
}

/// Each non-empty register's own guess `2^(ρ-1)`, i.e. `2^L` for its record
/// streak. Empty registers are skipped.
///
/// Useful for comparing the arithmetic mean of the guesses (dragged around by
/// outliers) with their harmonic mean.
pub fn local_estimates(registers: &[u8]) -> Vec<f64> {
    registers
        .iter()
        .filter(|&&rho| rho > 0)
        .map(|&rho| 2f64.powi(rho as i32 - 1))
        .collect()
}
