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

//! A register-by-register view of how a crowd is split.

use crate::error::Error;
use crate::hash::HASH_BITS;
use crate::hash::ItemHasher;
use crate::hash::count_leading_zeros;
use crate::hll::check_precision;
use crate::hll::hll_estimate;
use crate::hll::num_registers;
use crate::hll::registers::route;
use crate::single_max::single_max_estimate;

/// The sub-crowd routed to one register.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterCrowd {
    /// Register position, the low `p` bits shared by every item here.
    pub index: usize,
    /// Items routed here, in insertion order.
    pub items: Vec<u64>,
    /// Streak `L` of each item over the `32 - p` value bits.
    pub streaks: Vec<u32>,
    /// Longest streak in this sub-crowd, `0` when empty.
    pub max_streak: u32,
    /// Position in `items` of the first item to reach `max_streak`.
    pub record_holder: Option<usize>,
}

impl RegisterCrowd {
    fn new(index: usize) -> Self {
        Self {
            index,
            items: Vec::new(),
            streaks: Vec::new(),
            max_streak: 0,
            record_holder: None,
        }
    }

    /// Register value `ρ = L + 1` for this sub-crowd, `0` when nobody joined.
    pub fn rho(&self) -> u8 {
        if self.items.is_empty() {
            0
        } else {
            (self.max_streak + 1) as u8
        }
    }

    /// This register's own guess `2^L`.
    pub fn local_estimate(&self) -> f64 {
        2f64.powi(self.max_streak as i32)
    }
}

/// The crowd `0..n` split into `2^p` registers.
#[derive(Debug, Clone, PartialEq)]
pub struct CrowdPartition {
    /// One sub-crowd per register, in register order.
    pub registers: Vec<RegisterCrowd>,
    /// HyperLogLog estimate over the register values.
    pub hll_estimate: f64,
    /// Single-max estimate over the full 32-bit hash of every item, which does
    /// not depend on `p`.
    pub single_max_estimate: f64,
}

impl CrowdPartition {
    /// Register values as [`hll_registers`](crate::hll::hll_registers) would
    /// produce them for the same items.
    pub fn rhos(&self) -> Vec<u8> {
        self.registers.iter().map(RegisterCrowd::rho).collect()
    }
}

/// Hash the items `0..n` with `seed` and record which register each one joins.
///
/// # Errors
///
/// Returns [`ErrorKind::ConfigInvalid`](crate::error::ErrorKind::ConfigInvalid)
/// if `p` is out of range.
pub fn partition_crowd(n: u64, p: u8, seed: u32) -> Result<CrowdPartition, Error> {
    check_precision(p)?;
    let mut registers: Vec<RegisterCrowd> =
        (0..num_registers(p)).map(RegisterCrowd::new).collect();
    let mut full_streaks = Vec::with_capacity(n as usize);
    let mut hasher = ItemHasher::new(seed);

    for item in 0..n {
        let hash = hasher.hash(item);
        full_streaks.push(count_leading_zeros(hash, HASH_BITS));

        let (index, rho) = route(hash, p);
        let register = &mut registers[index];
        let streak = rho as u32 - 1;
        if register.record_holder.is_none() || streak > register.max_streak {
            register.max_streak = streak;
            register.record_holder = Some(register.items.len());
        }
        register.items.push(item);
        register.streaks.push(streak);
    }

    let rhos: Vec<u8> = registers.iter().map(RegisterCrowd::rho).collect();
    Ok(CrowdPartition {
        hll_estimate: hll_estimate(&rhos),
        single_max_estimate: single_max_estimate(&full_streaks),
        registers,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hll::hll_registers;
    use crate::single_max::hashed_streaks;

    #[test]
    fn test_rhos_match_registers() {
        let partition = partition_crowd(3_000, 6, 11).unwrap();
        assert_eq!(partition.rhos(), hll_registers(0..3_000u64, 6, 11).unwrap());
        assert_eq!(
            partition.hll_estimate,
            hll_estimate(&hll_registers(0..3_000u64, 6, 11).unwrap())
        );
    }

    #[test]
    fn test_every_item_lands_once() {
        let partition = partition_crowd(1_000, 4, 0).unwrap();
        assert_eq!(partition.registers.len(), 16);
        let total: usize = partition.registers.iter().map(|r| r.items.len()).sum();
        assert_eq!(total, 1_000);
        for register in &partition.registers {
            assert_eq!(register.items.len(), register.streaks.len());
            if let Some(holder) = register.record_holder {
                assert_eq!(register.streaks[holder], register.max_streak);
                assert!(register.streaks.iter().all(|&s| s <= register.max_streak));
            }
        }
    }

    #[test]
    fn test_single_max_ignores_precision() {
        let expected = single_max_estimate(&hashed_streaks(0..1_000u64, 42));
        for p in [2u8, 4, 6, 8] {
            let partition = partition_crowd(1_000, p, 42).unwrap();
            assert_eq!(partition.single_max_estimate, expected);
        }
    }

    #[test]
    fn test_empty_crowd() {
        let partition = partition_crowd(0, 4, 0).unwrap();
        assert_eq!(partition.hll_estimate, 0.0);
        assert_eq!(partition.single_max_estimate, 0.0);
        assert!(partition.registers.iter().all(|r| r.record_holder.is_none()));
        assert!(partition.rhos().iter().all(|&rho| rho == 0));
    }

    #[test]
    fn test_rejects_precision() {
        assert!(partition_crowd(10, 0, 0).is_err());
    }
}
