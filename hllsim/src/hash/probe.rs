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

use std::fmt;

use crate::hash::HASH_BITS;
use crate::hash::count_leading_zeros;
use crate::hash::murmur3_32;

/// One key run through the hash, with the quantities the single-hash
/// estimator reads off it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashProbe {
    key: String,
    hash: u32,
    leading_zeros: u32,
}

impl HashProbe {
    /// Hash `key` with `seed` and record its leading-zero streak.
    ///
    /// # Examples
    ///
    /// ```
    /// use hllsim::hash::HashProbe;
    ///
    /// let probe = HashProbe::new("hello", 0);
    /// assert_eq!(probe.hex(), "248bfa47");
    /// assert_eq!(probe.leading_zeros(), 2);
    /// assert_eq!(probe.estimate(), 4.0);
    /// ```
    pub fn new(key: impl Into<String>, seed: u32) -> Self {
        let key = key.into();
        let hash = murmur3_32(&key, seed);
        Self {
            key,
            hash,
            leading_zeros: count_leading_zeros(hash, HASH_BITS),
        }
    }

    /// The key as it was hashed.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The 32-bit MurmurHash3 value of the key.
    pub fn hash(&self) -> u32 {
        self.hash
    }

    /// Leading zeros over the full 32-bit hash.
    pub fn leading_zeros(&self) -> u32 {
        self.leading_zeros
    }

    /// Single-hash estimate `2^L`: "seeing this streak suggests about this many
    /// distinct items".
    pub fn estimate(&self) -> f64 {
        2f64.powi(self.leading_zeros as i32)
    }

    /// The hash as 32 zero-padded binary digits.
    pub fn binary(&self) -> String {
        format!("{:032b}", self.hash)
    }

    /// The hash as 8 zero-padded lowercase hex digits.
    pub fn hex(&self) -> String {
        format!("{:08x}", self.hash)
    }
}

impl fmt::Display for HashProbe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<12} {} {} L={}",
            self.key,
            self.hex(),
            self.binary(),
            self.leading_zeros
        )
    }
}

/// Probe the keys `prefix1`, `prefix2`, ..., `prefix{count}`.
///
/// Nearly identical keys land on unrelated hashes; printing these rows side by
/// side shows the avalanche effect.
pub fn avalanche(prefix: &str, count: usize, seed: u32) -> Vec<HashProbe> {
    (1..=count)
        .map(|i| HashProbe::new(format!("{prefix}{i}"), seed))
        .collect()
}

/// Number of bit positions in which two hashes differ.
pub fn bit_flips(a: u32, b: u32) -> u32 {
    (a ^ b).count_ones()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_renderings() {
        let probe = HashProbe::new("hello", 0);
        assert_eq!(probe.key(), "hello");
        assert_eq!(probe.hash(), 0x248bfa47);
        assert_eq!(probe.binary(), "00100100100010111111101001000111");
        assert_eq!(probe.binary().len(), 32);
        assert!(probe.to_string().contains("248bfa47"));
    }

    #[test]
    fn test_empty_key() {
        let probe = HashProbe::new("", 0);
        assert_eq!(probe.hash(), 0);
        assert_eq!(probe.leading_zeros(), 32);
        assert_eq!(probe.hex(), "00000000");
    }

    #[test]
    fn test_avalanche_rows() {
        let rows = avalanche("user", 5, 0);
        let keys: Vec<&str> = rows.iter().map(|r| r.key()).collect();
        assert_eq!(keys, ["user1", "user2", "user3", "user4", "user5"]);
        for pair in rows.windows(2) {
            // neighbouring keys should disagree on a good share of the 32 bits
            assert!(bit_flips(pair[0].hash(), pair[1].hash()) >= 4);
        }
    }

    #[test]
    fn test_bit_flips() {
        assert_eq!(bit_flips(0, 0), 0);
        assert_eq!(bit_flips(0, u32::MAX), 32);
        assert_eq!(bit_flips(0b1010, 0b0110), 2);
    }
}
