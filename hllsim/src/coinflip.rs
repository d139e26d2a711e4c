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

//! The coin-flipping crowd.
//!
//! A "person" flips a fair coin until it lands heads; their streak is the number
//! of tails before that first heads. This is the same quantity as the leading
//! zeros of a uniformly random bit string, so a crowd of flippers behaves like a
//! set of distinct hashed items.

use crate::common::RandomSource;

/// Flip until heads and return the number of tails seen.
///
/// A draw below `0.5` is tails; the first draw at or above `0.5` is heads.
///
/// # Examples
///
/// ```
/// use hllsim::coinflip::flip_until_heads;
/// use hllsim::common::create_rng;
///
/// let mut rng = create_rng(1);
/// let streak = flip_until_heads(&mut rng);
/// assert!(streak < 64);
/// ```
pub fn flip_until_heads<R: RandomSource + ?Sized>(rng: &mut R) -> u32 {
    let mut tails = 0;
    while rng.next_f64() < 0.5 {
        tails += 1;
    }
    tails
}

/// Streaks of a crowd of `n` people, in the order they flipped.
pub fn simulate_crowd<R: RandomSource + ?Sized>(n: usize, rng: &mut R) -> Vec<u32> {
    (0..n).map(|_| flip_until_heads(rng)).collect()
}
