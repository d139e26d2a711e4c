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

use googletest::assert_that;
use googletest::prelude::eq;
use googletest::prelude::ge;
use googletest::prelude::le;
use googletest::prelude::near;
use hllsim::coinflip::flip_until_heads;
use hllsim::coinflip::simulate_crowd;
use hllsim::common::RandomSource;
use hllsim::common::create_rng;
use hllsim::single_max::hashed_streaks;
use hllsim::single_max::single_max_estimate;
use hllsim::stats::mean;

#[test]
fn test_known_stream() {
    let mut rng = create_rng(42);
    let draws: Vec<f64> = (0..3).map(|_| rng.next_f64()).collect();
    let mut again = create_rng(42);
    for d in draws {
        assert_that!(again.next_f64(), eq(d));
        assert_that!(d, ge(0.0));
        assert_that!(d, le(1.0));
    }
}

#[test]
fn test_streaks_are_geometric() {
    // P(L = k) = 2^-(k+1), so E[L] = 1
    let crowd = simulate_crowd(50_000, &mut create_rng(1));
    let streaks: Vec<f64> = crowd.iter().map(|&l| l as f64).collect();
    assert_that!(mean(&streaks), near(1.0, 0.05));

    let zeros = crowd.iter().filter(|&&l| l == 0).count() as f64 / crowd.len() as f64;
    assert_that!(zeros, near(0.5, 0.02));
}

#[test]
fn test_flip_until_heads_consumes_stream() {
    let mut rng = create_rng(3);
    let mut copy = rng;
    let streak = flip_until_heads(&mut rng);
    for _ in 0..streak {
        assert!(!copy.next_bool());
    }
    assert!(copy.next_bool());
    assert_eq!(rng, copy);
}

#[test]
fn test_single_max_uses_streak_not_rho() {
    assert_that!(single_max_estimate(&[0, 3, 8, 5]), eq(256.0));
}

#[test]
fn test_single_max_order_of_magnitude() {
    // one estimate is noisy, but it should land within a few powers of two
    let n = 4_096;
    let estimate = single_max_estimate(&hashed_streaks(0..n, 42));
    assert_that!(estimate, ge(n as f64 / 64.0));
    assert_that!(estimate, le(n as f64 * 64.0));
}
