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

use std::collections::HashSet;
use std::hash::Hasher;

use googletest::assert_that;
use googletest::prelude::eq;
use googletest::prelude::ge;
use googletest::prelude::le;
use hllsim::hash::DEFAULT_SEED;
use hllsim::hash::HashProbe;
use hllsim::hash::MurmurHash3X86_32;
use hllsim::hash::avalanche;
use hllsim::hash::bit_flips;
use hllsim::hash::count_leading_zeros;
use hllsim::hash::murmur3_32;
use hllsim::hash::murmurhash3_x86_32;

#[test]
fn test_known_values() {
    assert_that!(murmur3_32("", DEFAULT_SEED), eq(0));
    assert_that!(murmur3_32("hello", DEFAULT_SEED), eq(0x248bfa47));
    assert_that!(murmur3_32("Hello, world!", 0x9747b28c), eq(0x24884cba));
}

#[test]
fn test_streamed_key_matches_one_shot() {
    for seed in [0u32, 1, 42, 0x9747b28c, u32::MAX] {
        for i in 0..200 {
            let key = format!("item-{i}");
            let mut hasher = MurmurHash3X86_32::with_seed(seed);
            let (head, tail) = key.split_at(key.len() / 2);
            hasher.write(head.as_bytes());
            hasher.write(tail.as_bytes());
            assert_that!(hasher.finish32(), eq(murmur3_32(&key, seed)));
        }
    }
}

#[test]
fn test_multibyte_keys_hash_their_utf8_bytes() {
    for key in ["café", "日本語", "🦀 crab", "ß"] {
        assert_that!(
            murmur3_32(key, 7),
            eq(murmurhash3_x86_32(key.as_bytes(), 7))
        );
    }
    assert_ne!(murmur3_32("café", 7), murmur3_32("cafe", 7));
}

#[test]
fn test_distinct_keys_rarely_collide() {
    let hashes: HashSet<u32> = (0..1000)
        .map(|i| murmur3_32(&i.to_string(), DEFAULT_SEED))
        .collect();
    assert_that!(hashes.len(), eq(1000));
}

#[test]
fn test_seed_changes_hash() {
    assert_ne!(murmur3_32("hello", 0), murmur3_32("hello", 1));
}

#[test]
fn test_leading_zeros_over_narrow_window() {
    assert_that!(count_leading_zeros(0, 24), eq(24));
    assert_that!(count_leading_zeros(1, 24), eq(23));
    assert_that!(count_leading_zeros(0x80_0000, 24), eq(0));
    assert_that!(count_leading_zeros(0x8000_0000, 32), eq(0));
}

#[test]
fn test_streak_frequencies_halve() {
    // about half of all hashes start with a 1-bit, a quarter with 01, ...
    let n = 20_000;
    let mut counts = [0usize; 4];
    for i in 0..n {
        let l = count_leading_zeros(murmur3_32(&i.to_string(), 3), 32) as usize;
        if l < counts.len() {
            counts[l] += 1;
        }
    }
    for (l, &count) in counts.iter().enumerate() {
        let expected = n as f64 / 2f64.powi(l as i32 + 1);
        assert_that!(count as f64, ge(expected * 0.9));
        assert_that!(count as f64, le(expected * 1.1));
    }
}

#[test]
fn test_avalanche_neighbours_differ_widely() {
    let probes = avalanche("user", 64, DEFAULT_SEED);
    assert_that!(probes.len(), eq(64));
    assert_that!(probes[0].key(), eq("user1"));

    let flips: Vec<u32> = probes
        .windows(2)
        .map(|w| bit_flips(w[0].hash(), w[1].hash()))
        .collect();
    let mean = flips.iter().sum::<u32>() as f64 / flips.len() as f64;
    assert_that!(mean, ge(12.0));
    assert_that!(mean, le(20.0));
}

#[test]
fn test_probe_matches_hash() {
    let probe = HashProbe::new("hello", 0);
    assert_that!(probe.hash(), eq(0x248bfa47));
    assert_that!(probe.leading_zeros(), eq(2));
    assert_that!(probe.estimate(), eq(4.0));
    assert_eq!(probe.hex(), "248bfa47");
}
