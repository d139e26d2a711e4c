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

//! Hashing for the estimators.
//!
//! Items are hashed with MurmurHash3 x86_32 (from `mur3`) over their UTF-8
//! bytes. The values are bit-exact with the reference implementation (and with
//! `mmh3.hash` in Python), so registers built here can be compared with any
//! other implementation of the same pipeline.
//!
//! # Usage
//!
//! ```rust
//! use hllsim::hash::count_leading_zeros;
//! use hllsim::hash::murmur3_32;
//!
//! let h = murmur3_32("hello", 0);
//! assert_eq!(h, 0x248bfa47);
//! // "how many tails before the first heads?"
//! assert_eq!(count_leading_zeros(h, 32), 2);
//! ```

mod probe;

use std::fmt::Display;
use std::fmt::Write;

/// Streaming MurmurHash3 x86_32.
///
/// Bytes may be written in any number of pieces; `finish32` equals
/// [`murmurhash3_x86_32`] over their concatenation. Values fed through
/// [`std::hash::Hash`] carry their own framing (a `str` appends `0xff`), so use
/// [`std::hash::Hasher::write`] directly to reproduce the hash of a string key.
pub use mur3::Hasher32 as MurmurHash3X86_32;
/// One-shot MurmurHash3 x86_32 of a byte slice.
pub use mur3::murmurhash3_x86_32;
pub use self::probe::HashProbe;
pub use self::probe::avalanche;
pub use self::probe::bit_flips;

/// Default hash seed.
pub const DEFAULT_SEED: u32 = 0;

/// Width of a hash value in bits.
pub const HASH_BITS: u32 = u32::BITS;

/// MurmurHash3 x86_32 of the UTF-8 encoding of `key`.
pub fn murmur3_32(key: &str, seed: u32) -> u32 {
    murmurhash3_x86_32(key.as_bytes(), seed)
}

/// Hashes items through their `Display` form, reusing one key buffer.
///
/// `42` and `"42"` hash identically.
pub(crate) struct ItemHasher {
    key: String,
    seed: u32,
}

impl ItemHasher {
    pub(crate) fn new(seed: u32) -> Self {
        Self {
            key: String::new(),
            seed,
        }
    }

    pub(crate) fn hash<T: Display>(&mut self, item: T) -> u32 {
        self.key.clear();
        let _ = write!(self.key, "{item}");
        murmur3_32(&self.key, self.seed)
    }
}

/// Count the leading zeros of `x` viewed as a `bits`-wide field.
///
/// Bits of `x` above the window are ignored. The result is in `[0, bits]` and
/// a zero field yields `bits`. `bits` is clamped to 32, where the result is the
/// same as [`u32::leading_zeros`].
pub fn count_leading_zeros(x: u32, bits: u32) -> u32 {
    let bits = bits.min(HASH_BITS);
    let field = if bits == HASH_BITS {
        x
    } else {
        x & ((1u32 << bits) - 1)
    };
    if field == 0 {
        return bits;
    }
    field.leading_zeros() - (HASH_BITS - bits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_leading_zeros_full_width() {
        assert_eq!(count_leading_zeros(0, 32), 32);
        assert_eq!(count_leading_zeros(0x8000_0000, 32), 0);
        assert_eq!(count_leading_zeros(1, 32), 31);
        for x in [3u32, 0xff, 0x0001_0000, u32::MAX] {
            assert_eq!(count_leading_zeros(x, 32), x.leading_zeros());
        }
    }

    #[test]
    fn test_count_leading_zeros_window() {
        assert_eq!(count_leading_zeros(1, 4), 3);
        assert_eq!(count_leading_zeros(8, 4), 0);
        assert_eq!(count_leading_zeros(0, 4), 4);
        assert_eq!(count_leading_zeros(0, 24), 24);
        assert_eq!(count_leading_zeros(1, 24), 23);
    }

    #[test]
    fn test_count_leading_zeros_ignores_bits_above_window() {
        // 0b1_0001 in a 4-bit window is 0001
        assert_eq!(count_leading_zeros(0b1_0001, 4), 3);
        assert_eq!(count_leading_zeros(0xffff_ff00, 8), 8);
    }

    #[test]
    fn test_count_leading_zeros_degenerate_widths() {
        assert_eq!(count_leading_zeros(u32::MAX, 0), 0);
        assert_eq!(count_leading_zeros(0, 40), 32);
    }

    #[test]
    fn test_murmur3_32_anchors() {
        assert_eq!(murmur3_32("", 0), 0);
        assert_eq!(murmur3_32("hello", 0), 0x248bfa47);
    }

    #[test]
    fn test_reference_vectors() {
        assert_eq!(murmurhash3_x86_32(b"", 1), 0x514e28b7);
        assert_eq!(murmurhash3_x86_32(b"", 0xffffffff), 0x81f16f39);
        assert_eq!(murmurhash3_x86_32(&[0xff, 0xff, 0xff, 0xff], 0), 0x76293b50);
        assert_eq!(murmurhash3_x86_32(&[0x21, 0x43, 0x65, 0x87], 0), 0xf55b516b);
        assert_eq!(murmurhash3_x86_32(&[0x21, 0x43, 0x65], 0), 0x7e4a8634);
        assert_eq!(murmurhash3_x86_32(&[0x21, 0x43], 0), 0xa0f7b07a);
        assert_eq!(murmurhash3_x86_32(&[0x21], 0), 0x72661cf4);
        assert_eq!(murmurhash3_x86_32(&[0, 0, 0, 0], 0), 0x2362f9de);
        assert_eq!(murmur3_32("Hello, world!", 0x9747b28c), 0x24884cba);
    }

    #[test]
    fn test_streaming_matches_one_shot() {
        use std::hash::Hasher;

        let data: Vec<u8> = (0u8..=40).collect();
        for len in 0..data.len() {
            let expected = murmurhash3_x86_32(&data[..len], 17);
            for piece in 1..=5 {
                let mut hasher = MurmurHash3X86_32::with_seed(17);
                for chunk in data[..len].chunks(piece) {
                    hasher.write(chunk);
                }
                assert_eq!(hasher.finish32(), expected, "len {len}, piece {piece}");
                assert_eq!(hasher.finish(), expected as u64);
            }
        }
    }

    #[test]
    fn test_item_hasher_uses_display_form() {
        let mut hasher = ItemHasher::new(0);
        assert_eq!(hasher.hash("hello"), 0x248bfa47);
        assert_eq!(hasher.hash(42), murmur3_32("42", 0));
        assert_eq!(hasher.hash("42"), hasher.hash(42u64));
    }

    #[test]
    fn test_murmur3_32_uses_utf8() {
        let key = "π and ü";
        assert_eq!(murmur3_32(key, 3), murmurhash3_x86_32(key.as_bytes(), 3));
    }
}
