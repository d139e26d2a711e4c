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

//! Simulations of probabilistic cardinality estimators.
//!
//! The crate follows one metaphor throughout: every distinct item is a person
//! flipping a fair coin, and their *streak* is the number of tails before the
//! first heads (equivalently, the leading zeros of the item's hash). Long
//! streaks are rare, so the longest streak in a crowd says something about its
//! size.
//!
//! - [`common`]: seeded random sources.
//! - [`hash`]: MurmurHash3 x86_32 and leading-zero counting.
//! - [`coinflip`]: simulated crowds of coin flippers.
//! - [`single_max`]: the `2^max(streak)` estimator.
//! - [`hll`]: HyperLogLog registers, estimates and merges.
//! - [`trials`]: repeated experiments with either estimator.
//! - [`stats`]: summaries of estimate distributions.
//!
//! # Usage
//!
//! ```rust
//! use hllsim::hll::hll_count;
//! use hllsim::stats::relative_error;
//!
//! let estimate = hll_count(0..10_000, 10, 0).unwrap();
//! assert!(relative_error(estimate, 10_000.0) < 0.05);
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod coinflip;
pub mod common;
pub mod error;
pub mod hash;
pub mod hll;
pub mod single_max;
pub mod stats;
pub mod trials;
