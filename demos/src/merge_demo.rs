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

//! Two overlapping crowds sketched separately, then merged.
//!
//! ```text
//! cargo run -p demos --bin merge_demo -- --left 5000 --right 5000 --overlap 2000
//! ```

use clap::Parser;
use demos::init_logging;
use hllsim::error::Error;
use hllsim::error::ErrorKind;
use hllsim::hash::DEFAULT_SEED;
use hllsim::hll::hll_estimate;
use hllsim::hll::hll_registers;
use hllsim::hll::merge_registers;
use hllsim::stats::relative_error;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Distinct items seen on the left.
    #[arg(long, default_value_t = 5_000)]
    left: u64,
    /// Distinct items seen on the right.
    #[arg(long, default_value_t = 5_000)]
    right: u64,
    /// Items seen on both sides.
    #[arg(long, default_value_t = 2_000)]
    overlap: u64,
    #[arg(short, long, default_value_t = 10)]
    precision: u8,
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    seed: u32,
}

fn main() -> Result<(), Error> {
    init_logging();
    let args = Args::parse();
    if args.overlap > args.left.min(args.right) {
        return Err(Error::new(
            ErrorKind::InvalidArgument,
            "overlap cannot exceed either crowd",
        )
        .with_context("overlap", args.overlap));
    }
    tracing::info!(?args, "merge demo");

    // left is 0..left, right ends `overlap` items before left does
    let right_start = args.left - args.overlap;
    let right_end = right_start + args.right;
    let truth = right_end as f64;

    let left = hll_registers(0..args.left, args.precision, args.seed)?;
    let right = hll_registers(right_start..right_end, args.precision, args.seed)?;
    let merged = merge_registers(&left, &right)?;

    for (label, registers, expected) in [
        ("left", &left, args.left as f64),
        ("right", &right, args.right as f64),
        ("union", &merged, truth),
    ] {
        let estimate = hll_estimate(registers);
        println!(
            "{label:<6} truth {expected:>10.0}  estimate {estimate:>12.1}  error {:>6.2}%",
            relative_error(estimate, expected) * 100.0
        );
    }

    let raised = left
        .iter()
        .zip(&merged)
        .filter(|(before, after)| after > before)
        .count();
    println!("{raised} of {} registers raised by the right crowd", merged.len());
    Ok(())
}
