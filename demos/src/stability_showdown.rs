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

//! Single-max versus HyperLogLog over many repeated trials.
//!
//! ```text
//! cargo run -p demos --bin stability_showdown -- --n 10000 --precision 10
//! ```

use clap::Parser;
use demos::init_logging;
use demos::summary_row;
use hllsim::error::Error;
use hllsim::hll::num_registers;
use hllsim::stats::Summary;
use hllsim::stats::power_of_two_histogram;
use hllsim::trials::DEFAULT_TRIAL_SEED;
use hllsim::trials::hll_trials;
use hllsim::trials::single_max_trials;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of distinct items (people in the crowd).
    #[arg(short, long, default_value_t = 10_000)]
    n: usize,
    /// HyperLogLog precision; the sketch keeps 2^precision registers.
    #[arg(short, long, default_value_t = 10)]
    precision: u8,
    /// Number of repeated experiments per estimator.
    #[arg(short, long, default_value_t = 100)]
    trials: u32,
    #[arg(short, long, default_value_t = DEFAULT_TRIAL_SEED)]
    seed: u32,
}

fn main() -> Result<(), Error> {
    init_logging();
    let args = Args::parse();
    tracing::info!(?args, "stability showdown");

    let truth = args.n as f64;
    let single = single_max_trials(args.n, args.trials, args.seed);
    let hll = hll_trials(args.n, args.precision, args.trials, args.seed)?;

    println!(
        "{} trials, n = {}, {} registers",
        args.trials,
        args.n,
        num_registers(args.precision)
    );
    println!("{}", summary_row("single-max", &Summary::of(&single, truth)));
    println!("{}", summary_row("hyperloglog", &Summary::of(&hll, truth)));

    println!();
    println!("single-max estimates by power of two:");
    for (exponent, count) in power_of_two_histogram(&single) {
        println!("  2^{exponent:<3} {count:>5} {}", "#".repeat(count));
    }
    Ok(())
}
