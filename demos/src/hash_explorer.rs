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

//! Print the hashes of consecutive keys to show how unrelated they look.
//!
//! ```text
//! cargo run -p demos --bin hash_explorer -- --prefix user --count 16
//! ```

use clap::Parser;
use demos::init_logging;
use hllsim::hash::DEFAULT_SEED;
use hllsim::hash::HashProbe;
use hllsim::hash::avalanche;
use hllsim::hash::bit_flips;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Keys are `prefix1`, `prefix2`, ...
    #[arg(short, long, default_value = "user")]
    prefix: String,
    #[arg(short, long, default_value_t = 16)]
    count: usize,
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    seed: u32,
    /// Hash just this key instead of a numbered sequence.
    #[arg(short, long)]
    key: Option<String>,
}

fn main() {
    init_logging();
    let args = Args::parse();
    tracing::info!(?args, "hash explorer");

    if let Some(key) = args.key {
        println!("{}", HashProbe::new(key, args.seed));
        return;
    }

    let probes = avalanche(&args.prefix, args.count, args.seed);
    let mut previous: Option<u32> = None;
    for probe in &probes {
        match previous {
            Some(prev) => println!("{probe}  flips {:>2}", bit_flips(prev, probe.hash())),
            None => println!("{probe}"),
        }
        previous = Some(probe.hash());
    }
}
