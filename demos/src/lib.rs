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

//! Shared plumbing for the demo binaries.

use hllsim::stats::Summary;
use tracing_subscriber::EnvFilter;

/// Install a formatting subscriber filtered by `RUST_LOG`, `info` by default.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// One aligned table row for a summary of estimates.
pub fn summary_row(label: &str, summary: &Summary) -> String {
    format!(
        "{label:<12} mean {:>12.1}  median {:>12.1}  sd {:>12.1}  range [{:.0}, {:.0}]  \
         stderr {:>6.2}%  within 10% {:>5.1}%",
        summary.mean,
        summary.median,
        summary.std_dev,
        summary.min,
        summary.max,
        summary.standard_error * 100.0,
        summary.within_ten_percent * 100.0,
    )
}
