// Dweve shabench - Hash throughput benchmark analysis
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! shabench Command Line Interface

use clap::Parser;
use shabench_cli::cli::Commands;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// shabench - hash throughput result tables
///
/// Aggregates the output of the shabench hash benchmark over a roster of
/// CPU platforms and renders comparative tables with per-algorithm ranks.
///
/// # Examples
///
/// ```bash
/// # Tables for the built-in roster, results read from ./results
/// shabench report --output RESULTS.txt
///
/// # Custom roster and result directory
/// shabench report --config roster.yaml --results-dir /data/shabench
///
/// # Dump the analyzed data
/// shabench inspect --format yaml
///
/// # Debug logging
/// RUST_LOG=shabench=debug shabench report
/// ```
#[derive(Parser)]
#[command(name = "shabench")]
#[command(author, version, about = "shabench - hash throughput result tables", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("shabench=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
