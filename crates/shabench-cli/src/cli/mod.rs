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

//! CLI command definitions and argument parsing.
//!
//! - [`Commands::Report`] renders the bitrate and bits-per-cycle tables.
//! - [`Commands::Inspect`] dumps the loaded and ranked data instead.
//!
//! Both commands share [`SourceArgs`], which selects the platform roster
//! and the directory holding the result files.

use crate::commands;
use crate::error::CliError;
use clap::{Args, Subcommand};

/// Where to find the roster and the result files.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Roster and header configuration (JSON, or YAML with .yaml/.yml);
    /// the built-in roster is used when omitted
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<String>,

    /// Directory containing the result files of the roster
    #[arg(short, long, value_name = "DIR", default_value = "results")]
    pub results_dir: String,
}

/// Top-level CLI commands.
///
/// # Examples
///
/// ```no_run
/// use clap::Parser;
/// use shabench_cli::cli::Commands;
///
/// #[derive(Parser)]
/// struct Cli {
///     #[command(subcommand)]
///     command: Commands,
/// }
/// ```
#[derive(Subcommand)]
pub enum Commands {
    /// Generate the result tables
    ///
    /// Loads every result file of the roster, ranks the platforms for each
    /// algorithm and prints the bitrate and bits-per-cycle tables.
    Report {
        #[command(flatten)]
        source: SourceArgs,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Column separator, overriding the configuration
        #[arg(short, long)]
        separator: Option<String>,
    },

    /// Print the analyzed data structure (debug)
    ///
    /// Dumps the enriched roster: resolved files, library versions, indices,
    /// column widths, rank ranges and every metric with its rank.
    Inspect {
        #[command(flatten)]
        source: SourceArgs,

        /// Output format (json, yaml)
        #[arg(short, long, default_value = "json")]
        format: String,
    },
}

impl Commands {
    /// Execute the command.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the configuration is invalid, an existing result
    /// file cannot be read or the output cannot be written.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            Commands::Report {
                source,
                output,
                separator,
            } => commands::report(&source, output.as_deref(), separator.as_deref()),
            Commands::Inspect { source, format } => commands::inspect(&source, &format),
        }
    }
}
