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

//! Report command - bitrate and bits-per-cycle tables

use super::{load_analysis, load_config};
use crate::cli::SourceArgs;
use crate::error::CliError;
use shabench_core::write_report;
use std::fs::File;
use std::io::{self, BufWriter};
use tracing::info;

/// Generate the two-table report for the configured roster.
///
/// # Arguments
///
/// * `source` - Roster configuration and result directory
/// * `output` - Output file path; stdout when `None`
/// * `separator` - Column separator overriding the configuration
///
/// # Errors
///
/// Returns `Err` if the configuration is invalid, an existing result file
/// cannot be read or the report cannot be written.
///
/// # Examples
///
/// ```no_run
/// use shabench_cli::cli::SourceArgs;
/// use shabench_cli::commands::report;
///
/// # fn main() -> Result<(), shabench_cli::error::CliError> {
/// let source = SourceArgs {
///     config: None,
///     results_dir: "results".to_string(),
/// };
/// report(&source, Some("RESULTS.txt"), None)?;
/// # Ok(())
/// # }
/// ```
pub fn report(
    source: &SourceArgs,
    output: Option<&str>,
    separator: Option<&str>,
) -> Result<(), CliError> {
    let mut config = load_config(source)?;
    if let Some(separator) = separator {
        config.separator = separator.to_string();
    }

    let analysis = load_analysis(source, &config)?;
    if analysis.platforms.is_empty() {
        info!(results_dir = %source.results_dir, "no result files found");
    }

    match output {
        Some(path) => {
            let file = File::create(path).map_err(|e| CliError::io_error(path, e))?;
            write_report(&analysis, &config, BufWriter::new(file))
                .map_err(|e| CliError::io_error(path, e))
        }
        None => write_report(&analysis, &config, io::stdout().lock())
            .map_err(|e| CliError::io_error("<stdout>", e)),
    }
}
