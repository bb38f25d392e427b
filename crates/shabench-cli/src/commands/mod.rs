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

//! CLI command implementations

mod inspect;
mod report;

pub use inspect::inspect;
pub use report::report;

use crate::cli::SourceArgs;
use crate::error::CliError;
use shabench_core::{load_results, Analysis, ReportConfig};
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tracing::debug;

/// Load the configuration selected by `source`, or the built-in one.
///
/// # Errors
///
/// Returns `Err` if the configuration file cannot be read, parsed or
/// validated.
pub fn load_config(source: &SourceArgs) -> Result<ReportConfig, CliError> {
    match source.config.as_deref() {
        Some(path) => {
            debug!(path, "loading configuration");
            Ok(ReportConfig::from_path(Path::new(path))?)
        }
        None => Ok(ReportConfig::default()),
    }
}

/// Load and rank the result files of the configured roster.
///
/// # Errors
///
/// Returns `Err` if an existing result file cannot be read.
pub fn load_analysis(source: &SourceArgs, config: &ReportConfig) -> Result<Analysis, CliError> {
    Ok(load_results(&config.platforms, Path::new(&source.results_dir))?)
}

/// Write content to a file or stdout.
///
/// # Examples
///
/// ```no_run
/// use shabench_cli::commands::write_output;
///
/// # fn main() -> Result<(), shabench_cli::error::CliError> {
/// // Write to stdout
/// write_output("HASH BITRATE (Gb/s)\n", None)?;
///
/// // Write to file
/// write_output("HASH BITRATE (Gb/s)\n", Some("RESULTS.txt"))?;
/// # Ok(())
/// # }
/// ```
pub fn write_output(content: &str, path: Option<&str>) -> Result<(), CliError> {
    match path {
        Some(p) => fs::write(p, content).map_err(|e| CliError::io_error(p, e)),
        None => io::stdout()
            .write_all(content.as_bytes())
            .map_err(|e| CliError::io_error("<stdout>", e)),
    }
}
