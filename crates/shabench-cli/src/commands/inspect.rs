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

//! Inspect command - structural dump of the analyzed results

use super::{load_analysis, load_config, write_output};
use crate::cli::SourceArgs;
use crate::error::CliError;
use shabench_core::{dump_analysis, DumpFormat};

fn parse_format(format: &str) -> Result<DumpFormat, CliError> {
    match format {
        "json" => Ok(DumpFormat::Json),
        "yaml" | "yml" => Ok(DumpFormat::Yaml),
        other => Err(CliError::invalid_input(format!(
            "unknown dump format '{}' (expected json or yaml)",
            other
        ))),
    }
}

/// Print the loaded and ranked data instead of the report.
///
/// # Errors
///
/// Returns `Err` if the format is unknown, the configuration is invalid or
/// an existing result file cannot be read.
pub fn inspect(source: &SourceArgs, format: &str) -> Result<(), CliError> {
    let format = parse_format(format)?;
    let config = load_config(source)?;
    let analysis = load_analysis(source, &config)?;

    let mut dump = dump_analysis(&analysis, format)?;
    if !dump.ends_with('\n') {
        dump.push('\n');
    }
    write_output(&dump, None)
}
