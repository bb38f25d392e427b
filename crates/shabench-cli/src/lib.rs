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

//! shabench CLI library for command-line parsing and execution.
//!
//! # Commands
//!
//! - **report**: Render the bitrate and bits-per-cycle tables for a roster
//!   of benchmarked platforms
//! - **inspect**: Dump the analyzed data (JSON or YAML) for debugging
//!
//! # Examples
//!
//! ```no_run
//! use shabench_cli::cli::SourceArgs;
//! use shabench_cli::commands::{inspect, report};
//!
//! # fn main() -> Result<(), shabench_cli::error::CliError> {
//! let source = SourceArgs {
//!     config: Some("roster.yaml".to_string()),
//!     results_dir: "results".to_string(),
//! };
//!
//! // Write the tables to RESULTS.txt
//! report(&source, Some("RESULTS.txt"), None)?;
//!
//! // Print the analyzed structure
//! inspect(&source, "json")?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! All commands return `Result<(), CliError>`. Missing result files and
//! malformed lines are not errors; they are skipped during loading.

pub mod cli;
pub mod commands;
pub mod error;
