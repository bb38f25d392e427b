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

//! Analysis of hash throughput benchmark results.
//!
//! This crate reads the text output of the `shabench` benchmark tool for a
//! roster of CPU platforms, ranks the platforms against each other for every
//! hash algorithm and renders two aligned text tables: raw bitrate in Gb/s
//! and hashed bits per processor cycle.
//!
//! # Pipeline
//!
//! ```text
//! result files ─► parser ─► metrics ─► rank ─► layout ─► report
//! ```
//!
//! - [`parse_results`] reads one file into per-algorithm [`MetricPair`]s and
//!   fills the shared [`AlgorithmRegistry`].
//! - [`load_results`] runs the parser over a whole roster, dropping
//!   platforms whose file is missing, then ranks everything.
//! - [`TableLayout`] computes column widths and renders one table.
//! - [`render_report`] produces the final two-table report, and
//!   [`dump_analysis`] the structural dump used for debugging.
//!
//! # Examples
//!
//! ```no_run
//! use shabench_core::{load_results, render_report, ReportConfig};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), shabench_core::ShabenchError> {
//! let config = ReportConfig::default();
//! let analysis = load_results(&config.platforms, Path::new("results"))?;
//! print!("{}", render_report(&analysis, &config));
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! Malformed records, missing result files and platforms without data are
//! not errors: they are skipped and the report is produced with whatever is
//! available. See [`ShabenchError`] for the conditions that do fail.

mod algorithm;
mod analysis;
mod config;
mod error;
mod layout;
mod metrics;
mod parser;
mod platform;
mod rank;
mod report;

pub use algorithm::{normalize_algorithm, AlgorithmRegistry};
pub use analysis::{load_results, Analysis};
pub use config::{default_headers, Header, HeaderField, ReportConfig, DEFAULT_SEPARATOR};
pub use error::{Result, ShabenchError};
pub use layout::TableLayout;
pub use metrics::{
    bits_per_cycle, format_bits_per_cycle, format_bitrate, MetricKind, MetricPair, MetricValue,
    GIGA,
};
pub use parser::{
    extract_version, parse_line, parse_results, parse_results_reader, ParsedResults, Record,
};
pub use platform::{Platform, PlatformRanks, PlatformSpec, RankRange};
pub use rank::{annotate_ranks, rank_annotation, rank_platforms};
pub use report::{
    dump_analysis, render_report, write_report, DumpFormat, BITCYCLE_TITLE, BITRATE_TITLE,
};
