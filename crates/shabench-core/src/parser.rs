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

//! Parser for benchmark result files.
//!
//! A result file is line oriented. Each line is split on `:` into trimmed
//! fields and the first field selects the record type:
//!
//! ```text
//! openssl: OpenSSL 3.0.13 30 Jan 2024
//! algo: SHA256
//! digest-size: 32
//! hash-bitrate: 2154983740
//! ```
//!
//! Only `algo`, `openssl` and `hash-bitrate` records are used. Everything
//! else, including lines with fewer than two fields, is ignored.

use crate::algorithm::{normalize_algorithm, AlgorithmRegistry};
use crate::error::{Result, ShabenchError};
use crate::metrics::MetricPair;
use regex::Regex;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::OnceLock;
use tracing::{debug, trace};

/// A recognized record from one line of a result file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Record<'a> {
    /// `algo: <name>`, raw (not normalized) algorithm name.
    Algo(&'a str),
    /// `openssl: <banner>`, free text containing a version.
    Openssl(&'a str),
    /// `hash-bitrate: <bits per second>`.
    HashBitrate(u64),
}

/// Parse one line into a record.
///
/// Returns `None` for unknown tags, lines with fewer than two fields and
/// bitrates that are not unsigned integers.
///
/// # Examples
///
/// ```
/// use shabench_core::{parse_line, Record};
///
/// assert_eq!(parse_line("algo: SHA256"), Some(Record::Algo("SHA256")));
/// assert_eq!(parse_line("hash-bitrate: 42"), Some(Record::HashBitrate(42)));
/// assert_eq!(parse_line("digest-size: 32"), None);
/// assert_eq!(parse_line("algo"), None);
/// ```
pub fn parse_line(line: &str) -> Option<Record<'_>> {
    let mut fields = line.split(':').map(str::trim);
    let tag = fields.next()?;
    let value = fields.next()?;

    match tag {
        "algo" => Some(Record::Algo(value)),
        "openssl" => Some(Record::Openssl(value)),
        "hash-bitrate" => value.parse().ok().map(Record::HashBitrate),
        _ => None,
    }
}

fn version_regex() -> &'static Regex {
    static VERSION: OnceLock<Regex> = OnceLock::new();
    VERSION.get_or_init(|| Regex::new(r"[0-9.]+[A-Za-z]*").expect("valid version regex"))
}

/// Extract the library version from an `openssl` banner.
///
/// The leftmost run of digits and dots, with any letters directly following
/// it, is the version.
///
/// # Examples
///
/// ```
/// use shabench_core::extract_version;
///
/// assert_eq!(extract_version("OpenSSL 3.0.13 30 Jan 2024").as_deref(), Some("3.0.13"));
/// assert_eq!(extract_version("OpenSSL 1.1.1f  31 Mar 2020").as_deref(), Some("1.1.1f"));
/// assert_eq!(extract_version("unknown"), None);
/// ```
pub fn extract_version(banner: &str) -> Option<String> {
    version_regex()
        .find(banner)
        .map(|m| m.as_str().to_string())
}

/// Per-platform content of one result file.
#[derive(Debug, Clone, Default)]
pub struct ParsedResults {
    /// First library version found in the file.
    pub openssl: Option<String>,
    /// Metrics per normalized algorithm name.
    pub data: HashMap<String, MetricPair>,
    /// Normalized algorithm names in the order the file declared them.
    pub algorithms: Vec<String>,
}

/// Parse a result file for a platform running at `frequency_ghz`.
///
/// New algorithm names are appended to `registry`.
///
/// # Errors
///
/// Returns [`ShabenchError::Io`] if the file cannot be opened or read.
pub fn parse_results(
    path: &Path,
    frequency_ghz: f64,
    registry: &mut AlgorithmRegistry,
) -> Result<ParsedResults> {
    let file = File::open(path).map_err(|e| ShabenchError::io_error(path, e))?;
    parse_results_reader(BufReader::new(file), frequency_ghz, registry)
        .map_err(|e| ShabenchError::io_error(path, e))
}

/// Parse result records from any buffered reader.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected.
pub fn parse_results_reader<R: BufRead>(
    mut reader: R,
    frequency_ghz: f64,
    registry: &mut AlgorithmRegistry,
) -> std::io::Result<ParsedResults> {
    let mut results = ParsedResults::default();
    let mut current: Option<String> = None;
    let mut buf = Vec::new();
    let mut line_no = 0usize;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_no += 1;
        let line = String::from_utf8_lossy(&buf);

        match parse_line(&line) {
            Some(Record::Algo(raw)) => {
                let name = normalize_algorithm(raw);
                registry.register(&name);
                if results
                    .data
                    .insert(name.clone(), MetricPair::default())
                    .is_none()
                {
                    results.algorithms.push(name.clone());
                }
                current = Some(name);
            }
            Some(Record::Openssl(banner)) => {
                if results.openssl.is_none() {
                    results.openssl = extract_version(banner);
                }
            }
            Some(Record::HashBitrate(bitrate)) => match current.as_deref() {
                Some(name) => {
                    results
                        .data
                        .insert(name.to_string(), MetricPair::from_bitrate(bitrate, frequency_ghz));
                }
                None => debug!(line = line_no, "hash-bitrate before any algo record"),
            },
            None => trace!(line = line_no, "skipped line"),
        }
    }

    Ok(results)
}
