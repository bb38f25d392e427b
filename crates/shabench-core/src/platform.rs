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

//! Benchmarked platforms: roster entries and their enriched form.

use crate::metrics::{MetricKind, MetricPair};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// One roster entry, as written in the configuration.
///
/// `frequency` (GHz) and `file` are required. `file` may be relative to the
/// results directory given at load time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformSpec {
    /// CPU display name.
    #[serde(default)]
    pub cpu: String,
    /// Core or micro-architecture label.
    #[serde(default)]
    pub core: String,
    /// Nominal clock frequency in GHz.
    pub frequency: f64,
    /// Result file produced by the benchmark tool on this platform.
    pub file: PathBuf,
    /// Library version to display, overriding the one found in the file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub openssl: Option<String>,
}

impl PlatformSpec {
    /// Create a roster entry with a CPU name, core label, frequency and file.
    pub fn new(
        cpu: impl Into<String>,
        core: impl Into<String>,
        frequency: f64,
        file: impl Into<PathBuf>,
    ) -> Self {
        Self {
            cpu: cpu.into(),
            core: core.into(),
            frequency,
            file: file.into(),
            openssl: None,
        }
    }
}

/// Lowest and highest rank a platform obtained for one metric.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RankRange {
    pub min: usize,
    pub max: usize,
}

impl RankRange {
    /// Range covering a set of ranks, `None` when the set is empty.
    pub fn from_ranks(ranks: impl IntoIterator<Item = usize>) -> Option<Self> {
        ranks.into_iter().fold(None, |acc, rank| {
            Some(match acc {
                None => RankRange {
                    min: rank,
                    max: rank,
                },
                Some(range) => RankRange {
                    min: range.min.min(rank),
                    max: range.max.max(rank),
                },
            })
        })
    }

    /// True when the range holds both single-digit and multi-digit ranks.
    pub fn straddles_ten(&self) -> bool {
        self.min < 10 && self.max >= 10
    }
}

/// Rank ranges of a platform, one per metric.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PlatformRanks {
    pub bitrate: Option<RankRange>,
    pub bitcycle: Option<RankRange>,
}

impl PlatformRanks {
    /// Range for the given metric.
    pub fn get(&self, kind: MetricKind) -> Option<RankRange> {
        match kind {
            MetricKind::Bitrate => self.bitrate,
            MetricKind::Bitcycle => self.bitcycle,
        }
    }

    /// Set the range for the given metric.
    pub fn set(&mut self, kind: MetricKind, range: Option<RankRange>) {
        match kind {
            MetricKind::Bitrate => self.bitrate = range,
            MetricKind::Bitcycle => self.bitcycle = range,
        }
    }
}

/// A loaded platform: its roster entry plus everything derived from its
/// result file and from ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Platform {
    /// CPU display name.
    pub cpu: String,
    /// Core or micro-architecture label.
    pub core: String,
    /// Nominal clock frequency in GHz.
    pub frequency: f64,
    /// Resolved result file path.
    pub file: PathBuf,
    /// Frequency display string, e.g. `3.20 GHz`.
    pub freq: String,
    /// Library version, empty when none was found.
    pub openssl: String,
    /// Position in the loaded roster. Assigned once, after missing files
    /// have been dropped, and used to map ranks back to this platform.
    pub index: usize,
    /// Widest rank-annotated metric string of this platform.
    pub width: usize,
    /// Rank range per metric.
    pub ranks: PlatformRanks,
    /// Metrics per normalized algorithm name.
    #[serde(skip)]
    pub data: HashMap<String, MetricPair>,
}

impl Platform {
    /// Create an empty platform from a roster entry with a resolved path.
    pub fn new(spec: PlatformSpec, index: usize) -> Self {
        Self {
            freq: format!("{:.2} GHz", spec.frequency),
            openssl: spec.openssl.unwrap_or_default(),
            cpu: spec.cpu,
            core: spec.core,
            frequency: spec.frequency,
            file: spec.file,
            index,
            width: 0,
            ranks: PlatformRanks::default(),
            data: HashMap::new(),
        }
    }

    /// Metrics for an algorithm, if this platform reported it.
    pub fn metrics(&self, algorithm: &str) -> Option<&MetricPair> {
        self.data.get(algorithm)
    }
}
