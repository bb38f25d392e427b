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

//! Derived metrics and their display strings.
//!
//! Every `hash-bitrate` record yields two metrics for its algorithm: the raw
//! bitrate in bits per second and the number of bits hashed per processor
//! cycle at the platform's nominal clock frequency.

use serde::Serialize;

/// One billion, used for Gb/s and GHz conversions.
pub const GIGA: f64 = 1_000_000_000.0;

/// The two metrics ranked and displayed for each algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricKind {
    /// Raw hashing throughput, bits per second.
    Bitrate,
    /// Bits hashed per processor cycle.
    Bitcycle,
}

impl MetricKind {
    /// Both metric kinds, in table order.
    pub const ALL: [MetricKind; 2] = [MetricKind::Bitrate, MetricKind::Bitcycle];

    /// Short lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricKind::Bitrate => "bitrate",
            MetricKind::Bitcycle => "bitcycle",
        }
    }
}

/// A single metric: the ranking value, its display string and its rank.
///
/// A rank of 0 means "not ranked yet"; ranking assigns 1 to the best
/// (highest) value.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MetricValue<T> {
    pub value: T,
    pub string: String,
    pub rank: usize,
}

/// Both metrics for one (platform, algorithm) combination.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MetricPair {
    pub bitrate: MetricValue<u64>,
    pub bitcycle: MetricValue<f64>,
}

impl MetricPair {
    /// Derive both metrics from a raw bitrate and a clock frequency in GHz.
    ///
    /// # Examples
    ///
    /// ```
    /// use shabench_core::MetricPair;
    ///
    /// let pair = MetricPair::from_bitrate(4_000_000_000, 2.0);
    /// assert_eq!(pair.bitrate.string, "4.000");
    /// assert_eq!(pair.bitcycle.value, 2.0);
    /// assert_eq!(pair.bitcycle.string, "2.00");
    /// ```
    pub fn from_bitrate(bitrate: u64, frequency_ghz: f64) -> Self {
        let bitcycle = bits_per_cycle(bitrate, frequency_ghz);
        Self {
            bitrate: MetricValue {
                value: bitrate,
                string: format_bitrate(bitrate),
                rank: 0,
            },
            bitcycle: MetricValue {
                value: bitcycle,
                string: format_bits_per_cycle(bitcycle),
                rank: 0,
            },
        }
    }

    /// Value used to order platforms for the given metric.
    pub fn sort_value(&self, kind: MetricKind) -> f64 {
        match kind {
            MetricKind::Bitrate => self.bitrate.value as f64,
            MetricKind::Bitcycle => self.bitcycle.value,
        }
    }

    /// Rank of the given metric.
    pub fn rank(&self, kind: MetricKind) -> usize {
        match kind {
            MetricKind::Bitrate => self.bitrate.rank,
            MetricKind::Bitcycle => self.bitcycle.rank,
        }
    }

    /// Set the rank of the given metric.
    pub fn set_rank(&mut self, kind: MetricKind, rank: usize) {
        match kind {
            MetricKind::Bitrate => self.bitrate.rank = rank,
            MetricKind::Bitcycle => self.bitcycle.rank = rank,
        }
    }

    /// Display string of the given metric.
    pub fn string(&self, kind: MetricKind) -> &str {
        match kind {
            MetricKind::Bitrate => &self.bitrate.string,
            MetricKind::Bitcycle => &self.bitcycle.string,
        }
    }

    /// Mutable display string of the given metric.
    pub fn string_mut(&mut self, kind: MetricKind) -> &mut String {
        match kind {
            MetricKind::Bitrate => &mut self.bitrate.string,
            MetricKind::Bitcycle => &mut self.bitcycle.string,
        }
    }
}

/// Bits hashed per processor cycle: `bitrate / (frequency * 1e9)`.
pub fn bits_per_cycle(bitrate: u64, frequency_ghz: f64) -> f64 {
    bitrate as f64 / (frequency_ghz * GIGA)
}

/// Format a bitrate as Gb/s with three decimals.
pub fn format_bitrate(bitrate: u64) -> String {
    format!("{:.3}", bitrate as f64 / GIGA)
}

/// Format bits per cycle with precision depending on magnitude.
///
/// Values of 10 and above get one decimal, values in `[1, 10)` two decimals
/// and smaller values three decimals.
pub fn format_bits_per_cycle(bitcycle: f64) -> String {
    if bitcycle >= 10.0 {
        format!("{:.1}", bitcycle)
    } else if bitcycle >= 1.0 {
        format!("{:.2}", bitcycle)
    } else {
        format!("{:.3}", bitcycle)
    }
}
