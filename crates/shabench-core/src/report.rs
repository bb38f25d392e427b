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

//! Report rendering and structural dump.

use crate::algorithm::AlgorithmRegistry;
use crate::analysis::Analysis;
use crate::config::ReportConfig;
use crate::error::{Result, ShabenchError};
use crate::layout::TableLayout;
use crate::metrics::MetricKind;
use crate::platform::Platform;
use serde::{Serialize, Serializer};
use std::io::Write;

/// Heading of the bitrate table.
pub const BITRATE_TITLE: &str = "HASH BITRATE (Gb/s)";

/// Heading of the bits-per-cycle table.
pub const BITCYCLE_TITLE: &str = "HASHED BITS PER PROCESSOR CYCLE";

/// Render the complete report: the bitrate table followed by the
/// bits-per-cycle table, each under its heading.
pub fn render_report(analysis: &Analysis, config: &ReportConfig) -> String {
    let layout = TableLayout::new(analysis, &config.headers, &config.separator);
    let mut out = String::new();

    out.push_str(BITRATE_TITLE);
    out.push_str("\n\n");
    out.push_str(&layout.render(MetricKind::Bitrate));
    out.push('\n');
    out.push_str(BITCYCLE_TITLE);
    out.push_str("\n\n");
    out.push_str(&layout.render(MetricKind::Bitcycle));

    out
}

/// Render the report into a writer.
pub fn write_report<W: Write>(
    analysis: &Analysis,
    config: &ReportConfig,
    mut writer: W,
) -> std::io::Result<()> {
    writer.write_all(render_report(analysis, config).as_bytes())?;
    writer.flush()
}

/// Output format of [`dump_analysis`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DumpFormat {
    #[default]
    Json,
    Yaml,
}

/// Serialize the enriched roster and the algorithm registry for inspection.
///
/// Per-algorithm metrics of each platform are listed in registry order.
pub fn dump_analysis(analysis: &Analysis, format: DumpFormat) -> Result<String> {
    let view = DumpView {
        platforms: analysis
            .platforms
            .iter()
            .map(|platform| DumpPlatform {
                platform,
                data: OrderedData {
                    platform,
                    algorithms: &analysis.algorithms,
                },
            })
            .collect(),
        algorithms: &analysis.algorithms,
    };

    match format {
        DumpFormat::Json => serde_json::to_string_pretty(&view).map_err(ShabenchError::from),
        DumpFormat::Yaml => serde_yaml::to_string(&view).map_err(ShabenchError::from),
    }
}

#[derive(Serialize)]
struct DumpView<'a> {
    platforms: Vec<DumpPlatform<'a>>,
    algorithms: &'a AlgorithmRegistry,
}

#[derive(Serialize)]
struct DumpPlatform<'a> {
    #[serde(flatten)]
    platform: &'a Platform,
    data: OrderedData<'a>,
}

struct OrderedData<'a> {
    platform: &'a Platform,
    algorithms: &'a AlgorithmRegistry,
}

impl Serialize for OrderedData<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(
            self.algorithms
                .iter()
                .filter_map(|name| self.platform.metrics(name).map(|pair| (name, pair))),
        )
    }
}
