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

//! Column layout of a result table.
//!
//! The first column holds header labels and algorithm names, left justified.
//! Each platform then gets one right-justified column, wide enough for its
//! header values and its widest rank-annotated metric string.

use crate::analysis::Analysis;
use crate::config::Header;
use crate::metrics::MetricKind;
use std::fmt::Write as _;

/// Computed column widths for one analysis and header configuration.
#[derive(Debug, Clone)]
pub struct TableLayout<'a> {
    analysis: &'a Analysis,
    headers: &'a [Header],
    separator: &'a str,
    first_width: usize,
    widths: Vec<usize>,
}

fn text_width(s: &str) -> usize {
    s.chars().count()
}

impl<'a> TableLayout<'a> {
    /// Compute the layout of `analysis` with the given header rows.
    pub fn new(analysis: &'a Analysis, headers: &'a [Header], separator: &'a str) -> Self {
        let first_width = headers
            .iter()
            .map(|h| text_width(&h.label))
            .chain(analysis.algorithms.iter().map(text_width))
            .max()
            .unwrap_or(0);

        let widths = analysis
            .platforms
            .iter()
            .map(|platform| {
                headers
                    .iter()
                    .map(|h| text_width(h.field.value(platform)))
                    .fold(platform.width, usize::max)
            })
            .collect();

        Self {
            analysis,
            headers,
            separator,
            first_width,
            widths,
        }
    }

    /// Width of the label column.
    pub fn first_column_width(&self) -> usize {
        self.first_width
    }

    /// Width of the column of the platform at `position` in the analysis.
    pub fn column_width(&self, position: usize) -> Option<usize> {
        self.widths.get(position).copied()
    }

    /// Render header rows, the dashed rule and one row per algorithm,
    /// showing the given metric. Every line ends with a newline and carries
    /// no trailing whitespace.
    pub fn render(&self, kind: MetricKind) -> String {
        let mut out = String::new();

        for header in self.headers {
            self.push_row(&mut out, &header.label, |platform| {
                header.field.value(&self.analysis.platforms[platform]).to_string()
            });
        }

        let mut rule = "-".repeat(self.first_column_width());
        for position in 0..self.analysis.platforms.len() {
            rule.push_str(self.separator);
            rule.push_str(&"-".repeat(self.column_width(position).unwrap_or(0)));
        }
        push_line(&mut out, &rule);

        for algorithm in self.analysis.algorithms.iter() {
            self.push_row(&mut out, algorithm, |platform| {
                self.analysis.platforms[platform]
                    .metrics(algorithm)
                    .map(|pair| pair.string(kind).to_string())
                    .unwrap_or_default()
            });
        }

        out
    }

    fn push_row<F>(&self, out: &mut String, label: &str, cell: F)
    where
        F: Fn(usize) -> String,
    {
        let mut line = String::new();
        let _ = write!(line, "{:<width$}", label, width = self.first_column_width());
        for position in 0..self.analysis.platforms.len() {
            let width = self.column_width(position).unwrap_or(0);
            line.push_str(self.separator);
            let _ = write!(line, "{:>width$}", cell(position), width = width);
        }
        push_line(out, &line);
    }
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line.trim_end());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::AlgorithmRegistry;
    use crate::config::{default_headers, HeaderField};
    use crate::metrics::MetricPair;
    use crate::platform::{Platform, PlatformSpec};

    fn analysis(platforms: Vec<(&str, f64, Vec<(&str, u64)>)>) -> Analysis {
        let mut registry = AlgorithmRegistry::new();
        let platforms = platforms
            .into_iter()
            .enumerate()
            .map(|(index, (cpu, frequency, data))| {
                let mut platform =
                    Platform::new(PlatformSpec::new(cpu, "", frequency, "unused.txt"), index);
                for (name, bitrate) in data {
                    registry.register(name);
                    platform
                        .data
                        .insert(name.to_string(), MetricPair::from_bitrate(bitrate, frequency));
                }
                platform
            })
            .collect();
        Analysis::from_platforms(platforms, registry)
    }

    #[test]
    fn test_first_column_width() {
        let analysis = analysis(vec![("A", 1.0, vec![("SHA2-512-256", 1)])]);
        let headers = default_headers();
        let layout = TableLayout::new(&analysis, &headers, "   ");
        assert_eq!(layout.first_column_width(), "SHA2-512-256".len());

        let short = vec![Header::new(HeaderField::Cpu, "Processor model name")];
        let layout = TableLayout::new(&analysis, &short, "   ");
        assert_eq!(layout.first_column_width(), "Processor model name".len());
    }

    #[test]
    fn test_column_width_from_headers_and_values() {
        let analysis = analysis(vec![
            ("Nvidia Grace", 1.0, vec![("SHA1", 1_000_000_000)]),
            ("M1", 1.0, vec![("SHA1", 2_000_000_000)]),
        ]);
        let headers = default_headers();
        let layout = TableLayout::new(&analysis, &headers, "   ");
        // "Nvidia Grace" (12) beats "1.000 (2)" (9).
        assert_eq!(layout.column_width(0), Some(12));
        // "2.000 (1)" (9) beats "M1" and "1.00 GHz" (8).
        assert_eq!(layout.column_width(1), Some(9));
        assert_eq!(layout.column_width(2), None);

        let table = layout.render(MetricKind::Bitrate);
        let rule = table.lines().find(|line| line.starts_with('-')).unwrap();
        assert_eq!(rule, "---------   ------------   ---------");
    }

    #[test]
    fn test_render_bitrate_table() {
        let analysis = analysis(vec![
            ("CPU-A", 2.0, vec![("SHA1", 4_000_000_000), ("MD5", 1_000_000_000)]),
            ("CPU-B", 1.0, vec![("SHA1", 5_000_000_000)]),
        ]);
        let headers = vec![
            Header::new(HeaderField::Cpu, "CPU"),
            Header::new(HeaderField::Freq, "Frequency"),
        ];
        let layout = TableLayout::new(&analysis, &headers, "   ");
        let expected = "\
CPU             CPU-A       CPU-B
Frequency    2.00 GHz    1.00 GHz
---------   ---------   ---------
SHA1        4.000 (2)   5.000 (1)
MD5         1.000 (1)
";
        assert_eq!(layout.render(MetricKind::Bitrate), expected);
    }

    #[test]
    fn test_render_bitcycle_table() {
        let analysis = analysis(vec![
            ("CPU-A", 2.0, vec![("SHA1", 4_000_000_000)]),
            ("CPU-B", 1.0, vec![("SHA1", 5_000_000_000)]),
        ]);
        let headers = vec![Header::new(HeaderField::Cpu, "CPU")];
        let layout = TableLayout::new(&analysis, &headers, " | ");
        let expected = "\
CPU  |     CPU-A |     CPU-B
---- | --------- | ---------
SHA1 |  2.00 (2) |  5.00 (1)
";
        assert_eq!(layout.render(MetricKind::Bitcycle), expected);
    }

    #[test]
    fn test_render_without_algorithms() {
        let analysis = analysis(vec![("CPU-A", 1.0, vec![])]);
        let headers = vec![Header::new(HeaderField::Cpu, "CPU")];
        let layout = TableLayout::new(&analysis, &headers, "   ");
        assert_eq!(layout.render(MetricKind::Bitrate), "CPU   CPU-A\n---   -----\n");
    }

    #[test]
    fn test_render_without_platforms() {
        let analysis = analysis(vec![]);
        let headers = default_headers();
        let layout = TableLayout::new(&analysis, &headers, "   ");
        assert_eq!(
            layout.render(MetricKind::Bitrate),
            "CPU\nCPU core\nFrequency\nOpenSSL\n---------\n"
        );
    }
}
