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

//! Cross-platform ranking.
//!
//! For each algorithm and metric, platforms reporting that algorithm are
//! ordered by descending value and receive ranks 1..N in that order. Equal
//! values keep their roster order, so ranks are strictly positional and never
//! shared.

use crate::algorithm::AlgorithmRegistry;
use crate::metrics::MetricKind;
use crate::platform::{Platform, RankRange};
use std::cmp::Ordering;
use std::collections::HashMap;
use tracing::debug;

/// Assign a rank to every metric of every platform.
///
/// Ranks are mapped back to their platform through [`Platform::index`].
pub fn rank_platforms(platforms: &mut [Platform], registry: &AlgorithmRegistry) {
    let by_index: HashMap<usize, usize> = platforms
        .iter()
        .enumerate()
        .map(|(pos, platform)| (platform.index, pos))
        .collect();

    for algorithm in registry.iter() {
        for kind in MetricKind::ALL {
            let mut values: Vec<(usize, f64)> = platforms
                .iter()
                .filter_map(|p| p.metrics(algorithm).map(|m| (p.index, m.sort_value(kind))))
                .collect();
            values.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

            for (position, (index, _)) in values.iter().enumerate() {
                let platform = &mut platforms[by_index[index]];
                if let Some(pair) = platform.data.get_mut(algorithm) {
                    pair.set_rank(kind, position + 1);
                }
            }
            debug!(algorithm, metric = kind.as_str(), platforms = values.len(), "ranked");
        }
    }
}

/// Rank suffix appended to a metric string.
///
/// When the platform's ranks for this metric include both one-digit and
/// two-digit values, one-digit ranks get an extra leading space so that
/// the parentheses line up in the column.
///
/// # Examples
///
/// ```
/// use shabench_core::{rank_annotation, RankRange};
///
/// let narrow = RankRange { min: 1, max: 9 };
/// let wide = RankRange { min: 3, max: 12 };
/// assert_eq!(rank_annotation(4, narrow), " (4)");
/// assert_eq!(rank_annotation(4, wide), "  (4)");
/// assert_eq!(rank_annotation(12, wide), " (12)");
/// ```
pub fn rank_annotation(rank: usize, range: RankRange) -> String {
    let space = if range.straddles_ten() && rank < 10 {
        "  "
    } else {
        " "
    };
    format!("{}({})", space, rank)
}

/// Record rank ranges, append rank annotations and compute column widths.
///
/// Must run once, after [`rank_platforms`].
pub fn annotate_ranks(platforms: &mut [Platform]) {
    for platform in platforms.iter_mut() {
        let mut width = 0;

        for kind in MetricKind::ALL {
            let range = RankRange::from_ranks(platform.data.values().map(|m| m.rank(kind)));
            platform.ranks.set(kind, range);
            let Some(range) = range else { continue };

            for pair in platform.data.values_mut() {
                let annotation = rank_annotation(pair.rank(kind), range);
                let string = pair.string_mut(kind);
                string.push_str(&annotation);
                width = width.max(string.chars().count());
            }
        }

        platform.width = width;
    }
}
