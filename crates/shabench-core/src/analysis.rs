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

//! Loading and analysis of a full set of result files.
//!
//! Analysis runs in two passes. The load pass reads every platform's file and
//! fills the algorithm registry. The ranking pass then needs all platforms at
//! once and annotates every metric string with its rank.

use crate::algorithm::AlgorithmRegistry;
use crate::error::Result;
use crate::parser::parse_results;
use crate::platform::{Platform, PlatformSpec};
use crate::rank::{annotate_ranks, rank_platforms};
use serde::Serialize;
use std::path::Path;
use tracing::{debug, info};

/// Loaded and ranked benchmark results.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    /// Platforms whose result file exists, in roster order.
    pub platforms: Vec<Platform>,
    /// Algorithms in first-seen order.
    pub algorithms: AlgorithmRegistry,
}

impl Analysis {
    /// Rank already loaded platforms.
    ///
    /// Platform indices must be unique; their metric strings must not be
    /// annotated yet.
    pub fn from_platforms(mut platforms: Vec<Platform>, algorithms: AlgorithmRegistry) -> Self {
        rank_platforms(&mut platforms, &algorithms);
        annotate_ranks(&mut platforms);
        Self {
            platforms,
            algorithms,
        }
    }

    /// True when no algorithm was found in any file.
    pub fn is_empty(&self) -> bool {
        self.algorithms.is_empty()
    }
}

/// Load the result files of a roster and rank them.
///
/// Relative file references are resolved against `results_dir`. Platforms
/// whose file does not exist are dropped before indices are assigned, and
/// malformed lines inside a file are skipped.
///
/// # Errors
///
/// Returns [`ShabenchError::Io`](crate::ShabenchError::Io) if a file exists
/// but cannot be opened or read, for example a directory or an unreadable
/// file. Loading stops at that platform; no partial analysis is returned.
///
/// # Examples
///
/// ```no_run
/// use shabench_core::{load_results, ReportConfig};
/// use std::path::Path;
///
/// let config = ReportConfig::default();
/// let analysis = load_results(&config.platforms, Path::new("results")).unwrap();
/// println!("{} platforms, {} algorithms", analysis.platforms.len(), analysis.algorithms.len());
/// ```
pub fn load_results(specs: &[PlatformSpec], results_dir: &Path) -> Result<Analysis> {
    let mut algorithms = AlgorithmRegistry::new();
    let mut platforms = Vec::with_capacity(specs.len());

    for spec in specs {
        let file = resolve_path(&spec.file, results_dir);
        if !file.exists() {
            continue;
        }

        let index = platforms.len();
        let mut platform = Platform::new(
            PlatformSpec {
                file,
                ..spec.clone()
            },
            index,
        );

        let parsed = parse_results(&platform.file, platform.frequency, &mut algorithms)?;
        if platform.openssl.is_empty() {
            platform.openssl = parsed.openssl.unwrap_or_default();
        }
        platform.data = parsed.data;

        debug!(
            index,
            file = %platform.file.display(),
            algorithms = platform.data.len(),
            "loaded platform"
        );
        platforms.push(platform);
    }

    info!(
        platforms = platforms.len(),
        algorithms = algorithms.len(),
        "loaded benchmark results"
    );
    Ok(Analysis::from_platforms(platforms, algorithms))
}

fn resolve_path(file: &Path, results_dir: &Path) -> std::path::PathBuf {
    if file.is_absolute() {
        file.to_path_buf()
    } else {
        results_dir.join(file)
    }
}
