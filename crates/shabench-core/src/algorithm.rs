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

//! Algorithm name normalization and the registry of algorithms seen.

use serde::Serialize;
use std::collections::HashSet;

/// Normalize a hash algorithm name as reported by the benchmark tool.
///
/// SHA-2 family members are reported with a bare `SHA` prefix (`SHA256`,
/// `SHA512`). They are renamed with a `SHA2-` prefix so that they line up
/// with the SHA-3 names (`SHA3-256`). `SHA1`, SHA-3 names, names already in
/// `SHA2-` form and non-SHA names are returned unchanged.
///
/// # Examples
///
/// ```
/// use shabench_core::normalize_algorithm;
///
/// assert_eq!(normalize_algorithm("SHA256"), "SHA2-256");
/// assert_eq!(normalize_algorithm("SHA2-256"), "SHA2-256");
/// assert_eq!(normalize_algorithm("SHA1"), "SHA1");
/// assert_eq!(normalize_algorithm("SHA3-512"), "SHA3-512");
/// assert_eq!(normalize_algorithm("BLAKE2b512"), "BLAKE2b512");
/// ```
pub fn normalize_algorithm(name: &str) -> String {
    match name.strip_prefix("SHA") {
        Some(rest)
            if name != "SHA1" && !rest.starts_with("3-") && !rest.starts_with("2-") =>
        {
            format!("SHA2-{}", rest)
        }
        _ => name.to_string(),
    }
}

/// Ordered, deduplicated list of normalized algorithm names.
///
/// Names keep their first-seen order across all platforms; this order
/// drives the row order of the rendered tables.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct AlgorithmRegistry {
    names: Vec<String>,
    #[serde(skip)]
    seen: HashSet<String>,
}

impl AlgorithmRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an algorithm name. Returns `true` if it was not known yet.
    pub fn register(&mut self, name: &str) -> bool {
        if self.contains(name) {
            return false;
        }
        self.seen.insert(name.to_string());
        self.names.push(name.to_string());
        true
    }

    /// Check whether a name has been registered.
    pub fn contains(&self, name: &str) -> bool {
        self.seen.contains(name)
    }

    /// Iterate over names in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// All names in first-seen order.
    pub fn as_slice(&self) -> &[String] {
        &self.names
    }

    /// Number of distinct algorithms.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True when no algorithm has been registered.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
