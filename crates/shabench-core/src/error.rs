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

//! Error types for loading and reporting benchmark results.
//!
//! Data-quality problems inside results files (unknown records, orphan
//! bitrate lines, missing files) are never errors: they are skipped while
//! loading. Only I/O failures on files that exist and invalid configuration
//! are surfaced through [`ShabenchError`].

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for shabench operations.
pub type Result<T> = std::result::Result<T, ShabenchError>;

/// Errors raised by the analysis pipeline.
///
/// # Examples
///
/// ```
/// use shabench_core::ShabenchError;
///
/// let err = ShabenchError::InvalidPlatform {
///     index: 3,
///     reason: "frequency must be positive".to_string(),
/// };
/// assert_eq!(
///     err.to_string(),
///     "Invalid platform #3: frequency must be positive"
/// );
/// ```
#[derive(Debug, Clone, Error)]
pub enum ShabenchError {
    /// A file exists but could not be read.
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error.
        path: PathBuf,
        /// The underlying error message.
        message: String,
    },

    /// A configuration file could not be parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A roster entry failed validation.
    #[error("Invalid platform #{index}: {reason}")]
    InvalidPlatform {
        /// Position of the entry in the roster (0-based).
        index: usize,
        /// Why the entry was rejected.
        reason: String,
    },

    /// The analysis could not be serialized for inspection.
    #[error("Serialization error: {0}")]
    Serialize(String),
}

impl ShabenchError {
    /// Create an I/O error with file path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a roster validation error.
    pub fn invalid_platform(index: usize, reason: impl Into<String>) -> Self {
        Self::InvalidPlatform {
            index,
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for ShabenchError {
    fn from(source: serde_json::Error) -> Self {
        Self::Serialize(source.to_string())
    }
}

impl From<serde_yaml::Error> for ShabenchError {
    fn from(source: serde_yaml::Error) -> Self {
        Self::Serialize(source.to_string())
    }
}
