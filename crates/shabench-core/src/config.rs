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

//! Report configuration: platform roster, header rows and column separator.
//!
//! A configuration can be written in JSON or YAML. Every field is optional;
//! missing fields fall back to the built-in defaults.
//!
//! ```yaml
//! separator: "   "
//! headers:
//!   - { field: cpu, label: CPU }
//!   - { field: freq, label: Frequency }
//! platforms:
//!   - { cpu: Apple M1, core: M1, frequency: 3.2, file: arm-apple-m1-macos.txt }
//!   - { cpu: EPYC 9534, core: Genoa, frequency: 3.7, file: amd-epyc-9534-linux.txt }
//! ```

use crate::error::{Result, ShabenchError};
use crate::platform::{Platform, PlatformSpec};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default separator between table columns.
pub const DEFAULT_SEPARATOR: &str = "   ";

/// A platform field that can be shown in a header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderField {
    /// CPU display name.
    Cpu,
    /// Core or micro-architecture label.
    Core,
    /// Formatted clock frequency.
    #[serde(alias = "frequency")]
    Freq,
    /// Library version.
    Openssl,
}

impl HeaderField {
    /// The platform's display value for this field.
    pub fn value<'a>(&self, platform: &'a Platform) -> &'a str {
        match self {
            HeaderField::Cpu => &platform.cpu,
            HeaderField::Core => &platform.core,
            HeaderField::Freq => &platform.freq,
            HeaderField::Openssl => &platform.openssl,
        }
    }
}

/// One header row: which field to show and the label of the row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    pub field: HeaderField,
    pub label: String,
}

impl Header {
    pub fn new(field: HeaderField, label: impl Into<String>) -> Self {
        Self {
            field,
            label: label.into(),
        }
    }
}

/// Default header rows: CPU, core, frequency and library version.
pub fn default_headers() -> Vec<Header> {
    vec![
        Header::new(HeaderField::Cpu, "CPU"),
        Header::new(HeaderField::Core, "CPU core"),
        Header::new(HeaderField::Freq, "Frequency"),
        Header::new(HeaderField::Openssl, "OpenSSL"),
    ]
}

/// Everything needed to load and render a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Platforms in column order.
    pub platforms: Vec<PlatformSpec>,
    /// Header rows in display order.
    pub headers: Vec<Header>,
    /// Separator between columns.
    pub separator: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            platforms: Self::default_roster(),
            headers: default_headers(),
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

impl ReportConfig {
    /// The roster of reference platforms and their result file names.
    pub fn default_roster() -> Vec<PlatformSpec> {
        vec![
            PlatformSpec::new("i7-8565U", "Whiskey Lake", 4.20, "intel-i7-8565U-linux-vm.txt"),
            PlatformSpec::new("i7-13700H", "Raptor Lake", 5.00, "intel-i7-13700H-linux-vm.txt"),
            PlatformSpec::new("Xeon G6242R", "Cascade Lake", 3.10, "intel-xeon-gold-6242r-linux.txt"),
            PlatformSpec::new("Xeon G6348", "Ice Lake", 2.60, "intel-xeon-gold-6348-linux.txt"),
            PlatformSpec::new("Xeon M9460", "Sapphire Rpd", 3.50, "intel-xeon-max-9460-linux.txt"),
            PlatformSpec::new("EPYC 7543P", "Milan", 3.70, "amd-epyc-7543p-linux.txt"),
            PlatformSpec::new("EPYC 9534", "Genoa", 3.70, "amd-epyc-9534-linux.txt"),
            PlatformSpec::new("Rasp. Pi 3", "Cortex A53", 1.20, "arm-rpi3-cortex-a53-linux.txt"),
            PlatformSpec::new("Rasp. Pi 4", "Cortex A72", 1.80, "arm-rpi4-cortex-a72-linux.txt"),
            PlatformSpec::new("Ampere Altra", "Neoverse N1", 3.00, "arm-ampere-neoverse-n1-30-linux.txt"),
            PlatformSpec::new("Ampere Altra", "Neoverse N1", 3.30, "arm-ampere-neoverse-n1-33-linux.txt"),
            PlatformSpec::new("Graviton 3", "Neoverse V1", 2.60, "arm-graviton3-neoverse-v1-linux-vm.txt"),
            PlatformSpec::new("Nvidia Grace", "Neoverse V2", 3.30, "arm-grace-neoverse-v2-linux.txt"),
            PlatformSpec::new("Apple M1", "M1", 3.20, "arm-apple-m1-macos.txt"),
            PlatformSpec::new("Apple M2", "M2", 3.49, "arm-apple-m2-macos.txt"),
            PlatformSpec::new("Apple M3", "M3", 4.05, "arm-apple-m3-macos.txt"),
            PlatformSpec::new("Apple M4", "M4", 4.40, "arm-apple-m4-macos.txt"),
        ]
    }

    /// Parse a JSON configuration.
    pub fn from_json_str(input: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(input).map_err(|e| ShabenchError::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a YAML configuration.
    pub fn from_yaml_str(input: &str) -> Result<Self> {
        let config: Self =
            serde_yaml::from_str(input).map_err(|e| ShabenchError::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file. `.yaml` and `.yml` files are read as YAML,
    /// anything else as JSON.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| ShabenchError::io_error(path, e))?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_str(&content),
            _ => Self::from_json_str(&content),
        }
    }

    /// Check every roster entry for a usable frequency and file reference.
    pub fn validate(&self) -> Result<()> {
        for (index, spec) in self.platforms.iter().enumerate() {
            if !spec.frequency.is_finite() || spec.frequency <= 0.0 {
                return Err(ShabenchError::invalid_platform(
                    index,
                    format!("frequency must be a positive number, got {}", spec.frequency),
                ));
            }
            if spec.file.as_os_str().is_empty() {
                return Err(ShabenchError::invalid_platform(index, "empty file reference"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ReportConfig::default();
        assert_eq!(config.platforms.len(), 17);
        assert_eq!(config.separator, "   ");
        let labels: Vec<&str> = config.headers.iter().map(|h| h.label.as_str()).collect();
        assert_eq!(labels, vec!["CPU", "CPU core", "Frequency", "OpenSSL"]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_header_field_values() {
        let mut spec = PlatformSpec::new("Apple M4", "M4", 4.4, "m4.txt");
        spec.openssl = Some("3.4.0".to_string());
        let platform = Platform::new(spec, 0);
        assert_eq!(HeaderField::Cpu.value(&platform), "Apple M4");
        assert_eq!(HeaderField::Core.value(&platform), "M4");
        assert_eq!(HeaderField::Freq.value(&platform), "4.40 GHz");
        assert_eq!(HeaderField::Openssl.value(&platform), "3.4.0");
    }

    #[test]
    fn test_from_json_partial() {
        let config = ReportConfig::from_json_str(
            r#"{"platforms": [{"cpu": "Apple M1", "frequency": 3.2, "file": "m1.txt"}]}"#,
        )
        .unwrap();
        assert_eq!(config.platforms.len(), 1);
        assert_eq!(config.headers, default_headers());
        assert_eq!(config.separator, DEFAULT_SEPARATOR);
    }

    #[test]
    fn test_from_yaml() {
        let yaml = r#"
separator: " | "
headers:
  - { field: cpu, label: CPU core }
  - { field: frequency, label: Frequency }
platforms:
  - { cpu: Neoverse V2, frequency: 3.3, file: grace.txt, openssl: "3.0.2" }
"#;
        let config = ReportConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.separator, " | ");
        assert_eq!(config.headers[1].field, HeaderField::Freq);
        assert_eq!(config.platforms[0].openssl.as_deref(), Some("3.0.2"));
    }

    #[test]
    fn test_rejects_bad_frequency() {
        let err = ReportConfig::from_json_str(
            r#"{"platforms": [{"frequency": 0.0, "file": "a.txt"}]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ShabenchError::InvalidPlatform { index: 0, .. }));
    }

    #[test]
    fn test_rejects_empty_file() {
        let err = ReportConfig::from_json_str(
            r#"{"platforms": [{"frequency": 1.0, "file": "a.txt"}, {"frequency": 1.0, "file": ""}]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ShabenchError::InvalidPlatform { index: 1, .. }));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = ReportConfig::from_json_str("{ platforms: ").unwrap_err();
        assert!(matches!(err, ShabenchError::Config(_)));
    }
}
