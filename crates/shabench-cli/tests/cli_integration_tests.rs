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

//! CLI integration tests

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const GENOA: &str = "\
openssl: OpenSSL 3.0.13 30 Jan 2024, CPUINFO: OPENSSL_ia32cap=0x7ed8320b078bffff
algo: SHA1
hash-bitrate: 5324667980
algo: SHA256
hash-bitrate: 4115636600
algo: SHA3-256
hash-bitrate: 1119405560
";

const M1: &str = "\
openssl: OpenSSL 3.3.1 4 Jun 2024
algo: SHA1
hash-bitrate: 4000000000
algo: SHA256
hash-bitrate: 19200000000
algo: SHA512
hash-bitrate: 3200000000
";

const EXPECTED_REPORT: &str = "\
HASH BITRATE (Gb/s)

CPU         EPYC 9534     Apple M1
CPU core        Genoa           M1
Frequency    3.70 GHz     3.20 GHz
OpenSSL        3.0.13        3.3.1
---------   ---------   ----------
SHA1        5.325 (1)    4.000 (2)
SHA2-256    4.116 (2)   19.200 (1)
SHA3-256    1.119 (1)
SHA2-512                 3.200 (1)

HASHED BITS PER PROCESSOR CYCLE

CPU         EPYC 9534     Apple M1
CPU core        Genoa           M1
Frequency    3.70 GHz     3.20 GHz
OpenSSL        3.0.13        3.3.1
---------   ---------   ----------
SHA1         1.44 (1)     1.25 (2)
SHA2-256     1.11 (2)     6.00 (1)
SHA3-256    0.303 (1)
SHA2-512                  1.00 (1)
";

fn shabench_cmd() -> Command {
    Command::cargo_bin("shabench").expect("Failed to find shabench binary")
}

/// Result files named after the built-in roster entries.
fn builtin_results() -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(dir.path().join("amd-epyc-9534-linux.txt"), GENOA).unwrap();
    fs::write(dir.path().join("arm-apple-m1-macos.txt"), M1).unwrap();
    dir
}

/// Result files with short names plus a configuration referencing them.
fn custom_results(config_name: &str, config: &str) -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(dir.path().join("genoa.txt"), GENOA).unwrap();
    fs::write(dir.path().join("m1.txt"), M1).unwrap();
    fs::write(dir.path().join(config_name), config).unwrap();
    dir
}

// ===== Help and Version =====

#[test]
fn test_help_output() {
    shabench_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("shabench - hash throughput result tables"))
        .stdout(predicate::str::contains("report"))
        .stdout(predicate::str::contains("inspect"));
}

#[test]
fn test_version_output() {
    shabench_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("shabench"));
}

#[test]
fn test_no_subcommand_fails() {
    shabench_cmd().assert().failure();
}

// ===== Report Command =====

#[test]
fn test_report_builtin_roster_to_stdout() {
    let dir = builtin_results();
    shabench_cmd()
        .arg("report")
        .arg("--results-dir")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(EXPECTED_REPORT);
}

#[test]
fn test_report_to_file() {
    let dir = builtin_results();
    let output = dir.path().join("RESULTS.txt");

    shabench_cmd()
        .arg("report")
        .arg("-r")
        .arg(dir.path())
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert_eq!(fs::read_to_string(&output).unwrap(), EXPECTED_REPORT);
}

#[test]
fn test_report_empty_results_dir() {
    let dir = TempDir::new().unwrap();
    shabench_cmd()
        .arg("report")
        .arg("--results-dir")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(
            "HASH BITRATE (Gb/s)\n\nCPU\nCPU core\nFrequency\nOpenSSL\n---------\n\n\
             HASHED BITS PER PROCESSOR CYCLE\n\nCPU\nCPU core\nFrequency\nOpenSSL\n---------\n",
        );
}

#[test]
fn test_report_yaml_config() {
    let config = "\
platforms:
  - cpu: EPYC 9534
    core: Genoa
    frequency: 3.7
    file: genoa.txt
  - cpu: Apple M1
    core: M1
    frequency: 3.2
    file: m1.txt
    openssl: LibreSSL 3.3.6
headers:
  - field: cpu
    label: Chip
  - field: openssl
    label: Library
";
    let dir = custom_results("roster.yaml", config);

    shabench_cmd()
        .arg("report")
        .arg("--config")
        .arg(dir.path().join("roster.yaml"))
        .arg("--results-dir")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Chip"))
        .stdout(predicate::str::contains("LibreSSL 3.3.6"))
        .stdout(predicate::str::contains("3.0.13"))
        .stdout(predicate::str::contains("Frequency").not());
}

#[test]
fn test_report_json_config_with_separator_override() {
    let config = r#"{
  "platforms": [
    {"cpu": "EPYC 9534", "core": "Genoa", "frequency": 3.7, "file": "genoa.txt"},
    {"cpu": "Apple M1", "core": "M1", "frequency": 3.2, "file": "m1.txt"}
  ],
  "headers": [{"field": "core", "label": "Core"}]
}"#;
    let dir = custom_results("roster.json", config);

    shabench_cmd()
        .arg("report")
        .arg("-c")
        .arg(dir.path().join("roster.json"))
        .arg("-r")
        .arg(dir.path())
        .arg("--separator")
        .arg(" | ")
        .assert()
        .success()
        .stdout(predicate::str::contains("Core     |     Genoa |         M1\n"));
}

#[test]
fn test_report_invalid_config_fails() {
    let config = r#"{"platforms": [{"cpu": "X", "frequency": 0.0, "file": "x.txt"}]}"#;
    let dir = custom_results("roster.json", config);

    shabench_cmd()
        .arg("report")
        .arg("--config")
        .arg(dir.path().join("roster.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid platform #0"));
}

#[test]
fn test_report_unreadable_result_file_fails() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("amd-epyc-9534-linux.txt")).unwrap();

    shabench_cmd()
        .arg("report")
        .arg("--results-dir")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("I/O error"))
        .stderr(predicate::str::contains("amd-epyc-9534-linux.txt"));
}

// ===== Logging =====

#[test]
fn test_rust_log_enables_debug_events() {
    let dir = builtin_results();
    shabench_cmd()
        .env("RUST_LOG", "shabench=debug")
        .arg("report")
        .arg("--results-dir")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(EXPECTED_REPORT)
        .stderr(predicate::str::contains("loaded platform"))
        .stderr(predicate::str::contains("ranked"));
}

#[test]
fn test_default_log_level_is_info() {
    let dir = builtin_results();
    shabench_cmd()
        .env_remove("RUST_LOG")
        .arg("report")
        .arg("--results-dir")
        .arg(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("loaded benchmark results"))
        .stderr(predicate::str::contains("loaded platform").not());
}

#[test]
fn test_report_missing_config_fails() {
    shabench_cmd()
        .arg("report")
        .arg("--config")
        .arg("/nonexistent/roster.yaml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

// ===== Inspect Command =====

#[test]
fn test_inspect_json() {
    let dir = builtin_results();
    let output = shabench_cmd()
        .arg("inspect")
        .arg("--results-dir")
        .arg(dir.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["platforms"].as_array().unwrap().len(), 2);
    assert_eq!(value["platforms"][0]["cpu"], "EPYC 9534");
    assert_eq!(value["platforms"][1]["openssl"], "3.3.1");
    assert_eq!(value["algorithms"][1], "SHA2-256");
}

#[test]
fn test_inspect_yaml() {
    let dir = builtin_results();
    shabench_cmd()
        .arg("inspect")
        .arg("--results-dir")
        .arg(dir.path())
        .arg("--format")
        .arg("yaml")
        .assert()
        .success()
        .stdout(predicate::str::contains("platforms:"))
        .stdout(predicate::str::contains("SHA2-512"));
}

#[test]
fn test_inspect_unknown_format_fails() {
    shabench_cmd()
        .arg("inspect")
        .arg("--format")
        .arg("xml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown dump format 'xml'"));
}
