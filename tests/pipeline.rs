// LogTally - GPL-3.0-or-later
// This file is part of LogTally.
//
// Copyright (C) 2026 Daniel Freiermuth
//
// LogTally is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// LogTally is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with LogTally.  If not, see <https://www.gnu.org/licenses/>.

//! End-to-end runs against real files on disk.

use logtally::config::{AnalysisConfig, OutputOptions, Settings, UserConfig};
use logtally::core::Ranking;
use logtally::parser::LogRecord;
use logtally::report::write_report;
use logtally::{analyze, Analysis, AnalyzeError};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

const APP_LOG: &str = "\
2024-01-01 10:00:00 ERROR disk full
2024-01-01 10:00:05 ERROR disk full
2024-01-01 10:00:10 WARN low memory
garbage line
";

fn log_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file.flush().expect("flush temp file");
    file
}

fn settings(path: &Path, levels: &[&str], top: usize) -> Settings {
    Settings {
        path: path.to_path_buf(),
        levels: levels.iter().map(ToString::to_string).collect(),
        top: Some(top),
        ..Settings::default()
    }
}

fn run(settings: Settings, options: OutputOptions) -> Result<Analysis, AnalyzeError> {
    let config = AnalysisConfig::resolve(settings, &UserConfig::default(), options)?;
    analyze(&config)
}

fn render(analysis: &Analysis, options: OutputOptions) -> String {
    let mut out = Vec::new();
    let mut err = Vec::new();
    write_report(&mut out, &mut err, analysis, options).expect("write to memory");
    String::from_utf8(out).expect("utf-8")
}

#[test]
fn test_top_error_with_statistics() {
    let file = log_file(APP_LOG);
    let analysis =
        run(settings(file.path(), &["ERROR"], 1), OutputOptions::default()).expect("run succeeds");

    let entries: Vec<(&str, u64)> = analysis
        .ranking
        .entries()
        .iter()
        .map(|e| (e.message.as_str(), e.count))
        .collect();
    assert_eq!(entries, [("disk full", 2)]);

    let stats = analysis.tally.stats;
    assert_eq!(stats.total(), 4);
    assert_eq!(stats.valid(), 3);
    assert_eq!(stats.invalid(), 1);
    assert_eq!(stats.matched(), 2);
}

#[test]
fn test_missing_level_reports_no_results() {
    let file = log_file(APP_LOG);
    let analysis =
        run(settings(file.path(), &["INFO"], 3), OutputOptions::default()).expect("run succeeds");

    assert_eq!(analysis.ranking, Ranking::NoResults);
    assert_eq!(
        render(&analysis, OutputOptions::default()),
        "no results for requested levels: INFO\n"
    );
}

#[test]
fn test_structured_output_is_reproducible() {
    let file = log_file(
        "2024-01-01 10:00:00 ERROR b\n\
         2024-01-01 10:00:01 ERROR a\n\
         2024-01-01 10:00:02 ERROR c\n\
         2024-01-01 10:00:03 ERROR a\n",
    );
    let options = OutputOptions {
        structured: true,
        ..OutputOptions::default()
    };

    let first = run(settings(file.path(), &["ERROR"], 2), options).expect("first run");
    let second = run(settings(file.path(), &["ERROR"], 2), options).expect("second run");

    let rendered = render(&first, options);
    assert_eq!(rendered, render(&second, options));

    let doc: serde_json::Value = serde_json::from_str(&rendered).expect("valid JSON");
    assert_eq!(doc["entries"][0]["message"], "a");
    assert_eq!(doc["entries"][1]["message"], "b");
}

#[test]
fn test_bounds_are_inclusive() {
    let file = log_file(
        "2024-01-01 09:59:59 ERROR one second early\n\
         2024-01-01 10:00:00 ERROR at since\n\
         2024-01-01 10:30:00 ERROR inside\n\
         2024-01-01 11:00:00 ERROR at until\n\
         2024-01-01 11:00:01 ERROR one second late\n",
    );
    let bounded = Settings {
        since: Some("2024-01-01 10:00:00".to_string()),
        until: Some("2024-01-01 11:00:00".to_string()),
        ..settings(file.path(), &["ERROR"], 10)
    };

    let analysis = run(bounded, OutputOptions::default()).expect("run succeeds");
    let freq = &analysis.tally.frequencies;

    assert_eq!(analysis.tally.stats.valid(), 5);
    assert_eq!(analysis.tally.stats.matched(), 3);
    assert_eq!(freq.get("at since"), Some(1));
    assert_eq!(freq.get("at until"), Some(1));
    assert_eq!(freq.get("one second early"), None);
    assert_eq!(freq.get("one second late"), None);
}

#[test]
fn test_malformed_lines_do_not_abort() {
    let file = log_file(
        "not a log line\n\
         2024-13-40 10:00:00 ERROR impossible date\n\
         2024-01-01 10:00:00 ERROR\n\
         2024-01-01 10:00:00 ERROR kept\n",
    );
    let analysis =
        run(settings(file.path(), &["ERROR"], 3), OutputOptions::default()).expect("run succeeds");

    assert_eq!(analysis.tally.stats.invalid(), 3);
    assert_eq!(analysis.tally.stats.valid(), 1);
    assert_eq!(analysis.tally.frequencies.get("kept"), Some(1));
}

#[test]
fn test_verbose_capture_in_file_order() {
    let file = log_file(APP_LOG);
    let options = OutputOptions {
        verbose: true,
        ..OutputOptions::default()
    };
    let analysis =
        run(settings(file.path(), &["ERROR", "WARN"], 3), options).expect("run succeeds");

    let messages: Vec<&str> = analysis.tally.records.iter().map(LogRecord::message).collect();
    assert_eq!(messages, ["disk full", "disk full", "low memory"]);
}

#[test]
fn test_missing_file_is_fatal() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let missing = dir.path().join("absent.log");

    let result = run(settings(&missing, &["ERROR"], 3), OutputOptions::default());
    assert!(matches!(result, Err(AnalyzeError::FileNotFound(path)) if path == missing));
}

#[test]
fn test_inverted_bounds_fail_before_reading() {
    let inverted = Settings {
        since: Some("2024-01-02 00:00:00".to_string()),
        until: Some("2024-01-01 00:00:00".to_string()),
        ..settings(Path::new("/nonexistent/app.log"), &["ERROR"], 3)
    };

    // Validation runs first, so the missing file is never reached
    let result = run(inverted, OutputOptions::default());
    assert!(matches!(result, Err(AnalyzeError::InvertedTimeRange { .. })));
}

#[test]
fn test_explicit_config_file() {
    let config = log_file(r#"{"levels": ["WARN"], "top": 1}"#);
    let user = UserConfig::load_from(config.path()).expect("valid config");

    let file = log_file(APP_LOG);
    let settings = Settings {
        path: file.path().to_path_buf(),
        ..Settings::default()
    };
    let resolved =
        AnalysisConfig::resolve(settings, &user, OutputOptions::default()).expect("valid");
    let analysis = analyze(&resolved).expect("run succeeds");

    assert_eq!(render(&analysis, OutputOptions::default()), "low memory 1\n");
}

#[test]
fn test_broken_config_file_is_an_error() {
    let config = log_file("{ levels: nope");
    assert!(matches!(
        UserConfig::load_from(config.path()),
        Err(AnalyzeError::Config { .. })
    ));
}
