//! Integration tests for CLI config resolution and util helpers.

use std::path::PathBuf;

use sermil_cli::build_cli;
use sermil_cli::report::input::config_from_arguments;
use sermil_cli::report::util::validate_html_output;

// ---------------------------------------------------------------------------
// validate_html_output
// ---------------------------------------------------------------------------

#[test]
fn validate_html_in_existing_dir() {
    let dir = tempfile::tempdir().unwrap();
    assert!(validate_html_output(&dir.path().join("report.html")).is_ok());
    assert!(validate_html_output(&dir.path().join("report.HTM")).is_ok());
}

#[test]
fn validate_bare_file_name() {
    assert!(validate_html_output(&PathBuf::from("report.html")).is_ok());
}

#[test]
fn validate_wrong_extension_errors() {
    let dir = tempfile::tempdir().unwrap();
    assert!(validate_html_output(&dir.path().join("report.png")).is_err());
}

#[test]
fn validate_missing_directory_errors() {
    assert!(validate_html_output(&PathBuf::from("/nonexistent/dir/report.html")).is_err());
}

// ---------------------------------------------------------------------------
// config_from_arguments
// ---------------------------------------------------------------------------

#[test]
fn defaults_without_config_or_flags() {
    let matches = build_cli().get_matches_from(["sermil"]);
    let config = config_from_arguments(None, &matches).unwrap();
    assert_eq!(config.start_year, 2018);
    assert_eq!(config.end_year, 2022);
    assert!(config.path_prefix.is_empty());
    assert!(config.output_html.is_none());
}

#[test]
fn flags_override_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("report.json");
    std::fs::write(
        &config_path,
        r#"{"path_prefix": "/from/config/", "start_year": 2019, "end_year": 2021}"#,
    )
    .unwrap();

    let matches = build_cli().get_matches_from(["sermil", "--data", "/from/flag/", "-e", "2020"]);
    let config = config_from_arguments(Some(&config_path), &matches).unwrap();
    assert_eq!(config.path_prefix, "/from/flag/");
    assert_eq!(config.start_year, 2019);
    assert_eq!(config.end_year, 2020);
}

#[test]
fn malformed_config_errors() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("report.json");
    std::fs::write(&config_path, "{ not json").unwrap();

    let matches = build_cli().get_matches_from(["sermil"]);
    assert!(config_from_arguments(Some(&config_path), &matches).is_err());
}

#[test]
fn reversed_range_errors() {
    let matches = build_cli().get_matches_from(["sermil", "-s", "2022", "-e", "2018"]);
    assert!(config_from_arguments(None, &matches).is_err());
}

#[test]
fn non_html_output_errors() {
    let matches = build_cli().get_matches_from(["sermil", "-o", "chart.png"]);
    assert!(config_from_arguments(None, &matches).is_err());
}
