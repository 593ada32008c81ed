mod common;

use std::path::PathBuf;

use anetavle::{init_logging, load_settings, parse_format};
use anetavle_core::config::ReportConfig;
use anetavle_core::gedcom::ParentLinkPolicy;
use anetavle_core::report::ReportFormat;
use tempfile::tempdir;

#[test]
fn settings_default_without_config_or_flags() {
    let settings = load_settings(None, ReportConfig::default()).expect("settings");
    assert_eq!(settings.output_dir, PathBuf::from("output"));
    assert_eq!(settings.format, ReportFormat::Markdown);
    assert_eq!(settings.depth, 4);
    assert_eq!(settings.parent_links, ParentLinkPolicy::LastWins);
}

#[test]
fn flags_override_config_file() {
    let tmp = tempdir().expect("tempdir");
    let config = common::write_file(
        tmp.path(),
        "anetavle.yaml",
        "format: word\ndepth: 6\noutput_dir: charts\n",
    );

    let flags = ReportConfig { depth: Some(3), ..ReportConfig::default() };
    let settings = load_settings(Some(&config), flags).expect("settings");
    assert_eq!(settings.format, ReportFormat::Word);
    assert_eq!(settings.depth, 3);
    assert_eq!(settings.output_dir, PathBuf::from("charts"));
}

#[test]
fn missing_config_file_is_an_error() {
    let tmp = tempdir().expect("tempdir");
    let err = load_settings(Some(&tmp.path().join("nope.json")), ReportConfig::default())
        .unwrap_err();
    assert!(err.to_string().contains("Failed to read config"));
}

#[test]
fn parse_format_accepts_known_values() {
    assert_eq!(parse_format("markdown"), Ok(ReportFormat::Markdown));
    assert_eq!(parse_format("word"), Ok(ReportFormat::Word));
    let err = parse_format("pdf").unwrap_err();
    assert!(err.contains("Invalid format"));
}

#[test]
fn init_logging_tolerates_an_installed_logger() {
    init_logging(0);
    init_logging(2);
    log::debug!("logger still usable");
}
