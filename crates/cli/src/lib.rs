pub mod commands;

use std::path::Path;

use anetavle_core::config::{load_report_config, ReportConfig, Settings};
use anetavle_core::report::ReportFormat;
use anyhow::Result;

/// Merge an optional config file with command-line values (flags win) and
/// fill the rest with built-in defaults.
pub fn load_settings(config_path: Option<&Path>, flags: ReportConfig) -> Result<Settings> {
    let file = match config_path {
        Some(path) => load_report_config(path)?,
        None => ReportConfig::default(),
    };
    Ok(file.overlay(flags).resolve())
}

/// Initialize `env_logger`. `RUST_LOG` wins; otherwise each `-v` raises the
/// default level from `warn` to `info` to `debug`.
pub fn init_logging(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .try_init()
        .ok();
}

/// clap value parser for `--format`.
pub fn parse_format(value: &str) -> Result<ReportFormat, String> {
    value.parse()
}
