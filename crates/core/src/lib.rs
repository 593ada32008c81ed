//! anetavle-core
//!
//! Core library for reading GEDCOM genealogy files and producing ancestor
//! charts ("anetavler") for a chosen root individual.
//!
//! This crate defines the in-memory family model, the two-pass GEDCOM parser,
//! the ancestor chart layout, and the report renderers (markdown and Word).
//!
//! All substantive logic lives here so it is fully testable and reusable from
//! multiple frontends; the CLI only parses arguments and prints progress.

pub mod chart;
pub mod config;
pub mod gedcom;
pub mod model;
pub mod report;

/// Returns the library version as encoded at compile time.
///
/// Useful for tests and for frontends to report consistent version info.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
