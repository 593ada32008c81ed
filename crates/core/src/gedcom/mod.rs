//! GEDCOM reading.
//!
//! Parsing runs in two independent passes over the same tokenized lines:
//! - `individuals`: registers `INDI` records with name, birth and death date.
//! - `families`: gathers `FAM` records and back-fills father/mother links.
//!
//! The second pass only looks at the finished individual registry, never at
//! scratch state from the first. Malformed lines are skipped, not rejected.

pub mod families;
pub mod individuals;
pub mod tokenizer;

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::model::FamilyModel;

pub use families::{collect_families, resolve_parents, FamilyGroup, ParentLinkPolicy};
pub use individuals::read_individuals;
pub use tokenizer::{tokenize, tokenize_line, Record};

/// Error type for reading GEDCOM input.
#[derive(Debug, Error)]
pub enum GedcomError {
    /// The file could not be opened, read, or decoded as UTF-8.
    #[error("Failed to read GEDCOM file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience result type for GEDCOM operations.
pub type GedcomResult<T> = Result<T, GedcomError>;

/// Parse GEDCOM text into a family model using the default link policy.
pub fn parse_str(text: &str) -> FamilyModel {
    parse_str_with(text, ParentLinkPolicy::default())
}

/// Parse GEDCOM text into a family model.
pub fn parse_str_with(text: &str, policy: ParentLinkPolicy) -> FamilyModel {
    let records = tokenize(text);
    let mut model = FamilyModel::new();
    read_individuals(&records, &mut model);
    resolve_parents(&records, &mut model, policy);
    log::debug!("Parsed {} records into {} individuals", records.len(), model.len());
    model
}

/// Read and parse a GEDCOM file using the default link policy.
pub fn parse_file(path: impl AsRef<Path>) -> GedcomResult<FamilyModel> {
    parse_file_with(path, ParentLinkPolicy::default())
}

/// Read and parse a GEDCOM file. I/O and decode failures are returned as errors.
pub fn parse_file_with(path: impl AsRef<Path>, policy: ParentLinkPolicy) -> GedcomResult<FamilyModel> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .map_err(|source| GedcomError::Io { path: path.to_path_buf(), source })?;
    Ok(parse_str_with(&text, policy))
}
