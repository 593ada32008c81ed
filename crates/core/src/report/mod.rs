//! Report generation.
//!
//! The [`ReportDriver`] walks a root individual's ancestors and asks a
//! [`ReportRenderer`] to write one artifact per distinct person, named by the
//! person's ahnentafel number (root = 1, father = 2n, mother = 2n + 1).
//!
//! Renderers:
//! - [`MarkdownRenderer`]: a short text file with the person's label.
//! - [`WordRenderer`]: a `.docx` ancestor chart built from [`AncestorChart`].
//!
//! [`AncestorChart`]: crate::chart::AncestorChart

pub mod docx;
mod markdown;
mod word;

use std::collections::{HashSet, VecDeque};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::chart::ChartError;
use crate::model::FamilyModel;

pub use markdown::MarkdownRenderer;
pub use word::WordRenderer;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to package document: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error(transparent)]
    Chart(#[from] ChartError),
    #[error("Individual not found: {0}")]
    UnknownIndividual(String),
}

/// Convenience result type for report operations.
pub type ReportResult<T> = Result<T, ReportError>;

/// Output format of generated reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Markdown,
    Word,
}

impl ReportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportFormat::Markdown => "markdown",
            ReportFormat::Word => "word",
        }
    }

    /// File extension of artifacts in this format.
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Markdown => "md",
            ReportFormat::Word => "docx",
        }
    }
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "markdown" => Ok(ReportFormat::Markdown),
            "word" => Ok(ReportFormat::Word),
            other => Err(format!("Invalid format '{other}'. Allowed: markdown, word")),
        }
    }
}

/// Trait implemented by report writers; the driver selects one per run.
pub trait ReportRenderer {
    fn format(&self) -> ReportFormat;

    /// Write the artifact for `person_id` under ahnentafel `number` into
    /// `output_dir`, returning the written path.
    fn render(
        &self,
        model: &mut FamilyModel,
        person_id: &str,
        number: u64,
        output_dir: &Path,
    ) -> ReportResult<PathBuf>;
}

/// Build the renderer for `format`. `depth` only applies to Word charts.
pub fn renderer_for(format: ReportFormat, depth: u32) -> Box<dyn ReportRenderer> {
    match format {
        ReportFormat::Markdown => Box::new(MarkdownRenderer),
        ReportFormat::Word => Box::new(WordRenderer::new(depth)),
    }
}

/// Path of the artifact for ahnentafel `number`.
pub fn artifact_path(output_dir: &Path, number: u64, format: ReportFormat) -> PathBuf {
    output_dir.join(format!("{number}.{}", format.extension()))
}

/// One written report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportArtifact {
    pub individual_id: String,
    pub number: u64,
    pub path: PathBuf,
}

/// Walk the ancestors of `root_id` breadth-first, father before mother.
///
/// Returns `(id, ahnentafel number)` in visit order. A person reachable along
/// several paths appears once, under the first number that reached it.
pub fn ancestor_numbers(model: &FamilyModel, root_id: &str) -> Vec<(String, u64)> {
    let mut visited = Vec::new();
    let mut processed: HashSet<&str> = HashSet::new();
    let mut queue: VecDeque<(&str, u64)> = VecDeque::new();
    if let Some(root) = model.get(root_id) {
        queue.push_back((root.id.as_str(), 1));
    }

    while let Some((id, number)) = queue.pop_front() {
        if !processed.insert(id) {
            continue;
        }
        visited.push((id.to_string(), number));

        let Some(person) = model.get(id) else {
            continue;
        };
        let (father, mother) = model.parents(person);
        if let Some(father) = father {
            queue.push_back((father.id.as_str(), number.saturating_mul(2)));
        }
        if let Some(mother) = mother {
            queue.push_back((mother.id.as_str(), number.saturating_mul(2).saturating_add(1)));
        }
    }

    visited
}

/// Coordinator that ties a family model to a renderer and an output directory.
pub struct ReportDriver<'a> {
    pub renderer: &'a dyn ReportRenderer,
    pub output_dir: &'a Path,
}

impl<'a> ReportDriver<'a> {
    pub fn new(renderer: &'a dyn ReportRenderer, output_dir: &'a Path) -> Self {
        Self { renderer, output_dir }
    }

    /// Render one artifact per distinct ancestor of `root_id` (root included).
    ///
    /// The output directory is created if missing. Artifacts written before a
    /// failure are left in place.
    pub fn run(&self, model: &mut FamilyModel, root_id: &str) -> ReportResult<Vec<ReportArtifact>> {
        if !model.contains(root_id) {
            return Err(ReportError::UnknownIndividual(root_id.to_string()));
        }
        std::fs::create_dir_all(self.output_dir).map_err(|source| ReportError::Io {
            path: self.output_dir.to_path_buf(),
            source,
        })?;

        let mut artifacts = Vec::new();
        for (id, number) in ancestor_numbers(model, root_id) {
            let path = self.renderer.render(model, &id, number, self.output_dir)?;
            log::info!("Wrote {} report for {id} to {}", self.renderer.format().as_str(), path.display());
            artifacts.push(ReportArtifact { individual_id: id, number, path });
        }

        Ok(artifacts)
    }
}
