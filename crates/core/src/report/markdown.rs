use std::path::{Path, PathBuf};

use crate::model::FamilyModel;
use crate::report::{artifact_path, ReportError, ReportFormat, ReportRenderer, ReportResult};

/// Writes `<number>.md` holding a heading and the person's label.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownRenderer;

impl MarkdownRenderer {
    /// Markdown body for one person.
    pub fn document(number: u64, label: &str) -> String {
        format!("# Anetavle for person {number}\n\n{label}\n")
    }
}

impl ReportRenderer for MarkdownRenderer {
    fn format(&self) -> ReportFormat {
        ReportFormat::Markdown
    }

    fn render(
        &self,
        model: &mut FamilyModel,
        person_id: &str,
        number: u64,
        output_dir: &Path,
    ) -> ReportResult<PathBuf> {
        let label = model
            .label_for(person_id)
            .ok_or_else(|| ReportError::UnknownIndividual(person_id.to_string()))?;

        let path = artifact_path(output_dir, number, ReportFormat::Markdown);
        std::fs::write(&path, Self::document(number, &label))
            .map_err(|source| ReportError::Io { path: path.clone(), source })?;
        Ok(path)
    }
}
