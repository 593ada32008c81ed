use std::path::{Path, PathBuf};

use crate::chart::{AncestorChart, DEFAULT_DEPTH};
use crate::model::FamilyModel;
use crate::report::docx::{cm_to_twips, DocxDocument, PageSetup, Table, TableCell, TableRow};
use crate::report::{artifact_path, ReportFormat, ReportRenderer, ReportResult};

/// Writes `<number>.docx`: an A4 landscape ancestor chart for the person.
#[derive(Debug, Clone, Copy)]
pub struct WordRenderer {
    pub depth: u32,
}

impl Default for WordRenderer {
    fn default() -> Self {
        Self { depth: DEFAULT_DEPTH }
    }
}

impl WordRenderer {
    pub fn new(depth: u32) -> Self {
        Self { depth }
    }

    /// Build the document for one chart root without writing it.
    pub fn document(
        &self,
        model: &mut FamilyModel,
        person_id: &str,
        number: u64,
    ) -> ReportResult<DocxDocument> {
        let chart = AncestorChart::build(model, person_id, self.depth)?;
        let page = PageSetup::a4_landscape();

        let mut doc = DocxDocument::new();
        doc.set_page(page)
            .add_title(format!("Anetavle for person {number}"))
            .add_table(chart_table(&chart, page.text_width_twips()))
            .add_paragraph("");
        Ok(doc)
    }
}

/// Translate chart rows into a grid table, one merged cell per slot.
pub fn chart_table(chart: &AncestorChart, width_twips: u32) -> Table {
    let rows = chart
        .rows
        .iter()
        .map(|row| TableRow {
            height_twips: row.height_cm.map(cm_to_twips),
            cells: row
                .cells
                .iter()
                .map(|cell| TableCell {
                    text: cell.label.clone(),
                    span: cell.span,
                    vertical: cell.vertical,
                    centered: cell.centered,
                    font_size_pt: Some(cell.font_size_pt),
                })
                .collect(),
        })
        .collect();

    Table { columns: chart.columns(), width_twips, rows }
}

impl ReportRenderer for WordRenderer {
    fn format(&self) -> ReportFormat {
        ReportFormat::Word
    }

    fn render(
        &self,
        model: &mut FamilyModel,
        person_id: &str,
        number: u64,
        output_dir: &Path,
    ) -> ReportResult<PathBuf> {
        let doc = self.document(model, person_id, number)?;
        let path = artifact_path(output_dir, number, ReportFormat::Word);
        doc.save(&path)?;
        Ok(path)
    }
}
