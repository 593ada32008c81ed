//! Minimal WordprocessingML (`.docx`) writer.
//!
//! Covers what the ancestor chart needs: a title, plain paragraphs, one page
//! setup, and grid tables with horizontally merged cells, rotated text, fixed
//! row heights, centered paragraphs and per-cell font sizes. The package is a
//! zip archive with the main document, a style sheet, and core properties.

use std::io::{Cursor, Write};
use std::path::Path;

use chrono::Utc;
use zip::result::ZipError;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::report::{ReportError, ReportResult};

/// Twentieths of a point per centimetre.
const TWIPS_PER_CM: f64 = 1440.0 / 2.54;

const WORD_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

pub fn cm_to_twips(cm: f64) -> u32 {
    (cm * TWIPS_PER_CM).round() as u32
}

/// Page size, orientation and margins of the single document section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSetup {
    pub width_twips: u32,
    pub height_twips: u32,
    pub landscape: bool,
    pub margin_twips: u32,
}

impl PageSetup {
    pub fn a4_portrait() -> Self {
        Self {
            width_twips: cm_to_twips(21.0),
            height_twips: cm_to_twips(29.7),
            landscape: false,
            margin_twips: 1440,
        }
    }

    pub fn a4_landscape() -> Self {
        Self {
            width_twips: cm_to_twips(29.7),
            height_twips: cm_to_twips(21.0),
            landscape: true,
            margin_twips: 720,
        }
    }

    /// Width between the left and right margins.
    pub fn text_width_twips(&self) -> u32 {
        self.width_twips.saturating_sub(2 * self.margin_twips)
    }
}

impl Default for PageSetup {
    fn default() -> Self {
        Self::a4_portrait()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableCell {
    pub text: String,
    /// Number of grid columns this cell covers.
    pub span: usize,
    pub vertical: bool,
    pub centered: bool,
    pub font_size_pt: Option<u32>,
}

impl TableCell {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), span: 1, vertical: false, centered: false, font_size_pt: None }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableRow {
    /// Exact row height, if fixed.
    pub height_twips: Option<u32>,
    pub cells: Vec<TableCell>,
}

/// Bordered grid table.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub columns: usize,
    pub width_twips: u32,
    pub rows: Vec<TableRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Title(String),
    Paragraph(String),
    Table(Table),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocxDocument {
    pub page: PageSetup,
    pub blocks: Vec<Block>,
}

impl DocxDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_page(&mut self, page: PageSetup) -> &mut Self {
        self.page = page;
        self
    }

    pub fn add_title(&mut self, text: impl Into<String>) -> &mut Self {
        self.blocks.push(Block::Title(text.into()));
        self
    }

    pub fn add_paragraph(&mut self, text: impl Into<String>) -> &mut Self {
        self.blocks.push(Block::Paragraph(text.into()));
        self
    }

    pub fn add_table(&mut self, table: Table) -> &mut Self {
        self.blocks.push(Block::Table(table));
        self
    }

    fn title(&self) -> Option<&str> {
        self.blocks.iter().find_map(|block| match block {
            Block::Title(text) => Some(text.as_str()),
            _ => None,
        })
    }

    /// XML of `word/document.xml`.
    pub fn document_xml(&self) -> String {
        let mut xml = String::new();
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(&format!(r#"<w:document xmlns:w="{WORD_NS}"><w:body>"#));
        for block in &self.blocks {
            match block {
                Block::Title(text) => {
                    xml.push_str(r#"<w:p><w:pPr><w:pStyle w:val="Title"/></w:pPr>"#);
                    push_run(&mut xml, text, None);
                    xml.push_str("</w:p>");
                }
                Block::Paragraph(text) => {
                    xml.push_str("<w:p>");
                    push_run(&mut xml, text, None);
                    xml.push_str("</w:p>");
                }
                Block::Table(table) => push_table(&mut xml, table),
            }
        }
        push_section(&mut xml, &self.page);
        xml.push_str("</w:body></w:document>");
        xml
    }

    /// Build the zipped package in memory.
    pub fn to_bytes(&self) -> Result<Vec<u8>, ZipError> {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

        let parts = [
            ("[Content_Types].xml", CONTENT_TYPES_XML.to_string()),
            ("_rels/.rels", PACKAGE_RELS_XML.to_string()),
            ("word/_rels/document.xml.rels", DOCUMENT_RELS_XML.to_string()),
            ("word/styles.xml", STYLES_XML.to_string()),
            ("word/document.xml", self.document_xml()),
            ("docProps/core.xml", core_properties_xml(self.title().unwrap_or_default())),
        ];
        for (name, body) in parts {
            zip.start_file(name, options)?;
            zip.write_all(body.as_bytes())?;
        }

        Ok(zip.finish()?.into_inner())
    }

    /// Write the package to `path`.
    pub fn save(&self, path: &Path) -> ReportResult<()> {
        let bytes = self.to_bytes()?;
        std::fs::write(path, bytes)
            .map_err(|source| ReportError::Io { path: path.to_path_buf(), source })
    }
}

/// Escape markup characters and drop control characters XML 1.0 forbids.
pub fn escape_xml(text: &str) -> String {
    text.chars()
        .filter(|&c| c >= '\u{20}' || matches!(c, '\t' | '\n' | '\r'))
        .collect::<String>()
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn push_run(xml: &mut String, text: &str, font_size_pt: Option<u32>) {
    xml.push_str("<w:r>");
    if let Some(pt) = font_size_pt {
        // Sizes are stored in half-points.
        xml.push_str(&format!(r#"<w:rPr><w:sz w:val="{0}"/><w:szCs w:val="{0}"/></w:rPr>"#, pt * 2));
    }
    if !text.is_empty() {
        xml.push_str(&format!(r#"<w:t xml:space="preserve">{}</w:t>"#, escape_xml(text)));
    }
    xml.push_str("</w:r>");
}

fn push_table(xml: &mut String, table: &Table) {
    let column_width = table.width_twips / table.columns.max(1) as u32;

    xml.push_str("<w:tbl><w:tblPr>");
    xml.push_str(r#"<w:tblStyle w:val="TableGrid"/>"#);
    xml.push_str(&format!(r#"<w:tblW w:w="{}" w:type="dxa"/>"#, table.width_twips));
    xml.push_str(r#"<w:tblLayout w:type="autofit"/>"#);
    xml.push_str("</w:tblPr><w:tblGrid>");
    for _ in 0..table.columns {
        xml.push_str(&format!(r#"<w:gridCol w:w="{column_width}"/>"#));
    }
    xml.push_str("</w:tblGrid>");

    for row in &table.rows {
        xml.push_str("<w:tr>");
        if let Some(height) = row.height_twips {
            xml.push_str(&format!(r#"<w:trPr><w:trHeight w:val="{height}" w:hRule="exact"/></w:trPr>"#));
        }
        for cell in &row.cells {
            xml.push_str("<w:tc><w:tcPr>");
            xml.push_str(&format!(
                r#"<w:tcW w:w="{}" w:type="dxa"/>"#,
                column_width * cell.span as u32
            ));
            if cell.span > 1 {
                xml.push_str(&format!(r#"<w:gridSpan w:val="{}"/>"#, cell.span));
            }
            if cell.vertical {
                xml.push_str(r#"<w:textDirection w:val="btLr"/>"#);
            }
            if cell.centered {
                xml.push_str(r#"<w:vAlign w:val="center"/>"#);
            }
            xml.push_str("</w:tcPr><w:p>");
            if cell.centered {
                xml.push_str(r#"<w:pPr><w:jc w:val="center"/></w:pPr>"#);
            }
            push_run(xml, &cell.text, cell.font_size_pt);
            xml.push_str("</w:p></w:tc>");
        }
        xml.push_str("</w:tr>");
    }
    xml.push_str("</w:tbl>");
}

fn push_section(xml: &mut String, page: &PageSetup) {
    let orient = if page.landscape { r#" w:orient="landscape""# } else { "" };
    xml.push_str(&format!(
        r#"<w:sectPr><w:pgSz w:w="{}" w:h="{}"{orient}/><w:pgMar w:top="{m}" w:right="{m}" w:bottom="{m}" w:left="{m}" w:header="708" w:footer="708" w:gutter="0"/></w:sectPr>"#,
        page.width_twips,
        page.height_twips,
        m = page.margin_twips,
    ));
}

fn core_properties_xml(title: &str) -> String {
    let created = Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
    format!(
        concat!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
            r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" "#,
            r#"xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" "#,
            r#"xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#,
            "<dc:title>{}</dc:title><dc:creator>anetavle</dc:creator>",
            r#"<dcterms:created xsi:type="dcterms:W3CDTF">{}</dcterms:created>"#,
            "</cp:coreProperties>"
        ),
        escape_xml(title),
        created
    )
}

const CONTENT_TYPES_XML: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#,
    r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#,
    r#"<Default Extension="xml" ContentType="application/xml"/>"#,
    r#"<Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>"#,
    r#"<Override PartName="/word/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"/>"#,
    r#"<Override PartName="/docProps/core.xml" ContentType="application/vnd.openxmlformats-package.core-properties+xml"/>"#,
    "</Types>"
);

const PACKAGE_RELS_XML: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
    r#"<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/>"#,
    r#"<Relationship Id="rId2" Type="http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties" Target="docProps/core.xml"/>"#,
    "</Relationships>"
);

const DOCUMENT_RELS_XML: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
    r#"<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>"#,
    "</Relationships>"
);

const STYLES_XML: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">"#,
    r#"<w:style w:type="paragraph" w:default="1" w:styleId="Normal"><w:name w:val="Normal"/>"#,
    r#"<w:rPr><w:sz w:val="22"/></w:rPr></w:style>"#,
    r#"<w:style w:type="paragraph" w:styleId="Title"><w:name w:val="Title"/><w:basedOn w:val="Normal"/>"#,
    r#"<w:next w:val="Normal"/><w:pPr><w:spacing w:after="240"/></w:pPr><w:rPr><w:sz w:val="56"/></w:rPr></w:style>"#,
    r#"<w:style w:type="table" w:default="1" w:styleId="TableNormal"><w:name w:val="Normal Table"/>"#,
    r#"<w:tblPr><w:tblCellMar><w:left w:w="108" w:type="dxa"/><w:right w:w="108" w:type="dxa"/></w:tblCellMar></w:tblPr></w:style>"#,
    r#"<w:style w:type="table" w:styleId="TableGrid"><w:name w:val="Table Grid"/><w:basedOn w:val="TableNormal"/>"#,
    r#"<w:tblPr><w:tblBorders>"#,
    r#"<w:top w:val="single" w:sz="4" w:space="0" w:color="auto"/>"#,
    r#"<w:left w:val="single" w:sz="4" w:space="0" w:color="auto"/>"#,
    r#"<w:bottom w:val="single" w:sz="4" w:space="0" w:color="auto"/>"#,
    r#"<w:right w:val="single" w:sz="4" w:space="0" w:color="auto"/>"#,
    r#"<w:insideH w:val="single" w:sz="4" w:space="0" w:color="auto"/>"#,
    r#"<w:insideV w:val="single" w:sz="4" w:space="0" w:color="auto"/>"#,
    r#"</w:tblBorders></w:tblPr></w:style>"#,
    "</w:styles>"
);
