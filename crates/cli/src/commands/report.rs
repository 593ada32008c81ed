use std::path::Path;

use anetavle_core::chart::validate_depth;
use anetavle_core::config::Settings;
use anetavle_core::gedcom;
use anetavle_core::report::{renderer_for, ReportArtifact, ReportDriver, ReportFormat};
use anyhow::{Context, Result};

/// Parse the GEDCOM file, pick a root, and write one report per ancestor.
///
/// A file without individuals is not an error: a notice is printed and no
/// output directory is created.
pub fn generate_reports_command(gedcom_file: &Path, settings: &Settings) -> Result<Vec<ReportArtifact>> {
    if settings.format == ReportFormat::Word {
        validate_depth(settings.depth)?;
    }

    println!("Processing GEDCOM file: {}", gedcom_file.display());
    let mut model = gedcom::parse_file_with(gedcom_file, settings.parent_links)
        .context("Failed to load GEDCOM input")?;
    println!("Found {} individuals", model.len());

    let Some(root) = model.select_root(settings.root_name.as_deref()) else {
        println!("No individuals found in the GEDCOM file");
        return Ok(Vec::new());
    };
    let root_id = root.id.clone();
    println!("Root person: {} ({})", root.name, root_id);

    let renderer = renderer_for(settings.format, settings.depth);
    let artifacts = ReportDriver::new(renderer.as_ref(), &settings.output_dir)
        .run(&mut model, &root_id)
        .with_context(|| {
            format!("Failed to generate reports in {}", settings.output_dir.display())
        })?;

    println!("Wrote {} {} report(s)", artifacts.len(), settings.format.as_str());
    println!("Generated ancestor trees in {}/", settings.output_dir.display());

    Ok(artifacts)
}
