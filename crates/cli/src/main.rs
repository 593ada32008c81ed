use std::path::PathBuf;

use anetavle::commands::{generate_reports_command, list_individuals_command};
use anetavle::{init_logging, load_settings, parse_format};
use anetavle_core::config::ReportConfig;
use anetavle_core::gedcom::ParentLinkPolicy;
use anetavle_core::report::ReportFormat;
use anyhow::Result;
use clap::Parser;

/// Process a GEDCOM file and generate ancestor trees.
///
/// This CLI is a thin wrapper around `anetavle-core` (exposed in code as
/// `anetavle_core`). All parsing, layout and rendering lives in the library.
#[derive(Parser, Debug)]
#[command(
    name = "anetavle",
    version,
    about = "Process a GEDCOM file and generate ancestor trees",
    long_about = None
)]
struct Cli {
    /// Path to the GEDCOM file to process.
    gedcom_file: PathBuf,

    /// Directory to store output files (default: output).
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Output format: markdown (.md) or word (.docx) (default: markdown).
    #[arg(long, value_parser = parse_format)]
    format: Option<ReportFormat>,

    /// Name of the root person (case-insensitive). Defaults to the first individual in the file.
    #[arg(long)]
    root_name: Option<String>,

    /// Number of generations in Word charts, 1 to 6 (default: 4).
    #[arg(long)]
    depth: Option<u32>,

    /// How to link a child listed in several families: last-wins or first-wins.
    #[arg(long, value_parser = clap::value_parser!(ParentLinkPolicy))]
    parent_links: Option<ParentLinkPolicy>,

    /// Optional config file (.json, .yaml or .yml). Command-line flags take precedence.
    #[arg(long)]
    config: Option<PathBuf>,

    /// List individuals instead of generating reports.
    #[arg(long, default_value_t = false)]
    list: bool,

    /// Emit the listing as JSON.
    #[arg(long, default_value_t = false, requires = "list")]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let flags = ReportConfig {
        output_dir: cli.output_dir,
        format: cli.format,
        depth: cli.depth,
        root_name: cli.root_name,
        parent_links: cli.parent_links,
    };
    let settings = load_settings(cli.config.as_deref(), flags)?;
    log::debug!("Resolved settings: {:?}", settings);

    if cli.list {
        list_individuals_command(&cli.gedcom_file, &settings, cli.json)?;
    } else {
        generate_reports_command(&cli.gedcom_file, &settings)?;
    }

    Ok(())
}
