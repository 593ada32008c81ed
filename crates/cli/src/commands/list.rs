use std::path::Path;

use anetavle_core::config::Settings;
use anetavle_core::gedcom;
use anetavle_core::model::Individual;
use anyhow::{Context, Result};

/// One human-readable line for an individual.
pub fn format_individual(person: &Individual) -> String {
    let name = if person.name.is_empty() { "(no name)" } else { person.name.as_str() };
    let mut line = format!("{} {}", person.id, name);
    if !person.birth_date.is_empty() {
        line.push_str(&format!(" [b. {}]", person.birth_date));
    }
    if !person.death_date.is_empty() {
        line.push_str(&format!(" [d. {}]", person.death_date));
    }
    line
}

/// Print every individual in file order, as text or JSON.
pub fn list_individuals_command(gedcom_file: &Path, settings: &Settings, json: bool) -> Result<()> {
    let model = gedcom::parse_file_with(gedcom_file, settings.parent_links)
        .context("Failed to load GEDCOM input")?;
    let individuals: Vec<&Individual> = model.iter().collect();

    if json {
        let serialized = serde_json::to_string_pretty(&individuals)
            .context("Failed to serialize individuals to JSON")?;
        println!("{}", serialized);
        return Ok(());
    }

    println!("Individuals ({}):", individuals.len());
    if individuals.is_empty() {
        println!("  (none)");
        return Ok(());
    }
    for person in individuals {
        println!("  - {}", format_individual(person));
    }

    Ok(())
}
