//! In-memory family model built from a GEDCOM file.
//!
//! The model owns every parsed [`Individual`] (file order preserved) plus the
//! [`PersonNumbering`] sequence used to label people in reports.

mod numbering;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub use numbering::PersonNumbering;

/// One person parsed from an `INDI` record.
///
/// Dates are kept verbatim as they appear after the `DATE` tag; no parsing or
/// normalization is performed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Individual {
    /// Record id, e.g. `@I1@`.
    pub id: String,
    /// Display name with GEDCOM surname slashes removed.
    pub name: String,
    pub birth_date: String,
    pub death_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub father_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mother_id: Option<String>,
}

impl Individual {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            birth_date: String::new(),
            death_date: String::new(),
            father_id: None,
            mother_id: None,
        }
    }

    /// Render the report label for this person under a display number.
    ///
    /// `"{n}. {name}"`, followed by `" (f. {birth}"`, `", d. {death}"` and `")"`
    /// when a birth date is known. A death date alone is never shown.
    pub fn label(&self, number: u32) -> String {
        let mut info = format!("{number}. {}", self.name);
        if !self.birth_date.is_empty() {
            info.push_str(&format!(" (f. {}", self.birth_date));
            if !self.death_date.is_empty() {
                info.push_str(&format!(", d. {}", self.death_date));
            }
            info.push(')');
        }
        info
    }
}

/// Registry of individuals keyed by record id, plus the display numbering.
#[derive(Debug, Clone, Default)]
pub struct FamilyModel {
    individuals: Vec<Individual>,
    index: HashMap<String, usize>,
    numbering: PersonNumbering,
}

impl FamilyModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an individual, returning its position in file order.
    ///
    /// Re-registering an existing id replaces the stored record in place, so
    /// the position of first appearance is kept.
    pub fn insert(&mut self, individual: Individual) -> usize {
        if let Some(&pos) = self.index.get(&individual.id) {
            log::debug!("Duplicate INDI record {}; replacing earlier fields", individual.id);
            self.individuals[pos] = individual;
            return pos;
        }
        let pos = self.individuals.len();
        self.index.insert(individual.id.clone(), pos);
        self.individuals.push(individual);
        pos
    }

    pub fn get(&self, id: &str) -> Option<&Individual> {
        self.index.get(id).map(|&pos| &self.individuals[pos])
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Individual> {
        match self.index.get(id) {
            Some(&pos) => self.individuals.get_mut(pos),
            None => None,
        }
    }

    pub(crate) fn get_at_mut(&mut self, pos: usize) -> Option<&mut Individual> {
        self.individuals.get_mut(pos)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Individuals in file order of first appearance.
    pub fn iter(&self) -> impl Iterator<Item = &Individual> {
        self.individuals.iter()
    }

    pub fn first(&self) -> Option<&Individual> {
        self.individuals.first()
    }

    /// Resolve a person's father and mother. Links to unknown ids resolve to `None`.
    pub fn parents(&self, person: &Individual) -> (Option<&Individual>, Option<&Individual>) {
        let father = person.father_id.as_deref().and_then(|id| self.get(id));
        let mother = person.mother_id.as_deref().and_then(|id| self.get(id));
        (father, mother)
    }

    /// First individual whose display name matches `name`, ignoring case.
    pub fn find_by_name(&self, name: &str) -> Option<&Individual> {
        let wanted = name.trim().to_lowercase();
        self.individuals.iter().find(|person| person.name.to_lowercase() == wanted)
    }

    /// Pick the chart root: the named individual if one matches, otherwise
    /// the first individual in the file.
    pub fn select_root(&self, target_name: Option<&str>) -> Option<&Individual> {
        if let Some(name) = target_name {
            match self.find_by_name(name) {
                Some(person) => return Some(person),
                None => log::warn!("No individual named {name:?}; using the first in the file"),
            }
        }
        self.first()
    }

    /// Assign-or-fetch the display number for `id`.
    pub fn number_for(&mut self, id: &str) -> u32 {
        self.numbering.number_for(id)
    }

    /// Numbered report label for `id`, or `None` if the id is unknown.
    ///
    /// Unknown ids never consume a number.
    pub fn label_for(&mut self, id: &str) -> Option<String> {
        let pos = *self.index.get(id)?;
        let number = self.numbering.number_for(id);
        Some(self.individuals[pos].label(number))
    }

    pub fn numbering(&self) -> &PersonNumbering {
        &self.numbering
    }

    /// Swap in another numbering sequence, returning the previous one.
    ///
    /// Pass `PersonNumbering::default()` to start a run with fresh numbers.
    pub fn replace_numbering(&mut self, numbering: PersonNumbering) -> PersonNumbering {
        std::mem::replace(&mut self.numbering, numbering)
    }
}
