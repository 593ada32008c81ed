use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::gedcom::tokenizer::Record;
use crate::model::FamilyModel;

/// How to resolve a child that is listed in more than one family.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParentLinkPolicy {
    /// The family processed last overwrites earlier links.
    #[default]
    LastWins,
    /// Earlier links are kept; a later family only fills a link still unset.
    FirstWins,
}

impl ParentLinkPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParentLinkPolicy::LastWins => "last-wins",
            ParentLinkPolicy::FirstWins => "first-wins",
        }
    }
}

impl std::str::FromStr for ParentLinkPolicy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "last-wins" => Ok(ParentLinkPolicy::LastWins),
            "first-wins" => Ok(ParentLinkPolicy::FirstWins),
            other => Err(format!(
                "Invalid parent link policy '{other}'. Allowed: last-wins, first-wins"
            )),
        }
    }
}

/// HUSB/WIFE/CHIL lines of one `FAM` record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FamilyGroup {
    pub husband_id: Option<String>,
    pub wife_id: Option<String>,
    /// Child ids in source order; repeats are kept.
    pub children: Vec<String>,
}

/// Collect every family group in file order.
pub fn collect_families(records: &[Record<'_>]) -> Vec<FamilyGroup> {
    let mut families = Vec::new();
    let mut current: Option<FamilyGroup> = None;

    for record in records {
        if record.level == 0 {
            families.extend(current.take());
            if record.remainder == "FAM" {
                current = Some(FamilyGroup::default());
            }
            continue;
        }

        let Some(family) = current.as_mut() else {
            continue;
        };
        if record.level != 1 {
            continue;
        }
        match record.tag {
            "HUSB" => family.husband_id = Some(record.remainder.to_string()),
            "WIFE" => family.wife_id = Some(record.remainder.to_string()),
            "CHIL" => family.children.push(record.remainder.to_string()),
            _ => {}
        }
    }
    families.extend(current);

    families
}

/// Second pass: write father/mother links onto the children of every family.
///
/// Only links between individuals present in `model` are written; a dangling
/// child, husband or wife id is skipped without creating anyone.
pub fn resolve_parents(records: &[Record<'_>], model: &mut FamilyModel, policy: ParentLinkPolicy) {
    let families = collect_families(records);
    let mut linked: HashSet<String> = HashSet::new();

    for family in &families {
        let father = family.husband_id.as_deref().filter(|id| model.contains(id));
        let mother = family.wife_id.as_deref().filter(|id| model.contains(id));
        let father = father.map(str::to_string);
        let mother = mother.map(str::to_string);

        for child_id in &family.children {
            let Some(child) = model.get_mut(child_id) else {
                log::debug!("Family references unknown child {child_id}; skipping");
                continue;
            };

            if !linked.insert(child_id.clone()) {
                let conflicting = (father.is_some() && child.father_id != father)
                    || (mother.is_some() && child.mother_id != mother);
                if conflicting {
                    log::warn!(
                        "{child_id} is a child in more than one family; keeping {} links",
                        if policy == ParentLinkPolicy::LastWins { "the last" } else { "the first" }
                    );
                }
                if policy == ParentLinkPolicy::FirstWins {
                    if child.father_id.is_none() {
                        child.father_id = father.clone();
                    }
                    if child.mother_id.is_none() {
                        child.mother_id = mother.clone();
                    }
                    continue;
                }
            }

            if father.is_some() {
                child.father_id = father.clone();
            }
            if mother.is_some() {
                child.mother_id = mother.clone();
            }
        }
    }
}
