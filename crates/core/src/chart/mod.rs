//! Ancestor chart layout.
//!
//! A chart of depth `D` is a perfect binary tree of ancestors laid out on a
//! grid of `2^(D-1)` columns. Generation `g` occupies one row with `2^g`
//! slots; slot `i` has its father at slot `2i` and its mother at slot `2i + 1`
//! in the next generation. Unknown ancestors leave empty slots, never shifting
//! later ones.
//!
//! The layout is a disposable view: it is rebuilt for every report and only
//! touches the model to assign display numbers for labels.

use std::collections::VecDeque;

use thiserror::Error;

use crate::model::{FamilyModel, Individual};

/// Depth used when none is configured.
pub const DEFAULT_DEPTH: u32 = 4;

/// Largest supported depth: 32 grid columns, inside Word's 63-column table limit.
pub const MAX_DEPTH: u32 = 6;

/// Font size of the root generation; each generation step is one point smaller.
pub const BASE_FONT_PT: u32 = 12;

/// Smallest font size used for any generation.
pub const MIN_FONT_PT: u32 = 8;

/// Fixed row height of the deepest generation, in centimetres.
pub const DEEPEST_ROW_HEIGHT_CM: f64 = 8.0;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChartError {
    #[error("Chart depth {depth} is out of range; supported range is 1..={max}")]
    InvalidDepth { depth: u32, max: u32 },
    #[error("Individual not found: {0}")]
    UnknownIndividual(String),
}

/// One visual cell of a chart row, covering `span` grid columns.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartCell {
    /// Slot index within the generation (ahnentafel order, father first).
    pub slot: usize,
    pub individual_id: Option<String>,
    /// Numbered label, or empty for an unknown ancestor.
    pub label: String,
    pub start_col: usize,
    pub span: usize,
    pub font_size_pt: u32,
    /// Text runs bottom-to-top (deepest generation only).
    pub vertical: bool,
    pub centered: bool,
}

/// One generation of the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartRow {
    pub generation: u32,
    /// Fixed row height in centimetres, if the row has one.
    pub height_cm: Option<f64>,
    pub cells: Vec<ChartCell>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AncestorChart {
    pub root_id: String,
    pub depth: u32,
    pub rows: Vec<ChartRow>,
}

impl AncestorChart {
    /// Lay out the ancestors of `root_id`, `depth` generations deep.
    ///
    /// Labels are requested row by row, slot by slot, so display numbers are
    /// assigned in that order for people not numbered yet.
    pub fn build(model: &mut FamilyModel, root_id: &str, depth: u32) -> Result<Self, ChartError> {
        validate_depth(depth)?;
        if !model.contains(root_id) {
            return Err(ChartError::UnknownIndividual(root_id.to_string()));
        }

        let columns = column_count(depth);
        let mut rows = Vec::with_capacity(depth as usize);
        for generation in 0..depth {
            let slots = generation_slots(model, root_id, generation)?;
            let span = columns >> generation;
            let deepest = generation == depth - 1;

            let cells = slots
                .into_iter()
                .enumerate()
                .map(|(slot, individual_id)| {
                    let label = individual_id
                        .as_deref()
                        .and_then(|id| model.label_for(id))
                        .unwrap_or_default();
                    ChartCell {
                        slot,
                        individual_id,
                        label,
                        start_col: slot * span,
                        span,
                        font_size_pt: font_size_for(generation),
                        vertical: deepest,
                        centered: true,
                    }
                })
                .collect();

            rows.push(ChartRow {
                generation,
                height_cm: deepest.then_some(DEEPEST_ROW_HEIGHT_CM),
                cells,
            });
        }

        Ok(Self { root_id: root_id.to_string(), depth, rows })
    }

    /// Number of grid columns: `2^(depth - 1)`.
    pub fn columns(&self) -> usize {
        column_count(self.depth)
    }

    /// Labels of one generation, in slot order.
    pub fn labels(&self, generation: u32) -> Vec<&str> {
        self.rows
            .get(generation as usize)
            .map(|row| row.cells.iter().map(|cell| cell.label.as_str()).collect())
            .unwrap_or_default()
    }
}

pub fn validate_depth(depth: u32) -> Result<(), ChartError> {
    if depth == 0 || depth > MAX_DEPTH {
        return Err(ChartError::InvalidDepth { depth, max: MAX_DEPTH });
    }
    Ok(())
}

fn column_count(depth: u32) -> usize {
    1usize << depth.saturating_sub(1)
}

pub fn font_size_for(generation: u32) -> u32 {
    BASE_FONT_PT.saturating_sub(generation).max(MIN_FONT_PT)
}

/// Collect the occupants of one generation's `2^generation` slots.
///
/// Breadth-first from the root; each queued entry carries its slot index so
/// a branch that ends early leaves holes in place. Run once per generation.
/// `generation` must lie inside a chart of at most `MAX_DEPTH` generations.
pub fn generation_slots(
    model: &FamilyModel,
    root_id: &str,
    generation: u32,
) -> Result<Vec<Option<String>>, ChartError> {
    validate_depth(generation.saturating_add(1))?;
    let mut slots: Vec<Option<String>> = vec![None; 1usize << generation];
    let mut queue: VecDeque<(&Individual, u32, usize)> = VecDeque::new();
    if let Some(root) = model.get(root_id) {
        queue.push_back((root, 0, 0));
    }

    while let Some((person, gen, index)) = queue.pop_front() {
        if gen == generation {
            slots[index] = Some(person.id.clone());
            continue;
        }
        let (father, mother) = model.parents(person);
        if let Some(father) = father {
            queue.push_back((father, gen + 1, index * 2));
        }
        if let Some(mother) = mother {
            queue.push_back((mother, gen + 1, index * 2 + 1));
        }
    }

    Ok(slots)
}
