//! Validation of the draft template, recomputed whole on every change.
//!
//! Rules run top to bottom and the first failure wins per block, so a
//! block shows at most one message at a time and fixing fields in order
//! walks the user through the form. Numeric text must be plain ASCII
//! digits after trimming; a sign or decimal point fails the check.

use std::collections::HashMap;

use super::draft::{DraftBlock, DraftExercise, DraftRest};

/// Upper bound on the sets count for a single exercise.
pub const MAX_SETS: u64 = 6;

/// Per-field validation report for the whole draft.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Validation {
    /// Error for the template name field, if any.
    pub name_error: Option<String>,
    /// Error shown when the block list is empty.
    pub blocks_error: Option<String>,
    /// First failing rule per block, keyed by block id.
    pub block_errors: HashMap<String, String>,
}

impl Validation {
    /// Saving is permitted only when this holds.
    pub fn is_valid(&self) -> bool {
        self.name_error.is_none() && self.blocks_error.is_none() && self.block_errors.is_empty()
    }
}

/// Validate the draft template name and block list.
pub fn validate(name: &str, blocks: &[DraftBlock]) -> Validation {
    let mut report = Validation::default();

    if name.trim().is_empty() {
        report.name_error = Some("Template name is required.".to_string());
    }

    for block in blocks {
        let error = match block {
            DraftBlock::Exercise(block) => exercise_error(block),
            DraftBlock::Rest(block) => rest_error(block),
        };
        if let Some(error) = error {
            report.block_errors.insert(block.id().to_string(), error);
        }
    }

    if blocks.is_empty() {
        report.blocks_error = Some("Add at least one block to save a template.".to_string());
    }

    report
}

/// First failing rule for an exercise, in field order.
fn exercise_error(block: &DraftExercise) -> Option<String> {
    if block.name.trim().is_empty() {
        return Some("Exercise name is required.".to_string());
    }

    let sets = block.sets_input.trim();
    if sets.is_empty() {
        return Some("Sets are required.".to_string());
    }
    if !is_digits(sets) {
        return Some("Sets must be a number.".to_string());
    }
    // All-digit text too large for u64 still counts as a huge value
    let sets_value = sets.parse::<u64>().unwrap_or(u64::MAX);
    if sets_value < 1 {
        return Some("Each exercise needs at least 1 set.".to_string());
    }
    if sets_value > MAX_SETS {
        return Some(format!("Max sets is {MAX_SETS}."));
    }

    let reps = block.reps_input.trim();
    if reps.is_empty() {
        return Some("Target reps are required.".to_string());
    }
    if !is_digits(reps) {
        return Some("Target reps must be a number.".to_string());
    }

    let rest = block.rest_between_sets_input.trim();
    if rest.is_empty() {
        return Some("Rest between sets is required.".to_string());
    }
    if !is_digits(rest) {
        return Some("Rest between sets must be a number.".to_string());
    }

    // Only sets has range rules; reps and rest accept any digit string,
    // zero included.
    None
}

fn rest_error(block: &DraftRest) -> Option<String> {
    let duration = block.duration_input.trim();
    if duration.is_empty() {
        return Some("Rest duration is required.".to_string());
    }
    if !is_digits(duration) {
        return Some("Rest duration must be a number.".to_string());
    }
    if duration.parse::<u64>().unwrap_or(u64::MAX) == 0 {
        return Some("Rest must be greater than 0 seconds.".to_string());
    }
    None
}

/// One or more ASCII digits and nothing else.
pub(crate) fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
