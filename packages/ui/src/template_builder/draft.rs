//! # Draft form of the template block list
//!
//! The builder edits blocks through these string-backed mirrors of the
//! persisted [`store::Block`] types: every numeric field holds the raw
//! text of its input element, so half-typed or invalid numbers are
//! representable without losing what the user wrote.
//!
//! Conversions are pure, total, and order-preserving in both
//! directions. Draft to persisted parses base 10: text that does not
//! parse falls back to 0 and never reaches a saved template because
//! saving is gated on [`super::validation`] first, while all-digit
//! text too large for a `u32` saturates to `u32::MAX`, the same
//! huge-value reading the validator applies in its range checks.

use store::{Block, ExerciseBlock, RestBlock};

use super::validation::is_digits;

/// Editable form of an exercise block.
#[derive(Clone, Debug, PartialEq)]
pub struct DraftExercise {
    pub id: String,
    pub name: String,
    pub sets_input: String,
    pub reps_input: String,
    pub notes: String,
    pub rest_between_sets_input: String,
}

/// Editable form of a rest block. The label is carried through
/// unchanged; only the duration is editable.
#[derive(Clone, Debug, PartialEq)]
pub struct DraftRest {
    pub id: String,
    pub name: String,
    pub duration_input: String,
}

/// One block in the builder's editable list.
#[derive(Clone, Debug, PartialEq)]
pub enum DraftBlock {
    Exercise(DraftExercise),
    Rest(DraftRest),
}

impl DraftBlock {
    /// Stable identifier, shared with the persisted block.
    pub fn id(&self) -> &str {
        match self {
            DraftBlock::Exercise(block) => &block.id,
            DraftBlock::Rest(block) => &block.id,
        }
    }
}

/// Convert persisted blocks into their editable draft form.
pub fn to_draft_blocks(blocks: &[Block]) -> Vec<DraftBlock> {
    blocks.iter().map(to_draft_block).collect()
}

fn to_draft_block(block: &Block) -> DraftBlock {
    match block {
        Block::Exercise(block) => DraftBlock::Exercise(DraftExercise {
            id: block.id.clone(),
            name: block.name.clone(),
            sets_input: block.sets.to_string(),
            reps_input: block.reps.to_string(),
            notes: block.notes.clone(),
            rest_between_sets_input: block.rest_between_sets_secs.to_string(),
        }),
        Block::Rest(block) => DraftBlock::Rest(DraftRest {
            id: block.id.clone(),
            name: block.name.clone(),
            duration_input: block.duration_secs.to_string(),
        }),
    }
}

/// Convert drafts back into persisted blocks. Exercise names are
/// trimmed; rest labels pass through untouched.
pub fn to_template_blocks(drafts: &[DraftBlock]) -> Vec<Block> {
    drafts
        .iter()
        .map(|draft| match draft {
            DraftBlock::Exercise(draft) => Block::Exercise(ExerciseBlock {
                id: draft.id.clone(),
                name: draft.name.trim().to_string(),
                sets: parse_input(&draft.sets_input),
                reps: parse_input(&draft.reps_input),
                notes: draft.notes.clone(),
                rest_between_sets_secs: parse_input(&draft.rest_between_sets_input),
            }),
            DraftBlock::Rest(draft) => Block::Rest(RestBlock {
                id: draft.id.clone(),
                name: draft.name.clone(),
                duration_secs: parse_input(&draft.duration_input),
            }),
        })
        .collect()
}

fn parse_input(input: &str) -> u32 {
    let trimmed = input.trim();
    match trimmed.parse::<u32>() {
        Ok(value) => value,
        // Digit strings only fail to parse by overflowing u32
        Err(_) if is_digits(trimmed) => u32::MAX,
        Err(_) => 0,
    }
}

/// Fresh draft exercise with the persisted defaults and a new id.
pub fn new_exercise_draft() -> DraftBlock {
    to_draft_block(&Block::Exercise(ExerciseBlock::new()))
}

/// Fresh draft rest timer with the persisted defaults and a new id.
pub fn new_rest_draft() -> DraftBlock {
    to_draft_block(&Block::Rest(RestBlock::new()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exercise(id: &str, name: &str, sets: u32, reps: u32, rest: u32) -> Block {
        Block::Exercise(ExerciseBlock {
            id: id.to_string(),
            name: name.to_string(),
            sets,
            reps,
            notes: String::new(),
            rest_between_sets_secs: rest,
        })
    }

    fn rest(id: &str, duration: u32) -> Block {
        Block::Rest(RestBlock {
            id: id.to_string(),
            name: "Rest".to_string(),
            duration_secs: duration,
        })
    }

    #[test]
    fn test_to_draft_stringifies_numbers() {
        let drafts = to_draft_blocks(&[exercise("e1", "Back Squat", 3, 8, 90), rest("r1", 120)]);
        assert_eq!(drafts.len(), 2);

        let DraftBlock::Exercise(squat) = &drafts[0] else {
            panic!("expected exercise draft");
        };
        assert_eq!(squat.id, "e1");
        assert_eq!(squat.sets_input, "3");
        assert_eq!(squat.reps_input, "8");
        assert_eq!(squat.rest_between_sets_input, "90");

        let DraftBlock::Rest(pause) = &drafts[1] else {
            panic!("expected rest draft");
        };
        assert_eq!(pause.duration_input, "120");
    }

    #[test]
    fn test_roundtrip_preserves_valid_blocks() {
        let blocks = vec![
            exercise("e1", "Back Squat", 3, 8, 90),
            rest("r1", 120),
            exercise("e2", "Bench Press", 5, 5, 180),
        ];
        let roundtripped = to_template_blocks(&to_draft_blocks(&blocks));
        assert_eq!(roundtripped, blocks);
    }

    #[test]
    fn test_to_template_trims_exercise_name_only() {
        let mut drafts = to_draft_blocks(&[exercise("e1", "x", 1, 10, 60)]);
        let DraftBlock::Exercise(draft) = &mut drafts[0] else {
            panic!("expected exercise draft");
        };
        draft.name = "  Back Squat  ".to_string();

        let blocks = to_template_blocks(&drafts);
        let Block::Exercise(block) = &blocks[0] else {
            panic!("expected exercise block");
        };
        assert_eq!(block.name, "Back Squat");
    }

    #[test]
    fn test_unparseable_input_falls_back_to_zero() {
        let mut drafts = to_draft_blocks(&[exercise("e1", "Row", 3, 8, 60)]);
        let DraftBlock::Exercise(draft) = &mut drafts[0] else {
            panic!("expected exercise draft");
        };
        draft.sets_input = "lots".to_string();
        draft.reps_input = " 12 ".to_string();

        let blocks = to_template_blocks(&drafts);
        let Block::Exercise(block) = &blocks[0] else {
            panic!("expected exercise block");
        };
        assert_eq!(block.sets, 0);
        // Surrounding whitespace is fine, the text is trimmed first
        assert_eq!(block.reps, 12);
    }

    #[test]
    fn test_overflowing_digits_clamp_to_max() {
        let mut drafts = to_draft_blocks(&[exercise("e1", "Row", 3, 8, 60), rest("r1", 60)]);
        let DraftBlock::Exercise(row) = &mut drafts[0] else {
            panic!("expected exercise draft");
        };
        // One past u32::MAX
        row.reps_input = "4294967296".to_string();
        let DraftBlock::Rest(pause) = &mut drafts[1] else {
            panic!("expected rest draft");
        };
        pause.duration_input = "99999999999999999999".to_string();

        let blocks = to_template_blocks(&drafts);
        let Block::Exercise(block) = &blocks[0] else {
            panic!("expected exercise block");
        };
        assert_eq!(block.reps, u32::MAX);
        let Block::Rest(block) = &blocks[1] else {
            panic!("expected rest block");
        };
        assert_eq!(block.duration_secs, u32::MAX);
    }

    #[test]
    fn test_new_drafts_carry_defaults() {
        let DraftBlock::Exercise(exercise) = new_exercise_draft() else {
            panic!("expected exercise draft");
        };
        assert!(exercise.id.starts_with("exercise-"));
        assert!(exercise.name.is_empty());
        assert_eq!(exercise.sets_input, "1");
        assert_eq!(exercise.reps_input, "10");
        assert_eq!(exercise.rest_between_sets_input, "60");

        let DraftBlock::Rest(rest) = new_rest_draft() else {
            panic!("expected rest draft");
        };
        assert!(rest.id.starts_with("rest-"));
        assert_eq!(rest.name, "Rest");
        assert_eq!(rest.duration_input, "60");
    }

    #[test]
    fn test_new_drafts_get_distinct_ids() {
        assert_ne!(new_exercise_draft().id(), new_exercise_draft().id());
    }
}
