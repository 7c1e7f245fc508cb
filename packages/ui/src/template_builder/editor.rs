//! Operations on the builder's draft block list, plus the ephemeral
//! state of a reorder gesture.
//!
//! Every operation takes the target block's id and is a no-op for ids
//! that are not in the list, so stale events from the UI can never
//! corrupt the list.

use super::draft::DraftBlock;
use super::validation::is_digits;

/// A single editable field within a draft block.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DraftField {
    Name,
    Sets,
    Reps,
    Notes,
    RestBetweenSets,
    Duration,
}

/// Overwrite one field of the block with the given id.
///
/// Fields that do not exist on the block's variant (`Duration` on an
/// exercise, `Name` on a rest timer) are ignored.
pub fn update_field(blocks: &mut [DraftBlock], id: &str, field: DraftField, value: String) {
    let Some(block) = blocks.iter_mut().find(|b| b.id() == id) else {
        return;
    };
    match (block, field) {
        (DraftBlock::Exercise(b), DraftField::Name) => b.name = value,
        (DraftBlock::Exercise(b), DraftField::Sets) => b.sets_input = value,
        (DraftBlock::Exercise(b), DraftField::Reps) => b.reps_input = value,
        (DraftBlock::Exercise(b), DraftField::Notes) => b.notes = value,
        (DraftBlock::Exercise(b), DraftField::RestBetweenSets) => b.rest_between_sets_input = value,
        (DraftBlock::Rest(b), DraftField::Duration) => b.duration_input = value,
        _ => {}
    }
}

/// Remove the block with the given id.
pub fn remove_block(blocks: &mut Vec<DraftBlock>, id: &str) {
    blocks.retain(|b| b.id() != id);
}

/// Move the `from_id` block to the position currently held by `to_id`,
/// shifting the blocks in between. Dropping a block onto itself leaves
/// the list untouched.
pub fn reorder_blocks(blocks: &mut Vec<DraftBlock>, from_id: &str, to_id: &str) {
    if from_id == to_id {
        return;
    }
    let Some(from) = blocks.iter().position(|b| b.id() == from_id) else {
        return;
    };
    let Some(to) = blocks.iter().position(|b| b.id() == to_id) else {
        return;
    };
    let moved = blocks.remove(from);
    blocks.insert(to, moved);
}

/// Handle a rest duration input losing focus: a committed value of zero
/// removes the whole block. Text that fails the digit check stays put
/// for the validator to flag.
pub fn commit_rest_duration(blocks: &mut Vec<DraftBlock>, id: &str) {
    let committed_zero = match blocks.iter().find(|b| b.id() == id) {
        Some(DraftBlock::Rest(rest)) => {
            let trimmed = rest.duration_input.trim();
            is_digits(trimmed) && trimmed.parse::<u64>().unwrap_or(u64::MAX) == 0
        }
        _ => false,
    };
    if committed_zero {
        remove_block(blocks, id);
    }
}

/// State of an in-flight reorder gesture. Lives beside the draft list,
/// never inside it; an abandoned gesture leaves no trace.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DragState {
    dragging: Option<String>,
    over: Option<String>,
}

impl DragState {
    /// Start a gesture. The pressed block is its own first drop target.
    pub fn begin(&mut self, id: &str) {
        self.dragging = Some(id.to_string());
        self.over = Some(id.to_string());
    }

    /// Record the block currently under the pointer, or None over empty
    /// space. Ignored while no gesture is active.
    pub fn hover(&mut self, id: Option<String>) {
        if self.dragging.is_some() {
            self.over = id;
        }
    }

    /// End the gesture and clear it. Returns the (from, to) move to
    /// commit, or None when no drop target was established.
    pub fn finish(&mut self) -> Option<(String, String)> {
        match (self.dragging.take(), self.over.take()) {
            (Some(from), Some(to)) => Some((from, to)),
            _ => None,
        }
    }

    pub fn dragging(&self) -> Option<&str> {
        self.dragging.as_deref()
    }

    pub fn over(&self) -> Option<&str> {
        self.over.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use store::Block;

    use super::super::draft::{new_exercise_draft, new_rest_draft, to_template_blocks};
    use super::super::validation::validate;
    use super::*;

    fn list_with_ids(ids: &[&str]) -> Vec<DraftBlock> {
        ids.iter()
            .map(|id| {
                let mut block = new_exercise_draft();
                let DraftBlock::Exercise(ref mut exercise) = block else {
                    unreachable!();
                };
                exercise.id = id.to_string();
                block
            })
            .collect()
    }

    fn ids(blocks: &[DraftBlock]) -> Vec<&str> {
        blocks.iter().map(|b| b.id()).collect()
    }

    fn rest_with_duration(id: &str, duration: &str) -> DraftBlock {
        let mut block = new_rest_draft();
        let DraftBlock::Rest(ref mut rest) = block else {
            unreachable!();
        };
        rest.id = id.to_string();
        rest.duration_input = duration.to_string();
        block
    }

    #[test]
    fn test_update_field_touches_only_target() {
        let mut blocks = list_with_ids(&["a", "b"]);
        update_field(&mut blocks, "a", DraftField::Sets, "5".to_string());

        let DraftBlock::Exercise(first) = &blocks[0] else {
            unreachable!();
        };
        let DraftBlock::Exercise(second) = &blocks[1] else {
            unreachable!();
        };
        assert_eq!(first.sets_input, "5");
        assert_eq!(first.reps_input, "10");
        assert_eq!(second.sets_input, "1");
        assert_eq!(ids(&blocks), vec!["a", "b"]);
    }

    #[test]
    fn test_update_field_unknown_id_is_noop() {
        let mut blocks = list_with_ids(&["a"]);
        let before = blocks.clone();
        update_field(&mut blocks, "missing", DraftField::Name, "Row".to_string());
        assert_eq!(blocks, before);
    }

    #[test]
    fn test_update_field_wrong_variant_is_noop() {
        let mut blocks = vec![rest_with_duration("r", "60")];
        let before = blocks.clone();
        // Rest timers have no editable name and no sets
        update_field(&mut blocks, "r", DraftField::Name, "Break".to_string());
        update_field(&mut blocks, "r", DraftField::Sets, "3".to_string());
        assert_eq!(blocks, before);
    }

    #[test]
    fn test_remove_block() {
        let mut blocks = list_with_ids(&["a", "b", "c"]);
        remove_block(&mut blocks, "b");
        assert_eq!(ids(&blocks), vec!["a", "c"]);

        remove_block(&mut blocks, "b");
        assert_eq!(ids(&blocks), vec!["a", "c"]);
    }

    #[test]
    fn test_add_and_remove_preserve_id_set() {
        let mut blocks = vec![new_exercise_draft(), new_rest_draft(), new_exercise_draft()];
        let first = blocks[0].id().to_string();
        let dropped = blocks[1].id().to_string();
        let last = blocks[2].id().to_string();

        remove_block(&mut blocks, &dropped);

        assert_eq!(ids(&blocks), vec![first.as_str(), last.as_str()]);
    }

    #[test]
    fn test_reorder_forward() {
        // Dragging the first block onto the last: [a b c] -> [b c a]
        let mut blocks = list_with_ids(&["a", "b", "c"]);
        reorder_blocks(&mut blocks, "a", "c");
        assert_eq!(ids(&blocks), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_reorder_backward() {
        let mut blocks = list_with_ids(&["a", "b", "c"]);
        reorder_blocks(&mut blocks, "c", "a");
        assert_eq!(ids(&blocks), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_reorder_onto_self_is_noop() {
        let mut blocks = list_with_ids(&["a", "b", "c"]);
        reorder_blocks(&mut blocks, "b", "b");
        assert_eq!(ids(&blocks), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_reorder_unknown_id_is_noop() {
        let mut blocks = list_with_ids(&["a", "b"]);
        reorder_blocks(&mut blocks, "missing", "a");
        reorder_blocks(&mut blocks, "a", "missing");
        assert_eq!(ids(&blocks), vec!["a", "b"]);
    }

    #[test]
    fn test_edited_defaults_produce_a_valid_save() {
        // A fresh exercise only needs a name and a reps value on top of
        // its defaults to become saveable
        let mut blocks = vec![new_exercise_draft()];
        let id = blocks[0].id().to_string();
        update_field(&mut blocks, &id, DraftField::Name, "Back Squat".to_string());
        update_field(&mut blocks, &id, DraftField::Reps, "8".to_string());

        assert!(validate("Leg Day", &blocks).is_valid());

        let saved = to_template_blocks(&blocks);
        let Block::Exercise(block) = &saved[0] else {
            unreachable!();
        };
        assert_eq!(block.name, "Back Squat");
        assert_eq!(block.sets, 1);
        assert_eq!(block.reps, 8);
    }

    #[test]
    fn test_overlong_digits_save_clamped() {
        let mut blocks = vec![new_exercise_draft(), rest_with_duration("r", "4294967296")];
        let exercise_id = blocks[0].id().to_string();
        update_field(&mut blocks, &exercise_id, DraftField::Name, "Row".to_string());
        update_field(&mut blocks, &exercise_id, DraftField::Reps, "4294967296".to_string());

        // Huge digit strings pass validation, so the save must keep
        // them huge instead of zeroing them
        assert!(validate("Leg Day", &blocks).is_valid());

        let saved = to_template_blocks(&blocks);
        let Block::Exercise(block) = &saved[0] else {
            unreachable!();
        };
        assert_eq!(block.reps, u32::MAX);
        let Block::Rest(block) = &saved[1] else {
            unreachable!();
        };
        assert_eq!(block.duration_secs, u32::MAX);
    }

    #[test]
    fn test_commit_zero_duration_removes_block() {
        let mut blocks = vec![rest_with_duration("r", "0")];
        commit_rest_duration(&mut blocks, "r");
        assert!(blocks.is_empty());
    }

    #[test]
    fn test_commit_padded_zero_removes_block() {
        let mut blocks = vec![rest_with_duration("r", " 0 ")];
        commit_rest_duration(&mut blocks, "r");
        assert!(blocks.is_empty());
    }

    #[test]
    fn test_commit_positive_duration_keeps_block() {
        let mut blocks = vec![rest_with_duration("r", "45")];
        commit_rest_duration(&mut blocks, "r");
        assert_eq!(ids(&blocks), vec!["r"]);
    }

    #[test]
    fn test_commit_invalid_text_keeps_block() {
        // Not a digit string, so the validator reports it instead
        let mut blocks = vec![rest_with_duration("r", "soon")];
        commit_rest_duration(&mut blocks, "r");
        assert_eq!(ids(&blocks), vec!["r"]);

        let mut blocks = vec![rest_with_duration("r", "-0")];
        commit_rest_duration(&mut blocks, "r");
        assert_eq!(ids(&blocks), vec!["r"]);
    }

    #[test]
    fn test_commit_ignores_exercise_blocks() {
        let mut blocks = list_with_ids(&["a"]);
        commit_rest_duration(&mut blocks, "a");
        assert_eq!(ids(&blocks), vec!["a"]);
    }

    #[test]
    fn test_drag_begin_targets_self() {
        let mut drag = DragState::default();
        drag.begin("a");
        assert_eq!(drag.dragging(), Some("a"));
        assert_eq!(drag.over(), Some("a"));
        assert_eq!(drag.finish(), Some(("a".to_string(), "a".to_string())));
    }

    #[test]
    fn test_drag_tracks_latest_hover() {
        let mut drag = DragState::default();
        drag.begin("a");
        drag.hover(Some("b".to_string()));
        drag.hover(Some("c".to_string()));
        assert_eq!(drag.over(), Some("c"));
        assert_eq!(drag.finish(), Some(("a".to_string(), "c".to_string())));
        // Finishing clears the gesture
        assert_eq!(drag.dragging(), None);
        assert_eq!(drag.over(), None);
    }

    #[test]
    fn test_drag_over_empty_space_commits_nothing() {
        let mut drag = DragState::default();
        drag.begin("a");
        drag.hover(None);
        assert_eq!(drag.finish(), None);
    }

    #[test]
    fn test_hover_without_gesture_is_ignored() {
        let mut drag = DragState::default();
        drag.hover(Some("b".to_string()));
        assert_eq!(drag.over(), None);
        assert_eq!(drag.finish(), None);
    }
}
