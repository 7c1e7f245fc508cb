//! # Domain models for workout templates
//!
//! Defines the persisted shape of a workout template and its building
//! blocks. These types are `Serialize + Deserialize` so a saved template
//! can cross a storage or network boundary unchanged.
//!
//! ## Types
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`Block`] | One entry in a template's ordered block list. Tagged union over exercise and rest blocks; serializes with a `"type"` tag (`"exercise"` / `"rest"`). |
//! | [`ExerciseBlock`] | A named exercise with typed numeric fields: sets, target reps, and rest between sets in seconds, plus free-form notes. |
//! | [`RestBlock`] | A standalone rest timer with a display label and a duration in seconds. |
//! | [`Template`] | A named, ordered list of blocks owned by one user, with creation and last-update timestamps in epoch milliseconds. |
//!
//! Block ids are assigned once at creation via [`crate::new_id`] and are
//! never regenerated; they stay stable across edits, reorders, and saves.

use serde::{Deserialize, Serialize};

use crate::id::{new_id, now_millis};

/// One block in a template's ordered list.
///
/// The editing UI works on a string-backed draft form of this enum and
/// converts back on save, so every numeric field here is already
/// validated by the time a value lands in these types.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Block {
    Exercise(ExerciseBlock),
    Rest(RestBlock),
}

impl Block {
    /// Stable identifier, unique within a template.
    pub fn id(&self) -> &str {
        match self {
            Block::Exercise(block) => &block.id,
            Block::Rest(block) => &block.id,
        }
    }
}

/// A named exercise with its set/rep scheme.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExerciseBlock {
    /// Opaque id: "exercise-{millis}-{hex}"
    pub id: String,
    /// Exercise name: "Back Squat"
    pub name: String,
    /// Number of working sets, 1 to 6
    pub sets: u32,
    /// Target reps per set
    pub reps: u32,
    /// Optional cues or reminders
    pub notes: String,
    /// Rest between sets, in seconds
    pub rest_between_sets_secs: u32,
}

impl ExerciseBlock {
    /// Fresh exercise with the builder defaults: one set of ten, a
    /// minute of rest, name and notes left for the user to fill in.
    pub fn new() -> Self {
        Self {
            id: new_id("exercise"),
            name: String::new(),
            sets: 1,
            reps: 10,
            notes: String::new(),
            rest_between_sets_secs: 60,
        }
    }
}

impl Default for ExerciseBlock {
    fn default() -> Self {
        Self::new()
    }
}

/// A standalone rest timer between exercises.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RestBlock {
    /// Opaque id: "rest-{millis}-{hex}"
    pub id: String,
    /// Display label, "Rest" by default; not user-editable
    pub name: String,
    /// Timer length in seconds, always > 0 once saved
    pub duration_secs: u32,
}

impl RestBlock {
    /// Fresh rest timer with the builder default of sixty seconds.
    pub fn new() -> Self {
        Self {
            id: new_id("rest"),
            name: "Rest".to_string(),
            duration_secs: 60,
        }
    }
}

impl Default for RestBlock {
    fn default() -> Self {
        Self::new()
    }
}

/// A saved workout template: an ordered block list plus ownership and
/// bookkeeping fields.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Template {
    /// Opaque id: "template-{millis}-{hex}"
    pub id: String,
    /// Display name, trimmed on save
    pub name: String,
    /// Ordered blocks, top to bottom
    pub blocks: Vec<Block>,
    /// Epoch milliseconds, set once at creation
    pub created_at: i64,
    /// Epoch milliseconds, refreshed on every save
    pub updated_at: i64,
    /// Owning user; immutable after creation
    pub user_id: String,
}

impl Template {
    /// Create an empty template owned by `user_id`. It only becomes
    /// part of the saved collection once a valid save upserts it.
    pub fn new(user_id: &str) -> Self {
        let now = now_millis();
        Self {
            id: new_id("template"),
            name: String::new(),
            blocks: Vec::new(),
            created_at: now,
            updated_at: now,
            user_id: user_id.to_string(),
        }
    }
}
