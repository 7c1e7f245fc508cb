pub mod id;
pub mod models;

mod memory;
pub use memory::MemoryStore;

pub use id::{new_id, now_millis};
pub use models::{Block, ExerciseBlock, RestBlock, Template};
