use std::sync::{Arc, Mutex};

use crate::models::Template;

/// In-memory collection of saved templates for the current session.
///
/// Cheap to clone; all clones share the same underlying list. Backed by
/// a `Vec` so the saved list keeps insertion order: an upsert of an
/// existing id replaces the template in place, a new id appends.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    templates: Arc<Mutex<Vec<Template>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace by template id.
    pub fn upsert(&self, template: Template) {
        let mut templates = self.templates.lock().unwrap();
        match templates.iter_mut().find(|t| t.id == template.id) {
            Some(existing) => *existing = template,
            None => templates.push(template),
        }
    }

    pub fn get(&self, id: &str) -> Option<Template> {
        self.templates
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.id == id)
            .cloned()
    }

    /// Templates owned by `user_id`, in insertion order.
    pub fn templates_for(&self, user_id: &str) -> Vec<Template> {
        self.templates
            .lock()
            .unwrap()
            .iter()
            .filter(|t| t.user_id == user_id)
            .cloned()
            .collect()
    }
}
