mod component;
pub use component::TemplateBuilder;

pub mod draft;
pub mod editor;
pub mod validation;
