//! This crate contains all shared UI for the workspace.

mod session;
pub use session::{use_active_template, use_session, SessionProvider, SessionState};

mod template_list;
pub use template_list::TemplateList;

pub mod template_builder;
pub use template_builder::TemplateBuilder;
