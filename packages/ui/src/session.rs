//! Session context and hooks for the UI.

use dioxus::prelude::*;
use store::Template;

/// Identity for the current app session.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    /// Logged-in username, or None before login.
    pub username: Option<String>,
}

impl SessionState {
    pub fn logged_in(&self) -> bool {
        self.username.is_some()
    }
}

/// Get the current session state.
/// Returns a signal that updates when the user logs in.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// Get the template currently open in the builder, if any.
///
/// The menu view places a template here before navigating to the
/// builder; freshly created templates live only in this signal until
/// their first save.
pub fn use_active_template() -> Signal<Option<Template>> {
    use_context::<Signal<Option<Template>>>()
}

/// Provider component that owns per-session state.
/// Wrap the router with this component so every view can reach it.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let session = use_signal(SessionState::default);
    use_context_provider(|| session);

    let active_template = use_signal(|| Option::<Template>::None);
    use_context_provider(|| active_template);

    rsx! {
        {children}
    }
}
