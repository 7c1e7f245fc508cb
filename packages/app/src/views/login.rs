//! Login view: a two-step username prompt with no password.

use dioxus::prelude::*;
use ui::{use_session, SessionState};

use crate::Route;

#[component]
pub fn Login() -> Element {
    let mut session = use_session();
    let nav = use_navigator();
    let mut prompting = use_signal(|| false);
    let mut username = use_signal(String::new);

    // Already logged in, go straight to the menu
    if session().logged_in() {
        nav.replace(Route::Templates {});
    }

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let trimmed = username().trim().to_string();
        if trimmed.is_empty() {
            return;
        }
        tracing::info!("logged in as {trimmed}");
        session.set(SessionState {
            username: Some(trimmed),
        });
        nav.push(Route::Templates {});
    };

    rsx! {
        section {
            class: "login",
            if prompting() {
                form {
                    class: "login-form",
                    onsubmit: handle_submit,
                    label {
                        class: "field",
                        span { "Username" }
                        input {
                            r#type: "text",
                            placeholder: "Enter your username",
                            autofocus: true,
                            value: username(),
                            oninput: move |evt: FormEvent| username.set(evt.value()),
                        }
                    }
                    p { class: "login-hint", "Enter a username, then press Enter." }
                }
            } else {
                button {
                    class: "primary-button",
                    r#type: "button",
                    onclick: move |_| prompting.set(true),
                    "Login"
                }
            }
        }
    }
}
