//! Menu view: primary navigation plus the saved-template list.

use dioxus::prelude::*;
use store::{MemoryStore, Template};
use ui::{use_active_template, use_session, TemplateList};

use crate::Route;

/// Menu entries that exist in the nav but lead nowhere yet.
const MENU_ITEMS: [&str; 2] = ["Log Workout", "Workout History"];

#[component]
pub fn Templates() -> Element {
    let store = use_context::<MemoryStore>();
    let session = use_session();
    let mut active = use_active_template();
    let nav = use_navigator();

    let Some(username) = session().username else {
        nav.replace(Route::Login {});
        return rsx! {};
    };

    let templates = store.templates_for(&username);

    let handle_create = {
        let username = username.clone();
        move |_| {
            let template = Template::new(&username);
            tracing::debug!("created template {}", template.id);
            active.set(Some(template));
            nav.push(Route::Builder {});
        }
    };

    let handle_open = {
        let store = store.clone();
        move |id: String| {
            let Some(template) = store.get(&id) else {
                return;
            };
            active.set(Some(template));
            nav.push(Route::Builder {});
        }
    };

    rsx! {
        section {
            class: "menu",

            nav {
                class: "menu-nav",
                aria_label: "Primary",
                button {
                    class: "menu-item",
                    onclick: handle_create,
                    "Create Template"
                }
                for item in MENU_ITEMS {
                    button { class: "menu-item", key: "{item}", "{item}" }
                }
            }

            TemplateList { templates: templates, on_open: handle_open }
        }
    }
}
