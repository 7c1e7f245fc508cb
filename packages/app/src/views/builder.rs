//! Builder view: mounts the template builder for the active template.

use dioxus::prelude::*;
use store::{MemoryStore, Template};
use ui::{use_active_template, use_session, TemplateBuilder};

use crate::Route;

#[component]
pub fn Builder() -> Element {
    let store = use_context::<MemoryStore>();
    let session = use_session();
    let mut active = use_active_template();
    let nav = use_navigator();

    if !session().logged_in() {
        nav.replace(Route::Login {});
        return rsx! {};
    }

    // Nothing to edit, e.g. a deep link straight to /builder
    let Some(template) = active() else {
        nav.replace(Route::Templates {});
        return rsx! {};
    };

    let handle_save = {
        let store = store.clone();
        move |saved: Template| {
            tracing::info!("saved template {}", saved.id);
            store.upsert(saved.clone());
            active.set(Some(saved));
            nav.push(Route::Templates {});
        }
    };

    let handle_exit = move |_| {
        nav.push(Route::Templates {});
    };

    rsx! {
        TemplateBuilder {
            key: "{template.id}",
            template: template.clone(),
            on_save: handle_save,
            on_exit: handle_exit,
        }
    }
}
