use dioxus::prelude::*;
use store::Template;

const TEMPLATES_CSS: Asset = asset!("/assets/styling/templates.css");

/// Saved templates for the current user, one row per template.
#[component]
pub fn TemplateList(templates: Vec<Template>, on_open: EventHandler<String>) -> Element {
    rsx! {
        document::Stylesheet { href: TEMPLATES_CSS }

        section {
            class: "templates",
            aria_label: "Saved templates",

            div {
                class: "templates-header",
                h2 { "Saved Workout Templates" }
                span { class: "templates-count", "{templates.len()} total" }
            }

            if templates.is_empty() {
                p {
                    class: "templates-empty",
                    "No templates yet. Create your first one."
                }
            } else {
                ul {
                    class: "templates-list",
                    for template in &templates {
                        li {
                            key: "{template.id}",
                            button {
                                class: "templates-item",
                                onclick: {
                                    let id = template.id.clone();
                                    move |_| on_open.call(id.clone())
                                },
                                div {
                                    class: "templates-item-info",
                                    span { class: "templates-item-name", "{template.name}" }
                                    span { class: "templates-item-blocks", "{template.blocks.len()} blocks" }
                                }
                                span { class: "templates-item-open", "Open" }
                            }
                        }
                    }
                }
            }
        }
    }
}
