use dioxus::prelude::*;
use serde::Deserialize;
use store::{now_millis, Template};

use super::draft::{
    new_exercise_draft, new_rest_draft, to_draft_blocks, to_template_blocks, DraftBlock,
};
use super::editor::{
    commit_rest_duration, remove_block, reorder_blocks, update_field, DragState, DraftField,
};
use super::validation::validate;

const BUILDER_CSS: Asset = asset!("/assets/styling/builder.css");

/// Message sent back from the drag bridge while a gesture is active.
#[derive(Debug, Deserialize)]
struct DragMessage {
    kind: String,
    id: Option<String>,
}

/// The template builder: edits one template's name and block list as a
/// string-backed draft, validates on every change, and hands the typed
/// template back on save.
#[component]
pub fn TemplateBuilder(
    /// Template to edit; its id keys all local draft state.
    template: Template,
    /// Called with the updated template after a valid save.
    on_save: EventHandler<Template>,
    /// Called when the user leaves without saving; edits are dropped.
    on_exit: EventHandler<()>,
) -> Element {
    let mut name = use_signal(|| template.name.clone());
    let mut blocks = use_signal(|| to_draft_blocks(&template.blocks));
    let mut show_add_menu = use_signal(|| false);
    let mut drag = use_signal(DragState::default);

    // Re-seed draft state when a different template is opened into an
    // already-mounted builder
    let mut tracked_id = use_signal(|| template.id.clone());
    if *tracked_id.peek() != template.id {
        tracked_id.set(template.id.clone());
        name.set(template.name.clone());
        blocks.set(to_draft_blocks(&template.blocks));
        show_add_menu.set(false);
        drag.set(DragState::default());
    }

    let validation = use_memo(move || validate(&name.read(), &blocks.read()));
    let report = validation();

    let handle_save = {
        let template = template.clone();
        move |_| {
            if !validation().is_valid() {
                tracing::warn!("save rejected: template {} failed validation", template.id);
                return;
            }
            let saved = Template {
                name: name().trim().to_string(),
                blocks: to_template_blocks(&blocks()),
                updated_at: now_millis(),
                ..template.clone()
            };
            on_save.call(saved);
        }
    };

    rsx! {
        document::Stylesheet { href: BUILDER_CSS }

        section {
            class: "builder",
            aria_label: "Template builder",

            header {
                class: "builder-header",
                button {
                    class: "ghost-button",
                    r#type: "button",
                    onclick: move |_| on_exit.call(()),
                    "Back"
                }
                div {
                    class: "builder-title",
                    label {
                        class: "field",
                        span { "Template Name" }
                        input {
                            class: if report.name_error.is_some() { "builder-name is-invalid" } else { "builder-name" },
                            r#type: "text",
                            placeholder: "Template name",
                            value: name(),
                            oninput: move |evt: FormEvent| name.set(evt.value()),
                        }
                    }
                    if let Some(error) = report.name_error.as_ref() {
                        p { class: "field-error", "{error}" }
                    }
                }
            }

            div {
                class: "builder-canvas",
                if blocks().is_empty() {
                    div {
                        class: "builder-empty",
                        p { "Add exercise or rest blocks to start building your template." }
                    }
                } else {
                    for block in blocks() {
                        BlockCard {
                            key: "{block.id()}",
                            error: report.block_errors.get(block.id()).cloned(),
                            drag: drag,
                            blocks: blocks,
                            block: block.clone(),
                        }
                    }
                }
            }

            if let Some(error) = report.blocks_error.as_ref() {
                p { class: "field-error builder-blocks-error", "{error}" }
            }

            footer {
                class: "builder-footer",
                div {
                    class: "add-block",
                    button {
                        class: "ghost-button",
                        r#type: "button",
                        onclick: move |_| show_add_menu.set(!show_add_menu()),
                        "+ Add Block"
                    }
                    if show_add_menu() {
                        div {
                            class: "add-menu",
                            button {
                                r#type: "button",
                                onclick: move |_| {
                                    blocks.with_mut(|list| list.push(new_exercise_draft()));
                                    show_add_menu.set(false);
                                },
                                "Exercise"
                            }
                            button {
                                r#type: "button",
                                onclick: move |_| {
                                    blocks.with_mut(|list| list.push(new_rest_draft()));
                                    show_add_menu.set(false);
                                },
                                "Rest Timer"
                            }
                        }
                    }
                }
                button {
                    class: "primary-button",
                    r#type: "button",
                    disabled: !report.is_valid(),
                    onclick: handle_save,
                    "Save Template"
                }
            }
        }
    }
}

/// One block card: drag handle, per-variant fields, error line, remove.
#[component]
fn BlockCard(
    block: DraftBlock,
    error: Option<String>,
    mut drag: Signal<DragState>,
    mut blocks: Signal<Vec<DraftBlock>>,
) -> Element {
    let id = block.id().to_string();
    let kind_label = match block {
        DraftBlock::Exercise(_) => "Exercise",
        DraftBlock::Rest(_) => "Rest Timer",
    };

    let mut card_class = String::from("builder-block");
    if drag.read().dragging() == Some(id.as_str()) {
        card_class.push_str(" is-dragging");
    }
    if drag.read().over() == Some(id.as_str()) {
        card_class.push_str(" is-over");
    }

    rsx! {
        article {
            class: "{card_class}",
            "data-block-id": "{id}",

            div {
                class: "block-header",
                div {
                    class: "block-drag-handle",
                    role: "button",
                    aria_label: "Reorder block",
                    "data-drag-handle": "{id}",
                    onpointerdown: {
                        let id = id.clone();
                        move |evt: PointerEvent| {
                            let pointer_id = evt.pointer_id();
                            drag.write().begin(&id);
                            spawn(track_drag(id.clone(), pointer_id, drag, blocks));
                        }
                    },
                    span {}
                    span {}
                    span {}
                }
                span { class: "block-kind", "{kind_label}" }
                button {
                    class: "block-remove",
                    r#type: "button",
                    aria_label: "Remove block",
                    onclick: {
                        let id = id.clone();
                        move |_| blocks.with_mut(|list| remove_block(list, &id))
                    },
                    "x"
                }
            }

            if let DraftBlock::Exercise(ref draft) = block {
                label {
                    class: "field",
                    span { "Exercise" }
                    input {
                        r#type: "text",
                        placeholder: "Exercise name",
                        value: "{draft.name}",
                        oninput: {
                            let id = id.clone();
                            move |evt: FormEvent| {
                                blocks.with_mut(|list| update_field(list, &id, DraftField::Name, evt.value()))
                            }
                        },
                    }
                }
                div {
                    class: "field-row",
                    label {
                        class: "field",
                        span { "Sets" }
                        input {
                            r#type: "text",
                            inputmode: "numeric",
                            value: "{draft.sets_input}",
                            oninput: {
                                let id = id.clone();
                                move |evt: FormEvent| {
                                    blocks.with_mut(|list| update_field(list, &id, DraftField::Sets, evt.value()))
                                }
                            },
                        }
                    }
                    label {
                        class: "field",
                        span { "Target Reps" }
                        input {
                            r#type: "text",
                            inputmode: "numeric",
                            value: "{draft.reps_input}",
                            oninput: {
                                let id = id.clone();
                                move |evt: FormEvent| {
                                    blocks.with_mut(|list| update_field(list, &id, DraftField::Reps, evt.value()))
                                }
                            },
                        }
                    }
                    label {
                        class: "field",
                        span { "Rest Between Sets (seconds)" }
                        input {
                            r#type: "text",
                            inputmode: "numeric",
                            value: "{draft.rest_between_sets_input}",
                            oninput: {
                                let id = id.clone();
                                move |evt: FormEvent| {
                                    blocks.with_mut(|list| {
                                        update_field(list, &id, DraftField::RestBetweenSets, evt.value())
                                    })
                                }
                            },
                        }
                    }
                }
                label {
                    class: "field",
                    span { "Notes" }
                    textarea {
                        rows: 2,
                        placeholder: "Optional cues or reminders",
                        value: "{draft.notes}",
                        oninput: {
                            let id = id.clone();
                            move |evt: FormEvent| {
                                blocks.with_mut(|list| update_field(list, &id, DraftField::Notes, evt.value()))
                            }
                        },
                    }
                }
            }

            if let DraftBlock::Rest(ref draft) = block {
                label {
                    class: "field",
                    span { "Rest Timer (seconds)" }
                    input {
                        r#type: "text",
                        inputmode: "numeric",
                        value: "{draft.duration_input}",
                        oninput: {
                            let id = id.clone();
                            move |evt: FormEvent| {
                                blocks.with_mut(|list| update_field(list, &id, DraftField::Duration, evt.value()))
                            }
                        },
                        onblur: {
                            let id = id.clone();
                            move |_| blocks.with_mut(|list| commit_rest_duration(list, &id))
                        },
                    }
                }
            }

            if let Some(error) = error.as_ref() {
                p { class: "field-error", "{error}" }
            }
        }
    }
}

/// Follow one reorder gesture through a JS bridge: capture the pointer
/// on the pressed handle, report the hovered block on every move, and
/// finish on pointerup/pointercancel. The move is committed only after
/// the gesture ends.
async fn track_drag(
    block_id: String,
    pointer_id: i32,
    mut drag: Signal<DragState>,
    mut blocks: Signal<Vec<DraftBlock>>,
) {
    let js = format!(
        r#"(function() {{
            var handle = document.querySelector('[data-drag-handle="{block_id}"]');
            if (handle && handle.setPointerCapture) {{
                try {{ handle.setPointerCapture({pointer_id}); }} catch (err) {{}}
            }}
            var last;
            function report(event) {{
                var el = document.elementFromPoint(event.clientX, event.clientY);
                var card = el ? el.closest('[data-block-id]') : null;
                var id = card ? card.getAttribute('data-block-id') : null;
                if (id !== last) {{
                    last = id;
                    dioxus.send({{ kind: 'over', id: id }});
                }}
            }}
            function finish() {{
                window.removeEventListener('pointermove', report);
                window.removeEventListener('pointerup', finish);
                window.removeEventListener('pointercancel', finish);
                dioxus.send({{ kind: 'end', id: null }});
            }}
            window.addEventListener('pointermove', report);
            window.addEventListener('pointerup', finish);
            window.addEventListener('pointercancel', finish);
        }})();"#
    );

    let mut eval = document::eval(&js);
    loop {
        match eval.recv::<DragMessage>().await {
            Ok(msg) if msg.kind == "over" => drag.write().hover(msg.id),
            // "end", or the bridge going away mid-gesture
            Ok(_) | Err(_) => break,
        }
    }
    if let Some((from, to)) = drag.write().finish() {
        blocks.with_mut(|list| reorder_blocks(list, &from, &to));
    }
}
