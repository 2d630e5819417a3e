use dioxus::prelude::*;
use listings_engine::{Cmd, DragSession, EditorMode, EditorState, Outcome};

use crate::ui::components::{BlockPalette, BlockSettings, BuilderCanvas, RawEditor};

/// Page builder for one property description.
///
/// Owns the [`EditorState`]; children only ever send [`Cmd`]s back up.
/// `initial` is the persisted description string, legacy text included.
#[component]
pub fn DescriptionBuilder(
    initial: String,
    on_save: EventHandler<String>,
    on_close: EventHandler<()>,
) -> Element {
    let mut editor = use_signal(|| EditorState::open(&initial));
    let drag = use_signal(DragSession::new);
    let mut status = use_signal(|| None::<String>);

    let mut apply = move |cmd: Cmd| {
        let outcome = editor.write().apply(cmd);
        match outcome {
            Outcome::Applied => status.set(None),
            Outcome::Rejected(e) => status.set(Some(e.to_string())),
            Outcome::NoOp => {}
        }
    };

    let save = move |_: MouseEvent| {
        let payload = editor.read().save_payload();
        match payload {
            Ok(payload) => {
                on_save.call(payload.clone());
                editor.write().mark_saved(&payload);
                status.set(None);
            }
            Err(e) => status.set(Some(format!("Cannot save: {e}"))),
        }
    };

    let state = editor.read();
    let mode = state.mode();
    let blocks = state.blocks().clone();
    let selected = state.selected().cloned();
    let selected_block = state.selected_block().cloned();
    let raw_text = state.raw_text().to_string();
    let raw_error = state.raw_error().map(|e| e.to_string());
    let mirror = state.mirror().to_string();
    let unsaved = state.has_unsaved_changes();
    let can_save = state.save_payload().is_ok();
    drop(state);

    let toggle_label = match mode {
        EditorMode::Structured => "Edit JSON",
        EditorMode::Raw => "Back to blocks",
    };

    rsx! {
        div {
            class: "description-builder",
            div {
                class: "builder-toolbar",
                button {
                    class: "btn btn-outline btn-sm",
                    onclick: move |_| apply(Cmd::ToggleMode),
                    "{toggle_label}"
                }
                button {
                    class: "btn btn-default btn-sm",
                    disabled: !can_save,
                    onclick: save,
                    "Save"
                }
                button {
                    class: "btn btn-ghost btn-sm",
                    onclick: move |_| on_close.call(()),
                    "Close"
                }
                if unsaved {
                    span { class: "builder-unsaved", "Unsaved changes" }
                }
                if let Some(message) = status.read().as_ref() {
                    span { class: "builder-status", "{message}" }
                }
            }
            {match mode {
                EditorMode::Structured => rsx! {
                    div {
                        class: "builder-workspace",
                        BlockPalette { drag, on_command: apply }
                        BuilderCanvas { blocks, selected, drag, on_command: apply }
                        if let Some(block) = selected_block {
                            BlockSettings { key: "{block.id}", block, on_command: apply }
                        } else {
                            div { class: "block-settings", p { "Select a block to edit it" } }
                        }
                    }
                },
                EditorMode::Raw => rsx! {
                    RawEditor { text: raw_text, error: raw_error, on_command: apply }
                },
            }}
            details {
                class: "builder-mirror",
                summary { "Stored form" }
                pre { "{mirror}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;

    const STORED: &str = r#"[{"id":"intro","type":"Text","text":"Two bedroom flat"},{"id":"rule","type":"Divider"}]"#;

    fn stored() -> Element {
        rsx! {
            DescriptionBuilder {
                initial: STORED,
                on_save: move |_| {},
                on_close: move |_| {},
            }
        }
    }

    fn legacy() -> Element {
        rsx! {
            DescriptionBuilder {
                initial: "<p>Charming cottage</p>",
                on_save: move |_| {},
                on_close: move |_| {},
            }
        }
    }

    #[test]
    fn test_builder_opens_in_structured_mode() {
        let mut dom = VirtualDom::new(stored);
        dom.rebuild_in_place();
        let html = render(&dom);

        assert!(html.contains("Edit JSON"));
        assert!(html.contains("Two bedroom flat"));
        assert!(html.contains("block-palette"));
        assert!(html.contains("Select a block to edit it"));
        assert!(!html.contains("Unsaved changes"));
    }

    #[test]
    fn test_legacy_description_is_wrapped() {
        let mut dom = VirtualDom::new(legacy);
        dom.rebuild_in_place();
        let html = render(&dom);

        assert!(html.contains("Charming cottage"));
        assert!(!html.contains("&lt;p&gt;"));
    }
}
