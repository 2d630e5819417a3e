use dioxus::prelude::*;
use listings_engine::render::render_block;
use listings_engine::{BlockId, Cmd, Description, DragSession, DragSource, DropTarget};

use crate::ui::components::RenderNodeView;

/// Editable preview of the description.
///
/// Blocks are selectable, deletable and draggable. Dropping onto a block
/// takes its position, dropping onto the trailing zone appends.
#[component]
pub fn BuilderCanvas(
    blocks: Description,
    selected: Option<BlockId>,
    drag: Signal<DragSession>,
    on_command: EventHandler<Cmd>,
) -> Element {
    let mut drag = drag;

    // Drops resolve against the blocks as currently rendered
    let drop_blocks = blocks.clone();
    let finish_drop = move |target: DropTarget| {
        let cmd = drag.write().end(Some(target), &drop_blocks);
        if let Some(cmd) = cmd {
            on_command.call(cmd);
        }
    };
    let mut drop_at_end = finish_drop.clone();

    rsx! {
        div {
            class: "builder-canvas",
            onclick: move |_| on_command.call(Cmd::Select { id: None }),
            if blocks.is_empty() {
                p { class: "canvas-empty", "Drag a block here or click one in the palette" }
            }
            for block in blocks.iter() {
                div {
                    key: "{block.id}",
                    class: block_class(selected.as_ref() == Some(&block.id)),
                    draggable: "true",
                    ondragstart: {
                        let id = block.id.clone();
                        move |_| drag.write().start(DragSource::Block(id.clone()))
                    },
                    ondragover: move |evt: DragEvent| evt.prevent_default(),
                    ondrop: {
                        let id = block.id.clone();
                        let mut finish_drop = finish_drop.clone();
                        move |evt: DragEvent| {
                            evt.prevent_default();
                            evt.stop_propagation();
                            finish_drop(DropTarget::Over(id.clone()));
                        }
                    },
                    ondragend: move |_| drag.write().cancel(),
                    onclick: {
                        let id = block.id.clone();
                        move |evt: MouseEvent| {
                            evt.stop_propagation();
                            on_command.call(Cmd::Select { id: Some(id.clone()) });
                        }
                    },
                    div {
                        class: "canvas-block-header",
                        span { class: "canvas-block-type", {block.block_type().as_str()} }
                        button {
                            class: "canvas-block-delete",
                            title: "Delete block",
                            onclick: {
                                let id = block.id.clone();
                                move |evt: MouseEvent| {
                                    evt.stop_propagation();
                                    on_command.call(Cmd::Delete { id: id.clone() });
                                }
                            },
                            "✕"
                        }
                    }
                    RenderNodeView { node: render_block(block) }
                }
            }
            div {
                class: "canvas-drop-end",
                ondragover: move |evt: DragEvent| evt.prevent_default(),
                ondrop: move |evt: DragEvent| {
                    evt.prevent_default();
                    evt.stop_propagation();
                    drop_at_end(DropTarget::End);
                },
                "Drop here to add at the end"
            }
        }
    }
}

fn block_class(is_selected: bool) -> &'static str {
    if is_selected {
        "canvas-block selected"
    } else {
        "canvas-block"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;
    use listings_engine::description::parse_description;

    fn harness() -> Element {
        let drag = use_signal(DragSession::new);
        let blocks = parse_description(
            r#"[{"id":"intro","type":"Text","text":"Light and airy"},{"id":"rule","type":"Divider"}]"#,
        );
        rsx! {
            BuilderCanvas {
                blocks,
                selected: Some(BlockId::from("rule")),
                drag,
                on_command: move |_| {},
            }
        }
    }

    fn empty_harness() -> Element {
        let drag = use_signal(DragSession::new);
        rsx! {
            BuilderCanvas {
                blocks: Description::new(),
                selected: None,
                drag,
                on_command: move |_| {},
            }
        }
    }

    #[test]
    fn test_canvas_renders_blocks_with_selection() {
        let mut dom = VirtualDom::new(harness);
        dom.rebuild_in_place();
        let html = render(&dom);

        assert!(html.contains("Light and airy"));
        assert_eq!(html.matches("canvas-block selected").count(), 1);
        assert!(html.find("Light and airy").unwrap() < html.find("description-divider").unwrap());
        assert!(html.contains("Drop here to add at the end"));
        assert!(!html.contains("canvas-empty"));
    }

    #[test]
    fn test_empty_canvas_prompts_for_blocks() {
        let mut dom = VirtualDom::new(empty_harness);
        dom.rebuild_in_place();
        let html = render(&dom);

        assert!(html.contains("canvas-empty"));
    }
}
