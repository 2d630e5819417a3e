use dioxus::prelude::*;
use listings_engine::{BlockType, Cmd, DragSession, DragSource, DropTarget};

/// Draggable list of block types. Clicking appends, dragging drops where released.
#[component]
pub fn BlockPalette(drag: Signal<DragSession>, on_command: EventHandler<Cmd>) -> Element {
    let mut drag = drag;

    rsx! {
        div {
            class: "block-palette",
            h3 { "Blocks" }
            for block_type in BlockType::ALL {
                div {
                    key: "{block_type}",
                    class: "palette-item",
                    draggable: "true",
                    ondragstart: move |_| {
                        drag.write().start(DragSource::Palette(block_type));
                    },
                    ondragend: move |_| {
                        drag.write().cancel();
                    },
                    onclick: move |_| {
                        on_command.call(Cmd::Insert {
                            block_type: block_type.as_str().to_string(),
                            target: DropTarget::End,
                        });
                    },
                    "{block_type}"
                }
            }
        }
    }
}
