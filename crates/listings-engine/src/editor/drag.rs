use crate::description::{BlockId, BlockType, Description};
use crate::editor::commands::{Cmd, DropTarget};

/// What is being dragged
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragSource {
    /// A new block from the palette
    Palette(BlockType),
    /// An existing block on the canvas
    Block(BlockId),
}

/// Tracks one drag gesture between drag-start and drag-end.
///
/// Intermediate hover positions are the UI's business; only the final drop
/// turns into a command, so an abandoned drag changes nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DragSession {
    active: Option<DragSource>,
}

impl DragSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, source: DragSource) {
        self.active = Some(source);
    }

    pub fn active(&self) -> Option<&DragSource> {
        self.active.as_ref()
    }

    pub fn cancel(&mut self) {
        self.active = None;
    }

    /// Finish the drag and produce the command to apply, if any.
    ///
    /// `over` is `None` when the drop landed outside the canvas.
    pub fn end(&mut self, over: Option<DropTarget>, blocks: &Description) -> Option<Cmd> {
        let source = self.active.take()?;
        let target = over?;

        match source {
            DragSource::Palette(block_type) => Some(Cmd::Insert {
                block_type: block_type.as_str().to_string(),
                target,
            }),
            DragSource::Block(id) => {
                let from = blocks.position(&id)?;
                let to = match target {
                    DropTarget::Index(i) => i.min(blocks.len().saturating_sub(1)),
                    DropTarget::Over(over_id) => blocks.position(&over_id)?,
                    DropTarget::End => blocks.len().saturating_sub(1),
                };
                (from != to).then_some(Cmd::Reorder { id, to })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::description::parse_description;
    use crate::editor::{EditorState, Outcome};
    use pretty_assertions::assert_eq;

    fn abc() -> Description {
        parse_description(
            r#"[{"id":"A","type":"Divider"},{"id":"B","type":"Divider"},{"id":"C","type":"Divider"}]"#,
        )
    }

    #[test]
    fn test_palette_drop_on_container_inserts_at_end() {
        let mut drag = DragSession::new();
        drag.start(DragSource::Palette(BlockType::Table));

        let cmd = drag.end(Some(DropTarget::End), &abc());

        assert_eq!(
            cmd,
            Some(Cmd::Insert {
                block_type: "Table".to_string(),
                target: DropTarget::End,
            })
        );
        assert_eq!(drag.active(), None);
    }

    #[test]
    fn test_block_drop_over_other_block_reorders() {
        let mut drag = DragSession::new();
        drag.start(DragSource::Block(BlockId::from("A")));

        let cmd = drag.end(Some(DropTarget::Over(BlockId::from("C"))), &abc());

        assert_eq!(
            cmd,
            Some(Cmd::Reorder {
                id: BlockId::from("A"),
                to: 2
            })
        );
    }

    #[test]
    fn test_drop_on_itself_is_nothing() {
        let mut drag = DragSession::new();
        drag.start(DragSource::Block(BlockId::from("B")));
        assert_eq!(
            drag.end(Some(DropTarget::Over(BlockId::from("B"))), &abc()),
            None
        );
    }

    #[test]
    fn test_drop_outside_or_without_start_is_nothing() {
        let mut drag = DragSession::new();
        assert_eq!(drag.end(Some(DropTarget::End), &abc()), None);

        drag.start(DragSource::Palette(BlockType::Text));
        assert_eq!(drag.end(None, &abc()), None);
        assert_eq!(drag.active(), None);
    }

    #[test]
    fn test_cancel_discards_gesture() {
        let mut drag = DragSession::new();
        drag.start(DragSource::Block(BlockId::from("A")));
        drag.cancel();
        assert_eq!(drag.end(Some(DropTarget::End), &abc()), None);
    }

    #[test]
    fn test_drag_to_container_end_moves_block_last() {
        let mut state = EditorState::new(abc());
        let mut drag = DragSession::new();
        drag.start(DragSource::Block(BlockId::from("A")));

        let cmd = drag.end(Some(DropTarget::End), state.blocks()).unwrap();

        assert_eq!(state.apply(cmd), Outcome::Applied);
        let ids: Vec<_> = state.blocks().iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["B", "C", "A"]);
    }
}
