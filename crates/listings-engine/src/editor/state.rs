use serde_json::Value;

use crate::description::{
    Block, BlockId, BlockKind, BlockType, Description, DescriptionError, serialize_description,
    serialize_description_pretty, validate_raw,
};
use crate::editor::commands::{Cmd, DropTarget, Outcome};

/// Which editor surface is active
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditorMode {
    /// Blocks manipulated through the builder controls
    #[default]
    Structured,
    /// The serialized JSON edited directly as text
    Raw,
}

/// Editing session over one property's description.
///
/// All mutation goes through [`EditorState::apply`]. Each call runs to
/// completion and either changes the state (`Applied`), leaves it untouched
/// (`NoOp`), or refuses and leaves it untouched (`Rejected`).
///
/// The `mirror` is the serialized form of the current blocks, refreshed after
/// every applied change. It is what gets handed to the property store on save
/// and can always be recomputed from `blocks`.
#[derive(Debug, Clone)]
pub struct EditorState {
    blocks: Description,
    selected: Option<BlockId>,
    mode: EditorMode,
    raw_text: String,
    raw_error: Option<DescriptionError>,
    mirror: String,
    saved: String,
    version: u64,
}

impl EditorState {
    pub fn new(blocks: Description) -> Self {
        let mirror = serialize_description(&blocks).unwrap_or_else(|e| {
            log::error!("Could not serialize description: {e}");
            "[]".to_string()
        });
        Self {
            blocks,
            selected: None,
            mode: EditorMode::Structured,
            raw_text: String::new(),
            raw_error: None,
            saved: mirror.clone(),
            mirror,
            version: 0,
        }
    }

    /// Start a session from a property's persisted description, wrapping
    /// legacy plain text as a single Text block.
    pub fn open(persisted: &str) -> Self {
        Self::new(Description::from_legacy(persisted))
    }

    pub fn blocks(&self) -> &Description {
        &self.blocks
    }

    pub fn selected(&self) -> Option<&BlockId> {
        self.selected.as_ref()
    }

    pub fn selected_block(&self) -> Option<&Block> {
        self.selected.as_ref().and_then(|id| self.blocks.get(id))
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    /// Validation message for the raw editor, if the current raw text is invalid
    pub fn raw_error(&self) -> Option<&DescriptionError> {
        self.raw_error.as_ref()
    }

    pub fn mirror(&self) -> &str {
        &self.mirror
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.mirror != self.saved
    }

    /// Serialized description to persist. Refused while the raw editor holds
    /// invalid JSON so hand-typed text is never silently dropped.
    ///
    /// In raw mode the blocks were already synced by the last valid `EditRaw`,
    /// so the payload carries the same ids as the mirror.
    pub fn save_payload(&self) -> Result<String, DescriptionError> {
        if self.mode == EditorMode::Raw
            && let Some(e) = &self.raw_error
        {
            return Err(e.clone());
        }
        serialize_description(&self.blocks)
    }

    /// Record that `payload` has been persisted
    pub fn mark_saved(&mut self, payload: &str) {
        self.saved = payload.to_string();
    }

    pub fn apply(&mut self, cmd: Cmd) -> Outcome {
        match cmd {
            Cmd::Insert { block_type, target } => self.insert(&block_type, target),
            Cmd::Delete { id } => self.delete(&id),
            Cmd::UpdateField { id, fields } => self.update_fields(&id, fields),
            Cmd::Reorder { id, to } => self.reorder(&id, to),
            Cmd::Select { id } => self.select(id),
            Cmd::EditRaw { text } => self.edit_raw(text),
            Cmd::ToggleMode => self.toggle_mode(),
        }
    }

    fn insert(&mut self, block_type: &str, target: DropTarget) -> Outcome {
        if self.mode == EditorMode::Raw {
            return Outcome::NoOp;
        }
        let Ok(block_type) = block_type.parse::<BlockType>() else {
            log::debug!("Ignoring insert of unknown block type {block_type:?}");
            return Outcome::NoOp;
        };

        let len = self.blocks.len();
        let index = match target {
            DropTarget::Index(i) => i.min(len),
            DropTarget::Over(over) => self.blocks.position(&over).unwrap_or(len),
            DropTarget::End => len,
        };

        let block = Block::new(BlockKind::template(block_type));
        self.selected = Some(block.id.clone());
        self.blocks.blocks_mut().insert(index, block);
        self.touch();
        Outcome::Applied
    }

    fn delete(&mut self, id: &BlockId) -> Outcome {
        if self.mode == EditorMode::Raw {
            return Outcome::NoOp;
        }
        let Some(index) = self.blocks.position(id) else {
            return Outcome::NoOp;
        };

        self.blocks.blocks_mut().remove(index);
        if self.selected.as_ref() == Some(id) {
            self.selected = None;
        }
        self.touch();
        Outcome::Applied
    }

    fn update_fields(&mut self, id: &BlockId, fields: serde_json::Map<String, Value>) -> Outcome {
        if self.mode == EditorMode::Raw {
            return Outcome::NoOp;
        }
        let Some(index) = self.blocks.position(id) else {
            return Outcome::NoOp;
        };

        let block = &mut self.blocks.blocks_mut()[index];
        let merged = match merge_fields(&block.kind, fields) {
            Ok(kind) => kind,
            Err(e) => return Outcome::Rejected(e),
        };
        if merged == block.kind {
            return Outcome::NoOp;
        }
        block.kind = merged;
        self.touch();
        Outcome::Applied
    }

    fn reorder(&mut self, id: &BlockId, to: usize) -> Outcome {
        if self.mode == EditorMode::Raw {
            return Outcome::NoOp;
        }
        let Some(from) = self.blocks.position(id) else {
            return Outcome::NoOp;
        };
        let to = to.min(self.blocks.len() - 1);
        if from == to {
            return Outcome::NoOp;
        }

        let blocks = self.blocks.blocks_mut();
        let block = blocks.remove(from);
        blocks.insert(to, block);
        self.touch();
        Outcome::Applied
    }

    fn select(&mut self, id: Option<BlockId>) -> Outcome {
        if let Some(id) = &id
            && !self.blocks.contains(id)
        {
            return Outcome::NoOp;
        }
        if self.selected == id {
            return Outcome::NoOp;
        }
        self.selected = id;
        Outcome::Applied
    }

    fn edit_raw(&mut self, text: String) -> Outcome {
        if self.mode != EditorMode::Raw {
            return Outcome::NoOp;
        }

        match validate_raw(&text) {
            Ok(blocks) => {
                self.raw_error = None;
                self.replace_blocks(blocks);
            }
            Err(e) => {
                log::debug!("Raw description edit is invalid: {e}");
                self.raw_error = Some(e);
            }
        }
        self.raw_text = text;
        Outcome::Applied
    }

    fn toggle_mode(&mut self) -> Outcome {
        match self.mode {
            EditorMode::Structured => match serialize_description_pretty(&self.blocks) {
                Ok(text) => {
                    self.raw_text = text;
                    self.raw_error = None;
                    self.mode = EditorMode::Raw;
                    Outcome::Applied
                }
                Err(e) => Outcome::Rejected(e),
            },
            // raw_error is kept in step with raw_text, and blocks with the
            // last valid raw text
            EditorMode::Raw => match &self.raw_error {
                Some(e) => Outcome::Rejected(e.clone()),
                None => {
                    self.mode = EditorMode::Structured;
                    Outcome::Applied
                }
            },
        }
    }

    fn replace_blocks(&mut self, blocks: Description) {
        self.blocks = blocks;
        if let Some(id) = &self.selected
            && !self.blocks.contains(id)
        {
            self.selected = None;
        }
        self.touch();
    }

    fn touch(&mut self) {
        self.version += 1;
        match serialize_description(&self.blocks) {
            Ok(json) => self.mirror = json,
            Err(e) => log::error!("Could not refresh description mirror: {e}"),
        }
    }
}

/// Shallow merge of `fields` over the block's current fields.
///
/// No cross-field validation happens here: a Table's rows may drift from
/// its header count.
fn merge_fields(
    kind: &BlockKind,
    fields: serde_json::Map<String, Value>,
) -> Result<BlockKind, DescriptionError> {
    let mut current = match serde_json::to_value(kind) {
        Ok(Value::Object(map)) => map,
        Ok(_) => serde_json::Map::new(),
        Err(e) => return Err(DescriptionError::Serialize(e.to_string())),
    };
    for (key, value) in fields {
        if key == "id" || key == "type" {
            continue;
        }
        current.insert(key, value);
    }
    current.insert(
        "type".to_string(),
        Value::String(kind.block_type().as_str().to_string()),
    );
    serde_json::from_value(Value::Object(current))
        .map_err(|e| DescriptionError::Serialize(e.to_string()))
}
