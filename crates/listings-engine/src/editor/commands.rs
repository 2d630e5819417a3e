use serde_json::{Map, Value};

use crate::description::{BlockId, DescriptionError};

/// Where a new or moved block should land
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropTarget {
    /// Explicit index, clamped to the list length
    Index(usize),
    /// Dropped onto an existing block; takes that block's position
    Over(BlockId),
    /// Dropped onto the container itself
    End,
}

/// Every mutation of the editor goes through one of these
#[derive(Debug, Clone, PartialEq)]
pub enum Cmd {
    Insert {
        /// Persisted type tag, e.g. `"Table"`. Unknown tags are ignored.
        block_type: String,
        target: DropTarget,
    },
    Delete {
        id: BlockId,
    },
    /// Shallow-merge the given fields into a block. `id` and `type` keys are ignored.
    UpdateField {
        id: BlockId,
        fields: Map<String, Value>,
    },
    Reorder {
        id: BlockId,
        to: usize,
    },
    Select {
        id: Option<BlockId>,
    },
    /// Replace the raw JSON text (raw mode only)
    EditRaw {
        text: String,
    },
    ToggleMode,
}

impl Cmd {
    /// Convenience for updating a single field
    pub fn set_field(id: BlockId, key: &str, value: Value) -> Self {
        let mut fields = Map::new();
        fields.insert(key.to_string(), value);
        Cmd::UpdateField { id, fields }
    }
}

/// Result of applying a command
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// State changed
    Applied,
    /// Nothing to do: unknown id, unknown type, or already in that state
    NoOp,
    /// The command was refused and the state kept as it was
    Rejected(DescriptionError),
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied)
    }
}
