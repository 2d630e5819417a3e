pub mod description;
pub mod editor;
pub mod generate;
pub mod import;
pub mod io;
pub mod models;
pub mod render;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use description::{Block, BlockId, BlockKind, BlockType, Description, DescriptionError};
pub use editor::{Cmd, DragSession, DragSource, DropTarget, EditorMode, EditorState, Outcome};
pub use io::{IoError, JsonDirStore, MemoryStore, PropertyStore};
pub use models::*;
pub use render::{RenderNode, render_description, render_html, render_plain};
