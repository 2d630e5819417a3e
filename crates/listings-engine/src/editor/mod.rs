/*!
 * # Description Builder Editor
 *
 * Editing state for the drag-and-drop description builder.
 *
 * ## Architecture Overview
 *
 * ### 1. Single Source of Truth: the block list
 * - `EditorState` owns the ordered `Description` plus the selected block and
 *   the active mode
 * - The serialized mirror handed to persistence is always recomputed from the
 *   blocks, never edited independently
 *
 * ### 2. Command-Based Editing
 * - All edits are `Cmd` values applied with `EditorState::apply`
 * - Each command runs to completion and reports an `Outcome`
 * - Commands referring to ids that no longer exist are no-ops, so stale UI
 *   references are harmless
 *
 * ### 3. Two Modes
 * - **Structured**: blocks edited through builder controls
 * - **Raw**: the pretty-printed JSON edited as text. Leaving raw mode
 *   re-validates the text and is refused if it is invalid, so typed text is
 *   never thrown away
 *
 * ### 4. Drag and Drop
 * - `DragSession` sits between the UI's drag-start and drag-end events and
 *   turns the final drop into an `Insert` or `Reorder` command
 *
 * ## Usage Pattern
 *
 * ```rust
 * use listings_engine::editor::*;
 *
 * let mut editor = EditorState::open(r#"[{"id":"a","type":"Text","text":"Hello"}]"#);
 * editor.apply(Cmd::Insert { block_type: "Divider".to_string(), target: DropTarget::End });
 * assert_eq!(editor.blocks().len(), 2);
 *
 * let payload = editor.save_payload().unwrap();
 * editor.mark_saved(&payload);
 * ```
 */

pub mod commands;
pub mod drag;
pub mod state;

pub use commands::{Cmd, DropTarget, Outcome};
pub use drag::{DragSession, DragSource};
pub use state::{EditorMode, EditorState};
