//! UI components for Markpane
//!
//! This module contains the header, toolbar, and the two editor panes.

mod editor_pane;
mod header;
mod preview_pane;
mod toolbar;

pub use editor_pane::{EditorOutput, EditorPane};
pub use header::{Header, HeaderAction};
pub use preview_pane::{PreviewColors, PreviewPane};
pub use toolbar::{Toolbar, ToolbarAction};
