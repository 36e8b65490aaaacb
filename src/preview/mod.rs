//! Preview module for Markpane
//!
//! This module derives the rendered document from the markdown source and
//! caches it behind a fail-static policy: a renderer failure keeps the last
//! good output on screen instead of blanking the pane.

mod cache;
mod renderer;

pub use cache::PreviewCache;
pub use renderer::{
    render_document, InlineSpan, InlineStyle, ListItem, PreviewBlock, PreviewDocument,
};
