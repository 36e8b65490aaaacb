//! Fail-static preview cache
//!
//! Holds the document the preview pane draws. A refresh recomputes the
//! rendering for the current source text; if the renderer panics, the
//! previous document stays in place and the failure is logged, so the pane
//! never goes blank and the process never dies over a preview.
//!
//! An empty source renders to an empty document; that is a successful
//! refresh, not a failure.

use std::panic::{self, AssertUnwindSafe};

use log::warn;

use super::renderer::{render_document, PreviewDocument};

/// Last-good-output cache in front of the renderer.
#[derive(Debug, Clone)]
pub struct PreviewCache {
    document: PreviewDocument,
}

impl PreviewCache {
    /// Create a cache primed with the rendering of `source`.
    pub fn new(source: &str) -> Self {
        let mut cache = Self {
            document: PreviewDocument::empty(),
        };
        cache.refresh(source);
        cache
    }

    /// The most recently rendered document.
    pub fn document(&self) -> &PreviewDocument {
        &self.document
    }

    /// Re-render `source`, keeping the previous document if the renderer
    /// panics.
    pub fn refresh(&mut self, source: &str) {
        self.refresh_with(source, render_document);
    }

    fn refresh_with(&mut self, source: &str, render: impl FnOnce(&str) -> PreviewDocument) {
        match panic::catch_unwind(AssertUnwindSafe(|| render(source))) {
            Ok(document) => self.document = document,
            Err(_) => {
                warn!("Markdown renderer panicked; keeping last rendered output");
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
