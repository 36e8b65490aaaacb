//! Markdown input pane for Markpane
//!
//! Wraps egui's TextEdit in a borderless, monospace editing surface
//! that fills its half of the window. Text and background colors come
//! from the applied theme visuals, so the pane itself takes no palette.

use eframe::egui::{self, FontId, ScrollArea, TextEdit, Ui};

/// Default font size when none is configured.
const DEFAULT_FONT_SIZE: f32 = 16.0;

/// Result of showing the editor pane.
pub struct EditorOutput {
    /// Whether the content was modified this frame.
    pub changed: bool,
}

/// The markdown input pane.
///
/// # Example
///
/// ```ignore
/// let output = EditorPane::new()
///     .font_size(settings.font_size)
///     .show(ui, &mut buffer);
/// if output.changed {
///     // dispatch the new text
/// }
/// ```
#[derive(Debug)]
pub struct EditorPane {
    /// Font size for the editor text.
    font_size: f32,
}

impl Default for EditorPane {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorPane {
    /// Create a new editor pane.
    pub fn new() -> Self {
        Self {
            font_size: DEFAULT_FONT_SIZE,
        }
    }

    /// Set the font size for the editor text.
    #[must_use]
    pub fn font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    /// Render the pane, editing `text` in place.
    pub fn show(self, ui: &mut Ui, text: &mut String) -> EditorOutput {
        // Size the editor to at least the visible height so clicks in the
        // empty area below short documents still focus the text field.
        let row_height = ui.fonts(|f| f.row_height(&FontId::monospace(self.font_size)));
        let min_rows = (ui.available_height() / row_height).ceil() as usize;

        ScrollArea::vertical()
            .id_source("editor_pane_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                let output = TextEdit::multiline(text)
                    .id(egui::Id::new("editor_pane_text"))
                    .frame(false)
                    .font(FontId::monospace(self.font_size))
                    .desired_width(f32::INFINITY)
                    .desired_rows(min_rows)
                    .show(ui);

                EditorOutput {
                    changed: output.response.changed(),
                }
            })
            .inner
    }
}
