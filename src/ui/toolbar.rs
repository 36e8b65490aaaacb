//! Formatting toolbar for Markpane
//!
//! A stateless strip of text buttons that emit formatting intents.
//! The toolbar owns no editor state: it reports what the user clicked
//! and leaves the text mutation to the caller.

use crate::theme::Palette;
use eframe::egui::{self, Color32, Response, RichText, Ui, Vec2};

/// Height of the toolbar strip.
const TOOLBAR_HEIGHT: f32 = 36.0;

/// Minimum size of a toolbar button.
const BUTTON_SIZE: Vec2 = Vec2::new(52.0, 26.0);

/// Horizontal gap between buttons.
const BUTTON_SPACING: f32 = 12.0;

/// Intents that can be triggered from the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarAction {
    /// Append a bold placeholder to the document
    Bold,
    /// Append an italic placeholder to the document
    Italic,
    /// Append a link placeholder to the document
    Link,
}

/// The formatting toolbar.
///
/// Holds no state by design. Every frame it renders the same three
/// buttons and returns the clicked intent, if any.
#[derive(Debug, Clone, Copy, Default)]
pub struct Toolbar;

impl Toolbar {
    /// Create a new toolbar instance.
    pub fn new() -> Self {
        Self
    }

    /// Render the toolbar and return any triggered action.
    ///
    /// At most one action is reported per frame.
    pub fn show(&self, ui: &mut Ui, palette: &Palette) -> Option<ToolbarAction> {
        let mut action: Option<ToolbarAction> = None;

        // Fill the strip with the toolbar background role
        ui.painter().rect_filled(
            ui.available_rect_before_wrap(),
            0.0,
            palette.toolbar_background,
        );

        ui.horizontal(|ui| {
            ui.set_height(TOOLBAR_HEIGHT);
            ui.spacing_mut().item_spacing.x = BUTTON_SPACING;
            ui.add_space(8.0);

            if toolbar_button(ui, "Bold", palette).clicked() {
                action = Some(ToolbarAction::Bold);
            }

            if toolbar_button(ui, "Italic", palette).clicked() {
                action = Some(ToolbarAction::Italic);
            }

            if toolbar_button(ui, "Link", palette).clicked() {
                action = Some(ToolbarAction::Link);
            }
        });

        // Draw bottom border
        let rect = ui.min_rect();
        ui.painter().line_segment(
            [
                egui::pos2(rect.min.x, rect.max.y),
                egui::pos2(rect.max.x, rect.max.y),
            ],
            egui::Stroke::new(1.0, palette.separator_color),
        );

        action
    }
}

/// Render a single toolbar button styled from the palette roles.
fn toolbar_button(ui: &mut Ui, label: &str, palette: &Palette) -> Response {
    let hover_bg = if palette.is_dark() {
        Color32::from_rgb(60, 60, 60)
    } else {
        Color32::from_rgb(220, 220, 220)
    };

    let text = RichText::new(label)
        .size(14.0)
        .color(palette.toolbar_button_color);

    let btn = ui.add(
        egui::Button::new(text)
            .fill(palette.toolbar_button_background)
            .stroke(egui::Stroke::NONE)
            .min_size(BUTTON_SIZE),
    );

    // Draw hover background, then redraw the label on top
    if btn.hovered() {
        ui.painter()
            .rect_filled(btn.rect, egui::Rounding::same(3.0), hover_bg);
        ui.painter().text(
            btn.rect.center(),
            egui::Align2::CENTER_CENTER,
            label,
            egui::FontId::proportional(14.0),
            palette.toolbar_button_color,
        );
    }

    btn
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toolbar_new() {
        // Construction must be trivial; the toolbar carries no state
        let toolbar = Toolbar::new();
        let copied = toolbar;
        assert_eq!(format!("{:?}", copied), "Toolbar");
    }

    #[test]
    fn test_toolbar_action_equality() {
        assert_eq!(ToolbarAction::Bold, ToolbarAction::Bold);
        assert_ne!(ToolbarAction::Bold, ToolbarAction::Italic);
        assert_ne!(ToolbarAction::Italic, ToolbarAction::Link);
    }

    #[test]
    fn test_toolbar_action_is_copy() {
        let action = ToolbarAction::Link;
        let a = action;
        let b = action;
        assert_eq!(a, b);
    }
}
