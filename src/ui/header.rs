//! Header bar for Markpane
//!
//! Renders the application title and the theme toggle button. Like the
//! toolbar, the header is stateless: the active palette and dark mode
//! flag are passed in each frame and clicks are reported back as actions.

use crate::theme::Palette;
use eframe::egui::{self, RichText, Ui};

/// Height of the header bar.
const HEADER_HEIGHT: f32 = 48.0;

/// Application title shown in the header.
const TITLE: &str = "Markdown Editor";

/// Point size of the title text.
const TITLE_SIZE: f32 = 24.0;

/// Actions that can be triggered from the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderAction {
    /// Switch between the light and dark palettes
    ToggleTheme,
}

/// The header bar with title and theme toggle.
#[derive(Debug, Clone, Copy, Default)]
pub struct Header;

impl Header {
    /// Create a new header instance.
    pub fn new() -> Self {
        Self
    }

    /// Render the header and return any triggered action.
    pub fn show(&self, ui: &mut Ui, palette: &Palette, dark_mode: bool) -> Option<HeaderAction> {
        let mut action: Option<HeaderAction> = None;

        ui.horizontal(|ui| {
            ui.set_height(HEADER_HEIGHT);
            ui.add_space(8.0);

            ui.label(
                RichText::new(TITLE)
                    .size(TITLE_SIZE)
                    .strong()
                    .color(palette.text),
            );

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.add_space(8.0);

                let btn = ui.add(
                    egui::Button::new(
                        RichText::new(theme_icon(dark_mode))
                            .size(18.0)
                            .color(palette.text),
                    )
                    .frame(false),
                );

                if btn.on_hover_text(theme_tooltip(dark_mode)).clicked() {
                    action = Some(HeaderAction::ToggleTheme);
                }
            });
        });

        action
    }
}

/// Icon for the theme toggle button.
///
/// Shows the palette you would switch to: the sun while dark mode is
/// active, the moon while light mode is active.
fn theme_icon(dark_mode: bool) -> &'static str {
    if dark_mode {
        "☀"
    } else {
        "🌙"
    }
}

/// Tooltip for the theme toggle button.
fn theme_tooltip(dark_mode: bool) -> &'static str {
    if dark_mode {
        "Switch to light mode"
    } else {
        "Switch to dark mode"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_icon_shows_target_palette() {
        assert_eq!(theme_icon(false), "🌙");
        assert_eq!(theme_icon(true), "☀");
    }

    #[test]
    fn test_theme_tooltip_matches_icon() {
        assert_eq!(theme_tooltip(false), "Switch to dark mode");
        assert_eq!(theme_tooltip(true), "Switch to light mode");
    }

    #[test]
    fn test_header_title() {
        assert_eq!(TITLE, "Markdown Editor");
    }

    #[test]
    fn test_header_action_equality() {
        assert_eq!(HeaderAction::ToggleTheme, HeaderAction::ToggleTheme);
    }
}
