//! Dark Theme Configuration
//!
//! Converts the dark `Palette` into egui's `Visuals`. All derived shades
//! (hover fills, borders, the code-block background) are computed from the
//! palette's base colors so the palette stays the single source of color.

use eframe::egui::{self, Color32, Rounding, Stroke, Visuals};

use super::Palette;

/// Lighten a palette color by a fixed amount per channel.
fn raise(color: Color32, amount: u8) -> Color32 {
    Color32::from_rgb(
        color.r().saturating_add(amount),
        color.g().saturating_add(amount),
        color.b().saturating_add(amount),
    )
}

/// Create egui Visuals configured for the dark palette.
///
/// The whole struct is produced in one call; callers install it with
/// `ctx.set_visuals` so the switch is atomic for the next frame.
pub fn create_dark_visuals(palette: &Palette) -> Visuals {
    let raised = raise(palette.background, 9);
    let input_bg = raise(palette.background, 14);
    let border = raise(palette.background, 34);
    let border_subtle = raise(palette.background, 19);
    let hover = raise(palette.background, 24);

    let mut visuals = Visuals::dark();

    // ─────────────────────────────────────────────────────────────────────────
    // Window & Panel Background
    // ─────────────────────────────────────────────────────────────────────────
    visuals.panel_fill = palette.background;
    visuals.window_fill = palette.background;
    visuals.extreme_bg_color = input_bg;
    visuals.faint_bg_color = raised;
    visuals.code_bg_color = input_bg;

    // ─────────────────────────────────────────────────────────────────────────
    // Text Colors
    // ─────────────────────────────────────────────────────────────────────────
    visuals.override_text_color = Some(palette.text);
    visuals.hyperlink_color = Color32::from_rgb(100, 180, 255);

    // ─────────────────────────────────────────────────────────────────────────
    // Selection
    // ─────────────────────────────────────────────────────────────────────────
    visuals.selection.bg_fill = Color32::from_rgb(70, 95, 120);
    visuals.selection.stroke = Stroke::new(1.0, Color32::from_rgb(130, 175, 220));

    // ─────────────────────────────────────────────────────────────────────────
    // Widget Styling
    // ─────────────────────────────────────────────────────────────────────────
    visuals.widgets.noninteractive.bg_fill = raised;
    visuals.widgets.noninteractive.weak_bg_fill = input_bg;
    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, border_subtle);
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, palette.text);
    visuals.widgets.noninteractive.rounding = Rounding::same(4.0);

    visuals.widgets.inactive.bg_fill = palette.toolbar_button_background;
    visuals.widgets.inactive.weak_bg_fill = palette.toolbar_button_background;
    visuals.widgets.inactive.bg_stroke = Stroke::NONE;
    visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, palette.toolbar_button_color);
    visuals.widgets.inactive.rounding = Rounding::same(4.0);

    visuals.widgets.hovered.bg_fill = hover;
    visuals.widgets.hovered.weak_bg_fill = hover;
    visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, border);
    visuals.widgets.hovered.fg_stroke = Stroke::new(1.5, palette.text);
    visuals.widgets.hovered.rounding = Rounding::same(4.0);

    visuals.widgets.active.bg_fill = border;
    visuals.widgets.active.weak_bg_fill = hover;
    visuals.widgets.active.bg_stroke = Stroke::new(1.0, border);
    visuals.widgets.active.fg_stroke = Stroke::new(2.0, Color32::WHITE);
    visuals.widgets.active.rounding = Rounding::same(4.0);

    visuals.widgets.open.bg_fill = hover;
    visuals.widgets.open.weak_bg_fill = hover;
    visuals.widgets.open.bg_stroke = Stroke::new(1.0, border);
    visuals.widgets.open.fg_stroke = Stroke::new(1.0, palette.text);
    visuals.widgets.open.rounding = Rounding::same(4.0);

    // ─────────────────────────────────────────────────────────────────────────
    // Window & Popup Styling
    // ─────────────────────────────────────────────────────────────────────────
    visuals.window_rounding = Rounding::same(8.0);
    visuals.window_shadow = egui::epaint::Shadow {
        offset: egui::vec2(0.0, 4.0),
        blur: 16.0,
        spread: 0.0,
        color: Color32::from_black_alpha(80),
    };
    visuals.window_stroke = Stroke::new(1.0, border);

    // ─────────────────────────────────────────────────────────────────────────
    // Miscellaneous
    // ─────────────────────────────────────────────────────────────────────────
    visuals.button_frame = true;
    visuals.interact_cursor = Some(egui::CursorIcon::PointingHand);

    // Dark mode flag
    visuals.dark_mode = true;

    visuals
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dark_visuals_is_dark_mode() {
        let visuals = create_dark_visuals(&Palette::dark());
        assert!(visuals.dark_mode);
    }

    #[test]
    fn test_dark_visuals_panel_matches_palette() {
        let palette = Palette::dark();
        let visuals = create_dark_visuals(&palette);
        assert_eq!(visuals.panel_fill, palette.background);
        assert_eq!(visuals.window_fill, palette.background);
    }

    #[test]
    fn test_dark_visuals_text_contrast() {
        let palette = Palette::dark();
        let visuals = create_dark_visuals(&palette);

        // Text should be light for contrast on the dark background
        assert_eq!(visuals.override_text_color, Some(palette.text));
        assert!(palette.text.r() > 150);
        assert_eq!(
            visuals.widgets.noninteractive.fg_stroke.color,
            palette.text
        );
    }

    #[test]
    fn test_dark_visuals_selection_visible() {
        let visuals = create_dark_visuals(&Palette::dark());
        assert_ne!(visuals.selection.bg_fill, visuals.panel_fill);
    }

    #[test]
    fn test_dark_visuals_buttons_use_palette_roles() {
        let palette = Palette::dark();
        let visuals = create_dark_visuals(&palette);
        assert_eq!(
            visuals.widgets.inactive.bg_fill,
            palette.toolbar_button_background
        );
        assert_eq!(
            visuals.widgets.inactive.fg_stroke.color,
            palette.toolbar_button_color
        );
    }

    #[test]
    fn test_raise_saturates() {
        let white = Color32::from_rgb(250, 250, 250);
        assert_eq!(raise(white, 20), Color32::from_rgb(255, 255, 255));
    }
}
