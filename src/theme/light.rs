//! Light Theme Configuration
//!
//! Converts the light `Palette` into egui's `Visuals`. Derived shades sink
//! toward gray from the palette's near-white background; shadows are softer
//! than in the dark theme.

use eframe::egui::{self, Color32, Rounding, Stroke, Visuals};

use super::Palette;

/// Darken a palette color by a fixed amount per channel.
fn sink(color: Color32, amount: u8) -> Color32 {
    Color32::from_rgb(
        color.r().saturating_sub(amount),
        color.g().saturating_sub(amount),
        color.b().saturating_sub(amount),
    )
}

/// Create egui Visuals configured for the light palette.
///
/// The whole struct is produced in one call; callers install it with
/// `ctx.set_visuals` so the switch is atomic for the next frame.
pub fn create_light_visuals(palette: &Palette) -> Visuals {
    let lowered = sink(palette.background, 7);
    let input_bg = sink(palette.background, 12);
    let border = sink(palette.background, 50);
    let border_subtle = sink(palette.background, 20);
    let hover = sink(palette.background, 15);

    let mut visuals = Visuals::light();

    // ─────────────────────────────────────────────────────────────────────────
    // Window & Panel Background
    // ─────────────────────────────────────────────────────────────────────────
    visuals.panel_fill = palette.background;
    visuals.window_fill = palette.background;
    visuals.extreme_bg_color = input_bg;
    visuals.faint_bg_color = lowered;
    visuals.code_bg_color = input_bg;

    // ─────────────────────────────────────────────────────────────────────────
    // Text Colors
    // ─────────────────────────────────────────────────────────────────────────
    visuals.override_text_color = Some(palette.text);
    visuals.hyperlink_color = Color32::from_rgb(0, 100, 180);

    // ─────────────────────────────────────────────────────────────────────────
    // Selection
    // ─────────────────────────────────────────────────────────────────────────
    visuals.selection.bg_fill = Color32::from_rgb(180, 210, 240);
    visuals.selection.stroke = Stroke::new(1.0, Color32::from_rgb(90, 140, 190));

    // ─────────────────────────────────────────────────────────────────────────
    // Widget Styling
    // ─────────────────────────────────────────────────────────────────────────
    visuals.widgets.noninteractive.bg_fill = lowered;
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
    visuals.widgets.active.fg_stroke = Stroke::new(2.0, Color32::BLACK);
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
        offset: egui::vec2(0.0, 2.0),
        blur: 8.0,
        spread: 0.0,
        color: Color32::from_black_alpha(25),
    };
    visuals.window_stroke = Stroke::new(1.0, border);

    // ─────────────────────────────────────────────────────────────────────────
    // Miscellaneous
    // ─────────────────────────────────────────────────────────────────────────
    visuals.button_frame = true;
    visuals.interact_cursor = Some(egui::CursorIcon::PointingHand);

    // Dark mode flag
    visuals.dark_mode = false;

    visuals
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_light_visuals_is_light_mode() {
        let visuals = create_light_visuals(&Palette::light());
        assert!(!visuals.dark_mode);
    }

    #[test]
    fn test_light_visuals_panel_matches_palette() {
        let palette = Palette::light();
        let visuals = create_light_visuals(&palette);
        assert_eq!(visuals.panel_fill, palette.background);
        assert_eq!(visuals.window_fill, palette.background);
    }

    #[test]
    fn test_light_visuals_text_contrast() {
        let palette = Palette::light();
        let visuals = create_light_visuals(&palette);

        // Text should be dark for contrast on the light background
        assert_eq!(visuals.override_text_color, Some(palette.text));
        assert!(palette.text.r() < 100);
        assert_eq!(
            visuals.widgets.noninteractive.fg_stroke.color,
            palette.text
        );
    }

    #[test]
    fn test_light_visuals_selection_visible() {
        let visuals = create_light_visuals(&Palette::light());
        assert_ne!(visuals.selection.bg_fill, visuals.panel_fill);
    }

    #[test]
    fn test_light_shadow_softer_than_dark() {
        let light = create_light_visuals(&Palette::light());
        let dark = super::super::dark::create_dark_visuals(&Palette::dark());
        assert!(light.window_shadow.color.a() < dark.window_shadow.color.a());
    }

    #[test]
    fn test_sink_saturates() {
        let black = Color32::from_rgb(5, 5, 5);
        assert_eq!(sink(black, 20), Color32::from_rgb(0, 0, 0));
    }
}
