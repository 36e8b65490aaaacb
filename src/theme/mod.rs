//! Theme system for Markpane
//!
//! The application is themed through a single `Palette` struct of six named
//! color roles. Exactly two palettes exist, `light` and `dark`, selected by
//! the editor's `dark_mode` flag; adding a palette later means adding a
//! constructor, not new control flow.
//!
//! The palette is data. Everything presentational is derived from it in one
//! place per theme (`light.rs` / `dark.rs` build a complete `egui::Visuals`
//! from a palette in a single pass, so a theme switch is atomic: no frame is
//! painted with colors from both palettes).
//!
//! # Theme Files
//!
//! - `light.rs` - light `Visuals` construction
//! - `dark.rs` - dark `Visuals` construction
//! - `manager.rs` - applies the active palette to the egui context

pub mod dark;
pub mod light;
pub mod manager;

pub use manager::ThemeManager;

use eframe::egui::Color32;

// ─────────────────────────────────────────────────────────────────────────────
// Palette
// ─────────────────────────────────────────────────────────────────────────────

/// The six themed color roles of the UI.
///
/// Role values reproduce the editor's reference styling: the light palette is
/// near-white with near-black text, the dark palette mirrors it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    /// Window, pane, and editor background
    pub background: Color32,
    /// Body text in the header, editor, and preview
    pub text: Color32,
    /// Header and toolbar strip background
    pub toolbar_background: Color32,
    /// Fill behind header/toolbar buttons
    pub toolbar_button_background: Color32,
    /// Label color of header/toolbar buttons
    pub toolbar_button_color: Color32,
    /// The vertical line between the two panes
    pub separator_color: Color32,
}

impl Palette {
    /// The light palette.
    pub fn light() -> Self {
        Self {
            background: Color32::from_rgb(245, 245, 245), // #f5f5f5
            text: Color32::from_rgb(51, 51, 51),          // #333
            toolbar_background: Color32::from_rgb(245, 245, 245), // #f5f5f5
            toolbar_button_background: Color32::TRANSPARENT,
            toolbar_button_color: Color32::from_rgb(51, 51, 51), // #333
            separator_color: Color32::from_rgb(51, 51, 51), // #333
        }
    }

    /// The dark palette.
    pub fn dark() -> Self {
        Self {
            background: Color32::from_rgb(51, 51, 51), // #333
            text: Color32::from_rgb(245, 245, 245),    // #f5f5f5
            toolbar_background: Color32::from_rgb(51, 51, 51), // #333
            toolbar_button_background: Color32::TRANSPARENT,
            toolbar_button_color: Color32::from_rgb(245, 245, 245), // #f5f5f5
            separator_color: Color32::from_rgb(245, 245, 245), // #f5f5f5
        }
    }

    /// Select the palette for the given dark-mode flag.
    ///
    /// This is the only place the flag is interpreted; every themed color in
    /// the UI flows from the struct this returns.
    pub fn for_dark_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Self::dark()
        } else {
            Self::light()
        }
    }

    /// Check if this is a dark palette (useful for conditional styling).
    pub fn is_dark(&self) -> bool {
        // Dark palettes have darker backgrounds
        self.background.r() < 128
    }

    /// Convert this palette to egui Visuals.
    ///
    /// The entire `Visuals` struct is built in one call so the switch from
    /// one palette to the other lands atomically on the next frame.
    pub fn to_visuals(&self) -> eframe::egui::Visuals {
        if self.is_dark() {
            dark::create_dark_visuals(self)
        } else {
            light::create_light_visuals(self)
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_light_palette_roles() {
        let palette = Palette::light();
        assert_eq!(palette.background, Color32::from_rgb(245, 245, 245));
        assert_eq!(palette.text, Color32::from_rgb(51, 51, 51));
        assert_eq!(palette.toolbar_background, Color32::from_rgb(245, 245, 245));
        assert_eq!(palette.toolbar_button_background, Color32::TRANSPARENT);
        assert_eq!(palette.toolbar_button_color, Color32::from_rgb(51, 51, 51));
        assert_eq!(palette.separator_color, Color32::from_rgb(51, 51, 51));
    }

    #[test]
    fn test_dark_palette_roles() {
        let palette = Palette::dark();
        assert_eq!(palette.background, Color32::from_rgb(51, 51, 51));
        assert_eq!(palette.text, Color32::from_rgb(245, 245, 245));
        assert_eq!(palette.toolbar_background, Color32::from_rgb(51, 51, 51));
        assert_eq!(palette.toolbar_button_background, Color32::TRANSPARENT);
        assert_eq!(
            palette.toolbar_button_color,
            Color32::from_rgb(245, 245, 245)
        );
        assert_eq!(palette.separator_color, Color32::from_rgb(245, 245, 245));
    }

    #[test]
    fn test_palettes_mirror_each_other() {
        let light = Palette::light();
        let dark = Palette::dark();
        assert_eq!(light.background, dark.text);
        assert_eq!(light.text, dark.background);
    }

    #[test]
    fn test_for_dark_mode_lookup() {
        assert_eq!(Palette::for_dark_mode(false), Palette::light());
        assert_eq!(Palette::for_dark_mode(true), Palette::dark());
    }

    #[test]
    fn test_is_dark() {
        assert!(!Palette::light().is_dark());
        assert!(Palette::dark().is_dark());
    }

    #[test]
    fn test_to_visuals_light() {
        let palette = Palette::light();
        let visuals = palette.to_visuals();
        assert!(!visuals.dark_mode);
        assert_eq!(visuals.panel_fill, palette.background);
    }

    #[test]
    fn test_to_visuals_dark() {
        let palette = Palette::dark();
        let visuals = palette.to_visuals();
        assert!(visuals.dark_mode);
        assert_eq!(visuals.panel_fill, palette.background);
    }
}
