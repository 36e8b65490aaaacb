//! Theme Manager for Markpane
//!
//! Applies the active palette to the egui context. The dark-mode flag of
//! record lives in `EditorState` (the editor owns it, like the rest of its
//! state); this manager only tracks which palette the context currently
//! reflects so the visuals are rebuilt exactly once per flag change.
//!
//! # Usage
//!
//! ```ignore
//! let mut manager = ThemeManager::new();
//!
//! // Once per frame, before any panel is drawn:
//! manager.apply_if_changed(&ctx, state.dark_mode);
//! ```

use eframe::egui::Context;
use log::debug;

use super::Palette;

// ─────────────────────────────────────────────────────────────────────────────
// Theme Manager
// ─────────────────────────────────────────────────────────────────────────────

/// Installs palettes into the egui context on flag changes.
///
/// `apply_if_changed` is called at the top of every frame; it builds and sets
/// a complete `Visuals` only when the requested flag differs from what was
/// last applied. Because the visuals are installed before any panel draws,
/// a toggle repaints every themed element in the same frame.
#[derive(Debug, Clone, Default)]
pub struct ThemeManager {
    /// The dark-mode flag the context currently reflects; `None` before the
    /// first apply.
    applied_dark_mode: Option<bool>,
}

impl ThemeManager {
    /// Create a manager that has applied nothing yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a call to `apply_if_changed` with this flag would do work.
    pub fn needs_apply(&self, dark_mode: bool) -> bool {
        self.applied_dark_mode != Some(dark_mode)
    }

    /// Install the palette for `dark_mode` if it is not already active.
    ///
    /// Returns `true` if the visuals were rebuilt and set.
    pub fn apply_if_changed(&mut self, ctx: &Context, dark_mode: bool) -> bool {
        if !self.needs_apply(dark_mode) {
            return false;
        }

        let palette = Palette::for_dark_mode(dark_mode);
        ctx.set_visuals(palette.to_visuals());
        self.applied_dark_mode = Some(dark_mode);
        debug!(
            "Applied {} palette",
            if dark_mode { "dark" } else { "light" }
        );
        true
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manager_starts_unapplied() {
        let manager = ThemeManager::new();
        assert!(manager.needs_apply(false));
        assert!(manager.needs_apply(true));
    }

    #[test]
    fn test_apply_once_per_flag_value() {
        let ctx = Context::default();
        let mut manager = ThemeManager::new();

        assert!(manager.apply_if_changed(&ctx, false));
        assert!(!manager.apply_if_changed(&ctx, false));
        assert!(!manager.needs_apply(false));
    }

    #[test]
    fn test_apply_reacts_to_flag_change() {
        let ctx = Context::default();
        let mut manager = ThemeManager::new();

        manager.apply_if_changed(&ctx, false);
        assert!(manager.needs_apply(true));
        assert!(manager.apply_if_changed(&ctx, true));
        assert!(!manager.needs_apply(true));
        assert!(manager.needs_apply(false));
    }

    #[test]
    fn test_apply_installs_matching_visuals() {
        let ctx = Context::default();
        let mut manager = ThemeManager::new();

        manager.apply_if_changed(&ctx, true);
        assert!(ctx.style().visuals.dark_mode);
        assert_eq!(ctx.style().visuals.panel_fill, Palette::dark().background);

        manager.apply_if_changed(&ctx, false);
        assert!(!ctx.style().visuals.dark_mode);
        assert_eq!(ctx.style().visuals.panel_fill, Palette::light().background);
    }
}
