//! Main application module for Markpane
//!
//! This module implements the eframe App trait for the main application,
//! wiring the header, toolbar, and the two panes to the editor state.
//!
//! All state changes flow through `handle_event`: the UI components only
//! report intents, and `EditorState::apply` produces the next state. The
//! preview cache is refreshed whenever an event changed the text.

use crate::config::{self, Settings, WindowSize};
use crate::preview::PreviewCache;
use crate::state::{EditorEvent, EditorState};
use crate::theme::{Palette, ThemeManager};
use crate::ui::{EditorPane, Header, HeaderAction, PreviewPane, Toolbar, ToolbarAction};
use eframe::egui;
use log::{debug, info};

/// Width of the divider between the editor and preview panes.
const SEPARATOR_WIDTH: f32 = 1.0;

/// The main application struct that holds all state and implements eframe::App.
pub struct MarkpaneApp {
    /// The editor state: source text and dark mode flag
    state: EditorState,
    /// User preferences loaded from the config file
    settings: Settings,
    /// Applies palette visuals to the egui context when dark mode flips
    theme: ThemeManager,
    /// Header bar component
    header: Header,
    /// Toolbar component
    toolbar: Toolbar,
    /// Rendered preview of the current source text
    preview: PreviewCache,
    /// Last known window size (for persistence)
    last_window_size: Option<egui::Vec2>,
}

impl MarkpaneApp {
    /// Create the application with the given settings.
    ///
    /// The editor state always starts from its built-in defaults; only
    /// preferences come from the settings.
    fn with_settings(settings: Settings) -> Self {
        let state = EditorState::new();
        let preview = PreviewCache::new(&state.source_text);

        Self {
            state,
            settings,
            theme: ThemeManager::new(),
            header: Header::new(),
            toolbar: Toolbar::new(),
            preview,
            last_window_size: None,
        }
    }

    /// Create a new MarkpaneApp instance.
    ///
    /// This loads preferences from the config file and applies the initial
    /// palette to the egui context.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        info!("Initializing Markpane");

        let mut app = Self::with_settings(config::load_config());
        app.theme.apply_if_changed(&cc.egui_ctx, app.state.dark_mode);
        app
    }

    /// Apply an editor event and refresh the preview if the text changed.
    fn handle_event(&mut self, event: EditorEvent) {
        debug!("Applying event: {:?}", event);

        let refresh = event.mutates_text();
        self.state = self.state.apply(event);

        if refresh {
            self.preview.refresh(&self.state.source_text);
        }
    }

    /// Track window size changes for persistence.
    fn track_window_size(&mut self, ctx: &egui::Context) {
        ctx.input(|i| {
            if let Some(rect) = i.viewport().inner_rect {
                let size = rect.size();
                let changed = self
                    .last_window_size
                    .map(|s| (s - size).length() > 1.0)
                    .unwrap_or(true);

                if changed {
                    self.last_window_size = Some(size);
                    self.settings.window_size = WindowSize {
                        width: size.x,
                        height: size.y,
                    };
                    debug!("Window size updated: {}x{}", size.x, size.y);
                }
            }
        });
    }

    /// Render the header and toolbar strips, collecting triggered events.
    fn render_top_panels(&mut self, ctx: &egui::Context, palette: &Palette) -> Vec<EditorEvent> {
        let mut events = Vec::new();

        egui::TopBottomPanel::top("header")
            .frame(
                egui::Frame::none()
                    .fill(palette.toolbar_background)
                    .inner_margin(egui::Margin::symmetric(8.0, 4.0)),
            )
            .show_separator_line(false)
            .show(ctx, |ui| {
                if let Some(HeaderAction::ToggleTheme) =
                    self.header.show(ui, palette, self.state.dark_mode)
                {
                    events.push(EditorEvent::ThemeToggle);
                }
            });

        egui::TopBottomPanel::top("toolbar")
            .frame(egui::Frame::none().inner_margin(egui::Margin::ZERO))
            .show_separator_line(false)
            .show(ctx, |ui| {
                if let Some(action) = self.toolbar.show(ui, palette) {
                    events.push(match action {
                        ToolbarAction::Bold => EditorEvent::InsertBold,
                        ToolbarAction::Italic => EditorEvent::InsertItalic,
                        ToolbarAction::Link => EditorEvent::InsertLink,
                    });
                }
            });

        events
    }

    /// Render the editor/preview split. Returns whether the buffer changed.
    fn render_panes(&mut self, ctx: &egui::Context, palette: &Palette, buffer: &mut String) -> bool {
        let mut changed = false;

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(palette.background))
            .show(ctx, |ui| {
                let total = ui.available_size();
                let pane_width = (total.x - SEPARATOR_WIDTH) / 2.0;

                ui.horizontal(|ui| {
                    ui.spacing_mut().item_spacing.x = 0.0;

                    // Left half: markdown input
                    ui.allocate_ui_with_layout(
                        egui::Vec2::new(pane_width, total.y),
                        egui::Layout::top_down(egui::Align::Min),
                        |ui| {
                            ui.set_min_size(egui::Vec2::new(pane_width, total.y));
                            let output = EditorPane::new()
                                .font_size(self.settings.font_size)
                                .show(ui, buffer);
                            changed = output.changed;
                        },
                    );

                    // 1px divider in the separator role
                    let (rect, _) = ui.allocate_exact_size(
                        egui::Vec2::new(SEPARATOR_WIDTH, total.y),
                        egui::Sense::hover(),
                    );
                    ui.painter().rect_filled(rect, 0.0, palette.separator_color);

                    // Right half: rendered preview
                    ui.allocate_ui_with_layout(
                        egui::Vec2::new(pane_width, total.y),
                        egui::Layout::top_down(egui::Align::Min),
                        |ui| {
                            ui.set_min_size(egui::Vec2::new(pane_width, total.y));
                            PreviewPane::new(self.preview.document())
                                .font_size(self.settings.font_size)
                                .show(ui, palette);
                        },
                    );
                });
            });

        changed
    }
}

impl eframe::App for MarkpaneApp {
    /// Called each time the UI needs repainting.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply the palette first so every panel below draws with it
        self.theme.apply_if_changed(ctx, self.state.dark_mode);
        let palette = Palette::for_dark_mode(self.state.dark_mode);

        self.track_window_size(ctx);

        let events = self.render_top_panels(ctx, &palette);

        // The text edit works on a scratch buffer; the state string itself
        // is never handed out mutably
        let mut buffer = self.state.source_text.clone();
        let text_changed = self.render_panes(ctx, &palette, &mut buffer);

        // Text edits apply before toolbar inserts, so a keystroke and a
        // click landing in the same frame both take effect
        if text_changed {
            self.handle_event(EditorEvent::TextChanged(buffer));
        }
        for event in events {
            self.handle_event(event);
        }
    }

    /// Called when the application is about to close.
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Application exiting");
        config::save_config_silent(&self.settings);
    }

    /// Save persistent state.
    fn save(&mut self, _storage: &mut dyn eframe::Storage) {
        debug!("Saving application state");
        config::save_config_silent(&self.settings);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
