//! Rendered markdown pane for Markpane
//!
//! Draws a `PreviewDocument` into the right half of the window. The pane
//! is strictly read-only: it walks the block tree produced by the
//! renderer and maps each block onto egui labels, never touching the
//! markdown source itself.

use crate::preview::{InlineSpan, ListItem, PreviewBlock, PreviewDocument};
use crate::theme::Palette;
use eframe::egui::{self, Color32, FontId, RichText, ScrollArea, Ui, Vec2};

/// Default font size when none is configured.
const DEFAULT_FONT_SIZE: f32 = 16.0;

/// Vertical gap between top-level blocks.
const BLOCK_GAP: f32 = 6.0;

/// Indent per list nesting level.
const LIST_INDENT: f32 = 20.0;

// ─────────────────────────────────────────────────────────────────────────────
// Theme-aware Colors
// ─────────────────────────────────────────────────────────────────────────────

/// Colors for preview elements, derived from the active palette.
///
/// The primary text color comes straight from the palette role; the
/// accents (code background, list markers, quote bar) are fixed pairs
/// chosen per brightness.
#[derive(Debug, Clone)]
pub struct PreviewColors {
    pub text: Color32,
    pub code_text: Color32,
    pub code_bg: Color32,
    pub list_marker: Color32,
    pub quote_border: Color32,
    pub quote_text: Color32,
    pub rule: Color32,
}

impl PreviewColors {
    /// Create preview colors for the given palette.
    pub fn from_palette(palette: &Palette) -> Self {
        if palette.is_dark() {
            Self {
                text: palette.text,
                code_text: Color32::from_rgb(220, 220, 220),
                code_bg: Color32::from_rgb(45, 45, 45),
                list_marker: Color32::from_rgb(150, 150, 150),
                quote_border: Color32::from_rgb(100, 100, 100),
                quote_text: Color32::from_rgb(170, 170, 170),
                rule: Color32::from_rgb(80, 80, 80),
            }
        } else {
            Self {
                text: palette.text,
                code_text: Color32::from_rgb(30, 30, 30),
                code_bg: Color32::from_rgb(232, 232, 232),
                list_marker: Color32::from_rgb(100, 100, 100),
                quote_border: Color32::from_rgb(180, 180, 180),
                quote_text: Color32::from_rgb(100, 100, 100),
                rule: Color32::from_rgb(200, 200, 200),
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Preview Pane
// ─────────────────────────────────────────────────────────────────────────────

/// The rendered preview pane.
///
/// # Example
///
/// ```ignore
/// PreviewPane::new(cache.document())
///     .font_size(settings.font_size)
///     .show(ui, &palette);
/// ```
pub struct PreviewPane<'a> {
    /// The document to draw.
    document: &'a PreviewDocument,
    /// Base font size; headings scale up from this.
    font_size: f32,
}

impl<'a> PreviewPane<'a> {
    /// Create a preview pane for the given document.
    pub fn new(document: &'a PreviewDocument) -> Self {
        Self {
            document,
            font_size: DEFAULT_FONT_SIZE,
        }
    }

    /// Set the base font size.
    #[must_use]
    pub fn font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    /// Render the pane.
    pub fn show(self, ui: &mut Ui, palette: &Palette) {
        let colors = PreviewColors::from_palette(palette);

        ScrollArea::vertical()
            .id_source("preview_pane_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.add_space(4.0);
                for block in &self.document.blocks {
                    render_block(ui, block, &colors, self.font_size, 0);
                    ui.add_space(BLOCK_GAP);
                }
                ui.add_space(8.0);
            });
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Block Rendering
// ─────────────────────────────────────────────────────────────────────────────

fn render_block(ui: &mut Ui, block: &PreviewBlock, colors: &PreviewColors, font_size: f32, indent: usize) {
    match block {
        PreviewBlock::Heading { level, spans } => {
            render_spans(ui, spans, colors, heading_font_size(*level, font_size), indent, true);
        }
        PreviewBlock::Paragraph { spans } => {
            render_spans(ui, spans, colors, font_size, indent, false);
        }
        PreviewBlock::CodeBlock { language, literal } => {
            render_code_block(ui, colors, font_size, language, literal);
        }
        PreviewBlock::List {
            ordered,
            start,
            items,
        } => {
            render_list(ui, colors, font_size, indent, *ordered, *start, items);
        }
        PreviewBlock::BlockQuote { blocks } => {
            render_blockquote(ui, colors, font_size, indent, blocks);
        }
        PreviewBlock::Rule => {
            render_rule(ui, colors);
        }
    }
}

/// Font size for a heading level, scaled from the base size.
fn heading_font_size(level: u8, base: f32) -> f32 {
    match level {
        1 => base * 2.0,
        2 => base * 1.75,
        3 => base * 1.5,
        4 => base * 1.25,
        5 => base * 1.1,
        _ => base,
    }
}

/// Render a run of inline spans as one wrapped line of text.
fn render_spans(
    ui: &mut Ui,
    spans: &[InlineSpan],
    colors: &PreviewColors,
    font_size: f32,
    indent: usize,
    heading: bool,
) {
    ui.horizontal_wrapped(|ui| {
        // Spans join with no gap; adjacent runs read as one line
        ui.spacing_mut().item_spacing.x = 0.0;
        ui.add_space(4.0 + indent as f32 * LIST_INDENT);

        for span in spans {
            render_span(ui, span, colors, font_size, heading);
        }
    });
}

/// Render a single styled span.
fn render_span(ui: &mut Ui, span: &InlineSpan, colors: &PreviewColors, font_size: f32, heading: bool) {
    // Hard breaks arrive as bare newline spans
    if span.text == "\n" && span.link.is_none() {
        ui.end_row();
        return;
    }

    if span.style.code {
        ui.label(
            RichText::new(&span.text)
                .color(colors.code_text)
                .font(FontId::monospace(font_size * 0.9))
                .background_color(colors.code_bg),
        );
        return;
    }

    if let Some(url) = &span.link {
        // Hyperlink color comes from the applied theme visuals
        ui.hyperlink_to(styled_text(span, None, font_size, heading), url);
        return;
    }

    ui.label(styled_text(span, Some(colors.text), font_size, heading));
}

/// Build the styled label text for a span.
fn styled_text(
    span: &InlineSpan,
    color: Option<Color32>,
    font_size: f32,
    heading: bool,
) -> RichText {
    let mut text = RichText::new(&span.text).size(font_size);
    if let Some(color) = color {
        text = text.color(color);
    }
    if heading || span.style.bold {
        text = text.strong();
    }
    if span.style.italic {
        text = text.italics();
    }
    if span.style.strikethrough {
        text = text.strikethrough();
    }
    text
}

/// Render a fenced or indented code block.
fn render_code_block(ui: &mut Ui, colors: &PreviewColors, font_size: f32, language: &str, literal: &str) {
    egui::Frame::none()
        .fill(colors.code_bg)
        .inner_margin(8.0)
        .rounding(egui::Rounding::same(4.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            if !language.is_empty() {
                ui.label(
                    RichText::new(language)
                        .size(font_size * 0.8)
                        .color(colors.list_marker),
                );
            }
            ui.label(
                RichText::new(literal.trim_end())
                    .color(colors.code_text)
                    .font(FontId::monospace(font_size * 0.9)),
            );
        });
}

/// Render a bullet, ordered, or task list.
fn render_list(
    ui: &mut Ui,
    colors: &PreviewColors,
    font_size: f32,
    indent: usize,
    ordered: bool,
    start: u32,
    items: &[ListItem],
) {
    let mut number = start.max(1);

    for item in items {
        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing.x = 0.0;
            ui.add_space(4.0 + indent as f32 * LIST_INDENT);

            ui.label(
                RichText::new(list_marker(ordered, number, item.task, indent))
                    .color(colors.list_marker)
                    .size(font_size),
            );
            ui.add_space(6.0);

            // Inline content of the item sits on the marker line
            for block in &item.blocks {
                if let PreviewBlock::Paragraph { spans } = block {
                    for span in spans {
                        render_span(ui, span, colors, font_size, false);
                    }
                }
            }
        });

        // Nested blocks (sublists, quotes, code) go below the marker line
        for block in &item.blocks {
            if !matches!(block, PreviewBlock::Paragraph { .. }) {
                render_block(ui, block, colors, font_size, indent + 1);
            }
        }

        number += 1;
    }
}

/// Marker text for a list item.
fn list_marker(ordered: bool, number: u32, task: Option<bool>, indent: usize) -> String {
    match task {
        Some(true) => "☑".to_string(),
        Some(false) => "☐".to_string(),
        None if ordered => format!("{}.", number),
        None if indent == 0 => "\u{2022}".to_string(),
        None => "\u{25e6}".to_string(),
    }
}

/// Render a block quote with a vertical bar beside the quoted blocks.
fn render_blockquote(
    ui: &mut Ui,
    colors: &PreviewColors,
    font_size: f32,
    indent: usize,
    blocks: &[PreviewBlock],
) {
    // Reserve a paint slot for the bar; its height is known only after layout
    let bar_slot = ui.painter().add(egui::Shape::Noop);

    let quoted = PreviewColors {
        text: colors.quote_text,
        ..colors.clone()
    };

    let response = ui
        .horizontal(|ui| {
            ui.add_space(12.0);
            ui.vertical(|ui| {
                for block in blocks {
                    render_block(ui, block, &quoted, font_size, indent);
                }
            });
        })
        .response;

    let rect = response.rect;
    let bar = egui::Rect::from_min_size(rect.min, Vec2::new(4.0, rect.height()));
    ui.painter().set(
        bar_slot,
        egui::Shape::rect_filled(bar, 0.0, colors.quote_border),
    );
}

/// Render a thematic break as a thin full-width line.
fn render_rule(ui: &mut Ui, colors: &PreviewColors) {
    let (rect, _) =
        ui.allocate_exact_size(Vec2::new(ui.available_width(), 2.0), egui::Sense::hover());
    ui.painter().rect_filled(rect, 0.0, colors.rule);
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_font_size_ladder() {
        assert_eq!(heading_font_size(1, 16.0), 32.0);
        assert_eq!(heading_font_size(2, 16.0), 28.0);
        assert_eq!(heading_font_size(3, 16.0), 24.0);
        assert_eq!(heading_font_size(4, 16.0), 20.0);
        assert_eq!(heading_font_size(5, 16.0), 17.6);
        assert_eq!(heading_font_size(6, 16.0), 16.0);
    }

    #[test]
    fn test_preview_colors_use_palette_text() {
        let light = Palette::light();
        let colors = PreviewColors::from_palette(&light);
        assert_eq!(colors.text, light.text);

        let dark = Palette::dark();
        let colors = PreviewColors::from_palette(&dark);
        assert_eq!(colors.text, dark.text);
    }

    #[test]
    fn test_preview_colors_differ_by_brightness() {
        let light = PreviewColors::from_palette(&Palette::light());
        let dark = PreviewColors::from_palette(&Palette::dark());
        assert_ne!(light.code_bg, dark.code_bg);
        assert_ne!(light.rule, dark.rule);
    }

    #[test]
    fn test_list_marker_bullet_levels() {
        assert_eq!(list_marker(false, 1, None, 0), "\u{2022}");
        assert_eq!(list_marker(false, 1, None, 1), "\u{25e6}");
    }

    #[test]
    fn test_list_marker_ordered() {
        assert_eq!(list_marker(true, 3, None, 0), "3.");
        assert_eq!(list_marker(true, 12, None, 1), "12.");
    }

    #[test]
    fn test_list_marker_task_overrides_ordering() {
        assert_eq!(list_marker(true, 5, Some(false), 0), "☐");
        assert_eq!(list_marker(false, 1, Some(true), 0), "☑");
    }

    #[test]
    fn test_styled_text_applies_flags() {
        use crate::preview::InlineStyle;

        let span = InlineSpan {
            text: "styled".to_string(),
            style: InlineStyle {
                bold: true,
                italic: true,
                code: false,
                strikethrough: true,
            },
            link: None,
        };
        // Just verify construction does not panic and keeps the text
        let rich = styled_text(&span, Some(Color32::WHITE), 16.0, false);
        assert_eq!(rich.text(), "styled");
    }
}
