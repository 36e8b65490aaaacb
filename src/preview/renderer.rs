//! Markdown rendering boundary
//!
//! Wraps comrak behind a single pure function, `render_document`, that turns
//! markdown source into an owned `PreviewDocument`: a flat list of blocks
//! whose text is already flattened into styled spans. The preview pane draws
//! this tree; nothing downstream touches comrak.
//!
//! comrak's AST is arena-allocated and cannot outlive its arena, so the
//! conversion to owned data happens here, inside the render call.
//!
//! `render_document` is total and deterministic: any string (empty, unicode,
//! malformed markdown) produces a document, and equal inputs produce equal
//! documents.

use comrak::{
    nodes::{AstNode, ListType as ComrakListType, NodeValue},
    parse_document, Arena, Options,
};

// ─────────────────────────────────────────────────────────────────────────────
// Rendered Document Types
// ─────────────────────────────────────────────────────────────────────────────

/// A fully rendered markdown document, ready for drawing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreviewDocument {
    /// Top-level blocks in source order.
    pub blocks: Vec<PreviewBlock>,
}

impl PreviewDocument {
    /// The document of the empty source text.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether the document has no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// One rendered block element.
#[derive(Debug, Clone, PartialEq)]
pub enum PreviewBlock {
    /// Heading with level 1-6.
    Heading { level: u8, spans: Vec<InlineSpan> },
    /// Regular paragraph.
    Paragraph { spans: Vec<InlineSpan> },
    /// Fenced or indented code block.
    CodeBlock { language: String, literal: String },
    /// Bullet or numbered list.
    List {
        ordered: bool,
        start: u32,
        items: Vec<ListItem>,
    },
    /// Block quote containing nested blocks.
    BlockQuote { blocks: Vec<PreviewBlock> },
    /// Thematic break (horizontal rule).
    Rule,
}

impl PreviewBlock {
    /// All span text of this block and its descendants, concatenated.
    pub fn plain_text(&self) -> String {
        let mut text = String::new();
        self.collect_text(&mut text);
        text
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            PreviewBlock::Heading { spans, .. } | PreviewBlock::Paragraph { spans } => {
                for span in spans {
                    out.push_str(&span.text);
                }
            }
            PreviewBlock::CodeBlock { literal, .. } => out.push_str(literal),
            PreviewBlock::List { items, .. } => {
                for item in items {
                    for block in &item.blocks {
                        block.collect_text(out);
                    }
                }
            }
            PreviewBlock::BlockQuote { blocks } => {
                for block in blocks {
                    block.collect_text(out);
                }
            }
            PreviewBlock::Rule => {}
        }
    }
}

/// One list item; `task` is set for task-list items (`- [ ]` / `- [x]`).
#[derive(Debug, Clone, PartialEq)]
pub struct ListItem {
    pub blocks: Vec<PreviewBlock>,
    pub task: Option<bool>,
}

/// A run of text with uniform styling.
#[derive(Debug, Clone, PartialEq)]
pub struct InlineSpan {
    pub text: String,
    pub style: InlineStyle,
    /// Destination URL if this run sits inside a link.
    pub link: Option<String>,
}

/// Style flags accumulated while descending nested emphasis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InlineStyle {
    pub bold: bool,
    pub italic: bool,
    pub code: bool,
    pub strikethrough: bool,
}

// ─────────────────────────────────────────────────────────────────────────────
// Rendering
// ─────────────────────────────────────────────────────────────────────────────

/// Render markdown source into a `PreviewDocument`.
///
/// Accepts any string. Unclosed markers, broken links, and stray HTML all
/// render as comrak interprets them; raw HTML is shown as literal text
/// rather than interpreted.
pub fn render_document(source: &str) -> PreviewDocument {
    let arena = Arena::new();
    let root = parse_document(&arena, source, &comrak_options());

    PreviewDocument {
        blocks: convert_blocks(root.children()),
    }
}

/// comrak options for the preview.
///
/// Strikethrough, task lists, and autolinks are understood; tables and
/// footnotes are not (pipe tables render as plain text).
fn comrak_options() -> Options {
    let mut options = Options::default();
    options.extension.strikethrough = true;
    options.extension.tasklist = true;
    options.extension.autolink = true;
    options
}

fn convert_blocks<'a>(nodes: impl Iterator<Item = &'a AstNode<'a>>) -> Vec<PreviewBlock> {
    nodes.filter_map(convert_block).collect()
}

fn convert_block<'a>(node: &'a AstNode<'a>) -> Option<PreviewBlock> {
    let value = &node.data.borrow().value;
    match value {
        NodeValue::Heading(heading) => Some(PreviewBlock::Heading {
            level: heading.level,
            spans: collect_spans(node),
        }),
        NodeValue::Paragraph => Some(PreviewBlock::Paragraph {
            spans: collect_spans(node),
        }),
        NodeValue::CodeBlock(code) => Some(PreviewBlock::CodeBlock {
            language: code.info.clone(),
            literal: code.literal.clone(),
        }),
        NodeValue::List(list) => Some(PreviewBlock::List {
            ordered: list.list_type == ComrakListType::Ordered,
            start: list.start as u32,
            items: node.children().filter_map(convert_list_item).collect(),
        }),
        NodeValue::BlockQuote => Some(PreviewBlock::BlockQuote {
            blocks: convert_blocks(node.children()),
        }),
        NodeValue::ThematicBreak => Some(PreviewBlock::Rule),
        // Raw HTML blocks are shown as their literal text, never interpreted.
        NodeValue::HtmlBlock(html) => Some(PreviewBlock::Paragraph {
            spans: vec![InlineSpan {
                text: html.literal.trim_end().to_string(),
                style: InlineStyle::default(),
                link: None,
            }],
        }),
        _ => None,
    }
}

fn convert_list_item<'a>(node: &'a AstNode<'a>) -> Option<ListItem> {
    let value = &node.data.borrow().value;
    let task = match value {
        NodeValue::Item(_) => None,
        NodeValue::TaskItem(checked) => {
            Some(checked.map(|c| c == 'x' || c == 'X').unwrap_or(false))
        }
        _ => return None,
    };
    Some(ListItem {
        blocks: convert_blocks(node.children()),
        task,
    })
}

/// Flatten the inline children of a block node into styled spans.
fn collect_spans<'a>(node: &'a AstNode<'a>) -> Vec<InlineSpan> {
    let mut spans = Vec::new();
    for child in node.children() {
        collect_inline(child, InlineStyle::default(), None, &mut spans);
    }
    spans
}

fn collect_inline<'a>(
    node: &'a AstNode<'a>,
    style: InlineStyle,
    link: Option<&str>,
    out: &mut Vec<InlineSpan>,
) {
    let value = &node.data.borrow().value;
    match value {
        NodeValue::Text(text) => out.push(InlineSpan {
            text: text.clone(),
            style,
            link: link.map(str::to_string),
        }),
        NodeValue::Code(code) => out.push(InlineSpan {
            text: code.literal.clone(),
            style: InlineStyle { code: true, ..style },
            link: link.map(str::to_string),
        }),
        NodeValue::SoftBreak => out.push(InlineSpan {
            text: " ".to_string(),
            style,
            link: link.map(str::to_string),
        }),
        NodeValue::LineBreak => out.push(InlineSpan {
            text: "\n".to_string(),
            style,
            link: link.map(str::to_string),
        }),
        NodeValue::Strong => {
            let style = InlineStyle { bold: true, ..style };
            for child in node.children() {
                collect_inline(child, style, link, out);
            }
        }
        NodeValue::Emph => {
            let style = InlineStyle {
                italic: true,
                ..style
            };
            for child in node.children() {
                collect_inline(child, style, link, out);
            }
        }
        NodeValue::Strikethrough => {
            let style = InlineStyle {
                strikethrough: true,
                ..style
            };
            for child in node.children() {
                collect_inline(child, style, link, out);
            }
        }
        NodeValue::Link(node_link) => {
            for child in node.children() {
                collect_inline(child, style, Some(&node_link.url), out);
            }
        }
        // Images cannot be fetched here; the alt text links to the source.
        NodeValue::Image(node_link) => {
            for child in node.children() {
                collect_inline(child, style, Some(&node_link.url), out);
            }
        }
        NodeValue::HtmlInline(html) => out.push(InlineSpan {
            text: html.clone(),
            style,
            link: link.map(str::to_string),
        }),
        _ => {
            for child in node.children() {
                collect_inline(child, style, link, out);
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
