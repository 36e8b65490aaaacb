//! Editor state for Markpane
//!
//! This module defines the `EditorState` struct holding the two pieces of
//! application state (the markdown source text and the dark-mode flag) and
//! the `EditorEvent` enum describing every way the UI can change them.
//!
//! Transitions are pure: `EditorState::apply` consumes an event and returns
//! a fresh state, never mutating in place. The app replaces its state with
//! the returned value, which keeps every transition auditable and testable
//! without a UI context.

// ─────────────────────────────────────────────────────────────────────────────
// Fixed Text
// ─────────────────────────────────────────────────────────────────────────────

/// Source text a fresh editor starts with.
pub const DEFAULT_SOURCE_TEXT: &str = "## Markdown Preview";

/// Marker sequence appended by the Bold toolbar button.
pub const BOLD_SNIPPET: &str = "**bold text**";

/// Marker sequence appended by the Italic toolbar button.
pub const ITALIC_SNIPPET: &str = "_italic text_";

/// Marker sequence appended by the Link toolbar button.
pub const LINK_SNIPPET: &str = "[link text](https://example.com)";

// ─────────────────────────────────────────────────────────────────────────────
// Events
// ─────────────────────────────────────────────────────────────────────────────

/// A user intent that changes editor state.
///
/// Every input the UI can produce is one of these variants; the panels
/// return them and the app feeds them through `EditorState::apply`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorEvent {
    /// The input pane buffer changed; carries the full new text.
    TextChanged(String),
    /// Toolbar: append the bold marker at the tail.
    InsertBold,
    /// Toolbar: append the italic marker at the tail.
    InsertItalic,
    /// Toolbar: append the link marker at the tail.
    InsertLink,
    /// Header: switch between the light and dark palettes.
    ThemeToggle,
}

impl EditorEvent {
    /// Whether applying this event can change `source_text`.
    ///
    /// The app refreshes the preview exactly when this is true.
    pub fn mutates_text(&self) -> bool {
        !matches!(self, EditorEvent::ThemeToggle)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// State
// ─────────────────────────────────────────────────────────────────────────────

/// The whole of the editor's mutable state.
///
/// Both fields are orthogonal: text events never touch `dark_mode` and the
/// theme toggle never touches `source_text`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorState {
    /// The markdown source, exactly as typed. Never normalized.
    pub source_text: String,
    /// Active palette flag; `false` is the light palette.
    pub dark_mode: bool,
}

impl Default for EditorState {
    fn default() -> Self {
        Self {
            source_text: DEFAULT_SOURCE_TEXT.to_string(),
            dark_mode: false,
        }
    }
}

impl EditorState {
    /// Create the launch state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an event, returning the successor state.
    ///
    /// Total over all inputs: any string is accepted verbatim (empty,
    /// unicode, malformed markdown), and no variant has an error path.
    /// Toolbar inserts append at the tail of the text, matching the
    /// observed behavior this editor reproduces; they do not consider a
    /// cursor position.
    pub fn apply(&self, event: EditorEvent) -> EditorState {
        match event {
            EditorEvent::TextChanged(new_text) => EditorState {
                source_text: new_text,
                dark_mode: self.dark_mode,
            },
            EditorEvent::InsertBold => self.append(BOLD_SNIPPET),
            EditorEvent::InsertItalic => self.append(ITALIC_SNIPPET),
            EditorEvent::InsertLink => self.append(LINK_SNIPPET),
            EditorEvent::ThemeToggle => EditorState {
                source_text: self.source_text.clone(),
                dark_mode: !self.dark_mode,
            },
        }
    }

    /// Successor state with `snippet` appended to the tail of the text.
    fn append(&self, snippet: &str) -> EditorState {
        let mut source_text = String::with_capacity(self.source_text.len() + snippet.len());
        source_text.push_str(&self.source_text);
        source_text.push_str(snippet);
        EditorState {
            source_text,
            dark_mode: self.dark_mode,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ─────────────────────────────────────────────────────────────────────────
    // Initial State
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_default_state() {
        let state = EditorState::default();
        assert_eq!(state.source_text, "## Markdown Preview");
        assert!(!state.dark_mode);
    }

    #[test]
    fn test_new_matches_default() {
        assert_eq!(EditorState::new(), EditorState::default());
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Text Replacement
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_text_changed_replaces_verbatim() {
        let state = EditorState::default();
        let next = state.apply(EditorEvent::TextChanged("# Hello".to_string()));
        assert_eq!(next.source_text, "# Hello");
    }

    #[test]
    fn test_text_changed_keeps_whitespace_and_unicode() {
        let inputs = [
            "  leading and trailing  ",
            "line one\nline two\n",
            "tabs\tand\r\nwindows endings",
            "emoji 🦀 and ümlauts",
            "**unbalanced _markers",
        ];
        for input in inputs {
            let next = EditorState::default().apply(EditorEvent::TextChanged(input.to_string()));
            assert_eq!(next.source_text, input, "text must round unchanged: {input:?}");
        }
    }

    #[test]
    fn test_text_changed_accepts_empty() {
        let next = EditorState::default().apply(EditorEvent::TextChanged(String::new()));
        assert_eq!(next.source_text, "");
    }

    #[test]
    fn test_text_changed_preserves_dark_mode() {
        let dark = EditorState::default().apply(EditorEvent::ThemeToggle);
        let next = dark.apply(EditorEvent::TextChanged("abc".to_string()));
        assert!(next.dark_mode);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Toolbar Appends
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_insert_bold_appends_at_tail() {
        let state = EditorState {
            source_text: "abc".to_string(),
            dark_mode: false,
        };
        let next = state.apply(EditorEvent::InsertBold);
        assert_eq!(next.source_text, "abc**bold text**");
    }

    #[test]
    fn test_insert_italic_appends_at_tail() {
        let state = EditorState {
            source_text: "abc".to_string(),
            dark_mode: false,
        };
        let next = state.apply(EditorEvent::InsertItalic);
        assert_eq!(next.source_text, "abc_italic text_");
    }

    #[test]
    fn test_insert_link_appends_at_tail() {
        let state = EditorState {
            source_text: "abc".to_string(),
            dark_mode: false,
        };
        let next = state.apply(EditorEvent::InsertLink);
        assert_eq!(next.source_text, "abc[link text](https://example.com)");
    }

    #[test]
    fn test_insert_bold_from_default() {
        let next = EditorState::default().apply(EditorEvent::InsertBold);
        assert_eq!(next.source_text, "## Markdown Preview**bold text**");
    }

    #[test]
    fn test_inserts_only_touch_the_tail() {
        // The prefix must survive byte for byte, whatever it holds.
        let prefixes = ["", "x", "multi\nline\n", "ünïcode 🦀", "  spaces  "];
        for prefix in prefixes {
            let state = EditorState {
                source_text: prefix.to_string(),
                dark_mode: false,
            };
            let next = state.apply(EditorEvent::InsertBold);
            assert!(next.source_text.starts_with(prefix));
            assert!(next.source_text.ends_with(BOLD_SNIPPET));
            assert_eq!(next.source_text.len(), prefix.len() + BOLD_SNIPPET.len());
        }
    }

    #[test]
    fn test_insert_preserves_dark_mode() {
        let dark = EditorState::default().apply(EditorEvent::ThemeToggle);
        assert!(dark.apply(EditorEvent::InsertBold).dark_mode);
        assert!(dark.apply(EditorEvent::InsertItalic).dark_mode);
        assert!(dark.apply(EditorEvent::InsertLink).dark_mode);
    }

    #[test]
    fn test_triple_link_insert_concatenates() {
        let empty = EditorState::default().apply(EditorEvent::TextChanged(String::new()));
        let next = empty
            .apply(EditorEvent::InsertLink)
            .apply(EditorEvent::InsertLink)
            .apply(EditorEvent::InsertLink);
        assert_eq!(next.source_text, LINK_SNIPPET.repeat(3));
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Theme Toggle
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_theme_toggle_flips() {
        let state = EditorState::default();
        assert!(state.apply(EditorEvent::ThemeToggle).dark_mode);
    }

    #[test]
    fn test_double_toggle_restores_theme() {
        let state = EditorState::default();
        let toggled_twice = state
            .apply(EditorEvent::ThemeToggle)
            .apply(EditorEvent::ThemeToggle);
        assert_eq!(toggled_twice.dark_mode, state.dark_mode);
    }

    #[test]
    fn test_odd_toggle_count_inverts() {
        let mut state = EditorState::default();
        for _ in 0..5 {
            state = state.apply(EditorEvent::ThemeToggle);
        }
        assert!(state.dark_mode);
    }

    #[test]
    fn test_toggle_preserves_text() {
        let state = EditorState::default().apply(EditorEvent::TextChanged("kept".to_string()));
        let next = state.apply(EditorEvent::ThemeToggle);
        assert_eq!(next.source_text, "kept");
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Purity
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_apply_leaves_original_untouched() {
        let state = EditorState::default();
        let snapshot = state.clone();
        let _ = state.apply(EditorEvent::InsertBold);
        let _ = state.apply(EditorEvent::ThemeToggle);
        let _ = state.apply(EditorEvent::TextChanged("other".to_string()));
        assert_eq!(state, snapshot);
    }

    #[test]
    fn test_event_text_mutation_classification() {
        assert!(EditorEvent::TextChanged(String::new()).mutates_text());
        assert!(EditorEvent::InsertBold.mutates_text());
        assert!(EditorEvent::InsertItalic.mutates_text());
        assert!(EditorEvent::InsertLink.mutates_text());
        assert!(!EditorEvent::ThemeToggle.mutates_text());
    }
}
