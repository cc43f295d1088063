//! Text Surface
//!
//! Editable surface abstraction the keyboard controller mutates, plus two
//! in-process implementations: a plain buffer and a zeroizing one for
//! sensitive entry.

use zeroize::Zeroizing;

/// A selection range in char offsets.
///
/// `start` is the anchor and `end` the head, so `end < start` is a valid
/// (reversed) selection. A collapsed selection is the caret.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    pub fn caret(pos: usize) -> Self {
        Self { start: pos, end: pos }
    }

    pub fn range(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Ordered bounds, regardless of selection direction
    pub fn normalized(&self) -> (usize, usize) {
        if self.start <= self.end {
            (self.start, self.end)
        } else {
            (self.end, self.start)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Trait for the external text field the keyboard edits.
///
/// All offsets are char indices; implementations clamp out-of-range values
/// instead of panicking. `replace_range` collapses the selection to the end
/// of the inserted text.
pub trait TextSurface {
    fn content(&self) -> &str;
    fn selection(&self) -> Selection;
    fn set_selection(&mut self, sel: Selection);
    fn replace_range(&mut self, start: usize, end: usize, text: &str);
    fn char_len(&self) -> usize;
    fn is_multiline(&self) -> bool;
    fn has_focus(&self) -> bool;
    fn set_focus(&mut self, focused: bool);
    /// Whether the host's native input method may feed this surface
    fn set_native_input_enabled(&mut self, enabled: bool);
    fn is_native_input_enabled(&self) -> bool;

    fn is_empty(&self) -> bool {
        self.char_len() == 0
    }
}

fn byte_offset(s: &str, char_pos: usize) -> usize {
    s.char_indices()
        .nth(char_pos)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

fn clamp_selection(sel: Selection, len: usize) -> Selection {
    Selection {
        start: sel.start.min(len),
        end: sel.end.min(len),
    }
}

// ============================================================================
// EditBuffer - plain in-process text surface
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct EditBuffer {
    content: String,
    selection: Selection,
    multiline: bool,
    focused: bool,
    native_input: bool,
}

impl EditBuffer {
    pub fn new() -> Self {
        Self {
            native_input: true,
            ..Self::default()
        }
    }

    pub fn multiline() -> Self {
        Self {
            multiline: true,
            ..Self::new()
        }
    }

    pub fn with_content(content: impl Into<String>) -> Self {
        let content = content.into();
        let len = content.chars().count();
        Self {
            content,
            selection: Selection::caret(len),
            ..Self::new()
        }
    }
}

impl TextSurface for EditBuffer {
    fn content(&self) -> &str {
        &self.content
    }

    fn selection(&self) -> Selection {
        self.selection
    }

    fn set_selection(&mut self, sel: Selection) {
        self.selection = clamp_selection(sel, self.char_len());
    }

    fn replace_range(&mut self, start: usize, end: usize, text: &str) {
        let len = self.char_len();
        let (start, end) = Selection::range(start.min(len), end.min(len)).normalized();
        let from = byte_offset(&self.content, start);
        let to = byte_offset(&self.content, end);
        self.content.replace_range(from..to, text);
        self.selection = Selection::caret(start + text.chars().count());
    }

    fn char_len(&self) -> usize {
        self.content.chars().count()
    }

    fn is_multiline(&self) -> bool {
        self.multiline
    }

    fn has_focus(&self) -> bool {
        self.focused
    }

    fn set_focus(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn set_native_input_enabled(&mut self, enabled: bool) {
        self.native_input = enabled;
    }

    fn is_native_input_enabled(&self) -> bool {
        self.native_input
    }
}

// ============================================================================
// SecureEditBuffer - for sensitive entry, wiped on drop
// ============================================================================

/// Single-line surface backed by zeroizing storage, for PINs and passwords.
#[derive(Debug, Clone)]
pub struct SecureEditBuffer {
    content: Zeroizing<String>,
    selection: Selection,
    focused: bool,
    native_input: bool,
}

impl Default for SecureEditBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl SecureEditBuffer {
    pub fn new() -> Self {
        Self {
            content: Zeroizing::new(String::new()),
            selection: Selection::default(),
            focused: false,
            native_input: true,
        }
    }
}

impl TextSurface for SecureEditBuffer {
    fn content(&self) -> &str {
        &self.content
    }

    fn selection(&self) -> Selection {
        self.selection
    }

    fn set_selection(&mut self, sel: Selection) {
        self.selection = clamp_selection(sel, self.char_len());
    }

    fn replace_range(&mut self, start: usize, end: usize, text: &str) {
        let len = self.char_len();
        let (start, end) = Selection::range(start.min(len), end.min(len)).normalized();
        let from = byte_offset(&self.content, start);
        let to = byte_offset(&self.content, end);
        self.content.replace_range(from..to, text);
        self.selection = Selection::caret(start + text.chars().count());
    }

    fn char_len(&self) -> usize {
        self.content.chars().count()
    }

    // PIN and password fields never accept newlines
    fn is_multiline(&self) -> bool {
        false
    }

    fn has_focus(&self) -> bool {
        self.focused
    }

    fn set_focus(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn set_native_input_enabled(&mut self, enabled: bool) {
        self.native_input = enabled;
    }

    fn is_native_input_enabled(&self) -> bool {
        self.native_input
    }
}

// ============================================================================
// Tests
// ============================================================================
