//! Answer field for the active screen.
//!
//! Behaves like a numeric form input: only characters that can appear in a
//! number are accepted. The text lives in a fixed-capacity `ArrayString`, so
//! typing never allocates.

use arrayvec::ArrayString;

/// Maximum number of characters the field holds.
pub const ANSWER_MAX_LEN: usize = 12;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerField {
    text: ArrayString<ANSWER_MAX_LEN>,
}

impl AnswerField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        self.text.as_str()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Append `ch` if it keeps the text number-shaped. Returns whether it was taken.
    ///
    /// A minus sign is only accepted first; at most one decimal point.
    pub fn push(&mut self, ch: char) -> bool {
        let ok = match ch {
            '0'..='9' => true,
            '-' => self.text.is_empty(),
            '.' => !self.text.contains('.'),
            _ => false,
        };
        ok && self.text.try_push(ch).is_ok()
    }

    pub fn pop(&mut self) -> Option<char> {
        self.text.pop()
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Return the current text and leave the field empty.
    pub fn take(&mut self) -> ArrayString<ANSWER_MAX_LEN> {
        std::mem::take(&mut self.text)
    }
}
