//! Line index and cursor location.
//!
//! Provides line access over a screenplay buffer using a Rope, and resolves a cursor offset to
//! the line that contains it together with that line's classified element.
//!
//! Only `\n` separates lines (the Rope is built without Unicode/CR line breaks), so a trailing
//! `\r` stays part of the line text. All offsets are in Unicode scalar values (`char`).

use crate::patterns::Matcher;
use ropey::Rope;
use screenplay_lang::ScriptElement;
use serde::Serialize;

/// The line under a cursor.
///
/// `line_start <= offset <= line_end` for the offset it was computed from, and `element` is the
/// classification of `line_text` (`None` for blank lines, so callers keep the previously active
/// element instead of resetting to action).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineInfo {
    /// Zero-based line index.
    pub line_index: usize,
    /// Line text without its trailing `\n`.
    pub line_text: String,
    /// Char offset of the first character of the line.
    pub line_start: usize,
    /// Char offset just past the last character of the line (the position of its `\n`).
    pub line_end: usize,
    /// Cursor column within the line, in chars.
    pub column: usize,
    /// Classified element, if the line is not blank.
    pub element: Option<ScriptElement>,
}

/// Logical line index - implemented using Rope data structure
pub struct LineIndex {
    rope: Rope,
}

impl LineIndex {
    /// Create an empty line index
    pub fn new() -> Self {
        Self { rope: Rope::new() }
    }

    /// Build line index from text
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }

    /// Get total line count (an empty buffer has one empty line)
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Get total character count
    pub fn char_count(&self) -> usize {
        self.rope.len_chars()
    }

    /// Get text of the specified line (excluding newline)
    pub fn line_text(&self, line_number: usize) -> Option<String> {
        if line_number >= self.rope.len_lines() {
            return None;
        }

        let mut text = self.rope.line(line_number).to_string();
        if text.ends_with('\n') {
            text.pop();
        }

        Some(text)
    }

    /// Char offset of the start of `line_number`, clamped to the end of the buffer
    pub fn line_start(&self, line_number: usize) -> usize {
        if line_number >= self.rope.len_lines() {
            return self.rope.len_chars();
        }
        self.rope.line_to_char(line_number)
    }

    /// Length of `line_number` in chars, excluding its newline
    pub fn line_len(&self, line_number: usize) -> usize {
        if line_number >= self.rope.len_lines() {
            return 0;
        }
        let line = self.rope.line(line_number);
        let len = line.len_chars();
        if len > 0 && line.char(len - 1) == '\n' {
            len - 1
        } else {
            len
        }
    }

    /// Get line number and column from character offset
    ///
    /// Returns `None` if `char_offset` lies past the end of the buffer.
    pub fn char_offset_to_position(&self, char_offset: usize) -> Option<(usize, usize)> {
        if char_offset > self.rope.len_chars() {
            return None;
        }

        let line_idx = self.rope.char_to_line(char_offset);
        Some((line_idx, char_offset - self.rope.line_to_char(line_idx)))
    }

    /// Resolve `offset` to the line containing it.
    ///
    /// A cursor sitting on a `\n` belongs to the line that newline ends. An empty buffer or an
    /// offset past the end yields `LineInfo::default()`.
    pub fn locate(&self, offset: usize, matcher: &Matcher) -> LineInfo {
        if self.rope.len_chars() == 0 {
            return LineInfo::default();
        }
        let Some((line_index, column)) = self.char_offset_to_position(offset) else {
            return LineInfo::default();
        };

        let line_text = self.line_text(line_index).unwrap_or_default();
        let line_start = self.line_start(line_index);
        let line_end = line_start + line_text.chars().count();
        let element = matcher.classify(&line_text);

        LineInfo {
            line_index,
            line_text,
            line_start,
            line_end,
            column,
            element,
        }
    }
}

impl Default for LineIndex {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve `offset` in `text` to its [`LineInfo`] using the standard matcher.
pub fn locate(text: &str, offset: usize) -> LineInfo {
    LineIndex::from_text(text).locate(offset, Matcher::standard())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_line_index() {
        let index = LineIndex::new();
        assert_eq!(index.line_count(), 1);
        assert_eq!(index.char_count(), 0);
    }

    #[test]
    fn test_only_lf_splits_lines() {
        let index = LineIndex::from_text("A\r\nB\rC\u{2028}D");
        assert_eq!(index.line_count(), 2);
        assert_eq!(index.line_text(0).as_deref(), Some("A\r"));
        assert_eq!(index.line_text(1).as_deref(), Some("B\rC\u{2028}D"));
        assert_eq!(index.line_len(0), 2);
    }

    #[test]
    fn test_trailing_newline_adds_empty_line() {
        let index = LineIndex::from_text("INT. HOUSE\n");
        assert_eq!(index.line_count(), 2);
        assert_eq!(index.line_text(1).as_deref(), Some(""));
        assert_eq!(index.line_start(1), 11);
    }

    #[test]
    fn test_char_offset_to_position() {
        let index = LineIndex::from_text("ABC\nDEF\nGHI");

        assert_eq!(index.char_offset_to_position(0), Some((0, 0)));
        assert_eq!(index.char_offset_to_position(3), Some((0, 3)));
        assert_eq!(index.char_offset_to_position(4), Some((1, 0)));
        assert_eq!(index.char_offset_to_position(11), Some((2, 3)));
        assert_eq!(index.char_offset_to_position(12), None);
    }

    #[test]
    fn test_locate_cursor_on_newline_belongs_to_ending_line() {
        let text = "JOHN\nHello there.";
        let info = locate(text, 4);
        assert_eq!(info.line_index, 0);
        assert_eq!(info.line_text, "JOHN");
        assert_eq!(info.line_start, 0);
        assert_eq!(info.line_end, 4);
        assert_eq!(info.column, 4);
        assert_eq!(info.element, Some(ScriptElement::Character));

        let info = locate(text, 5);
        assert_eq!(info.line_index, 1);
        assert_eq!(info.column, 0);
        assert_eq!(info.element, Some(ScriptElement::Action));
    }

    #[test]
    fn test_locate_blank_line_has_no_element() {
        let info = locate("INT. HOUSE\n\nAction.", 11);
        assert_eq!(info.line_index, 1);
        assert_eq!(info.line_text, "");
        assert_eq!(info.element, None);
    }

    #[test]
    fn test_locate_out_of_range_fails_safe() {
        assert_eq!(locate("", 0), LineInfo::default());
        assert_eq!(locate("", 5), LineInfo::default());
        assert_eq!(locate("INT. HOUSE", 99), LineInfo::default());
    }

    #[test]
    fn test_locate_counts_chars_not_bytes() {
        let info = locate("JOSÉ\nOlá, amigo.", 7);
        assert_eq!(info.line_index, 1);
        assert_eq!(info.line_start, 5);
        assert_eq!(info.column, 2);
        assert_eq!(info.line_end, 16);
    }
}
