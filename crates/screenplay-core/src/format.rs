//! Plain-text preview rendering.
//!
//! Applies the [`StyleTable`](screenplay_lang::StyleTable) to a classified buffer: case
//! conversion, indentation in monospace columns and right/center alignment within the page
//! width. Alignment uses display width, so wide (CJK) characters count as two columns.

use crate::document::{classify_document, lines};
use crate::patterns::Matcher;
use screenplay_lang::{Alignment, ElementStyle, ScreenplayConfig};
use tracing::debug;
use unicode_width::UnicodeWidthStr;

/// Lay out one line of text within `width` columns.
///
/// Text wider than the page is never truncated; it simply loses its padding.
pub fn format_line(text: &str, style: &ElementStyle, width: usize) -> String {
    let text = text.trim();
    if text.is_empty() {
        return String::new();
    }
    let text = if style.uppercase {
        text.to_uppercase()
    } else {
        text.to_string()
    };
    let text_width = text.width();

    let pad = match style.alignment {
        Alignment::Left => style.indent,
        Alignment::Right => width.saturating_sub(text_width).max(style.indent),
        Alignment::Center => {
            let span = width.saturating_sub(style.indent);
            style.indent + span.saturating_sub(text_width) / 2
        }
    };
    format!("{}{}", " ".repeat(pad), text)
}

/// Render `text` as a formatted plain-text preview.
///
/// Blank lines stay blank; every other line is laid out with its element's style.
pub fn render_preview_with(matcher: &Matcher, text: &str, config: &ScreenplayConfig) -> String {
    let elements = classify_document(matcher, text);
    debug!(lines = elements.len(), width = config.page_width, "rendering preview");

    lines(text)
        .zip(elements)
        .map(|(line, element)| match element {
            Some(element) => format_line(line, config.styles.get(element), config.page_width),
            None => String::new(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}
