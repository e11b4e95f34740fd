//! Aggregate script statistics.

use crate::annotations::LineAnnotations;
use crate::characters::extract_from_lines;
use crate::document::{classify_document, lines};
use crate::patterns::Matcher;
use crate::scenes::extract_scenes_with;
use screenplay_lang::ScriptElement;
use serde::Serialize;

/// Whole-buffer statistics for the status bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptStats {
    /// Whitespace-delimited tokens in the trimmed buffer.
    pub words: usize,
    /// Chars in the trimmed buffer.
    pub chars: usize,
    /// `ceil(line_count / lines_per_page)`.
    pub pages: usize,
    /// Estimated screen time in minutes (one minute per page).
    pub read_time: usize,
    /// Share of non-blank lines that are dialogue, rounded to a whole percent.
    pub dialogue_percent: u32,
    /// Number of scene headings.
    pub scene_count: usize,
    /// Number of distinct speaking characters.
    pub character_count: usize,
}

/// Compute [`ScriptStats`] for `text`.
///
/// A blank or whitespace-only buffer yields all zeros.
pub fn calculate_stats_with(matcher: &Matcher, text: &str, lines_per_page: usize) -> ScriptStats {
    if text.trim().is_empty() {
        return ScriptStats::default();
    }
    let elements = classify_document(matcher, text);
    let lines: Vec<&str> = lines(text).collect();
    let scene_count = extract_scenes_with(matcher, text, &LineAnnotations::default()).len();
    let character_count = extract_from_lines(matcher, &lines).len();

    summarize(text, &elements, scene_count, character_count, lines_per_page)
}

/// Build stats from an existing classification and extractor counts.
pub(crate) fn summarize(
    text: &str,
    elements: &[Option<ScriptElement>],
    scene_count: usize,
    character_count: usize,
    lines_per_page: usize,
) -> ScriptStats {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return ScriptStats::default();
    }

    let pages = elements.len().div_ceil(lines_per_page.max(1));

    ScriptStats {
        words: trimmed.split_whitespace().count(),
        chars: trimmed.chars().count(),
        pages,
        read_time: pages,
        dialogue_percent: dialogue_percent(elements),
        scene_count,
        character_count,
    }
}

fn dialogue_percent(elements: &[Option<ScriptElement>]) -> u32 {
    let non_blank = elements.iter().filter(|element| element.is_some()).count();
    if non_blank == 0 {
        return 0;
    }
    let dialogue = elements
        .iter()
        .filter(|element| **element == Some(ScriptElement::Dialogue))
        .count();
    (dialogue as f64 * 100.0 / non_blank as f64).round() as u32
}
