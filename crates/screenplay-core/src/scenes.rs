//! Scene extraction.
//!
//! Scenes are recomputed wholesale from the buffer. A heading keeps the number embedded in its
//! text (`12A. INT. HOUSE`); otherwise it is numbered by its position among all headings,
//! starting at 1. Auto-assigned numbers therefore shift when a scene is inserted above them.

use crate::annotations::LineAnnotations;
use crate::document::lines;
use crate::patterns::Matcher;
use serde::Serialize;

/// One scene heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneData {
    /// Identifier derived from the heading's line number (`scene-<line_number>`).
    pub id: String,
    /// Char offset of the start of the heading line.
    pub index: usize,
    /// Heading text, trimmed, with any leading scene number removed.
    pub text: String,
    /// One-based line number of the heading.
    pub line_number: usize,
    /// Embedded scene number, or the heading's one-based ordinal.
    pub scene_number: String,
    /// Echoed from the caller's annotations.
    pub locked: bool,
    /// Echoed from the caller's annotations.
    pub omitted: bool,
}

/// Assigns scene numbers in document order.
#[derive(Debug, Default)]
pub(crate) struct SceneNumbering {
    ordinal: usize,
}

impl SceneNumbering {
    /// Number the next heading. Must be called once per heading, in order.
    pub(crate) fn next(&mut self, matcher: &Matcher, heading: &str) -> String {
        self.ordinal += 1;
        matcher
            .scene_number(heading)
            .unwrap_or_else(|| self.ordinal.to_string())
    }
}

/// Extract every scene heading in `text`.
pub fn extract_scenes_with(
    matcher: &Matcher,
    text: &str,
    annotations: &LineAnnotations,
) -> Vec<SceneData> {
    let mut scenes = Vec::new();
    let mut numbering = SceneNumbering::default();
    let mut offset = 0;

    for (index, line) in lines(text).enumerate() {
        let line_chars = line.chars().count();
        if matcher.is_scene_heading(line) {
            let line_number = index + 1;
            scenes.push(SceneData {
                id: format!("scene-{line_number}"),
                index: offset,
                text: matcher.strip_scene_number(line).to_string(),
                line_number,
                scene_number: numbering.next(matcher, line),
                locked: annotations.is_locked(line_number),
                omitted: annotations.is_omitted(line_number),
            });
        }
        offset += line_chars + 1;
    }

    scenes
}

/// The scene containing one-based `line_number`: the last heading at or above it.
///
/// `scenes` must be in document order, as returned by [`extract_scenes_with`].
pub fn scene_at_line(scenes: &[SceneData], line_number: usize) -> Option<&SceneData> {
    let after = scenes.partition_point(|scene| scene.line_number <= line_number);
    after.checked_sub(1).map(|idx| &scenes[idx])
}
