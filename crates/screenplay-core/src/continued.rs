//! `(MORE)` / `(CONT'D)` insertion points.
//!
//! A speech that runs across a page break gets `(MORE)` at the bottom of the page and
//! `(CONT'D)` on the cue carried to the next one; a speaker resuming after an interruption gets
//! `(CONT'D)` on the repeated cue. The analyzer only reports line indices; inserting the
//! markers is up to the renderer.

use crate::document::{classify_document, lines};
use crate::patterns::Matcher;
use screenplay_lang::ScriptElement;
use serde::Serialize;
use std::collections::BTreeSet;

/// Marker positions, as zero-based line indices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContinuedDialogue {
    /// Lines after which `(MORE)` belongs.
    pub more_lines: BTreeSet<usize>,
    /// Lines that need a `(CONT'D)` cue.
    pub contd_lines: BTreeSet<usize>,
}

impl ContinuedDialogue {
    /// Returns `true` if no marker is needed anywhere.
    pub fn is_empty(&self) -> bool {
        self.more_lines.is_empty() && self.contd_lines.is_empty()
    }
}

#[derive(Debug, Default)]
struct BlockState {
    in_dialogue: bool,
    character: Option<String>,
    start_line: usize,
}

impl BlockState {
    fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Find continued-dialogue markers in `text`, paginated at `lines_per_page`.
pub fn analyze_continued_dialogue_with(
    matcher: &Matcher,
    text: &str,
    lines_per_page: usize,
) -> ContinuedDialogue {
    let elements = classify_document(matcher, text);
    let lines: Vec<&str> = lines(text).collect();
    analyze_elements(matcher, &lines, &elements, lines_per_page)
}

pub(crate) fn analyze_elements(
    matcher: &Matcher,
    lines: &[&str],
    elements: &[Option<ScriptElement>],
    lines_per_page: usize,
) -> ContinuedDialogue {
    let lines_per_page = lines_per_page.max(1);
    let mut result = ContinuedDialogue::default();
    let mut state = BlockState::default();

    for (index, (line, element)) in lines.iter().zip(elements).enumerate() {
        match element {
            Some(ScriptElement::Character) => {
                let name = matcher.character_name(line);
                if state.in_dialogue && name.is_some() && state.character == name {
                    result.contd_lines.insert(index);
                }
                state.in_dialogue = true;
                state.character = name;
                state.start_line = index;
            }
            Some(ScriptElement::Dialogue | ScriptElement::Parenthetical) => {
                if state.in_dialogue
                    && (index + 1) % lines_per_page == 0
                    && index - state.start_line > 1
                {
                    result.more_lines.insert(index);
                    result.contd_lines.insert(index + 1);
                }
            }
            Some(ScriptElement::Scene | ScriptElement::Action | ScriptElement::Transition) => {
                state.reset();
            }
            _ => {}
        }
    }

    result
}
