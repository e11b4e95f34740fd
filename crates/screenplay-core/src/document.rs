//! Whole-document classification.
//!
//! [`Matcher::classify`] looks at one line in isolation, so a line of dialogue is
//! indistinguishable from action. This pass walks the document once and re-labels the lines of a
//! character's block: after a cue, non-blank lines that classify as action become dialogue and
//! parentheticals stay inside the block. A blank line, scene heading, shot, transition or the
//! next cue ends the block.
//!
//! Every structural pass (characters, stats, continued dialogue, preview) consumes this
//! classification so they agree on where a dialogue block starts and stops.

use crate::patterns::Matcher;
use screenplay_lang::ScriptElement;

/// Split a buffer into lines (`\n` only; `N` newlines give `N + 1` lines).
pub fn lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
}

/// Classify every line of `text`, with dialogue context.
pub fn classify_document(matcher: &Matcher, text: &str) -> Vec<Option<ScriptElement>> {
    let mut in_block = false;

    lines(text)
        .map(|line| match matcher.classify(line) {
            None => {
                in_block = false;
                None
            }
            Some(ScriptElement::Character) => {
                in_block = true;
                Some(ScriptElement::Character)
            }
            Some(ScriptElement::Action) if in_block => Some(ScriptElement::Dialogue),
            Some(ScriptElement::Parenthetical) => Some(ScriptElement::Parenthetical),
            Some(other) => {
                in_block = false;
                Some(other)
            }
        })
        .collect()
}
