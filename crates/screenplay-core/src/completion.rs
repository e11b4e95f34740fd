//! Auto-complete suggestions.
//!
//! Three independent suggesters look at the current line: character names, scene-heading
//! prefixes and transitions. [`Completer::suggest`] consults them in that order and shows the
//! first non-empty result; choosing an entry replaces the whole line
//! (see [`apply_suggestion`]).

use crate::line_index::LineIndex;
use screenplay_lang::{DEFAULT_MAX_SUGGESTIONS, Vocabulary};
use serde::Serialize;
use unicode_segmentation::UnicodeSegmentation;

/// Which suggester produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    /// Known character names.
    Character,
    /// Scene-heading prefixes.
    Scene,
    /// Transition phrases.
    Transition,
}

/// A non-empty list of suggestions for the popup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestions {
    /// The suggester that produced the items.
    pub kind: SuggestionKind,
    /// Suggested replacement lines.
    pub items: Vec<String>,
}

/// Stateless suggestion generator over a vocabulary.
#[derive(Debug, Clone, Copy)]
pub struct Completer<'a> {
    vocabulary: &'a Vocabulary,
    limit: usize,
}

impl<'a> Completer<'a> {
    /// Create a completer returning at most `limit` items per suggester.
    ///
    /// `vocabulary` is expected to be normalized (upper case), as a `Matcher`'s is.
    pub fn new(vocabulary: &'a Vocabulary, limit: usize) -> Self {
        Self { vocabulary, limit }
    }

    /// Character names from `known` that extend the current line.
    ///
    /// Only fires for lines of at least two chars without surrounding whitespace; the line
    /// itself is never suggested back.
    pub fn characters<I, S>(&self, line: &str, known: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if line != line.trim() || line.chars().count() < 2 {
            return Vec::new();
        }
        let upper = line.to_uppercase();

        let mut out: Vec<String> = Vec::new();
        for name in known {
            let name = name.as_ref().to_uppercase();
            if name.starts_with(&upper) && name != upper && !out.contains(&name) {
                out.push(name);
                if out.len() == self.limit {
                    break;
                }
            }
        }
        out
    }

    /// Canonical scene prefixes for a line starting with a scene trigger (`INT`, `EXT`, `I/E`).
    ///
    /// Nothing is suggested once the line already begins with a complete prefix.
    pub fn scene_prefixes(&self, line: &str) -> Vec<String> {
        let upper = line.to_uppercase();
        let triggered = self
            .vocabulary
            .scene_triggers
            .iter()
            .any(|trigger| upper.starts_with(trigger.as_str()));
        if !triggered {
            return Vec::new();
        }
        let prefixes = &self.vocabulary.scene_suggestions;
        if prefixes
            .iter()
            .any(|prefix| upper.starts_with(prefix.as_str()))
        {
            return Vec::new();
        }

        prefixes
            .iter()
            .filter(|prefix| {
                prefix.starts_with(upper.as_str()) || upper.starts_with(prefix.trim_end())
            })
            .take(self.limit)
            .cloned()
            .collect()
    }

    /// Transitions for a line mentioning a transition trigger (`CUT`, `FADE`, `DISSOLVE`).
    pub fn transitions(&self, line: &str) -> Vec<String> {
        let upper = line.to_uppercase();
        let triggered = self
            .vocabulary
            .transition_triggers
            .iter()
            .any(|trigger| upper.contains(trigger.as_str()));
        if !triggered {
            return Vec::new();
        }
        let first_word = upper.unicode_words().next();

        self.vocabulary
            .transitions
            .iter()
            .filter(|transition| {
                transition.starts_with(upper.as_str())
                    || (first_word.is_some() && transition.unicode_words().next() == first_word)
            })
            .take(self.limit)
            .cloned()
            .collect()
    }

    /// Run the suggesters in priority order (character, scene, transition).
    ///
    /// Returns `None` when nothing should be shown.
    pub fn suggest<I, S>(&self, line: &str, known: I) -> Option<Suggestions>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let candidates = [
            (SuggestionKind::Character, self.characters(line, known)),
            (SuggestionKind::Scene, self.scene_prefixes(line)),
            (SuggestionKind::Transition, self.transitions(line)),
        ];
        candidates
            .into_iter()
            .find(|(_, items)| !items.is_empty())
            .map(|(kind, items)| Suggestions { kind, items })
    }
}

impl Default for Completer<'static> {
    fn default() -> Self {
        Self::new(
            crate::patterns::Matcher::standard().vocabulary(),
            DEFAULT_MAX_SUGGESTIONS,
        )
    }
}

/// Result of replacing a line with a chosen suggestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedSuggestion {
    /// The new buffer.
    pub text: String,
    /// Caret offset (chars) at the end of the replaced line.
    pub cursor: usize,
}

/// Replace the line containing `offset` with `choice`.
///
/// Offsets past the end of the buffer address the last line.
pub fn apply_suggestion(text: &str, offset: usize, choice: &str) -> AppliedSuggestion {
    let index = LineIndex::from_text(text);
    let offset = offset.min(index.char_count());
    let (line, _) = index.char_offset_to_position(offset).unwrap_or((0, 0));
    let line_start = index.line_start(line);

    let mut lines: Vec<&str> = text.split('\n').collect();
    if let Some(slot) = lines.get_mut(line) {
        *slot = choice;
    }

    AppliedSuggestion {
        text: lines.join("\n"),
        cursor: line_start + choice.chars().count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn completer() -> Completer<'static> {
        Completer::default()
    }

    #[test]
    fn test_character_suggestions() {
        let known = ["JOHN", "JONAH", "MARY", "JO"];
        assert_eq!(completer().characters("jo", known), vec!["JOHN", "JONAH"]);
        assert_eq!(completer().characters("JOH", known), vec!["JOHN"]);
        assert!(completer().characters("J", known).is_empty());
        assert!(completer().characters("JO ", known).is_empty());
        assert!(completer().characters("JOHN", known).is_empty());
    }

    #[test]
    fn test_character_suggestions_are_capped() {
        let known: Vec<String> = (0..20).map(|i| format!("GUARD {i}")).collect();
        assert_eq!(completer().characters("GU", &known).len(), 8);
    }

    #[test]
    fn test_scene_prefix_suggestions() {
        assert_eq!(completer().scene_prefixes("int"), vec!["INT. ", "INT./EXT. "]);
        assert_eq!(completer().scene_prefixes("INT."), vec!["INT. ", "INT./EXT. "]);
        assert_eq!(completer().scene_prefixes("EX"), Vec::<String>::new());
        assert_eq!(completer().scene_prefixes("EXT"), vec!["EXT. "]);
        assert_eq!(completer().scene_prefixes("I/E"), vec!["I/E. "]);
    }

    #[test]
    fn test_complete_scene_prefix_is_not_resuggested() {
        assert!(completer().scene_prefixes("INT. ").is_empty());
        assert!(completer().scene_prefixes("INT. KITCHEN").is_empty());
        assert!(completer().scene_prefixes("INT./EXT. CAR").is_empty());
    }

    #[test]
    fn test_transition_suggestions() {
        assert_eq!(
            completer().transitions("fade"),
            vec!["FADE IN:", "FADE OUT.", "FADE TO:", "FADE TO BLACK."]
        );
        assert_eq!(completer().transitions("CUT"), vec!["CUT TO:"]);
        assert_eq!(completer().transitions("SMASH CUT"), vec!["SMASH CUT TO:"]);
        assert!(completer().transitions("He cuts the rope.").is_empty());
        assert!(completer().transitions("WIPE").is_empty());
    }

    #[test]
    fn test_priority_order() {
        let known = ["CUTTER"];
        let suggestions = completer().suggest("CUT", known).unwrap();
        assert_eq!(suggestions.kind, SuggestionKind::Character);
        assert_eq!(suggestions.items, vec!["CUTTER"]);

        let suggestions = completer().suggest("CUT", Vec::<String>::new()).unwrap();
        assert_eq!(suggestions.kind, SuggestionKind::Transition);

        let suggestions = completer().suggest("INT", ["INTERN"]).unwrap();
        assert_eq!(suggestions.kind, SuggestionKind::Character);

        assert_eq!(completer().suggest("Hello", ["HELEN"]), None);
    }

    #[test]
    fn test_apply_suggestion_replaces_current_line() {
        let text = "INT. HOUSE\n\nJO\nHi.";
        let applied = apply_suggestion(text, 14, "JOHN");
        assert_eq!(applied.text, "INT. HOUSE\n\nJOHN\nHi.");
        assert_eq!(applied.cursor, 16);

        let applied = apply_suggestion("int", 99, "INT. ");
        assert_eq!(applied.text, "INT. ");
        assert_eq!(applied.cursor, 5);
    }
}
