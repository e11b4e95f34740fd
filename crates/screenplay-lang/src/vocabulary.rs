//! Vocabulary tables consulted by the line classifier and the auto-complete suggesters.
//!
//! All entries are upper case; matching is case-insensitive where the classifier says so.

use serde::{Deserialize, Serialize};

/// Scene-heading prefixes recognized by the classifier.
pub const DEFAULT_SCENE_PREFIXES: &[&str] = &[
    "INT./EXT.",
    "EXT./INT.",
    "INT.",
    "EXT.",
    "I/E.",
    "E/I.",
    "INT ",
    "EXT ",
];

/// Canonical scene prefixes offered by auto-complete.
pub const DEFAULT_SCENE_SUGGESTIONS: &[&str] = &["INT. ", "EXT. ", "INT./EXT. ", "I/E. "];

/// Line starts that switch on scene-prefix suggestions.
pub const DEFAULT_SCENE_TRIGGERS: &[&str] = &["INT", "EXT", "I/E"];

/// Shot and on-screen cue keywords.
pub const DEFAULT_SHOT_KEYWORDS: &[&str] = &[
    "ANGLE ON",
    "CLOSE ON",
    "CLOSE UP",
    "ECU",
    "CU",
    "MEDIUM SHOT",
    "MS",
    "WIDE SHOT",
    "WS",
    "ESTABLISHING SHOT",
    "POV",
    "INSERT",
    "FLASHBACK",
    "FLASH FORWARD",
    "DREAM SEQUENCE",
    "MONTAGE",
    "SERIES OF SHOTS",
    "INTERCUT",
    "SPLIT SCREEN",
    "FREEZE FRAME",
    "STOCK SHOT",
    "ARCHIVAL FOOTAGE",
    "SUPER:",
    "TITLE:",
    "CHYRON:",
    "CARD:",
];

/// Transition phrases matched exactly and offered by auto-complete.
pub const DEFAULT_TRANSITIONS: &[&str] = &[
    "CUT TO:",
    "DISSOLVE TO:",
    "FADE IN:",
    "FADE OUT.",
    "FADE TO:",
    "FADE TO BLACK.",
    "SMASH CUT TO:",
    "MATCH CUT TO:",
    "JUMP CUT TO:",
    "TIME CUT:",
    "WIPE TO:",
    "IRIS IN:",
    "IRIS OUT:",
    "BACK TO:",
    "INTERCUT WITH:",
    "THE END.",
];

/// Transition stems accepted with an optional trailing `.` or `:`.
pub const DEFAULT_TRANSITION_STEMS: &[&str] = &[
    "CUT TO",
    "DISSOLVE TO",
    "FADE IN",
    "FADE OUT",
    "FADE TO",
    "FADE TO BLACK",
    "SMASH CUT TO",
    "MATCH CUT TO",
    "JUMP CUT TO",
    "TIME CUT",
    "WIPE TO",
    "IRIS IN",
    "IRIS OUT",
    "BACK TO",
    "INTERCUT WITH",
    "THE END",
];

/// Words that switch on transition suggestions.
pub const DEFAULT_TRANSITION_TRIGGERS: &[&str] = &["CUT", "FADE", "DISSOLVE"];

/// Parenthesized extensions allowed after a character name.
pub const DEFAULT_CHARACTER_EXTENSIONS: &[&str] = &[
    "V.O.", "O.S.", "O.C.", "CONT'D", "CONT’D", "PRE-LAP", "FILTER", "PHONE", "TEXT", "SUBTITLE",
    "CAPTION",
];

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_string()).collect()
}

/// Every vocabulary table the engine consults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vocabulary {
    /// Scene-heading prefixes (`INT.`, `EXT.` …).
    pub scene_prefixes: Vec<String>,
    /// Canonical prefixes suggested while typing a heading.
    pub scene_suggestions: Vec<String>,
    /// Line starts that enable scene-prefix suggestions.
    pub scene_triggers: Vec<String>,
    /// Shot / cue keywords.
    pub shot_keywords: Vec<String>,
    /// Exact transition phrases.
    pub transitions: Vec<String>,
    /// Transition stems accepted with an optional trailing `.` or `:`.
    pub transition_stems: Vec<String>,
    /// Words that enable transition suggestions.
    pub transition_triggers: Vec<String>,
    /// Character-name extensions (without parentheses).
    pub character_extensions: Vec<String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            scene_prefixes: owned(DEFAULT_SCENE_PREFIXES),
            scene_suggestions: owned(DEFAULT_SCENE_SUGGESTIONS),
            scene_triggers: owned(DEFAULT_SCENE_TRIGGERS),
            shot_keywords: owned(DEFAULT_SHOT_KEYWORDS),
            transitions: owned(DEFAULT_TRANSITIONS),
            transition_stems: owned(DEFAULT_TRANSITION_STEMS),
            transition_triggers: owned(DEFAULT_TRANSITION_TRIGGERS),
            character_extensions: owned(DEFAULT_CHARACTER_EXTENSIONS),
        }
    }
}

impl Vocabulary {
    /// Upper-case every entry in place.
    ///
    /// Configuration files are allowed to use any case; the engine compares upper case.
    pub fn normalize(&mut self) {
        for table in [
            &mut self.scene_prefixes,
            &mut self.scene_suggestions,
            &mut self.scene_triggers,
            &mut self.shot_keywords,
            &mut self.transitions,
            &mut self.transition_stems,
            &mut self.transition_triggers,
            &mut self.character_extensions,
        ] {
            for entry in table.iter_mut() {
                *entry = entry.to_uppercase();
            }
        }
    }

    /// Returns `true` if `upper` (an upper-cased, trimmed line) occurs anywhere inside a
    /// transition phrase, so `CUT`, `OUT` and `TIM` all count.
    pub fn is_transition_fragment(&self, upper: &str) -> bool {
        !upper.is_empty() && self.transitions.iter().any(|transition| transition.contains(upper))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_uppercases_entries() {
        let mut vocabulary = Vocabulary {
            shot_keywords: vec!["angle on".to_string()],
            ..Vocabulary::default()
        };
        vocabulary.normalize();
        assert_eq!(vocabulary.shot_keywords, vec!["ANGLE ON".to_string()]);
    }

    #[test]
    fn test_transition_fragments() {
        let vocabulary = Vocabulary::default();
        assert!(vocabulary.is_transition_fragment("CUT"));
        assert!(vocabulary.is_transition_fragment("SMASH CUT"));
        assert!(vocabulary.is_transition_fragment("FADE OUT."));
        assert!(vocabulary.is_transition_fragment("TIM"));
        assert!(vocabulary.is_transition_fragment("END"));
        assert!(vocabulary.is_transition_fragment("OUT"));
        assert!(!vocabulary.is_transition_fragment("JOHN"));
        assert!(!vocabulary.is_transition_fragment("CUTTER"));
        assert!(!vocabulary.is_transition_fragment(""));
    }
}
