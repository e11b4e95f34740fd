//! Line classification.
//!
//! A [`Matcher`] compiles the vocabulary tables of a [`Vocabulary`] into regexes and classifies
//! one line at a time. Precedence is fixed and checked in this order (first match wins):
//!
//! 1. blank line (no element)
//! 2. scene heading
//! 3. shot
//! 4. transition
//! 5. parenthetical
//! 6. character cue
//! 7. action
//!
//! Shot and transition vocabularies are checked before the generic all-caps character rule, so
//! `SUPER: MAIN TITLE` is a shot and `FADE OUT.` a transition rather than character cues.

use regex::Regex;
use screenplay_lang::{ScriptElement, Vocabulary};
use std::collections::HashSet;
use std::sync::LazyLock;
use thiserror::Error;

/// Character cues are at least this many chars long (after trimming).
pub const MIN_CHARACTER_LEN: usize = 2;
/// Character cues are strictly shorter than this (after trimming).
pub const MAX_CHARACTER_LEN: usize = 40;

#[derive(Debug, Error)]
/// Errors produced while compiling a [`Vocabulary`] into a [`Matcher`].
pub enum PatternError {
    #[error("regex compile error for {table}: {source}")]
    /// A vocabulary table produced a pattern the regex engine rejected.
    RegexCompile {
        /// The vocabulary table the pattern was built from.
        table: &'static str,
        /// The underlying regex error.
        #[source]
        source: regex::Error,
    },
}

static STANDARD: LazyLock<Matcher> = LazyLock::new(|| {
    Matcher::new(&Vocabulary::default()).expect("built-in vocabulary compiles")
});

/// Compiled line classifier.
#[derive(Debug, Clone)]
pub struct Matcher {
    vocabulary: Vocabulary,
    scene: Option<Regex>,
    scene_number: Regex,
    shot: Option<Regex>,
    transition_stems: Option<Regex>,
    transition_suffix: Regex,
    transitions: HashSet<String>,
    parenthetical: Regex,
    character: Regex,
}

fn alternation<'a>(
    entries: impl IntoIterator<Item = &'a String>,
    boundary: bool,
) -> Option<String> {
    let mut entries: Vec<&str> = entries
        .into_iter()
        .map(String::as_str)
        .filter(|entry| !entry.is_empty())
        .collect();
    if entries.is_empty() {
        return None;
    }
    // Longest first keeps `INT./EXT.` ahead of `INT.` in the alternation.
    entries.sort_by_key(|entry| std::cmp::Reverse(entry.chars().count()));

    let branches: Vec<String> = entries
        .into_iter()
        .map(|entry| {
            let escaped = regex::escape(entry);
            let ends_in_word = entry.chars().last().is_some_and(char::is_alphanumeric);
            if boundary && ends_in_word {
                format!(r"{escaped}(?:$|[^\p{{L}}\p{{N}}])")
            } else {
                escaped
            }
        })
        .collect();
    Some(format!("(?:{})", branches.join("|")))
}

fn compile(table: &'static str, pattern: &str) -> Result<Regex, PatternError> {
    Regex::new(pattern).map_err(|source| PatternError::RegexCompile { table, source })
}

fn compile_optional(
    table: &'static str,
    pattern: Option<String>,
) -> Result<Option<Regex>, PatternError> {
    pattern.map(|pattern| compile(table, &pattern)).transpose()
}

impl Matcher {
    /// Compile a matcher for `vocabulary`.
    ///
    /// Entries are compared upper case; the vocabulary is normalized before compiling.
    pub fn new(vocabulary: &Vocabulary) -> Result<Self, PatternError> {
        let mut vocabulary = vocabulary.clone();
        vocabulary.normalize();

        let scene = compile_optional(
            "scene_prefixes",
            alternation(&vocabulary.scene_prefixes, false)
                .map(|prefixes| format!(r"(?i)^(?:\d+[A-Z]?\.?\s+)?{prefixes}\s*\S")),
        )?;
        let shot = compile_optional(
            "shot_keywords",
            alternation(&vocabulary.shot_keywords, true).map(|keywords| format!("^{keywords}")),
        )?;
        let transition_stems = compile_optional(
            "transition_stems",
            alternation(&vocabulary.transition_stems, false)
                .map(|stems| format!("^{stems}[.:]?$")),
        )?;

        let extensions = alternation(&vocabulary.character_extensions, false)
            .map(|extensions| format!(r"(?:\s*\((?i:{extensions})\))?"))
            .unwrap_or_default();
        let character = compile(
            "character_extensions",
            &format!(r"^(\p{{Lu}}[\p{{Lu}} .'’\-]*?)\s*{extensions}$"),
        )?;

        Ok(Self {
            transitions: vocabulary.transitions.iter().cloned().collect(),
            scene,
            scene_number: compile("scene_number", r"^(\d+[A-Za-z]?)\.?\s+")?,
            shot,
            transition_stems,
            transition_suffix: compile("transition_suffix", r"^[\p{Lu}\s]+ TO:$")?,
            parenthetical: compile("parenthetical", r"^\([^()]+\)$")?,
            character,
            vocabulary,
        })
    }

    /// The process-wide matcher built from the default vocabulary.
    pub fn standard() -> &'static Matcher {
        &STANDARD
    }

    /// The (normalized) vocabulary this matcher was compiled from.
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Classify a single line. Blank lines yield `None`.
    pub fn classify(&self, line: &str) -> Option<ScriptElement> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return None;
        }
        let upper = trimmed.to_uppercase();

        let element = if self.scene_heading(trimmed) {
            ScriptElement::Scene
        } else if self.shot(&upper) {
            ScriptElement::Shot
        } else if self.transition(trimmed, &upper) {
            ScriptElement::Transition
        } else if self.parenthetical.is_match(trimmed) {
            ScriptElement::Parenthetical
        } else if self.character(trimmed, &upper).is_some() {
            ScriptElement::Character
        } else {
            ScriptElement::Action
        };
        Some(element)
    }

    /// Returns `true` if `line` is a scene heading.
    pub fn is_scene_heading(&self, line: &str) -> bool {
        self.scene_heading(line.trim())
    }

    /// Returns `true` if `line` starts with a shot keyword.
    pub fn is_shot(&self, line: &str) -> bool {
        self.shot(&line.trim().to_uppercase())
    }

    /// Returns `true` if `line` is a transition.
    pub fn is_transition(&self, line: &str) -> bool {
        let trimmed = line.trim();
        self.transition(trimmed, &trimmed.to_uppercase())
    }

    /// Returns `true` if `line` is wrapped in a single pair of parentheses.
    pub fn is_parenthetical(&self, line: &str) -> bool {
        self.parenthetical.is_match(line.trim())
    }

    /// Returns `true` if `line` matches the character-cue pattern.
    ///
    /// This checks the pattern only, not precedence: use [`Matcher::classify`] to decide
    /// whether the line is actually a cue.
    pub fn is_character(&self, line: &str) -> bool {
        self.character_name(line).is_some()
    }

    /// The name of a character cue with any recognized extension removed.
    ///
    /// `JOHN (V.O.)` yields `JOHN`.
    pub fn character_name(&self, line: &str) -> Option<String> {
        let trimmed = line.trim();
        self.character(trimmed, &trimmed.to_uppercase())
    }

    /// The scene number embedded at the start of a scene heading (`12A. INT. HOUSE` → `12A`).
    pub fn scene_number(&self, line: &str) -> Option<String> {
        let trimmed = line.trim();
        if !self.scene_heading(trimmed) {
            return None;
        }
        self.scene_number
            .captures(trimmed)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_uppercase())
    }

    /// The heading text with any leading scene number removed, trimmed.
    pub fn strip_scene_number<'a>(&self, line: &'a str) -> &'a str {
        let trimmed = line.trim();
        if !self.scene_heading(trimmed) {
            return trimmed;
        }
        match self.scene_number.find(trimmed) {
            Some(m) => trimmed[m.end()..].trim_start(),
            None => trimmed,
        }
    }

    fn scene_heading(&self, trimmed: &str) -> bool {
        self.scene.as_ref().is_some_and(|re| re.is_match(trimmed))
    }

    fn shot(&self, upper: &str) -> bool {
        self.shot.as_ref().is_some_and(|re| re.is_match(upper))
    }

    fn transition(&self, trimmed: &str, upper: &str) -> bool {
        self.transitions.contains(upper)
            || self
                .transition_stems
                .as_ref()
                .is_some_and(|re| re.is_match(upper))
            || self.transition_suffix.is_match(trimmed)
    }

    fn character(&self, trimmed: &str, upper: &str) -> Option<String> {
        let len = trimmed.chars().count();
        if !(MIN_CHARACTER_LEN..MAX_CHARACTER_LEN).contains(&len) {
            return None;
        }
        if self.vocabulary.is_transition_fragment(upper) {
            return None;
        }
        let name = self.character.captures(trimmed)?.get(1)?.as_str().trim();
        (!name.is_empty()).then(|| name.to_string())
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::standard().clone()
    }
}
