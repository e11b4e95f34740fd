#![warn(missing_docs)]
//! Screenplay Core - Headless Screenplay Formatting Engine
//!
//! # Overview
//!
//! `screenplay-core` infers screenplay elements (scene heading, action, character, dialogue,
//! parenthetical, transition, shot) from a plain-text buffer and derives everything a script
//! editor shows around it: the scene navigator, character statistics, page count, dialogue
//! density and `(MORE)`/`(CONT'D)` markers. It also decides what Enter and Tab do and what the
//! auto-complete popup offers.
//!
//! It does not own the buffer. The host editing surface passes the current text (and its own
//! line annotations) into each call; every result is a pure function of that snapshot.
//!
//! # Architecture Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  ScriptAnalyzer (memoized views)            │  ← Public API
//! ├─────────────────────────────────────────────┤
//! │  Rules & Completion (Enter/Tab, popup)      │  ← Key handling
//! ├─────────────────────────────────────────────┤
//! │  Extractors (scenes, characters, stats,     │  ← Derived views
//! │  continued dialogue, preview)               │
//! ├─────────────────────────────────────────────┤
//! │  Document Classifier (dialogue blocks)      │  ← Context
//! ├─────────────────────────────────────────────┤
//! │  Line Index (Rope-based) & Matcher          │  ← Per-line
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use screenplay_core::{LineAnnotations, ScriptAnalyzer, ScriptElement, classify};
//!
//! assert_eq!(classify("INT. KITCHEN - NIGHT"), Some(ScriptElement::Scene));
//! assert_eq!(classify("CUT TO:"), Some(ScriptElement::Transition));
//!
//! let mut analyzer = ScriptAnalyzer::with_defaults();
//! let analysis = analyzer.analyze(
//!     "INT. KITCHEN - NIGHT\n\nJOHN\nWhere is everybody?",
//!     &LineAnnotations::new(),
//! );
//! assert_eq!(analysis.scenes[0].scene_number, "1");
//! assert_eq!(analysis.characters[0].name, "JOHN");
//! assert_eq!(analysis.stats.pages, 1);
//! ```
//!
//! # Module Description
//!
//! - [`patterns`] - ordered-precedence line classifier compiled from vocabulary tables
//! - [`document`] - whole-buffer classification with dialogue blocks
//! - [`line_index`] - Rope based line index and cursor location
//! - [`scenes`], [`characters`], [`stats`] - structural extractors
//! - [`rules`] - Enter and Tab element transitions
//! - [`completion`] - auto-complete suggesters
//! - [`continued`] - `(MORE)` / `(CONT'D)` placement
//! - [`annotations`] - caller-owned line annotations
//! - [`format`] - plain-text preview rendering
//! - [`analysis`] - memoizing façade
//!
//! The free functions at the crate root use the built-in vocabulary and a page length of
//! [`DEFAULT_LINES_PER_PAGE`]. Hosts with a custom [`ScreenplayConfig`] go through
//! [`ScriptAnalyzer`] or the `*_with` functions of each module.
//!
//! # Unicode
//!
//! - Lines are split on `\n` only
//! - Offsets and columns count `char`s
//! - The preview aligns by display width, so CJK wide characters take two columns

pub mod analysis;
pub mod annotations;
pub mod characters;
pub mod completion;
pub mod continued;
pub mod document;
pub mod format;
pub mod line_index;
pub mod patterns;
pub mod rules;
pub mod scenes;
pub mod stats;

pub use analysis::{AnalyzerError, ScriptAnalysis, ScriptAnalyzer};
pub use annotations::{LineAnnotations, LineMarkers, RevisionColor, ScriptNote};
pub use characters::CharacterStats;
pub use completion::{AppliedSuggestion, Completer, SuggestionKind, Suggestions, apply_suggestion};
pub use continued::ContinuedDialogue;
pub use format::format_line;
pub use line_index::{LineIndex, LineInfo, locate};
pub use patterns::{MAX_CHARACTER_LEN, MIN_CHARACTER_LEN, Matcher, PatternError};
pub use rules::{TAB_CYCLE, default_successor, next_element, tab_cycle_element};
pub use scenes::{SceneData, scene_at_line};
pub use stats::ScriptStats;

pub use screenplay_lang::{
    Alignment, ConfigError, DEFAULT_LINES_PER_PAGE, DEFAULT_MAX_SUGGESTIONS, DEFAULT_PAGE_WIDTH,
    ElementStyle, ScreenplayConfig, ScriptElement, StyleTable, Vocabulary,
};

/// Classify a single line with the built-in vocabulary.
pub fn classify(line: &str) -> Option<ScriptElement> {
    Matcher::standard().classify(line)
}

/// Classify every line of `text`, with dialogue context.
pub fn classify_document(text: &str) -> Vec<Option<ScriptElement>> {
    document::classify_document(Matcher::standard(), text)
}

/// Extract all scene headings.
pub fn extract_scenes(text: &str, annotations: &LineAnnotations) -> Vec<SceneData> {
    scenes::extract_scenes_with(Matcher::standard(), text, annotations)
}

/// Per-character dialogue statistics, most lines first.
pub fn extract_characters(text: &str) -> Vec<CharacterStats> {
    characters::extract_characters_with(Matcher::standard(), text)
}

/// Aggregate statistics at [`DEFAULT_LINES_PER_PAGE`].
pub fn calculate_stats(text: &str) -> ScriptStats {
    stats::calculate_stats_with(Matcher::standard(), text, DEFAULT_LINES_PER_PAGE)
}

/// Character, scene-prefix or transition suggestions for `line`, in that priority.
pub fn suggest<I, S>(line: &str, known_characters: I) -> Option<Suggestions>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Completer::default().suggest(line, known_characters)
}

/// Known names extending `line`.
pub fn suggest_characters<I, S>(line: &str, known_characters: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Completer::default().characters(line, known_characters)
}

/// Scene-heading prefixes for `line`.
pub fn suggest_scene_prefixes(line: &str) -> Vec<String> {
    Completer::default().scene_prefixes(line)
}

/// Transition phrases for `line`.
pub fn suggest_transitions(line: &str) -> Vec<String> {
    Completer::default().transitions(line)
}

/// `(MORE)` / `(CONT'D)` positions at [`DEFAULT_LINES_PER_PAGE`].
pub fn analyze_continued_dialogue(text: &str) -> ContinuedDialogue {
    continued::analyze_continued_dialogue_with(Matcher::standard(), text, DEFAULT_LINES_PER_PAGE)
}

/// Plain-text preview with the built-in styles.
pub fn render_preview(text: &str) -> String {
    format::render_preview_with(Matcher::standard(), text, &ScreenplayConfig::default())
}
