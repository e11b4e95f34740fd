//! Memoized whole-buffer analysis.
//!
//! Hosts call [`ScriptAnalyzer::analyze`] after every edit to refresh navigator panels and the
//! status bar. Every derived view is recomputed from scratch; the analyzer only remembers the
//! last snapshot so an unchanged buffer (cursor moves, focus changes) costs a comparison.

use crate::annotations::LineAnnotations;
use crate::characters::{CharacterStats, extract_from_lines};
use crate::completion::{Completer, Suggestions};
use crate::continued::{ContinuedDialogue, analyze_elements};
use crate::document::{classify_document, lines};
use crate::line_index::{LineIndex, LineInfo};
use crate::patterns::{Matcher, PatternError};
use crate::rules::{next_element, tab_cycle_element};
use crate::scenes::{SceneData, extract_scenes_with, scene_at_line};
use crate::stats::{ScriptStats, summarize};
use screenplay_lang::{ConfigError, ScreenplayConfig, ScriptElement};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, trace};

/// Every derived view of one buffer snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptAnalysis {
    /// Increments each time the analyzer recomputes.
    pub version: u64,
    /// Per-line classification with dialogue context.
    pub elements: Vec<Option<ScriptElement>>,
    /// Scene headings in document order.
    pub scenes: Vec<SceneData>,
    /// Speaking characters, most lines first.
    pub characters: Vec<CharacterStats>,
    /// Aggregate statistics.
    pub stats: ScriptStats,
    /// `(MORE)` / `(CONT'D)` marker positions.
    pub continued: ContinuedDialogue,
}

impl ScriptAnalysis {
    /// Compute every view of `text` from scratch.
    pub fn compute(
        matcher: &Matcher,
        config: &ScreenplayConfig,
        text: &str,
        annotations: &LineAnnotations,
        version: u64,
    ) -> Self {
        let elements = classify_document(matcher, text);
        let lines: Vec<&str> = lines(text).collect();

        let scenes = extract_scenes_with(matcher, text, annotations);
        let characters = extract_from_lines(matcher, &lines);
        let stats = summarize(
            text,
            &elements,
            scenes.len(),
            characters.len(),
            config.lines_per_page,
        );
        let continued = analyze_elements(matcher, &lines, &elements, config.lines_per_page);

        Self {
            version,
            elements,
            scenes,
            characters,
            stats,
            continued,
        }
    }

    /// The scene containing one-based `line_number`.
    pub fn scene_at_line(&self, line_number: usize) -> Option<&SceneData> {
        scene_at_line(&self.scenes, line_number)
    }

    /// Names of every speaking character, for auto-complete.
    pub fn character_names(&self) -> impl Iterator<Item = &str> {
        self.characters.iter().map(|character| character.name.as_str())
    }
}

#[derive(Debug, Error)]
/// Errors produced while building a [`ScriptAnalyzer`].
pub enum AnalyzerError {
    #[error("invalid configuration: {0}")]
    /// The configuration failed validation.
    Config(#[from] ConfigError),

    #[error(transparent)]
    /// The vocabulary did not compile.
    Pattern(#[from] PatternError),
}

struct CachedAnalysis {
    text: String,
    annotations: LineAnnotations,
    analysis: Arc<ScriptAnalysis>,
}

/// Single entry point for a host editor.
///
/// Owns the configuration and the compiled matcher and caches the last analysis. Needs
/// `&mut self` to update the cache; share the config or matcher instead if several threads
/// need to classify concurrently.
pub struct ScriptAnalyzer {
    config: ScreenplayConfig,
    matcher: Matcher,
    cached: Option<CachedAnalysis>,
    version: u64,
}

impl ScriptAnalyzer {
    /// Validate `config` and compile its vocabulary into a matcher.
    ///
    /// Configs built in code go through the same checks as configs loaded from a file.
    pub fn new(config: ScreenplayConfig) -> Result<Self, AnalyzerError> {
        config.validate()?;
        let matcher = Matcher::new(&config.vocabulary)?;
        Ok(Self {
            config,
            matcher,
            cached: None,
            version: 0,
        })
    }

    /// An analyzer with the built-in configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: ScreenplayConfig::default(),
            matcher: Matcher::standard().clone(),
            cached: None,
            version: 0,
        }
    }

    /// Analyze `text`, reusing the previous result if neither the text nor the annotations
    /// changed since the last call.
    pub fn analyze(&mut self, text: &str, annotations: &LineAnnotations) -> Arc<ScriptAnalysis> {
        if let Some(cached) = &self.cached
            && cached.text == text
            && cached.annotations == *annotations
        {
            trace!(version = cached.analysis.version, "analysis cache hit");
            return Arc::clone(&cached.analysis);
        }

        self.version += 1;
        let analysis = Arc::new(ScriptAnalysis::compute(
            &self.matcher,
            &self.config,
            text,
            annotations,
            self.version,
        ));
        debug!(
            version = self.version,
            lines = analysis.elements.len(),
            scenes = analysis.scenes.len(),
            characters = analysis.characters.len(),
            "recomputed script analysis"
        );

        self.cached = Some(CachedAnalysis {
            text: text.to_string(),
            annotations: annotations.clone(),
            analysis: Arc::clone(&analysis),
        });
        analysis
    }

    /// Drop the cached analysis; the next [`analyze`](Self::analyze) recomputes.
    pub fn invalidate(&mut self) {
        self.cached = None;
    }

    /// Version of the most recent analysis (0 before the first call).
    pub fn version(&self) -> u64 {
        self.version
    }

    /// The compiled matcher.
    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    /// The active configuration.
    pub fn config(&self) -> &ScreenplayConfig {
        &self.config
    }

    /// Resolve a cursor offset to its line.
    pub fn locate(&self, text: &str, offset: usize) -> LineInfo {
        LineIndex::from_text(text).locate(offset, &self.matcher)
    }

    /// Element for the line created by Enter.
    pub fn next_element(&self, current: ScriptElement, line_text: &str) -> ScriptElement {
        next_element(current, line_text)
    }

    /// Element selected by Tab.
    pub fn tab_cycle_element(&self, current: ScriptElement, line_text: &str) -> ScriptElement {
        tab_cycle_element(current, line_text)
    }

    /// Auto-complete for `line`, offering the characters of the last analysis.
    pub fn suggest(&self, line: &str) -> Option<Suggestions> {
        let completer = Completer::new(self.matcher.vocabulary(), self.config.max_suggestions);
        let known: Vec<&str> = self
            .cached
            .as_ref()
            .map(|cached| cached.analysis.character_names().collect())
            .unwrap_or_default();
        completer.suggest(line, known)
    }

    /// The scene containing one-based `line_number` in the last analysis.
    pub fn scene_at_line(&self, line_number: usize) -> Option<&SceneData> {
        self.cached
            .as_ref()
            .and_then(|cached| cached.analysis.scene_at_line(line_number))
    }
}

impl Default for ScriptAnalyzer {
    fn default() -> Self {
        Self::with_defaults()
    }
}
