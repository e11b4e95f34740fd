#![warn(missing_docs)]
//! `screenplay-lang` - data-driven screenplay configuration for `screenplay-core`.
//!
//! This crate stays free of any parsing machinery. It defines the element taxonomy, the static
//! per-element layout table and the vocabulary tables (scene prefixes, shot keywords,
//! transitions, character extensions) as plain data that hosts can override from YAML or JSON.

mod config;
mod element;
mod style;
mod vocabulary;

pub use config::{
    ConfigError, DEFAULT_LINES_PER_PAGE, DEFAULT_MAX_SUGGESTIONS, DEFAULT_PAGE_WIDTH,
    ScreenplayConfig,
};
pub use element::ScriptElement;
pub use style::{Alignment, ElementStyle, StyleTable};
pub use vocabulary::{
    DEFAULT_CHARACTER_EXTENSIONS, DEFAULT_SCENE_PREFIXES, DEFAULT_SCENE_SUGGESTIONS,
    DEFAULT_SCENE_TRIGGERS, DEFAULT_SHOT_KEYWORDS, DEFAULT_TRANSITION_STEMS,
    DEFAULT_TRANSITION_TRIGGERS, DEFAULT_TRANSITIONS, Vocabulary,
};
