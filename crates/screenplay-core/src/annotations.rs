//! Caller-owned line annotations.
//!
//! Locked/omitted scenes, bookmarks, revision marks and notes belong to the host, not to the
//! engine. They are keyed by one-based line number and passed explicitly into the passes that
//! need them (scene extraction echoes `locked`/`omitted`); the engine never changes them on its
//! own. Line numbers are not re-keyed when lines are inserted or removed above them: that is the
//! host's job, the same way it owns the buffer.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Revision page colors, in the order productions cycle through them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RevisionColor {
    /// First revision set.
    Blue,
    /// Second revision set.
    Pink,
    /// Third revision set.
    Yellow,
    /// Fourth revision set.
    Green,
    /// Fifth revision set.
    Goldenrod,
    /// Sixth revision set.
    Buff,
    /// Seventh revision set.
    Salmon,
    /// Eighth revision set.
    Cherry,
}

impl RevisionColor {
    const ORDER: [RevisionColor; 8] = [
        RevisionColor::Blue,
        RevisionColor::Pink,
        RevisionColor::Yellow,
        RevisionColor::Green,
        RevisionColor::Goldenrod,
        RevisionColor::Buff,
        RevisionColor::Salmon,
        RevisionColor::Cherry,
    ];

    /// The color of the following revision set (wraps after cherry).
    pub fn next(self) -> Self {
        let idx = Self::ORDER
            .iter()
            .position(|color| *color == self)
            .unwrap_or(0);
        Self::ORDER[(idx + 1) % Self::ORDER.len()]
    }
}

/// A note attached to a line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptNote {
    /// Note body.
    pub text: String,
    /// Optional author name.
    #[serde(default)]
    pub author: Option<String>,
}

impl ScriptNote {
    /// Create an anonymous note.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            author: None,
        }
    }

    /// Attribute the note to `author`.
    pub fn by(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }
}

/// Everything annotated at one line, for rendering gutter indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineMarkers<'a> {
    /// The scene heading on this line is locked.
    pub locked: bool,
    /// The scene heading on this line is omitted.
    pub omitted: bool,
    /// The line is bookmarked.
    pub bookmarked: bool,
    /// Revision mark, if any.
    pub revision: Option<RevisionColor>,
    /// Notes attached to the line.
    pub notes: &'a [ScriptNote],
}

impl LineMarkers<'_> {
    /// Returns `true` if nothing is annotated at the line.
    pub fn is_empty(&self) -> bool {
        !self.locked
            && !self.omitted
            && !self.bookmarked
            && self.revision.is_none()
            && self.notes.is_empty()
    }
}

/// Line-number keyed annotations supplied by the host.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LineAnnotations {
    /// Line numbers of locked scene headings.
    pub locked: BTreeSet<usize>,
    /// Line numbers of omitted scene headings.
    pub omitted: BTreeSet<usize>,
    /// Bookmarked line numbers.
    pub bookmarks: BTreeSet<usize>,
    /// Revision marks by line number.
    pub revisions: BTreeMap<usize, RevisionColor>,
    /// Notes by line number.
    pub notes: BTreeMap<usize, Vec<ScriptNote>>,
}

impl LineAnnotations {
    /// Create an empty annotation set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the scene heading at `line_number` as locked.
    pub fn lock_scene(&mut self, line_number: usize) -> &mut Self {
        self.locked.insert(line_number);
        self
    }

    /// Mark the scene heading at `line_number` as omitted.
    pub fn omit_scene(&mut self, line_number: usize) -> &mut Self {
        self.omitted.insert(line_number);
        self
    }

    /// Toggle a bookmark; returns `true` if the line is bookmarked afterwards.
    pub fn toggle_bookmark(&mut self, line_number: usize) -> bool {
        if self.bookmarks.remove(&line_number) {
            false
        } else {
            self.bookmarks.insert(line_number);
            true
        }
    }

    /// Set the revision color of a line.
    pub fn mark_revision(&mut self, line_number: usize, color: RevisionColor) -> &mut Self {
        self.revisions.insert(line_number, color);
        self
    }

    /// Attach a note to a line.
    pub fn add_note(&mut self, line_number: usize, note: ScriptNote) -> &mut Self {
        self.notes.entry(line_number).or_default().push(note);
        self
    }

    /// Returns `true` if the heading at `line_number` is locked.
    pub fn is_locked(&self, line_number: usize) -> bool {
        self.locked.contains(&line_number)
    }

    /// Returns `true` if the heading at `line_number` is omitted.
    pub fn is_omitted(&self, line_number: usize) -> bool {
        self.omitted.contains(&line_number)
    }

    /// Everything annotated at `line_number`.
    pub fn markers_at(&self, line_number: usize) -> LineMarkers<'_> {
        LineMarkers {
            locked: self.is_locked(line_number),
            omitted: self.is_omitted(line_number),
            bookmarked: self.bookmarks.contains(&line_number),
            revision: self.revisions.get(&line_number).copied(),
            notes: self
                .notes
                .get(&line_number)
                .map(Vec::as_slice)
                .unwrap_or_default(),
        }
    }

    /// The first bookmark after `line_number`, wrapping to the first bookmark overall.
    pub fn next_bookmark(&self, line_number: usize) -> Option<usize> {
        self.bookmarks
            .range(line_number + 1..)
            .next()
            .or_else(|| self.bookmarks.iter().next())
            .copied()
    }
}
