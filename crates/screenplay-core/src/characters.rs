//! Character and dialogue statistics.
//!
//! Each cue owns the lines after it until the next cue or scene heading. Blank lines inside
//! that span are skipped rather than ending it, so a speech broken by an empty line still
//! counts as one block. Parentheticals never count toward the word total.

use crate::document::lines;
use crate::patterns::Matcher;
use crate::scenes::SceneNumbering;
use screenplay_lang::ScriptElement;
use serde::Serialize;
use std::collections::HashMap;

/// Statistics for one speaking character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterStats {
    /// Cue name, upper case, without extension (`JOHN (V.O.)` counts as `JOHN`).
    pub name: String,
    /// Number of cues (dialogue blocks).
    pub dialogue_count: usize,
    /// Words in every block, parentheticals excluded.
    pub word_count: usize,
    /// One-based line number of the first cue.
    pub first_appearance: usize,
    /// One-based line number of the last cue.
    pub last_appearance: usize,
    /// Scene numbers the character speaks in, first-seen order, no duplicates.
    pub scenes: Vec<String>,
}

impl CharacterStats {
    fn new(name: String) -> Self {
        Self {
            name,
            dialogue_count: 0,
            word_count: 0,
            first_appearance: 0,
            last_appearance: 0,
            scenes: Vec::new(),
        }
    }
}

/// Collect per-character statistics from `text`.
///
/// Sorted by `dialogue_count`, most lines first; ties keep first-appearance order.
pub fn extract_characters_with(matcher: &Matcher, text: &str) -> Vec<CharacterStats> {
    let lines: Vec<&str> = lines(text).collect();
    extract_from_lines(matcher, &lines)
}

pub(crate) fn extract_from_lines(matcher: &Matcher, lines: &[&str]) -> Vec<CharacterStats> {
    let kinds: Vec<Option<ScriptElement>> =
        lines.iter().map(|line| matcher.classify(line)).collect();
    let mut stats: Vec<CharacterStats> = Vec::new();
    let mut by_name: HashMap<String, usize> = HashMap::new();
    let mut numbering = SceneNumbering::default();
    let mut current_scene: Option<String> = None;

    for (index, (line, kind)) in lines.iter().zip(&kinds).enumerate() {
        match kind {
            Some(ScriptElement::Scene) => {
                current_scene = Some(numbering.next(matcher, line));
            }
            Some(ScriptElement::Character) => {
                let name = matcher
                    .character_name(line)
                    .unwrap_or_else(|| line.trim().to_uppercase());
                let slot = *by_name.entry(name.clone()).or_insert_with(|| {
                    stats.push(CharacterStats::new(name));
                    stats.len() - 1
                });

                let words = block_word_count(&lines[index + 1..], &kinds[index + 1..]);
                let entry = &mut stats[slot];
                let line_number = index + 1;
                entry.dialogue_count += 1;
                entry.word_count += words;
                if entry.first_appearance == 0 {
                    entry.first_appearance = line_number;
                }
                entry.last_appearance = line_number;
                if let Some(scene) = &current_scene
                    && !entry.scenes.contains(scene)
                {
                    entry.scenes.push(scene.clone());
                }
            }
            _ => {}
        }
    }

    stats.sort_by(|a, b| b.dialogue_count.cmp(&a.dialogue_count));
    stats
}

/// Words spoken after a cue, up to the next cue or scene heading.
fn block_word_count(lines: &[&str], kinds: &[Option<ScriptElement>]) -> usize {
    lines
        .iter()
        .zip(kinds)
        .take_while(|(_, kind)| {
            !matches!(
                kind,
                Some(ScriptElement::Character | ScriptElement::Scene)
            )
        })
        .filter(|(_, kind)| matches!(kind, Some(kind) if *kind != ScriptElement::Parenthetical))
        .map(|(line, _)| line.split_whitespace().count())
        .sum()
}
