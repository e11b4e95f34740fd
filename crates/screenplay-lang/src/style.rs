//! Static per-element layout rules.
//!
//! The table describes how each [`ScriptElement`] is laid out on a US-Letter page: margins in
//! inches for print encoders, plus an indent in monospace columns for plain-text previews.
//! Encoders (PDF/FDX/Fountain) live outside this workspace; they read this table together with
//! the classifier so both agree on the taxonomy.

use crate::ScriptElement;
use serde::{Deserialize, Serialize};

/// Horizontal alignment of an element's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Flush against the left margin.
    #[default]
    Left,
    /// Centered between the margins.
    Center,
    /// Flush against the right margin.
    Right,
}

/// Layout rules for one element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementStyle {
    /// Human-readable label (e.g. for an element picker).
    pub label: String,
    /// Left margin in inches, measured from the paper edge.
    pub margin_left: f32,
    /// Right margin in inches, measured from the paper edge.
    pub margin_right: f32,
    /// Whether the element is rendered in upper case.
    pub uppercase: bool,
    /// Horizontal alignment.
    #[serde(default)]
    pub alignment: Alignment,
    /// Indent in monospace columns relative to the action margin.
    #[serde(default)]
    pub indent: usize,
}

impl ElementStyle {
    fn new(label: &str, margin_left: f32, margin_right: f32, uppercase: bool) -> Self {
        Self {
            label: label.to_string(),
            margin_left,
            margin_right,
            uppercase,
            alignment: Alignment::Left,
            indent: 0,
        }
    }

    fn aligned(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    fn indented(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }
}

/// The per-element style table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleTable {
    /// Scene heading layout.
    pub scene: ElementStyle,
    /// Action layout.
    pub action: ElementStyle,
    /// Character cue layout.
    pub character: ElementStyle,
    /// Dialogue layout.
    pub dialogue: ElementStyle,
    /// Parenthetical layout.
    pub parenthetical: ElementStyle,
    /// Transition layout.
    pub transition: ElementStyle,
    /// Shot layout.
    pub shot: ElementStyle,
    /// General text layout.
    pub general: ElementStyle,
}

impl StyleTable {
    /// Look up the style for `element`.
    pub fn get(&self, element: ScriptElement) -> &ElementStyle {
        match element {
            ScriptElement::Scene => &self.scene,
            ScriptElement::Action => &self.action,
            ScriptElement::Character => &self.character,
            ScriptElement::Dialogue => &self.dialogue,
            ScriptElement::Parenthetical => &self.parenthetical,
            ScriptElement::Transition => &self.transition,
            ScriptElement::Shot => &self.shot,
            ScriptElement::General => &self.general,
        }
    }
}

impl Default for StyleTable {
    fn default() -> Self {
        Self {
            scene: ElementStyle::new("Scene Heading", 1.5, 1.0, true),
            action: ElementStyle::new("Action", 1.5, 1.0, false),
            character: ElementStyle::new("Character", 3.7, 1.0, true).indented(22),
            dialogue: ElementStyle::new("Dialogue", 2.5, 2.5, false).indented(10),
            parenthetical: ElementStyle::new("Parenthetical", 3.1, 2.9, false).indented(16),
            transition: ElementStyle::new("Transition", 6.0, 1.0, true)
                .aligned(Alignment::Right),
            shot: ElementStyle::new("Shot", 1.5, 1.0, true),
            general: ElementStyle::new("General", 1.5, 1.0, false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_covers_every_element() {
        let table = StyleTable::default();
        for element in ScriptElement::ALL {
            let style = table.get(element);
            assert!(!style.label.is_empty());
            assert!(style.margin_left >= 1.5);
        }
    }

    #[test]
    fn test_transition_is_right_aligned_and_uppercase() {
        let table = StyleTable::default();
        let transition = table.get(ScriptElement::Transition);
        assert_eq!(transition.alignment, Alignment::Right);
        assert!(transition.uppercase);
        assert!(!table.get(ScriptElement::Dialogue).uppercase);
    }
}
