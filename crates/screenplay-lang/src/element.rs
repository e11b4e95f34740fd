//! The screenplay element taxonomy.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of a single screenplay line.
///
/// Classification never yields a value for blank lines; callers model "undetermined" as
/// `Option<ScriptElement>::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptElement {
    /// Scene heading (`INT. KITCHEN - DAY`).
    Scene,
    /// Action / description.
    Action,
    /// Character cue above a dialogue block.
    Character,
    /// Spoken dialogue.
    Dialogue,
    /// Parenthetical direction inside a dialogue block (`(beat)`).
    Parenthetical,
    /// Transition (`CUT TO:`).
    Transition,
    /// Shot or camera cue (`ANGLE ON`, `SUPER:`).
    Shot,
    /// Unformatted text.
    General,
}

impl ScriptElement {
    /// Every element, in the order hosts usually list them.
    pub const ALL: [ScriptElement; 8] = [
        ScriptElement::Scene,
        ScriptElement::Action,
        ScriptElement::Character,
        ScriptElement::Dialogue,
        ScriptElement::Parenthetical,
        ScriptElement::Transition,
        ScriptElement::Shot,
        ScriptElement::General,
    ];

    /// Stable lowercase identifier (matches the serde representation).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Scene => "scene",
            Self::Action => "action",
            Self::Character => "character",
            Self::Dialogue => "dialogue",
            Self::Parenthetical => "parenthetical",
            Self::Transition => "transition",
            Self::Shot => "shot",
            Self::General => "general",
        }
    }

    /// Parse the lowercase identifier produced by [`ScriptElement::as_str`].
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|element| element.as_str().eq_ignore_ascii_case(name))
    }

    /// Returns `true` for elements that belong to a dialogue block.
    pub fn is_dialogue_block(self) -> bool {
        matches!(
            self,
            Self::Character | Self::Dialogue | Self::Parenthetical
        )
    }
}

impl fmt::Display for ScriptElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
