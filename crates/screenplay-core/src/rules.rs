//! Element transition rules for the Enter and Tab keys.
//!
//! Enter decides what the new, empty line becomes. Tab behaves differently depending on the
//! current line: on an empty line it cycles through [`TAB_CYCLE`] to pick another element for
//! that line, on a line with text it promotes to the element's structural successor.

use screenplay_lang::ScriptElement;

/// Elements Tab cycles through on an empty line.
pub const TAB_CYCLE: [ScriptElement; 4] = [
    ScriptElement::Action,
    ScriptElement::Character,
    ScriptElement::Scene,
    ScriptElement::Transition,
];

/// The element that structurally follows `element`.
///
/// A cue is followed by its dialogue and a finished speech by the next cue, so Enter after a
/// character line always opens dialogue.
pub fn default_successor(element: ScriptElement) -> ScriptElement {
    match element {
        ScriptElement::Scene => ScriptElement::Action,
        ScriptElement::Action => ScriptElement::Action,
        ScriptElement::Character => ScriptElement::Dialogue,
        ScriptElement::Dialogue => ScriptElement::Character,
        ScriptElement::Parenthetical => ScriptElement::Dialogue,
        ScriptElement::Transition => ScriptElement::Scene,
        ScriptElement::Shot => ScriptElement::Action,
        ScriptElement::General => ScriptElement::General,
    }
}

/// Element for the line created by pressing Enter at the end of `line_text`.
pub fn next_element(current: ScriptElement, line_text: &str) -> ScriptElement {
    if line_text.trim().is_empty() {
        // Keeps repeated Enter presses from stacking empty headings or cues.
        return ScriptElement::Action;
    }
    default_successor(current)
}

/// Element selected by pressing Tab on a line holding `line_text`.
///
/// Elements outside the cycle enter it at [`ScriptElement::Action`].
pub fn tab_cycle_element(current: ScriptElement, line_text: &str) -> ScriptElement {
    if !line_text.trim().is_empty() {
        return default_successor(current);
    }

    TAB_CYCLE
        .iter()
        .position(|element| *element == current)
        .map_or(TAB_CYCLE[0], |idx| TAB_CYCLE[(idx + 1) % TAB_CYCLE.len()])
}
