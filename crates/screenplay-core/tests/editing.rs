use pretty_assertions::assert_eq;
use screenplay_core::{
    LineInfo, ScriptElement, SuggestionKind, apply_suggestion, locate, next_element, suggest,
    suggest_characters, suggest_transitions,
};

const SCRIPT: &str = "INT. DINER - NIGHT\n\nSARAH\n(quietly)\nDid you see that?\n\nCUT TO:";

#[test]
fn test_locate_walks_every_line() {
    let expected = [
        (0, Some(ScriptElement::Scene)),
        (1, None),
        (2, Some(ScriptElement::Character)),
        (3, Some(ScriptElement::Parenthetical)),
        // The locator classifies lines in isolation.
        (4, Some(ScriptElement::Action)),
        (5, None),
        (6, Some(ScriptElement::Transition)),
    ];

    let mut offset = 0;
    for (line, text) in SCRIPT.split('\n').enumerate() {
        let info = locate(SCRIPT, offset);
        assert_eq!(info.line_index, expected[line].0);
        assert_eq!(info.element, expected[line].1);
        assert_eq!(info.line_text, text);
        assert_eq!(info.line_start, offset);
        assert_eq!(info.line_end, offset + text.chars().count());

        // End of line still belongs to it.
        let at_end = locate(SCRIPT, info.line_end);
        assert_eq!(at_end.line_index, line);
        assert_eq!(at_end.column, text.chars().count());

        offset = info.line_end + 1;
    }
}

#[test]
fn test_locate_out_of_range_and_empty() {
    assert_eq!(locate("", 0), LineInfo::default());
    assert_eq!(locate(SCRIPT, SCRIPT.chars().count() + 1), LineInfo::default());
}

#[test]
fn test_typing_a_cue_and_completing_it() {
    let known = ["SARAH", "SAM"];
    let text = "INT. DINER - NIGHT\n\nSA";
    let info = locate(text, text.chars().count());
    assert_eq!(info.line_text, "SA");

    let suggestions = suggest(&info.line_text, known).unwrap();
    assert_eq!(suggestions.kind, SuggestionKind::Character);
    assert_eq!(suggestions.items, vec!["SARAH", "SAM"]);

    let applied = apply_suggestion(text, text.chars().count(), &suggestions.items[0]);
    assert_eq!(applied.text, "INT. DINER - NIGHT\n\nSARAH");
    assert_eq!(applied.cursor, applied.text.chars().count());

    let cue = locate(&applied.text, applied.cursor);
    assert_eq!(cue.element, Some(ScriptElement::Character));
    assert_eq!(
        next_element(ScriptElement::Character, &cue.line_text),
        ScriptElement::Dialogue
    );
}

#[test]
fn test_apply_suggestion_touches_one_line() {
    let text = "line one\nFADE\nline three";
    let applied = apply_suggestion(text, 11, "FADE OUT.");
    assert_eq!(applied.text, "line one\nFADE OUT.\nline three");
    assert_eq!(applied.cursor, 18);
    assert_eq!(applied.text.split('\n').count(), text.split('\n').count());
}

#[test]
fn test_suggestion_edge_cases() {
    assert!(suggest_characters("S", ["SARAH"]).is_empty());
    assert!(suggest_characters(" SA", ["SARAH"]).is_empty());
    assert_eq!(suggest_transitions("dissolve"), vec!["DISSOLVE TO:"]);
    assert_eq!(suggest("", Vec::<&str>::new()), None);
}

#[test]
fn test_crlf_keeps_carriage_return_in_line() {
    let text = "JOHN\r\nHello.";
    let info = locate(text, 0);
    assert_eq!(info.line_text, "JOHN\r");
    assert_eq!(info.element, Some(ScriptElement::Character));
    assert_eq!(locate(text, 6).line_index, 1);
}
