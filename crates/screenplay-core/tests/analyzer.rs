use pretty_assertions::assert_eq;
use rand::Rng;
use screenplay_core::{
    LineAnnotations, RevisionColor, ScreenplayConfig, ScriptAnalysis, ScriptAnalyzer,
    ScriptElement, ScriptNote, render_preview,
};
use std::sync::Arc;

const SCRIPT: &str = "\
FADE IN:

INT. WAREHOUSE - NIGHT

Rain hammers the roof.

MARCUS
(whispering)
They're here.

LENA
How many?

MARCUS
Too many.

EXT. DOCKS - CONTINUOUS

LENA (O.S.)
Run!

SMASH CUT TO:";

fn recompute(
    analyzer: &ScriptAnalyzer,
    text: &str,
    annotations: &LineAnnotations,
) -> ScriptAnalysis {
    ScriptAnalysis::compute(analyzer.matcher(), analyzer.config(), text, annotations, 0)
}

fn without_version(analysis: &ScriptAnalysis) -> ScriptAnalysis {
    ScriptAnalysis {
        version: 0,
        ..analysis.clone()
    }
}

#[test]
fn test_full_analysis() {
    let mut analyzer = ScriptAnalyzer::with_defaults();
    let mut annotations = LineAnnotations::new();
    annotations.omit_scene(17);
    let analysis = analyzer.analyze(SCRIPT, &annotations);

    let scenes: Vec<(&str, &str, bool)> = analysis
        .scenes
        .iter()
        .map(|scene| (scene.scene_number.as_str(), scene.text.as_str(), scene.omitted))
        .collect();
    assert_eq!(
        scenes,
        vec![
            ("1", "INT. WAREHOUSE - NIGHT", false),
            ("2", "EXT. DOCKS - CONTINUOUS", true),
        ]
    );

    let marcus = &analysis.characters[0];
    assert_eq!(marcus.name, "MARCUS");
    assert_eq!(marcus.dialogue_count, 2);
    assert_eq!(marcus.word_count, 4);
    assert_eq!(marcus.scenes, vec!["1"]);

    let lena = &analysis.characters[1];
    assert_eq!(lena.name, "LENA");
    assert_eq!(lena.scenes, vec!["1", "2"]);
    assert_eq!(lena.first_appearance, 11);
    assert_eq!(lena.last_appearance, 19);

    assert_eq!(analysis.elements[0], Some(ScriptElement::Transition));
    assert_eq!(analysis.elements[8], Some(ScriptElement::Dialogue));
    assert_eq!(analysis.stats.scene_count, 2);
    assert_eq!(analysis.stats.character_count, 2);
    assert_eq!(analysis.stats.pages, 1);
    assert!(analysis.continued.is_empty());
    assert_eq!(analysis.scene_at_line(15).map(|s| s.line_number), Some(3));
}

#[test]
fn test_cached_analysis_matches_recompute_across_edits() {
    let mut analyzer = ScriptAnalyzer::with_defaults();
    let mut annotations = LineAnnotations::new();
    let mut rng = rand::thread_rng();
    let mut lines: Vec<String> = SCRIPT.split('\n').map(str::to_string).collect();
    let inserts = ["JOHN", "Hello.", "", "INT. ATTIC - DAY", "(beat)", "CUT TO:"];

    for _ in 0..100 {
        if rng.gen_bool(0.7) {
            let at = rng.gen_range(0..=lines.len());
            lines.insert(at, inserts[rng.gen_range(0..inserts.len())].to_string());
        } else if lines.len() > 1 {
            let at = rng.gen_range(0..lines.len());
            lines.remove(at);
        }
        if rng.gen_bool(0.2) {
            annotations.lock_scene(rng.gen_range(1..=lines.len()));
        }

        let text = lines.join("\n");
        let cached = analyzer.analyze(&text, &annotations);
        let again = analyzer.analyze(&text, &annotations);
        assert!(Arc::ptr_eq(&cached, &again));
        assert_eq!(without_version(&cached), recompute(&analyzer, &text, &annotations));
    }
}

#[test]
fn test_bookmarks_and_notes_do_not_change_views() {
    let mut analyzer = ScriptAnalyzer::with_defaults();
    let mut annotations = LineAnnotations::new();
    let before = analyzer.analyze(SCRIPT, &annotations);

    annotations.toggle_bookmark(7);
    annotations
        .mark_revision(9, RevisionColor::Blue)
        .add_note(9, ScriptNote::new("punch this up"));
    let after = analyzer.analyze(SCRIPT, &annotations);

    // Annotations changed, so the analyzer recomputed, but nothing derived from them moved.
    assert_eq!(after.version, before.version + 1);
    assert_eq!(without_version(&after), without_version(&before));
    assert!(annotations.markers_at(9).revision.is_some());
}

#[test]
fn test_config_overrides_change_classification() {
    let yaml = "\
lines_per_page: 4
vocabulary:
  shot_keywords: [\"overhead\"]
  transitions: [\"cross fade:\"]
";
    let config = ScreenplayConfig::from_yaml_str(yaml).unwrap();
    let mut analyzer = ScriptAnalyzer::new(config).unwrap();

    let matcher = analyzer.matcher();
    assert_eq!(matcher.classify("OVERHEAD - THE CITY"), Some(ScriptElement::Shot));
    assert_eq!(matcher.classify("cross fade:"), Some(ScriptElement::Transition));
    // Built-in shot keywords are replaced, not extended.
    assert_eq!(matcher.classify("ANGLE ON"), Some(ScriptElement::Character));

    let analysis = analyzer.analyze("A.\nB.\nC.\nD.\nE.", &LineAnnotations::new());
    assert_eq!(analysis.stats.pages, 2);
}

#[test]
fn test_config_from_json() {
    let config = ScreenplayConfig::from_json_str(r#"{"maxSuggestions": 1}"#);
    // Field names are snake_case; unknown keys fall back to defaults.
    assert_eq!(config.unwrap().max_suggestions, 8);

    let config = ScreenplayConfig::from_json_str(r#"{"max_suggestions": 1}"#).unwrap();
    let mut analyzer = ScriptAnalyzer::new(config).unwrap();
    analyzer.analyze("JOHN\nHi.\n\nJOAN\nHey.", &LineAnnotations::new());
    assert_eq!(analyzer.suggest("JO").unwrap().items.len(), 1);
}

#[test]
fn test_invalid_config_is_rejected() {
    assert!(ScreenplayConfig::from_yaml_str("lines_per_page: 0\n").is_err());
    assert!(ScreenplayConfig::from_yaml_str("vocabulary:\n  transitions: []\n").is_err());
}

#[test]
fn test_preview() {
    let preview = render_preview("int. lab - day\n\nDR. KIM\n(to herself)\nAlmost.\n\nfade out.");
    let lines: Vec<&str> = preview.split('\n').collect();
    assert_eq!(lines[0], "INT. LAB - DAY");
    assert_eq!(lines[1], "");
    assert_eq!(lines[2].trim_start(), "DR. KIM");
    assert_eq!(lines[3], format!("{}(to herself)", " ".repeat(16)));
    assert_eq!(lines[4], format!("{}Almost.", " ".repeat(10)));
    assert_eq!(lines[6], format!("{}FADE OUT.", " ".repeat(60 - 9)));
}

#[test]
fn test_analysis_serializes_to_camel_case_json() {
    let mut analyzer = ScriptAnalyzer::with_defaults();
    let analysis = analyzer.analyze("12. INT. HOUSE - DAY\n\nJOHN\nHi.", &LineAnnotations::new());
    let json = serde_json::to_value(&*analysis).unwrap();

    assert_eq!(json["version"], 1);
    assert_eq!(json["elements"][0], "scene");
    assert_eq!(json["elements"][1], serde_json::Value::Null);
    assert_eq!(json["scenes"][0]["sceneNumber"], "12");
    assert_eq!(json["scenes"][0]["lineNumber"], 1);
    assert_eq!(json["characters"][0]["dialogueCount"], 1);
    assert_eq!(json["stats"]["dialoguePercent"], 33);
    assert_eq!(json["continued"]["moreLines"], serde_json::json!([]));
}
