use conjugo::render::{JsonRenderer, Renderer};
use conjugo::{Conjugation, ConjugationConverter};
use pretty_assertions::assert_eq;
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn golden_snapshot_full_page() {
    let converter = ConjugationConverter::with_defaults();
    let result = converter
        .convert_file(fixture("etre.html"), Some("être"))
        .expect("failed to convert fixture page");

    let expected: Conjugation = serde_json::from_str(include_str!("golden/etre.json"))
        .expect("golden file should parse");
    assert_eq!(result, expected);
}

#[test]
fn golden_snapshot_rendered_json_round_trips() {
    let converter = ConjugationConverter::with_defaults();
    let result = converter
        .convert_file(fixture("etre.html"), Some("être"))
        .expect("failed to convert fixture page");

    let rendered = JsonRenderer::pretty().render(&result).expect("render");
    let expected: serde_json::Value =
        serde_json::from_str(include_str!("golden/etre.json")).expect("golden file should parse");
    let actual: serde_json::Value = serde_json::from_str(&rendered).expect("rendered JSON");
    assert_eq!(actual, expected);
}

#[test]
fn golden_snapshot_unknown_verb_page() {
    let converter = ConjugationConverter::with_defaults();
    let result = converter
        .convert_file(fixture("inconnu.html"), Some("xyzzy"))
        .expect("failed to convert fixture page");
    assert_eq!(
        JsonRenderer::default().render(&result).expect("render"),
        r#"{"word":"xyzzy","data":[]}"#
    );
}
