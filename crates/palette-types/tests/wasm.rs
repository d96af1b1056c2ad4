//! WASM-target tests for palette-types.
//!
//! Mirrors the native unit tests but runs under wasm32-unknown-unknown
//! via `wasm-pack test --node`.

use wasm_bindgen_test::*;

use palette_types::artifact::*;
use palette_types::config::*;
use palette_types::session::*;
use palette_types::source::*;

#[wasm_bindgen_test]
fn session_defaults() {
    let session = SessionMeta::new("s1", "w1");
    assert!(!session.hidden);
    assert!(!session.is_archived);
    assert_eq!(session.display_title(), "Untitled");
}

#[wasm_bindgen_test]
fn source_unknown_type() {
    let source: SourceConfig =
        serde_json::from_str(r#"{"slug":"x","type":"fax"}"#).unwrap();
    assert_eq!(source.source_type, SourceType::Other);
}

#[wasm_bindgen_test]
fn artifact_decode_and_helpers() {
    let artifact = ArtifactType::from_json(
        r#"{"type":"content-preview","contentType":"html","title":"Page","code":"<p/>"}"#,
    )
    .unwrap();
    assert_eq!(artifact.title(), "Page");
    assert_eq!(artifact.type_label(), Some("HTML"));
    assert!(artifact.shows_code_toggle());
}

#[wasm_bindgen_test]
fn config_cap() {
    assert_eq!(PaletteConfig::default().cap(), 5);
    assert_eq!(PaletteConfig::with_max_results(-1).cap(), 0);
}
