// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of fossflow-state and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::path::PathBuf;

use clap::Parser;
use rstest::{fixture, rstest};

use fossflow_state::model::{ItemId, ModelItem, Tile};
use fossflow_state::{Args, Document, ValidationError, ValidationIssue, Workspace};

const TEST_DIAGRAM: &str = include_str!("fixtures/test-diagram.json");

#[fixture]
fn imported() -> Workspace {
    let mut workspace = Workspace::default();
    workspace.import_json(TEST_DIAGRAM).expect("import test diagram");
    workspace
}

#[rstest]
fn import_reports_expected_counts(imported: Workspace) {
    let state = imported.state();
    assert_eq!(state.title, "Test Diagram");
    assert_eq!(state.model_items, 2);
    assert_eq!(state.icons, 2);
    assert_eq!(state.views, 1);
    assert_eq!(state.view_items, 2);
    assert_eq!(state.view_connectors, 1);
    assert_eq!(state.view_rectangles, 1);
    assert_eq!(state.view_text_boxes, 1);
    assert_eq!(state.scene_connectors, 1);
    assert_eq!(state.scene_text_boxes, 1);
}

#[rstest]
fn model_undo_after_import_is_a_noop(mut imported: Workspace) {
    let before = imported.export_document();
    assert!(!imported.can_undo_model());
    assert!(!imported.can_undo_scene());
    assert!(!imported.undo_model());
    assert!(!imported.undo_scene());
    assert_eq!(imported.export_document(), before);
}

#[rstest]
fn round_trip_preserves_element_counts(imported: Workspace) {
    let original = Document::from_json(TEST_DIAGRAM).expect("parse");
    let exported = imported.export_document();
    assert_eq!(exported.counts(), original.counts());
}

#[rstest]
fn export_is_idempotent_and_byte_stable(imported: Workspace) {
    assert_eq!(imported.export_document(), imported.export_document());
    let first = imported.export_json().expect("export");
    let second = imported.export_json().expect("export");
    assert_eq!(first, second);
}

#[rstest]
fn reimporting_the_export_is_a_fixed_point(imported: Workspace) {
    let json = imported.export_json().expect("export");

    let mut again = Workspace::default();
    again.import_json(&json).expect("reimport");
    assert_eq!(again.export_json().expect("export"), json);
}

#[rstest]
fn export_keeps_wire_names_and_drops_unknown_fields(imported: Workspace) {
    let json = imported.export_json().expect("export");
    let value: serde_json::Value = serde_json::from_str(&json).expect("json");

    assert!(value.get("fitToScreen").is_none());
    let view = &value["views"][0];
    assert_eq!(view["lastUpdated"], "2026-03-01T12:00:00.000Z");
    assert_eq!(view["connectors"][0]["lineType"], "SINGLE");
    assert_eq!(view["connectors"][0]["anchors"][1]["ref"]["item"], "web");
    assert_eq!(view["textBoxes"][0]["orientation"], "X");
    assert_eq!(value["icons"][0]["isIsometric"], true);
}

#[rstest]
fn import_resets_history_after_edits(mut imported: Workspace) {
    imported
        .add_item(
            ModelItem::new(ItemId::new("db").expect("item id"), "Database"),
            Tile::new(8, 0),
        )
        .expect("add item");
    assert!(imported.can_undo_model());

    imported.import_json(TEST_DIAGRAM).expect("reimport");
    assert!(!imported.can_undo_model());
    assert!(!imported.can_redo_model());
    assert_eq!(imported.state().model_items, 2);
}

#[test]
fn broken_references_are_rejected_before_touching_stores() {
    let broken = TEST_DIAGRAM.replace(r#""ref": { "item": "web" }"#, r#""ref": { "item": "ghost" }"#);
    let mut workspace = Workspace::default();
    let before = workspace.export_document();

    let err = workspace.import_json(&broken).unwrap_err();
    let ValidationError::Inconsistent { issues } = &err else {
        panic!("expected inconsistent document, got {err}");
    };
    assert!(matches!(
        issues.as_slice(),
        [ValidationIssue::AnchorToMissingViewItem { .. }]
    ));
    assert_eq!(workspace.export_document(), before);
}

#[test]
fn ids_may_contain_slashes() {
    let text = TEST_DIAGRAM.replace(r#""web""#, r#""rack/web""#);
    let mut workspace = Workspace::default();
    workspace.import_json(&text).expect("import slash ids");
    assert_eq!(workspace.state().view_connectors, 1);

    let json = workspace.export_json().expect("export");
    let value: serde_json::Value = serde_json::from_str(&json).expect("json");
    assert_eq!(value["items"][1]["id"], "rack/web");
    assert_eq!(value["views"][0]["connectors"][0]["anchors"][1]["ref"]["item"], "rack/web");

    let removed = workspace
        .remove_item(ItemId::new("rack/web").expect("item id"))
        .expect("remove item");
    assert_eq!(removed, 1);
}

#[test]
fn cli_roundtrip_writes_equivalent_document() {
    let input = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/test-diagram.json");
    let output = std::env::temp_dir().join(format!(
        "fossflow-roundtrip-{}.json",
        std::process::id()
    ));
    let args = Args::try_parse_from([
        "fossflow",
        "roundtrip",
        input.to_str().expect("utf-8 path"),
        "-o",
        output.to_str().expect("utf-8 path"),
    ])
    .expect("parse args");

    fossflow_state::run(&args, &mut Vec::<u8>::new()).expect("roundtrip");
    let written = std::fs::read_to_string(&output).expect("read output");
    let _ = std::fs::remove_file(&output);

    let original = Document::from_json(TEST_DIAGRAM).expect("parse original");
    let exported = Document::from_json(&written).expect("parse output");
    assert_eq!(exported.counts(), original.counts());
    assert_eq!(exported.title, original.title);
}

#[test]
fn cli_validate_reports_issues() {
    let path = std::env::temp_dir().join(format!("fossflow-invalid-{}.json", std::process::id()));
    std::fs::write(&path, TEST_DIAGRAM.replace(r#""color": "gray""#, r#""color": "pink""#))
        .expect("write input");
    let args = Args::try_parse_from(["fossflow", "validate", path.to_str().expect("utf-8 path")])
        .expect("parse args");

    let err = fossflow_state::run(&args, &mut Vec::<u8>::new()).unwrap_err();
    let _ = std::fs::remove_file(&path);
    assert!(err.to_string().contains("pink"), "{err}");
}
