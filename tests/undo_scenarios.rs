// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of fossflow-state and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use rstest::{fixture, rstest};

use fossflow_state::model::{
    AnchorId, AnchorRef, Connector, ConnectorAnchor, ConnectorId, ConnectorLineType, ItemId,
    ModelItem, Tile,
};
use fossflow_state::ops::ConnectorPatch;
use fossflow_state::{EngineConfig, HistoryState, Workspace};

fn item(id: &str) -> ModelItem {
    ModelItem::new(ItemId::new(id).expect("item id"), id.to_uppercase())
}

fn item_ids(workspace: &Workspace) -> Vec<String> {
    workspace
        .model()
        .state()
        .items()
        .iter()
        .map(|i| i.id.to_string())
        .collect()
}

fn drawn_connector() -> Connector {
    Connector::new(
        ConnectorId::new("c-ab").expect("connector id"),
        vec![
            ConnectorAnchor::new(
                AnchorId::new("c-ab-from").expect("anchor id"),
                AnchorRef::item(ItemId::new("a").expect("item id")),
            ),
            ConnectorAnchor::new(
                AnchorId::new("c-ab-to").expect("anchor id"),
                AnchorRef::item(ItemId::new("b").expect("item id")),
            ),
        ],
    )
}

#[fixture]
fn two_items() -> Workspace {
    let mut workspace = Workspace::default();
    workspace.add_item(item("a"), Tile::new(0, 0)).expect("add a");
    workspace.add_item(item("b"), Tile::new(4, 0)).expect("add b");
    workspace
}

#[rstest]
#[case(1)]
#[case(10)]
#[case(50)]
fn n_placements_undo_to_empty_and_redo_in_order(#[case] n: usize) {
    let mut workspace = Workspace::default();
    let ids = (0..n).map(|idx| format!("item-{idx:03}")).collect::<Vec<_>>();
    for id in &ids {
        workspace.add_item(item(id), Tile::default()).expect("add item");
    }

    for _ in 0..n {
        assert!(workspace.undo_model());
    }
    assert!(item_ids(&workspace).is_empty());
    assert!(!workspace.can_undo_model());

    for _ in 0..n {
        assert!(workspace.redo_model());
    }
    assert_eq!(item_ids(&workspace), ids);
}

#[test]
fn placing_a_b_c_undo_all_redo_all() {
    let mut workspace = Workspace::default();
    for id in ["a", "b", "c"] {
        workspace.add_item(item(id), Tile::default()).expect("add item");
    }

    for _ in 0..3 {
        workspace.undo_model();
    }
    assert_eq!(item_ids(&workspace), Vec::<String>::new());

    for _ in 0..3 {
        workspace.redo_model();
    }
    assert_eq!(item_ids(&workspace), ["a", "b", "c"]);
}

#[test]
fn edit_after_undo_forks_history() {
    let mut workspace = Workspace::default();
    for id in ["a", "b", "c"] {
        workspace.add_item(item(id), Tile::default()).expect("add item");
    }
    workspace.undo_model();
    workspace.undo_model();
    workspace.add_item(item("x"), Tile::default()).expect("add x");

    assert!(!workspace.can_redo_model());
    assert!(!workspace.redo_model());
    assert_eq!(workspace.model().history_state(), HistoryState::Forked);
    assert_eq!(item_ids(&workspace), ["a", "x"]);

    // b and c are gone for good.
    while workspace.undo_model() {}
    while workspace.redo_model() {}
    assert_eq!(item_ids(&workspace), ["a", "x"]);
}

#[rstest]
fn drawing_a_connector_takes_two_undos(mut two_items: Workspace) {
    let workspace = &mut two_items;
    let connector_id = ConnectorId::new("c-ab").expect("connector id");

    workspace.create_connector(drawn_connector()).expect("create");
    workspace
        .update_connector(
            connector_id.clone(),
            ConnectorPatch {
                line_type: Some(Some(ConnectorLineType::Double)),
                show_arrow: Some(Some(true)),
                ..ConnectorPatch::default()
            },
        )
        .expect("update");
    let finished = workspace.export_json().expect("export");

    for _ in 0..3 {
        assert!(workspace.undo_scene());
        let intermediate = &workspace.scene().state().connectors()[&connector_id];
        assert_eq!(intermediate.line_type, None);
        assert_eq!(workspace.state().view_connectors, 1);

        assert!(workspace.undo_scene());
        assert_eq!(workspace.state().view_connectors, 0);

        assert!(workspace.redo_scene());
        assert!(workspace.redo_scene());
        assert_eq!(workspace.export_json().expect("export"), finished);
    }

    // The model history never saw the connector.
    assert_eq!(workspace.model().history().past_len(), 2);
}

#[rstest]
fn history_limit_caps_undo_depth() {
    let mut workspace = Workspace::new(EngineConfig::default().with_history_limit(5));
    for idx in 0..8 {
        workspace
            .add_item(item(&format!("i{idx}")), Tile::default())
            .expect("add item");
    }

    let mut undone = 0;
    while workspace.undo_model() {
        undone += 1;
    }
    assert_eq!(undone, 5);
    assert_eq!(item_ids(&workspace), ["i0", "i1", "i2"]);
}

#[rstest]
fn gesture_drag_is_one_undo_step(mut two_items: Workspace) {
    let a = ItemId::new("a").expect("item id");
    let view = workspace_view(&two_items);

    assert!(two_items.model_mut().begin_gesture());
    for x in 1..=6 {
        two_items
            .move_item(view.clone(), a.clone(), Tile::new(x, 0))
            .expect("move");
    }
    two_items.model_mut().end_gesture();

    assert!(two_items.undo_model());
    let placed = two_items.model().state().views()[0]
        .item(&a)
        .map(|i| i.tile);
    assert_eq!(placed, Some(Tile::new(0, 0)));
}

#[rstest]
fn undo_during_drag_is_refused_and_cancel_keeps_earlier_items(mut two_items: Workspace) {
    let b = ItemId::new("b").expect("item id");
    let view = workspace_view(&two_items);

    assert!(two_items.model_mut().begin_gesture());
    two_items
        .move_item(view.clone(), b.clone(), Tile::new(9, 9))
        .expect("move");
    assert!(!two_items.can_undo_model());
    assert!(!two_items.undo_model());
    assert!(!two_items.redo_model());
    assert!(two_items.model_mut().cancel_gesture());

    assert_eq!(item_ids(&two_items), ["a", "b"]);
    let placed = two_items.model().state().views()[0]
        .item(&b)
        .map(|i| i.tile);
    assert_eq!(placed, Some(Tile::new(4, 0)));
    assert!(two_items.undo_model());
    assert_eq!(item_ids(&two_items), ["a"]);
}

fn workspace_view(workspace: &Workspace) -> fossflow_state::model::ViewId {
    workspace.active_view().cloned().expect("active view")
}
