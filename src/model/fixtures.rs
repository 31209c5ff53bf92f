// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of fossflow-state and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::ids::{
    AnchorId, ColorId, ConnectorId, IconId, ItemId, RectangleId, TextBoxId, ViewId,
};
use super::item::{Color, Icon, ModelItem};
use super::overlay::{AnchorRef, Connector, ConnectorAnchor, Rectangle, TextBox};
use super::state::{ModelState, SceneState, DEFAULT_VIEW_ID};
use super::view::{Tile, ViewItem};

pub(crate) fn item_id(value: &str) -> ItemId {
    ItemId::new(value).expect("item id")
}

pub(crate) fn view_id(value: &str) -> ViewId {
    ViewId::new(value).expect("view id")
}

pub(crate) fn default_view_id() -> ViewId {
    view_id(DEFAULT_VIEW_ID)
}

pub(crate) fn icon_id(value: &str) -> IconId {
    IconId::new(value).expect("icon id")
}

pub(crate) fn color_id(value: &str) -> ColorId {
    ColorId::new(value).expect("color id")
}

pub(crate) fn connector_id(value: &str) -> ConnectorId {
    ConnectorId::new(value).expect("connector id")
}

pub(crate) fn anchor_id(value: &str) -> AnchorId {
    AnchorId::new(value).expect("anchor id")
}

pub(crate) fn rectangle_id(value: &str) -> RectangleId {
    RectangleId::new(value).expect("rectangle id")
}

pub(crate) fn text_box_id(value: &str) -> TextBoxId {
    TextBoxId::new(value).expect("text box id")
}

/// A connector from item `from` to item `to` with anchors `<id>-from` / `<id>-to`.
pub(crate) fn item_connector(id: &str, from: &str, to: &str) -> Connector {
    Connector::new(
        connector_id(id),
        vec![
            ConnectorAnchor::new(anchor_id(&format!("{id}-from")), AnchorRef::item(item_id(from))),
            ConnectorAnchor::new(anchor_id(&format!("{id}-to")), AnchorRef::item(item_id(to))),
        ],
    )
}

/// Default view with items `a` (server icon) and `b`, one icon and one color.
pub(crate) fn sample_model() -> ModelState {
    let mut state = ModelState::default();
    state.set_title("Sample");
    state
        .icons_mut()
        .push(Icon::new(icon_id("server"), "Server", "https://icons.example/server.svg"));
    state.colors_mut().push(Color::new(color_id("blue"), "#0000ff"));
    state
        .items_mut()
        .push(ModelItem::new(item_id("a"), "A").with_icon(icon_id("server")));
    state.items_mut().push(ModelItem::new(item_id("b"), "B"));

    let view = state
        .view_mut(&default_view_id())
        .expect("default view");
    view.items_mut().push(ViewItem::new(item_id("a"), Tile::new(0, 0)));
    view.items_mut().push(ViewItem::new(item_id("b"), Tile::new(4, 0)));
    state
}

/// Connector `c1` (a -> b, blue), rectangle `r1` and text box `t1` in the default view.
pub(crate) fn sample_scene() -> SceneState {
    let view = default_view_id();
    let mut state = SceneState::default();

    let mut connector = item_connector("c1", "a", "b");
    connector.color = Some(color_id("blue"));
    state.connectors_mut().insert(connector.id.clone(), connector);
    state.overlay_mut(&view).connectors_mut().push(connector_id("c1"));

    let mut rectangle = Rectangle::new(rectangle_id("r1"), Tile::new(-1, -1), Tile::new(5, 1));
    rectangle.color = Some(color_id("blue"));
    state.overlay_mut(&view).rectangles_mut().push(rectangle);

    state.text_boxes_mut().insert(
        text_box_id("t1"),
        TextBox::new(text_box_id("t1"), Tile::new(0, 3), "Note"),
    );
    state.overlay_mut(&view).text_boxes_mut().push(text_box_id("t1"));
    state
}
