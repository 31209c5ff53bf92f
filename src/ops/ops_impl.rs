// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of fossflow-state and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// Model/scene mutation helpers used by `apply_model_ops` and `apply_scene_ops`.
/// Keeps `ops::mod` focused on public op types and orchestration.
fn apply_model_op(
    state: &mut ModelState,
    op: &ModelOp,
    delta: &mut DeltaBuilder,
) -> Result<(), ActionError> {
    match op {
        ModelOp::SetTitle { title } => {
            state.set_title(title.clone());
            Ok(())
        }
        ModelOp::RegisterIcons { icons } => {
            for icon in icons {
                if state.icon(&icon.id).is_some() {
                    return Err(ActionError::duplicate(EntityKind::Icon, &icon.id));
                }
                state.icons_mut().push(icon.clone());
                delta.record_added(EntityRef::new(EntityKind::Icon, &icon.id));
            }
            Ok(())
        }
        ModelOp::RegisterColors { colors } => {
            for color in colors {
                if state.color(&color.id).is_some() {
                    return Err(ActionError::duplicate(EntityKind::Color, &color.id));
                }
                state.colors_mut().push(color.clone());
                delta.record_added(EntityRef::new(EntityKind::Color, &color.id));
            }
            Ok(())
        }
        ModelOp::AddItem {
            view_id,
            item,
            tile,
        } => {
            if state.view(view_id).is_none() {
                return Err(ActionError::not_found(EntityKind::View, view_id));
            }
            if state.item(&item.id).is_some() {
                return Err(ActionError::duplicate(EntityKind::Item, &item.id));
            }
            if let Some(icon_id) = &item.icon {
                require_icon(state, icon_id)?;
            }

            state.items_mut().push(item.clone());
            if let Some(view) = state.view_mut(view_id) {
                view.items_mut().push(ViewItem::new(item.id.clone(), *tile));
            }
            delta.record_added(EntityRef::new(EntityKind::Item, &item.id));
            delta.record_added(view_item_ref(view_id, &item.id));
            Ok(())
        }
        ModelOp::UpdateItem { item_id, patch } => {
            if let Some(Some(icon_id)) = &patch.icon {
                require_icon(state, icon_id)?;
            }
            let Some(existing) = state.items_mut().iter_mut().find(|i| &i.id == item_id) else {
                return Err(ActionError::not_found(EntityKind::Item, item_id));
            };

            if let Some(name) = &patch.name {
                existing.name = name.clone();
            }
            set_optional(&mut existing.description, &patch.description);
            set_optional(&mut existing.icon, &patch.icon);
            delta.record_updated(EntityRef::new(EntityKind::Item, item_id));
            Ok(())
        }
        ModelOp::MoveItem {
            view_id,
            item_id,
            patch,
        } => {
            let Some(view) = state.view_mut(view_id) else {
                return Err(ActionError::not_found(EntityKind::View, view_id));
            };
            let Some(placed) = view.items_mut().iter_mut().find(|i| &i.id == item_id) else {
                return Err(ActionError::not_found(
                    EntityKind::ViewItem,
                    view_item_ref(view_id, item_id).id,
                ));
            };

            if let Some(tile) = patch.tile {
                placed.tile = tile;
            }
            set_optional(&mut placed.label_height, &patch.label_height);
            delta.record_updated(view_item_ref(view_id, item_id));
            Ok(())
        }
        ModelOp::RemoveItem { item_id } => {
            let Some(index) = state.items().iter().position(|i| &i.id == item_id) else {
                return Err(ActionError::not_found(EntityKind::Item, item_id));
            };
            state.items_mut().remove(index);

            for view in state.views_mut() {
                if view.contains_item(item_id) {
                    view.items_mut().retain(|i| &i.id != item_id);
                    delta.record_removed(view_item_ref(view.id(), item_id));
                }
            }
            delta.record_removed(EntityRef::new(EntityKind::Item, item_id));
            Ok(())
        }
        ModelOp::AddView { view } => {
            if state.view(view.id()).is_some() {
                return Err(ActionError::duplicate(EntityKind::View, view.id()));
            }
            let mut placed = BTreeSet::new();
            for view_item in view.items() {
                if state.item(&view_item.id).is_none() {
                    return Err(ActionError::not_found(EntityKind::Item, &view_item.id));
                }
                if !placed.insert(&view_item.id) {
                    return Err(ActionError::duplicate(
                        EntityKind::ViewItem,
                        view_item_ref(view.id(), &view_item.id).id,
                    ));
                }
            }

            state.views_mut().push(view.clone());
            delta.record_added(EntityRef::new(EntityKind::View, view.id()));
            Ok(())
        }
        ModelOp::UpdateView { view_id, patch } => {
            let Some(view) = state.view_mut(view_id) else {
                return Err(ActionError::not_found(EntityKind::View, view_id));
            };

            if let Some(name) = &patch.name {
                view.set_name(name.clone());
            }
            if let Some(description) = &patch.description {
                view.set_description(description.clone());
            }
            if let Some(last_updated) = &patch.last_updated {
                view.set_last_updated(last_updated.clone());
            }
            delta.record_updated(EntityRef::new(EntityKind::View, view_id));
            Ok(())
        }
        ModelOp::RemoveView { view_id } => {
            let Some(index) = state.views().iter().position(|v| v.id() == view_id) else {
                return Err(ActionError::not_found(EntityKind::View, view_id));
            };
            if state.views().len() == 1 {
                return Err(ActionError::LastView {
                    view_id: view_id.clone(),
                });
            }

            state.views_mut().remove(index);
            delta.record_removed(EntityRef::new(EntityKind::View, view_id));
            Ok(())
        }
    }
}

fn apply_scene_op(
    state: &mut SceneState,
    op: &SceneOp,
    delta: &mut DeltaBuilder,
) -> Result<(), ActionError> {
    match op {
        SceneOp::CreateConnector { view_id, connector } => {
            if state.connectors().contains_key(&connector.id) {
                return Err(ActionError::duplicate(EntityKind::Connector, &connector.id));
            }
            check_connector_anchors(connector)?;

            state
                .connectors_mut()
                .insert(connector.id.clone(), connector.clone());
            state
                .overlay_mut(view_id)
                .connectors_mut()
                .push(connector.id.clone());
            check_view_anchor_refs(state, view_id)?;
            delta.record_added(EntityRef::new(EntityKind::Connector, &connector.id));
            Ok(())
        }
        SceneOp::UpdateConnector {
            connector_id,
            patch,
        } => {
            let Some(existing) = state.connectors_mut().get_mut(connector_id) else {
                return Err(ActionError::not_found(EntityKind::Connector, connector_id));
            };

            set_optional(&mut existing.description, &patch.description);
            set_optional(&mut existing.start_label, &patch.start_label);
            set_optional(&mut existing.end_label, &patch.end_label);
            set_optional(&mut existing.start_label_height, &patch.start_label_height);
            set_optional(&mut existing.center_label_height, &patch.center_label_height);
            set_optional(&mut existing.end_label_height, &patch.end_label_height);
            set_optional(&mut existing.color, &patch.color);
            set_optional(&mut existing.custom_color, &patch.custom_color);
            set_optional(&mut existing.width, &patch.width);
            set_optional(&mut existing.style, &patch.style);
            set_optional(&mut existing.line_type, &patch.line_type);
            set_optional(&mut existing.show_arrow, &patch.show_arrow);
            if let Some(labels) = &patch.labels {
                existing.labels = labels.clone();
            }

            if let Some(anchors) = &patch.anchors {
                existing.anchors = anchors.clone();
                check_connector_anchors(existing)?;
                if let Some(view_id) = state.view_of_connector(connector_id).cloned() {
                    check_view_anchor_refs(state, &view_id)?;
                }
            }
            delta.record_updated(EntityRef::new(EntityKind::Connector, connector_id));
            Ok(())
        }
        SceneOp::RemoveConnector { connector_id } => {
            if !state.connectors().contains_key(connector_id) {
                return Err(ActionError::not_found(EntityKind::Connector, connector_id));
            }
            remove_connector(state, connector_id, delta);
            Ok(())
        }
        SceneOp::RemoveConnectorsForItem { item_id } => {
            let attached = state
                .connectors()
                .values()
                .filter(|c| c.references_item(item_id))
                .map(|c| c.id.clone())
                .collect::<Vec<_>>();
            for connector_id in &attached {
                if state.connectors().contains_key(connector_id) {
                    remove_connector(state, connector_id, delta);
                }
            }
            Ok(())
        }
        SceneOp::CreateTextBox { view_id, text_box } => {
            if state.text_boxes().contains_key(&text_box.id) {
                return Err(ActionError::duplicate(EntityKind::TextBox, &text_box.id));
            }

            state
                .text_boxes_mut()
                .insert(text_box.id.clone(), text_box.clone());
            state
                .overlay_mut(view_id)
                .text_boxes_mut()
                .push(text_box.id.clone());
            delta.record_added(EntityRef::new(EntityKind::TextBox, &text_box.id));
            Ok(())
        }
        SceneOp::UpdateTextBox { text_box_id, patch } => {
            let Some(existing) = state.text_boxes_mut().get_mut(text_box_id) else {
                return Err(ActionError::not_found(EntityKind::TextBox, text_box_id));
            };

            if let Some(tile) = patch.tile {
                existing.tile = tile;
            }
            if let Some(content) = &patch.content {
                existing.content = content.clone();
            }
            set_optional(&mut existing.font_size, &patch.font_size);
            set_optional(&mut existing.orientation, &patch.orientation);
            delta.record_updated(EntityRef::new(EntityKind::TextBox, text_box_id));
            Ok(())
        }
        SceneOp::RemoveTextBox { text_box_id } => {
            if state.text_boxes_mut().remove(text_box_id).is_none() {
                return Err(ActionError::not_found(EntityKind::TextBox, text_box_id));
            }
            for overlay in state.overlays_mut().values_mut() {
                overlay.text_boxes_mut().retain(|id| id != text_box_id);
            }
            delta.record_removed(EntityRef::new(EntityKind::TextBox, text_box_id));
            Ok(())
        }
        SceneOp::AddRectangle { view_id, rectangle } => {
            let overlay = state.overlay_mut(view_id);
            if overlay.rectangle(&rectangle.id).is_some() {
                return Err(ActionError::duplicate(
                    EntityKind::Rectangle,
                    &rectangle.id,
                ));
            }

            overlay.rectangles_mut().push(rectangle.clone());
            delta.record_added(EntityRef::new(EntityKind::Rectangle, &rectangle.id));
            Ok(())
        }
        SceneOp::UpdateRectangle {
            view_id,
            rectangle_id,
            patch,
        } => {
            let existing = state
                .overlays_mut()
                .get_mut(view_id)
                .and_then(|overlay| {
                    overlay
                        .rectangles_mut()
                        .iter_mut()
                        .find(|r| &r.id == rectangle_id)
                });
            let Some(existing) = existing else {
                return Err(ActionError::not_found(EntityKind::Rectangle, rectangle_id));
            };

            if let Some(from) = patch.from {
                existing.from = from;
            }
            if let Some(to) = patch.to {
                existing.to = to;
            }
            set_optional(&mut existing.color, &patch.color);
            set_optional(&mut existing.custom_color, &patch.custom_color);
            delta.record_updated(EntityRef::new(EntityKind::Rectangle, rectangle_id));
            Ok(())
        }
        SceneOp::RemoveRectangle {
            view_id,
            rectangle_id,
        } => {
            let Some(overlay) = state.overlays_mut().get_mut(view_id) else {
                return Err(ActionError::not_found(EntityKind::Rectangle, rectangle_id));
            };
            let before = overlay.rectangles().len();
            overlay.rectangles_mut().retain(|r| &r.id != rectangle_id);
            if overlay.rectangles().len() == before {
                return Err(ActionError::not_found(EntityKind::Rectangle, rectangle_id));
            }
            delta.record_removed(EntityRef::new(EntityKind::Rectangle, rectangle_id));
            Ok(())
        }
        SceneOp::RemoveViewOverlay { view_id } => {
            let Some(overlay) = state.overlays_mut().remove(view_id) else {
                return Ok(());
            };
            for connector_id in overlay.connectors() {
                state.connectors_mut().remove(connector_id);
                delta.record_removed(EntityRef::new(EntityKind::Connector, connector_id));
            }
            for text_box_id in overlay.text_boxes() {
                state.text_boxes_mut().remove(text_box_id);
                delta.record_removed(EntityRef::new(EntityKind::TextBox, text_box_id));
            }
            for rectangle in overlay.rectangles() {
                delta.record_removed(EntityRef::new(EntityKind::Rectangle, &rectangle.id));
            }
            Ok(())
        }
    }
}

fn set_optional<T: Clone>(slot: &mut Option<T>, update: &Option<Option<T>>) {
    if let Some(value) = update {
        *slot = value.clone();
    }
}

fn view_item_ref(view_id: &ViewId, item_id: &ItemId) -> EntityRef {
    EntityRef::new(EntityKind::ViewItem, view_item_key(view_id, item_id))
}

fn require_icon(state: &ModelState, icon_id: &IconId) -> Result<(), ActionError> {
    if state.icon(icon_id).is_none() {
        return Err(ActionError::not_found(EntityKind::Icon, icon_id));
    }
    Ok(())
}

/// Shape checks that need nothing but the connector itself.
fn check_connector_anchors(connector: &Connector) -> Result<(), ActionError> {
    if connector.anchors.len() < 2 {
        return Err(ActionError::TooFewAnchors {
            connector_id: connector.id.clone(),
            found: connector.anchors.len(),
        });
    }
    let mut seen = BTreeSet::new();
    for anchor in &connector.anchors {
        if !seen.insert(&anchor.id) {
            return Err(ActionError::duplicate(EntityKind::Anchor, &anchor.id));
        }
        if anchor.target.target().is_none() {
            return Err(ActionError::InvalidAnchor {
                connector_id: connector.id.clone(),
                anchor_id: anchor.id.clone(),
            });
        }
    }
    Ok(())
}

/// Every anchor-to-anchor reference in the view must name an anchor of a connector shown in
/// the same view.
fn check_view_anchor_refs(state: &SceneState, view_id: &ViewId) -> Result<(), ActionError> {
    let view_connectors = state.view_connectors(view_id).collect::<Vec<_>>();
    for connector in &view_connectors {
        for anchor in &connector.anchors {
            if let Some(AnchorTarget::Anchor(target)) = anchor.target.target() {
                let resolved = view_connectors.iter().any(|c| c.anchor(target).is_some());
                if !resolved {
                    return Err(ActionError::not_found(EntityKind::Anchor, target));
                }
            }
        }
    }
    Ok(())
}

/// Removes a connector and then, repeatedly, any connector in the same view left with an
/// anchor pointing at an anchor that no longer exists.
fn remove_connector(state: &mut SceneState, connector_id: &ConnectorId, delta: &mut DeltaBuilder) {
    let view_id = state.view_of_connector(connector_id).cloned();
    state.connectors_mut().remove(connector_id);
    for overlay in state.overlays_mut().values_mut() {
        overlay.connectors_mut().retain(|id| id != connector_id);
    }
    delta.record_removed(EntityRef::new(EntityKind::Connector, connector_id));

    let Some(view_id) = view_id else {
        return;
    };
    while let Some(dangling) = first_dangling_connector(state, &view_id) {
        state.connectors_mut().remove(&dangling);
        state
            .overlay_mut(&view_id)
            .connectors_mut()
            .retain(|id| id != &dangling);
        delta.record_removed(EntityRef::new(EntityKind::Connector, &dangling));
    }
}

fn first_dangling_connector(state: &SceneState, view_id: &ViewId) -> Option<ConnectorId> {
    let view_connectors = state.view_connectors(view_id).collect::<Vec<_>>();
    view_connectors
        .iter()
        .find(|connector| {
            connector.anchors.iter().any(|anchor| match anchor.target.target() {
                Some(AnchorTarget::Anchor(target)) => {
                    !view_connectors.iter().any(|c| c.anchor(target).is_some())
                }
                _ => false,
            })
        })
        .map(|connector| connector.id.clone())
}
