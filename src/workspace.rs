// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of fossflow-state and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The editor-facing entry point.
//!
//! A [`Workspace`] owns the model store and the scene store and routes each entity action to
//! the store that owns the entity. Checks that span both stores (a connector's item anchors
//! must be placed in its view, colors must be registered) happen here, before the owning
//! store is touched. Undo and redo stay per store.

use log::info;
use serde::Serialize;

use crate::config::EngineConfig;
use crate::error::{ActionError, EntityKind, ValidationError};
use crate::format::{decode, encode, Document};
use crate::model::{
    view_item_key, AnchorTarget, Color, ColorId, Connector, ConnectorAnchor, ConnectorId, Icon,
    ItemId, ModelItem, ModelState, Rectangle, RectangleId, SceneState, TextBox, TextBoxId, Tile,
    View, ViewId,
};
use crate::ops::{ConnectorPatch, ItemPatch, RectanglePatch, TextBoxPatch, ViewPatch};
use crate::store::{ModelStore, SceneStore};

#[derive(Debug, Clone)]
pub struct Workspace {
    config: EngineConfig,
    model: ModelStore,
    scene: SceneStore,
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

/// Undo/redo depth of one store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HistoryDepth {
    pub past: usize,
    pub future: usize,
}

/// Counts describing the current diagram. `view*` counts refer to the active view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StateSummary {
    pub title: String,
    pub active_view: Option<ViewId>,
    pub model_items: usize,
    pub icons: usize,
    pub colors: usize,
    pub views: usize,
    pub view_items: usize,
    pub view_connectors: usize,
    pub view_rectangles: usize,
    pub view_text_boxes: usize,
    pub scene_connectors: usize,
    pub scene_text_boxes: usize,
    pub model_history: HistoryDepth,
    pub scene_history: HistoryDepth,
}

impl Workspace {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            model: ModelStore::new(ModelState::default(), config.history_limit),
            scene: SceneStore::new(SceneState::default(), config.history_limit),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn model(&self) -> &ModelStore {
        &self.model
    }

    pub fn scene(&self) -> &SceneStore {
        &self.scene
    }

    /// Direct store access, e.g. for gesture brackets. Bypasses the cross-store checks.
    pub fn model_mut(&mut self) -> &mut ModelStore {
        &mut self.model
    }

    pub fn scene_mut(&mut self) -> &mut SceneStore {
        &mut self.scene
    }

    pub fn active_view(&self) -> Option<&ViewId> {
        self.model.active_view()
    }

    pub fn set_active_view(&mut self, view_id: &ViewId) -> Result<(), ActionError> {
        self.model.set_active_view(view_id)
    }

    // Model store actions.

    pub fn add_item(&mut self, item: ModelItem, tile: Tile) -> Result<(), ActionError> {
        self.model.add_item(item, tile)
    }

    pub fn add_item_to_view(
        &mut self,
        view_id: ViewId,
        item: ModelItem,
        tile: Tile,
    ) -> Result<(), ActionError> {
        self.model.add_item_to_view(view_id, item, tile)
    }

    pub fn update_item(&mut self, item_id: ItemId, patch: ItemPatch) -> Result<(), ActionError> {
        self.model.update_item(item_id, patch)
    }

    pub fn move_item(
        &mut self,
        view_id: ViewId,
        item_id: ItemId,
        tile: Tile,
    ) -> Result<(), ActionError> {
        self.model.move_item(view_id, item_id, tile)
    }

    /// Removes an item from the model, then every connector attached to it from the scene.
    ///
    /// Each store that changed records one snapshot. Returns the number of connectors removed.
    pub fn remove_item(&mut self, item_id: ItemId) -> Result<usize, ActionError> {
        self.model.remove_item(item_id.clone())?;
        self.scene.remove_connectors_for_item(&item_id)
    }

    pub fn register_icons(&mut self, icons: Vec<Icon>) -> Result<(), ActionError> {
        self.model.register_icons(icons)
    }

    pub fn register_colors(&mut self, colors: Vec<Color>) -> Result<(), ActionError> {
        self.model.register_colors(colors)
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> Result<(), ActionError> {
        self.model.set_title(title)
    }

    pub fn add_view(&mut self, view: View) -> Result<(), ActionError> {
        self.model.add_view(view)
    }

    pub fn update_view(&mut self, view_id: ViewId, patch: ViewPatch) -> Result<(), ActionError> {
        self.model.update_view(view_id, patch)
    }

    /// Removes a view from the model and its overlay from the scene.
    pub fn remove_view(&mut self, view_id: ViewId) -> Result<(), ActionError> {
        self.model.remove_view(view_id.clone())?;
        self.scene.remove_view_overlay(&view_id)
    }

    // Scene store actions.

    /// First half of drawing a connector in the active view.
    pub fn create_connector(&mut self, connector: Connector) -> Result<(), ActionError> {
        let view_id = self.model.require_active_view()?;
        self.create_connector_in(view_id, connector)
    }

    pub fn create_connector_in(
        &mut self,
        view_id: ViewId,
        connector: Connector,
    ) -> Result<(), ActionError> {
        let view = self.require_view(&view_id)?;
        check_item_anchors(view, &connector.anchors)?;
        self.require_color(connector.color.as_ref())?;
        self.scene.create_connector(view_id, connector)
    }

    /// Second half of drawing a connector, and any later edit of it.
    pub fn update_connector(
        &mut self,
        connector_id: ConnectorId,
        patch: ConnectorPatch,
    ) -> Result<(), ActionError> {
        if let Some(Some(color_id)) = &patch.color {
            self.require_color(Some(color_id))?;
        }
        if let Some(anchors) = &patch.anchors {
            let view_id = self
                .scene
                .state()
                .view_of_connector(&connector_id)
                .ok_or_else(|| ActionError::not_found(EntityKind::Connector, &connector_id))?;
            check_item_anchors(self.require_view(view_id)?, anchors)?;
        }
        self.scene.update_connector(connector_id, patch)
    }

    pub fn remove_connector(&mut self, connector_id: ConnectorId) -> Result<(), ActionError> {
        self.scene.remove_connector(connector_id)
    }

    pub fn create_text_box(&mut self, text_box: TextBox) -> Result<(), ActionError> {
        let view_id = self.model.require_active_view()?;
        self.create_text_box_in(view_id, text_box)
    }

    pub fn create_text_box_in(
        &mut self,
        view_id: ViewId,
        text_box: TextBox,
    ) -> Result<(), ActionError> {
        self.require_view(&view_id)?;
        self.scene.create_text_box(view_id, text_box)
    }

    pub fn update_text_box(
        &mut self,
        text_box_id: TextBoxId,
        patch: TextBoxPatch,
    ) -> Result<(), ActionError> {
        self.scene.update_text_box(text_box_id, patch)
    }

    pub fn remove_text_box(&mut self, text_box_id: TextBoxId) -> Result<(), ActionError> {
        self.scene.remove_text_box(text_box_id)
    }

    pub fn add_rectangle(&mut self, rectangle: Rectangle) -> Result<(), ActionError> {
        let view_id = self.model.require_active_view()?;
        self.add_rectangle_in(view_id, rectangle)
    }

    pub fn add_rectangle_in(
        &mut self,
        view_id: ViewId,
        rectangle: Rectangle,
    ) -> Result<(), ActionError> {
        self.require_view(&view_id)?;
        self.require_color(rectangle.color.as_ref())?;
        self.scene.add_rectangle(view_id, rectangle)
    }

    pub fn update_rectangle(
        &mut self,
        view_id: ViewId,
        rectangle_id: RectangleId,
        patch: RectanglePatch,
    ) -> Result<(), ActionError> {
        if let Some(Some(color_id)) = &patch.color {
            self.require_color(Some(color_id))?;
        }
        self.scene.update_rectangle(view_id, rectangle_id, patch)
    }

    pub fn remove_rectangle(
        &mut self,
        view_id: ViewId,
        rectangle_id: RectangleId,
    ) -> Result<(), ActionError> {
        self.scene.remove_rectangle(view_id, rectangle_id)
    }

    // History.

    pub fn undo_model(&mut self) -> bool {
        self.model.undo()
    }

    pub fn redo_model(&mut self) -> bool {
        self.model.redo()
    }

    pub fn undo_scene(&mut self) -> bool {
        self.scene.undo()
    }

    pub fn redo_scene(&mut self) -> bool {
        self.scene.redo()
    }

    pub fn can_undo_model(&self) -> bool {
        self.model.can_undo()
    }

    pub fn can_redo_model(&self) -> bool {
        self.model.can_redo()
    }

    pub fn can_undo_scene(&self) -> bool {
        self.scene.can_undo()
    }

    pub fn can_redo_scene(&self) -> bool {
        self.scene.can_redo()
    }

    // Import/export.

    /// Replaces both stores with the document's content and clears both histories.
    ///
    /// The document is fully validated first; on error neither store is touched.
    pub fn import_document(&mut self, document: Document) -> Result<(), ValidationError> {
        let counts = document.counts();
        let (model, scene) = decode(document)?;
        self.model.replace_all(model);
        self.scene.replace_all(scene);
        info!(
            items = counts.items,
            views = counts.views,
            connectors = counts.connectors,
            rectangles = counts.rectangles,
            text_boxes = counts.text_boxes;
            "document imported"
        );
        Ok(())
    }

    pub fn import_json(&mut self, text: &str) -> Result<(), ValidationError> {
        let document = Document::from_json(text)?;
        self.import_document(document)
    }

    /// Joins both stores into a document. Pure read; no history is recorded.
    pub fn export_document(&self) -> Document {
        encode(self.model.state(), self.scene.state())
    }

    pub fn export_json(&self) -> serde_json::Result<String> {
        self.export_document().to_json_pretty()
    }

    pub fn state(&self) -> StateSummary {
        let model = self.model.state();
        let scene = self.scene.state();
        let active_view = self.active_view().cloned();

        let mut summary = StateSummary {
            title: model.title().to_owned(),
            active_view: None,
            model_items: model.items().len(),
            icons: model.icons().len(),
            colors: model.colors().len(),
            views: model.views().len(),
            view_items: 0,
            view_connectors: 0,
            view_rectangles: 0,
            view_text_boxes: 0,
            scene_connectors: scene.connectors().len(),
            scene_text_boxes: scene.text_boxes().len(),
            model_history: HistoryDepth {
                past: self.model.history().past_len(),
                future: self.model.history().future_len(),
            },
            scene_history: HistoryDepth {
                past: self.scene.history().past_len(),
                future: self.scene.history().future_len(),
            },
        };

        if let Some(view_id) = &active_view {
            summary.view_items = model.view(view_id).map_or(0, |v| v.items().len());
            summary.view_connectors = scene.view_connectors(view_id).count();
            summary.view_text_boxes = scene.view_text_boxes(view_id).count();
            summary.view_rectangles = scene
                .overlay(view_id)
                .map_or(0, |overlay| overlay.rectangles().len());
        }
        summary.active_view = active_view;
        summary
    }

    fn require_view(&self, view_id: &ViewId) -> Result<&View, ActionError> {
        self.model
            .state()
            .view(view_id)
            .ok_or_else(|| ActionError::not_found(EntityKind::View, view_id))
    }

    fn require_color(&self, color_id: Option<&ColorId>) -> Result<(), ActionError> {
        match color_id {
            Some(color_id) if self.model.state().color(color_id).is_none() => {
                Err(ActionError::not_found(EntityKind::Color, color_id))
            }
            _ => Ok(()),
        }
    }
}

/// Item anchors may only attach to items placed in the connector's view.
fn check_item_anchors(view: &View, anchors: &[ConnectorAnchor]) -> Result<(), ActionError> {
    for anchor in anchors {
        if let Some(AnchorTarget::Item(item_id)) = anchor.target.target() {
            if !view.contains_item(item_id) {
                return Err(ActionError::not_found(
                    EntityKind::ViewItem,
                    view_item_key(view.id(), item_id),
                ));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::Workspace;
    use crate::config::EngineConfig;
    use crate::error::{ActionError, EntityKind};
    use crate::format::encode;
    use crate::model::fixtures::{
        color_id, connector_id, default_view_id, item_connector, item_id, rectangle_id,
        sample_model, sample_scene, view_id,
    };
    use crate::model::{ModelItem, Rectangle, Tile, View, ViewItem};
    use crate::ops::ConnectorPatch;

    #[fixture]
    fn workspace() -> Workspace {
        let mut workspace = Workspace::default();
        workspace
            .import_document(encode(&sample_model(), &sample_scene()))
            .expect("import sample");
        workspace
    }

    #[rstest]
    fn import_sets_baseline(workspace: Workspace) {
        let state = workspace.state();
        assert_eq!(state.model_items, 2);
        assert_eq!(state.view_items, 2);
        assert_eq!(state.view_connectors, 1);
        assert_eq!(state.view_rectangles, 1);
        assert_eq!(state.view_text_boxes, 1);
        assert_eq!(state.active_view, Some(default_view_id()));
        assert!(!workspace.can_undo_model());
        assert!(!workspace.can_undo_scene());
    }

    #[rstest]
    fn failed_import_leaves_stores_untouched(mut workspace: Workspace) {
        workspace.set_title("edited").expect("set title");
        let before = workspace.export_document();

        let mut broken = encode(&sample_model(), &sample_scene());
        broken.views.clear();
        assert!(workspace.import_document(broken).is_err());
        assert!(workspace.import_json("{ not json").is_err());

        assert_eq!(workspace.export_document(), before);
        assert!(workspace.can_undo_model());
    }

    #[rstest]
    fn connector_anchors_must_be_placed_in_view(mut workspace: Workspace) {
        workspace
            .add_view(View::new(view_id("v2"), "Second"))
            .expect("add view");

        let err = workspace
            .create_connector_in(view_id("v2"), item_connector("c2", "a", "b"))
            .unwrap_err();
        assert_eq!(err, ActionError::not_found(EntityKind::ViewItem, r#""v2"/"a""#));
        assert!(!workspace.can_undo_scene());
    }

    #[rstest]
    fn connector_color_must_be_registered(mut workspace: Workspace) {
        let mut connector = item_connector("c2", "b", "a");
        connector.color = Some(color_id("plaid"));
        let err = workspace.create_connector(connector).unwrap_err();
        assert_eq!(err, ActionError::not_found(EntityKind::Color, "plaid"));

        let err = workspace
            .update_connector(
                connector_id("c1"),
                ConnectorPatch {
                    color: Some(Some(color_id("plaid"))),
                    ..ConnectorPatch::default()
                },
            )
            .unwrap_err();
        assert_eq!(err, ActionError::not_found(EntityKind::Color, "plaid"));
    }

    #[rstest]
    fn remove_item_cascades_into_scene(mut workspace: Workspace) {
        let removed = workspace.remove_item(item_id("a")).expect("remove");
        assert_eq!(removed, 1);

        let state = workspace.state();
        assert_eq!(state.model_items, 1);
        assert_eq!(state.scene_connectors, 0);
        assert_eq!(state.model_history.past, 1);
        assert_eq!(state.scene_history.past, 1);

        assert!(workspace.undo_scene());
        assert!(workspace.undo_model());
        assert_eq!(workspace.state().scene_connectors, 1);
        assert_eq!(workspace.state().model_items, 2);
    }

    #[rstest]
    fn remove_item_without_connectors_touches_only_model(mut workspace: Workspace) {
        workspace
            .add_item(ModelItem::new(item_id("c"), "C"), Tile::new(8, 8))
            .expect("add");
        assert_eq!(workspace.remove_item(item_id("c")), Ok(0));
        assert!(!workspace.can_undo_scene());
    }

    #[rstest]
    fn remove_view_drops_its_overlay(mut workspace: Workspace) {
        let mut second = View::new(view_id("v2"), "Second");
        second
            .items_mut()
            .push(ViewItem::new(item_id("a"), Tile::default()));
        workspace.add_view(second).expect("add view");
        workspace
            .add_rectangle_in(
                view_id("v2"),
                Rectangle::new(rectangle_id("r2"), Tile::default(), Tile::new(2, 2)),
            )
            .expect("add rectangle");

        workspace.remove_view(view_id("v2")).expect("remove view");
        assert!(workspace.scene().state().overlay(&view_id("v2")).is_none());
        assert_eq!(workspace.export_document().views.len(), 1);
    }

    #[rstest]
    fn model_undo_is_independent_of_scene(mut workspace: Workspace) {
        workspace.set_title("Renamed").expect("set title");
        workspace
            .update_connector(
                connector_id("c1"),
                ConnectorPatch {
                    width: Some(Some(12.0)),
                    ..ConnectorPatch::default()
                },
            )
            .expect("update connector");

        assert!(workspace.undo_model());
        assert_eq!(workspace.state().title, "Sample");
        let connector = &workspace.scene().state().connectors()[&connector_id("c1")];
        assert_eq!(connector.width, Some(12.0));
    }

    #[test]
    fn history_limit_comes_from_config() {
        let workspace = Workspace::new(EngineConfig::default().with_history_limit(7));
        assert_eq!(workspace.model().history().limit(), 7);
        assert_eq!(workspace.scene().history().limit(), 7);
    }
}
