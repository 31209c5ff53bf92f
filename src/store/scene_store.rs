// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of fossflow-state and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::error::{ActionError, EntityKind};
use crate::history::{History, HistoryState};
use crate::model::{
    Connector, ConnectorId, ItemId, Rectangle, RectangleId, SceneState, TextBox, TextBoxId,
    ViewId,
};
use crate::ops::{ConnectorPatch, Delta, RectanglePatch, SceneOp, TextBoxPatch};

use super::Store;

/// Owns connectors, text boxes and each view's overlay.
///
/// Drawing a connector is two actions, [`SceneStore::create_connector`] followed by
/// [`SceneStore::update_connector`], and therefore two undo steps.
#[derive(Debug, Clone)]
pub struct SceneStore {
    store: Store<SceneState>,
}

impl Default for SceneStore {
    fn default() -> Self {
        Self::new(SceneState::default(), crate::history::DEFAULT_HISTORY_LIMIT)
    }
}

impl SceneStore {
    pub fn new(state: SceneState, history_limit: usize) -> Self {
        Self {
            store: Store::new(state, history_limit),
        }
    }

    pub fn state(&self) -> &SceneState {
        self.store.state()
    }

    pub fn history(&self) -> &History<SceneState> {
        self.store.history()
    }

    pub fn history_state(&self) -> HistoryState {
        self.store.history_state()
    }

    pub fn dispatch(&mut self, ops: &[SceneOp]) -> Result<Delta, ActionError> {
        self.store.dispatch(ops)
    }

    pub fn create_connector(
        &mut self,
        view_id: ViewId,
        connector: Connector,
    ) -> Result<(), ActionError> {
        self.dispatch(&[SceneOp::CreateConnector { view_id, connector }])
            .map(drop)
    }

    pub fn update_connector(
        &mut self,
        connector_id: ConnectorId,
        patch: ConnectorPatch,
    ) -> Result<(), ActionError> {
        self.dispatch(&[SceneOp::UpdateConnector {
            connector_id,
            patch,
        }])
        .map(drop)
    }

    /// Removes the connector plus any connector in its view anchored onto it.
    pub fn remove_connector(&mut self, connector_id: ConnectorId) -> Result<(), ActionError> {
        self.dispatch(&[SceneOp::RemoveConnector { connector_id }])
            .map(drop)
    }

    /// Removes every connector attached to `item_id` as one action and returns how many went.
    ///
    /// When nothing references the item no action is dispatched and no snapshot recorded.
    pub fn remove_connectors_for_item(&mut self, item_id: &ItemId) -> Result<usize, ActionError> {
        let attached = self
            .state()
            .connectors()
            .values()
            .any(|c| c.references_item(item_id));
        if !attached {
            return Ok(0);
        }

        let delta = self.dispatch(&[SceneOp::RemoveConnectorsForItem {
            item_id: item_id.clone(),
        }])?;
        Ok(delta.removed_of(EntityKind::Connector))
    }

    pub fn create_text_box(
        &mut self,
        view_id: ViewId,
        text_box: TextBox,
    ) -> Result<(), ActionError> {
        self.dispatch(&[SceneOp::CreateTextBox { view_id, text_box }])
            .map(drop)
    }

    pub fn update_text_box(
        &mut self,
        text_box_id: TextBoxId,
        patch: TextBoxPatch,
    ) -> Result<(), ActionError> {
        self.dispatch(&[SceneOp::UpdateTextBox { text_box_id, patch }])
            .map(drop)
    }

    pub fn remove_text_box(&mut self, text_box_id: TextBoxId) -> Result<(), ActionError> {
        self.dispatch(&[SceneOp::RemoveTextBox { text_box_id }])
            .map(drop)
    }

    pub fn add_rectangle(
        &mut self,
        view_id: ViewId,
        rectangle: Rectangle,
    ) -> Result<(), ActionError> {
        self.dispatch(&[SceneOp::AddRectangle { view_id, rectangle }])
            .map(drop)
    }

    pub fn update_rectangle(
        &mut self,
        view_id: ViewId,
        rectangle_id: RectangleId,
        patch: RectanglePatch,
    ) -> Result<(), ActionError> {
        self.dispatch(&[SceneOp::UpdateRectangle {
            view_id,
            rectangle_id,
            patch,
        }])
        .map(drop)
    }

    pub fn remove_rectangle(
        &mut self,
        view_id: ViewId,
        rectangle_id: RectangleId,
    ) -> Result<(), ActionError> {
        self.dispatch(&[SceneOp::RemoveRectangle {
            view_id,
            rectangle_id,
        }])
        .map(drop)
    }

    /// Drops the overlay of a removed view. No-op (and no snapshot) if the view has none.
    pub fn remove_view_overlay(&mut self, view_id: &ViewId) -> Result<(), ActionError> {
        if self.state().overlay(view_id).is_none() {
            return Ok(());
        }
        self.dispatch(&[SceneOp::RemoveViewOverlay {
            view_id: view_id.clone(),
        }])
        .map(drop)
    }

    pub fn undo(&mut self) -> bool {
        self.store.undo()
    }

    pub fn redo(&mut self) -> bool {
        self.store.redo()
    }

    pub fn can_undo(&self) -> bool {
        self.store.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.store.can_redo()
    }

    pub fn replace_all(&mut self, state: SceneState) {
        self.store.replace_all(state);
    }

    pub fn begin_gesture(&mut self) -> bool {
        self.store.begin_gesture()
    }

    pub fn end_gesture(&mut self) {
        self.store.end_gesture();
    }

    pub fn cancel_gesture(&mut self) -> bool {
        self.store.cancel_gesture()
    }
}
