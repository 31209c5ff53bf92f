// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of fossflow-state and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::error::{ActionError, EntityKind};
use crate::history::{History, HistoryState};
use crate::model::{Color, Icon, ItemId, ModelItem, ModelState, Tile, View, ViewId};
use crate::ops::{Delta, ItemPatch, ModelOp, ViewItemPatch, ViewPatch};

use super::Store;

/// Owns items, icons, colors and the structural part of every view.
///
/// The active view is a selection, not diagram content: it lives beside the state, is never
/// snapshotted, and falls back to the first view whenever the selected one disappears (for
/// example after undoing the view's creation).
#[derive(Debug, Clone)]
pub struct ModelStore {
    store: Store<ModelState>,
    active_view: Option<ViewId>,
}

impl Default for ModelStore {
    fn default() -> Self {
        Self::new(ModelState::default(), crate::history::DEFAULT_HISTORY_LIMIT)
    }
}

impl ModelStore {
    pub fn new(state: ModelState, history_limit: usize) -> Self {
        Self {
            store: Store::new(state, history_limit),
            active_view: None,
        }
    }

    pub fn state(&self) -> &ModelState {
        self.store.state()
    }

    pub fn history(&self) -> &History<ModelState> {
        self.store.history()
    }

    pub fn history_state(&self) -> HistoryState {
        self.store.history_state()
    }

    pub fn dispatch(&mut self, ops: &[ModelOp]) -> Result<Delta, ActionError> {
        self.store.dispatch(ops)
    }

    /// The selected view if it still exists, otherwise the first view.
    pub fn active_view(&self) -> Option<&ViewId> {
        let views = self.state().views();
        self.active_view
            .as_ref()
            .and_then(|selected| views.iter().find(|v| v.id() == selected))
            .or_else(|| views.first())
            .map(View::id)
    }

    /// Selects the view new items are placed into. Not an undoable action.
    pub fn set_active_view(&mut self, view_id: &ViewId) -> Result<(), ActionError> {
        if self.state().view(view_id).is_none() {
            return Err(ActionError::not_found(EntityKind::View, view_id));
        }
        self.active_view = Some(view_id.clone());
        Ok(())
    }

    pub(crate) fn require_active_view(&self) -> Result<ViewId, ActionError> {
        self.active_view()
            .cloned()
            .ok_or_else(|| ActionError::not_found(EntityKind::View, "<active>"))
    }

    /// Adds `item` to the model and places it at `tile` in the active view.
    pub fn add_item(&mut self, item: ModelItem, tile: Tile) -> Result<(), ActionError> {
        let view_id = self.require_active_view()?;
        self.add_item_to_view(view_id, item, tile)
    }

    pub fn add_item_to_view(
        &mut self,
        view_id: ViewId,
        item: ModelItem,
        tile: Tile,
    ) -> Result<(), ActionError> {
        self.dispatch(&[ModelOp::AddItem {
            view_id,
            item,
            tile,
        }])
        .map(drop)
    }

    pub fn update_item(&mut self, item_id: ItemId, patch: ItemPatch) -> Result<(), ActionError> {
        self.dispatch(&[ModelOp::UpdateItem { item_id, patch }])
            .map(drop)
    }

    pub fn move_item(
        &mut self,
        view_id: ViewId,
        item_id: ItemId,
        tile: Tile,
    ) -> Result<(), ActionError> {
        self.dispatch(&[ModelOp::MoveItem {
            view_id,
            item_id,
            patch: ViewItemPatch {
                tile: Some(tile),
                ..ViewItemPatch::default()
            },
        }])
        .map(drop)
    }

    /// Removes the item and its placement in every view.
    pub fn remove_item(&mut self, item_id: ItemId) -> Result<(), ActionError> {
        self.dispatch(&[ModelOp::RemoveItem { item_id }]).map(drop)
    }

    pub fn register_icons(&mut self, icons: Vec<Icon>) -> Result<(), ActionError> {
        self.dispatch(&[ModelOp::RegisterIcons { icons }]).map(drop)
    }

    pub fn register_colors(&mut self, colors: Vec<Color>) -> Result<(), ActionError> {
        self.dispatch(&[ModelOp::RegisterColors { colors }])
            .map(drop)
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> Result<(), ActionError> {
        self.dispatch(&[ModelOp::SetTitle {
            title: title.into(),
        }])
        .map(drop)
    }

    pub fn add_view(&mut self, view: View) -> Result<(), ActionError> {
        self.dispatch(&[ModelOp::AddView { view }]).map(drop)
    }

    pub fn update_view(&mut self, view_id: ViewId, patch: ViewPatch) -> Result<(), ActionError> {
        self.dispatch(&[ModelOp::UpdateView { view_id, patch }])
            .map(drop)
    }

    pub fn remove_view(&mut self, view_id: ViewId) -> Result<(), ActionError> {
        self.dispatch(&[ModelOp::RemoveView { view_id }]).map(drop)
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

    /// Installs `state` as the new baseline: history is cleared and the view selection reset.
    pub fn replace_all(&mut self, state: ModelState) {
        self.store.replace_all(state);
        self.active_view = None;
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
