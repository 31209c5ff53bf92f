// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of fossflow-state and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use super::ids::{ColorId, ConnectorId, IconId, ItemId, TextBoxId, ViewId};
use super::item::{Color, Icon, ModelItem};
use super::overlay::{Connector, TextBox, ViewOverlay};
use super::view::View;

pub const DEFAULT_TITLE: &str = "Untitled Diagram";
pub const DEFAULT_VIEW_ID: &str = "view-1";
pub const DEFAULT_VIEW_NAME: &str = "Untitled view";

/// Everything the model store owns. One value of this type is one history snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelState {
    title: String,
    version: Option<String>,
    description: Option<String>,
    colors: Vec<Color>,
    icons: Vec<Icon>,
    items: Vec<ModelItem>,
    views: Vec<View>,
}

impl Default for ModelState {
    fn default() -> Self {
        let mut state = Self::new(DEFAULT_TITLE);
        if let Ok(view_id) = ViewId::new(DEFAULT_VIEW_ID) {
            state.views.push(View::new(view_id, DEFAULT_VIEW_NAME));
        }
        state
    }
}

impl ModelState {
    /// An empty model without any view.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            version: None,
            description: None,
            colors: Vec::new(),
            icons: Vec::new(),
            items: Vec::new(),
            views: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn set_version<T: Into<String>>(&mut self, version: Option<T>) {
        self.version = version.map(Into::into);
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn set_description<T: Into<String>>(&mut self, description: Option<T>) {
        self.description = description.map(Into::into);
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn colors_mut(&mut self) -> &mut Vec<Color> {
        &mut self.colors
    }

    pub fn color(&self, color_id: &ColorId) -> Option<&Color> {
        self.colors.iter().find(|c| &c.id == color_id)
    }

    pub fn icons(&self) -> &[Icon] {
        &self.icons
    }

    pub fn icons_mut(&mut self) -> &mut Vec<Icon> {
        &mut self.icons
    }

    pub fn icon(&self, icon_id: &IconId) -> Option<&Icon> {
        self.icons.iter().find(|i| &i.id == icon_id)
    }

    pub fn items(&self) -> &[ModelItem] {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut Vec<ModelItem> {
        &mut self.items
    }

    pub fn item(&self, item_id: &ItemId) -> Option<&ModelItem> {
        self.items.iter().find(|i| &i.id == item_id)
    }

    pub fn views(&self) -> &[View] {
        &self.views
    }

    pub fn views_mut(&mut self) -> &mut Vec<View> {
        &mut self.views
    }

    pub fn view(&self, view_id: &ViewId) -> Option<&View> {
        self.views.iter().find(|v| v.id() == view_id)
    }

    pub fn view_mut(&mut self, view_id: &ViewId) -> Option<&mut View> {
        self.views.iter_mut().find(|v| v.id() == view_id)
    }
}

/// Everything the scene store owns. One value of this type is one history snapshot.
///
/// Connectors and text boxes are keyed by id; `overlays` records, per view, which of them
/// the view shows and in which order, plus the view's embedded rectangles.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SceneState {
    connectors: BTreeMap<ConnectorId, Connector>,
    text_boxes: BTreeMap<TextBoxId, TextBox>,
    overlays: BTreeMap<ViewId, ViewOverlay>,
}

impl SceneState {
    pub fn connectors(&self) -> &BTreeMap<ConnectorId, Connector> {
        &self.connectors
    }

    pub fn connectors_mut(&mut self) -> &mut BTreeMap<ConnectorId, Connector> {
        &mut self.connectors
    }

    pub fn text_boxes(&self) -> &BTreeMap<TextBoxId, TextBox> {
        &self.text_boxes
    }

    pub fn text_boxes_mut(&mut self) -> &mut BTreeMap<TextBoxId, TextBox> {
        &mut self.text_boxes
    }

    pub fn overlays(&self) -> &BTreeMap<ViewId, ViewOverlay> {
        &self.overlays
    }

    pub fn overlays_mut(&mut self) -> &mut BTreeMap<ViewId, ViewOverlay> {
        &mut self.overlays
    }

    pub fn overlay(&self, view_id: &ViewId) -> Option<&ViewOverlay> {
        self.overlays.get(view_id)
    }

    /// Returns the overlay for `view_id`, creating an empty one on first use.
    pub fn overlay_mut(&mut self, view_id: &ViewId) -> &mut ViewOverlay {
        self.overlays.entry(view_id.clone()).or_default()
    }

    /// The view whose overlay lists `connector_id`.
    pub fn view_of_connector(&self, connector_id: &ConnectorId) -> Option<&ViewId> {
        self.overlays
            .iter()
            .find(|(_, overlay)| overlay.connectors().contains(connector_id))
            .map(|(view_id, _)| view_id)
    }

    /// Connectors shown in `view_id`, in overlay order.
    pub fn view_connectors<'a>(
        &'a self,
        view_id: &ViewId,
    ) -> impl Iterator<Item = &'a Connector> + 'a {
        self.overlays
            .get(view_id)
            .map(|overlay| overlay.connectors())
            .unwrap_or_default()
            .iter()
            .filter_map(|id| self.connectors.get(id))
    }

    /// Text boxes shown in `view_id`, in overlay order.
    pub fn view_text_boxes<'a>(
        &'a self,
        view_id: &ViewId,
    ) -> impl Iterator<Item = &'a TextBox> + 'a {
        self.overlays
            .get(view_id)
            .map(|overlay| overlay.text_boxes())
            .unwrap_or_default()
            .iter()
            .filter_map(|id| self.text_boxes.get(id))
    }
}
