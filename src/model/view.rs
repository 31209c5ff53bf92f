// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of fossflow-state and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::ids::{ItemId, ViewId};

/// A position on the isometric grid.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
pub struct Tile {
    pub x: i32,
    pub y: i32,
}

impl Tile {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Placement of a model item inside one view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ViewItem {
    pub id: ItemId,
    pub tile: Tile,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_height: Option<f64>,
}

impl ViewItem {
    pub fn new(id: ItemId, tile: Tile) -> Self {
        Self {
            id,
            tile,
            label_height: None,
        }
    }
}

/// The structural half of a diagram page: its metadata and the ordered item placements.
///
/// The overlay half (connectors, rectangles, text boxes) is kept by the scene store under
/// the same view id; see [`crate::model::ViewOverlay`].
/// Key naming an item's placement in a view, e.g. `"view-1"/"a"`.
///
/// Both parts are quoted so ids containing `/` cannot collide.
pub fn view_item_key(view_id: &ViewId, item_id: &ItemId) -> String {
    format!("{:?}/{:?}", view_id.as_str(), item_id.as_str())
}

#[derive(Debug, Clone, PartialEq)]
pub struct View {
    id: ViewId,
    name: String,
    description: Option<String>,
    last_updated: Option<String>,
    items: Vec<ViewItem>,
}

impl View {
    pub fn new(id: ViewId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: None,
            last_updated: None,
            items: Vec::new(),
        }
    }

    pub fn id(&self) -> &ViewId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn set_description<T: Into<String>>(&mut self, description: Option<T>) {
        self.description = description.map(Into::into);
    }

    pub fn last_updated(&self) -> Option<&str> {
        self.last_updated.as_deref()
    }

    pub fn set_last_updated<T: Into<String>>(&mut self, last_updated: Option<T>) {
        self.last_updated = last_updated.map(Into::into);
    }

    pub fn items(&self) -> &[ViewItem] {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut Vec<ViewItem> {
        &mut self.items
    }

    pub fn item(&self, item_id: &ItemId) -> Option<&ViewItem> {
        self.items.iter().find(|item| &item.id == item_id)
    }

    pub fn contains_item(&self, item_id: &ItemId) -> bool {
        self.item(item_id).is_some()
    }
}
