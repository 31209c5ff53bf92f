// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of fossflow-state and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Overlay annotations drawn on top of a view: connectors, rectangles and text boxes.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::ids::{AnchorId, ColorId, ConnectorId, ItemId, LabelId, RectangleId, TextBoxId};
use super::view::Tile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConnectorStyle {
    Solid,
    Dotted,
    Dashed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConnectorLineType {
    Single,
    Double,
    DoubleWithCircle,
}

/// Where a connector anchor is attached. Exactly one field must be set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AnchorRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item: Option<ItemId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anchor: Option<AnchorId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tile: Option<Tile>,
}

/// Resolved form of an [`AnchorRef`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorTarget<'a> {
    Item(&'a ItemId),
    Anchor(&'a AnchorId),
    Tile(Tile),
}

impl AnchorRef {
    pub fn item(item: ItemId) -> Self {
        Self {
            item: Some(item),
            ..Self::default()
        }
    }

    pub fn anchor(anchor: AnchorId) -> Self {
        Self {
            anchor: Some(anchor),
            ..Self::default()
        }
    }

    pub fn tile(tile: Tile) -> Self {
        Self {
            tile: Some(tile),
            ..Self::default()
        }
    }

    /// Returns the single target, or `None` when zero or several fields are set.
    pub fn target(&self) -> Option<AnchorTarget<'_>> {
        match (&self.item, &self.anchor, self.tile) {
            (Some(item), None, None) => Some(AnchorTarget::Item(item)),
            (None, Some(anchor), None) => Some(AnchorTarget::Anchor(anchor)),
            (None, None, Some(tile)) => Some(AnchorTarget::Tile(tile)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ConnectorAnchor {
    pub id: AnchorId,
    #[serde(rename = "ref")]
    pub target: AnchorRef,
}

impl ConnectorAnchor {
    pub fn new(id: AnchorId, target: AnchorRef) -> Self {
        Self { id, target }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ConnectorLabel {
    pub id: LabelId,
    pub text: String,
    /// Percentage along the path, `0..=100`.
    pub position: f64,
}

/// An edge drawn between items, other anchors or free tiles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Connector {
    pub id: ConnectorId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_label_height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub center_label_height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_label_height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<ConnectorStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_type: Option<ConnectorLineType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_arrow: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<ConnectorLabel>,
    pub anchors: Vec<ConnectorAnchor>,
}

impl Connector {
    pub fn new(id: ConnectorId, anchors: Vec<ConnectorAnchor>) -> Self {
        Self {
            id,
            description: None,
            start_label: None,
            end_label: None,
            start_label_height: None,
            center_label_height: None,
            end_label_height: None,
            color: None,
            custom_color: None,
            width: None,
            style: None,
            line_type: None,
            show_arrow: None,
            labels: Vec::new(),
            anchors,
        }
    }

    pub fn anchor(&self, anchor_id: &AnchorId) -> Option<&ConnectorAnchor> {
        self.anchors.iter().find(|a| &a.id == anchor_id)
    }

    /// True when any anchor is attached directly to `item_id`.
    pub fn references_item(&self, item_id: &ItemId) -> bool {
        self.anchors
            .iter()
            .any(|a| a.target.item.as_ref() == Some(item_id))
    }
}

/// A freeform region. Rectangles are stored by value inside their view's overlay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Rectangle {
    pub id: RectangleId,
    pub from: Tile,
    pub to: Tile,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_color: Option<String>,
}

impl Rectangle {
    pub fn new(id: RectangleId, from: Tile, to: Tile) -> Self {
        Self {
            id,
            from,
            to,
            color: None,
            custom_color: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum TextBoxOrientation {
    X,
    Y,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TextBox {
    pub id: TextBoxId,
    pub tile: Tile,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orientation: Option<TextBoxOrientation>,
}

impl TextBox {
    pub fn new(id: TextBoxId, tile: Tile, content: impl Into<String>) -> Self {
        Self {
            id,
            tile,
            content: content.into(),
            font_size: None,
            orientation: None,
        }
    }
}

/// The overlay half of a view: which connectors and text boxes it shows (by id, in draw
/// order) and the rectangles embedded in it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewOverlay {
    connectors: Vec<ConnectorId>,
    rectangles: Vec<Rectangle>,
    text_boxes: Vec<TextBoxId>,
}

impl ViewOverlay {
    pub fn connectors(&self) -> &[ConnectorId] {
        &self.connectors
    }

    pub fn connectors_mut(&mut self) -> &mut Vec<ConnectorId> {
        &mut self.connectors
    }

    pub fn rectangles(&self) -> &[Rectangle] {
        &self.rectangles
    }

    pub fn rectangles_mut(&mut self) -> &mut Vec<Rectangle> {
        &mut self.rectangles
    }

    pub fn rectangle(&self, rectangle_id: &RectangleId) -> Option<&Rectangle> {
        self.rectangles.iter().find(|r| &r.id == rectangle_id)
    }

    pub fn text_boxes(&self) -> &[TextBoxId] {
        &self.text_boxes
    }

    pub fn text_boxes_mut(&mut self) -> &mut Vec<TextBoxId> {
        &mut self.text_boxes
    }

    pub fn is_empty(&self) -> bool {
        self.connectors.is_empty() && self.rectangles.is_empty() && self.text_boxes.is_empty()
    }
}
