// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of fossflow-state and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Mutation operations for the model and scene states.
//!
//! Ops are applied to a scratch copy of the state; the caller only commits the copy when
//! every op in the batch succeeded, so a failing batch never leaves partial edits behind.
//! Each successful batch produces a coarse [`Delta`] of the entities it touched.

use std::collections::BTreeSet;
use std::fmt;

use crate::error::{ActionError, EntityKind};
use crate::model::{
    view_item_key, AnchorTarget, Color, ColorId, Connector, ConnectorAnchor, ConnectorId,
    ConnectorLabel, ConnectorLineType, ConnectorStyle, Icon, IconId, ItemId, ModelItem,
    ModelState, Rectangle, RectangleId, SceneState, TextBox, TextBoxId, TextBoxOrientation, Tile,
    View, ViewId, ViewItem,
};

#[derive(Debug, Clone, PartialEq)]
pub enum ModelOp {
    SetTitle {
        title: String,
    },
    RegisterIcons {
        icons: Vec<Icon>,
    },
    RegisterColors {
        colors: Vec<Color>,
    },
    AddItem {
        view_id: ViewId,
        item: ModelItem,
        tile: Tile,
    },
    UpdateItem {
        item_id: ItemId,
        patch: ItemPatch,
    },
    MoveItem {
        view_id: ViewId,
        item_id: ItemId,
        patch: ViewItemPatch,
    },
    RemoveItem {
        item_id: ItemId,
    },
    AddView {
        view: View,
    },
    UpdateView {
        view_id: ViewId,
        patch: ViewPatch,
    },
    RemoveView {
        view_id: ViewId,
    },
}

/// Field updates for a model item. `Some(None)` clears an optional field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub icon: Option<Option<IconId>>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewItemPatch {
    pub tile: Option<Tile>,
    pub label_height: Option<Option<f64>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewPatch {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub last_updated: Option<Option<String>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SceneOp {
    CreateConnector {
        view_id: ViewId,
        connector: Connector,
    },
    UpdateConnector {
        connector_id: ConnectorId,
        patch: ConnectorPatch,
    },
    RemoveConnector {
        connector_id: ConnectorId,
    },
    /// Removes every connector with an anchor attached directly to `item_id`.
    RemoveConnectorsForItem {
        item_id: ItemId,
    },
    CreateTextBox {
        view_id: ViewId,
        text_box: TextBox,
    },
    UpdateTextBox {
        text_box_id: TextBoxId,
        patch: TextBoxPatch,
    },
    RemoveTextBox {
        text_box_id: TextBoxId,
    },
    AddRectangle {
        view_id: ViewId,
        rectangle: Rectangle,
    },
    UpdateRectangle {
        view_id: ViewId,
        rectangle_id: RectangleId,
        patch: RectanglePatch,
    },
    RemoveRectangle {
        view_id: ViewId,
        rectangle_id: RectangleId,
    },
    /// Drops a view's overlay together with the connectors and text boxes it lists.
    RemoveViewOverlay {
        view_id: ViewId,
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConnectorPatch {
    pub description: Option<Option<String>>,
    pub start_label: Option<Option<String>>,
    pub end_label: Option<Option<String>>,
    pub start_label_height: Option<Option<f64>>,
    pub center_label_height: Option<Option<f64>>,
    pub end_label_height: Option<Option<f64>>,
    pub color: Option<Option<ColorId>>,
    pub custom_color: Option<Option<String>>,
    pub width: Option<Option<f64>>,
    pub style: Option<Option<ConnectorStyle>>,
    pub line_type: Option<Option<ConnectorLineType>>,
    pub show_arrow: Option<Option<bool>>,
    pub labels: Option<Vec<ConnectorLabel>>,
    pub anchors: Option<Vec<ConnectorAnchor>>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextBoxPatch {
    pub tile: Option<Tile>,
    pub content: Option<String>,
    pub font_size: Option<Option<f64>>,
    pub orientation: Option<Option<TextBoxOrientation>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RectanglePatch {
    pub from: Option<Tile>,
    pub to: Option<Tile>,
    pub color: Option<Option<ColorId>>,
    pub custom_color: Option<Option<String>>,
}

/// A state type that a store can snapshot and mutate through ops.
pub trait OpTarget: Clone {
    type Op: fmt::Debug;

    /// Short store name used in log records.
    const NAME: &'static str;

    fn apply_ops(&mut self, ops: &[Self::Op]) -> Result<Delta, ActionError>;
}

impl OpTarget for ModelState {
    type Op = ModelOp;
    const NAME: &'static str = "model";

    fn apply_ops(&mut self, ops: &[ModelOp]) -> Result<Delta, ActionError> {
        apply_model_ops(self, ops)
    }
}

impl OpTarget for SceneState {
    type Op = SceneOp;
    const NAME: &'static str = "scene";

    fn apply_ops(&mut self, ops: &[SceneOp]) -> Result<Delta, ActionError> {
        apply_scene_ops(self, ops)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityRef {
    pub kind: EntityKind,
    pub id: String,
}

impl EntityRef {
    pub fn new(kind: EntityKind, id: impl fmt::Display) -> Self {
        Self {
            kind,
            id: id.to_string(),
        }
    }
}

impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.id)
    }
}

/// Entities added, removed or updated by one batch of ops.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Delta {
    pub added: Vec<EntityRef>,
    pub removed: Vec<EntityRef>,
    pub updated: Vec<EntityRef>,
}

impl Delta {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.updated.is_empty()
    }

    pub fn removed_of(&self, kind: EntityKind) -> usize {
        self.removed.iter().filter(|r| r.kind == kind).count()
    }
}

#[derive(Debug, Default)]
struct DeltaBuilder {
    added: BTreeSet<EntityRef>,
    removed: BTreeSet<EntityRef>,
    updated: BTreeSet<EntityRef>,
}

impl DeltaBuilder {
    fn record_added(&mut self, entity: EntityRef) {
        self.removed.remove(&entity);
        self.updated.remove(&entity);
        self.added.insert(entity);
    }

    fn record_removed(&mut self, entity: EntityRef) {
        // Added then removed inside one batch nets out to nothing.
        if self.added.remove(&entity) {
            return;
        }
        self.updated.remove(&entity);
        self.removed.insert(entity);
    }

    fn record_updated(&mut self, entity: EntityRef) {
        if self.added.contains(&entity) || self.removed.contains(&entity) {
            return;
        }
        self.updated.insert(entity);
    }

    fn finish(self) -> Delta {
        Delta {
            added: self.added.into_iter().collect(),
            removed: self.removed.into_iter().collect(),
            updated: self.updated.into_iter().collect(),
        }
    }
}

pub fn apply_model_ops(state: &mut ModelState, ops: &[ModelOp]) -> Result<Delta, ActionError> {
    let mut delta = DeltaBuilder::default();
    for op in ops {
        apply_model_op(state, op, &mut delta)?;
    }
    Ok(delta.finish())
}

pub fn apply_scene_ops(state: &mut SceneState, ops: &[SceneOp]) -> Result<Delta, ActionError> {
    let mut delta = DeltaBuilder::default();
    for op in ops {
        apply_scene_op(state, op, &mut delta)?;
    }
    Ok(delta.finish())
}

// Per-op application for the model and scene states.
include!("ops_impl.rs");
