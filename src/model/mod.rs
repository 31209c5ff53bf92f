// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of fossflow-state and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Entity types and the two store states.
//!
//! The model state holds items, icons, colors and the structural part of each view; the
//! scene state holds connectors, text boxes and each view's overlay (including its
//! rectangles).

#[cfg(test)]
pub(crate) mod fixtures;
pub mod ids;
pub mod item;
pub mod overlay;
pub mod state;
pub mod view;

pub use ids::{
    AnchorId, ColorId, ConnectorId, IconId, Id, IdError, ItemId, LabelId, RectangleId, TextBoxId,
    ViewId,
};
pub use item::{Color, Icon, ModelItem};
pub use overlay::{
    AnchorRef, AnchorTarget, Connector, ConnectorAnchor, ConnectorLabel, ConnectorLineType,
    ConnectorStyle, Rectangle, TextBox, TextBoxOrientation, ViewOverlay,
};
pub use state::{ModelState, SceneState, DEFAULT_TITLE, DEFAULT_VIEW_ID, DEFAULT_VIEW_NAME};
pub use view::{view_item_key, Tile, View, ViewItem};
