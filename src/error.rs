// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of fossflow-state and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Error types shared by the stores and the document bridge.
//!
//! Store actions fail with [`ActionError`] and leave the store untouched. Imports fail with
//! [`ValidationError`] before either store is touched. Undo/redo on an empty stack is not
//! an error; those calls return `false`.

use std::fmt;

use thiserror::Error;

use crate::model::{AnchorId, ColorId, ConnectorId, IconId, ItemId, RectangleId, ViewId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EntityKind {
    Item,
    Icon,
    Color,
    View,
    ViewItem,
    Connector,
    Anchor,
    Rectangle,
    TextBox,
}

impl EntityKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Item => "item",
            Self::Icon => "icon",
            Self::Color => "color",
            Self::View => "view",
            Self::ViewItem => "view item",
            Self::Connector => "connector",
            Self::Anchor => "anchor",
            Self::Rectangle => "rectangle",
            Self::TextBox => "text box",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rejection of a single store action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("{kind} already exists (id={id})")]
    DuplicateId { kind: EntityKind, id: String },
    #[error("{kind} not found (id={id})")]
    NotFound { kind: EntityKind, id: String },
    #[error("connector {connector_id} needs at least two anchors (found {found})")]
    TooFewAnchors {
        connector_id: ConnectorId,
        found: usize,
    },
    #[error(
        "anchor {anchor_id} of connector {connector_id} must reference exactly one of item, anchor or tile"
    )]
    InvalidAnchor {
        connector_id: ConnectorId,
        anchor_id: AnchorId,
    },
    #[error("view {view_id} is the only view and cannot be removed")]
    LastView { view_id: ViewId },
}

impl ActionError {
    pub fn duplicate(kind: EntityKind, id: impl fmt::Display) -> Self {
        Self::DuplicateId {
            kind,
            id: id.to_string(),
        }
    }

    pub fn not_found(kind: EntityKind, id: impl fmt::Display) -> Self {
        Self::NotFound {
            kind,
            id: id.to_string(),
        }
    }
}

/// One structural or referential problem found in a diagram document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationIssue {
    #[error("document must contain at least one view")]
    NoViews,
    #[error("duplicate {kind} id '{id}'")]
    DuplicateId { kind: EntityKind, id: String },
    #[error("view '{view_id}' places item '{item_id}' which is not in the model")]
    ViewItemWithoutModelItem { view_id: ViewId, item_id: ItemId },
    #[error("item '{item_id}' uses icon '{icon_id}' which is not defined")]
    MissingIcon { item_id: ItemId, icon_id: IconId },
    #[error("connector '{connector_id}' in view '{view_id}' has fewer than two anchors")]
    ConnectorTooFewAnchors {
        view_id: ViewId,
        connector_id: ConnectorId,
    },
    #[error(
        "anchor '{anchor_id}' of connector '{connector_id}' in view '{view_id}' must reference exactly one of item, anchor or tile"
    )]
    InvalidAnchorRef {
        view_id: ViewId,
        connector_id: ConnectorId,
        anchor_id: AnchorId,
    },
    #[error(
        "anchor '{anchor_id}' of connector '{connector_id}' references item '{item_id}' which is not placed in view '{view_id}'"
    )]
    AnchorToMissingViewItem {
        view_id: ViewId,
        connector_id: ConnectorId,
        anchor_id: AnchorId,
        item_id: ItemId,
    },
    #[error(
        "anchor '{anchor_id}' of connector '{connector_id}' references anchor '{target}' which does not exist in view '{view_id}'"
    )]
    AnchorToMissingAnchor {
        view_id: ViewId,
        connector_id: ConnectorId,
        anchor_id: AnchorId,
        target: AnchorId,
    },
    #[error("connector '{connector_id}' in view '{view_id}' uses undefined color '{color_id}'")]
    MissingConnectorColor {
        view_id: ViewId,
        connector_id: ConnectorId,
        color_id: ColorId,
    },
    #[error("rectangle '{rectangle_id}' in view '{view_id}' uses undefined color '{color_id}'")]
    MissingRectangleColor {
        view_id: ViewId,
        rectangle_id: RectangleId,
        color_id: ColorId,
    },
}

/// Rejection of a whole document import.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The input is not a diagram document at all (bad JSON, missing arrays, bad ids).
    #[error("malformed diagram document: {message}")]
    Malformed { message: String },
    /// The document parsed but its references do not line up.
    #[error("invalid diagram document: {}", summarize_issues(.issues))]
    Inconsistent { issues: Vec<ValidationIssue> },
}

impl ValidationError {
    pub fn issues(&self) -> &[ValidationIssue] {
        match self {
            Self::Malformed { .. } => &[],
            Self::Inconsistent { issues } => issues,
        }
    }
}

impl From<serde_json::Error> for ValidationError {
    fn from(err: serde_json::Error) -> Self {
        Self::Malformed {
            message: err.to_string(),
        }
    }
}

fn summarize_issues(issues: &[ValidationIssue]) -> String {
    match issues {
        [] => "no issues".to_owned(),
        [only] => only.to_string(),
        [first, rest @ ..] => format!("{first} (and {} more)", rest.len()),
    }
}
