// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of fossflow-state and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Referential checks for a parsed [`Document`].
//!
//! All issues are collected rather than stopping at the first, so a caller can show the
//! whole list.

use std::collections::BTreeSet;
use std::fmt::Display;

use crate::error::{EntityKind, ValidationIssue};
use crate::model::{AnchorId, AnchorTarget, ColorId, ItemId};

use super::document::{Document, DocumentView};

pub fn validate_document(document: &Document) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if document.views.is_empty() {
        issues.push(ValidationIssue::NoViews);
    }

    let color_ids = unique_ids(
        EntityKind::Color,
        document.colors.iter().map(|c| &c.id),
        &mut issues,
    );
    let icon_ids = unique_ids(
        EntityKind::Icon,
        document.icons.iter().map(|i| &i.id),
        &mut issues,
    );
    let item_ids = unique_ids(
        EntityKind::Item,
        document.items.iter().map(|i| &i.id),
        &mut issues,
    );
    unique_ids(
        EntityKind::View,
        document.views.iter().map(|v| &v.id),
        &mut issues,
    );
    unique_ids(
        EntityKind::Connector,
        document.views.iter().flat_map(|v| v.connectors.iter().map(|c| &c.id)),
        &mut issues,
    );
    unique_ids(
        EntityKind::TextBox,
        document.views.iter().flat_map(|v| v.text_boxes.iter().map(|t| &t.id)),
        &mut issues,
    );

    for item in &document.items {
        if let Some(icon_id) = &item.icon {
            if !icon_ids.contains(icon_id) {
                issues.push(ValidationIssue::MissingIcon {
                    item_id: item.id.clone(),
                    icon_id: icon_id.clone(),
                });
            }
        }
    }

    for view in &document.views {
        validate_view(view, &item_ids, &color_ids, &mut issues);
    }

    issues
}

fn validate_view(
    view: &DocumentView,
    item_ids: &BTreeSet<&ItemId>,
    color_ids: &BTreeSet<&ColorId>,
    issues: &mut Vec<ValidationIssue>,
) {
    let placed = unique_ids(
        EntityKind::ViewItem,
        view.items.iter().map(|i| &i.id),
        issues,
    );
    for view_item in &view.items {
        if !item_ids.contains(&view_item.id) {
            issues.push(ValidationIssue::ViewItemWithoutModelItem {
                view_id: view.id.clone(),
                item_id: view_item.id.clone(),
            });
        }
    }

    unique_ids(
        EntityKind::Rectangle,
        view.rectangles.iter().map(|r| &r.id),
        issues,
    );
    for rectangle in &view.rectangles {
        if let Some(color_id) = &rectangle.color {
            if !color_ids.contains(color_id) {
                issues.push(ValidationIssue::MissingRectangleColor {
                    view_id: view.id.clone(),
                    rectangle_id: rectangle.id.clone(),
                    color_id: color_id.clone(),
                });
            }
        }
    }

    let anchor_ids = view
        .connectors
        .iter()
        .flat_map(|c| c.anchors.iter().map(|a| &a.id))
        .collect::<BTreeSet<&AnchorId>>();

    for connector in &view.connectors {
        if connector.anchors.len() < 2 {
            issues.push(ValidationIssue::ConnectorTooFewAnchors {
                view_id: view.id.clone(),
                connector_id: connector.id.clone(),
            });
        }
        if let Some(color_id) = &connector.color {
            if !color_ids.contains(color_id) {
                issues.push(ValidationIssue::MissingConnectorColor {
                    view_id: view.id.clone(),
                    connector_id: connector.id.clone(),
                    color_id: color_id.clone(),
                });
            }
        }
        unique_ids(
            EntityKind::Anchor,
            connector.anchors.iter().map(|a| &a.id),
            issues,
        );

        for anchor in &connector.anchors {
            match anchor.target.target() {
                None => issues.push(ValidationIssue::InvalidAnchorRef {
                    view_id: view.id.clone(),
                    connector_id: connector.id.clone(),
                    anchor_id: anchor.id.clone(),
                }),
                Some(AnchorTarget::Item(item_id)) if !placed.contains(item_id) => {
                    issues.push(ValidationIssue::AnchorToMissingViewItem {
                        view_id: view.id.clone(),
                        connector_id: connector.id.clone(),
                        anchor_id: anchor.id.clone(),
                        item_id: item_id.clone(),
                    });
                }
                Some(AnchorTarget::Anchor(target)) if !anchor_ids.contains(target) => {
                    issues.push(ValidationIssue::AnchorToMissingAnchor {
                        view_id: view.id.clone(),
                        connector_id: connector.id.clone(),
                        anchor_id: anchor.id.clone(),
                        target: target.clone(),
                    });
                }
                Some(_) => {}
            }
        }
    }
}

/// Collects ids into a set, reporting each repeat once per extra occurrence.
fn unique_ids<'a, T>(
    kind: EntityKind,
    ids: impl IntoIterator<Item = &'a T>,
    issues: &mut Vec<ValidationIssue>,
) -> BTreeSet<&'a T>
where
    T: Ord + Display + 'a,
{
    let mut seen = BTreeSet::new();
    for id in ids {
        if !seen.insert(id) {
            issues.push(ValidationIssue::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
    seen
}
