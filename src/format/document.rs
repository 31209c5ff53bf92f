// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of fossflow-state and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The Diagram Document: the JSON exchange format joining both stores.
//!
//! A document's view carries its placements and its overlay annotations side by side.
//! [`decode`] splits each view into its model and scene halves; [`encode`] joins them again.

use schemars::{JsonSchema, Schema};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::model::{
    Color, Connector, Icon, ModelItem, ModelState, Rectangle, SceneState, TextBox, View, ViewId,
    ViewItem,
};

use super::validate::validate_document;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub colors: Vec<Color>,
    pub icons: Vec<Icon>,
    pub items: Vec<ModelItem>,
    pub views: Vec<DocumentView>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DocumentView {
    pub id: ViewId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
    pub items: Vec<ViewItem>,
    #[serde(default)]
    pub connectors: Vec<Connector>,
    #[serde(default)]
    pub rectangles: Vec<Rectangle>,
    #[serde(default)]
    pub text_boxes: Vec<TextBox>,
}

/// Element counts used to compare a document before and after a round trip.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentCounts {
    pub items: usize,
    pub icons: usize,
    pub colors: usize,
    pub views: usize,
    pub view_items: usize,
    pub connectors: usize,
    pub rectangles: usize,
    pub text_boxes: usize,
}

impl Document {
    pub fn from_json(text: &str) -> Result<Self, ValidationError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn counts(&self) -> DocumentCounts {
        let mut counts = DocumentCounts {
            items: self.items.len(),
            icons: self.icons.len(),
            colors: self.colors.len(),
            views: self.views.len(),
            ..DocumentCounts::default()
        };
        for view in &self.views {
            counts.view_items += view.items.len();
            counts.connectors += view.connectors.len();
            counts.rectangles += view.rectangles.len();
            counts.text_boxes += view.text_boxes.len();
        }
        counts
    }
}

/// Validates `document` and splits it into the two store states.
///
/// Nothing is built unless the whole document is consistent.
pub fn decode(document: Document) -> Result<(ModelState, SceneState), ValidationError> {
    let issues = validate_document(&document);
    if !issues.is_empty() {
        return Err(ValidationError::Inconsistent { issues });
    }

    let Document {
        version,
        title,
        description,
        colors,
        icons,
        items,
        views,
    } = document;

    let mut model = ModelState::new(title);
    model.set_version(version);
    model.set_description(description);
    *model.colors_mut() = colors;
    *model.icons_mut() = icons;
    *model.items_mut() = items;

    let mut scene = SceneState::default();
    for doc_view in views {
        let mut view = View::new(doc_view.id.clone(), doc_view.name);
        view.set_description(doc_view.description);
        view.set_last_updated(doc_view.last_updated);
        *view.items_mut() = doc_view.items;
        model.views_mut().push(view);

        if doc_view.connectors.is_empty()
            && doc_view.rectangles.is_empty()
            && doc_view.text_boxes.is_empty()
        {
            continue;
        }
        for connector in doc_view.connectors {
            scene
                .overlay_mut(&doc_view.id)
                .connectors_mut()
                .push(connector.id.clone());
            scene
                .connectors_mut()
                .insert(connector.id.clone(), connector);
        }
        for text_box in doc_view.text_boxes {
            scene
                .overlay_mut(&doc_view.id)
                .text_boxes_mut()
                .push(text_box.id.clone());
            scene.text_boxes_mut().insert(text_box.id.clone(), text_box);
        }
        *scene.overlay_mut(&doc_view.id).rectangles_mut() = doc_view.rectangles;
    }

    Ok((model, scene))
}

/// Joins the two store states into a document. Views are emitted in model order; overlays of
/// views the model no longer has are left out.
pub fn encode(model: &ModelState, scene: &SceneState) -> Document {
    let views = model
        .views()
        .iter()
        .map(|view| {
            let view_id = view.id();
            DocumentView {
                id: view_id.clone(),
                name: view.name().to_owned(),
                description: view.description().map(str::to_owned),
                last_updated: view.last_updated().map(str::to_owned),
                items: view.items().to_vec(),
                connectors: scene.view_connectors(view_id).cloned().collect(),
                rectangles: scene
                    .overlay(view_id)
                    .map(|overlay| overlay.rectangles().to_vec())
                    .unwrap_or_default(),
                text_boxes: scene.view_text_boxes(view_id).cloned().collect(),
            }
        })
        .collect();

    Document {
        version: model.version().map(str::to_owned),
        title: model.title().to_owned(),
        description: model.description().map(str::to_owned),
        colors: model.colors().to_vec(),
        icons: model.icons().to_vec(),
        items: model.items().to_vec(),
        views,
    }
}

/// JSON schema of [`Document`].
pub fn document_schema() -> Schema {
    schemars::schema_for!(Document)
}
