// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of fossflow-state and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! State engine for an isometric diagram editor.
//!
//! Two undoable stores (model and scene) each keep their own snapshot history; a
//! [`Workspace`] owns both and bridges them to the JSON Diagram Document.

pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod history;
pub mod model;
pub mod ops;
pub mod store;
pub mod workspace;

pub use cli::{run, Args, CliError};
pub use config::EngineConfig;
pub use error::{ActionError, EntityKind, ValidationError, ValidationIssue};
pub use format::{Document, DocumentCounts};
pub use history::{History, HistoryState, DEFAULT_HISTORY_LIMIT};
pub use store::{ModelStore, SceneStore};
pub use workspace::{StateSummary, Workspace};
