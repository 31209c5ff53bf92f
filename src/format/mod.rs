// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of fossflow-state and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Diagram Document import/export.
//!
//! The document is the only serialized form of a diagram; stores never persist themselves.

pub mod document;
pub mod validate;

pub use document::{
    decode, document_schema, encode, Document, DocumentCounts, DocumentView,
};
pub use validate::validate_document;
