// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of fossflow-state and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::history::DEFAULT_HISTORY_LIMIT;

pub const HISTORY_LIMIT_ENV: &str = "FOSSFLOW_HISTORY_LIMIT";
pub const MAX_HISTORY_LIMIT: usize = 10_000;

/// Tunables shared by both stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Maximum number of undo snapshots each store keeps.
    pub history_limit: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl EngineConfig {
    /// Reads `FOSSFLOW_HISTORY_LIMIT`; unset or unparsable values fall back to the default.
    pub fn from_env() -> Self {
        let raw = std::env::var(HISTORY_LIMIT_ENV).ok();
        Self::from_env_value(raw.as_deref())
    }

    fn from_env_value(raw: Option<&str>) -> Self {
        let history_limit = raw
            .and_then(|raw| raw.trim().parse::<usize>().ok())
            .unwrap_or(DEFAULT_HISTORY_LIMIT);
        Self::default().with_history_limit(history_limit)
    }

    pub fn with_history_limit(mut self, history_limit: usize) -> Self {
        self.history_limit = history_limit.clamp(1, MAX_HISTORY_LIMIT);
        self
    }
}
