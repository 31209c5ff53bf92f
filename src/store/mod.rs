// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of fossflow-state and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Undoable in-memory stores.
//!
//! [`Store`] pairs a state with its own [`History`]. Every committed action records exactly
//! one snapshot of the state it replaced; rejected actions record nothing. The model and
//! scene stores wrap it with entity-level actions and never share a history.

pub mod model_store;
pub mod scene_store;

pub use model_store::ModelStore;
pub use scene_store::SceneStore;

use log::{debug, trace};

use crate::error::ActionError;
use crate::history::{History, HistoryState};
use crate::ops::{Delta, OpTarget};

#[derive(Debug, Clone)]
pub struct Store<S> {
    state: S,
    history: History<S>,
}

impl<S: OpTarget> Store<S> {
    pub fn new(state: S, history_limit: usize) -> Self {
        Self {
            state,
            history: History::new(history_limit),
        }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn history(&self) -> &History<S> {
        &self.history
    }

    /// Applies `ops` as one action.
    ///
    /// The ops run against a copy of the state; on success the copy becomes current and the
    /// replaced state is recorded. An empty batch is accepted and records nothing.
    pub fn dispatch(&mut self, ops: &[S::Op]) -> Result<Delta, ActionError> {
        if ops.is_empty() {
            return Ok(Delta::default());
        }

        let mut next = self.state.clone();
        let delta = match next.apply_ops(ops) {
            Ok(delta) => delta,
            Err(err) => {
                debug!(store = S::NAME, error:% = err; "action rejected");
                return Err(err);
            }
        };

        let previous = std::mem::replace(&mut self.state, next);
        self.history.record(previous);
        debug!(
            store = S::NAME,
            ops = ops.len(),
            added = delta.added.len(),
            removed = delta.removed.len(),
            updated = delta.updated.len();
            "action committed"
        );
        Ok(delta)
    }

    pub fn undo(&mut self) -> bool {
        let moved = self.history.undo(&mut self.state);
        trace!(store = S::NAME, moved; "undo");
        moved
    }

    pub fn redo(&mut self) -> bool {
        let moved = self.history.redo(&mut self.state);
        trace!(store = S::NAME, moved; "redo");
        moved
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn history_state(&self) -> HistoryState {
        self.history.state()
    }

    /// Swaps in a whole new state and starts a fresh history from it.
    pub fn replace_all(&mut self, state: S) {
        self.state = state;
        self.history.clear();
        debug!(store = S::NAME; "state replaced, history cleared");
    }

    /// Opens a gesture; actions dispatched until [`Store::end_gesture`] share one snapshot.
    pub fn begin_gesture(&mut self) -> bool {
        self.history.begin_gesture(self.state.clone())
    }

    pub fn end_gesture(&mut self) {
        self.history.end_gesture();
    }

    /// Drops everything done since [`Store::begin_gesture`].
    pub fn cancel_gesture(&mut self) -> bool {
        self.history.cancel_gesture(&mut self.state)
    }

    pub fn is_gesture_in_progress(&self) -> bool {
        self.history.is_gesture_in_progress()
    }
}
