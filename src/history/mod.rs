// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of fossflow-state and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Snapshot-based undo/redo history.
//!
//! A [`History`] stores whole copies of a store's state. The store records the state it is
//! about to replace, and hands its current state in when undoing or redoing so the two can
//! be swapped. Recording always discards the redo stack; doing so after an undo forks the
//! history and the discarded branch is gone for good.

use std::collections::VecDeque;

use log::{trace, warn};

pub const DEFAULT_HISTORY_LIMIT: usize = 50;

/// Coarse position of a history in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryState {
    /// Nothing to undo or redo.
    Base,
    /// At least one snapshot to undo, nothing to redo.
    Ahead,
    /// Somewhere inside an undo chain; redo is possible.
    Rewound,
    /// An edit was recorded while rewound, so a redo branch was dropped.
    Forked,
}

#[derive(Debug, Clone)]
pub struct History<T> {
    past: VecDeque<T>,
    /// Redo stack; the last element is the next state `redo` restores.
    future: Vec<T>,
    limit: usize,
    forked: bool,
    /// `past` length right after the open gesture recorded its snapshot.
    gesture_depth: Option<usize>,
}

impl<T> Default for History<T> {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}

impl<T> History<T> {
    /// Creates an empty history that keeps at most `limit` undo snapshots (minimum 1).
    pub fn new(limit: usize) -> Self {
        Self {
            past: VecDeque::new(),
            future: Vec::new(),
            limit: limit.max(1),
            forked: false,
            gesture_depth: None,
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Records `snapshot` (the state before a mutation) and clears the redo stack.
    ///
    /// Returns `false` without recording while a gesture is open; the gesture's opening
    /// snapshot already covers the mutation.
    pub fn record(&mut self, snapshot: T) -> bool {
        if self.gesture_depth.is_some() {
            trace!("history: record suppressed by open gesture");
            return false;
        }
        self.push_past(snapshot);
        true
    }

    /// Moves one step back. `current` is swapped with the most recent snapshot and the old
    /// value is kept for redo. Returns `false`, leaving `current` alone, when there is
    /// nothing to undo or a gesture is open.
    pub fn undo(&mut self, current: &mut T) -> bool {
        if self.gesture_depth.is_some() {
            trace!("history: undo refused during gesture");
            return false;
        }
        let Some(previous) = self.past.pop_back() else {
            return false;
        };
        self.future.push(std::mem::replace(current, previous));
        trace!(past = self.past.len(), future = self.future.len(); "history: undo");
        true
    }

    /// Moves one step forward again; the mirror image of [`History::undo`].
    pub fn redo(&mut self, current: &mut T) -> bool {
        if self.gesture_depth.is_some() {
            trace!("history: redo refused during gesture");
            return false;
        }
        let Some(next) = self.future.pop() else {
            return false;
        };
        let replaced = std::mem::replace(current, next);
        self.past.push_back(replaced);
        self.enforce_limit();
        trace!(past = self.past.len(), future = self.future.len(); "history: redo");
        true
    }

    /// Drops both stacks and any open gesture, returning to [`HistoryState::Base`].
    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
        self.forked = false;
        self.gesture_depth = None;
    }

    /// `false` while a gesture is open, even with snapshots on the stack.
    pub fn can_undo(&self) -> bool {
        self.gesture_depth.is_none() && !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        self.gesture_depth.is_none() && !self.future.is_empty()
    }

    pub fn past_len(&self) -> usize {
        self.past.len()
    }

    pub fn future_len(&self) -> usize {
        self.future.len()
    }

    /// Undo snapshots, oldest first.
    pub fn past(&self) -> impl Iterator<Item = &T> {
        self.past.iter()
    }

    pub fn state(&self) -> HistoryState {
        if !self.future.is_empty() {
            HistoryState::Rewound
        } else if self.past.is_empty() {
            HistoryState::Base
        } else if self.forked {
            HistoryState::Forked
        } else {
            HistoryState::Ahead
        }
    }

    pub fn is_gesture_in_progress(&self) -> bool {
        self.gesture_depth.is_some()
    }

    /// Opens a gesture: records `current` once and suppresses records until the gesture
    /// ends. Undo and redo are refused while it is open. Returns `false` if a gesture is
    /// already open.
    pub fn begin_gesture(&mut self, current: T) -> bool {
        if self.gesture_depth.is_some() {
            return false;
        }
        self.push_past(current);
        self.gesture_depth = Some(self.past.len());
        true
    }

    pub fn end_gesture(&mut self) {
        self.gesture_depth = None;
    }

    /// Abandons an open gesture, swapping the pre-gesture snapshot back into `current`.
    /// Returns `false` when no gesture was open.
    pub fn cancel_gesture(&mut self, current: &mut T) -> bool {
        let Some(depth) = self.gesture_depth.take() else {
            return false;
        };
        // Only the gesture's own snapshot may be popped.
        if self.past.len() != depth {
            warn!(depth, past = self.past.len(); "history: gesture snapshot lost, cancel ignored");
            return false;
        }
        let Some(before) = self.past.pop_back() else {
            return false;
        };
        *current = before;
        true
    }

    fn push_past(&mut self, snapshot: T) {
        if !self.future.is_empty() {
            self.forked = true;
            trace!(discarded = self.future.len(); "history: fork drops redo branch");
            self.future.clear();
        }
        self.past.push_back(snapshot);
        self.enforce_limit();
    }

    fn enforce_limit(&mut self) {
        while self.past.len() > self.limit {
            self.past.pop_front();
            warn!(limit = self.limit; "history: limit reached, dropping oldest snapshot");
        }
    }
}
