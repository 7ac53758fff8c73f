// src/grid/history.rs
use bevy::prelude::*;
use std::collections::VecDeque;

use super::resources::GridSnapshot;

/// Explicit history depth cap; the oldest undo entry is evicted beyond this.
pub const HISTORY_CAP: usize = 50;

/// Undo/redo stacks of full `{columns, rows}` snapshots.
#[derive(Resource, Debug, Default)]
pub struct GridHistory {
    undo: VecDeque<GridSnapshot>,
    redo: VecDeque<GridSnapshot>,
}

impl GridHistory {
    /// Called by every mutating operation with the pre-change state, before
    /// the change is applied. A new action invalidates any pending redo.
    pub fn record(&mut self, before: GridSnapshot) {
        self.undo.push_back(before);
        if self.undo.len() > HISTORY_CAP {
            self.undo.pop_front();
        }
        self.redo.clear();
    }

    /// Pops the most recent undo snapshot, parking `current` on the redo
    /// stack. Returns `None` (no-op) when there is nothing to undo.
    pub fn pop_undo(&mut self, current: GridSnapshot) -> Option<GridSnapshot> {
        let snapshot = self.undo.pop_back()?;
        self.redo.push_back(current);
        Some(snapshot)
    }

    pub fn pop_redo(&mut self, current: GridSnapshot) -> Option<GridSnapshot> {
        let snapshot = self.redo.pop_back()?;
        self.undo.push_back(current);
        Some(snapshot)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::definitions::{CellValue, GridMetadata, RowRecord};

    fn snap(tag: &str) -> GridSnapshot {
        let mut row = RowRecord::with_id("r1");
        row.set("k", CellValue::Text(tag.into()));
        GridSnapshot {
            metadata: GridMetadata::default(),
            rows: vec![row],
        }
    }

    fn tag(s: &GridSnapshot) -> String {
        s.rows[0].value("k").display_text()
    }

    #[test]
    fn undo_then_redo_restores_pre_undo_state() {
        let mut history = GridHistory::default();
        history.record(snap("v0"));
        // current state is v1; undo back to v0
        let restored = history.pop_undo(snap("v1")).unwrap();
        assert_eq!(tag(&restored), "v0");
        // redo returns to v1, undo stack regains v0
        let redone = history.pop_redo(snap("v0")).unwrap();
        assert_eq!(tag(&redone), "v1");
        assert!(history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn new_record_clears_redo() {
        let mut history = GridHistory::default();
        history.record(snap("v0"));
        history.record(snap("v1"));
        history.record(snap("v2"));
        assert!(history.pop_undo(snap("v3")).is_some());
        assert!(history.pop_undo(snap("v2")).is_some());
        assert!(history.can_redo());
        // A fresh edit invalidates the remaining redo entries.
        history.record(snap("v1b"));
        assert!(!history.can_redo());
    }

    #[test]
    fn undo_stack_is_capped() {
        let mut history = GridHistory::default();
        for i in 0..(HISTORY_CAP + 10) {
            history.record(snap(&format!("v{}", i)));
        }
        let mut depth = 0;
        while history.pop_undo(snap("current")).is_some() {
            depth += 1;
        }
        assert_eq!(depth, HISTORY_CAP);
    }

    #[test]
    fn empty_stacks_are_noops() {
        let mut history = GridHistory::default();
        assert!(history.pop_undo(snap("x")).is_none());
        assert!(history.pop_redo(snap("x")).is_none());
        // A failed undo must not have parked anything on redo.
        assert!(!history.can_redo());
    }
}
