// src/grid/resources.rs
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::definitions::{CellValue, ColumnDefinition, GridMetadata, RowRecord};

/// Delay before the per-cell "saved" indicator clears.
pub const SAVE_INDICATOR_SECS: f32 = 1.0;

/// Full-structure copy of the data model, captured around every mutating
/// operation for undo/redo.
#[derive(Debug, Clone)]
pub struct GridSnapshot {
    pub metadata: GridMetadata,
    pub rows: Vec<RowRecord>,
}

/// The single mutable owner of columns and rows. All writes go through the
/// operation handlers in `grid::systems::logic`; UI systems only read.
#[derive(Resource, Debug, Default)]
pub struct GridRegistry {
    pub metadata: GridMetadata,
    pub rows: Vec<RowRecord>,
}

impl GridRegistry {
    pub fn snapshot(&self) -> GridSnapshot {
        GridSnapshot {
            metadata: self.metadata.clone(),
            rows: self.rows.clone(),
        }
    }

    pub fn restore(&mut self, snapshot: GridSnapshot) {
        self.metadata = snapshot.metadata;
        self.rows = snapshot.rows;
    }

    pub fn row(&self, id: &str) -> Option<&RowRecord> {
        self.rows.iter().find(|r| r.id == id)
    }

    pub fn row_mut(&mut self, id: &str) -> Option<&mut RowRecord> {
        self.rows.iter_mut().find(|r| r.id == id)
    }

    /// Re-establishes the row/column invariant: every row carries an entry
    /// for every registered column (type-appropriate default), and no row
    /// carries a key the registry no longer knows.
    pub fn ensure_row_consistency(&mut self) {
        let columns: Vec<(String, super::definitions::ColumnType)> = self
            .metadata
            .columns
            .iter()
            .map(|c| (c.key.clone(), c.data_type))
            .collect();
        for row in self.rows.iter_mut() {
            for (key, data_type) in &columns {
                row.cells
                    .entry(key.clone())
                    .or_insert_with(|| CellValue::default_for(*data_type));
            }
            row.cells.retain(|key, _| columns.iter().any(|(k, _)| k == key));
        }
    }
}

/// Initial data supply contract: the host inserts this before startup;
/// a startup system loads it into the registry. Empty is tolerated.
#[derive(Resource, Debug, Clone, Default, Serialize, Deserialize)]
pub struct GridSeed {
    pub columns: Vec<ColumnDefinition>,
    pub rows: Vec<RowRecord>,
}

/// Transient per-cell "saved" indicator. At most one at a time; a new write
/// replaces the pending one, timer and all.
#[derive(Resource, Debug)]
pub struct SaveIndicator {
    pub cell: Option<(String, String)>,
    pub timer: Timer,
}

impl Default for SaveIndicator {
    fn default() -> Self {
        SaveIndicator {
            cell: None,
            timer: Timer::from_seconds(SAVE_INDICATOR_SECS, TimerMode::Once),
        }
    }
}

impl SaveIndicator {
    pub fn arm(&mut self, row_id: &str, column_key: &str) {
        self.cell = Some((row_id.to_string(), column_key.to_string()));
        self.timer = Timer::from_seconds(SAVE_INDICATOR_SECS, TimerMode::Once);
    }

    pub fn is_active(&self, row_id: &str, column_key: &str) -> bool {
        matches!(&self.cell, Some((r, c)) if r == row_id && c == column_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::definitions::ColumnType;

    #[test]
    fn ensure_row_consistency_backfills_and_strips() {
        let mut registry = GridRegistry {
            metadata: GridMetadata::new(vec![
                ColumnDefinition::new("name", "Name", ColumnType::Text),
                ColumnDefinition::new("active", "Active", ColumnType::Checkbox),
            ]),
            rows: vec![{
                let mut r = RowRecord::with_id("r1");
                r.set("name", CellValue::Text("Acme".into()));
                r.set("stale", CellValue::Text("x".into()));
                r
            }],
        };
        registry.ensure_row_consistency();
        let row = registry.row("r1").unwrap();
        assert_eq!(row.value("active"), CellValue::Bool(false));
        assert!(!row.cells.contains_key("stale"));
        assert_eq!(row.cells.len(), 2);
    }
}
