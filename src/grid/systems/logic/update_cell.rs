// src/grid/systems/logic/update_cell.rs
//! Core cell commit logic: type normalization, skip-unchanged, history
//! snapshot, save-indicator arming and persistence egress.

use bevy::prelude::*;

use super::normalize::normalize_cell;
use crate::grid::{
    definitions::{CellValue, GridError},
    events::{CellCommittedEvent, GridOperationFeedback, UpdateCellEvent},
    history::GridHistory,
    resources::{GridRegistry, SaveIndicator},
};

/// Result of a single cell write.
#[derive(Debug)]
pub struct CellUpdateResult {
    pub changed: bool,
    pub stored: CellValue,
}

/// Normalizes and stores a raw editor value. Unchanged values are skipped so
/// no-op commits neither snapshot history nor notify the host.
pub fn apply_update_cell(
    registry: &mut GridRegistry,
    row_id: &str,
    key: &str,
    raw: &str,
) -> Result<CellUpdateResult, GridError> {
    let column = registry
        .metadata
        .column(key)
        .cloned()
        .ok_or_else(|| GridError::UnknownColumn(key.to_string()))?;
    let normalized = normalize_cell(&column, raw);
    let row = registry
        .row_mut(row_id)
        .ok_or_else(|| GridError::UnknownRow(row_id.to_string()))?;
    if row.value(key) == normalized {
        trace!("Cell [{}/{}] unchanged. Skipping update.", row_id, key);
        return Ok(CellUpdateResult {
            changed: false,
            stored: normalized,
        });
    }
    row.set(key, normalized.clone());
    Ok(CellUpdateResult {
        changed: true,
        stored: normalized,
    })
}

pub fn handle_cell_update(
    mut events: EventReader<UpdateCellEvent>,
    mut registry: ResMut<GridRegistry>,
    mut history: ResMut<GridHistory>,
    mut indicator: ResMut<SaveIndicator>,
    mut feedback_writer: EventWriter<GridOperationFeedback>,
    mut committed_writer: EventWriter<CellCommittedEvent>,
) {
    for event in events.read() {
        let before = registry.snapshot();
        match apply_update_cell(&mut registry, &event.row_id, &event.key, &event.value) {
            Ok(result) if result.changed => {
                history.record(before);
                indicator.arm(&event.row_id, &event.key);
                trace!(
                    "Updated cell [{}/{}] to '{}'",
                    event.row_id,
                    event.key,
                    result.stored.display_text()
                );
                committed_writer.write(CellCommittedEvent {
                    row_id: event.row_id.clone(),
                    column_key: event.key.clone(),
                    value: result.stored.display_text(),
                });
            }
            Ok(_) => {}
            Err(err) => {
                // Unresolvable references are a caller contract violation;
                // surface them instead of corrupting state.
                warn!("Cell update [{}/{}] rejected: {}", event.row_id, event.key, err);
                feedback_writer.write(GridOperationFeedback {
                    message: err.to_string(),
                    is_error: true,
                });
            }
        }
    }
}
