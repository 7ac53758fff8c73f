// src/grid/systems/logic/move_column.rs
use bevy::prelude::*;

use crate::grid::{
    definitions::GridError,
    events::{GridDataModifiedEvent, GridOperationFeedback, MoveDirection, RequestMoveColumn},
    history::GridHistory,
    resources::GridRegistry,
};

/// Outcome of a move/reorder attempt. Boundary and cross-partition moves are
/// deliberate no-ops, distinct from hard errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Applied,
    Skipped,
}

/// Swaps a column with its immediate neighbor inside the same partition.
/// A move that would leave the partition (or the grid) is skipped.
pub fn apply_move_column(
    registry: &mut GridRegistry,
    key: &str,
    direction: MoveDirection,
) -> Result<MoveOutcome, GridError> {
    if registry.metadata.is_protected(key) {
        return Err(GridError::ProtectedColumn(key.to_string()));
    }
    let index = registry
        .metadata
        .index_of(key)
        .ok_or_else(|| GridError::UnknownColumn(key.to_string()))?;
    let bounds = registry.metadata.partition_bounds(index);
    let target = match direction {
        MoveDirection::Left => index.checked_sub(1),
        MoveDirection::Right => Some(index + 1),
    };
    let target = match target {
        Some(t) if bounds.contains(&t) => t,
        _ => {
            trace!("Move of column '{}' out of partition bounds. Skipping.", key);
            return Ok(MoveOutcome::Skipped);
        }
    };
    // Never displace the protected anchor from position 0.
    if registry.metadata.columns[target].protected {
        return Ok(MoveOutcome::Skipped);
    }
    registry.metadata.columns.swap(index, target);
    Ok(MoveOutcome::Applied)
}

pub fn handle_move_column_request(
    mut events: EventReader<RequestMoveColumn>,
    mut registry: ResMut<GridRegistry>,
    mut history: ResMut<GridHistory>,
    mut feedback_writer: EventWriter<GridOperationFeedback>,
    mut data_modified_writer: EventWriter<GridDataModifiedEvent>,
) {
    for event in events.read() {
        let before = registry.snapshot();
        match apply_move_column(&mut registry, &event.key, event.direction) {
            Ok(MoveOutcome::Applied) => {
                history.record(before);
                data_modified_writer.write(GridDataModifiedEvent);
            }
            Ok(MoveOutcome::Skipped) => {}
            Err(err) => {
                warn!("Move of column '{}' rejected: {}", event.key, err);
                feedback_writer.write(GridOperationFeedback {
                    message: err.to_string(),
                    is_error: true,
                });
            }
        }
    }
}
