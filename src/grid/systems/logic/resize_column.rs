// src/grid/systems/logic/resize_column.rs
use bevy::prelude::*;

use crate::grid::{
    definitions::{GridError, MIN_COLUMN_WIDTH},
    events::{GridOperationFeedback, RequestResizeColumn},
    history::GridHistory,
    resources::GridRegistry,
};

const WIDTH_EPSILON: f32 = 0.5;

/// Stores a new column width, clamped to the minimum. Returns whether the
/// stored value actually changed.
pub fn apply_resize_column(
    registry: &mut GridRegistry,
    key: &str,
    new_width: f32,
) -> Result<bool, GridError> {
    let clamped = new_width.max(MIN_COLUMN_WIDTH);
    let column = registry
        .metadata
        .column_mut(key)
        .ok_or_else(|| GridError::UnknownColumn(key.to_string()))?;
    if (column.width - clamped).abs() <= WIDTH_EPSILON {
        return Ok(false);
    }
    trace!(
        "Updating column '{}' width from {:.1} to {:.1}",
        key,
        column.width,
        clamped
    );
    column.width = clamped;
    Ok(true)
}

/// Handles width updates from the header resize handles.
pub fn handle_resize_column_request(
    mut events: EventReader<RequestResizeColumn>,
    mut registry: ResMut<GridRegistry>,
    mut history: ResMut<GridHistory>,
    mut feedback_writer: EventWriter<GridOperationFeedback>,
) {
    for event in events.read() {
        if event.new_width <= 0.0 {
            feedback_writer.write(GridOperationFeedback {
                message: format!(
                    "Failed width update for column '{}': width must be positive.",
                    event.key
                ),
                is_error: true,
            });
            continue;
        }
        let before = registry.snapshot();
        match apply_resize_column(&mut registry, &event.key, event.new_width) {
            Ok(true) => history.record(before),
            Ok(false) => {}
            Err(err) => {
                feedback_writer.write(GridOperationFeedback {
                    message: err.to_string(),
                    is_error: true,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::definitions::{ColumnDefinition, ColumnType, GridMetadata};

    fn registry() -> GridRegistry {
        GridRegistry {
            metadata: GridMetadata::new(vec![ColumnDefinition::new(
                "owner",
                "Owner",
                ColumnType::Select,
            )]),
            rows: Vec::new(),
        }
    }

    #[test]
    fn resize_clamps_to_minimum_width() {
        let mut r = registry();
        assert!(apply_resize_column(&mut r, "owner", 5.0).unwrap());
        assert_eq!(r.metadata.column("owner").unwrap().width, MIN_COLUMN_WIDTH);
    }

    #[test]
    fn applied_resize_is_undoable() {
        let mut r = registry();
        let mut history = GridHistory::default();
        let before = r.snapshot();
        assert!(apply_resize_column(&mut r, "owner", 240.0).unwrap());
        history.record(before);
        let restored = history.pop_undo(r.snapshot()).unwrap();
        r.restore(restored);
        assert_eq!(
            r.metadata.column("owner").unwrap().width,
            crate::grid::definitions::DEFAULT_COLUMN_WIDTH
        );
    }

    #[test]
    fn near_identical_width_is_skipped() {
        let mut r = registry();
        apply_resize_column(&mut r, "owner", 200.0).unwrap();
        assert!(!apply_resize_column(&mut r, "owner", 200.2).unwrap());
        assert_eq!(
            apply_resize_column(&mut r, "ghost", 120.0),
            Err(GridError::UnknownColumn("ghost".into()))
        );
    }
}
