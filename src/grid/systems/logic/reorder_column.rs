// src/grid/systems/logic/reorder_column.rs
use bevy::prelude::*;

use super::move_column::MoveOutcome;
use crate::grid::{
    definitions::GridError,
    events::{GridDataModifiedEvent, GridOperationFeedback, RequestReorderColumn},
    history::GridHistory,
    resources::GridRegistry,
};

/// Applies a drag-drop result: the dragged column is reinserted at the drop
/// target's index. Reorders across the frozen/scrollable boundary, onto the
/// column itself, or displacing the protected anchor are silently ignored.
pub fn apply_reorder_column(
    registry: &mut GridRegistry,
    from_key: &str,
    to_key: &str,
) -> Result<MoveOutcome, GridError> {
    let from = registry
        .metadata
        .index_of(from_key)
        .ok_or_else(|| GridError::UnknownColumn(from_key.to_string()))?;
    let to = registry
        .metadata
        .index_of(to_key)
        .ok_or_else(|| GridError::UnknownColumn(to_key.to_string()))?;
    if from == to {
        return Ok(MoveOutcome::Skipped);
    }
    if registry.metadata.columns[from].protected || registry.metadata.columns[to].protected {
        return Ok(MoveOutcome::Skipped);
    }
    let bounds = registry.metadata.partition_bounds(from);
    if !bounds.contains(&to) {
        trace!(
            "Reorder '{}' -> '{}' crosses the frozen partition. Skipping.",
            from_key,
            to_key
        );
        return Ok(MoveOutcome::Skipped);
    }
    let column = registry.metadata.columns.remove(from);
    registry.metadata.columns.insert(to, column);
    Ok(MoveOutcome::Applied)
}

pub fn handle_reorder_column_request(
    mut events: EventReader<RequestReorderColumn>,
    mut registry: ResMut<GridRegistry>,
    mut history: ResMut<GridHistory>,
    mut feedback_writer: EventWriter<GridOperationFeedback>,
    mut data_modified_writer: EventWriter<GridDataModifiedEvent>,
) {
    for event in events.read() {
        let before = registry.snapshot();
        match apply_reorder_column(&mut registry, &event.from_key, &event.to_key) {
            Ok(MoveOutcome::Applied) => {
                history.record(before);
                data_modified_writer.write(GridDataModifiedEvent);
                debug!("Reordered column '{}' to '{}'.", event.from_key, event.to_key);
            }
            Ok(MoveOutcome::Skipped) => {}
            Err(err) => {
                warn!(
                    "Reorder '{}' -> '{}' rejected: {}",
                    event.from_key, event.to_key, err
                );
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
        let mut opportunity = ColumnDefinition::new("opportunity", "Opportunity", ColumnType::Text);
        opportunity.protected = true;
        opportunity.frozen = true;
        GridRegistry {
            metadata: GridMetadata::new(vec![
                opportunity,
                ColumnDefinition::new("stage", "Stage", ColumnType::Status),
                ColumnDefinition::new("owner", "Owner", ColumnType::Select),
                ColumnDefinition::new("revenue", "Revenue", ColumnType::Currency),
            ]),
            rows: Vec::new(),
        }
    }

    #[test]
    fn reinserts_at_target_index() {
        let mut r = registry();
        let outcome = apply_reorder_column(&mut r, "revenue", "stage").unwrap();
        assert_eq!(outcome, MoveOutcome::Applied);
        let keys: Vec<_> = r.metadata.keys().collect();
        assert_eq!(keys, vec!["opportunity", "revenue", "stage", "owner"]);
    }

    #[test]
    fn cross_partition_drop_is_ignored() {
        let mut r = registry();
        let outcome = apply_reorder_column(&mut r, "stage", "opportunity").unwrap();
        assert_eq!(outcome, MoveOutcome::Skipped);
        let keys: Vec<_> = r.metadata.keys().collect();
        assert_eq!(keys, vec!["opportunity", "stage", "owner", "revenue"]);
    }

    #[test]
    fn self_drop_is_ignored() {
        let mut r = registry();
        let outcome = apply_reorder_column(&mut r, "owner", "owner").unwrap();
        assert_eq!(outcome, MoveOutcome::Skipped);
    }

    #[test]
    fn unknown_keys_error() {
        let mut r = registry();
        assert_eq!(
            apply_reorder_column(&mut r, "ghost", "owner"),
            Err(GridError::UnknownColumn("ghost".into()))
        );
    }
}
