// src/grid/systems/logic/delete_column.rs
use bevy::prelude::*;

use crate::grid::{
    definitions::GridError,
    events::{GridDataModifiedEvent, GridOperationFeedback, RequestDeleteColumn},
    history::GridHistory,
    resources::GridRegistry,
};

/// Removes a column and strips its key from every row.
pub fn apply_delete_column(registry: &mut GridRegistry, key: &str) -> Result<(), GridError> {
    if registry.metadata.is_protected(key) {
        return Err(GridError::ProtectedColumn(key.to_string()));
    }
    let index = registry
        .metadata
        .index_of(key)
        .ok_or_else(|| GridError::UnknownColumn(key.to_string()))?;
    registry.metadata.columns.remove(index);
    for row in registry.rows.iter_mut() {
        row.cells.remove(key);
    }
    Ok(())
}

pub fn handle_delete_column_request(
    mut events: EventReader<RequestDeleteColumn>,
    mut registry: ResMut<GridRegistry>,
    mut history: ResMut<GridHistory>,
    mut feedback_writer: EventWriter<GridOperationFeedback>,
    mut data_modified_writer: EventWriter<GridDataModifiedEvent>,
) {
    for event in events.read() {
        let before = registry.snapshot();
        match apply_delete_column(&mut registry, &event.key) {
            Ok(()) => {
                history.record(before);
                data_modified_writer.write(GridDataModifiedEvent);
                let msg = format!("Deleted column '{}'.", event.key);
                info!("{}", msg);
                feedback_writer.write(GridOperationFeedback {
                    message: msg,
                    is_error: false,
                });
            }
            Err(err) => {
                warn!("Delete of column '{}' rejected: {}", event.key, err);
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
    use crate::grid::definitions::{CellValue, ColumnDefinition, ColumnType, GridMetadata, RowRecord};

    fn registry() -> GridRegistry {
        let mut protected = ColumnDefinition::new("opportunity", "Opportunity", ColumnType::Text);
        protected.protected = true;
        protected.frozen = true;
        let mut registry = GridRegistry {
            metadata: GridMetadata::new(vec![
                protected,
                ColumnDefinition::new("status", "Status", ColumnType::Status),
                ColumnDefinition::new("revenue", "Revenue", ColumnType::Currency),
            ]),
            rows: vec![RowRecord::with_id("r1")],
        };
        registry.ensure_row_consistency();
        registry
    }

    #[test]
    fn delete_strips_key_from_every_row() {
        let mut r = registry();
        apply_delete_column(&mut r, "revenue").unwrap();
        assert!(!r.metadata.has_key("revenue"));
        assert!(!r.rows[0].cells.contains_key("revenue"));
        // Remaining keys still line up with the registry.
        let keys: std::collections::HashSet<_> = r.metadata.keys().collect();
        let row_keys: std::collections::HashSet<_> =
            r.rows[0].cells.keys().map(|s| s.as_str()).collect();
        assert_eq!(keys, row_keys);
    }

    #[test]
    fn protected_column_survives_delete_attempts() {
        let mut r = registry();
        let err = apply_delete_column(&mut r, "opportunity");
        assert_eq!(err, Err(GridError::ProtectedColumn("opportunity".into())));
        assert!(r.metadata.has_key("opportunity"));
        assert_eq!(r.rows[0].value("opportunity"), CellValue::Text(String::new()));
    }

    #[test]
    fn unknown_column_is_reported() {
        let mut r = registry();
        assert_eq!(
            apply_delete_column(&mut r, "ghost"),
            Err(GridError::UnknownColumn("ghost".into()))
        );
    }
}
