// src/grid/systems/logic/rename_column.rs
use bevy::prelude::*;

use crate::grid::{
    definitions::GridError,
    events::{GridDataModifiedEvent, GridOperationFeedback, RequestRenameColumn},
    history::GridHistory,
    resources::GridRegistry,
};

/// Renames a column's display header. The key is identity and never changes.
pub fn apply_rename_column(
    registry: &mut GridRegistry,
    key: &str,
    new_header: &str,
) -> Result<(), GridError> {
    if registry.metadata.is_protected(key) {
        return Err(GridError::ProtectedColumn(key.to_string()));
    }
    let new_header = new_header.trim();
    let column = registry
        .metadata
        .column_mut(key)
        .ok_or_else(|| GridError::UnknownColumn(key.to_string()))?;
    column.header = new_header.to_string();
    Ok(())
}

pub fn handle_rename_column_request(
    mut events: EventReader<RequestRenameColumn>,
    mut registry: ResMut<GridRegistry>,
    mut history: ResMut<GridHistory>,
    mut feedback_writer: EventWriter<GridOperationFeedback>,
    mut data_modified_writer: EventWriter<GridDataModifiedEvent>,
) {
    for event in events.read() {
        let new_header = event.new_header.trim();
        if new_header.is_empty() {
            feedback_writer.write(GridOperationFeedback {
                message: "Column name cannot be empty.".to_string(),
                is_error: true,
            });
            continue;
        }
        // Duplicate display names are confusing even though keys stay unique.
        let duplicate = registry
            .metadata
            .columns
            .iter()
            .any(|c| c.key != event.key && c.header.eq_ignore_ascii_case(new_header));
        if duplicate {
            feedback_writer.write(GridOperationFeedback {
                message: format!("A column named '{}' already exists.", new_header),
                is_error: true,
            });
            continue;
        }
        let unchanged = registry
            .metadata
            .column(&event.key)
            .map(|c| c.header == new_header)
            .unwrap_or(false);
        if unchanged {
            trace!("Column '{}' header unchanged. Skipping rename.", event.key);
            continue;
        }

        let before = registry.snapshot();
        match apply_rename_column(&mut registry, &event.key, new_header) {
            Ok(()) => {
                history.record(before);
                data_modified_writer.write(GridDataModifiedEvent);
                let msg = format!("Renamed column '{}' to '{}'.", event.key, new_header);
                info!("{}", msg);
                feedback_writer.write(GridOperationFeedback {
                    message: msg,
                    is_error: false,
                });
            }
            Err(err) => {
                warn!("Rename of column '{}' rejected: {}", event.key, err);
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
        let mut protected = ColumnDefinition::new("opportunity", "Opportunity", ColumnType::Text);
        protected.protected = true;
        protected.frozen = true;
        GridRegistry {
            metadata: GridMetadata::new(vec![
                protected,
                ColumnDefinition::new("status", "Status", ColumnType::Status),
            ]),
            rows: Vec::new(),
        }
    }

    #[test]
    fn renames_ordinary_column() {
        let mut r = registry();
        apply_rename_column(&mut r, "status", "Stage").unwrap();
        assert_eq!(r.metadata.column("status").unwrap().header, "Stage");
        assert!(r.metadata.has_key("status"));
    }

    #[test]
    fn protected_column_rejects_rename() {
        let mut r = registry();
        let err = apply_rename_column(&mut r, "opportunity", "Name");
        assert_eq!(err, Err(GridError::ProtectedColumn("opportunity".into())));
        assert_eq!(r.metadata.column("opportunity").unwrap().header, "Opportunity");
    }
}
