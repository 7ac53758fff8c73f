// src/grid/systems/logic/duplicate_column.rs
use bevy::prelude::*;

use crate::grid::{
    definitions::GridError,
    events::{GridDataModifiedEvent, GridOperationFeedback, RequestDuplicateColumn},
    history::GridHistory,
    resources::GridRegistry,
};

/// Copies a column definition and every row's value under a derived unique
/// key. The copy is never frozen or protected and lands in the scrollable
/// partition.
pub fn apply_duplicate_column(registry: &mut GridRegistry, key: &str) -> Result<String, GridError> {
    let source = registry
        .metadata
        .column(key)
        .cloned()
        .ok_or_else(|| GridError::UnknownColumn(key.to_string()))?;

    let mut suffix = 1;
    let (new_key, new_header) = loop {
        let candidate = format!("{}_copy{}", key, if suffix == 1 { String::new() } else { suffix.to_string() });
        if !registry.metadata.has_key(&candidate) {
            let header = if suffix == 1 {
                format!("{} Copy", source.header)
            } else {
                format!("{} Copy {}", source.header, suffix)
            };
            break (candidate, header);
        }
        suffix += 1;
    };

    let mut copy = source;
    copy.key = new_key.clone();
    copy.header = new_header;
    copy.frozen = false;
    copy.protected = false;
    registry.metadata.columns.push(copy);

    for row in registry.rows.iter_mut() {
        let value = row.value(key);
        row.set(new_key.clone(), value);
    }
    Ok(new_key)
}

pub fn handle_duplicate_column_request(
    mut events: EventReader<RequestDuplicateColumn>,
    mut registry: ResMut<GridRegistry>,
    mut history: ResMut<GridHistory>,
    mut feedback_writer: EventWriter<GridOperationFeedback>,
    mut data_modified_writer: EventWriter<GridDataModifiedEvent>,
) {
    for event in events.read() {
        let before = registry.snapshot();
        match apply_duplicate_column(&mut registry, &event.key) {
            Ok(new_key) => {
                history.record(before);
                data_modified_writer.write(GridDataModifiedEvent);
                let msg = format!("Duplicated column '{}' as '{}'.", event.key, new_key);
                info!("{}", msg);
                feedback_writer.write(GridOperationFeedback {
                    message: msg,
                    is_error: false,
                });
            }
            Err(err) => {
                warn!("Duplicate of column '{}' rejected: {}", event.key, err);
                feedback_writer.write(GridOperationFeedback {
                    message: err.to_string(),
                    is_error: true,
                });
            }
        }
    }
}
