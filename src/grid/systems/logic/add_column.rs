// src/grid/systems/logic/add_column.rs
use bevy::prelude::*;

use super::normalize::slugify_key;
use crate::grid::{
    definitions::{CellValue, ColumnDefinition, ColumnType, GridError},
    events::{GridDataModifiedEvent, GridOperationFeedback, RequestAddColumn},
    history::GridHistory,
    resources::GridRegistry,
};

/// Adds a column with a key derived from the header. New columns always land
/// at the end of the scrollable partition, never auto-frozen. Back-fills a
/// type-appropriate default into every row.
pub fn apply_add_column(
    registry: &mut GridRegistry,
    header: &str,
    data_type: ColumnType,
) -> Result<String, GridError> {
    let key = slugify_key(header);
    if key.is_empty() {
        return Err(GridError::InvalidHeader(header.trim().to_string()));
    }
    if registry.metadata.has_key(&key) {
        return Err(GridError::DuplicateKey(key));
    }
    let mut column = ColumnDefinition::new(key.clone(), header.trim(), data_type);
    if data_type.uses_options() && column.options.is_empty() {
        // Popover editors need at least something to offer.
        column.options = vec!["Option 1".to_string(), "Option 2".to_string()];
    }
    registry.metadata.columns.push(column);
    for row in registry.rows.iter_mut() {
        row.set(key.clone(), CellValue::default_for(data_type));
    }
    Ok(key)
}

pub fn handle_add_column_request(
    mut events: EventReader<RequestAddColumn>,
    mut registry: ResMut<GridRegistry>,
    mut history: ResMut<GridHistory>,
    mut feedback_writer: EventWriter<GridOperationFeedback>,
    mut data_modified_writer: EventWriter<GridDataModifiedEvent>,
) {
    for event in events.read() {
        let before = registry.snapshot();
        match apply_add_column(&mut registry, &event.header, event.data_type) {
            Ok(key) => {
                history.record(before);
                data_modified_writer.write(GridDataModifiedEvent);
                let msg = format!("Added column '{}' ({}).", event.header.trim(), key);
                info!("{}", msg);
                feedback_writer.write(GridOperationFeedback {
                    message: msg,
                    is_error: false,
                });
            }
            Err(err) => {
                warn!("Add column '{}' rejected: {}", event.header, err);
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
    use crate::grid::definitions::{GridMetadata, RowRecord};

    fn registry_with(keys: &[&str]) -> GridRegistry {
        let columns = keys
            .iter()
            .map(|k| ColumnDefinition::new(*k, *k, ColumnType::Text))
            .collect();
        GridRegistry {
            metadata: GridMetadata::new(columns),
            rows: vec![RowRecord::with_id("r1"), RowRecord::with_id("r2")],
        }
    }

    #[test]
    fn adds_deal_size_column_and_backfills() {
        let mut registry = registry_with(&["opportunity", "status"]);
        registry.ensure_row_consistency();
        let key = apply_add_column(&mut registry, "Deal Size", ColumnType::Currency).unwrap();
        assert_eq!(key, "deal_size");
        for row in &registry.rows {
            assert_eq!(row.value("deal_size"), CellValue::Text(String::new()));
        }
        // Appended to the scrollable partition.
        assert_eq!(registry.metadata.index_of("deal_size"), Some(2));
        assert!(!registry.metadata.column("deal_size").unwrap().frozen);
    }

    #[test]
    fn duplicate_derived_key_is_rejected() {
        let mut registry = registry_with(&["deal_size"]);
        let err = apply_add_column(&mut registry, "Deal  Size", ColumnType::Text);
        // "Deal  Size" slugs to deal__size, which is fine; exact collision is not.
        assert!(err.is_ok());
        let err = apply_add_column(&mut registry, "Deal Size", ColumnType::Text);
        assert_eq!(err, Err(GridError::DuplicateKey("deal_size".into())));
    }

    #[test]
    fn symbol_only_header_gets_its_own_rejection() {
        let mut registry = registry_with(&["opportunity"]);
        let err = apply_add_column(&mut registry, "!!!", ColumnType::Text);
        assert_eq!(err, Err(GridError::InvalidHeader("!!!".into())));
        assert!(err
            .unwrap_err()
            .to_string()
            .contains("no usable characters"));
        // No phantom column with an empty key slipped in.
        assert_eq!(registry.metadata.columns.len(), 1);
    }

    #[test]
    fn checkbox_columns_backfill_false() {
        let mut registry = registry_with(&["opportunity"]);
        apply_add_column(&mut registry, "Active", ColumnType::Checkbox).unwrap();
        for row in &registry.rows {
            assert_eq!(row.value("active"), CellValue::Bool(false));
        }
    }

    #[test]
    fn key_set_invariant_holds_after_add() {
        let mut registry = registry_with(&["opportunity"]);
        registry.ensure_row_consistency();
        apply_add_column(&mut registry, "Owner", ColumnType::Select).unwrap();
        let keys: std::collections::HashSet<_> = registry.metadata.keys().collect();
        for row in &registry.rows {
            let row_keys: std::collections::HashSet<_> =
                row.cells.keys().map(|s| s.as_str()).collect();
            assert_eq!(row_keys, keys);
        }
    }
}
