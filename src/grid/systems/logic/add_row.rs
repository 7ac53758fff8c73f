// src/grid/systems/logic/add_row.rs
use bevy::prelude::*;
use uuid::Uuid;

use crate::grid::{
    definitions::{CellValue, RowRecord},
    events::{AddItemRequested, GridDataModifiedEvent, RequestAddRow},
    history::GridHistory,
    resources::GridRegistry,
};

/// Appends an empty row carrying a default value for every registered
/// column. Returns the generated row id.
pub fn apply_add_row(registry: &mut GridRegistry) -> String {
    let mut row = RowRecord::with_id(Uuid::new_v4().to_string());
    for column in &registry.metadata.columns {
        row.set(column.key.clone(), CellValue::default_for(column.data_type));
    }
    let id = row.id.clone();
    registry.rows.push(row);
    id
}

pub fn handle_add_row_request(
    mut events: EventReader<RequestAddRow>,
    mut registry: ResMut<GridRegistry>,
    mut history: ResMut<GridHistory>,
    mut data_modified_writer: EventWriter<GridDataModifiedEvent>,
    mut add_item_writer: EventWriter<AddItemRequested>,
) {
    for _ in events.read() {
        let before = registry.snapshot();
        let id = apply_add_row(&mut registry);
        history.record(before);
        data_modified_writer.write(GridDataModifiedEvent);
        // Item-creation egress is decoupled from the row mechanics above.
        add_item_writer.write(AddItemRequested);
        info!("Added row '{}'.", id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::definitions::{ColumnDefinition, ColumnType, GridMetadata};

    #[test]
    fn new_rows_carry_every_column_key() {
        let mut registry = GridRegistry {
            metadata: GridMetadata::new(vec![
                ColumnDefinition::new("opportunity", "Opportunity", ColumnType::Text),
                ColumnDefinition::new("active", "Active", ColumnType::Checkbox),
            ]),
            rows: Vec::new(),
        };
        let id = apply_add_row(&mut registry);
        assert!(!id.is_empty());
        let row = registry.row(&id).unwrap();
        assert_eq!(row.value("opportunity"), CellValue::Text(String::new()));
        assert_eq!(row.value("active"), CellValue::Bool(false));
        assert_eq!(row.cells.len(), 2);
    }

    #[test]
    fn generated_ids_are_unique() {
        let mut registry = GridRegistry::default();
        let a = apply_add_row(&mut registry);
        let b = apply_add_row(&mut registry);
        assert_ne!(a, b);
    }
}
