// src/grid/systems/logic/history_ops.rs
use bevy::prelude::*;

use crate::grid::{
    events::{GridDataModifiedEvent, RequestRedo, RequestUndo},
    history::GridHistory,
    resources::GridRegistry,
};

pub fn handle_undo_request(
    mut events: EventReader<RequestUndo>,
    mut registry: ResMut<GridRegistry>,
    mut history: ResMut<GridHistory>,
    mut data_modified_writer: EventWriter<GridDataModifiedEvent>,
) {
    for _ in events.read() {
        let current = registry.snapshot();
        match history.pop_undo(current) {
            Some(snapshot) => {
                registry.restore(snapshot);
                data_modified_writer.write(GridDataModifiedEvent);
                debug!("Undo applied.");
            }
            None => trace!("Undo requested with empty history. Skipping."),
        }
    }
}

pub fn handle_redo_request(
    mut events: EventReader<RequestRedo>,
    mut registry: ResMut<GridRegistry>,
    mut history: ResMut<GridHistory>,
    mut data_modified_writer: EventWriter<GridDataModifiedEvent>,
) {
    for _ in events.read() {
        let current = registry.snapshot();
        match history.pop_redo(current) {
            Some(snapshot) => {
                registry.restore(snapshot);
                data_modified_writer.write(GridDataModifiedEvent);
                debug!("Redo applied.");
            }
            None => trace!("Redo requested with empty history. Skipping."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::update_cell::apply_update_cell;
    use crate::grid::definitions::{CellValue, ColumnDefinition, ColumnType, GridMetadata, RowRecord};
    use crate::grid::history::GridHistory;
    use crate::grid::resources::GridRegistry;

    fn registry() -> GridRegistry {
        let mut registry = GridRegistry {
            metadata: GridMetadata::new(vec![ColumnDefinition::new(
                "opportunity",
                "Opportunity",
                ColumnType::Text,
            )]),
            rows: vec![RowRecord::with_id("r1")],
        };
        registry.ensure_row_consistency();
        registry
    }

    // Drives the same snapshot/record/pop sequence the systems perform,
    // without spinning up an App.
    fn edit(registry: &mut GridRegistry, history: &mut GridHistory, value: &str) {
        let before = registry.snapshot();
        let result = apply_update_cell(registry, "r1", "opportunity", value).unwrap();
        assert!(result.changed);
        history.record(before);
    }

    #[test]
    fn undo_redo_round_trip_is_identity() {
        let mut registry = registry();
        let mut history = GridHistory::default();
        edit(&mut registry, &mut history, "Acme");
        edit(&mut registry, &mut history, "Globex");

        let current = registry.snapshot();
        let snapshot = history.pop_undo(current).unwrap();
        registry.restore(snapshot);
        assert_eq!(registry.rows[0].value("opportunity"), CellValue::Text("Acme".into()));

        let current = registry.snapshot();
        let snapshot = history.pop_redo(current).unwrap();
        registry.restore(snapshot);
        assert_eq!(
            registry.rows[0].value("opportunity"),
            CellValue::Text("Globex".into())
        );
    }

    #[test]
    fn new_edit_after_undo_empties_redo() {
        let mut registry = registry();
        let mut history = GridHistory::default();
        edit(&mut registry, &mut history, "one");
        edit(&mut registry, &mut history, "two");
        edit(&mut registry, &mut history, "three");

        for _ in 0..2 {
            let current = registry.snapshot();
            let snapshot = history.pop_undo(current).unwrap();
            registry.restore(snapshot);
        }
        assert!(history.can_redo());
        edit(&mut registry, &mut history, "four");
        assert!(!history.can_redo());
    }
}
