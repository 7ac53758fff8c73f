// src/grid/plugin.rs
use bevy::prelude::*;

use super::events::{
    AddItemRequested, CellCommittedEvent, GridDataModifiedEvent, GridOperationFeedback,
    RequestAddColumn, RequestAddRow, RequestDeleteColumn, RequestDuplicateColumn,
    RequestMoveColumn, RequestRedo, RequestRenameColumn, RequestReorderColumn,
    RequestResizeColumn, RequestSortRows, RequestUndo, UpdateCellEvent,
};
use super::history::GridHistory;
use super::resources::{GridRegistry, SaveIndicator};
use super::systems;

/// Plugin owning the data model and all mutation handlers.
pub struct GridPlugin;

impl Plugin for GridPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GridRegistry>()
            .init_resource::<GridHistory>()
            .init_resource::<SaveIndicator>();

        app.add_event::<RequestAddColumn>()
            .add_event::<RequestRenameColumn>()
            .add_event::<RequestDeleteColumn>()
            .add_event::<RequestDuplicateColumn>()
            .add_event::<RequestMoveColumn>()
            .add_event::<RequestReorderColumn>()
            .add_event::<RequestResizeColumn>()
            .add_event::<RequestSortRows>()
            .add_event::<UpdateCellEvent>()
            .add_event::<RequestAddRow>()
            .add_event::<RequestUndo>()
            .add_event::<RequestRedo>()
            .add_event::<GridOperationFeedback>()
            .add_event::<GridDataModifiedEvent>()
            .add_event::<CellCommittedEvent>()
            .add_event::<AddItemRequested>();

        app.add_systems(Startup, systems::startup::load_grid_seed);

        // Undo/redo run first so a shortcut and a queued edit in the same
        // frame resolve in a predictable order.
        app.add_systems(
            Update,
            (
                systems::logic::handle_undo_request,
                systems::logic::handle_redo_request,
                systems::logic::handle_add_column_request,
                systems::logic::handle_rename_column_request,
                systems::logic::handle_delete_column_request,
                systems::logic::handle_duplicate_column_request,
                systems::logic::handle_move_column_request,
                systems::logic::handle_reorder_column_request,
                systems::logic::handle_resize_column_request,
                systems::logic::handle_sort_rows_request,
                systems::logic::handle_cell_update,
                systems::logic::handle_add_row_request,
                systems::logic::tick_save_indicator,
            )
                .chain(),
        );

        info!("GridPlugin initialized.");
    }
}
