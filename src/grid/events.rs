// src/grid/events.rs
use bevy::prelude::Event;

use super::definitions::ColumnType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Sent by the new-column dialog. The key is derived from the header by the
/// handler; collisions are rejected with feedback.
#[derive(Event, Debug, Clone)]
pub struct RequestAddColumn {
    pub header: String,
    pub data_type: ColumnType,
}

#[derive(Event, Debug, Clone)]
pub struct RequestRenameColumn {
    pub key: String,
    pub new_header: String,
}

#[derive(Event, Debug, Clone)]
pub struct RequestDeleteColumn {
    pub key: String,
}

#[derive(Event, Debug, Clone)]
pub struct RequestDuplicateColumn {
    pub key: String,
}

/// Swap with the immediate neighbor inside the same partition. Moves that
/// would cross the frozen/scrollable boundary are silent no-ops.
#[derive(Event, Debug, Clone)]
pub struct RequestMoveColumn {
    pub key: String,
    pub direction: MoveDirection,
}

/// Drag-drop result: reinsert `from_key` at `to_key`'s index.
#[derive(Event, Debug, Clone)]
pub struct RequestReorderColumn {
    pub from_key: String,
    pub to_key: String,
}

#[derive(Event, Debug, Clone)]
pub struct RequestResizeColumn {
    pub key: String,
    pub new_width: f32,
}

#[derive(Event, Debug, Clone)]
pub struct RequestSortRows {
    pub key: String,
    pub direction: SortDirection,
}

/// Cell commit with the raw editor input; the handler applies type-specific
/// normalization before storing.
#[derive(Event, Debug, Clone)]
pub struct UpdateCellEvent {
    pub row_id: String,
    pub key: String,
    pub value: String,
}

/// Sent by the toolbar "Add Item" affordance.
#[derive(Event, Debug, Clone)]
pub struct RequestAddRow;

#[derive(Event, Debug, Clone)]
pub struct RequestUndo;

#[derive(Event, Debug, Clone)]
pub struct RequestRedo;

/// User-visible operation outcome, rendered as a transient notice line.
#[derive(Event, Debug, Clone)]
pub struct GridOperationFeedback {
    pub message: String,
    pub is_error: bool,
}

/// Fired whenever registry shape or content changed (column ops, undo/redo),
/// so derived UI state can invalidate.
#[derive(Event, Debug, Clone)]
pub struct GridDataModifiedEvent;

/// Persistence egress: emitted after every committed cell edit so a host
/// can mirror the change to an external store. Fire-and-forget.
#[derive(Event, Debug, Clone)]
pub struct CellCommittedEvent {
    pub row_id: String,
    pub column_key: String,
    pub value: String,
}

/// Item-creation egress, decoupled from row mechanics.
#[derive(Event, Debug, Clone)]
pub struct AddItemRequested;
