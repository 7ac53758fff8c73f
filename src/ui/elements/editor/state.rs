// src/ui/elements/editor/state.rs
// Consolidated transient UI state for the grid editor. Every interaction
// transition (who is editing, which popover is open, what is being dragged)
// funnels through the methods here so the "at most one editing cell, at most
// one popover" invariant has a single enforcement point.

use bevy::prelude::Resource;
use bevy_egui::egui;
use chrono::{Datelike, Local, NaiveDate};

use crate::grid::definitions::ColumnType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopoverKind {
    Select,
    Date,
}

/// The interaction state machine: Idle -> Editing -> Idle and
/// Idle -> Popover -> Idle.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellInteraction {
    #[default]
    Idle,
    Editing {
        row_id: String,
        column_key: String,
    },
    Popover {
        kind: PopoverKind,
        row_id: String,
        column_key: String,
    },
}

/// A buffered edit that must be written back because its cell deactivated.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingCommit {
    pub row_id: String,
    pub column_key: String,
    pub value: String,
}

#[derive(Resource)]
pub struct GridEditorState {
    pub interaction: CellInteraction,
    /// Free-text buffer for the cell currently in `Editing`.
    pub edit_buffer: String,
    /// The editor widget grabs focus on its first frame.
    pub edit_needs_focus: bool,
    /// Last activated cell; URL cells open on first click and edit on the
    /// second because of this.
    pub active_cell: Option<(String, String)>,

    pub editing_header_key: Option<String>,
    pub header_buffer: String,
    pub header_needs_focus: bool,

    pub dragged_column_key: Option<String>,
    pub drag_over_column_key: Option<String>,

    pub popover_anchor: egui::Pos2,
    /// Calendar draft for the date popover.
    pub date_draft: Option<NaiveDate>,
    pub date_view_year: i32,
    pub date_view_month: u32,

    pub show_new_column_popup: bool,
    pub new_column_header_input: String,
    pub new_column_type_select: ColumnType,

    /// Horizontal offset of the scrollable body region, mirrored onto the
    /// header band each frame (body drives header).
    pub scroll_x: f32,
}

impl Default for GridEditorState {
    fn default() -> Self {
        let today = Local::now().date_naive();
        GridEditorState {
            interaction: CellInteraction::Idle,
            edit_buffer: String::new(),
            edit_needs_focus: false,
            active_cell: None,
            editing_header_key: None,
            header_buffer: String::new(),
            header_needs_focus: false,
            dragged_column_key: None,
            drag_over_column_key: None,
            popover_anchor: egui::Pos2::ZERO,
            date_draft: None,
            date_view_year: today.year(),
            date_view_month: today.month(),
            show_new_column_popup: false,
            new_column_header_input: String::new(),
            new_column_type_select: ColumnType::Text,
            scroll_x: 0.0,
        }
    }
}

impl GridEditorState {
    pub fn is_editing(&self, row_id: &str, column_key: &str) -> bool {
        matches!(&self.interaction, CellInteraction::Editing { row_id: r, column_key: c }
            if r == row_id && c == column_key)
    }

    pub fn open_popover_cell(&self) -> Option<(PopoverKind, String, String)> {
        match &self.interaction {
            CellInteraction::Popover {
                kind,
                row_id,
                column_key,
            } => Some((*kind, row_id.clone(), column_key.clone())),
            _ => None,
        }
    }

    /// Enters edit mode for a cell. A previously editing cell is implicitly
    /// committed (its buffered value is returned for write-back); an open
    /// popover is discarded.
    pub fn begin_edit(
        &mut self,
        row_id: &str,
        column_key: &str,
        initial: String,
    ) -> Option<PendingCommit> {
        if self.is_editing(row_id, column_key) {
            return None;
        }
        let pending = self.take_commit();
        self.interaction = CellInteraction::Editing {
            row_id: row_id.to_string(),
            column_key: column_key.to_string(),
        };
        self.edit_buffer = initial;
        self.edit_needs_focus = true;
        self.active_cell = Some((row_id.to_string(), column_key.to_string()));
        pending
    }

    /// Opens a popover anchored at `anchor`, closing whatever was active.
    /// A previously editing cell commits first, same as clicking away.
    pub fn open_popover(
        &mut self,
        kind: PopoverKind,
        row_id: &str,
        column_key: &str,
        anchor: egui::Pos2,
    ) -> Option<PendingCommit> {
        let pending = self.take_commit();
        self.interaction = CellInteraction::Popover {
            kind,
            row_id: row_id.to_string(),
            column_key: column_key.to_string(),
        };
        self.popover_anchor = anchor;
        self.active_cell = Some((row_id.to_string(), column_key.to_string()));
        pending
    }

    /// Leaves `Editing`, yielding the buffered value for write-back.
    /// No-op (None) in any other state; popovers commit only through their
    /// own select/apply actions.
    pub fn take_commit(&mut self) -> Option<PendingCommit> {
        match std::mem::take(&mut self.interaction) {
            CellInteraction::Editing { row_id, column_key } => Some(PendingCommit {
                row_id,
                column_key,
                value: std::mem::take(&mut self.edit_buffer),
            }),
            _ => None,
        }
    }

    /// Escape path: discard pending edits/popover and return to Idle.
    pub fn cancel(&mut self) {
        self.interaction = CellInteraction::Idle;
        self.edit_buffer.clear();
        self.date_draft = None;
    }

    pub fn begin_header_edit(&mut self, key: &str, current_header: &str) {
        self.editing_header_key = Some(key.to_string());
        self.header_buffer = current_header.to_string();
        self.header_needs_focus = true;
    }

    pub fn end_header_edit(&mut self) -> Option<(String, String)> {
        let key = self.editing_header_key.take()?;
        Some((key, std::mem::take(&mut self.header_buffer)))
    }

    /// Drag state is cleared unconditionally at drop, including on invalid
    /// drops, so no stuck highlight can survive a cancelled drag.
    pub fn clear_drag(&mut self) {
        self.dragged_column_key = None;
        self.drag_over_column_key = None;
    }
}
