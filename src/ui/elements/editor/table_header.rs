// src/ui/elements/editor/table_header.rs
// One header cell per column: inline rename, drag-to-reorder, a resize
// handle on the trailing edge and the column context menu. Everything here
// only emits request events; mutation happens in the logic handlers.

use bevy::prelude::*;
use bevy_egui::egui::{self, Color32, CursorIcon, Sense, Stroke};

use super::main_editor::GridEventWriters;
use super::state::GridEditorState;
use crate::grid::definitions::{ColumnDefinition, GridMetadata, MIN_COLUMN_WIDTH};
use crate::grid::events::{
    MoveDirection, RequestDeleteColumn, RequestDuplicateColumn, RequestMoveColumn,
    RequestRenameColumn, RequestReorderColumn, RequestResizeColumn, RequestSortRows,
    SortDirection,
};

pub const HEADER_HEIGHT: f32 = 24.0;
const RESIZE_HANDLE_WIDTH: f32 = 6.0;

/// Renders the header cell for `column` into a pre-sized region and handles
/// its interactions. `primary_released` is sampled once per frame by the
/// caller so drop detection is consistent across all header cells.
#[allow(clippy::too_many_arguments)]
pub fn grid_column_header(
    ui: &mut egui::Ui,
    column: &ColumnDefinition,
    metadata: &GridMetadata,
    state: &mut GridEditorState,
    writers: &mut GridEventWriters,
    primary_released: bool,
) {
    let full_rect = ui.max_rect();
    let handle_rect = egui::Rect::from_min_max(
        egui::pos2(full_rect.right() - RESIZE_HANDLE_WIDTH, full_rect.top()),
        full_rect.right_bottom(),
    );
    let label_rect = egui::Rect::from_min_max(
        full_rect.left_top(),
        egui::pos2(full_rect.right() - RESIZE_HANDLE_WIDTH, full_rect.bottom()),
    );

    if state.editing_header_key.as_deref() == Some(column.key.as_str()) {
        header_rename_editor(ui, label_rect, column, state, writers);
    } else {
        header_label(
            ui,
            label_rect,
            column,
            metadata,
            state,
            writers,
            primary_released,
        );
    }

    // Resize handle: a thin drag strip on the trailing edge.
    let handle_response = ui.interact(
        handle_rect,
        ui.id().with(("resize", &column.key)),
        Sense::drag(),
    );
    if handle_response.hovered() || handle_response.dragged() {
        ui.ctx().set_cursor_icon(CursorIcon::ResizeHorizontal);
        ui.painter().vline(
            handle_rect.center().x,
            handle_rect.y_range(),
            Stroke::new(1.0, ui.visuals().widgets.active.bg_stroke.color),
        );
    }
    if handle_response.dragged() {
        let proposed = (column.width + handle_response.drag_delta().x).max(MIN_COLUMN_WIDTH);
        if (proposed - column.width).abs() > f32::EPSILON {
            writers.resize_column.write(RequestResizeColumn {
                key: column.key.clone(),
                new_width: proposed,
            });
        }
    }
}

fn header_rename_editor(
    ui: &mut egui::Ui,
    rect: egui::Rect,
    column: &ColumnDefinition,
    state: &mut GridEditorState,
    writers: &mut GridEventWriters,
) {
    let mut commit = false;
    let mut discard = false;
    ui.allocate_new_ui(egui::UiBuilder::new().max_rect(rect), |edit_ui| {
        let response = edit_ui.add_sized(
            edit_ui.available_size(),
            egui::TextEdit::singleline(&mut state.header_buffer),
        );
        if state.header_needs_focus {
            response.request_focus();
            state.header_needs_focus = false;
        }
        if edit_ui.input(|i| i.key_pressed(egui::Key::Escape)) {
            discard = true;
        } else if response.lost_focus() {
            commit = true;
        }
    });
    if discard {
        state.editing_header_key = None;
        state.header_buffer.clear();
    } else if commit {
        if let Some((key, new_header)) = state.end_header_edit() {
            if new_header.trim() != column.header {
                writers.rename_column.write(RequestRenameColumn { key, new_header });
            }
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn header_label(
    ui: &mut egui::Ui,
    rect: egui::Rect,
    column: &ColumnDefinition,
    metadata: &GridMetadata,
    state: &mut GridEditorState,
    writers: &mut GridEventWriters,
    primary_released: bool,
) {
    let response = ui.interact(
        rect,
        ui.id().with(("header", &column.key)),
        Sense::click_and_drag(),
    );

    let is_drop_target = state.drag_over_column_key.as_deref() == Some(column.key.as_str())
        && state.dragged_column_key.as_deref() != Some(column.key.as_str());
    if is_drop_target {
        ui.painter().vline(
            rect.left() + 1.0,
            rect.y_range(),
            Stroke::new(2.0, Color32::GREEN),
        );
    }

    ui.allocate_new_ui(egui::UiBuilder::new().max_rect(rect), |label_ui| {
        label_ui.horizontal(|ui_h| {
            ui_h.add_space(4.0);
            let mut text = egui::RichText::new(&column.header).strong();
            if column.protected {
                text = text.color(ui_h.visuals().weak_text_color());
            }
            ui_h.label(text);
        });
    });

    if response.double_clicked() && !column.protected {
        state.begin_header_edit(&column.key, &column.header);
    }

    // Drag to reorder. Protected columns are anchors and never drag sources.
    if response.drag_started() && !column.protected {
        state.dragged_column_key = Some(column.key.clone());
    }
    if state.dragged_column_key.is_some() && response.hovered() {
        state.drag_over_column_key = Some(column.key.clone());
    }
    if primary_released {
        if let (Some(from), true) = (state.dragged_column_key.clone(), response.hovered()) {
            if from != column.key {
                writers.reorder_column.write(RequestReorderColumn {
                    from_key: from,
                    to_key: column.key.clone(),
                });
            }
        }
    }

    response.context_menu(|menu_ui| {
        column_context_menu(menu_ui, column, metadata, state, writers);
    });
}

fn column_context_menu(
    ui: &mut egui::Ui,
    column: &ColumnDefinition,
    metadata: &GridMetadata,
    state: &mut GridEditorState,
    writers: &mut GridEventWriters,
) {
    let structural_ok = !column.protected;

    if ui
        .add_enabled(structural_ok, egui::Button::new("Rename"))
        .clicked()
    {
        state.begin_header_edit(&column.key, &column.header);
        ui.close_menu();
    }
    if ui.button("Duplicate").clicked() {
        writers.duplicate_column.write(RequestDuplicateColumn {
            key: column.key.clone(),
        });
        ui.close_menu();
    }

    ui.separator();

    // Moves clamp to the column's own partition; the handler drops anything
    // that would cross the frozen boundary.
    let index = metadata.index_of(&column.key).unwrap_or(0);
    let bounds = metadata.partition_bounds(index);
    let can_move_left = structural_ok
        && index > bounds.start
        && !metadata.columns[index - 1].protected;
    let can_move_right = structural_ok && index + 1 < bounds.end;
    if ui
        .add_enabled(can_move_left, egui::Button::new("Move left"))
        .clicked()
    {
        writers.move_column.write(RequestMoveColumn {
            key: column.key.clone(),
            direction: MoveDirection::Left,
        });
        ui.close_menu();
    }
    if ui
        .add_enabled(can_move_right, egui::Button::new("Move right"))
        .clicked()
    {
        writers.move_column.write(RequestMoveColumn {
            key: column.key.clone(),
            direction: MoveDirection::Right,
        });
        ui.close_menu();
    }

    ui.separator();

    if ui.button("Sort ascending").clicked() {
        writers.sort_rows.write(RequestSortRows {
            key: column.key.clone(),
            direction: SortDirection::Ascending,
        });
        ui.close_menu();
    }
    if ui.button("Sort descending").clicked() {
        writers.sort_rows.write(RequestSortRows {
            key: column.key.clone(),
            direction: SortDirection::Descending,
        });
        ui.close_menu();
    }

    ui.separator();

    if ui
        .add_enabled(structural_ok, egui::Button::new("Delete column"))
        .clicked()
    {
        debug!("Delete requested for column '{}'", column.key);
        writers.delete_column.write(RequestDeleteColumn {
            key: column.key.clone(),
        });
        ui.close_menu();
    }
}
