// src/ui/elements/editor/main_editor.rs
use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};
use egui_extras::{Size, StripBuilder};

use super::state::{CellInteraction, GridEditorState};
use super::table_body::{grid_cell, ROW_HEIGHT};
use super::table_header::{grid_column_header, HEADER_HEIGHT};
use crate::grid::events::{
    GridDataModifiedEvent, RequestAddColumn, RequestAddRow, RequestDeleteColumn,
    RequestDuplicateColumn, RequestMoveColumn, RequestRedo, RequestRenameColumn,
    RequestReorderColumn, RequestResizeColumn, RequestSortRows, RequestUndo, UpdateCellEvent,
};
use crate::grid::history::GridHistory;
use crate::grid::resources::{GridRegistry, SaveIndicator};
use crate::ui::elements::popups::{show_date_popover, show_new_column_popup, show_select_popover};
use crate::ui::UiFeedbackState;

/// All mutation-request writers the editor UI can emit, bundled so render
/// helpers take one parameter instead of a dozen.
#[derive(SystemParam)]
pub struct GridEventWriters<'w> {
    pub add_column: EventWriter<'w, RequestAddColumn>,
    pub rename_column: EventWriter<'w, RequestRenameColumn>,
    pub delete_column: EventWriter<'w, RequestDeleteColumn>,
    pub duplicate_column: EventWriter<'w, RequestDuplicateColumn>,
    pub move_column: EventWriter<'w, RequestMoveColumn>,
    pub reorder_column: EventWriter<'w, RequestReorderColumn>,
    pub resize_column: EventWriter<'w, RequestResizeColumn>,
    pub sort_rows: EventWriter<'w, RequestSortRows>,
    pub update_cell: EventWriter<'w, UpdateCellEvent>,
    pub add_row: EventWriter<'w, RequestAddRow>,
    pub undo: EventWriter<'w, RequestUndo>,
    pub redo: EventWriter<'w, RequestRedo>,
}

#[allow(clippy::too_many_arguments)]
pub fn grid_editor_ui(
    mut contexts: EguiContexts,
    registry: Res<GridRegistry>,
    history: Res<GridHistory>,
    indicator: Res<SaveIndicator>,
    ui_feedback: Res<UiFeedbackState>,
    mut state: ResMut<GridEditorState>,
    mut writers: GridEventWriters,
    mut modified_events: EventReader<GridDataModifiedEvent>,
) {
    let ctx = contexts.ctx_mut();

    // Structural changes (column ops, undo/redo) can strand the interaction
    // state on a cell that no longer resolves; drop it rather than render a
    // ghost editor.
    if !modified_events.is_empty() {
        modified_events.clear();
        let stale = match &state.interaction {
            CellInteraction::Editing { row_id, column_key }
            | CellInteraction::Popover {
                row_id, column_key, ..
            } => {
                registry.row(row_id).is_none() || !registry.metadata.has_key(column_key)
            }
            CellInteraction::Idle => false,
        };
        if stale {
            debug!("Interaction target vanished after registry change; resetting.");
            state.cancel();
        }
    }

    handle_keyboard_shortcuts(ctx, &mut state, &mut writers);

    let primary_released = ctx.input(|i| i.pointer.primary_released());

    egui::CentralPanel::default().show(ctx, |ui| {
        show_toolbar(ui, &history, &ui_feedback, &mut state, &mut writers);
        ui.separator();

        let metadata = &registry.metadata;
        if metadata.columns.is_empty() {
            ui.vertical_centered(|ui| {
                ui.label("No columns. Use 'Add Column' to get started.");
            });
            return;
        }

        // Fixed header band pinned above the scrolling body. The band's
        // scrollable half mirrors the body's horizontal offset (from last
        // frame; the body region drives).
        StripBuilder::new(ui)
            .size(Size::exact(HEADER_HEIGHT))
            .size(Size::remainder())
            .vertical(|mut strip| {
                strip.cell(|header_ui| {
                    header_ui.horizontal(|ui| {
                        ui.spacing_mut().item_spacing.x = 0.0;
                        for column in metadata.frozen_columns() {
                            sized_region(ui, column.width, HEADER_HEIGHT, |cell_ui| {
                                grid_column_header(
                                    cell_ui,
                                    column,
                                    metadata,
                                    &mut state,
                                    &mut writers,
                                    primary_released,
                                );
                            });
                        }
                        egui::ScrollArea::horizontal()
                            .id_salt("grid_header_scroll")
                            .scroll_bar_visibility(
                                egui::scroll_area::ScrollBarVisibility::AlwaysHidden,
                            )
                            .scroll_offset(egui::vec2(state.scroll_x, 0.0))
                            .auto_shrink([false, true])
                            .show(ui, |scroll_ui| {
                                scroll_ui.horizontal(|row_ui| {
                                    row_ui.spacing_mut().item_spacing.x = 0.0;
                                    for column in metadata.scrollable_columns() {
                                        sized_region(row_ui, column.width, HEADER_HEIGHT, |cell_ui| {
                                            grid_column_header(
                                                cell_ui,
                                                column,
                                                metadata,
                                                &mut state,
                                                &mut writers,
                                                primary_released,
                                            );
                                        });
                                    }
                                });
                            });
                    });
                });
                strip.cell(|body_cell_ui| {
                    egui::ScrollArea::vertical()
                        .id_salt("grid_body_vertical")
                        .auto_shrink([false; 2])
                        .show(body_cell_ui, |body_ui| {
                            body_ui.horizontal_top(|split_ui| {
                                split_ui.spacing_mut().item_spacing = egui::Vec2::ZERO;

                                // Frozen block stays put while the right block
                                // scrolls.
                                split_ui.vertical(|frozen_ui| {
                                    for row in &registry.rows {
                                        frozen_ui.horizontal(|row_ui| {
                                            row_ui.spacing_mut().item_spacing.x = 0.0;
                                            for column in metadata.frozen_columns() {
                                                sized_region(row_ui, column.width, ROW_HEIGHT, |cell_ui| {
                                                    grid_cell(
                                                        cell_ui,
                                                        row,
                                                        column,
                                                        &mut state,
                                                        &mut writers,
                                                        &indicator,
                                                    );
                                                });
                                            }
                                        });
                                    }
                                });

                                let output = egui::ScrollArea::horizontal()
                                    .id_salt("grid_body_scroll")
                                    .auto_shrink([false, true])
                                    .show(split_ui, |scroll_ui| {
                                        scroll_ui.vertical(|rows_ui| {
                                            for row in &registry.rows {
                                                rows_ui.horizontal(|row_ui| {
                                                    row_ui.spacing_mut().item_spacing.x = 0.0;
                                                    for column in metadata.scrollable_columns() {
                                                        sized_region(
                                                            row_ui,
                                                            column.width,
                                                            ROW_HEIGHT,
                                                            |cell_ui| {
                                                                grid_cell(
                                                                    cell_ui,
                                                                    row,
                                                                    column,
                                                                    &mut state,
                                                                    &mut writers,
                                                                    &indicator,
                                                                );
                                                            },
                                                        );
                                                    }
                                                });
                                            }
                                        });
                                    });
                                state.scroll_x = output.state.offset.x;
                            });
                        });
                });
            });
    });

    // A release anywhere ends the drag, valid drop target or not, so a
    // cancelled drag can't leave a stuck highlight.
    if primary_released {
        state.clear_drag();
    }

    show_select_popover(ctx, &registry, &mut state, &mut writers);
    show_date_popover(ctx, &mut state, &mut writers);
    show_new_column_popup(ctx, &mut state, &mut writers);
}

fn handle_keyboard_shortcuts(
    ctx: &egui::Context,
    state: &mut GridEditorState,
    writers: &mut GridEventWriters,
) {
    // Shortcuts stay off while a text widget owns the keyboard, so Ctrl+Z
    // inside an inline editor edits text instead of rolling the grid back.
    if !ctx.wants_keyboard_input() {
        let redo_primary =
            egui::KeyboardShortcut::new(egui::Modifiers::COMMAND | egui::Modifiers::SHIFT, egui::Key::Z);
        let redo_alt = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Y);
        let undo = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Z);

        if ctx.input_mut(|i| i.consume_shortcut(&redo_primary) || i.consume_shortcut(&redo_alt)) {
            writers.redo.write(RequestRedo);
        } else if ctx.input_mut(|i| i.consume_shortcut(&undo)) {
            writers.undo.write(RequestUndo);
        }

        if ctx.input(|i| i.key_pressed(egui::Key::Escape))
            && state.interaction != CellInteraction::Idle
        {
            state.cancel();
        }
    }
}

fn show_toolbar(
    ui: &mut egui::Ui,
    history: &GridHistory,
    ui_feedback: &UiFeedbackState,
    state: &mut GridEditorState,
    writers: &mut GridEventWriters,
) {
    ui.horizontal(|ui| {
        if ui.button("➕ Add Item").clicked() {
            writers.add_row.write(RequestAddRow);
        }
        if ui.button("➕ Add Column").clicked() {
            state.show_new_column_popup = true;
            state.new_column_header_input.clear();
        }
        ui.separator();
        if ui
            .add_enabled(history.can_undo(), egui::Button::new("⟲ Undo"))
            .clicked()
        {
            writers.undo.write(RequestUndo);
        }
        if ui
            .add_enabled(history.can_redo(), egui::Button::new("⟳ Redo"))
            .clicked()
        {
            writers.redo.write(RequestRedo);
        }

        if !ui_feedback.last_message.is_empty() {
            ui.separator();
            let text_color = if ui_feedback.is_error {
                egui::Color32::RED
            } else {
                ui.style().visuals.text_color()
            };
            ui.colored_label(text_color, &ui_feedback.last_message);
        }
    });
}

/// Allocates a fixed-size child region and renders into it. All grid cells
/// go through this so row heights line up across the frozen/scrollable split.
fn sized_region(ui: &mut egui::Ui, width: f32, height: f32, add_contents: impl FnOnce(&mut egui::Ui)) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, height), egui::Sense::hover());
    ui.allocate_new_ui(egui::UiBuilder::new().max_rect(rect), add_contents);
}
