// src/ui/elements/editor/table_body.rs
// Per-cell rendering and click dispatch. A cell's click behavior comes from
// the capability table in ui::common; the cell never matches on ColumnType
// itself beyond cosmetic choices.

use bevy::prelude::*;
use bevy_egui::egui::{self, Align, Color32, Layout, Sense};
use chrono::Datelike;

use super::main_editor::GridEventWriters;
use super::state::{GridEditorState, PendingCommit, PopoverKind};
use crate::grid::definitions::{CellValue, ColumnDefinition, RowRecord};
use crate::grid::events::UpdateCellEvent;
use crate::grid::resources::SaveIndicator;
use crate::grid::systems::logic::normalize::parse_date;
use crate::ui::common::{
    cell_display_text, cell_edit_text, click_intent, draw_chip, ClickIntent,
};

pub const ROW_HEIGHT: f32 = 26.0;

/// Renders one cell into a pre-sized region.
pub fn grid_cell(
    ui: &mut egui::Ui,
    row: &RowRecord,
    column: &ColumnDefinition,
    state: &mut GridEditorState,
    writers: &mut GridEventWriters,
    indicator: &SaveIndicator,
) {
    if state.is_editing(&row.id, &column.key) {
        cell_text_editor(ui, row, column, state, writers);
        return;
    }

    let value = row.value(&column.key);
    let display_text = cell_display_text(column, &value);
    let saved = indicator.is_active(&row.id, &column.key);

    let response = ui.interact(
        ui.max_rect(),
        ui.id().with(("cell", &row.id, &column.key)),
        Sense::click(),
    );

    // The chip and checkbox are widgets of their own and eat clicks the cell
    // region would otherwise see.
    let mut chip_clicked = false;
    let mut checkbox_toggled = false;
    ui.allocate_new_ui(egui::UiBuilder::new().max_rect(ui.max_rect()), |cell_ui| {
        cell_ui.with_layout(Layout::left_to_right(Align::Center), |ui_h| {
            ui_h.add_space(4.0);
            match click_intent(column.data_type) {
                ClickIntent::OpenSelect if !display_text.is_empty() => {
                    chip_clicked = draw_chip(ui_h, column, &display_text).clicked();
                }
                ClickIntent::Toggle => {
                    let mut checked = value.as_bool();
                    let box_response =
                        ui_h.add_enabled(column.editable, egui::Checkbox::without_text(&mut checked));
                    if box_response.changed() {
                        checkbox_toggled = true;
                        writers.update_cell.write(UpdateCellEvent {
                            row_id: row.id.clone(),
                            key: column.key.clone(),
                            value: checked.to_string(),
                        });
                    }
                }
                ClickIntent::OpenLink if !display_text.is_empty() => {
                    ui_h.label(
                        egui::RichText::new(&display_text)
                            .color(ui_h.visuals().hyperlink_color)
                            .underline(),
                    );
                }
                _ => {
                    ui_h.label(&display_text);
                }
            }
            if saved {
                ui_h.with_layout(Layout::right_to_left(Align::Center), |mark_ui| {
                    mark_ui.add_space(2.0);
                    mark_ui.colored_label(Color32::from_rgb(0x22, 0xc5, 0x5e), "✔");
                });
            }
        });
    });

    if (!response.clicked() && !chip_clicked) || !column.editable {
        return;
    }

    let pending = match click_intent(column.data_type) {
        ClickIntent::BeginEdit => {
            state.begin_edit(&row.id, &column.key, cell_edit_text(column, &value))
        }
        ClickIntent::OpenSelect => state.open_popover(
            PopoverKind::Select,
            &row.id,
            &column.key,
            response.rect.left_bottom(),
        ),
        ClickIntent::OpenDate => {
            let stored = parse_date(&value.display_text());
            state.date_draft = stored;
            if let Some(date) = stored {
                state.date_view_year = date.year();
                state.date_view_month = date.month();
            }
            state.open_popover(
                PopoverKind::Date,
                &row.id,
                &column.key,
                response.rect.left_bottom(),
            )
        }
        ClickIntent::Toggle => {
            // Checkbox cells toggle from a click anywhere on the cell, not
            // just the box. Skip when the box widget already consumed the
            // same click.
            if !checkbox_toggled {
                writers.update_cell.write(UpdateCellEvent {
                    row_id: row.id.clone(),
                    key: column.key.clone(),
                    value: toggled_cell_value(&value),
                });
            }
            None
        }
        ClickIntent::OpenLink => {
            // First click opens the link, second click (cell already active)
            // enters edit mode.
            let this_cell = (row.id.clone(), column.key.clone());
            if state.active_cell.as_ref() == Some(&this_cell) || display_text.is_empty() {
                state.begin_edit(&row.id, &column.key, cell_edit_text(column, &value))
            } else {
                if let Err(err) = open::that(&display_text) {
                    warn!("Failed to open '{}': {}", display_text, err);
                }
                state.active_cell = Some(this_cell);
                None
            }
        }
    };
    flush_pending(pending, writers);
}

fn cell_text_editor(
    ui: &mut egui::Ui,
    row: &RowRecord,
    column: &ColumnDefinition,
    state: &mut GridEditorState,
    writers: &mut GridEventWriters,
) {
    let response = ui.add_sized(
        ui.available_size(),
        egui::TextEdit::singleline(&mut state.edit_buffer),
    );
    if state.edit_needs_focus {
        response.request_focus();
        state.edit_needs_focus = false;
    }
    if ui.input(|i| i.key_pressed(egui::Key::Escape)) {
        trace!("Discarding edit for cell [{}/{}]", row.id, column.key);
        state.cancel();
        return;
    }
    // Enter and focus loss both commit; Escape above discards.
    let enter = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
    let clicked_away = response.clicked_elsewhere();
    if enter || clicked_away {
        trace!("Committing edit for cell [{}/{}]", row.id, column.key);
        flush_pending(state.take_commit(), writers);
    }
}

/// Writes back a buffered edit that deactivated this frame.
pub fn flush_pending(pending: Option<PendingCommit>, writers: &mut GridEventWriters) {
    if let Some(commit) = pending {
        writers.update_cell.write(UpdateCellEvent {
            row_id: commit.row_id,
            key: commit.column_key,
            value: commit.value,
        });
    }
}

/// Replacement value committed when a click lands anywhere on a checkbox
/// cell outside the box widget itself.
pub fn toggled_cell_value(current: &CellValue) -> String {
    (!current.as_bool()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_wide_click_negates_the_stored_value() {
        assert_eq!(toggled_cell_value(&CellValue::Bool(false)), "true");
        assert_eq!(toggled_cell_value(&CellValue::Bool(true)), "false");
        // Coerced text forms flip off their interpreted value.
        assert_eq!(toggled_cell_value(&CellValue::Text("yes".into())), "false");
        assert_eq!(toggled_cell_value(&CellValue::Text(String::new())), "true");
    }
}
