// src/ui/elements/popups/new_column_popup.rs
use bevy_egui::egui;

use crate::grid::definitions::ColumnType;
use crate::grid::events::RequestAddColumn;
use crate::ui::elements::editor::main_editor::GridEventWriters;
use crate::ui::elements::editor::state::GridEditorState;

pub fn show_new_column_popup(
    ctx: &egui::Context,
    state: &mut GridEditorState,
    writers: &mut GridEventWriters,
) {
    if !state.show_new_column_popup {
        return;
    }
    let mut open = state.show_new_column_popup;
    let mut submitted = false;
    let mut cancelled = false;

    egui::Window::new("Add Column")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Header:");
                let response = ui.text_edit_singleline(&mut state.new_column_header_input);
                if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    submitted = true;
                }
            });
            ui.horizontal(|ui| {
                ui.label("Type:");
                egui::ComboBox::from_id_salt("new_column_type")
                    .selected_text(state.new_column_type_select.to_string())
                    .show_ui(ui, |combo_ui| {
                        for t in ColumnType::ALL {
                            combo_ui.selectable_value(
                                &mut state.new_column_type_select,
                                t,
                                t.to_string(),
                            );
                        }
                    });
            });
            ui.separator();
            ui.horizontal(|ui| {
                let can_add = !state.new_column_header_input.trim().is_empty();
                if ui.add_enabled(can_add, egui::Button::new("Add")).clicked() {
                    submitted = true;
                }
                if ui.button("Cancel").clicked() {
                    cancelled = true;
                }
            });
        });

    if submitted && !state.new_column_header_input.trim().is_empty() {
        writers.add_column.write(RequestAddColumn {
            header: state.new_column_header_input.trim().to_string(),
            data_type: state.new_column_type_select,
        });
        open = false;
    }
    if cancelled {
        open = false;
    }
    if !open {
        state.show_new_column_popup = false;
        state.new_column_header_input.clear();
        state.new_column_type_select = ColumnType::Text;
    }
}
