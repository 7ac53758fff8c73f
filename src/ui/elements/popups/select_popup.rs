// src/ui/elements/popups/select_popup.rs
// Option-list popover for status and select columns. Choosing an option
// commits immediately; clicking anywhere else discards.

use bevy::prelude::*;
use bevy_egui::egui;

use super::clamp_to_screen;
use crate::grid::events::UpdateCellEvent;
use crate::grid::resources::GridRegistry;
use crate::ui::common::draw_chip;
use crate::ui::elements::editor::main_editor::GridEventWriters;
use crate::ui::elements::editor::state::{GridEditorState, PopoverKind};

pub fn show_select_popover(
    ctx: &egui::Context,
    registry: &GridRegistry,
    state: &mut GridEditorState,
    writers: &mut GridEventWriters,
) {
    let Some((PopoverKind::Select, row_id, column_key)) = state.open_popover_cell() else {
        return;
    };
    let Some(column) = registry.metadata.column(&column_key) else {
        warn!("Select popover target column '{}' vanished.", column_key);
        state.cancel();
        return;
    };

    let mut chosen: Option<String> = None;
    let pos = clamp_to_screen(ctx, state.popover_anchor, egui::vec2(160.0, 200.0));
    let area = egui::Area::new(egui::Id::new("select_popover"))
        .order(egui::Order::Foreground)
        .fixed_pos(pos)
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.set_min_width(140.0);
                for option in &column.options {
                    if draw_chip(ui, column, option).clicked() {
                        chosen = Some(option.clone());
                    }
                }
                ui.separator();
                if ui.button("Clear").clicked() {
                    chosen = Some(String::new());
                }
            });
        });

    if let Some(value) = chosen {
        writers.update_cell.write(UpdateCellEvent {
            row_id,
            key: column_key,
            value,
        });
        state.cancel();
    } else if area.response.clicked_elsewhere() {
        state.cancel();
    }
}
