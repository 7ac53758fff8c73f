// src/ui/elements/popups/date_popup.rs
// Month calendar popover for date columns. The draft only lands in the grid
// on Apply; Cancel and outside clicks discard it.

use bevy_egui::egui;
use chrono::{Datelike, NaiveDate};

use super::clamp_to_screen;
use crate::grid::events::UpdateCellEvent;
use crate::ui::elements::editor::main_editor::GridEventWriters;
use crate::ui::elements::editor::state::{GridEditorState, PopoverKind};

const WEEKDAY_LABELS: [&str; 7] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];
const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub fn show_date_popover(
    ctx: &egui::Context,
    state: &mut GridEditorState,
    writers: &mut GridEventWriters,
) {
    let Some((PopoverKind::Date, row_id, column_key)) = state.open_popover_cell() else {
        return;
    };

    let mut apply = false;
    let mut cancel = false;
    let pos = clamp_to_screen(ctx, state.popover_anchor, egui::vec2(230.0, 260.0));
    let area = egui::Area::new(egui::Id::new("date_popover"))
        .order(egui::Order::Foreground)
        .fixed_pos(pos)
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.set_min_width(210.0);

                ui.horizontal(|ui| {
                    if ui.button("◀").clicked() {
                        let (y, m) = previous_month(state.date_view_year, state.date_view_month);
                        state.date_view_year = y;
                        state.date_view_month = m;
                    }
                    let title = format!(
                        "{} {}",
                        MONTH_NAMES[(state.date_view_month - 1) as usize],
                        state.date_view_year
                    );
                    ui.with_layout(
                        egui::Layout::right_to_left(egui::Align::Center),
                        |ui| {
                            if ui.button("▶").clicked() {
                                let (y, m) =
                                    next_month(state.date_view_year, state.date_view_month);
                                state.date_view_year = y;
                                state.date_view_month = m;
                            }
                            ui.with_layout(
                                egui::Layout::centered_and_justified(
                                    egui::Direction::LeftToRight,
                                ),
                                |ui| {
                                    ui.strong(title);
                                },
                            );
                        },
                    );
                });
                ui.separator();

                egui::Grid::new("date_popover_days")
                    .num_columns(7)
                    .min_col_width(26.0)
                    .show(ui, |grid_ui| {
                        for label in WEEKDAY_LABELS {
                            grid_ui.weak(label);
                        }
                        grid_ui.end_row();

                        let year = state.date_view_year;
                        let month = state.date_view_month;
                        let leading = leading_blanks(year, month);
                        let days = days_in_month(year, month);
                        let mut slot = 0usize;
                        for _ in 0..leading {
                            grid_ui.label("");
                            slot += 1;
                        }
                        for day in 1..=days {
                            let date = NaiveDate::from_ymd_opt(year, month, day);
                            let selected = date.is_some() && date == state.date_draft;
                            let button = egui::Button::new(day.to_string()).small().selected(selected);
                            if grid_ui.add(button).clicked() {
                                state.date_draft = date;
                            }
                            slot += 1;
                            if slot % 7 == 0 {
                                grid_ui.end_row();
                            }
                        }
                    });
                ui.separator();

                ui.horizontal(|ui| {
                    if ui.button("Cancel").clicked() {
                        cancel = true;
                    }
                    let apply_button =
                        ui.add_enabled(state.date_draft.is_some(), egui::Button::new("Apply"));
                    if apply_button.clicked() {
                        apply = true;
                    }
                });
            });
        });

    if apply {
        if let Some(date) = state.date_draft {
            writers.update_cell.write(UpdateCellEvent {
                row_id,
                key: column_key,
                value: date.format("%Y-%m-%d").to_string(),
            });
        }
        state.cancel();
    } else if cancel || area.response.clicked_elsewhere() {
        state.cancel();
    }
}

fn previous_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

/// Number of empty leading cells in a Monday-first week grid.
fn leading_blanks(year: i32, month: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| d.weekday().num_days_from_monday())
        .unwrap_or(0)
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let (ny, nm) = next_month(year, month);
    NaiveDate::from_ymd_opt(ny, nm, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(31)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_navigation_wraps_at_year_boundaries() {
        assert_eq!(previous_month(2025, 1), (2024, 12));
        assert_eq!(next_month(2024, 12), (2025, 1));
        assert_eq!(next_month(2025, 6), (2025, 7));
    }

    #[test]
    fn month_lengths_handle_leap_years() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2025, 2), 28);
        assert_eq!(days_in_month(2025, 1), 31);
        assert_eq!(days_in_month(2025, 4), 30);
    }

    #[test]
    fn calendar_grid_starts_on_the_right_weekday() {
        // 2025-01-01 is a Wednesday.
        assert_eq!(leading_blanks(2025, 1), 2);
        // 2024-07-01 is a Monday.
        assert_eq!(leading_blanks(2024, 7), 0);
    }
}
