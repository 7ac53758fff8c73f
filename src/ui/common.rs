// src/ui/common.rs
// Shared cell presentation helpers: the per-type capability table that maps a
// column type to its click behavior, plus display/color formatting used by
// both the table body and the popovers.

use bevy_egui::egui::{self, Color32};

use crate::grid::definitions::{CellValue, ColumnDefinition, ColumnType};
use crate::grid::systems::logic::normalize::format_date_display;

/// What a single click on a cell means, derived from the column type.
/// Every renderer dispatch site goes through this table instead of matching
/// on `ColumnType` directly, so adding a type means touching one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickIntent {
    /// Swap the cell for an inline text editor.
    BeginEdit,
    /// Open the option-list popover.
    OpenSelect,
    /// Open the calendar popover.
    OpenDate,
    /// Flip the boolean in place, no edit mode involved.
    Toggle,
    /// First click opens the link; editing takes a second click.
    OpenLink,
}

pub fn click_intent(data_type: ColumnType) -> ClickIntent {
    match data_type {
        ColumnType::Text | ColumnType::Number | ColumnType::Currency => ClickIntent::BeginEdit,
        ColumnType::Status | ColumnType::Select => ClickIntent::OpenSelect,
        ColumnType::Date => ClickIntent::OpenDate,
        ColumnType::Checkbox => ClickIntent::Toggle,
        ColumnType::Url => ClickIntent::OpenLink,
    }
}

/// Rendered form of a stored value. Dates are stored ISO and displayed
/// "Jan 5, 2025"; currency is stored pre-formatted; everything else renders
/// its plain text.
pub fn cell_display_text(column: &ColumnDefinition, value: &CellValue) -> String {
    match column.data_type {
        ColumnType::Date => format_date_display(&value.display_text()),
        _ => value.display_text(),
    }
}

/// The buffer a text editor should start from. Currency cells strip back to
/// the bare number so the user edits "1234.50", not "$1,234.50".
pub fn cell_edit_text(column: &ColumnDefinition, value: &CellValue) -> String {
    match column.data_type {
        ColumnType::Currency => {
            let raw = value.display_text();
            raw.chars()
                .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
                .collect()
        }
        _ => value.display_text(),
    }
}

/// Parses "#RRGGBB" (or "RRGGBB"). Malformed color strings fall back to a
/// neutral gray rather than erroring.
pub fn parse_hex_color(hex: &str) -> Color32 {
    let digits = hex.trim().trim_start_matches('#');
    if digits.len() == 6 {
        if let Ok(packed) = u32::from_str_radix(digits, 16) {
            return Color32::from_rgb(
                ((packed >> 16) & 0xFF) as u8,
                ((packed >> 8) & 0xFF) as u8,
                (packed & 0xFF) as u8,
            );
        }
    }
    Color32::from_gray(120)
}

/// Picks black or white text against a chip background using perceived
/// luminance (0.299 R + 0.587 G + 0.114 B).
pub fn chip_text_color(background: Color32) -> Color32 {
    let luminance = 0.299 * background.r() as f32
        + 0.587 * background.g() as f32
        + 0.114 * background.b() as f32;
    if luminance > 128.0 {
        Color32::BLACK
    } else {
        Color32::WHITE
    }
}

/// Background/foreground pair for a status or select chip. Options with no
/// configured color get the neutral fallback.
pub fn chip_colors(column: &ColumnDefinition, option: &str) -> (Color32, Color32) {
    let background = column
        .colors
        .get(option)
        .map(|hex| parse_hex_color(hex))
        .unwrap_or_else(|| Color32::from_gray(120));
    (background, chip_text_color(background))
}

/// Draws a rounded pill with the option text. Used in cells and in the
/// select popover rows.
pub fn draw_chip(ui: &mut egui::Ui, column: &ColumnDefinition, option: &str) -> egui::Response {
    let (fill, text_color) = chip_colors(column, option);
    ui.add(
        egui::Button::new(egui::RichText::new(option).color(text_color).small())
            .fill(fill)
            .corner_radius(egui::CornerRadius::same(8))
            .min_size(egui::vec2(0.0, 18.0)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::definitions::ColumnDefinition;

    #[test]
    fn every_type_maps_to_one_intent() {
        assert_eq!(click_intent(ColumnType::Text), ClickIntent::BeginEdit);
        assert_eq!(click_intent(ColumnType::Number), ClickIntent::BeginEdit);
        assert_eq!(click_intent(ColumnType::Currency), ClickIntent::BeginEdit);
        assert_eq!(click_intent(ColumnType::Status), ClickIntent::OpenSelect);
        assert_eq!(click_intent(ColumnType::Select), ClickIntent::OpenSelect);
        assert_eq!(click_intent(ColumnType::Date), ClickIntent::OpenDate);
        assert_eq!(click_intent(ColumnType::Checkbox), ClickIntent::Toggle);
        assert_eq!(click_intent(ColumnType::Url), ClickIntent::OpenLink);
    }

    #[test]
    fn hex_colors_parse_with_and_without_hash() {
        assert_eq!(parse_hex_color("#22c55e"), Color32::from_rgb(0x22, 0xc5, 0x5e));
        assert_eq!(parse_hex_color("ef4444"), Color32::from_rgb(0xef, 0x44, 0x44));
        assert_eq!(parse_hex_color("nope"), Color32::from_gray(120));
    }

    #[test]
    fn chip_text_contrast_flips_on_luminance() {
        assert_eq!(chip_text_color(Color32::from_rgb(250, 250, 210)), Color32::BLACK);
        assert_eq!(chip_text_color(Color32::from_rgb(30, 30, 90)), Color32::WHITE);
    }

    #[test]
    fn dates_display_friendly_but_edit_raw() {
        let col = ColumnDefinition::new("close_date", "Close Date", ColumnType::Date);
        let stored = CellValue::Text("2025-01-05".into());
        assert_eq!(cell_display_text(&col, &stored), "Jan 5, 2025");
        assert_eq!(cell_edit_text(&col, &stored), "2025-01-05");
    }

    #[test]
    fn currency_edits_strip_decoration() {
        let col = ColumnDefinition::new("deal_size", "Deal Size", ColumnType::Currency);
        let stored = CellValue::Text("$1,234.50".into());
        assert_eq!(cell_edit_text(&col, &stored), "1234.50");
        assert_eq!(cell_display_text(&col, &stored), "$1,234.50");
    }
}
