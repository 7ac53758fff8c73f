// src/ui/elements/popups/mod.rs
use bevy_egui::egui;

pub mod date_popup;
pub mod new_column_popup;
pub mod select_popup;

pub use date_popup::show_date_popover;
pub use new_column_popup::show_new_column_popup;
pub use select_popup::show_select_popover;

/// Keeps a popover anchored near its cell but fully on screen.
pub(crate) fn clamp_to_screen(
    ctx: &egui::Context,
    anchor: egui::Pos2,
    size: egui::Vec2,
) -> egui::Pos2 {
    let screen = ctx.screen_rect();
    egui::pos2(
        anchor.x.min(screen.right() - size.x).max(screen.left()),
        anchor.y.min(screen.bottom() - size.y).max(screen.top()),
    )
}
