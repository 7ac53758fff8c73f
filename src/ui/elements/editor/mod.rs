// src/ui/elements/editor/mod.rs
pub mod main_editor;
pub mod state;
pub mod table_body;
pub mod table_header;

pub use main_editor::{grid_editor_ui, GridEventWriters};
