// src/grid/mod.rs

pub mod definitions;
pub mod events;
pub mod history;
pub mod plugin;
pub mod resources;

pub(crate) mod systems;

pub use definitions::{CellValue, ColumnDefinition, ColumnType, GridMetadata, RowRecord};
pub use plugin::GridPlugin;
pub use resources::{GridRegistry, GridSeed};
