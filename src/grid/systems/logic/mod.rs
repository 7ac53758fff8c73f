// src/grid/systems/logic/mod.rs
pub mod add_column;
pub mod add_row;
pub mod delete_column;
pub mod duplicate_column;
pub mod history_ops;
pub mod move_column;
pub mod normalize;
pub mod rename_column;
pub mod reorder_column;
pub mod resize_column;
pub mod save_indicator;
pub mod sort_rows;
pub mod update_cell;

pub use add_column::handle_add_column_request;
pub use add_row::handle_add_row_request;
pub use delete_column::handle_delete_column_request;
pub use duplicate_column::handle_duplicate_column_request;
pub use history_ops::{handle_redo_request, handle_undo_request};
pub use move_column::handle_move_column_request;
pub use rename_column::handle_rename_column_request;
pub use reorder_column::handle_reorder_column_request;
pub use resize_column::handle_resize_column_request;
pub use save_indicator::tick_save_indicator;
pub use sort_rows::handle_sort_rows_request;
pub use update_cell::handle_cell_update;
