// src/grid/definitions/mod.rs
pub mod column_definition;
pub mod column_type;
pub mod row;

pub use column_definition::{
    ColumnDefinition, GridMetadata, DEFAULT_COLUMN_WIDTH, MIN_COLUMN_WIDTH,
};
pub use column_type::{parse_column_type, ColumnType};
pub use row::{CellValue, RowRecord};

use thiserror::Error;

/// Operation-failure taxonomy. Leniency cases (bad numeric/url input,
/// out-of-bounds moves) never reach this enum; they coerce or no-op instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("Column '{0}' is protected and cannot be changed.")]
    ProtectedColumn(String),
    #[error("A column with key '{0}' already exists.")]
    DuplicateKey(String),
    #[error("Header '{0}' contains no usable characters for a key.")]
    InvalidHeader(String),
    #[error("Unknown column '{0}'.")]
    UnknownColumn(String),
    #[error("Unknown row '{0}'.")]
    UnknownRow(String),
}
