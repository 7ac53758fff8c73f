// src/grid/definitions/row.rs
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::column_type::ColumnType;

/// Dynamically typed cell payload. Untagged so seeded JSON reads naturally
/// (`"Acme"`, `1234.5`, `true`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl Default for CellValue {
    fn default() -> Self {
        CellValue::Text(String::new())
    }
}

impl CellValue {
    /// Back-fill default when a column is added: checkbox cells start false,
    /// everything else starts empty.
    pub fn default_for(data_type: ColumnType) -> Self {
        match data_type {
            ColumnType::Checkbox => CellValue::Bool(false),
            _ => CellValue::Text(String::new()),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Text(s) if s.is_empty())
    }

    pub fn as_bool(&self) -> bool {
        match self {
            CellValue::Bool(b) => *b,
            CellValue::Number(n) => *n != 0.0,
            CellValue::Text(s) => matches!(s.trim(), "true" | "yes" | "1"),
        }
    }

    /// Raw textual form, used for editing buffers and sort comparisons.
    pub fn display_text(&self) -> String {
        match self {
            CellValue::Text(s) => s.clone(),
            CellValue::Bool(b) => b.to_string(),
            CellValue::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{}", *n as i64)
                } else {
                    format!("{}", n)
                }
            }
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RowRecord {
    /// Stable identity, generated (uuid v4) when the seed omits it.
    pub id: String,
    /// Open map from column key to value. Every key in the column registry
    /// has an entry here; the operation handlers maintain that invariant.
    #[serde(default)]
    pub cells: HashMap<String, CellValue>,
}

impl RowRecord {
    pub fn with_id(id: impl Into<String>) -> Self {
        RowRecord {
            id: id.into(),
            cells: HashMap::new(),
        }
    }

    pub fn value(&self, key: &str) -> CellValue {
        self.cells.get(key).cloned().unwrap_or_default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: CellValue) {
        self.cells.insert(key.into(), value);
    }
}
