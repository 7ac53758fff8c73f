// src/grid/definitions/column_type.rs
use serde::{
    de::{self, Deserializer},
    Deserialize, Serialize,
};
use std::fmt;

/// Wire-level column type contract. The lowercase serialized form
/// (`"text"`, `"currency"`, ...) must stay stable if datasets are persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    #[default]
    Text,
    Number,
    Currency,
    Date,
    Status,
    Select,
    Checkbox,
    Url,
}

impl ColumnType {
    pub const ALL: [ColumnType; 8] = [
        ColumnType::Text,
        ColumnType::Number,
        ColumnType::Currency,
        ColumnType::Date,
        ColumnType::Status,
        ColumnType::Select,
        ColumnType::Checkbox,
        ColumnType::Url,
    ];

    /// Status and select columns edit through the option popover and never
    /// accept free text.
    pub fn uses_options(self) -> bool {
        matches!(self, ColumnType::Status | ColumnType::Select)
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ColumnType::Text => "Text",
            ColumnType::Number => "Number",
            ColumnType::Currency => "Currency",
            ColumnType::Date => "Date",
            ColumnType::Status => "Status",
            ColumnType::Select => "Select",
            ColumnType::Checkbox => "Checkbox",
            ColumnType::Url => "URL",
        };
        write!(f, "{}", label)
    }
}

// Custom Deserialize so datasets written with mixed-case type names still load.
impl<'de> Deserialize<'de> for ColumnType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_column_type(&s)
            .ok_or_else(|| de::Error::custom(format!("Unknown ColumnType '{}'", s)))
    }
}

pub fn parse_column_type(s: &str) -> Option<ColumnType> {
    match s.trim().to_ascii_lowercase().as_str() {
        "text" | "string" => Some(ColumnType::Text),
        "number" | "numeric" => Some(ColumnType::Number),
        "currency" | "money" => Some(ColumnType::Currency),
        "date" => Some(ColumnType::Date),
        "status" => Some(ColumnType::Status),
        "select" | "dropdown" => Some(ColumnType::Select),
        "checkbox" | "bool" | "boolean" => Some(ColumnType::Checkbox),
        "url" | "link" => Some(ColumnType::Url),
        _ => None,
    }
}
