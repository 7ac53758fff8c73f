// src/grid/definitions/column_definition.rs
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::column_type::ColumnType;

pub const DEFAULT_COLUMN_WIDTH: f32 = 150.0;
pub const MIN_COLUMN_WIDTH: f32 = 40.0;

fn default_true() -> bool {
    true
}

fn default_width() -> f32 {
    DEFAULT_COLUMN_WIDTH
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnDefinition {
    /// Immutable identity, unique within the grid. Derived from the header
    /// when the column is created (see `slugify_key`).
    pub key: String,
    pub header: String,
    #[serde(default)]
    pub data_type: ColumnType,
    #[serde(default = "default_true")]
    pub editable: bool,
    /// Ordered option list for status/select columns.
    #[serde(default)]
    pub options: Vec<String>,
    /// Optional option -> hex color map ("#RRGGBB"), status columns only.
    #[serde(default)]
    pub colors: HashMap<String, String>,
    /// Pinned to the leading edge, outside the horizontal scroll region.
    #[serde(default)]
    pub frozen: bool,
    /// Structural protected-column marker: cannot be deleted, renamed or
    /// moved. Domain policy, never a key-string comparison.
    #[serde(default)]
    pub protected: bool,
    #[serde(default = "default_width")]
    pub width: f32,
}

impl ColumnDefinition {
    pub fn new(key: impl Into<String>, header: impl Into<String>, data_type: ColumnType) -> Self {
        ColumnDefinition {
            key: key.into(),
            header: header.into(),
            data_type,
            editable: true,
            options: Vec::new(),
            colors: HashMap::new(),
            frozen: false,
            protected: false,
            width: DEFAULT_COLUMN_WIDTH,
        }
    }

    pub fn with_options(mut self, options: Vec<String>) -> Self {
        self.options = options;
        self
    }

    pub fn with_colors(mut self, colors: HashMap<String, String>) -> Self {
        self.colors = colors;
        self
    }
}

/// Ordered column registry. Invariant: the frozen partition is stored as a
/// prefix of `columns` (normalized on load, relative order preserved), so the
/// frozen/scrollable partition is derivable as a split index and never stored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GridMetadata {
    pub columns: Vec<ColumnDefinition>,
}

impl GridMetadata {
    pub fn new(mut columns: Vec<ColumnDefinition>) -> Self {
        // Stable partition: frozen columns first, both halves keep their
        // relative order.
        let (frozen, scrollable): (Vec<_>, Vec<_>) =
            columns.drain(..).partition(|c| c.frozen);
        let mut ordered = frozen;
        ordered.extend(scrollable);
        GridMetadata { columns: ordered }
    }

    pub fn index_of(&self, key: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.key == key)
    }

    pub fn column(&self, key: &str) -> Option<&ColumnDefinition> {
        self.columns.iter().find(|c| c.key == key)
    }

    pub fn column_mut(&mut self, key: &str) -> Option<&mut ColumnDefinition> {
        self.columns.iter_mut().find(|c| c.key == key)
    }

    pub fn has_key(&self, key: &str) -> bool {
        self.index_of(key).is_some()
    }

    /// Number of leading frozen columns (the partition split index).
    pub fn frozen_len(&self) -> usize {
        self.columns.iter().take_while(|c| c.frozen).count()
    }

    pub fn frozen_columns(&self) -> &[ColumnDefinition] {
        &self.columns[..self.frozen_len()]
    }

    pub fn scrollable_columns(&self) -> &[ColumnDefinition] {
        &self.columns[self.frozen_len()..]
    }

    /// Index range of the partition containing `index`.
    pub fn partition_bounds(&self, index: usize) -> std::ops::Range<usize> {
        let split = self.frozen_len();
        if index < split {
            0..split
        } else {
            split..self.columns.len()
        }
    }

    pub fn is_protected(&self, key: &str) -> bool {
        self.column(key).map(|c| c.protected).unwrap_or(false)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.key.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn col(key: &str, frozen: bool) -> ColumnDefinition {
        let mut c = ColumnDefinition::new(key, key, ColumnType::Text);
        c.frozen = frozen;
        c
    }

    #[test]
    fn new_normalizes_frozen_prefix_preserving_relative_order() {
        let meta = GridMetadata::new(vec![
            col("a", false),
            col("b", true),
            col("c", false),
            col("d", true),
        ]);
        let keys: Vec<_> = meta.keys().collect();
        assert_eq!(keys, vec!["b", "d", "a", "c"]);
        assert_eq!(meta.frozen_len(), 2);
    }

    #[test]
    fn partition_bounds_split_at_frozen_prefix() {
        let meta = GridMetadata::new(vec![col("a", true), col("b", false), col("c", false)]);
        assert_eq!(meta.partition_bounds(0), 0..1);
        assert_eq!(meta.partition_bounds(1), 1..3);
        assert_eq!(meta.partition_bounds(2), 1..3);
    }
}
