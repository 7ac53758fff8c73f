// src/grid/systems/logic/sort_rows.rs
use bevy::prelude::*;
use std::cmp::Ordering;

use super::normalize::{parse_date, parse_numeric};
use crate::grid::{
    definitions::{CellValue, ColumnType, GridError},
    events::{GridDataModifiedEvent, GridOperationFeedback, RequestSortRows, SortDirection},
    history::GridHistory,
    resources::GridRegistry,
};

/// Type-aware comparison of two cell values under a column type.
/// Number/currency compare numerically after stripping decoration, dates as
/// parsed instants, everything else case-insensitively as text. Unparseable
/// values sort after parseable ones, deterministically.
pub fn compare_cells(data_type: ColumnType, a: &CellValue, b: &CellValue) -> Ordering {
    match data_type {
        ColumnType::Number | ColumnType::Currency => {
            let na = numeric_of(a);
            let nb = numeric_of(b);
            match (na, nb) {
                (Some(x), Some(y)) => x.total_cmp(&y),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            }
        }
        ColumnType::Date => {
            let da = parse_date(&a.display_text());
            let db = parse_date(&b.display_text());
            match (da, db) {
                (Some(x), Some(y)) => x.cmp(&y),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            }
        }
        ColumnType::Checkbox => a.as_bool().cmp(&b.as_bool()),
        _ => a
            .display_text()
            .to_lowercase()
            .cmp(&b.display_text().to_lowercase()),
    }
}

fn numeric_of(value: &CellValue) -> Option<f64> {
    match value {
        CellValue::Number(n) => Some(*n),
        other => parse_numeric(&other.display_text()),
    }
}

/// Stable sort of the row store by one column. Ties keep their prior
/// relative order, so repeated sorts are deterministic.
pub fn apply_sort_rows(
    registry: &mut GridRegistry,
    key: &str,
    direction: SortDirection,
) -> Result<(), GridError> {
    let data_type = registry
        .metadata
        .column(key)
        .map(|c| c.data_type)
        .ok_or_else(|| GridError::UnknownColumn(key.to_string()))?;
    registry.rows.sort_by(|a, b| {
        let ordering = compare_cells(data_type, &a.value(key), &b.value(key));
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
    Ok(())
}

pub fn handle_sort_rows_request(
    mut events: EventReader<RequestSortRows>,
    mut registry: ResMut<GridRegistry>,
    mut history: ResMut<GridHistory>,
    mut feedback_writer: EventWriter<GridOperationFeedback>,
    mut data_modified_writer: EventWriter<GridDataModifiedEvent>,
) {
    for event in events.read() {
        let before = registry.snapshot();
        match apply_sort_rows(&mut registry, &event.key, event.direction) {
            Ok(()) => {
                history.record(before);
                data_modified_writer.write(GridDataModifiedEvent);
                debug!("Sorted rows by '{}' ({:?}).", event.key, event.direction);
            }
            Err(err) => {
                warn!("Sort by '{}' rejected: {}", event.key, err);
                feedback_writer.write(GridOperationFeedback {
                    message: err.to_string(),
                    is_error: true,
                });
            }
        }
    }
}
