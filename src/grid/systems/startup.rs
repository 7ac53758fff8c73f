// src/grid/systems/startup.rs
use bevy::prelude::*;
use uuid::Uuid;

use crate::grid::{
    definitions::GridMetadata,
    history::GridHistory,
    resources::{GridRegistry, GridSeed},
};

/// Loads the host-supplied seed into the registry. Runs once at startup and
/// again is the path a host would use when rebinding the grid to a new
/// dataset: the registry is rebuilt wholesale and history is cleared.
pub fn load_grid_seed(
    seed: Option<Res<GridSeed>>,
    mut registry: ResMut<GridRegistry>,
    mut history: ResMut<GridHistory>,
) {
    let Some(seed) = seed else {
        info!("No grid seed supplied; starting with an empty grid.");
        return;
    };
    registry.metadata = GridMetadata::new(seed.columns.clone());
    registry.rows = seed.rows.clone();
    for row in registry.rows.iter_mut() {
        if row.id.is_empty() {
            row.id = Uuid::new_v4().to_string();
        }
    }
    registry.ensure_row_consistency();
    history.clear();
    info!(
        "Loaded grid seed: {} columns, {} rows.",
        registry.metadata.columns.len(),
        registry.rows.len()
    );
}
