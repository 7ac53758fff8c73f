// src/grid/systems/logic/save_indicator.rs
use bevy::prelude::*;

use crate::grid::resources::SaveIndicator;

/// Ticks the pending "saved" indicator and clears it on expiry. Arming
/// happens in the cell update handler; this system only ever retires.
pub fn tick_save_indicator(time: Res<Time>, mut indicator: ResMut<SaveIndicator>) {
    if indicator.cell.is_none() {
        return;
    }
    indicator.timer.tick(time.delta());
    if indicator.timer.finished() {
        trace!("Save indicator expired.");
        indicator.cell = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn new_write_replaces_pending_indicator() {
        let mut indicator = SaveIndicator::default();
        indicator.arm("r1", "revenue");
        indicator.timer.tick(Duration::from_millis(900));
        // A second write restarts the timer rather than stacking.
        indicator.arm("r2", "owner");
        assert!(!indicator.is_active("r1", "revenue"));
        assert!(indicator.is_active("r2", "owner"));
        indicator.timer.tick(Duration::from_millis(900));
        assert!(!indicator.timer.finished());
        indicator.timer.tick(Duration::from_millis(200));
        assert!(indicator.timer.finished());
    }
}
