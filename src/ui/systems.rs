// src/ui/systems.rs
use bevy::prelude::*;

use crate::grid::events::GridOperationFeedback;
use crate::ui::UiFeedbackState;

/// Folds a frame's worth of feedback events into the one notice the toolbar
/// shows. Later events win, except that a success never papers over an error
/// from the same batch.
fn select_feedback(events: impl Iterator<Item = (String, bool)>) -> Option<(String, bool)> {
    let mut selected: Option<(String, bool)> = None;
    for (message, is_error) in events {
        let keep_previous = matches!(&selected, Some((_, true))) && !is_error;
        if !keep_previous {
            selected = Some((message, is_error));
        }
    }
    selected
}

pub fn handle_ui_feedback(
    mut feedback_events: EventReader<GridOperationFeedback>,
    mut ui_feedback_state: ResMut<UiFeedbackState>,
) {
    let batch = feedback_events
        .read()
        .map(|e| (e.message.clone(), e.is_error));
    if let Some((message, is_error)) = select_feedback(batch) {
        if is_error {
            warn!("UI Feedback (Error): {}", message);
        } else {
            info!("UI Feedback: {}", message);
        }
        ui_feedback_state.last_message = message;
        ui_feedback_state.is_error = is_error;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch(items: &[(&str, bool)]) -> impl Iterator<Item = (String, bool)> {
        items
            .iter()
            .map(|(m, e)| (m.to_string(), *e))
            .collect::<Vec<_>>()
            .into_iter()
    }

    #[test]
    fn later_feedback_replaces_earlier() {
        let selected = select_feedback(batch(&[
            ("Added column 'stage'.", false),
            ("Added column 'owner'.", false),
        ]));
        assert_eq!(selected, Some(("Added column 'owner'.".to_string(), false)));
    }

    #[test]
    fn a_success_never_papers_over_a_batched_error() {
        let selected = select_feedback(batch(&[
            ("Column 'opportunity' is protected and cannot be changed.", true),
            ("Added column 'owner'.", false),
        ]));
        assert!(selected.unwrap().1);
    }

    #[test]
    fn a_later_error_replaces_an_earlier_one() {
        let selected = select_feedback(batch(&[
            ("Unknown column 'ghost'.", true),
            ("A column with key 'stage' already exists.", true),
        ]));
        assert_eq!(
            selected,
            Some(("A column with key 'stage' already exists.".to_string(), true))
        );
    }

    #[test]
    fn empty_batches_leave_the_notice_alone() {
        assert_eq!(select_feedback(batch(&[])), None);
    }
}
