// src/sheets/systems/mod.rs

pub mod io;     // File dialogs, load and save handlers
pub mod logic;  // Row add/update/delete handlers

use bevy::prelude::*;

use crate::sheets::{
    controller::{EditError, EditOutcome},
    events::SheetOperationFeedback,
};

/// Logs the result of an edit operation and turns it into user feedback.
/// Successful loads produce no notification.
pub(crate) fn report_outcome(
    operation: &str,
    result: Result<EditOutcome, EditError>,
    feedback_writer: &mut EventWriter<SheetOperationFeedback>,
) {
    match result {
        Ok(outcome) => {
            info!("Operation '{}' succeeded: {}", operation, outcome);
            if let Some(message) = outcome.message() {
                feedback_writer.write(SheetOperationFeedback::success(message));
            }
        }
        Err(err @ EditError::Precondition(_)) => {
            warn!("Operation '{}' rejected: {}", operation, err);
            feedback_writer.write(SheetOperationFeedback::error(err.to_string()));
        }
        Err(err) => {
            error!("Operation '{}' failed: {}", operation, err);
            feedback_writer.write(SheetOperationFeedback::error(err.to_string()));
        }
    }
}
