// src/sheets/events.rs
use bevy::prelude::Event;
use std::path::PathBuf;

/// Event sent when the user clicks the browse ("...") button next to the
/// path entry. Handled by systems in `sheets::systems::io`.
#[derive(Event, Debug, Clone)]
pub struct RequestBrowseSheetFile;

/// A path chosen in the open-file dialog, to be placed in the path entry.
#[derive(Event, Debug, Clone)]
pub struct SheetFilePicked {
    pub path: PathBuf,
}

#[derive(Event, Debug, Clone)]
pub struct RequestLoadSheet {
    pub path: PathBuf,
}

/// Sent after a sheet loaded successfully.
#[derive(Event, Debug, Clone)]
pub struct SheetLoaded {
    pub path: PathBuf,
}

/// Event sent when the user clicks "Save"; opens the save dialog.
#[derive(Event, Debug, Clone)]
pub struct RequestSaveSheet;

/// Writes the loaded sheet to `path`. Sent once a save destination is known.
#[derive(Event, Debug, Clone)]
pub struct RequestSaveSheetTo {
    pub path: PathBuf,
}

#[derive(Event, Debug, Clone)]
pub struct RequestAddRow;

#[derive(Event, Debug, Clone)]
pub struct RequestUpdateRow;

#[derive(Event, Debug, Clone)]
pub struct RequestDeleteRow;

/// Result of a user action, shown to the user as a blocking notification.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct SheetOperationFeedback {
    pub title: String,
    pub message: String,
    pub is_error: bool,
}

impl SheetOperationFeedback {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            title: "Success".to_string(),
            message: message.into(),
            is_error: false,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            title: "Error".to_string(),
            message: message.into(),
            is_error: true,
        }
    }
}
