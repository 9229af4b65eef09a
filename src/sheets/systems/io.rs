// src/sheets/systems/io.rs
use bevy::prelude::*;
use std::path::{Path, PathBuf};

use super::report_outcome;
use crate::sheets::{
    controller::{EditController, Precondition},
    events::{
        RequestBrowseSheetFile, RequestLoadSheet, RequestSaveSheet, RequestSaveSheetTo,
        SheetFilePicked, SheetLoaded, SheetOperationFeedback,
    },
    resources::ActiveCodec,
};
use crate::ui::widgets::{FieldForm, RowTable};

pub const DEFAULT_SAVE_EXTENSION: &str = "xlsx";
const READABLE_EXTENSIONS: [&str; 5] = ["xlsx", "xlsm", "xls", "xlsb", "ods"];

/// Cleans a path returned by the save dialog: trims it, replaces spaces
/// with underscores and adds the `.xlsx` extension when none was given.
/// Returns `None` for an empty path.
pub fn normalize_save_path(raw: &Path) -> Option<PathBuf> {
    let cleaned = raw.to_string_lossy().trim().replace(' ', "_");
    if cleaned.is_empty() {
        return None;
    }
    let mut path = PathBuf::from(cleaned);
    if path.extension().is_none() {
        path.set_extension(DEFAULT_SAVE_EXTENSION);
    }
    Some(path)
}

pub fn handle_browse_request(
    mut events: EventReader<RequestBrowseSheetFile>,
    mut picked_writer: EventWriter<SheetFilePicked>,
) {
    if events.is_empty() {
        return;
    }
    events.clear();
    info!("Sheet file browse initiated by UI.");

    // Blocking dialog; the frame waits for the user.
    let picked_file: Option<PathBuf> = rfd::FileDialog::new()
        .add_filter("Spreadsheets", &READABLE_EXTENSIONS)
        .add_filter("all files", &["*"])
        .pick_file();

    match picked_file {
        Some(path) => {
            info!("File picked: '{}'.", path.display());
            picked_writer.write(SheetFilePicked { path });
        }
        None => debug!("Open dialog cancelled."),
    }
}

pub fn handle_load_request(
    mut events: EventReader<RequestLoadSheet>,
    mut controller: ResMut<EditController>,
    codec: Res<ActiveCodec>,
    mut table: ResMut<RowTable>,
    mut form: ResMut<FieldForm>,
    mut loaded_writer: EventWriter<SheetLoaded>,
    mut feedback_writer: EventWriter<SheetOperationFeedback>,
) {
    for event in events.read() {
        info!("Loading sheet from '{}'...", event.path.display());
        let result = controller.load(&event.path, codec.codec(), &mut table, &mut form);
        if result.is_ok() {
            loaded_writer.write(SheetLoaded {
                path: event.path.clone(),
            });
        }
        report_outcome("load", result, &mut feedback_writer);
    }
}

/// Opens the save dialog once data is loaded and forwards the chosen path.
pub fn handle_save_request(
    mut events: EventReader<RequestSaveSheet>,
    controller: Res<EditController>,
    mut save_to_writer: EventWriter<RequestSaveSheetTo>,
    mut feedback_writer: EventWriter<SheetOperationFeedback>,
) {
    if events.is_empty() {
        return;
    }
    events.clear();

    if !controller.is_loaded() {
        report_outcome("save", Err(Precondition::NotLoaded.into()), &mut feedback_writer);
        return;
    }

    let picked = rfd::FileDialog::new()
        .add_filter("xlsx files", &[DEFAULT_SAVE_EXTENSION])
        .add_filter("all files", &["*"])
        .set_file_name(format!("sheet.{}", DEFAULT_SAVE_EXTENSION))
        .save_file();

    match picked.as_deref().and_then(normalize_save_path) {
        Some(path) => {
            info!("Save destination chosen: '{}'.", path.display());
            save_to_writer.write(RequestSaveSheetTo { path });
        }
        None => debug!("Save dialog cancelled."),
    }
}

pub fn handle_save_to_request(
    mut events: EventReader<RequestSaveSheetTo>,
    controller: Res<EditController>,
    codec: Res<ActiveCodec>,
    mut feedback_writer: EventWriter<SheetOperationFeedback>,
) {
    for event in events.read() {
        info!("Saving sheet to '{}'...", event.path.display());
        let result = controller.save(&event.path, codec.codec());
        report_outcome("save", result, &mut feedback_writer);
    }
}
