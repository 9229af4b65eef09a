// src/sheets/plugin.rs
use bevy::prelude::*;

use super::controller::EditController;
use super::events::{
    RequestAddRow, RequestBrowseSheetFile, RequestDeleteRow, RequestLoadSheet, RequestSaveSheet,
    RequestSaveSheetTo, RequestUpdateRow, SheetFilePicked, SheetLoaded, SheetOperationFeedback,
};
use super::resources::ActiveCodec;
use super::systems;
use crate::ui::widgets::{FieldForm, RowTable};

// Define system sets for ordering
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SheetSystemSet {
    UserInput,      // Dialog-driven requests
    ApplyChanges,   // Systems mutating the loaded sheet
    FileOperations, // Writes to disk
}

/// Plugin owning the loaded sheet, its edit controller and the handlers
/// that turn UI requests into sheet operations.
pub struct SheetsPlugin;

impl Plugin for SheetsPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (
                SheetSystemSet::UserInput,
                SheetSystemSet::ApplyChanges.after(SheetSystemSet::UserInput),
                SheetSystemSet::FileOperations.after(SheetSystemSet::ApplyChanges),
            ),
        );

        // --- Resource Initialization ---
        app.init_resource::<EditController>()
            .init_resource::<ActiveCodec>()
            .init_resource::<RowTable>()
            .init_resource::<FieldForm>();

        // --- Event Registration ---
        app.add_event::<RequestBrowseSheetFile>()
            .add_event::<SheetFilePicked>()
            .add_event::<RequestLoadSheet>()
            .add_event::<SheetLoaded>()
            .add_event::<RequestSaveSheet>()
            .add_event::<RequestSaveSheetTo>()
            .add_event::<RequestAddRow>()
            .add_event::<RequestUpdateRow>()
            .add_event::<RequestDeleteRow>()
            .add_event::<SheetOperationFeedback>();

        app.add_systems(
            Update,
            (
                systems::io::handle_browse_request,
                systems::io::handle_save_request,
            )
                .in_set(SheetSystemSet::UserInput),
        );
        app.add_systems(
            Update,
            (
                systems::io::handle_load_request,
                systems::logic::handle_add_row_request,
                systems::logic::handle_update_row_request,
                systems::logic::handle_delete_row_request,
            )
                .chain()
                .in_set(SheetSystemSet::ApplyChanges),
        );
        app.add_systems(
            Update,
            systems::io::handle_save_to_request.in_set(SheetSystemSet::FileOperations),
        );

        info!("SheetsPlugin initialized.");
    }
}
