// src/ui/mod.rs
use bevy::prelude::*;
use bevy_egui::EguiContextPass;
use std::collections::VecDeque;

pub mod elements;
pub mod style;
pub mod systems;
pub mod widgets;

use crate::settings::AppSettings;
use crate::sheets::events::SheetOperationFeedback;
use elements::editor::sheet_form_editor_ui;
use style::StyleTable;
use systems::{
    apply_picked_file, handle_ui_feedback, load_app_settings, rebuild_style_table,
    remember_loaded_sheet,
};

/// Notifications waiting to be acknowledged. The front entry is shown as
/// a blocking popup; the rest queue behind it.
#[derive(Resource, Default, Debug, Clone)]
pub struct UiFeedbackState {
    pending: VecDeque<SheetOperationFeedback>,
}

impl UiFeedbackState {
    pub fn push(&mut self, feedback: SheetOperationFeedback) {
        self.pending.push_back(feedback);
    }

    pub fn current(&self) -> Option<&SheetOperationFeedback> {
        self.pending.front()
    }

    pub fn acknowledge(&mut self) -> Option<SheetOperationFeedback> {
        self.pending.pop_front()
    }
}

/// Editor-wide UI state that is not part of any widget model.
#[derive(Resource, Default, Debug, Clone)]
pub struct EditorWindowState {
    /// Contents of the path entry above the table.
    pub path_input: String,
}

/// Plugin for the sheet form editor UI.
pub struct EditorUiPlugin;

impl Plugin for EditorUiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<UiFeedbackState>()
            .init_resource::<EditorWindowState>()
            .init_resource::<AppSettings>()
            .init_resource::<StyleTable>()
            .add_systems(Startup, load_app_settings)
            .add_systems(
                Update,
                (
                    handle_ui_feedback,
                    apply_picked_file,
                    remember_loaded_sheet,
                    rebuild_style_table,
                ),
            )
            .add_systems(EguiContextPass, sheet_form_editor_ui);

        info!("EditorUiPlugin initialized.");
    }
}
