// src/ui/systems.rs
use bevy::prelude::*;

use crate::{
    settings::{
        io::{load_settings_from_file, save_settings_to_file},
        AppSettings,
    },
    sheets::events::{SheetFilePicked, SheetLoaded, SheetOperationFeedback},
    ui::{style::StyleTable, EditorWindowState, UiFeedbackState},
};

/// Startup: reads persisted settings and pre-fills the path entry with the
/// last sheet that loaded. The sheet itself is not opened.
pub fn load_app_settings(
    mut settings: ResMut<AppSettings>,
    mut state: ResMut<EditorWindowState>,
) {
    match load_settings_from_file::<AppSettings>() {
        Ok(loaded) => *settings = loaded,
        Err(e) => error!("Using default settings: {}", e),
    }
    if let Some(path) = &settings.last_sheet_path {
        state.path_input = path.display().to_string();
    }
}

pub fn handle_ui_feedback(
    mut feedback_events: EventReader<SheetOperationFeedback>,
    mut ui_feedback_state: ResMut<UiFeedbackState>,
) {
    for event in feedback_events.read() {
        if event.is_error {
            warn!("UI Feedback (Error): {}", event.message);
        } else {
            info!("UI Feedback: {}", event.message);
        }
        ui_feedback_state.push(event.clone());
    }
}

pub fn apply_picked_file(
    mut picked_events: EventReader<SheetFilePicked>,
    mut state: ResMut<EditorWindowState>,
) {
    if let Some(event) = picked_events.read().last() {
        state.path_input = event.path.display().to_string();
    }
}

/// Records the last successfully loaded sheet in the settings file.
pub fn remember_loaded_sheet(
    mut loaded_events: EventReader<SheetLoaded>,
    mut settings: ResMut<AppSettings>,
) {
    let Some(event) = loaded_events.read().last() else {
        return;
    };
    if settings.last_sheet_path.as_ref() == Some(&event.path) {
        return;
    }
    settings.last_sheet_path = Some(event.path.clone());
    if let Err(e) = save_settings_to_file(&*settings) {
        error!("Failed to persist last sheet path: {}", e);
    }
}

pub fn rebuild_style_table(settings: Res<AppSettings>, mut styles: ResMut<StyleTable>) {
    if !settings.is_changed() {
        return;
    }
    let rebuilt = StyleTable::from_base_size(settings.body_font_size);
    if *styles != rebuilt {
        debug!("Rebuilding style table for base size {}.", settings.body_font_size);
        *styles = rebuilt;
    }
}
