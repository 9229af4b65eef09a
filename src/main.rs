// src/main.rs

#![cfg_attr(all(not(debug_assertions), target_os = "windows"), windows_subsystem = "windows")]

use bevy::{
    log::LogPlugin,
    prelude::*,
    window::{PrimaryWindow, WindowPlugin, WindowResolution},
    winit::{UpdateMode, WinitSettings},
};
use std::time::Duration;

// For loading the icon image from disk using the image crate
use image::ImageFormat as CrateImageFormat;

use winit::window::Icon as WinitIcon;

use bevy_egui::EguiPlugin;

mod settings;
mod sheets;
mod ui;

use sheets::SheetsPlugin;
use ui::EditorUiPlugin;

const ICON_PATH: &str = "assets/icon.png";

fn main() {
    App::new()
        .insert_resource(WinitSettings {
            focused_mode: UpdateMode::reactive(Duration::from_secs_f32(1.0 / 30.0)),
            unfocused_mode: UpdateMode::reactive_low_power(Duration::from_secs_f32(1.0 / 5.0)),
        })
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: format!("Sheet Form Editor {}", env!("CARGO_PKG_VERSION")),
                        resolution: WindowResolution::new(1100.0, 600.0),
                        ..default()
                    }),
                    ..default()
                })
                .set(LogPlugin {
                    level: bevy::log::Level::INFO,
                    filter: "wgpu=error,naga=warn".to_string(),
                    ..default()
                }),
        )
        .add_plugins(EguiPlugin {
            enable_multipass_for_primary_context: true,
        })
        .add_plugins(SheetsPlugin)
        .add_plugins(EditorUiPlugin)
        .add_systems(Startup, set_window_icon)
        .run();
}

fn set_window_icon(
    primary_window_query: Query<Entity, With<PrimaryWindow>>,
    windows: NonSend<bevy::winit::WinitWindows>,
) {
    let Ok(primary_entity) = primary_window_query.single() else {
        warn!("Could not find single primary window to set icon.");
        return;
    };

    let Some(primary_winit_window) = windows.get_window(primary_entity) else {
        warn!("Could not get winit window for primary window entity.");
        return;
    };

    let icon_bytes = match std::fs::read(ICON_PATH) {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!("Failed to read icon file '{}': {}", ICON_PATH, e);
            return;
        }
    };

    let image_data = match image::load_from_memory_with_format(&icon_bytes, CrateImageFormat::Png) {
        Ok(image_data) => image_data,
        Err(e) => {
            warn!("'image' crate: Failed to load image data from '{}': {}", ICON_PATH, e);
            return;
        }
    };

    let image_buffer = image_data.into_rgba8();
    let (width, height) = image_buffer.dimensions();
    match WinitIcon::from_rgba(image_buffer.into_raw(), width, height) {
        Ok(winit_icon) => {
            primary_winit_window.set_window_icon(Some(winit_icon));
            info!("Window icon set from '{}'.", ICON_PATH);
        }
        Err(e) => warn!("Failed to create winit::window::Icon: {:?}", e),
    }
}
