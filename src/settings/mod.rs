pub mod io;

use bevy::prelude::Resource;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeChoice {
    #[default]
    Dark,
    Light,
}

#[derive(Resource, Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AppSettings {
    /// Last sheet that loaded successfully; pre-fills the path entry.
    #[serde(default)]
    pub last_sheet_path: Option<PathBuf>,
    #[serde(default)]
    pub theme: ThemeChoice,
    #[serde(default = "default_body_font_size")]
    pub body_font_size: f32,
}

fn default_body_font_size() -> f32 {
    14.0
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            last_sheet_path: None,
            theme: ThemeChoice::default(),
            body_font_size: default_body_font_size(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let settings: AppSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, AppSettings::default());
    }

    #[test]
    fn settings_survive_json_round_trip() {
        let settings = AppSettings {
            last_sheet_path: Some(PathBuf::from("/tmp/people.xlsx")),
            theme: ThemeChoice::Light,
            body_font_size: 16.0,
        };
        let json = serde_json::to_string_pretty(&settings).unwrap();
        let back: AppSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, settings);
    }
}
