// src/ui/style.rs
use bevy::prelude::*;
use bevy_egui::egui::{self, Color32, FontFamily, FontId, TextStyle};

use crate::settings::ThemeChoice;

/// Roles a widget can play for styling purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetRole {
    Body,
    Heading,
    Button,
    Entry,
    TableRow,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoleStyle {
    pub size: f32,
    pub family: RoleFamily,
    pub strong: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleFamily {
    Monospace,
    Proportional,
}

impl From<RoleFamily> for FontFamily {
    fn from(family: RoleFamily) -> Self {
        match family {
            RoleFamily::Monospace => FontFamily::Monospace,
            RoleFamily::Proportional => FontFamily::Proportional,
        }
    }
}

/// Editing actions with their own accent colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Add,
    Update,
    Delete,
}

impl Action {
    pub fn label(self) -> &'static str {
        match self {
            Action::Add => "Add",
            Action::Update => "Update",
            Action::Delete => "Delete",
        }
    }

    pub fn fill(self) -> Color32 {
        match self {
            Action::Add => Color32::from_rgb(0x00, 0xbc, 0x8c),
            Action::Update => Color32::from_rgb(0xf3, 0x9c, 0x12),
            Action::Delete => Color32::from_rgb(0xe7, 0x4c, 0x3c),
        }
    }
}

/// Declarative style table keyed by widget role. Applied to the egui
/// context wholesale instead of restyling individual widgets.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct StyleTable {
    roles: Vec<(WidgetRole, RoleStyle)>,
}

impl Default for StyleTable {
    fn default() -> Self {
        Self::from_base_size(14.0)
    }
}

impl StyleTable {
    pub fn from_base_size(base: f32) -> Self {
        let base = base.clamp(8.0, 32.0);
        let mono = |size: f32, strong: bool| RoleStyle {
            size,
            family: RoleFamily::Monospace,
            strong,
        };
        Self {
            roles: vec![
                (WidgetRole::Body, mono(base, false)),
                (WidgetRole::Heading, mono(base * 1.3, true)),
                (WidgetRole::Button, mono(base, true)),
                (
                    WidgetRole::Entry,
                    RoleStyle {
                        size: base,
                        family: RoleFamily::Proportional,
                        strong: false,
                    },
                ),
                // Row height, not a font.
                (WidgetRole::TableRow, mono(base * 40.0 / 14.0, false)),
            ],
        }
    }

    pub fn get(&self, role: WidgetRole) -> RoleStyle {
        self.roles
            .iter()
            .find(|(r, _)| *r == role)
            .map(|(_, style)| *style)
            .unwrap_or(RoleStyle {
                size: 14.0,
                family: RoleFamily::Proportional,
                strong: false,
            })
    }

    pub fn font_id(&self, role: WidgetRole) -> FontId {
        let style = self.get(role);
        FontId::new(style.size, style.family.into())
    }

    pub fn row_height(&self) -> f32 {
        self.get(WidgetRole::TableRow).size
    }

    pub fn button_text(&self, text: &str) -> egui::RichText {
        let rich = egui::RichText::new(text).font(self.font_id(WidgetRole::Button));
        if self.get(WidgetRole::Button).strong {
            rich.strong()
        } else {
            rich
        }
    }

    pub fn apply(&self, ctx: &egui::Context, theme: ThemeChoice) {
        ctx.set_visuals(match theme {
            ThemeChoice::Dark => egui::Visuals::dark(),
            ThemeChoice::Light => egui::Visuals::light(),
        });
        ctx.style_mut(|style| {
            style.text_styles.insert(TextStyle::Body, self.font_id(WidgetRole::Body));
            style.text_styles.insert(TextStyle::Heading, self.font_id(WidgetRole::Heading));
            style.text_styles.insert(TextStyle::Button, self.font_id(WidgetRole::Button));
            style.text_styles.insert(TextStyle::Monospace, self.font_id(WidgetRole::Body));
        });
        debug!("Applied style table ({:?} theme).", theme);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_role_has_an_entry() {
        let table = StyleTable::default();
        for role in [
            WidgetRole::Body,
            WidgetRole::Heading,
            WidgetRole::Button,
            WidgetRole::Entry,
            WidgetRole::TableRow,
        ] {
            assert!(table.roles.iter().any(|(r, _)| *r == role), "{:?}", role);
        }
    }

    #[test]
    fn default_matches_base_fourteen() {
        let table = StyleTable::default();
        assert_eq!(table.get(WidgetRole::Body).size, 14.0);
        assert_eq!(table.get(WidgetRole::Entry).family, RoleFamily::Proportional);
        assert!(table.get(WidgetRole::Button).strong);
        assert_eq!(table.row_height(), 40.0);
    }

    #[test]
    fn base_size_is_clamped() {
        assert_eq!(StyleTable::from_base_size(2.0).get(WidgetRole::Body).size, 8.0);
        assert_eq!(StyleTable::from_base_size(99.0).get(WidgetRole::Body).size, 32.0);
    }
}
