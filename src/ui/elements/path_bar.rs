// src/ui/elements/path_bar.rs
use bevy_egui::egui;
use std::path::PathBuf;

use crate::ui::style::{StyleTable, WidgetRole};
use crate::ui::EditorWindowState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathBarAction {
    Browse,
    Load(PathBuf),
}

/// Path entry, browse button and full-width "Load" button.
pub fn show_path_bar(
    ui: &mut egui::Ui,
    state: &mut EditorWindowState,
    styles: &StyleTable,
) -> Option<PathBarAction> {
    let mut action = None;
    let row_height = styles.row_height();

    ui.horizontal(|ui| {
        let browse_width = row_height * 1.5;
        let entry_width = (ui.available_width() - browse_width - ui.spacing().item_spacing.x).max(80.0);
        ui.add_sized(
            [entry_width, row_height],
            egui::TextEdit::singleline(&mut state.path_input)
                .font(styles.font_id(WidgetRole::Entry))
                .horizontal_align(egui::Align::Center)
                .hint_text("Spreadsheet path"),
        );
        if ui
            .add_sized([browse_width, row_height], egui::Button::new(styles.button_text("...")))
            .on_hover_text("Browse for a spreadsheet")
            .clicked()
        {
            action = Some(PathBarAction::Browse);
        }
    });

    ui.add_space(6.0);
    if ui
        .add_sized(
            [ui.available_width(), row_height],
            egui::Button::new(styles.button_text("Load")),
        )
        .clicked()
    {
        action = Some(PathBarAction::Load(load_path(&state.path_input)));
    }
    action
}

fn load_path(input: &str) -> PathBuf {
    PathBuf::from(input.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_path_ignores_surrounding_whitespace() {
        assert_eq!(load_path("  /data/people.xlsx \n"), PathBuf::from("/data/people.xlsx"));
    }
}
