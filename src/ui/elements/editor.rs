// src/ui/elements/editor.rs
use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use super::feedback_popup::show_feedback_popup;
use super::path_bar::{show_path_bar, PathBarAction};
use crate::settings::AppSettings;
use crate::sheets::events::{
    RequestAddRow, RequestBrowseSheetFile, RequestDeleteRow, RequestLoadSheet, RequestSaveSheet,
    RequestUpdateRow,
};
use crate::ui::style::{Action, StyleTable};
use crate::ui::widgets::{
    show_field_form, show_row_table, sync_form_with_selection, FieldForm, RowTable,
};
use crate::ui::{EditorWindowState, UiFeedbackState};

#[derive(SystemParam)]
pub struct SheetEventWriters<'w> {
    pub browse: EventWriter<'w, RequestBrowseSheetFile>,
    pub load: EventWriter<'w, RequestLoadSheet>,
    pub save: EventWriter<'w, RequestSaveSheet>,
    pub add_row: EventWriter<'w, RequestAddRow>,
    pub update_row: EventWriter<'w, RequestUpdateRow>,
    pub delete_row: EventWriter<'w, RequestDeleteRow>,
}

#[allow(clippy::too_many_arguments)]
pub fn sheet_form_editor_ui(
    mut contexts: EguiContexts,
    mut state: ResMut<EditorWindowState>,
    mut table: ResMut<RowTable>,
    mut form: ResMut<FieldForm>,
    mut feedback: ResMut<UiFeedbackState>,
    styles: Res<StyleTable>,
    settings: Res<AppSettings>,
    mut writers: SheetEventWriters,
) {
    let ctx = contexts.ctx_mut();
    if styles.is_changed() || settings.is_changed() {
        styles.apply(ctx, settings.theme);
    }

    let popup_open = show_feedback_popup(ctx, &mut feedback, &styles);

    egui::SidePanel::right("field_form_panel")
        .resizable(true)
        .default_width(380.0)
        .min_width(240.0)
        .show(ctx, |ui| {
            ui.add_enabled_ui(!popup_open, |ui| {
                show_form_panel(ui, &mut form, &styles, &mut writers);
            });
        });

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.add_enabled_ui(!popup_open, |ui| {
            match show_path_bar(ui, &mut state, &styles) {
                Some(PathBarAction::Browse) => {
                    writers.browse.write(RequestBrowseSheetFile);
                }
                Some(PathBarAction::Load(path)) => {
                    writers.load.write(RequestLoadSheet { path });
                }
                None => {}
            }
            ui.add_space(10.0);

            egui::TopBottomPanel::bottom("save_bar")
                .frame(egui::Frame::NONE)
                .show_inside(ui, |ui| {
                    ui.add_space(10.0);
                    if ui
                        .add_sized(
                            [ui.available_width(), styles.row_height()],
                            egui::Button::new(styles.button_text("Save")),
                        )
                        .clicked()
                    {
                        writers.save.write(RequestSaveSheet);
                    }
                });

            egui::CentralPanel::default()
                .frame(egui::Frame::NONE)
                .show_inside(ui, |ui| {
                    if show_row_table(ui, &mut table, styles.row_height()).is_some() {
                        sync_form_with_selection(&table, &mut form);
                    }
                });
        });
    });
}

fn show_form_panel(
    ui: &mut egui::Ui,
    form: &mut FieldForm,
    styles: &StyleTable,
    writers: &mut SheetEventWriters,
) {
    let row_height = styles.row_height();

    ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
        if ui.button(styles.button_text("Clear")).clicked() {
            form.clear_fields();
        }
    });
    ui.add_space(6.0);

    let actions = [Action::Add, Action::Update, Action::Delete];
    let buttons_height = actions.len() as f32 * (row_height + 10.0) + 10.0;
    egui::ScrollArea::vertical()
        .id_salt("field_form_scroll")
        .auto_shrink([false, false])
        .max_height((ui.available_height() - buttons_height).max(0.0))
        .show(ui, |ui| {
            show_field_form(ui, form, styles);
        });

    ui.add_space(10.0);
    for action in actions {
        let button = egui::Button::new(styles.button_text(action.label()).color(egui::Color32::WHITE))
            .fill(action.fill());
        if ui.add_sized([ui.available_width(), row_height], button).clicked() {
            match action {
                Action::Add => {
                    writers.add_row.write(RequestAddRow);
                }
                Action::Update => {
                    writers.update_row.write(RequestUpdateRow);
                }
                Action::Delete => {
                    writers.delete_row.write(RequestDeleteRow);
                }
            }
        }
        ui.add_space(10.0);
    }
}
