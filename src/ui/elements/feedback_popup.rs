// src/ui/elements/feedback_popup.rs
use bevy::prelude::*;
use bevy_egui::egui;

use crate::ui::style::StyleTable;
use crate::ui::UiFeedbackState;

/// Shows the oldest pending notification, if any. Returns true while a
/// notification is on screen so the caller can disable the rest of the UI.
pub fn show_feedback_popup(
    ctx: &egui::Context,
    feedback: &mut UiFeedbackState,
    styles: &StyleTable,
) -> bool {
    let Some(current) = feedback.current().cloned() else {
        return false;
    };

    let mut ok_clicked = false;
    let mut window_open = true;

    egui::Window::new(&current.title)
        .id(egui::Id::new("sheet_feedback_popup"))
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .open(&mut window_open)
        .show(ctx, |ui| {
            let text_color = if current.is_error {
                egui::Color32::from_rgb(0xe7, 0x4c, 0x3c)
            } else {
                ui.style().visuals.text_color()
            };
            ui.colored_label(text_color, &current.message);
            ui.separator();
            ui.vertical_centered(|ui| {
                if ui.button(styles.button_text("OK")).clicked() {
                    ok_clicked = true;
                }
            });
        });

    // Enter confirms, as in a native message box.
    let enter_pressed = ctx.input(|i| i.key_pressed(egui::Key::Enter));

    if ok_clicked || enter_pressed || !window_open {
        trace!("Feedback '{}' acknowledged.", current.message);
        feedback.acknowledge();
    }
    true
}
