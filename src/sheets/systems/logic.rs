// src/sheets/systems/logic.rs
use bevy::prelude::*;

use super::report_outcome;
use crate::sheets::{
    controller::EditController,
    events::{RequestAddRow, RequestDeleteRow, RequestUpdateRow, SheetOperationFeedback},
};
use crate::ui::widgets::{FieldForm, RowTable};

/// Appends the form's values as a new row.
pub fn handle_add_row_request(
    mut events: EventReader<RequestAddRow>,
    mut controller: ResMut<EditController>,
    mut table: ResMut<RowTable>,
    mut form: ResMut<FieldForm>,
    mut feedback_writer: EventWriter<SheetOperationFeedback>,
) {
    for _ in events.read() {
        let result = controller.add(&mut table, &mut form);
        report_outcome("add row", result, &mut feedback_writer);
    }
}

/// Replaces the selected row with the form's values.
pub fn handle_update_row_request(
    mut events: EventReader<RequestUpdateRow>,
    mut controller: ResMut<EditController>,
    mut table: ResMut<RowTable>,
    mut form: ResMut<FieldForm>,
    mut feedback_writer: EventWriter<SheetOperationFeedback>,
) {
    for _ in events.read() {
        let result = controller.update(&mut table, &mut form);
        report_outcome("update row", result, &mut feedback_writer);
    }
}

pub fn handle_delete_row_request(
    mut events: EventReader<RequestDeleteRow>,
    mut controller: ResMut<EditController>,
    mut table: ResMut<RowTable>,
    mut form: ResMut<FieldForm>,
    mut feedback_writer: EventWriter<SheetOperationFeedback>,
) {
    for _ in events.read() {
        let result = controller.delete(&mut table, &mut form);
        report_outcome("delete row", result, &mut feedback_writer);
    }
}
