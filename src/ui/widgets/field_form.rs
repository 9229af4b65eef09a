// src/ui/widgets/field_form.rs
use bevy::prelude::*;
use bevy_egui::egui;

use super::row_table::RowTable;
#[cfg(test)]
use super::row_table::click_row;
use crate::sheets::definitions::SheetRow;
use crate::ui::style::{StyleTable, WidgetRole};

/// A labeled text input; one per sheet column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    pub label: String,
    pub value: String,
}

/// Form staging values for add/update. Field order always follows the
/// loaded sheet's column order.
#[derive(Resource, Debug, Default, Clone)]
pub struct FieldForm {
    inputs: Vec<TextField>,
}

impl FieldForm {
    /// Rebuilds one empty input per label, discarding previous inputs.
    pub fn set_fields(&mut self, labels: &[String]) {
        self.inputs = labels
            .iter()
            .map(|label| TextField {
                label: label.clone(),
                value: String::new(),
            })
            .collect();
    }

    /// Current values in label order, usable as a full replacement row.
    pub fn fields(&self) -> SheetRow {
        self.inputs.iter().map(|f| f.value.clone()).collect()
    }

    /// Sets each input positionally. Inputs without a matching value are
    /// emptied.
    pub fn fill_fields(&mut self, values: &[String]) {
        for (idx, field) in self.inputs.iter_mut().enumerate() {
            field.value = values.get(idx).cloned().unwrap_or_default();
        }
    }

    pub fn clear_fields(&mut self) {
        for field in &mut self.inputs {
            field.value.clear();
        }
    }

    #[cfg(test)]
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.inputs.iter().map(|f| f.label.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }
}

/// One-way sync: copies the table's selected row into the form.
/// Returns false (form untouched) when nothing is selected.
pub fn sync_form_with_selection(table: &RowTable, form: &mut FieldForm) -> bool {
    match table.selection() {
        Some(values) => {
            form.fill_fields(values);
            true
        }
        None => false,
    }
}

pub fn show_field_form(ui: &mut egui::Ui, form: &mut FieldForm, styles: &StyleTable) {
    if form.is_empty() {
        ui.weak("Load a sheet to edit its rows.");
        return;
    }

    let label_font = styles.font_id(WidgetRole::Body);
    let entry_font = styles.font_id(WidgetRole::Entry);

    for field in &mut form.inputs {
        ui.vertical_centered_justified(|ui| {
            ui.label(egui::RichText::new(&field.label).font(label_font.clone()));
            ui.add(
                egui::TextEdit::singleline(&mut field.value)
                    .font(entry_font.clone())
                    .horizontal_align(egui::Align::Center),
            );
        });
        ui.add_space(10.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn set_fields_builds_empty_inputs_in_label_order() {
        let mut form = FieldForm::default();
        form.set_fields(&strings(&["name", "age"]));
        assert_eq!(form.labels().collect::<Vec<_>>(), ["name", "age"]);
        assert_eq!(form.fields(), strings(&["", ""]));
    }

    #[test]
    fn set_fields_discards_previous_values() {
        let mut form = FieldForm::default();
        form.set_fields(&strings(&["name"]));
        form.fill_fields(&strings(&["Ann"]));
        form.set_fields(&strings(&["id", "city"]));
        assert_eq!(form.fields(), strings(&["", ""]));
        assert_eq!(form.labels().count(), 2);
    }

    #[test]
    fn fill_then_clear() {
        let mut form = FieldForm::default();
        form.set_fields(&strings(&["name", "age"]));
        form.fill_fields(&strings(&["Ann", "30"]));
        assert_eq!(form.fields(), strings(&["Ann", "30"]));
        form.clear_fields();
        assert_eq!(form.fields(), strings(&["", ""]));
    }

    #[test]
    fn fill_with_short_row_empties_remaining_inputs() {
        let mut form = FieldForm::default();
        form.set_fields(&strings(&["name", "age"]));
        form.fill_fields(&strings(&["Ann", "30"]));
        form.fill_fields(&strings(&["Bob"]));
        assert_eq!(form.fields(), strings(&["Bob", ""]));
    }

    #[test]
    fn selection_sync_copies_selected_row() {
        let mut table = RowTable::default();
        table.set_columns(&strings(&["name", "age"]));
        table.set_rows(&[strings(&["Ann", "30"]), strings(&["Bob", "25"])]);
        let mut form = FieldForm::default();
        form.set_fields(table.columns());

        assert!(!sync_form_with_selection(&table, &mut form));
        assert_eq!(form.fields(), strings(&["", ""]));

        table.select(1);
        assert!(sync_form_with_selection(&table, &mut form));
        assert_eq!(form.fields(), strings(&["Bob", "25"]));
    }

    #[test]
    fn reclicking_selected_row_refills_cleared_form() {
        let mut table = RowTable::default();
        table.set_columns(&strings(&["name", "age"]));
        table.set_rows(&[strings(&["Ann", "30"]), strings(&["Bob", "25"])]);
        let mut form = FieldForm::default();
        form.set_fields(table.columns());

        assert_eq!(click_row(&mut table, 0), Some(0));
        sync_form_with_selection(&table, &mut form);
        form.clear_fields();

        assert_eq!(click_row(&mut table, 0), Some(0));
        assert!(sync_form_with_selection(&table, &mut form));
        assert_eq!(form.fields(), strings(&["Ann", "30"]));
    }
}
