// src/ui/widgets/row_table.rs
use bevy::prelude::*;
use bevy_egui::egui;
use egui_extras::{Column, TableBuilder, TableRow};

use crate::sheets::definitions::SheetRow;

/// Display model for the sheet table: headers, a copy of the rows and an
/// optional single-row selection.
///
/// The selection is a position into `rows`, so any call that replaces
/// rows or headers drops it.
#[derive(Resource, Debug, Default, Clone)]
pub struct RowTable {
    columns: Vec<String>,
    rows: Vec<SheetRow>,
    selected: Option<usize>,
}

impl RowTable {
    pub fn set_columns(&mut self, columns: &[String]) {
        self.columns = columns.to_vec();
        self.selected = None;
    }

    pub fn set_rows(&mut self, rows: &[SheetRow]) {
        self.rows = rows.to_vec();
        self.selected = None;
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[SheetRow] {
        &self.rows
    }

    /// Selects the row at `index`. Returns true when the selection changed.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.rows.len() || self.selected == Some(index) {
            return false;
        }
        self.selected = Some(index);
        true
    }

    pub fn selection(&self) -> Option<&[String]> {
        self.selected
            .and_then(|idx| self.rows.get(idx))
            .map(Vec::as_slice)
    }

    pub fn selection_index(&self) -> Option<usize> {
        self.selected
    }
}

/// Selects the clicked row. Returns its index for every click on an
/// existing row, including a click on the row already selected, so the
/// form can be refilled after it was cleared.
pub fn click_row(table: &mut RowTable, index: usize) -> Option<usize> {
    if table.select(index) {
        debug!("Row table selection changed to {}.", index);
    }
    (table.selection_index() == Some(index)).then_some(index)
}

/// Draws the table and handles row clicks. Returns the clicked row index.
pub fn show_row_table(ui: &mut egui::Ui, table: &mut RowTable, row_height: f32) -> Option<usize> {
    let num_cols = table.columns().len();
    if num_cols == 0 {
        ui.vertical_centered(|ui| {
            ui.weak("No sheet loaded.");
        });
        return None;
    }

    let mut clicked_row: Option<usize> = None;
    let selected = table.selected;

    egui::ScrollArea::horizontal()
        .id_salt("row_table_hscroll")
        .show(ui, |ui| {
            TableBuilder::new(ui)
                .striped(true)
                .resizable(true)
                .sense(egui::Sense::click())
                .cell_layout(egui::Layout::centered_and_justified(egui::Direction::LeftToRight))
                .columns(Column::initial(140.0).at_least(40.0).clip(true), num_cols)
                .min_scrolled_height(0.0)
                .header(row_height, |mut header| {
                    for name in table.columns() {
                        header.col(|ui| {
                            ui.strong(name);
                        });
                    }
                })
                .body(|body| {
                    body.rows(row_height, table.rows().len(), |mut row: TableRow| {
                        let row_idx = row.index();
                        row.set_selected(selected == Some(row_idx));
                        if let Some(cells) = table.rows().get(row_idx) {
                            for cell in cells {
                                row.col(|ui| {
                                    ui.label(cell);
                                });
                            }
                        }
                        if row.response().clicked() {
                            clicked_row = Some(row_idx);
                        }
                    });
                });
        });

    clicked_row.and_then(|idx| click_row(table, idx))
}
