// src/sheets/definitions.rs

/// One row of cell text, aligned positionally to the sheet's columns.
pub type SheetRow = Vec<String>;

/// Everything read from (or written to) a spreadsheet file: a header row
/// and the data rows below it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SheetContents {
    pub columns: Vec<String>,
    pub rows: Vec<SheetRow>,
}

impl SheetContents {
    pub fn new(columns: Vec<String>, rows: Vec<SheetRow>) -> Self {
        Self { columns, rows }
    }
}
