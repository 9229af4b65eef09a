// src/sheets/store.rs
use thiserror::Error;

use super::definitions::SheetRow;

/// Errors raised by whole-row mutations of a [`TabularStore`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Row index {index} is out of range ({len} rows).")]
    OutOfRange { index: usize, len: usize },
    #[error("Row has {found} values but the sheet has {expected} columns.")]
    RowLength { expected: usize, found: usize },
}

/// In-memory table of named columns and positionally aligned rows.
///
/// Every row always holds exactly `columns.len()` cells. Mutations are
/// whole-row only: append, replace by position, remove by position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabularStore {
    columns: Vec<String>,
    rows: Vec<SheetRow>,
}

impl TabularStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces all content. Rows are fitted to the column count so the
    /// width invariant holds even for ragged input.
    pub fn load(&mut self, columns: Vec<String>, rows: Vec<SheetRow>) {
        let width = columns.len();
        self.columns = columns;
        self.rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, String::new());
                row
            })
            .collect();
    }

    pub fn append(&mut self, row: SheetRow) -> Result<(), StoreError> {
        self.check_width(&row)?;
        self.rows.push(row);
        Ok(())
    }

    pub fn replace(&mut self, index: usize, row: SheetRow) -> Result<(), StoreError> {
        self.check_index(index)?;
        self.check_width(&row)?;
        self.rows[index] = row;
        Ok(())
    }

    /// Removes the row at `index`; later rows shift up by one.
    pub fn remove(&mut self, index: usize) -> Result<SheetRow, StoreError> {
        self.check_index(index)?;
        Ok(self.rows.remove(index))
    }

    pub fn snapshot(&self) -> &[SheetRow] {
        &self.rows
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn check_index(&self, index: usize) -> Result<(), StoreError> {
        if index < self.rows.len() {
            Ok(())
        } else {
            Err(StoreError::OutOfRange {
                index,
                len: self.rows.len(),
            })
        }
    }

    fn check_width(&self, row: &SheetRow) -> Result<(), StoreError> {
        if row.len() == self.columns.len() {
            Ok(())
        } else {
            Err(StoreError::RowLength {
                expected: self.columns.len(),
                found: row.len(),
            })
        }
    }
}
