// src/sheets/controller.rs
use bevy::prelude::*;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::codec::SpreadsheetCodec;
use super::store::{StoreError, TabularStore};
use crate::ui::widgets::{FieldForm, RowTable};

pub const MSG_SAVED: &str = "Saved.";
pub const MSG_ROW_ADDED: &str = "Row has been successfully added.";
pub const MSG_ROW_UPDATED: &str = "Row has been successfully updated.";
pub const MSG_ROW_DELETED: &str = "Row has been successfully deleted.";

/// Operation attempted in a state that does not allow it.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precondition {
    #[error("first load the file.")]
    NotLoaded,
    #[error("Please, first select a row in the table.")]
    NoSelection,
}

/// User-facing failure of an edit operation. `Display` is the exact text
/// shown in the error notification.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    #[error("{} does not exist.", .0.display())]
    FileNotFound(PathBuf),
    #[error("{0}")]
    Io(String),
    #[error(transparent)]
    Precondition(#[from] Precondition),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// What a successful operation did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    Loaded { path: PathBuf, rows: usize },
    Saved { path: PathBuf },
    Added,
    Updated { index: usize },
    Deleted { index: usize },
}

impl EditOutcome {
    /// Confirmation text for the user; loading is confirmed by the table
    /// itself and has none.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            EditOutcome::Loaded { .. } => None,
            EditOutcome::Saved { .. } => Some(MSG_SAVED),
            EditOutcome::Added => Some(MSG_ROW_ADDED),
            EditOutcome::Updated { .. } => Some(MSG_ROW_UPDATED),
            EditOutcome::Deleted { .. } => Some(MSG_ROW_DELETED),
        }
    }
}

impl fmt::Display for EditOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditOutcome::Loaded { path, rows } => {
                write!(f, "loaded {} rows from '{}'", rows, path.display())
            }
            EditOutcome::Saved { path } => write!(f, "saved to '{}'", path.display()),
            EditOutcome::Added => write!(f, "row appended"),
            EditOutcome::Updated { index } => write!(f, "row {} replaced", index),
            EditOutcome::Deleted { index } => write!(f, "row {} removed", index),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditState {
    #[default]
    NoDataLoaded,
    DataLoaded(TabularStore),
}

/// Owns the loaded sheet and runs every load/save/add/update/delete.
///
/// A failing operation never leaves a partial mutation behind: all
/// preconditions are checked before the store, table or form change.
#[derive(Resource, Debug, Default)]
pub struct EditController {
    state: EditState,
}

impl EditController {
    pub fn is_loaded(&self) -> bool {
        matches!(self.state, EditState::DataLoaded(_))
    }

    pub fn store(&self) -> Option<&TabularStore> {
        match &self.state {
            EditState::DataLoaded(store) => Some(store),
            EditState::NoDataLoaded => None,
        }
    }

    fn store_mut(&mut self) -> Result<&mut TabularStore, EditError> {
        match &mut self.state {
            EditState::DataLoaded(store) => Ok(store),
            EditState::NoDataLoaded => Err(Precondition::NotLoaded.into()),
        }
    }

    pub fn load(
        &mut self,
        path: &Path,
        codec: &dyn SpreadsheetCodec,
        table: &mut RowTable,
        form: &mut FieldForm,
    ) -> Result<EditOutcome, EditError> {
        if !codec.exists(path) {
            return Err(EditError::FileNotFound(path.to_path_buf()));
        }
        let contents = codec
            .read(path)
            .map_err(|e| EditError::Io(e.to_string()))?;

        let mut store = TabularStore::new();
        store.load(contents.columns, contents.rows);

        table.set_columns(store.columns());
        table.set_rows(store.snapshot());
        form.set_fields(store.columns());

        let rows = store.row_count();
        self.state = EditState::DataLoaded(store);
        Ok(EditOutcome::Loaded {
            path: path.to_path_buf(),
            rows,
        })
    }

    pub fn save(&self, path: &Path, codec: &dyn SpreadsheetCodec) -> Result<EditOutcome, EditError> {
        let store = self.store().ok_or(Precondition::NotLoaded)?;
        codec
            .write(path, store.columns(), store.snapshot())
            .map_err(|e| EditError::Io(e.to_string()))?;
        Ok(EditOutcome::Saved {
            path: path.to_path_buf(),
        })
    }

    pub fn add(&mut self, table: &mut RowTable, form: &mut FieldForm) -> Result<EditOutcome, EditError> {
        let store = self.store_mut()?;
        store.append(form.fields())?;
        refresh_after_mutation(store, table, form);
        Ok(EditOutcome::Added)
    }

    pub fn update(&mut self, table: &mut RowTable, form: &mut FieldForm) -> Result<EditOutcome, EditError> {
        let store = self.store_mut()?;
        let index = table.selection_index().ok_or(Precondition::NoSelection)?;
        store.replace(index, form.fields())?;
        refresh_after_mutation(store, table, form);
        Ok(EditOutcome::Updated { index })
    }

    pub fn delete(&mut self, table: &mut RowTable, form: &mut FieldForm) -> Result<EditOutcome, EditError> {
        let store = self.store_mut()?;
        let index = table.selection_index().ok_or(Precondition::NoSelection)?;
        store.remove(index)?;
        refresh_after_mutation(store, table, form);
        Ok(EditOutcome::Deleted { index })
    }
}

// Row positions shifted, so the old selection is dropped (by set_rows)
// and the form is emptied rather than re-synced.
fn refresh_after_mutation(store: &TabularStore, table: &mut RowTable, form: &mut FieldForm) {
    table.set_rows(store.snapshot());
    form.clear_fields();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheets::test_helpers::{strings, MemoryCodec};

    struct Fixture {
        controller: EditController,
        codec: MemoryCodec,
        table: RowTable,
        form: FieldForm,
    }

    impl Fixture {
        fn new() -> Self {
            let codec = MemoryCodec::default();
            codec.put(
                "people.xlsx",
                &["name", "age"],
                vec![strings(&["Ann", "30"])],
            );
            Self {
                controller: EditController::default(),
                codec,
                table: RowTable::default(),
                form: FieldForm::default(),
            }
        }

        fn loaded() -> Self {
            let mut fx = Self::new();
            fx.load("people.xlsx").unwrap();
            fx
        }

        fn load(&mut self, path: &str) -> Result<EditOutcome, EditError> {
            self.controller
                .load(Path::new(path), &self.codec, &mut self.table, &mut self.form)
        }

        fn add(&mut self) -> Result<EditOutcome, EditError> {
            self.controller.add(&mut self.table, &mut self.form)
        }

        fn update(&mut self) -> Result<EditOutcome, EditError> {
            self.controller.update(&mut self.table, &mut self.form)
        }

        fn delete(&mut self) -> Result<EditOutcome, EditError> {
            self.controller.delete(&mut self.table, &mut self.form)
        }

        fn snapshot(&self) -> Vec<Vec<String>> {
            self.controller.store().unwrap().snapshot().to_vec()
        }
    }

    #[test]
    fn load_pushes_columns_and_rows_to_widgets() {
        let mut fx = Fixture::new();
        let outcome = fx.load("people.xlsx").unwrap();

        assert_eq!(
            outcome,
            EditOutcome::Loaded {
                path: PathBuf::from("people.xlsx"),
                rows: 1
            }
        );
        assert!(fx.controller.is_loaded());
        assert_eq!(fx.table.columns(), strings(&["name", "age"]).as_slice());
        assert_eq!(fx.table.rows(), [strings(&["Ann", "30"])]);
        assert_eq!(fx.form.labels().collect::<Vec<_>>(), ["name", "age"]);
        assert_eq!(outcome.message(), None);
    }

    #[test]
    fn load_missing_path_reports_not_found_and_keeps_state() {
        let mut fx = Fixture::new();
        let err = fx.load("missing.xlsx").unwrap_err();
        assert_eq!(err.to_string(), "missing.xlsx does not exist.");
        assert!(!fx.controller.is_loaded());
    }

    #[test]
    fn failed_reload_keeps_previous_sheet() {
        let mut fx = Fixture::loaded();
        fx.codec.fail_reads_with("broken.xlsx", "File is not a zip archive");

        let err = fx.load("broken.xlsx").unwrap_err();
        assert_eq!(err, EditError::Io("File is not a zip archive".to_string()));
        assert_eq!(fx.snapshot(), [strings(&["Ann", "30"])]);
        assert_eq!(fx.table.rows(), [strings(&["Ann", "30"])]);
    }

    #[test]
    fn edits_before_load_are_precondition_errors() {
        let mut fx = Fixture::new();
        let not_loaded = EditError::Precondition(Precondition::NotLoaded);

        assert_eq!(fx.add().unwrap_err(), not_loaded);
        assert_eq!(fx.update().unwrap_err(), not_loaded);
        assert_eq!(fx.delete().unwrap_err(), not_loaded);
        assert_eq!(
            fx.controller.save(Path::new("out.xlsx"), &fx.codec).unwrap_err(),
            not_loaded
        );
        assert_eq!(not_loaded.to_string(), "first load the file.");
        assert!(!fx.controller.is_loaded());
        assert!(!fx.codec.contains("out.xlsx"));
    }

    #[test]
    fn update_and_delete_need_a_selection() {
        let mut fx = Fixture::loaded();
        fx.form.fill_fields(&strings(&["Zed", "99"]));

        let err = fx.update().unwrap_err();
        assert_eq!(err.to_string(), "Please, first select a row in the table.");
        assert_eq!(fx.delete().unwrap_err(), err);
        assert_eq!(fx.snapshot(), [strings(&["Ann", "30"])]);
        assert_eq!(fx.form.fields(), strings(&["Zed", "99"]));
    }

    #[test]
    fn add_update_delete_scenario() {
        let mut fx = Fixture::loaded();

        fx.form.fill_fields(&strings(&["Bob", "25"]));
        assert_eq!(fx.add().unwrap().message(), Some(MSG_ROW_ADDED));
        assert_eq!(
            fx.snapshot(),
            [strings(&["Ann", "30"]), strings(&["Bob", "25"])]
        );
        assert_eq!(fx.form.fields(), strings(&["", ""]));

        assert!(fx.table.select(0));
        fx.form.fill_fields(&strings(&["Anna", "31"]));
        assert_eq!(fx.update().unwrap(), EditOutcome::Updated { index: 0 });
        assert_eq!(
            fx.snapshot(),
            [strings(&["Anna", "31"]), strings(&["Bob", "25"])]
        );
        assert_eq!(fx.table.selection_index(), None);

        assert!(fx.table.select(1));
        assert_eq!(fx.delete().unwrap().message(), Some(MSG_ROW_DELETED));
        assert_eq!(fx.snapshot(), [strings(&["Anna", "31"])]);
        assert_eq!(fx.table.rows(), [strings(&["Anna", "31"])]);
        assert_eq!(fx.table.selection_index(), None);
        assert_eq!(fx.form.fields(), strings(&["", ""]));
    }

    #[test]
    fn stale_selection_after_external_row_change_is_out_of_range() {
        let mut fx = Fixture::loaded();
        fx.table.set_rows(&[strings(&["Ann", "30"]), strings(&["ghost", "0"])]);
        fx.table.select(1);

        let err = fx.delete().unwrap_err();
        assert_eq!(err, EditError::Store(StoreError::OutOfRange { index: 1, len: 1 }));
        assert_eq!(fx.snapshot(), [strings(&["Ann", "30"])]);
    }

    #[test]
    fn save_writes_current_snapshot() {
        let mut fx = Fixture::loaded();
        fx.form.fill_fields(&strings(&["Bob", "25"]));
        fx.add().unwrap();

        let outcome = fx.controller.save(Path::new("out.xlsx"), &fx.codec).unwrap();
        assert_eq!(outcome.message(), Some(MSG_SAVED));

        let written = fx.codec.get("out.xlsx").unwrap();
        assert_eq!(written.columns, strings(&["name", "age"]));
        assert_eq!(written.rows, [strings(&["Ann", "30"]), strings(&["Bob", "25"])]);
    }

    #[test]
    fn save_failure_surfaces_codec_text() {
        let fx = Fixture::loaded();
        fx.codec.fail_writes_with("Permission denied (os error 13)");

        let err = fx.controller.save(Path::new("out.xlsx"), &fx.codec).unwrap_err();
        assert_eq!(err.to_string(), "Permission denied (os error 13)");
        assert!(fx.controller.is_loaded());
    }
}
