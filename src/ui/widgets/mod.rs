// src/ui/widgets/mod.rs

pub(crate) mod field_form;
pub(crate) mod row_table;

pub(crate) use field_form::{show_field_form, sync_form_with_selection, FieldForm};
pub(crate) use row_table::{show_row_table, RowTable};
