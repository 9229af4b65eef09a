// src/sheets/codec.rs
use bevy::prelude::{debug, info};
use calamine::{open_workbook_auto, Data, Reader};
use chrono::{NaiveDateTime, Timelike};
use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use thiserror::Error;

use super::definitions::{SheetContents, SheetRow};

/// Failures from the spreadsheet reader/writer. The display text is what
/// the user sees, so it carries the library message unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("{0}")]
    Open(String),
    #[error("Workbook contains no worksheets.")]
    NoWorksheet,
    #[error("{0}")]
    Read(String),
    #[error("{0}")]
    Write(String),
}

impl From<XlsxError> for CodecError {
    fn from(err: XlsxError) -> Self {
        CodecError::Write(err.to_string())
    }
}

/// Reads and writes a single tabular sheet on disk.
pub trait SpreadsheetCodec: Send + Sync {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read(&self, path: &Path) -> Result<SheetContents, CodecError>;

    fn write(&self, path: &Path, columns: &[String], rows: &[SheetRow]) -> Result<(), CodecError>;
}

/// Workbook codec: reads the first worksheet of anything calamine opens
/// (xlsx, xlsm, xls, xlsb, ods) and writes `.xlsx`.
#[derive(Debug, Default, Clone, Copy)]
pub struct XlsxCodec;

impl SpreadsheetCodec for XlsxCodec {
    fn read(&self, path: &Path) -> Result<SheetContents, CodecError> {
        let mut workbook =
            open_workbook_auto(path).map_err(|e| CodecError::Open(e.to_string()))?;

        let sheet_name = workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or(CodecError::NoWorksheet)?;

        let range = workbook
            .worksheet_range(&sheet_name)
            .map_err(|e| CodecError::Read(e.to_string()))?;

        let mut rows_iter = range.rows();
        let raw_headers: Vec<String> = match rows_iter.next() {
            Some(header_row) => header_row.iter().map(cell_text).collect(),
            None => {
                debug!("Worksheet '{}' in '{}' is empty.", sheet_name, path.display());
                return Ok(SheetContents::default());
            }
        };
        let columns = normalize_headers(raw_headers);
        let width = columns.len();

        let rows: Vec<SheetRow> = rows_iter
            .map(|cells| {
                let mut row: SheetRow = cells.iter().take(width).map(cell_text).collect();
                row.resize(width, String::new());
                row
            })
            .collect();

        info!(
            "Read {} rows x {} columns from sheet '{}' of '{}'.",
            rows.len(),
            width,
            sheet_name,
            path.display()
        );
        Ok(SheetContents::new(columns, rows))
    }

    fn write(&self, path: &Path, columns: &[String], rows: &[SheetRow]) -> Result<(), CodecError> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        let header_format = Format::new().set_bold();

        for (col_idx, name) in columns.iter().enumerate() {
            worksheet.write_string_with_format(0, to_col(col_idx)?, name, &header_format)?;
        }
        for (row_idx, row) in rows.iter().enumerate() {
            let excel_row = to_row(row_idx + 1)?;
            for (col_idx, text) in row.iter().enumerate() {
                write_typed_cell(worksheet, excel_row, to_col(col_idx)?, text)?;
            }
        }

        workbook.save(path)?;
        info!(
            "Wrote {} rows x {} columns to '{}'.",
            rows.len(),
            columns.len(),
            path.display()
        );
        Ok(())
    }
}

fn to_col(index: usize) -> Result<u16, CodecError> {
    u16::try_from(index)
        .map_err(|_| CodecError::Write(format!("Column {} exceeds the worksheet limit.", index)))
}

fn to_row(index: usize) -> Result<u32, CodecError> {
    u32::try_from(index)
        .map_err(|_| CodecError::Write(format!("Row {} exceeds the worksheet limit.", index)))
}

/// Display text for a single cell as read from a workbook.
pub fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(n) => {
            if n.fract() == 0.0 && n.abs() < 1e15 {
                format!("{}", *n as i64)
            } else {
                format!("{}", n)
            }
        }
        Data::Int(n) => n.to_string(),
        Data::Bool(true) => "True".to_string(),
        Data::Bool(false) => "False".to_string(),
        Data::DateTime(dt) => dt
            .as_datetime()
            .map(format_datetime)
            .unwrap_or_else(|| cell.to_string()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Error(e) => e.to_string(),
    }
}

// Midnight timestamps render as bare dates.
fn format_datetime(naive: NaiveDateTime) -> String {
    if naive.num_seconds_from_midnight() == 0 {
        naive.format("%Y-%m-%d").to_string()
    } else {
        naive.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

/// Makes header names unique and non-empty. Blank headers become
/// `Unnamed: <index>`; repeats of `x` become `x.1`, `x.2`, ...
pub fn normalize_headers(raw: Vec<String>) -> Vec<String> {
    let mut suffixes: HashMap<String, usize> = HashMap::new();
    let mut used: HashSet<String> = HashSet::new();
    let mut columns = Vec::with_capacity(raw.len());

    for (idx, header) in raw.into_iter().enumerate() {
        let base = if header.trim().is_empty() {
            format!("Unnamed: {}", idx)
        } else {
            header
        };

        let mut suffix = suffixes.get(&base).copied().unwrap_or(0);
        let mut candidate = base.clone();
        while used.contains(&candidate) {
            suffix += 1;
            candidate = format!("{}.{}", base, suffix);
        }
        suffixes.insert(base, suffix);
        used.insert(candidate.clone());
        columns.push(candidate);
    }
    columns
}

/// How a cell's text is stored when written back to a workbook.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellKind {
    Blank,
    Number(f64),
    Bool(bool),
    Text,
}

pub fn classify_cell(text: &str) -> CellKind {
    if text.is_empty() {
        return CellKind::Blank;
    }
    match text {
        "True" => return CellKind::Bool(true),
        "False" => return CellKind::Bool(false),
        _ => {}
    }
    match canonical_number(text) {
        Some(n) => CellKind::Number(n),
        None => CellKind::Text,
    }
}

// A number cell must read back as the exact same text, so `1.50`, `+5`,
// `007`, exponents and integers beyond f64 precision stay text.
fn canonical_number(text: &str) -> Option<f64> {
    if !text.chars().all(|c| c.is_ascii_digit() || matches!(c, '-' | '.')) {
        return None;
    }
    let n: f64 = text.parse().ok()?;
    (n.is_finite() && cell_text(&Data::Float(n)) == text).then_some(n)
}

fn write_typed_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    text: &str,
) -> Result<(), CodecError> {
    match classify_cell(text) {
        CellKind::Blank => {}
        CellKind::Number(n) => {
            worksheet.write_number(row, col, n)?;
        }
        CellKind::Bool(b) => {
            worksheet.write_boolean(row, col, b)?;
        }
        CellKind::Text => {
            worksheet.write_string(row, col, text)?;
        }
    }
    Ok(())
}
