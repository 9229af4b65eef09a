// src/sheets/test_helpers.rs
//! In-memory codec double shared by controller and plugin tests.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use super::codec::{CodecError, SpreadsheetCodec};
use super::definitions::{SheetContents, SheetRow};

pub fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[derive(Default)]
struct MemoryFiles {
    files: HashMap<PathBuf, SheetContents>,
    read_failures: HashMap<PathBuf, String>,
    write_failure: Option<String>,
}

/// Clones share the same backing files, so a test can keep a handle
/// after moving the codec into an app resource.
#[derive(Clone, Default)]
pub struct MemoryCodec {
    inner: Arc<Mutex<MemoryFiles>>,
}

impl MemoryCodec {
    pub fn put(&self, path: &str, columns: &[&str], rows: Vec<SheetRow>) {
        self.inner.lock().unwrap().files.insert(
            PathBuf::from(path),
            SheetContents::new(strings(columns), rows),
        );
    }

    /// Makes `path` exist but fail to parse with `message`.
    pub fn fail_reads_with(&self, path: &str, message: &str) {
        let mut inner = self.inner.lock().unwrap();
        inner.files.insert(PathBuf::from(path), SheetContents::default());
        inner
            .read_failures
            .insert(PathBuf::from(path), message.to_string());
    }

    pub fn fail_writes_with(&self, message: &str) {
        self.inner.lock().unwrap().write_failure = Some(message.to_string());
    }

    pub fn get(&self, path: &str) -> Option<SheetContents> {
        self.inner.lock().unwrap().files.get(Path::new(path)).cloned()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.get(path).is_some()
    }
}

impl SpreadsheetCodec for MemoryCodec {
    fn exists(&self, path: &Path) -> bool {
        self.inner.lock().unwrap().files.contains_key(path)
    }

    fn read(&self, path: &Path) -> Result<SheetContents, CodecError> {
        let inner = self.inner.lock().unwrap();
        if let Some(message) = inner.read_failures.get(path) {
            return Err(CodecError::Read(message.clone()));
        }
        inner
            .files
            .get(path)
            .cloned()
            .ok_or_else(|| CodecError::Open(format!("No such file: {}", path.display())))
    }

    fn write(&self, path: &Path, columns: &[String], rows: &[SheetRow]) -> Result<(), CodecError> {
        let mut inner = self.inner.lock().unwrap();
        if let Some(message) = &inner.write_failure {
            return Err(CodecError::Write(message.clone()));
        }
        inner.files.insert(
            path.to_path_buf(),
            SheetContents::new(columns.to_vec(), rows.to_vec()),
        );
        Ok(())
    }
}
