// src/sheets/resources.rs
use bevy::prelude::*;

use super::codec::{SpreadsheetCodec, XlsxCodec};

/// The codec used by load/save handlers. Defaults to the workbook codec.
#[derive(Resource)]
pub struct ActiveCodec(Box<dyn SpreadsheetCodec>);

impl ActiveCodec {
    pub fn new(codec: impl SpreadsheetCodec + 'static) -> Self {
        Self(Box::new(codec))
    }

    pub fn codec(&self) -> &dyn SpreadsheetCodec {
        self.0.as_ref()
    }
}

impl Default for ActiveCodec {
    fn default() -> Self {
        Self::new(XlsxCodec)
    }
}
