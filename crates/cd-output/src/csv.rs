//! CSV result backend.
//!
//! One row per remaining item under the header `city,kind,position,id`.
//! `position` counts from 0 in pop order (packages) or dequeue order
//! (vehicles).

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::Writer;

use crate::OutputResult;
use crate::row::CityInventory;
use crate::writer::InventoryWriter;

/// Header row written by [`CsvWriter`].
pub const HEADER: [&str; 4] = ["city", "kind", "position", "id"];

/// Writes the inventory as a single CSV table.
pub struct CsvWriter<W: Write> {
    inner:    Writer<W>,
    finished: bool,
}

impl CsvWriter<File> {
    /// Create (or truncate) the file at `path` and write the header row.
    pub fn from_path(path: &Path) -> OutputResult<Self> {
        Self::with_writer(Writer::from_path(path)?)
    }
}

impl<W: Write> CsvWriter<W> {
    /// Wrap any `Write` sink and write the header row.
    pub fn new(out: W) -> OutputResult<Self> {
        Self::with_writer(Writer::from_writer(out))
    }

    fn with_writer(mut inner: Writer<W>) -> OutputResult<Self> {
        inner.write_record(HEADER)?;
        Ok(Self { inner, finished: false })
    }

    /// Flush and unwrap the sink.
    pub fn into_inner(self) -> OutputResult<W> {
        self.inner.into_inner().map_err(|e| e.into_error().into())
    }
}

impl<W: Write> InventoryWriter for CsvWriter<W> {
    fn write_city(&mut self, inventory: &CityInventory) -> OutputResult<()> {
        for row in inventory.rows() {
            let position = row.position.to_string();
            self.inner.write_record([row.city, row.kind.as_str(), position.as_str(), row.id])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.inner.flush()?;
        Ok(())
    }
}
