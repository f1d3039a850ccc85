//! Plain-text result backend.
//!
//! Each city becomes one block:
//!
//! ```text
//! Ankara
//! Packages:
//! P7
//! P2
//! Vehicles:
//! V1
//! -------------
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::OutputResult;
use crate::row::CityInventory;
use crate::writer::InventoryWriter;

/// Closing line of every city block.
pub const SEPARATOR: &str = "-------------";

/// Writes the human-readable result layout to any `Write` sink.
pub struct TextWriter<W: Write> {
    out:      W,
    finished: bool,
}

impl TextWriter<BufWriter<File>> {
    /// Create (or truncate) the file at `path`.
    pub fn from_path(path: &Path) -> OutputResult<Self> {
        Ok(Self::new(BufWriter::new(File::create(path)?)))
    }
}

impl<W: Write> TextWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, finished: false }
    }

    /// Unwrap the sink.  Call [`finish`][InventoryWriter::finish] first.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> InventoryWriter for TextWriter<W> {
    fn write_city(&mut self, inventory: &CityInventory) -> OutputResult<()> {
        writeln!(self.out, "{}", inventory.city)?;
        writeln!(self.out, "Packages:")?;
        for id in &inventory.packages {
            writeln!(self.out, "{id}")?;
        }
        writeln!(self.out, "Vehicles:")?;
        for id in &inventory.vehicles {
            writeln!(self.out, "{id}")?;
        }
        writeln!(self.out, "{SEPARATOR}")?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.out.flush()?;
        Ok(())
    }
}
