//! The `InventoryWriter` trait implemented by all backend writers.

use tracing::debug;

use cd_core::Registry;

use crate::{CityInventory, OutputResult};

/// Trait implemented by the text, CSV, and SQLite writers.
pub trait InventoryWriter {
    /// Write one city's inventory block.
    fn write_city(&mut self, inventory: &CityInventory) -> OutputResult<()>;

    /// Flush and close all underlying handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

impl<W: InventoryWriter + ?Sized> InventoryWriter for Box<W> {
    fn write_city(&mut self, inventory: &CityInventory) -> OutputResult<()> {
        (**self).write_city(inventory)
    }

    fn finish(&mut self) -> OutputResult<()> {
        (**self).finish()
    }
}

/// Write every city of `registry`, in registration order, then call
/// [`InventoryWriter::finish`].
///
/// The registry is only borrowed; its containers keep their size and order.
pub fn write_registry<W: InventoryWriter + ?Sized>(registry: &Registry, writer: &mut W) -> OutputResult<()> {
    for city in registry {
        writer.write_city(&CityInventory::from_city(city))?;
    }
    writer.finish()?;
    debug!(cities = registry.len(), "inventory written");
    Ok(())
}
