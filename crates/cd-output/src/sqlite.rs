//! SQLite result backend (feature `sqlite`).
//!
//! Writes one `inventory` table:
//!
//! | Column     | Type    |
//! |------------|---------|
//! | `city`     | TEXT    |
//! | `kind`     | TEXT    |
//! | `position` | INTEGER |
//! | `id`       | TEXT    |

use std::path::Path;

use rusqlite::Connection;

use crate::OutputResult;
use crate::row::CityInventory;
use crate::writer::InventoryWriter;

/// Writes the inventory to an SQLite database file.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) the database at `path` and initialise the schema.
    ///
    /// Rows left over from a previous run are removed.
    pub fn new(path: &Path) -> OutputResult<Self> {
        let conn = Connection::open(path)?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS inventory (
                 city     TEXT    NOT NULL,
                 kind     TEXT    NOT NULL,
                 position INTEGER NOT NULL,
                 id       TEXT    NOT NULL
             );
             DELETE FROM inventory;",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl InventoryWriter for SqliteWriter {
    fn write_city(&mut self, inventory: &CityInventory) -> OutputResult<()> {
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO inventory (city, kind, position, id) VALUES (?1, ?2, ?3, ?4)",
            )?;
            for row in inventory.rows() {
                stmt.execute(rusqlite::params![
                    row.city,
                    row.kind.as_str(),
                    row.position as i64,
                    row.id,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
