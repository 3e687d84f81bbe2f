//! Sqlite-backed source of known-correct text units
//!
//! Each `address.path` row is a comma-separated list of geographic
//! components with the leaf component last. Extraction yields the leaf of
//! every row, plus each preceding component once per run (deduplicated
//! globally through an explicit pool, case-sensitive exact match).

use parking_lot::Mutex;
use rusqlite::Connection;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::error::Result;

/// Read-only view over the address sample database
pub struct AddressSource {
    conn: Mutex<Connection>,
    limit: i64,
}

impl AddressSource {
    /// Open a database at the given path
    pub fn open<P: AsRef<Path>>(path: P, limit: i64) -> Result<Self> {
        let conn = Connection::open(path)?;
        info!("Opened address source (limit {})", limit);
        Ok(Self {
            conn: Mutex::new(conn),
            limit,
        })
    }

    /// Create an empty in-memory source (useful for testing)
    pub fn in_memory(limit: i64) -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute(
            "CREATE TABLE IF NOT EXISTS address (path TEXT NOT NULL)",
            [],
        )?;
        Ok(Self {
            conn: Mutex::new(conn),
            limit,
        })
    }

    /// Insert one path row (useful for seeding test databases)
    pub fn insert_path(&self, path: &str) -> Result<()> {
        let conn = self.conn.lock();
        conn.execute("INSERT INTO address (path) VALUES (?1)", [path])?;
        Ok(())
    }

    /// Fetch the raw path rows, capped at the configured limit. Rows that
    /// are not valid UTF-8 are skipped with a warning, not fatal.
    pub fn paths(&self) -> Result<Vec<String>> {
        let conn = self.conn.lock();
        let mut stmt = conn.prepare("SELECT path FROM address LIMIT ?1")?;
        let raw = stmt
            .query_map([self.limit], |row| row.get::<_, Vec<u8>>(0))?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let mut rows = Vec::with_capacity(raw.len());
        for bytes in raw {
            match String::from_utf8(bytes) {
                Ok(path) => rows.push(path),
                Err(e) => warn!("Skipping non-UTF-8 path row: {}", e),
            }
        }
        debug!("Fetched {} path rows", rows.len());
        Ok(rows)
    }

    /// Yield deduplicated text units extracted from the path rows
    pub fn text_units(&self) -> Result<impl Iterator<Item = String>> {
        let rows = self.paths()?;
        let mut pool = HashSet::new();
        Ok(rows
            .into_iter()
            .flat_map(move |path| extract_components(&mut pool, &path)))
    }
}

/// Split one path row into text units: the leaf (last field, trimmed) always,
/// each preceding field only on its first appearance in the pool
pub fn extract_components(pool: &mut HashSet<String>, path: &str) -> Vec<String> {
    let fields: Vec<&str> = path.split(',').collect();
    let mut components = Vec::new();
    if let Some((leaf, prefix)) = fields.split_last() {
        components.push(leaf.trim().to_string());
        for field in prefix {
            let trimmed = field.trim();
            if pool.insert(trimmed.to_string()) {
                components.push(trimmed.to_string());
            }
        }
    }
    components
}
