//! Container file access: namespaces, objects, and revision cycles.
//!
//! Namespaces are top-level compartments keyed by a string; objects are
//! named entries inside a namespace. Writing a name that already exists in
//! a namespace appends a new revision cycle, and bare-name reads return the
//! newest cycle. Enumeration follows write order, which is the container's
//! native order and stays stable across invocations.

use std::path::Path;

use rusqlite::{Connection, OpenFlags, OptionalExtension, params};
use tracing::debug;

use crate::storage::error::{StorageError, StorageResult};

/// How a container file is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenMode {
    /// Read-write; the file and schema are created if absent.
    Append,
    /// Read-only; fails if the file is missing or not a container.
    ReadOnly,
}

/// Row id of a namespace inside a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamespaceId(i64);

/// A namespace as enumerated from the container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceRow {
    pub id: NamespaceId,
    pub key: String,
}

/// A named entry inside a namespace, with its newest revision cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub latest_cycle: u32,
}

/// Handle to an open container file.
///
/// The handle is exclusively owned by the process that opened it; there is
/// no cross-process coordination. `close` consumes the handle, so writes
/// after release do not compile.
pub struct Container {
    conn: Connection,
}

impl Container {
    /// Opens the container at `path`.
    ///
    /// `Append` creates the file and schema when absent. `ReadOnly` probes
    /// the schema so that a missing or wrong-format file is rejected here
    /// rather than on first use.
    pub fn open(path: impl AsRef<Path>, mode: OpenMode) -> StorageResult<Self> {
        let path = path.as_ref();
        match mode {
            OpenMode::Append => {
                let conn = Connection::open(path)?;
                let container = Self { conn };
                container.init_schema()?;
                Ok(container)
            }
            OpenMode::ReadOnly => {
                let conn = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY)?;
                let container = Self { conn };
                container.verify_schema(path)?;
                Ok(container)
            }
        }
    }

    /// Opens an in-memory container for testing.
    pub fn open_in_memory() -> StorageResult<Self> {
        let conn = Connection::open_in_memory()?;
        let container = Self { conn };
        container.init_schema()?;
        Ok(container)
    }

    fn init_schema(&self) -> StorageResult<()> {
        self.conn.execute(
            r#"
            CREATE TABLE IF NOT EXISTS namespaces (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                key TEXT NOT NULL UNIQUE,
                created_at TEXT NOT NULL
            )
            "#,
            [],
        )?;

        self.conn.execute(
            r#"
            CREATE TABLE IF NOT EXISTS objects (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                namespace_id INTEGER NOT NULL,
                name TEXT NOT NULL,
                cycle INTEGER NOT NULL,
                payload TEXT NOT NULL,
                written_at TEXT NOT NULL,
                UNIQUE (namespace_id, name, cycle),
                FOREIGN KEY (namespace_id) REFERENCES namespaces(id)
            )
            "#,
            [],
        )?;

        Ok(())
    }

    fn verify_schema(&self, path: &Path) -> StorageResult<()> {
        let probe: Result<i64, rusqlite::Error> =
            self.conn.query_row("SELECT COUNT(*) FROM namespaces", [], |row| row.get(0));
        match probe {
            Ok(_) => Ok(()),
            Err(_) => Err(StorageError::InvalidFormat(path.display().to_string())),
        }
    }

    /// Returns the namespace keyed by `key`, creating it if absent.
    pub fn ensure_namespace(&self, key: &str) -> StorageResult<NamespaceId> {
        if let Some(id) = self.find_namespace(key)? {
            return Ok(id);
        }
        let created_at = chrono::Local::now().to_rfc3339();
        self.conn.execute(
            "INSERT INTO namespaces (key, created_at) VALUES (?1, ?2)",
            params![key, created_at],
        )?;
        debug!(key, "created namespace");
        Ok(NamespaceId(self.conn.last_insert_rowid()))
    }

    /// Looks up a namespace by its exact key.
    pub fn find_namespace(&self, key: &str) -> StorageResult<Option<NamespaceId>> {
        let id: Option<i64> = self
            .conn
            .query_row("SELECT id FROM namespaces WHERE key = ?1", params![key], |row| row.get(0))
            .optional()?;
        Ok(id.map(NamespaceId))
    }

    /// All namespaces in the container's native (write) order.
    pub fn namespaces(&self) -> StorageResult<Vec<NamespaceRow>> {
        let mut stmt = self.conn.prepare("SELECT id, key FROM namespaces ORDER BY id")?;
        let rows = stmt
            .query_map([], |row| {
                Ok(NamespaceRow { id: NamespaceId(row.get(0)?), key: row.get(1)? })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// Writes `payload` under `name`, appending a new revision cycle.
    ///
    /// Earlier cycles are kept; nothing is overwritten. Returns the cycle
    /// number of the write (cycles start at 1).
    pub fn write_object(&self, ns: NamespaceId, name: &str, payload: &str) -> StorageResult<u32> {
        let cycle: u32 = self.conn.query_row(
            "SELECT COALESCE(MAX(cycle), 0) + 1 FROM objects WHERE namespace_id = ?1 AND name = ?2",
            params![ns.0, name],
            |row| row.get(0),
        )?;
        let written_at = chrono::Local::now().to_rfc3339();
        self.conn.execute(
            r#"
            INSERT INTO objects (namespace_id, name, cycle, payload, written_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
            params![ns.0, name, cycle, payload, written_at],
        )?;
        Ok(cycle)
    }

    /// The newest revision of `name`, or `None` if the name was never written.
    pub fn read_latest(&self, ns: NamespaceId, name: &str) -> StorageResult<Option<String>> {
        let payload: Option<String> = self
            .conn
            .query_row(
                r#"
                SELECT payload FROM objects
                WHERE namespace_id = ?1 AND name = ?2
                ORDER BY cycle DESC LIMIT 1
                "#,
                params![ns.0, name],
                |row| row.get(0),
            )
            .optional()?;
        Ok(payload)
    }

    /// A specific revision of `name`.
    ///
    /// Alternate accessor for the explicit-revision addressing mode; the
    /// list/get surface only ever reads the newest cycle.
    pub fn read_revision(
        &self,
        ns: NamespaceId,
        name: &str,
        cycle: u32,
    ) -> StorageResult<Option<String>> {
        let payload: Option<String> = self
            .conn
            .query_row(
                "SELECT payload FROM objects WHERE namespace_id = ?1 AND name = ?2 AND cycle = ?3",
                params![ns.0, name, cycle],
                |row| row.get(0),
            )
            .optional()?;
        Ok(payload)
    }

    /// Entry names with their newest cycle, in first-write order.
    pub fn entries(&self, ns: NamespaceId) -> StorageResult<Vec<Entry>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT name, MAX(cycle) FROM objects
            WHERE namespace_id = ?1
            GROUP BY name ORDER BY MIN(id)
            "#,
        )?;
        let entries = stmt
            .query_map(params![ns.0], |row| {
                Ok(Entry { name: row.get(0)?, latest_cycle: row.get(1)? })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(entries)
    }

    /// Releases the file handle.
    pub fn close(self) -> StorageResult<()> {
        self.conn.close().map_err(|(_, err)| StorageError::Database(err))
    }
}
