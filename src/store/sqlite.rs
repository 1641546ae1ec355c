//! SQLite storage backend for the journalist directory

use super::traits::{DirectoryStore, OpenStore, SearchMode, StoreError, StoreResult};
use crate::record::{NewRecord, Record, RecordId};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;
use std::sync::Mutex;
use tracing::debug;

/// Name of the single table holding journalist rows.
const TABLE: &str = "journalists";

/// Columns selected on every read path. The rowid pseudo-column carries
/// the stable identifier; the remaining names are the original Swedish
/// headers, preserved byte-for-byte so databases created by the legacy
/// tool keep working.
const SELECT_COLUMNS: &str = r#"rowid, "Namn", "Kategori", "Ämnesområden", "Typiska Plattformar", "Analys av Position""#;

/// SQLite-backed directory store
///
/// Uses a single database file with one table of journalist rows.
/// Thread-safe via internal mutex on the connection.
pub struct SqliteStore {
    conn: Mutex<Connection>,
    mode: SearchMode,
}

impl SqliteStore {
    /// Set the substring-matching policy for `search`.
    pub fn with_search_mode(mut self, mode: SearchMode) -> Self {
        self.mode = mode;
        self
    }

    /// The active substring-matching policy.
    pub fn search_mode(&self) -> SearchMode {
        self.mode
    }

    /// First-run detection: the table is created by the importer, not at
    /// open time, so reads before the first import must report
    /// `SchemaMissing` rather than a bare SQLite error.
    fn require_table(conn: &Connection) -> StoreResult<()> {
        let present: bool = conn.query_row(
            "SELECT COUNT(*) > 0 FROM sqlite_master WHERE type = 'table' AND name = ?1",
            params![TABLE],
            |row| row.get(0),
        )?;
        if present {
            Ok(())
        } else {
            Err(StoreError::SchemaMissing(TABLE))
        }
    }

    fn row_to_record(row: &Row<'_>) -> rusqlite::Result<Record> {
        Ok(Record {
            id: RecordId::new(row.get(0)?),
            name: row.get(1)?,
            category: row.get(2)?,
            subjects: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
            platforms: row.get(4)?,
            analysis: row.get(5)?,
        })
    }

    fn query_records(conn: &Connection, sql: &str, args: &[&dyn rusqlite::ToSql]) -> StoreResult<Vec<Record>> {
        let mut stmt = conn.prepare(sql)?;
        let rows = stmt.query_map(args, Self::row_to_record)?;
        let mut records = Vec::new();
        for row in rows {
            records.push(row?);
        }
        Ok(records)
    }
}

impl OpenStore for SqliteStore {
    fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        // Ensure parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path).map_err(StoreError::Unavailable)?;
        Ok(Self {
            conn: Mutex::new(conn),
            mode: SearchMode::default(),
        })
    }

    fn open_in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory().map_err(StoreError::Unavailable)?;
        Ok(Self {
            conn: Mutex::new(conn),
            mode: SearchMode::default(),
        })
    }
}

impl DirectoryStore for SqliteStore {
    fn scan(&self) -> StoreResult<Vec<Record>> {
        let conn = self.conn.lock().unwrap();
        Self::require_table(&conn)?;

        let sql = format!("SELECT {SELECT_COLUMNS} FROM {TABLE} ORDER BY rowid");
        Self::query_records(&conn, &sql, &[])
    }

    fn search(&self, term: &str) -> StoreResult<Vec<Record>> {
        let term = term.trim();
        if term.is_empty() {
            return Ok(Vec::new());
        }

        let conn = self.conn.lock().unwrap();
        Self::require_table(&conn)?;

        match self.mode {
            SearchMode::CaseInsensitive => {
                let sql = format!(
                    r#"SELECT {SELECT_COLUMNS} FROM {TABLE}
                       WHERE "Ämnesområden" LIKE ?1 OR "Analys av Position" LIKE ?1
                       ORDER BY rowid"#
                );
                let pattern = format!("%{}%", term);
                Self::query_records(&conn, &sql, &[&pattern])
            }
            SearchMode::CaseSensitive => {
                let sql = format!(
                    r#"SELECT {SELECT_COLUMNS} FROM {TABLE}
                       WHERE instr("Ämnesområden", ?1) > 0 OR instr("Analys av Position", ?1) > 0
                       ORDER BY rowid"#
                );
                Self::query_records(&conn, &sql, &[&term])
            }
        }
    }

    fn get(&self, id: RecordId) -> StoreResult<Option<Record>> {
        let conn = self.conn.lock().unwrap();
        Self::require_table(&conn)?;

        let sql = format!("SELECT {SELECT_COLUMNS} FROM {TABLE} WHERE rowid = ?1");
        let record = conn
            .query_row(&sql, params![id.as_i64()], Self::row_to_record)
            .optional()?;
        Ok(record)
    }

    fn update_subjects(&self, id: RecordId, new_subjects: &str) -> StoreResult<()> {
        let conn = self.conn.lock().unwrap();
        Self::require_table(&conn)?;

        let rows = conn
            .execute(
                &format!(r#"UPDATE {TABLE} SET "Ämnesområden" = ?1 WHERE rowid = ?2"#),
                params![new_subjects, id.as_i64()],
            )
            .map_err(StoreError::WriteFailed)?;

        if rows == 0 {
            return Err(StoreError::RecordNotFound(id));
        }
        debug!(%id, "subjects updated");
        Ok(())
    }

    fn replace_all(&self, rows: &[NewRecord]) -> StoreResult<usize> {
        let mut conn = self.conn.lock().unwrap();
        let tx = conn.transaction().map_err(StoreError::WriteFailed)?;

        tx.execute_batch(&format!(
            r#"
            DROP TABLE IF EXISTS {TABLE};
            CREATE TABLE {TABLE} (
                "Namn" TEXT NOT NULL,
                "Kategori" TEXT,
                "Ämnesområden" TEXT NOT NULL,
                "Typiska Plattformar" TEXT,
                "Analys av Position" TEXT
            );
            "#
        ))
        .map_err(StoreError::WriteFailed)?;

        {
            let mut stmt = tx
                .prepare(&format!(
                    r#"INSERT INTO {TABLE}
                       ("Namn", "Kategori", "Ämnesområden", "Typiska Plattformar", "Analys av Position")
                       VALUES (?1, ?2, ?3, ?4, ?5)"#
                ))
                .map_err(StoreError::WriteFailed)?;
            for row in rows {
                stmt.execute(params![
                    row.name,
                    row.category,
                    row.subjects,
                    row.platforms,
                    row.analysis,
                ])
                .map_err(StoreError::WriteFailed)?;
            }
        }

        tx.commit().map_err(StoreError::WriteFailed)?;
        debug!(rows = rows.len(), "table replaced");
        Ok(rows.len())
    }
}
