//! SQLite response cache
//!
//! This module provides a SQLite-based implementation of the ResponseCache trait.

use crate::storage::schema::initialize_schema;
use crate::storage::traits::{CacheResult, ResponseCache};
use crate::storage::CachedResponse;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

/// SQLite cache backend
pub struct SqliteCache {
    conn: Connection,
}

impl SqliteCache {
    /// Opens (or creates) the cache database at `path`
    ///
    /// The parent directory is created when missing.
    pub fn open(path: &Path) -> CacheResult<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;
        conn.execute_batch(
            "
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = NORMAL;
        ",
        )?;

        initialize_schema(&conn)?;

        Ok(Self { conn })
    }

    /// Creates an in-memory cache
    pub fn open_in_memory() -> CacheResult<Self> {
        let conn = Connection::open_in_memory()?;
        initialize_schema(&conn)?;
        Ok(Self { conn })
    }
}

impl ResponseCache for SqliteCache {
    fn lookup(&self, url: &str) -> CacheResult<Option<CachedResponse>> {
        let mut stmt = self.conn.prepare(
            "SELECT url, status_code, content_type, body, fetched_at FROM responses WHERE url = ?1",
        )?;

        let response = stmt
            .query_row(params![url], |row| {
                Ok(CachedResponse {
                    url: row.get(0)?,
                    status_code: row.get(1)?,
                    content_type: row.get(2)?,
                    body: row.get(3)?,
                    fetched_at: row.get(4)?,
                })
            })
            .optional()?;

        Ok(response)
    }

    fn store(&self, response: &CachedResponse) -> CacheResult<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO responses (url, status_code, content_type, body, fetched_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                response.url,
                response.status_code,
                response.content_type,
                response.body,
                response.fetched_at
            ],
        )?;
        Ok(())
    }

    fn clear(&self) -> CacheResult<()> {
        self.conn.execute("DELETE FROM responses", [])?;
        Ok(())
    }

    fn len(&self) -> CacheResult<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM responses", [], |row| row.get(0))?;
        Ok(count as u64)
    }
}
