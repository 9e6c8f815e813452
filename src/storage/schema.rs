//! Database schema for the HTTP response cache

/// SQL schema for the cache database
pub const SCHEMA_SQL: &str = r#"
-- One cached GET response per URL
CREATE TABLE IF NOT EXISTS responses (
    url TEXT PRIMARY KEY,
    status_code INTEGER NOT NULL,
    content_type TEXT,
    body BLOB NOT NULL,
    fetched_at TEXT NOT NULL
);
"#;

/// Creates the `responses` table if it does not exist yet
pub fn initialize_schema(conn: &rusqlite::Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(SCHEMA_SQL)?;
    Ok(())
}
