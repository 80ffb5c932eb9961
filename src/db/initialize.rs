//! Schema bootstrap for a fresh database.
//!
//! The token store never creates tables on its own; only `init` runs this.

use crate::config::uri::is_uri_filename;
use crate::errors::AppResult;
use rusqlite::{Connection, OptionalExtension, Result};
use std::fs;
use std::path::Path;

/// Check if a table exists in the main schema.
pub fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn create_tokens_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS tokens (
            token TEXT NOT NULL
        );
        "#,
    )
}

fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )
}

/// Open (creating if needed) the database behind `target`.
pub fn open_or_create(target: &str) -> AppResult<Connection> {
    if !is_uri_filename(target)
        && let Some(parent) = Path::new(target).parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    Ok(Connection::open(target)?)
}

/// Create the `tokens` and `log` tables if missing. Returns true when
/// `tokens` had to be created.
pub fn init_db(conn: &Connection) -> AppResult<bool> {
    ensure_log_table(conn)?;

    if table_exists(conn, "tokens")? {
        return Ok(false);
    }

    create_tokens_table(conn)?;
    Ok(true)
}
