use crate::db::store::TokenStore;
use crate::errors::AppResult;
use crate::ui::messages::warning;
use chrono::Local;
use rusqlite::Connection;
use rusqlite::params;

/// Write an internal log line into the `log` table.
pub fn ttlog(conn: &Connection, operation: &str, target: &str, message: &str) -> AppResult<()> {
    let now = Local::now().to_rfc3339();

    let mut stmt = conn.prepare_cached(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, ?2, ?3, ?4)",
    )?;

    stmt.execute(params![now, operation, target, message])?;

    Ok(())
}

/// Non-blocking variant of [`ttlog`]: failures only produce a warning.
pub fn record(store: &TokenStore, operation: &str, target: &str, message: &str) {
    let result = store
        .connect()
        .and_then(|conn| ttlog(&conn, operation, target, message));

    if let Err(e) = result {
        warning(format!("Failed to write internal log: {}", e));
    }
}
