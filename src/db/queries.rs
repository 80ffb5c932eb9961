use crate::errors::AppResult;
use crate::models::token::Token;
use rusqlite::params;
use rusqlite::{Connection, Result, Row};

pub fn map_row(row: &Row) -> Result<Token> {
    Ok(Token {
        token: row.get("token")?,
    })
}

pub fn insert_token(conn: &Connection, token: &str) -> AppResult<()> {
    conn.execute("INSERT INTO tokens (token) VALUES (?1)", params![token])?;
    Ok(())
}

pub fn load_tokens(conn: &Connection) -> AppResult<Vec<Token>> {
    let mut stmt = conn.prepare("SELECT * FROM tokens")?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn count_tokens(conn: &Connection) -> AppResult<i64> {
    let count = conn.query_row("SELECT COUNT(*) FROM tokens", [], |row| row.get(0))?;
    Ok(count)
}

pub fn count_distinct_tokens(conn: &Connection) -> AppResult<i64> {
    let count = conn.query_row("SELECT COUNT(DISTINCT token) FROM tokens", [], |row| {
        row.get(0)
    })?;
    Ok(count)
}
