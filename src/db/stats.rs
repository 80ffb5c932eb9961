use crate::config::uri::is_uri_filename;
use crate::db::store::TokenStore;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, RESET, YELLOW};
use std::fs;

pub fn print_db_info(store: &TokenStore, connection_uri: &str) -> AppResult<()> {
    println!();

    //
    // 1) URI + FILE SIZE
    //
    println!("{}• URI:{} {}{}{}", CYAN, RESET, YELLOW, connection_uri, RESET);

    let target = store.target();
    if !is_uri_filename(target) {
        let file_size = fs::metadata(target).map(|m| m.len()).unwrap_or(0);
        let file_kb = (file_size as f64) / 1024.0;
        println!("{}• File:{} {}", CYAN, RESET, target);
        println!("{}• Size:{} {:.2} KB", CYAN, RESET, file_kb);
    }

    //
    // 2) TOKEN COUNTS
    //
    let counts = store.token_counts()?;

    println!(
        "{}• Total tokens:{} {}{}{}",
        CYAN, RESET, GREEN, counts.total, RESET
    );
    println!(
        "{}• Distinct tokens:{} {}{}{}",
        CYAN, RESET, GREEN, counts.distinct, RESET
    );

    println!();
    Ok(())
}

/// Run `PRAGMA integrity_check` and return SQLite's verdict.
pub fn integrity_check(store: &TokenStore) -> AppResult<String> {
    let conn = store.connect()?;
    let verdict: String = conn.query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;
    Ok(verdict)
}
