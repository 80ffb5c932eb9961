#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tokenstore::config::uri::sqlite_uri_for;
use tokenstore::db::initialize::{init_db, open_or_create};
use tokenstore::{StoreConfig, TokenStore};

pub fn tks() -> Command {
    cargo_bin_cmd!("tokenstore")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_tokenstore.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Initialize the schema through the CLI (`--test` keeps the user config untouched)
pub fn init_via_cli(db_path: &str) {
    tks()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Fresh database with the `tokens` table, opened through the library API
pub fn fresh_store(name: &str) -> TokenStore {
    let db_path = setup_test_db(name);
    let conn = open_or_create(&db_path).expect("open db");
    init_db(&conn).expect("init db");
    store_at(&db_path)
}

/// Database whose schema is provided by the caller instead of `init`
pub fn store_with_schema(name: &str, schema: &str) -> TokenStore {
    let db_path = setup_test_db(name);
    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    conn.execute_batch(schema).expect("create schema");
    store_at(&db_path)
}

pub fn store_at(db_path: &str) -> TokenStore {
    TokenStore::new(StoreConfig {
        connection_uri: sqlite_uri_for(Path::new(db_path)),
    })
    .expect("valid URI")
}

pub fn values(store: &TokenStore) -> Vec<String> {
    store
        .list_tokens()
        .expect("list tokens")
        .into_iter()
        .map(|t| t.token)
        .collect()
}

/// Temp directory used as $HOME so config files stay out of the real one
pub fn setup_test_home(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_tokenstore_home", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create test home");
    path
}

/// Write `~/.tokenstore/tokenstore.conf` under `home`
pub fn write_config(home: &Path, connection_uri: &str) {
    let dir = home.join(".tokenstore");
    fs::create_dir_all(&dir).expect("create config dir");
    fs::write(
        dir.join("tokenstore.conf"),
        format!("connection_uri: {}\ntoken_bytes: 32\n", connection_uri),
    )
    .expect("write config");
}
