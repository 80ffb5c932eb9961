use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{init_via_cli, setup_test_db, setup_test_home, tks, write_config};
use std::fs;

#[test]
fn test_init_creates_schema() {
    let db_path = setup_test_db("cli_init");

    tks()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains(db_path.as_str()))
        .stdout(contains("Created tokens table"));

    // second run is a no-op on the schema
    tks()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("already present"));
}

#[test]
fn test_add_then_list() {
    let db_path = setup_test_db("cli_add_list");
    init_via_cli(&db_path);

    tks()
        .args(["--db", &db_path, "add", "mytoken"])
        .assert()
        .success()
        .stdout(contains("Token stored: mytoken"));

    tks()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("mytoken"))
        .stdout(contains("1 token(s)"));
}

#[test]
fn test_add_with_list_flag_prints_table() {
    let db_path = setup_test_db("cli_add_with_list");
    init_via_cli(&db_path);

    tks()
        .args(["--db", &db_path, "add", "first"])
        .assert()
        .success();

    tks()
        .args(["--db", &db_path, "add", "second", "--list"])
        .assert()
        .success()
        .stdout(contains("first").and(contains("second")))
        .stdout(contains("2 token(s)"));
}

#[test]
fn test_list_empty_table() {
    let db_path = setup_test_db("cli_list_empty");
    init_via_cli(&db_path);

    tks()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("No tokens found."));

    tks()
        .args(["--db", &db_path, "list", "--json"])
        .assert()
        .success()
        .stdout(contains("[]"));
}

#[test]
fn test_injection_shaped_token_is_stored_verbatim() {
    let db_path = setup_test_db("cli_injection");
    init_via_cli(&db_path);
    let hostile = "a'; DROP TABLE tokens; --";

    tks()
        .args(["--db", &db_path, "add", "keep-me"])
        .assert()
        .success();

    tks()
        .args(["--db", &db_path, "add", hostile])
        .assert()
        .success();

    let out = tks()
        .args(["--db", &db_path, "list", "--json"])
        .output()
        .expect("failed to list tokens");
    assert!(out.status.success());

    let rows: Vec<serde_json::Value> = serde_json::from_slice(&out.stdout).unwrap();
    let values: Vec<&str> = rows.iter().filter_map(|r| r["token"].as_str()).collect();

    assert_eq!(values.len(), 2);
    assert!(values.contains(&"keep-me"));
    assert!(values.contains(&hostile));
}

#[test]
fn test_generate_stores_one_new_token() {
    let db_path = setup_test_db("cli_generate");
    init_via_cli(&db_path);

    let out = tks()
        .args(["--db", &db_path, "generate", "--bytes", "24"])
        .output()
        .expect("failed to generate token");
    assert!(out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    let generated = stdout
        .lines()
        .find_map(|l| l.split("Generated token: ").nth(1))
        .map(str::trim)
        .expect("generated token in output")
        .to_string();
    // 24 bytes → 32 base64 chars
    assert_eq!(generated.len(), 32);

    let listed = tks()
        .args(["--db", &db_path, "list", "--json"])
        .output()
        .expect("failed to list tokens");
    let rows: Vec<serde_json::Value> = serde_json::from_slice(&listed.stdout).unwrap();

    let matches = rows
        .iter()
        .filter(|r| r["token"].as_str() == Some(generated.as_str()))
        .count();
    assert_eq!(matches, 1);
}

#[test]
fn test_generate_rejects_low_entropy() {
    let db_path = setup_test_db("cli_generate_low");
    init_via_cli(&db_path);

    tks()
        .args(["--db", &db_path, "generate", "--bytes", "8"])
        .assert()
        .failure()
        .stderr(contains("at least 16 random bytes"));
}

#[test]
fn test_generate_rejects_oversized_request() {
    let db_path = setup_test_db("cli_generate_huge");
    init_via_cli(&db_path);

    tks()
        .args(["--db", &db_path, "generate", "--bytes", "18446744073709551615"])
        .assert()
        .failure()
        .stderr(contains("Invalid token"));

    tks()
        .args(["--db", &db_path, "generate", "--bytes", "1025"])
        .assert()
        .failure()
        .stderr(contains("at most 1024 random bytes"));
}

#[test]
fn test_blank_token_is_rejected() {
    let db_path = setup_test_db("cli_blank");
    init_via_cli(&db_path);

    tks()
        .args(["--db", &db_path, "add", "  "])
        .assert()
        .failure()
        .stderr(contains("Invalid token"));

    tks()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("No tokens found."));
}

#[test]
fn test_list_without_init_fails() {
    let db_path = setup_test_db("cli_no_init");

    tks()
        .args(["--db", &db_path, "list"])
        .assert()
        .failure()
        .stderr(contains("Storage error"));
}

#[test]
fn test_unsupported_scheme_fails() {
    tks()
        .args(["--db", "postgresql://localhost/tokens", "list"])
        .assert()
        .failure()
        .stderr(contains("Configuration error").and(contains("postgresql")));
}

#[test]
fn test_log_records_operations() {
    let db_path = setup_test_db("cli_log");
    init_via_cli(&db_path);

    tks()
        .args(["--db", &db_path, "add", "logged-token"])
        .assert()
        .success();

    tks()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("Database initialized"))
        .stdout(contains("Token inserted"))
        // only a preview of the token is logged
        .stdout(contains("logged…"))
        .stdout(contains("logged-token").not());
}

#[test]
fn test_db_info_and_check() {
    let db_path = setup_test_db("cli_db_info");
    init_via_cli(&db_path);

    tks()
        .args(["--db", &db_path, "add", "dup"])
        .assert()
        .success();
    tks()
        .args(["--db", &db_path, "add", "dup"])
        .assert()
        .success();

    tks()
        .args(["--db", &db_path, "db", "--info", "--check"])
        .assert()
        .success()
        .stdout(contains("Total tokens:"))
        .stdout(contains("Integrity check passed"));
}

#[test]
fn test_config_print_shows_override() {
    let db_path = setup_test_db("cli_config_print");

    tks()
        .args(["--db", &db_path, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("connection_uri"))
        .stdout(contains(db_path.as_str()));
}

#[cfg(not(target_os = "windows"))]
#[test]
fn test_env_uri_beats_config_file() {
    let home = setup_test_home("cli_env_beats_file");
    let file_db = setup_test_db("cli_env_beats_file_cfg");
    let env_db = setup_test_db("cli_env_beats_file_env");
    write_config(&home, &file_db);

    tks()
        .env("HOME", &home)
        .env_remove("TOKENSTORE_DB_URI")
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains(file_db.as_str()));

    tks()
        .env("HOME", &home)
        .env("TOKENSTORE_DB_URI", &env_db)
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains(env_db.as_str()).and(contains(file_db.as_str()).not()));
}

#[cfg(not(target_os = "windows"))]
#[test]
fn test_db_flag_beats_env_uri() {
    let home = setup_test_home("cli_flag_beats_env");
    let env_db = setup_test_db("cli_flag_beats_env_env");
    let flag_db = setup_test_db("cli_flag_beats_env_flag");

    tks()
        .env("HOME", &home)
        .env("TOKENSTORE_DB_URI", &env_db)
        .args(["--db", &flag_db, "config", "--print"])
        .assert()
        .success()
        .stdout(contains(flag_db.as_str()).and(contains(env_db.as_str()).not()));
}

#[cfg(not(target_os = "windows"))]
#[test]
fn test_blank_env_uri_is_ignored() {
    let home = setup_test_home("cli_blank_env");
    let file_db = setup_test_db("cli_blank_env_cfg");
    write_config(&home, &file_db);

    tks()
        .env("HOME", &home)
        .env("TOKENSTORE_DB_URI", "   ")
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains(file_db.as_str()));
}

#[cfg(not(target_os = "windows"))]
#[test]
fn test_env_uri_drives_store_operations() {
    let home = setup_test_home("cli_env_store");
    let env_db = setup_test_db("cli_env_store");

    tks()
        .env("HOME", &home)
        .env("TOKENSTORE_DB_URI", &env_db)
        .args(["--test", "init"])
        .assert()
        .success();

    tks()
        .env("HOME", &home)
        .env("TOKENSTORE_DB_URI", &env_db)
        .args(["add", "from-env"])
        .assert()
        .success();

    tks()
        .env_remove("TOKENSTORE_DB_URI")
        .args(["--db", &env_db, "list"])
        .assert()
        .success()
        .stdout(contains("from-env"));
}

#[cfg(not(target_os = "windows"))]
#[test]
fn test_init_does_not_persist_env_uri() {
    let home = setup_test_home("cli_init_env");
    let env_db = setup_test_db("cli_init_env");

    tks()
        .env("HOME", &home)
        .env("TOKENSTORE_DB_URI", &env_db)
        .arg("init")
        .assert()
        .success();

    // the database itself went where the environment pointed
    assert!(std::path::Path::new(&env_db).exists());

    let saved = fs::read_to_string(home.join(".tokenstore").join("tokenstore.conf"))
        .expect("config file written");
    assert!(!saved.contains(env_db.as_str()));
    assert!(saved.contains("tokenstore.sqlite"));
}

#[cfg(not(target_os = "windows"))]
#[test]
fn test_init_persists_db_flag() {
    let home = setup_test_home("cli_init_flag");
    let flag_db = setup_test_db("cli_init_flag");

    tks()
        .env("HOME", &home)
        .env_remove("TOKENSTORE_DB_URI")
        .args(["--db", &flag_db, "init"])
        .assert()
        .success();

    let saved = fs::read_to_string(home.join(".tokenstore").join("tokenstore.conf"))
        .expect("config file written");
    assert!(saved.contains(flag_db.as_str()));
}
