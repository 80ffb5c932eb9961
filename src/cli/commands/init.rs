use crate::cli::parser::Cli;
use crate::config::Config;
use crate::config::uri::resolve_sqlite_target;
use crate::db::initialize::{init_db, open_or_create};
use crate::db::log;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

/// Handle the `init` command
///
/// This initializes:
///  - the configuration file (skipped with `--test`); `$TOKENSTORE_DB_URI`
///    is used for this run but not persisted
///  - the SQLite database file, if missing
///  - the `tokens` and `log` tables
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let target = resolve_sqlite_target(&cfg.connection_uri)?;

    let mut persisted = Config::load()?;
    persisted.apply_overrides_from(None, cli.db.as_deref());
    persisted.init_all(cli.test)?;

    println!("⚙️  Initializing tokenstore…");
    println!("🗄️  Database   : {}", cfg.connection_uri);

    let conn = open_or_create(&target)?;

    if init_db(&conn)? {
        success("Created tokens table.");
    } else {
        info("tokens table already present.");
    }

    if let Err(e) = log::ttlog(
        &conn,
        "init",
        &cfg.connection_uri,
        "Database initialized",
    ) {
        warning(format!("Failed to write internal log: {}", e));
    }

    success(format!("Database initialized at {}", target));
    Ok(())
}
