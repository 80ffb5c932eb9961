use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::stats;
use crate::db::store::TokenStore;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, RED, RESET};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db { info, check } = cmd {
        let store = TokenStore::new(cfg.store_config())?;

        //
        // 1) INFO
        //
        if *info {
            stats::print_db_info(&store, &cfg.connection_uri)?;
        }

        //
        // 2) CHECK
        //
        if *check {
            println!("{}▶ Running integrity check…{}", CYAN, RESET);

            let integrity = stats::integrity_check(&store)?;

            if integrity == "ok" {
                println!("{}✔ Integrity check passed.{}\n", GREEN, RESET);
            } else {
                println!("{}✘ Integrity check failed:{} {}\n", RED, RESET, integrity);
            }
        }
    }

    Ok(())
}
