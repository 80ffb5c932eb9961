use crate::cli::commands::list::print_tokens;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::token::{preview, validate_token};
use crate::db::log;
use crate::db::store::TokenStore;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { token, list } = cmd {
        validate_token(token)?;

        let store = TokenStore::new(cfg.store_config())?;

        if *list {
            let tokens = store.insert_and_list(token)?;
            success(format!("Token stored: {}", token));
            print_tokens(&tokens);
        } else {
            store.insert_token(token)?;
            success(format!("Token stored: {}", token));
        }

        log::record(&store, "add", &preview(token), "Token inserted");
    }
    Ok(())
}
