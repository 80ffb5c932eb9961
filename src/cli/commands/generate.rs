use crate::cli::commands::list::print_tokens;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::token::{generate_token, preview};
use crate::db::log;
use crate::db::store::TokenStore;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Generate { bytes, list } = cmd {
        let n_bytes = bytes.unwrap_or(cfg.token_bytes);
        let token = generate_token(n_bytes)?;

        let store = TokenStore::new(cfg.store_config())?;
        store.insert_token(&token)?;

        success(format!("Generated token: {}", token));

        if *list {
            print_tokens(&store.list_tokens()?);
        }

        log::record(
            &store,
            "generate",
            &preview(&token),
            &format!("Generated token from {} random bytes", n_bytes),
        );
    }
    Ok(())
}
