use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::store::TokenStore;
use crate::errors::AppResult;
use crate::models::token::Token;
use crate::utils::colors::{GREY, paint};
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { json } = cmd {
        let store = TokenStore::new(cfg.store_config())?;
        let tokens = store.list_tokens()?;

        if *json {
            println!("{}", serde_json::to_string_pretty(&tokens)?);
        } else {
            print_tokens(&tokens);
        }
    }
    Ok(())
}

/// Render tokens as a two-column table, or a notice when there are none.
pub fn print_tokens(tokens: &[Token]) {
    if tokens.is_empty() {
        println!("No tokens found.");
        return;
    }

    let mut table = Table::new(&["#", "TOKEN"]);
    for (i, t) in tokens.iter().enumerate() {
        table.add_row(vec![(i + 1).to_string(), t.token.clone()]);
    }

    print!("{}", table.render());
    println!("{}", paint(GREY, &format!("{} token(s)", tokens.len())));
}
