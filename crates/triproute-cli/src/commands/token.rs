use anyhow::{Context, Result};
use colored::Colorize;
use triproute::router::TokenStore;
use triproute::App;

use crate::TokenCommands;

pub fn execute(app: &App, command: TokenCommands) -> Result<()> {
    let mut store = app
        .open_store()?
        .context("auth.storage_path is not set in the config file")?;
    let key = app.config().auth.token_key.clone();

    match command {
        TokenCommands::Set { value } => {
            store.set_item(key.as_str(), value);
            store.save()?;
            println!("{} `{}` stored in {:?}", "✓".green(), key, store.path());
        }
        TokenCommands::Clear => {
            store.remove_item(&key);
            store.save()?;
            println!("{} `{}` cleared", "✓".green(), key);
        }
        TokenCommands::Status => {
            let present = app.auth_from_store(&store).is_authenticated();
            let value = store.get_item(&key);
            if present {
                println!("{} `{}` present", "●".green(), key);
            } else if value.is_some() {
                println!("{} `{}` is empty (treated as absent)", "○".yellow(), key);
            } else {
                println!("{} `{}` absent", "○".yellow(), key);
            }
        }
    }

    Ok(())
}
