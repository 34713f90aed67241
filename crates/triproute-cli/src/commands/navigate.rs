use anyhow::Result;
use colored::Colorize;
use std::path::Path;
use tracing::info;
use triproute::router::AuthContext;
use triproute::{App, FileTokenStore};

pub fn execute(app: &App, path: &str, token: Option<&str>, store: Option<&Path>) -> Result<()> {
    let auth = match (token, store) {
        (Some(token), _) => AuthContext::from_token(Some(token)),
        (None, Some(store)) => app.auth_from_store(&FileTokenStore::open(store)?),
        (None, None) => app.load_auth()?,
    };
    info!(path, authenticated = auth.is_authenticated(), "resolving navigation");

    let navigation = app.navigator().resolve(path, &auth)?;

    println!("{} {}", "Requested:".bold(), navigation.requested);
    if navigation.redirected {
        println!(
            "{} {} {}",
            "Location: ".bold(),
            navigation.location.to_string().yellow(),
            "(redirected)".yellow()
        );
    } else {
        println!("{} {}", "Location: ".bold(), navigation.location.to_string().green());
    }
    println!("{} {}", "Page:     ".bold(), navigation.component().cyan());

    let mut props: Vec<_> = navigation.props().into_iter().collect();
    props.sort();
    for (key, value) in props {
        println!("  {} = {}", key, value);
    }

    Ok(())
}
