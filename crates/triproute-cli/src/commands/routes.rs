use anyhow::Result;
use colored::Colorize;
use triproute::App;

pub fn execute(app: &App) -> Result<()> {
    println!("{}", "Routes".green().bold());
    println!();

    for route in app.router().routes() {
        let access = if route.requires_auth {
            "auth".yellow()
        } else {
            "public".normal()
        };
        let props = if route.forward_params { "props" } else { "" };

        println!(
            "  {:<18} {:<12} {:<16} {:<7} {}",
            route.pattern.cyan(),
            route.name.as_deref().unwrap_or("-"),
            route.component,
            access,
            props
        );
    }

    println!();
    println!(
        "Protected routes redirect to {} when `{}` is absent",
        app.config().auth.redirect_to.cyan(),
        app.config().auth.token_key
    );
    Ok(())
}
