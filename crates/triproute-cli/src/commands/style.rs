use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use triproute::App;

use crate::StyleCommands;

pub fn execute(app: &App, command: StyleCommands) -> Result<()> {
    let style = &app.config().style;

    match command {
        StyleCommands::Check { root } => {
            let uncovered = style.uncovered_files(&root)?;
            if uncovered.is_empty() {
                println!("{} every class-bearing file is covered", "✓".green());
                return Ok(());
            }

            println!(
                "{} {} file(s) may contain class names but match no content glob:",
                "⚠".yellow(),
                uncovered.len()
            );
            for path in &uncovered {
                println!("  {}", path.display());
            }
            anyhow::bail!("style content globs are incomplete");
        }
        StyleCommands::Files { root } => {
            for path in style.scanner()?.matched_files(&root)? {
                println!("{}", path.display());
            }
        }
        StyleCommands::Emit { out } => {
            let rendered = style.render_build_config()?;
            match out {
                Some(path) => {
                    fs::write(&path, rendered)
                        .with_context(|| format!("Failed to write {:?}", path))?;
                    println!("{} wrote {:?}", "✓".green(), path);
                }
                None => print!("{}", rendered),
            }
        }
    }

    Ok(())
}
