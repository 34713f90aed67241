mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use triproute::{App, Config, CONFIG_FILE};

#[derive(Parser)]
#[command(name = "triproute")]
#[command(version, about = "triproute CLI - trip planner routes, guard and style content", long_about = None)]
struct Cli {
    /// Config file
    #[arg(short, long, global = true, default_value = CONFIG_FILE)]
    config: PathBuf,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the route table
    Routes,

    /// Resolve a path through the navigation guard
    Navigate {
        /// Target path, e.g. /edit-trip/7
        path: String,

        /// Token value to treat as present (overrides the token store)
        #[arg(short, long)]
        token: Option<String>,

        /// Token store file (overrides auth.storage_path)
        #[arg(short, long)]
        store: Option<PathBuf>,
    },

    /// Generate a URL for a named route
    Url {
        /// Route name, e.g. EditTrip
        name: String,

        /// Parameters as key=value
        #[arg(short, long = "param", value_parser = commands::url::parse_param)]
        params: Vec<(String, String)>,
    },

    /// Manage the token in the file store
    Token {
        #[command(subcommand)]
        command: TokenCommands,
    },

    /// Style content globs for the CSS build tool
    Style {
        #[command(subcommand)]
        command: StyleCommands,
    },
}

#[derive(Subcommand)]
enum TokenCommands {
    /// Store a token value
    Set { value: String },
    /// Remove the token
    Clear,
    /// Show whether a token is present
    Status,
}

#[derive(Subcommand)]
enum StyleCommands {
    /// Report class-bearing files no content glob covers
    Check {
        #[arg(short, long, default_value = ".")]
        root: PathBuf,
    },
    /// List files the build tool would scan
    Files {
        #[arg(short, long, default_value = ".")]
        root: PathBuf,
    },
    /// Write tailwind.config.js
    Emit {
        /// Output file; prints to stdout when omitted
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load(&cli.config)?;
    let app = App::new(config)?;

    match cli.command {
        Commands::Routes => commands::routes::execute(&app),
        Commands::Navigate { path, token, store } => {
            commands::navigate::execute(&app, &path, token.as_deref(), store.as_deref())
        }
        Commands::Url { name, params } => commands::url::execute(&app, &name, &params),
        Commands::Token { command } => commands::token::execute(&app, command),
        Commands::Style { command } => commands::style::execute(&app, command),
    }
}
