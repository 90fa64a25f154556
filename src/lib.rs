//! jobfinder library root.
//! Exposes the CLI parser, the high-level run() function, and the job
//! repository, local store and screen state holders behind it.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
pub mod notify;
pub mod remote;
pub mod screens;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Environment variable holding the tracing filter directives.
pub const LOG_ENV: &str = "JOBFINDER_LOG";

/// Diagnostics go to stderr so they never mix with command output.
pub fn init_tracing(verbose: bool) {
    let default = if verbose { "jobfinder=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    // a second init (tests) is harmless
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

/// Central command dispatcher
pub async fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    use crate::cli::commands;

    match &cli.command {
        Commands::Init => commands::init::handle(cli),
        Commands::Config { .. } => commands::config::handle(&cli.command, cfg),
        Commands::Db { .. } => commands::db::handle(&cli.command, cfg),
        Commands::Log { .. } => commands::log::handle(&cli.command, cfg),
        Commands::Home { .. } => commands::home::handle(cli, cfg).await,
        Commands::Search { .. } => commands::search::handle(cli, cfg).await,
        Commands::Show { .. } => commands::show::handle(cli, cfg).await,
        Commands::Save { .. } | Commands::Unsave { .. } | Commands::Saved { .. } => {
            commands::saved::handle(cli, cfg).await
        }
        Commands::History { .. } => commands::history::handle(cli, cfg).await,
        Commands::Filters { .. } => commands::filters::handle(&cli.command, cfg),
        Commands::Prefs { .. } => commands::prefs::handle(&cli.command, cfg).await,
        Commands::Push { .. } => commands::push::handle(cli, cfg).await,
        Commands::Profile => commands::profile::handle(cli, cfg),
    }
}

/// Entry point used by main.rs
pub async fn run() -> AppResult<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // config is loaded once; --db overrides the configured database
    let mut cfg = Config::load()?;
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }
    tracing::debug!(database = %cfg.database, fixture = ?cli.fixture, "configuration loaded");

    dispatch(&cli, &cfg).await
}
