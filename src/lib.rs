//! Stavlog library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Db { .. } => cli::commands::db::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Org { .. } => cli::commands::org::handle(&cli.command, cfg, cli.test),
        Commands::Site { .. } => cli::commands::site::handle(&cli.command, cfg),
        Commands::Worker { .. } => cli::commands::worker::handle(&cli.command, cfg),
        Commands::Att { .. } => cli::commands::attendance::handle(&cli.command, cfg),
        Commands::Tx { .. } => cli::commands::tx::handle(&cli.command, cfg),
        Commands::Fuel { .. } => cli::commands::fuel::handle(&cli.command, cfg),
        Commands::Material { .. } => cli::commands::material::handle(&cli.command, cfg),
        Commands::Diary { .. } => cli::commands::diary::handle(&cli.command, cfg),
        Commands::Task { .. } => cli::commands::task::handle(&cli.command, cfg),
        Commands::Finance { .. } => cli::commands::finance::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Backup { .. } => cli::commands::backup::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // Load the config once; --db overrides the configured database path.
    let mut cfg = Config::load();

    if let Some(custom_db) = &cli.db {
        cfg.database = utils::path::expand_tilde(custom_db)
            .to_string_lossy()
            .to_string();
    }

    dispatch(&cli, &cfg)
}
