//! Pomotask - personal task tracker with a Pomodoro timer

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use pomotask::cli::{self, Cli, Commands};
use pomotask::config::Config;
use pomotask::storage::Storage;

fn main() -> Result<()> {
    if std::env::var("POMOTASK_DEBUG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter("pomotask=debug")
            .with_writer(std::io::stderr)
            .init();
    }

    let cli = Cli::parse();

    // Completion needs neither config nor the task file
    if let Some(Commands::Completion { shell }) = cli.command {
        generate(shell, &mut Cli::command(), "pomo", &mut std::io::stdout());
        return Ok(());
    }

    let config = Config::load().context("Failed to load config.toml")?;
    let storage = Storage::resolve(cli.file.as_deref(), &config)?;

    match cli.command {
        Some(command) => cli::dispatch(command, &storage, &config),
        None => cli::menu::run(&storage, &config),
    }
}
