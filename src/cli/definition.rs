//! Command-line definition

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use super::add::AddArgs;
use super::delete::DeleteArgs;
use super::done::DoneArgs;
use super::list::ListArgs;
use super::pomodoro::PomodoroArgs;
use super::show::ShowArgs;

#[derive(Parser)]
#[command(name = "pomo")]
#[command(about = "Priority-bucketed task lists with a built-in Pomodoro timer")]
#[command(
    long_about = "Track tasks in LOW / MID / HIGH priority lists and work through them \
                  with a Pomodoro timer.\n\nRun without a subcommand for the interactive menu."
)]
#[command(version)]
pub struct Cli {
    /// Task file to read and write (defaults to the configured path)
    #[arg(short = 'f', long, global = true, env = "POMOTASK_FILE")]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new task
    #[command(alias = "new")]
    Add(AddArgs),

    /// Show the task lists
    #[command(alias = "ls")]
    List(ListArgs),

    /// Show every field of a task
    Show(ShowArgs),

    /// Mark a task as completed
    Done(DoneArgs),

    /// Delete a task
    #[command(alias = "rm")]
    Delete(DeleteArgs),

    /// Run Pomodoro cycles for a task
    #[command(alias = "start")]
    Pomodoro(PomodoroArgs),

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
