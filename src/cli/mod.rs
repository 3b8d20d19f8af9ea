//! CLI command implementations

pub mod add;
pub mod definition;
pub mod delete;
pub mod done;
pub mod list;
pub mod menu;
pub mod pomodoro;
pub mod show;

pub use definition::{Cli, Commands};

use anyhow::Result;

use crate::config::Config;
use crate::pomodoro::SessionOutcome;
use crate::storage::Storage;
use crate::task::{Completion, Priority, TaskStore};

/// Run a one-shot subcommand against the task file.
///
/// `Completion` needs no task file and is handled by the binary.
pub fn dispatch(command: Commands, storage: &Storage, config: &Config) -> Result<()> {
    match command {
        Commands::Add(args) => add::run(storage, args),
        Commands::List(args) => list::run(storage, args),
        Commands::Show(args) => show::run(storage, args),
        Commands::Done(args) => done::run(storage, args),
        Commands::Delete(args) => delete::run(storage, args),
        Commands::Pomodoro(args) => pomodoro::run(storage, config, args),
        Commands::Completion { .. } => Ok(()),
    }
}

fn list_heading(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "High priority tasks:",
        Priority::Mid => "Mid priority tasks:",
        Priority::Low => "Low priority tasks:",
    }
}

/// All three lists, highest priority first, one summary line per task
pub fn render_lists(store: &TaskStore) -> String {
    let mut out = String::from("--- Current Task Lists ---\n");
    for (priority, tasks) in store.list_all() {
        out.push_str(list_heading(priority));
        out.push('\n');
        if tasks.is_empty() {
            out.push_str("  (none)\n");
        }
        for task in tasks {
            out.push_str("  ");
            out.push_str(&task.summary());
            out.push('\n');
        }
    }
    out.push_str("--------------------------\n");
    out
}

pub fn completion_message(task_name: &str, completion: Completion) -> String {
    match completion {
        Completion::Completed => format!("Task '{}' was completed successfully.", task_name),
        Completion::AlreadyCompleted => format!("Task '{}' is already completed.", task_name),
    }
}

pub fn session_message(task_name: &str, outcome: SessionOutcome) -> String {
    match outcome {
        SessionOutcome::Finished {
            completion: Some(completion),
        } => format!(
            "Pomodoro cycles finished.\n{}",
            completion_message(task_name, completion)
        ),
        SessionOutcome::Finished { completion: None } => format!(
            "Pomodoro cycles finished.\nTask '{}' status remains unchanged.",
            task_name
        ),
        SessionOutcome::Cancelled { intervals_run } => format!(
            "Pomodoro stopped after {} interval(s). Task '{}' status remains unchanged.",
            intervals_run, task_name
        ),
    }
}
