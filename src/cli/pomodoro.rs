//! `pomo pomodoro` command implementation

use anyhow::Result;
use clap::Args;
use std::io;
use std::time::Duration;

use crate::config::Config;
use crate::error::Error;
use crate::pomodoro::{
    PomodoroSession, Schedule, SessionOutcome, StdioPrompt, TerminalCountdown,
};
use crate::storage::Storage;
use crate::task::Completion;

#[derive(Args)]
pub struct PomodoroArgs {
    /// Task name
    pub name: String,

    /// Break time between cycles, in minutes (defaults to pomodoro.break_minutes)
    #[arg(short, long, allow_negative_numbers = true)]
    pub break_minutes: Option<f64>,

    /// Number of Pomodoro cycles (defaults to pomodoro.cycles)
    #[arg(short, long, allow_negative_numbers = true)]
    pub cycles: Option<i64>,
}

pub fn run(storage: &Storage, config: &Config, args: PomodoroArgs) -> Result<()> {
    let schedule = Schedule::new(
        args.break_minutes.unwrap_or(config.pomodoro.break_minutes),
        args.cycles
            .unwrap_or_else(|| i64::from(config.pomodoro.cycles)),
    )?;

    let mut store = storage.load()?;
    let task = store
        .find_by_name_mut(&args.name)
        .ok_or_else(|| Error::NotFound(args.name.clone()))?;

    let mut countdown = TerminalCountdown::new(
        Duration::from_millis(config.pomodoro.tick_millis),
        config.pomodoro.clear_screen,
    );
    let mut prompt = StdioPrompt::new(io::stdin().lock(), io::stdout());

    let outcome = PomodoroSession::new(task, schedule).run(&mut countdown, &mut prompt)?;

    if let SessionOutcome::Finished {
        completion: Some(Completion::Completed),
    } = outcome
    {
        storage.save(&store)?;
    }

    println!("{}", super::session_message(&args.name, outcome));
    Ok(())
}
