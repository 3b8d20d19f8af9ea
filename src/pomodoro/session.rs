//! Pomodoro session runner
//!
//! Drives `WORK -> (BREAK -> WORK)* -> DONE` over a single task, then asks
//! whether the task should be marked completed.

use std::io;

use tracing::{debug, info};

use super::schedule::{Interval, IntervalKind, Schedule};
use crate::task::{Completion, Task};

/// How a single countdown ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownOutcome {
    Elapsed,
    Cancelled,
}

/// Runs one timed interval to completion (or cancellation)
pub trait Countdown {
    fn run(&mut self, label: &str, minutes: f64) -> io::Result<CountdownOutcome>;
}

/// Asks the user whether a task should be marked completed
pub trait CompletionPrompt {
    fn ask(&mut self, task_name: &str) -> io::Result<bool>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// Every interval ran; `completion` is `None` when the user kept the task pending
    Finished { completion: Option<Completion> },
    /// The user stopped an interval; no completion was offered
    Cancelled { intervals_run: usize },
}

pub struct PomodoroSession<'a> {
    task: &'a mut Task,
    schedule: Schedule,
}

impl<'a> PomodoroSession<'a> {
    pub fn new(task: &'a mut Task, schedule: Schedule) -> Self {
        Self { task, schedule }
    }

    pub fn plan(&self) -> impl Iterator<Item = Interval> {
        self.schedule.plan(self.task.estimated_minutes())
    }

    fn label(&self, interval: &Interval) -> String {
        let cycle = format!(
            "Pomodoro Cycle {}/{}",
            interval.cycle,
            self.schedule.cycles()
        );
        match interval.kind {
            IntervalKind::Work => format!("{cycle} - Work interval for '{}'", self.task.name()),
            IntervalKind::Break => format!("{cycle} - Break"),
        }
    }

    pub fn run(
        self,
        countdown: &mut dyn Countdown,
        prompt: &mut dyn CompletionPrompt,
    ) -> io::Result<SessionOutcome> {
        info!(
            task = %self.task.name(),
            cycles = self.schedule.cycles(),
            break_minutes = self.schedule.break_minutes(),
            "Starting Pomodoro"
        );

        for (index, interval) in self.plan().enumerate() {
            let label = self.label(&interval);
            debug!(%label, minutes = interval.minutes, "Starting interval");
            if countdown.run(&label, interval.minutes)? == CountdownOutcome::Cancelled {
                info!(task = %self.task.name(), intervals_run = index, "Pomodoro cancelled");
                return Ok(SessionOutcome::Cancelled {
                    intervals_run: index,
                });
            }
        }

        let completion = if prompt.ask(self.task.name())? {
            Some(self.task.complete())
        } else {
            None
        };
        Ok(SessionOutcome::Finished { completion })
    }
}
