//! Pomodoro timer
//!
//! A session runs `cycles` work intervals of the task's estimated duration,
//! separated by breaks, and finally offers to mark the task completed.

pub mod countdown;
pub mod prompt;
pub mod schedule;
pub mod session;

pub use countdown::TerminalCountdown;
pub use prompt::StdioPrompt;
pub use schedule::{Interval, IntervalKind, Schedule};
pub use session::{CompletionPrompt, Countdown, CountdownOutcome, PomodoroSession, SessionOutcome};
