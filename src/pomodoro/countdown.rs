//! Terminal countdown display
//!
//! Renders the remaining time once per tick. While running, `q`, `Esc` or
//! `Ctrl-C` stop the interval early.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use crossterm::cursor::{MoveTo, MoveToNextLine};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::queue;
use crossterm::style::Print;
use crossterm::terminal::{self, Clear, ClearType};
use tracing::debug;

use super::session::{Countdown, CountdownOutcome};

pub struct TerminalCountdown {
    tick: Duration,
    clear_screen: bool,
}

impl TerminalCountdown {
    pub fn new(tick: Duration, clear_screen: bool) -> Self {
        Self {
            tick: tick.max(Duration::from_millis(50)),
            clear_screen,
        }
    }

    fn render(&self, out: &mut impl Write, label: &str, status: &str) -> io::Result<()> {
        if self.clear_screen {
            queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
        } else {
            queue!(out, MoveToNextLine(1))?;
        }
        queue!(
            out,
            Print(label),
            MoveToNextLine(1),
            Print(status),
            MoveToNextLine(1)
        )?;
        out.flush()
    }
}

impl Countdown for TerminalCountdown {
    fn run(&mut self, label: &str, minutes: f64) -> io::Result<CountdownOutcome> {
        let total = Duration::try_from_secs_f64(minutes * 60.0)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
        let end = Instant::now().checked_add(total).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{} minutes is too long for a countdown", minutes),
            )
        })?;
        let mut stdout = io::stdout();

        // Without a terminal (e.g. piped stdin) there is nothing to poll; just wait.
        let raw = RawModeGuard::enable();
        if raw.is_none() {
            debug!("Raw mode unavailable, countdown cannot be cancelled");
        }

        loop {
            let remaining = end.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                break;
            }

            let hint = if raw.is_some() { "  (q to stop)" } else { "" };
            let status = format!("Remaining: {}{}", format_remaining(remaining), hint);
            self.render(&mut stdout, label, &status)?;

            let wait = remaining.min(self.tick);
            if raw.is_some() {
                if wait_for_cancel(wait)? {
                    self.render(&mut stdout, label, "Stopped.")?;
                    return Ok(CountdownOutcome::Cancelled);
                }
            } else {
                std::thread::sleep(wait);
            }
        }

        self.render(&mut stdout, label, "Time's up!")?;
        Ok(CountdownOutcome::Elapsed)
    }
}

/// Restores cooked mode when dropped
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> Option<Self> {
        terminal::enable_raw_mode().ok().map(|_| Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

/// Poll for a cancel key for up to `wait`; true if one was pressed
fn wait_for_cancel(wait: Duration) -> io::Result<bool> {
    let deadline = Instant::now() + wait;
    loop {
        let left = deadline.saturating_duration_since(Instant::now());
        if left.is_zero() || !event::poll(left)? {
            return Ok(false);
        }
        if let Event::Key(key) = event::read()? {
            if is_cancel_key(&key) {
                return Ok(true);
            }
        }
    }
}

fn is_cancel_key(key: &KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// `MM:SS`, rounding partial seconds up so the display never shows 00:00 early
pub fn format_remaining(remaining: Duration) -> String {
    let secs = remaining.as_secs() + u64::from(remaining.subsec_nanos() > 0);
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
