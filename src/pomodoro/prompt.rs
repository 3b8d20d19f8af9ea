//! Line-based completion prompt

use std::io::{self, BufRead, Write};

use super::session::CompletionPrompt;

/// Asks on `output` and reads answers from `input`, re-asking until it gets
/// `1` (yes) or `0` (no).
pub struct StdioPrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> StdioPrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> CompletionPrompt for StdioPrompt<R, W> {
    fn ask(&mut self, _task_name: &str) -> io::Result<bool> {
        loop {
            write!(
                self.output,
                "Change status to 'Completed'? (enter 1 for Yes, 0 for No): "
            )?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "input closed before an answer was given",
                ));
            }

            match line.trim() {
                "1" => return Ok(true),
                "0" => return Ok(false),
                _ => writeln!(self.output, "Invalid input. Please enter 1 or 0.")?,
            }
        }
    }
}
