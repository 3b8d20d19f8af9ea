//! Interactive numbered menu
//!
//! Started when `pomo` runs without a subcommand. Holds the in-memory store
//! for the whole session; nothing is written to disk until "Save tasks".

use anyhow::Result;
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use std::io::{self, BufRead, Write};
use std::time::Duration;
use tracing::{debug, warn};

use super::{render_lists, session_message};
use crate::config::Config;
use crate::error::ValidationError;
use crate::pomodoro::{Countdown, PomodoroSession, Schedule, StdioPrompt, TerminalCountdown};
use crate::storage::{ImportOutcome, Storage};
use crate::task::{Priority, RemoveOutcome, Task, TaskStore};

/// Whether the menu loop keeps going after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    /// Input was closed
    Exit,
}

pub struct Menu<'a, R, W> {
    store: TaskStore,
    storage: &'a Storage,
    config: &'a Config,
    countdown: &'a mut dyn Countdown,
    input: R,
    output: W,
    clear_screen: bool,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(
        storage: &'a Storage,
        config: &'a Config,
        countdown: &'a mut dyn Countdown,
        input: R,
        output: W,
    ) -> Self {
        Self {
            store: TaskStore::new(),
            storage,
            config,
            countdown,
            input,
            output,
            clear_screen: false,
        }
    }

    pub fn with_store(mut self, store: TaskStore) -> Self {
        self.store = store;
        self
    }

    pub fn with_clear_screen(mut self, clear_screen: bool) -> Self {
        self.clear_screen = clear_screen;
        self
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn into_store(self) -> TaskStore {
        self.store
    }

    /// Show the menu until "Exit" is chosen or input runs out
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.clear()?;
            writeln!(self.output, "Task Manager")?;
            writeln!(self.output, "1. Create a new task")?;
            writeln!(self.output, "2. Show task lists")?;
            writeln!(self.output, "3. Save tasks")?;
            writeln!(self.output, "4. Import tasks")?;
            writeln!(self.output, "5. Start Pomodoro")?;
            writeln!(self.output, "6. Delete a task")?;
            writeln!(self.output, "7. Exit")?;

            let Some(choice) = self.ask("Choose an option: ")? else {
                break;
            };
            debug!(choice = %choice.trim(), "Menu choice");

            let flow = match choice.trim() {
                "1" => self.create_task()?,
                "2" => {
                    write!(self.output, "{}", render_lists(&self.store))?;
                    Flow::Continue
                }
                "3" => self.save_tasks()?,
                "4" => self.import_tasks()?,
                "5" => self.start_pomodoro()?,
                "6" => self.delete_task()?,
                "7" => {
                    writeln!(self.output, "Exiting...")?;
                    break;
                }
                _ => {
                    writeln!(self.output, "Invalid option. Please try again.")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit || self.ask("Press Enter to continue...")?.is_none() {
                break;
            }
        }
        self.output.flush()
    }

    fn clear(&mut self) -> io::Result<()> {
        if self.clear_screen {
            execute!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }

    /// Prompt and read one line without its line ending; `None` on end of input
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn create_task(&mut self) -> io::Result<Flow> {
        self.clear()?;
        writeln!(self.output, "Create New Task")?;

        let Some(name) = self.ask("Task name: ")? else {
            return Ok(Flow::Exit);
        };
        if name.trim().is_empty() {
            writeln!(self.output, "{}. Task not created.", ValidationError::EmptyName)?;
            return Ok(Flow::Continue);
        }

        let Some(description) = self.ask("Task description: ")? else {
            return Ok(Flow::Exit);
        };

        writeln!(self.output, "Priority:")?;
        writeln!(self.output, "1. Low")?;
        writeln!(self.output, "2. Medium")?;
        writeln!(self.output, "3. High")?;
        let Some(choice) = self.ask("Choose the priority (1/2/3): ")? else {
            return Ok(Flow::Exit);
        };
        let Some(priority) = Priority::parse(&choice) else {
            writeln!(self.output, "Invalid priority. Task not created.")?;
            return Ok(Flow::Continue);
        };

        let Some(minutes) = self.ask("Estimated time to complete (in minutes): ")? else {
            return Ok(Flow::Exit);
        };
        let Ok(minutes) = minutes.trim().parse::<f64>() else {
            writeln!(self.output, "Invalid time. Task not created.")?;
            return Ok(Flow::Continue);
        };

        match Task::new(name, description, priority, minutes) {
            Ok(task) => {
                writeln!(self.output, "Task created successfully:")?;
                writeln!(self.output, "{}", task)?;
                self.store.add(task);
            }
            Err(e) => writeln!(self.output, "{}. Task not created.", e)?,
        }
        Ok(Flow::Continue)
    }

    fn save_tasks(&mut self) -> io::Result<Flow> {
        match self.storage.save(&self.store) {
            Ok(()) => writeln!(
                self.output,
                "Tasks saved successfully to '{}'.",
                self.storage.path().display()
            )?,
            Err(e) => writeln!(self.output, "Error saving tasks: {}", e)?,
        }
        Ok(Flow::Continue)
    }

    fn import_tasks(&mut self) -> io::Result<Flow> {
        match self.storage.import_into(&mut self.store) {
            Ok(ImportOutcome::Imported(count)) => writeln!(
                self.output,
                "Imported {} task(s) from '{}'.",
                count,
                self.storage.path().display()
            )?,
            Ok(ImportOutcome::Missing) => writeln!(
                self.output,
                "'{}' not found. No tasks to import.",
                self.storage.path().display()
            )?,
            Err(e) => writeln!(self.output, "Error importing tasks: {}", e)?,
        }
        Ok(Flow::Continue)
    }

    fn start_pomodoro(&mut self) -> io::Result<Flow> {
        self.clear()?;
        writeln!(self.output, "Start Pomodoro")?;
        write!(self.output, "{}", render_lists(&self.store))?;

        let Some(name) = self.ask("Enter the name of the task to start the Pomodoro: ")? else {
            return Ok(Flow::Exit);
        };
        if self.store.find_by_name(&name).is_none() {
            writeln!(self.output, "Task not found.")?;
            return Ok(Flow::Continue);
        }

        let defaults = &self.config.pomodoro;
        let break_prompt = format!("Break time (in minutes) [{}]: ", defaults.break_minutes);
        let cycles_prompt = format!("Number of Pomodoro cycles [{}]: ", defaults.cycles);
        let (default_break, default_cycles) = (defaults.break_minutes, i64::from(defaults.cycles));

        let Some(break_minutes) = self.ask(&break_prompt)? else {
            return Ok(Flow::Exit);
        };
        let Some(cycles) = self.ask(&cycles_prompt)? else {
            return Ok(Flow::Exit);
        };

        let break_minutes = parse_or_default(&break_minutes, default_break);
        let cycles = parse_or_default(&cycles, default_cycles);
        let (Some(break_minutes), Some(cycles)) = (break_minutes, cycles) else {
            writeln!(self.output, "Invalid input. Operation canceled.")?;
            return Ok(Flow::Continue);
        };
        let schedule = match Schedule::new(break_minutes, cycles) {
            Ok(schedule) => schedule,
            Err(e) => {
                writeln!(self.output, "{}. Operation canceled.", e)?;
                return Ok(Flow::Continue);
            }
        };

        let Some(task) = self.store.find_by_name_mut(&name) else {
            writeln!(self.output, "Task not found.")?;
            return Ok(Flow::Continue);
        };
        let mut prompt = StdioPrompt::new(&mut self.input, &mut self.output);
        let result = PomodoroSession::new(task, schedule).run(&mut *self.countdown, &mut prompt);

        match result {
            Ok(outcome) => writeln!(self.output, "{}", session_message(&name, outcome))?,
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => return Ok(Flow::Exit),
            Err(e) => {
                warn!("Pomodoro interrupted: {}", e);
                writeln!(self.output, "Pomodoro interrupted: {}", e)?;
            }
        }
        Ok(Flow::Continue)
    }

    fn delete_task(&mut self) -> io::Result<Flow> {
        self.clear()?;
        writeln!(self.output, "Delete Task")?;
        write!(self.output, "{}", render_lists(&self.store))?;

        let Some(name) = self.ask("Enter the name of the task to delete: ")? else {
            return Ok(Flow::Exit);
        };
        match self.store.remove_by_name(&name) {
            RemoveOutcome::Removed(task) => writeln!(
                self.output,
                "Task '{}' removed from {} priority list.",
                task.name(),
                task.priority()
            )?,
            RemoveOutcome::NotFound => writeln!(self.output, "Task not found.")?,
        }
        Ok(Flow::Continue)
    }
}

/// Blank input picks the default; anything unparsable is `None`
fn parse_or_default<T: std::str::FromStr>(input: &str, default: T) -> Option<T> {
    let input = input.trim();
    if input.is_empty() {
        Some(default)
    } else {
        input.parse().ok()
    }
}

/// Run the interactive menu on stdin/stdout
pub fn run(storage: &Storage, config: &Config) -> Result<()> {
    let mut store = TaskStore::new();
    if config.menu.import_on_start {
        match storage.import_into(&mut store) {
            Ok(outcome) => debug!(?outcome, "Imported tasks on start"),
            Err(e) => {
                warn!("Failed to import tasks on start: {}", e);
                eprintln!("Warning: could not import tasks: {}", e);
            }
        }
    }

    let mut countdown = TerminalCountdown::new(
        Duration::from_millis(config.pomodoro.tick_millis),
        config.pomodoro.clear_screen,
    );
    let stdin = io::stdin();
    let mut menu = Menu::new(storage, config, &mut countdown, stdin.lock(), io::stdout())
        .with_store(store)
        .with_clear_screen(config.pomodoro.clear_screen);
    menu.run()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pomodoro::CountdownOutcome;
    use std::io::Cursor;
    use tempfile::{tempdir, TempDir};

    #[derive(Default)]
    struct InstantCountdown {
        minutes: Vec<f64>,
    }

    impl Countdown for InstantCountdown {
        fn run(&mut self, _label: &str, minutes: f64) -> io::Result<CountdownOutcome> {
            self.minutes.push(minutes);
            Ok(CountdownOutcome::Elapsed)
        }
    }

    struct Harness {
        _temp: TempDir,
        storage: Storage,
        config: Config,
        countdown: InstantCountdown,
    }

    impl Harness {
        fn new() -> Self {
            let temp = tempdir().unwrap();
            let storage = Storage::new(temp.path().join("tasks.json"));
            Self {
                _temp: temp,
                storage,
                config: Config::default(),
                countdown: InstantCountdown::default(),
            }
        }

        fn run(&mut self, store: TaskStore, script: &str) -> (TaskStore, String) {
            let mut output = Vec::new();
            let store = {
                let mut menu = Menu::new(
                    &self.storage,
                    &self.config,
                    &mut self.countdown,
                    Cursor::new(script.to_string()),
                    &mut output,
                )
                .with_store(store);
                menu.run().unwrap();
                menu.into_store()
            };
            (store, String::from_utf8(output).unwrap())
        }
    }

    #[test]
    fn test_create_task() {
        let mut h = Harness::new();
        let (store, out) = h.run(TaskStore::new(), "1\nWrite report\nQ3 summary\n3\n25\n\n7\n");

        assert!(out.contains("Task created successfully:"));
        let task = &store.bucket(Priority::High)[0];
        assert_eq!(task.name(), "Write report");
        assert_eq!(task.description(), "Q3 summary");
        assert_eq!(task.estimated_minutes(), 25.0);
        assert!(out.ends_with("Exiting...\n"));
    }

    #[test]
    fn test_create_task_rejects_bad_input() {
        let mut h = Harness::new();
        let script = "1\n   \n\n1\nA\n\n9\n\n1\nB\n\n2\nsoon\n\n1\nC\n\n2\n-3\n\n7\n";
        let (store, out) = h.run(TaskStore::new(), script);

        assert!(store.is_empty());
        assert!(out.contains("Task name cannot be empty. Task not created."));
        assert!(out.contains("Invalid priority. Task not created."));
        assert!(out.contains("Invalid time. Task not created."));
        assert!(out.contains("Duration must be a positive number of minutes"));
    }

    #[test]
    fn test_invalid_option_returns_to_menu() {
        let mut h = Harness::new();
        let (_, out) = h.run(TaskStore::new(), "42\n\n7\n");
        assert!(out.contains("Invalid option. Please try again."));
        assert_eq!(out.matches("Choose an option: ").count(), 2);
    }

    #[test]
    fn test_end_of_input_exits_cleanly() {
        let mut h = Harness::new();
        let (store, _) = h.run(TaskStore::new(), "1\nHalf typed");
        assert!(store.is_empty());
    }

    #[test]
    fn test_save_then_import_into_fresh_menu() {
        let mut h = Harness::new();
        let (_, out) = h.run(TaskStore::new(), "1\nWrite report\nQ3 summary\n3\n25\n\n3\n\n7\n");
        assert!(out.contains("Tasks saved successfully"));

        let (store, out) = h.run(TaskStore::new(), "4\n\n7\n");
        assert!(out.contains("Imported 1 task(s)"));
        let task = &store.bucket(Priority::High)[0];
        assert_eq!(task.name(), "Write report");
        assert!(!task.is_completed());
    }

    #[test]
    fn test_import_without_file() {
        let mut h = Harness::new();
        let (store, out) = h.run(TaskStore::new(), "4\n\n7\n");
        assert!(store.is_empty());
        assert!(out.contains("not found. No tasks to import."));
    }

    #[test]
    fn test_import_corrupt_file_keeps_store() {
        let mut h = Harness::new();
        std::fs::write(h.storage.path(), "{ not json").unwrap();
        let mut store = TaskStore::new();
        store.add(Task::new("kept", "", Priority::Low, 1.0).unwrap());

        let (store, out) = h.run(store, "4\n\n7\n");
        assert!(out.contains("Error importing tasks"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_delete_task() {
        let mut h = Harness::new();
        let mut store = TaskStore::new();
        store.add(Task::new("Old", "", Priority::Mid, 5.0).unwrap());

        let (store, out) = h.run(store, "6\nMissing\n\n6\nOld\n\n7\n");
        assert!(out.contains("Task not found."));
        assert!(out.contains("Task 'Old' removed from MID priority list."));
        assert!(store.is_empty());
    }

    #[test]
    fn test_pomodoro_and_complete() {
        let mut h = Harness::new();
        let mut store = TaskStore::new();
        store.add(Task::new("Focus", "", Priority::High, 20.0).unwrap());

        let (store, out) = h.run(store, "5\nFocus\n5\n3\nx\n1\n\n7\n");
        assert_eq!(h.countdown.minutes, [20.0, 5.0, 20.0, 5.0, 20.0]);
        assert!(out.contains("Invalid input. Please enter 1 or 0."));
        assert!(out.contains("Task 'Focus' was completed successfully."));
        assert!(store.find_by_name("Focus").unwrap().is_completed());
    }

    #[test]
    fn test_pomodoro_uses_configured_defaults() {
        let mut h = Harness::new();
        h.config.pomodoro.break_minutes = 2.0;
        h.config.pomodoro.cycles = 2;
        let mut store = TaskStore::new();
        store.add(Task::new("Focus", "", Priority::Low, 10.0).unwrap());

        let (store, out) = h.run(store, "5\nFocus\n\n\n0\n\n7\n");
        assert_eq!(h.countdown.minutes, [10.0, 2.0, 10.0]);
        assert!(out.contains("status remains unchanged"));
        assert!(!store.find_by_name("Focus").unwrap().is_completed());
    }

    #[test]
    fn test_pomodoro_rejects_bad_schedule() {
        let mut h = Harness::new();
        let mut store = TaskStore::new();
        store.add(Task::new("Focus", "", Priority::Low, 10.0).unwrap());

        let (_, out) = h.run(store, "5\nFocus\n5\n0\n\n5\nFocus\nabc\n2\n\n5\nNope\n\n7\n");
        assert!(h.countdown.minutes.is_empty());
        assert!(out.contains("Invalid number of Pomodoro cycles"));
        assert!(out.contains("Invalid input. Operation canceled."));
        assert!(out.contains("Task not found."));
    }

    #[test]
    fn test_parse_or_default() {
        assert_eq!(parse_or_default("", 4i64), Some(4));
        assert_eq!(parse_or_default(" 7 ", 4i64), Some(7));
        assert_eq!(parse_or_default("x", 4i64), None);
        assert_eq!(parse_or_default("2.5", 5.0f64), Some(2.5));
    }
}
