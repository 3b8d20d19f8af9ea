//! Task data model

use std::fmt;
use std::str::FromStr;

use tracing::{debug, info};

use crate::error::ValidationError;

/// Task priority, ordered `Low < Mid < High`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Priority {
    Low,
    Mid,
    High,
}

impl Priority {
    /// All priorities in ascending order
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Mid, Priority::High];

    /// Index of this priority's bucket in a [`crate::task::TaskStore`]
    pub fn ordinal(self) -> usize {
        match self {
            Self::Low => 0,
            Self::Mid => 1,
            Self::High => 2,
        }
    }

    /// Canonical uppercase name, as written to the task document
    pub fn name(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Mid => "MID",
            Self::High => "HIGH",
        }
    }

    /// Lowercase key of this priority's list in the task document
    pub fn key(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Mid => "mid",
            Self::High => "high",
        }
    }

    /// Strict lookup by canonical name, ignoring case
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "LOW" => Some(Self::Low),
            "MID" => Some(Self::Mid),
            "HIGH" => Some(Self::High),
            _ => None,
        }
    }

    /// Lenient parse for user input: names, common aliases and the menu numbers 1-3
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "low" | "l" | "1" => Some(Self::Low),
            "mid" | "medium" | "med" | "m" | "2" => Some(Self::Mid),
            "high" | "h" | "3" => Some(Self::High),
            _ => None,
        }
    }
}

impl FromStr for Priority {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ValidationError::UnknownPriority(s.to_string()))
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of asking a task to complete
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The task moved from pending to completed
    Completed,
    /// The task was already completed; nothing changed
    AlreadyCompleted,
}

/// A task
///
/// Two tasks are equal when every field is equal.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    name: String,
    description: String,
    priority: Priority,
    estimated_minutes: f64,
    completed: bool,
}

impl Task {
    /// Create a new, pending task
    ///
    /// The name must contain something besides whitespace and the estimate
    /// must be a finite number of minutes greater than zero.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        priority: Priority,
        estimated_minutes: f64,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if !estimated_minutes.is_finite() || estimated_minutes <= 0.0 {
            return Err(ValidationError::NonPositiveMinutes(estimated_minutes));
        }

        Ok(Self {
            name,
            description: description.into(),
            priority,
            estimated_minutes,
            completed: false,
        })
    }

    /// Rebuild a persisted task, restoring its completion flag without
    /// going through [`Task::complete`].
    pub(crate) fn restore(
        name: impl Into<String>,
        description: impl Into<String>,
        priority: Priority,
        estimated_minutes: f64,
        completed: bool,
    ) -> Result<Self, ValidationError> {
        let mut task = Self::new(name, description, priority, estimated_minutes)?;
        task.completed = completed;
        Ok(task)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn estimated_minutes(&self) -> f64 {
        self.estimated_minutes
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Mark the task as completed
    ///
    /// Only the first call changes state; later calls report
    /// [`Completion::AlreadyCompleted`].
    pub fn complete(&mut self) -> Completion {
        if self.completed {
            debug!(task = %self.name, "Task already completed");
            return Completion::AlreadyCompleted;
        }
        self.completed = true;
        info!(task = %self.name, "Task completed");
        Completion::Completed
    }

    /// One-line form used in listings
    pub fn summary(&self) -> String {
        format!("Name: {} - Completed: {}", self.name, self.completed)
    }
}

/// Long form with every field, used for detail views
impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Description: {}", self.description)?;
        writeln!(f, "Priority: {}", self.priority)?;
        writeln!(f, "Time to conclude: {} minutes", self.estimated_minutes)?;
        write!(f, "Completed: {}", self.completed)
    }
}
