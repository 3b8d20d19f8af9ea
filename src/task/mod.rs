//! Task management module
//!
//! - Validated task entity with a single completion transition
//! - Priority-bucketed store (LOW / MID / HIGH lists)

pub mod model;
pub mod store;

pub use model::{Completion, Priority, Task};
pub use store::{RemoveOutcome, TaskStore};
