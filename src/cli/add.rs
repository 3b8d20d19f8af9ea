//! `pomo add` command implementation

use anyhow::Result;
use clap::Args;

use crate::storage::Storage;
use crate::task::{Priority, Task};

#[derive(Args)]
pub struct AddArgs {
    /// Task name
    pub name: String,

    /// Task description
    #[arg(short, long, default_value = "")]
    pub description: String,

    /// Priority (low, mid, high)
    #[arg(short, long, default_value = "mid")]
    pub priority: String,

    /// Estimated time to complete, in minutes
    #[arg(short, long, allow_negative_numbers = true)]
    pub minutes: f64,
}

pub fn run(storage: &Storage, args: AddArgs) -> Result<()> {
    let priority: Priority = args.priority.parse()?;
    let task = Task::new(args.name, args.description, priority, args.minutes)?;

    let mut store = storage.load()?;
    store.add(task.clone());
    storage.save(&store)?;

    println!("Task created successfully:");
    println!("{}", task);

    Ok(())
}
