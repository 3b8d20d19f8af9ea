//! `pomo list` command implementation

use anyhow::Result;
use clap::Args;

use crate::storage::{to_json, Storage};
use crate::task::Priority;

#[derive(Args)]
pub struct ListArgs {
    /// Output the task document as JSON
    #[arg(long)]
    pub json: bool,

    /// Only show one priority (low, mid, high)
    #[arg(short, long)]
    pub priority: Option<String>,

    /// Show every field of each task
    #[arg(short, long)]
    pub long: bool,
}

pub fn run(storage: &Storage, args: ListArgs) -> Result<()> {
    let store = storage.load()?;

    if args.json {
        println!("{}", to_json(&store)?);
        return Ok(());
    }

    if store.is_empty() {
        println!("No tasks found in {}.", storage.path().display());
        return Ok(());
    }

    let Some(priority) = args.priority.as_deref() else {
        if args.long {
            for task in store.iter() {
                println!("{}\n", task);
            }
        } else {
            print!("{}", super::render_lists(&store));
        }
        println!("Total: {} tasks", store.len());
        return Ok(());
    };

    let priority: Priority = priority.parse()?;
    let tasks = store.bucket(priority);
    println!("{} priority tasks ({}):", priority, tasks.len());
    for task in tasks {
        if args.long {
            println!("{}\n", task);
        } else {
            println!("  {}", task.summary());
        }
    }

    Ok(())
}
