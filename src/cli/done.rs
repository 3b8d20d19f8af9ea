//! `pomo done` command implementation

use anyhow::Result;
use clap::Args;

use crate::error::Error;
use crate::storage::Storage;
use crate::task::Completion;

#[derive(Args)]
pub struct DoneArgs {
    /// Task name
    pub name: String,
}

pub fn run(storage: &Storage, args: DoneArgs) -> Result<()> {
    let mut store = storage.load()?;
    let task = store
        .find_by_name_mut(&args.name)
        .ok_or_else(|| Error::NotFound(args.name.clone()))?;

    let completion = task.complete();
    if completion == Completion::Completed {
        storage.save(&store)?;
    }

    println!("{}", super::completion_message(&args.name, completion));
    Ok(())
}
