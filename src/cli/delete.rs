//! `pomo delete` command implementation

use anyhow::Result;
use clap::Args;

use crate::error::Error;
use crate::storage::Storage;
use crate::task::RemoveOutcome;

#[derive(Args)]
pub struct DeleteArgs {
    /// Task name (the first match, checking LOW, then MID, then HIGH)
    pub name: String,
}

pub fn run(storage: &Storage, args: DeleteArgs) -> Result<()> {
    let mut store = storage.load()?;

    match store.remove_by_name(&args.name) {
        RemoveOutcome::Removed(task) => {
            storage.save(&store)?;
            println!(
                "Task '{}' removed from {} priority list.",
                task.name(),
                task.priority()
            );
            Ok(())
        }
        RemoveOutcome::NotFound => Err(Error::NotFound(args.name).into()),
    }
}
