//! `pomo show` command implementation

use anyhow::Result;
use clap::Args;

use crate::error::Error;
use crate::storage::Storage;

#[derive(Args)]
pub struct ShowArgs {
    /// Task name
    pub name: String,
}

pub fn run(storage: &Storage, args: ShowArgs) -> Result<()> {
    let store = storage.load()?;
    let task = store
        .find_by_name(&args.name)
        .ok_or_else(|| Error::NotFound(args.name.clone()))?;

    println!("{}", task);
    Ok(())
}
