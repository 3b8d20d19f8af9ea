//! Task storage - JSON file persistence

pub mod codec;

pub use codec::{decode, decode_into, encode, to_json, Document, TaskRecord};

use std::ffi::OsString;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

use crate::config::{get_app_dir, Config};
use crate::error::StorageError;
use crate::task::TaskStore;

/// File name used when no path is configured
pub const DEFAULT_FILE_NAME: &str = "Task_lists.json";

/// Result of importing the task file into an existing store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportOutcome {
    /// This many tasks were appended
    Imported(usize),
    /// There is no task file yet
    Missing,
}

pub struct Storage {
    path: PathBuf,
    backup: bool,
}

impl Storage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            backup: true,
        }
    }

    /// Pick the task file: an explicit path wins, then `storage.path` from the
    /// config, then `Task_lists.json` in the app directory.
    pub fn resolve(explicit: Option<&Path>, config: &Config) -> anyhow::Result<Self> {
        let path = match (explicit, &config.storage.path) {
            (Some(path), _) => path.to_path_buf(),
            (None, Some(path)) => path.clone(),
            (None, None) => get_app_dir()?.join(DEFAULT_FILE_NAME),
        };
        debug!(path = %path.display(), "Using task file");
        Ok(Self::new(path).with_backup(config.storage.backup))
    }

    pub fn with_backup(mut self, backup: bool) -> Self {
        self.backup = backup;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `<file name>.bak` next to the task file, whatever its extension
    fn backup_path(&self) -> PathBuf {
        let mut name = self.path.file_name().map(OsString::from).unwrap_or_default();
        name.push(".bak");
        self.path.with_file_name(name)
    }

    /// Read the task file into a fresh store.
    ///
    /// A missing or blank file is an empty store, not an error.
    pub fn load(&self) -> Result<TaskStore, StorageError> {
        let mut store = TaskStore::new();
        if let ImportOutcome::Imported(count) = self.import_into(&mut store)? {
            debug!(count, path = %self.path.display(), "Loaded tasks");
        }
        Ok(store)
    }

    /// Append the tasks from the task file to `store` without clearing it.
    pub fn import_into(&self, store: &mut TaskStore) -> Result<ImportOutcome, StorageError> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "No task file found");
            return Ok(ImportOutcome::Missing);
        }

        let content =
            fs::read_to_string(&self.path).map_err(|e| StorageError::io(&self.path, e))?;
        if content.trim().is_empty() {
            return Ok(ImportOutcome::Imported(0));
        }

        let added = decode_into(store, &content)?;
        Ok(ImportOutcome::Imported(added))
    }

    /// Write the whole store, replacing the task file atomically.
    ///
    /// The previous file is copied to `<file name>.bak` first when backups are on.
    pub fn save(&self, store: &TaskStore) -> Result<(), StorageError> {
        let content = to_json(store)?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir).map_err(|e| StorageError::io(dir, e))?;

        if self.backup && self.path.exists() {
            if let Err(e) = fs::copy(&self.path, self.backup_path()) {
                warn!("Failed to create backup: {}", e);
            }
        }

        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| StorageError::io(dir, e))?;
        tmp.write_all(content.as_bytes())
            .map_err(|e| StorageError::io(dir, e))?;
        tmp.flush().map_err(|e| StorageError::io(dir, e))?;
        tmp.persist(&self.path)
            .map_err(|e| StorageError::io(&self.path, e.error))?;

        info!(count = store.len(), path = %self.path.display(), "Saved tasks");
        Ok(())
    }
}
