//! JSON task document codec
//!
//! ```json
//! {
//!     "high": [{ "task_name": "...", "description": "...", "priority": "HIGH",
//!                "conclude_time": 25.0, "_is_completed": false }],
//!     "mid": [],
//!     "low": []
//! }
//! ```

use serde::ser::Error as _;
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::StorageError;
use crate::task::store::DISPLAY_ORDER;
use crate::task::{Priority, Task, TaskStore};

/// A task flattened for the document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub task_name: String,
    pub description: String,
    pub priority: String,
    pub conclude_time: f64,
    #[serde(rename = "_is_completed")]
    pub is_completed: bool,
}

impl From<&Task> for TaskRecord {
    fn from(task: &Task) -> Self {
        Self {
            task_name: task.name().to_string(),
            description: task.description().to_string(),
            priority: task.priority().name().to_string(),
            conclude_time: task.estimated_minutes(),
            is_completed: task.is_completed(),
        }
    }
}

impl TaskRecord {
    fn into_task(self) -> Result<Task, String> {
        let priority = Priority::from_name(&self.priority)
            .ok_or_else(|| format!("unknown priority '{}'", self.priority))?;
        Task::restore(
            self.task_name,
            self.description,
            priority,
            self.conclude_time,
            self.is_completed,
        )
        .map_err(|e| e.to_string())
    }
}

/// The whole persisted document, one list per priority
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Document {
    pub high: Vec<TaskRecord>,
    pub mid: Vec<TaskRecord>,
    pub low: Vec<TaskRecord>,
}

impl Document {
    fn list_mut(&mut self, priority: Priority) -> &mut Vec<TaskRecord> {
        match priority {
            Priority::High => &mut self.high,
            Priority::Mid => &mut self.mid,
            Priority::Low => &mut self.low,
        }
    }
}

pub fn encode(store: &TaskStore) -> Document {
    let mut doc = Document::default();
    for (priority, tasks) in store.list_all() {
        doc.list_mut(priority)
            .extend(tasks.iter().map(TaskRecord::from));
    }
    doc
}

/// Render the document as JSON with a four-space indent
pub fn to_json(store: &TaskStore) -> Result<String, StorageError> {
    let mut buf = Vec::new();
    let mut ser =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    encode(store).serialize(&mut ser)?;
    String::from_utf8(buf).map_err(|e| StorageError::Encode(serde_json::Error::custom(e)))
}

pub fn decode(text: &str) -> Result<TaskStore, StorageError> {
    let mut store = TaskStore::new();
    decode_into(&mut store, text)?;
    Ok(store)
}

/// Decode a document and append its tasks to `store`.
///
/// Existing tasks are kept. Every record is validated before anything is
/// appended, so on error `store` is unchanged. Returns the number of tasks added.
pub fn decode_into(store: &mut TaskStore, text: &str) -> Result<usize, StorageError> {
    let value: Value =
        serde_json::from_str(text).map_err(|e| StorageError::Decode(e.to_string()))?;
    let Value::Object(map) = value else {
        return Err(StorageError::Decode(
            "expected a JSON object with 'high', 'mid' and 'low' lists".to_string(),
        ));
    };

    let mut staged = Vec::new();
    for bucket in DISPLAY_ORDER {
        let key = bucket.key();
        let Some(list) = map.get(key) else {
            debug!(key, "Missing list in task document, treating as empty");
            continue;
        };
        let Value::Array(items) = list else {
            return Err(StorageError::malformed(key, 0, "expected a list of tasks"));
        };

        for (index, item) in items.iter().enumerate() {
            let record: TaskRecord = serde_json::from_value(item.clone())
                .map_err(|e| StorageError::malformed(key, index, e))?;
            let task = record
                .into_task()
                .map_err(|reason| StorageError::malformed(key, index, reason))?;
            if task.priority() != bucket {
                warn!(
                    task = %task.name(),
                    listed_under = key,
                    priority = %task.priority(),
                    "Task stored under another priority's list; filing by its own priority"
                );
            }
            staged.push(task);
        }
    }

    let added = staged.len();
    store.extend(staged);
    Ok(added)
}
