//! Integration tests for the task file
//!
//! These go through real files on disk rather than in-memory documents.

use pomotask::storage::{ImportOutcome, Storage};
use pomotask::task::{Priority, RemoveOutcome, Task, TaskStore};
use tempfile::TempDir;

fn storage_in(temp: &TempDir) -> Storage {
    Storage::new(temp.path().join("Task_lists.json"))
}

#[test]
fn test_saved_task_loads_into_fresh_store() {
    let temp = TempDir::new().unwrap();
    let storage = storage_in(&temp);

    let mut store = TaskStore::new();
    store.add(Task::new("Write report", "Q3 summary", Priority::High, 25.0).unwrap());
    storage.save(&store).unwrap();

    let loaded = storage.load().unwrap();
    let task = &loaded.bucket(Priority::High)[0];
    assert_eq!(task.name(), "Write report");
    assert_eq!(task.description(), "Q3 summary");
    assert_eq!(task.priority(), Priority::High);
    assert_eq!(task.estimated_minutes(), 25.0);
    assert!(!task.is_completed());
    assert_eq!(loaded, store);
}

#[test]
fn test_file_uses_expected_keys() {
    let temp = TempDir::new().unwrap();
    let storage = storage_in(&temp);

    let mut store = TaskStore::new();
    let mut task = Task::new("Ship", "", Priority::Low, 1.5).unwrap();
    task.complete();
    store.add(task);
    storage.save(&store).unwrap();

    let text = std::fs::read_to_string(storage.path()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["high"], serde_json::json!([]));
    assert_eq!(value["mid"], serde_json::json!([]));
    let record = &value["low"][0];
    assert_eq!(record["task_name"], "Ship");
    assert_eq!(record["description"], "");
    assert_eq!(record["priority"], "LOW");
    assert_eq!(record["conclude_time"], 1.5);
    assert_eq!(record["_is_completed"], true);
}

#[test]
fn test_import_appends_and_allows_duplicates() {
    let temp = TempDir::new().unwrap();
    let storage = storage_in(&temp);

    let mut store = TaskStore::new();
    store.add(Task::new("Same", "", Priority::Mid, 10.0).unwrap());
    storage.save(&store).unwrap();

    assert_eq!(
        storage.import_into(&mut store).unwrap(),
        ImportOutcome::Imported(1)
    );
    assert_eq!(store.bucket(Priority::Mid).len(), 2);
}

#[test]
fn test_missing_file_is_reported() {
    let temp = TempDir::new().unwrap();
    let storage = storage_in(&temp);

    let mut store = TaskStore::new();
    assert_eq!(
        storage.import_into(&mut store).unwrap(),
        ImportOutcome::Missing
    );
    assert!(storage.load().unwrap().is_empty());
}

#[test]
fn test_save_replaces_file_and_keeps_backup() {
    let temp = TempDir::new().unwrap();
    let storage = storage_in(&temp);

    let mut store = TaskStore::new();
    store.add(Task::new("First", "", Priority::High, 5.0).unwrap());
    storage.save(&store).unwrap();

    assert!(store.remove_by_name("First").is_removed());
    store.add(Task::new("Second", "", Priority::High, 5.0).unwrap());
    storage.save(&store).unwrap();

    let loaded = storage.load().unwrap();
    assert!(loaded.find_by_name("First").is_none());
    assert!(loaded.find_by_name("Second").is_some());

    let backup = std::fs::read_to_string(temp.path().join("Task_lists.json.bak")).unwrap();
    assert!(backup.contains("First"));
}

#[test]
fn test_save_creates_missing_directories() {
    let temp = TempDir::new().unwrap();
    let storage = Storage::new(temp.path().join("nested").join("dir").join("tasks.json"));

    storage.save(&TaskStore::new()).unwrap();
    assert!(storage.path().exists());
}

#[test]
fn test_corrupt_file_fails_without_touching_store() {
    let temp = TempDir::new().unwrap();
    let storage = storage_in(&temp);
    std::fs::write(
        storage.path(),
        r#"{"high": [{"task_name": "ok", "description": "", "priority": "HIGH", "conclude_time": 5, "_is_completed": false}],
            "low": [{"task_name": "bad", "description": "", "priority": "URGENT", "conclude_time": 5, "_is_completed": false}]}"#,
    )
    .unwrap();

    let mut store = TaskStore::new();
    store.add(Task::new("existing", "", Priority::Low, 1.0).unwrap());
    let before = store.clone();

    assert!(storage.import_into(&mut store).is_err());
    assert_eq!(store, before);
}

#[test]
fn test_removed_task_stays_gone_after_reload() {
    let temp = TempDir::new().unwrap();
    let storage = storage_in(&temp);

    let mut store = TaskStore::new();
    let task = Task::new("Temp", "", Priority::Mid, 3.0).unwrap();
    store.add(task.clone());
    assert!(matches!(store.remove(&task), RemoveOutcome::Removed(_)));
    storage.save(&store).unwrap();

    assert!(storage.load().unwrap().is_empty());
}
