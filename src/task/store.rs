//! Priority-bucketed task store

use tracing::debug;

use super::model::{Priority, Task};

/// Bucket order used by name lookups
const LOOKUP_ORDER: [Priority; 3] = [Priority::Low, Priority::Mid, Priority::High];

/// Bucket order used for display and persistence
pub const DISPLAY_ORDER: [Priority; 3] = [Priority::High, Priority::Mid, Priority::Low];

/// Outcome of a removal request
#[derive(Debug, Clone, PartialEq)]
pub enum RemoveOutcome {
    /// The task was detached from its bucket and handed back
    Removed(Task),
    /// No matching task; the store is unchanged
    NotFound,
}

impl RemoveOutcome {
    pub fn is_removed(&self) -> bool {
        matches!(self, Self::Removed(_))
    }
}

/// Owns every task, one ordered list per priority.
///
/// A task always lives in the bucket matching its own priority.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskStore {
    buckets: [Vec<Task>; 3],
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a task to the end of its priority's bucket
    pub fn add(&mut self, task: Task) {
        debug!(task = %task.name(), priority = %task.priority(), "Adding task");
        self.buckets[task.priority().ordinal()].push(task);
    }

    /// Remove the first task equal to `task` from its priority's bucket
    pub fn remove(&mut self, task: &Task) -> RemoveOutcome {
        let bucket = &mut self.buckets[task.priority().ordinal()];
        match bucket.iter().position(|t| t == task) {
            Some(index) => {
                debug!(task = %task.name(), priority = %task.priority(), "Removing task");
                RemoveOutcome::Removed(bucket.remove(index))
            }
            None => RemoveOutcome::NotFound,
        }
    }

    /// Remove the first task with this exact name, scanning buckets in lookup order
    pub fn remove_by_name(&mut self, name: &str) -> RemoveOutcome {
        for priority in LOOKUP_ORDER {
            let bucket = &mut self.buckets[priority.ordinal()];
            if let Some(index) = bucket.iter().position(|t| t.name() == name) {
                debug!(task = %name, %priority, "Removing task by name");
                return RemoveOutcome::Removed(bucket.remove(index));
            }
        }
        RemoveOutcome::NotFound
    }

    /// First task with this exact name, scanning LOW, then MID, then HIGH
    pub fn find_by_name(&self, name: &str) -> Option<&Task> {
        LOOKUP_ORDER
            .iter()
            .flat_map(|p| self.buckets[p.ordinal()].iter())
            .find(|t| t.name() == name)
    }

    pub fn find_by_name_mut(&mut self, name: &str) -> Option<&mut Task> {
        let [low, mid, high] = &mut self.buckets;
        low.iter_mut()
            .chain(mid.iter_mut())
            .chain(high.iter_mut())
            .find(|t| t.name() == name)
    }

    pub fn bucket(&self, priority: Priority) -> &[Task] {
        &self.buckets[priority.ordinal()]
    }

    /// Read-only snapshot of all three buckets, highest priority first
    pub fn list_all(&self) -> [(Priority, &[Task]); 3] {
        DISPLAY_ORDER.map(|p| (p, self.bucket(p)))
    }

    /// Every task, highest priority first, in insertion order within a bucket
    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        DISPLAY_ORDER
            .into_iter()
            .flat_map(move |p| self.buckets[p.ordinal()].iter())
    }

    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Vec::is_empty)
    }

    pub fn clear(&mut self) {
        self.buckets.iter_mut().for_each(Vec::clear);
    }
}

impl Extend<Task> for TaskStore {
    fn extend<I: IntoIterator<Item = Task>>(&mut self, iter: I) {
        for task in iter {
            self.add(task);
        }
    }
}

impl FromIterator<Task> for TaskStore {
    fn from_iter<I: IntoIterator<Item = Task>>(iter: I) -> Self {
        let mut store = Self::new();
        store.extend(iter);
        store
    }
}
