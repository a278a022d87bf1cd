use std::collections::HashSet;

use chrono::Utc;

use crate::io::kv_store::{KeyValueStore, StorageError};
use crate::io::storage::TaskStorage;
use crate::model::task::{NewTask, Task};

/// Error type for task operations
#[derive(Debug, thiserror::Error)]
pub enum TaskError {
    #[error("task title is empty")]
    EmptyTitle,
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Owns the ordered task collection. Every mutation is persisted through
/// the `TaskStorage` before returning.
#[derive(Debug)]
pub struct TaskStore<S> {
    tasks: Vec<Task>,
    storage: TaskStorage<S>,
    clock: fn() -> u64,
}

fn now_millis() -> u64 {
    u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0)
}

impl<S: KeyValueStore> TaskStore<S> {
    /// Load the collection from storage (seed data if nothing usable is stored)
    pub fn open(storage: TaskStorage<S>) -> Self {
        let tasks = storage.load();
        TaskStore {
            tasks,
            storage,
            clock: now_millis,
        }
    }

    /// Replace the id clock. Ids are still forced above every existing id.
    pub fn with_clock(mut self, clock: fn() -> u64) -> Self {
        self.clock = clock;
        self
    }

    /// Tasks in storage order (newest first)
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn storage(&self) -> &TaskStorage<S> {
        &self.storage
    }

    /// Time-derived id, bumped past the largest id in the collection.
    /// Once `u64::MAX` is taken, the smallest unused id is handed out.
    fn next_id(&self) -> u64 {
        let now = (self.clock)();
        match self.tasks.iter().map(|t| t.id).max() {
            Some(max) if max >= now => max.checked_add(1).unwrap_or_else(|| self.smallest_free_id()),
            _ => now,
        }
    }

    fn smallest_free_id(&self) -> u64 {
        let used: HashSet<u64> = self.tasks.iter().map(|t| t.id).collect();
        (1..=u64::MAX).find(|id| !used.contains(id)).unwrap_or(0)
    }

    /// Create a task at the front of the collection and return its id.
    /// An empty (after trimming) title is rejected without any change, and
    /// so is a create whose save fails.
    pub fn create(&mut self, new: NewTask) -> Result<u64, TaskError> {
        let title = new.title.trim();
        if title.is_empty() {
            return Err(TaskError::EmptyTitle);
        }
        let id = self.next_id();
        let task = Task {
            id,
            title: title.to_string(),
            desc: new.desc,
            date: new.date,
            priority: new.priority,
            category: new.category,
            completed: false,
        };
        self.tasks.insert(0, task);
        if let Err(e) = self.persist() {
            self.tasks.remove(0);
            return Err(e.into());
        }
        tracing::info!(id, "created task");
        Ok(id)
    }

    /// Flip `completed`. Returns the new state, or `None` if no task has `id`.
    /// The flip is undone if the save fails.
    pub fn toggle(&mut self, id: u64) -> Result<Option<bool>, TaskError> {
        let Some(pos) = self.tasks.iter().position(|t| t.id == id) else {
            tracing::debug!(id, "toggle: no such task");
            return Ok(None);
        };
        let completed = !self.tasks[pos].completed;
        self.tasks[pos].completed = completed;
        if let Err(e) = self.persist() {
            self.tasks[pos].completed = !completed;
            return Err(e.into());
        }
        tracing::info!(id, completed, "toggled task");
        Ok(Some(completed))
    }

    /// Remove the task with `id`. Returns whether anything was removed.
    /// Nothing is removed in memory unless the save succeeds.
    pub fn delete(&mut self, id: u64) -> Result<bool, TaskError> {
        let remaining: Vec<Task> = self.tasks.iter().filter(|t| t.id != id).cloned().collect();
        if remaining.len() == self.tasks.len() {
            tracing::debug!(id, "delete: no such task");
            return Ok(false);
        }
        self.storage.save(&remaining)?;
        self.tasks = remaining;
        tracing::info!(id, "deleted task");
        Ok(true)
    }

    fn persist(&mut self) -> Result<(), StorageError> {
        self.storage.save(&self.tasks)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::io::kv_store::MemoryStore;
    use crate::io::storage::seed_tasks;
    use crate::model::task::{Category, Priority};
    use pretty_assertions::assert_eq;

    fn fixed_clock() -> u64 {
        1_000
    }

    /// Reads nothing, so the seed loads; every write fails
    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Ok(None)
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::WriteError {
                path: PathBuf::from("/dev/full"),
                source: std::io::Error::other("no space left on device"),
            })
        }
    }

    fn read_only_store() -> TaskStore<ReadOnlyStore> {
        TaskStore::open(TaskStorage::new(ReadOnlyStore)).with_clock(fixed_clock)
    }

    fn store() -> TaskStore<MemoryStore> {
        TaskStore::open(TaskStorage::new(MemoryStore::new())).with_clock(fixed_clock)
    }

    fn titled(title: &str) -> NewTask {
        NewTask {
            title: title.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn opens_with_seed_data() {
        let store = store();
        assert_eq!(store.tasks(), seed_tasks().as_slice());
    }

    #[test]
    fn create_inserts_at_front_and_persists() {
        let mut store = store();
        let before = store.len();
        let id = store
            .create(NewTask {
                title: "  Write report ".into(),
                desc: "quarterly".into(),
                priority: Priority::High,
                category: Category::Work,
                ..Default::default()
            })
            .unwrap();

        assert_eq!(store.len(), before + 1);
        let first = &store.tasks()[0];
        assert_eq!(first.id, id);
        assert_eq!(first.title, "Write report");
        assert!(!first.completed);

        let reloaded = store.storage().load();
        assert_eq!(reloaded, store.tasks());
    }

    #[test]
    fn create_keeps_description_as_entered() {
        let mut store = store();
        let id = store
            .create(NewTask {
                title: "Pack".into(),
                desc: "  - passport\n  - charger\n".into(),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(store.get(id).unwrap().desc, "  - passport\n  - charger\n");
    }

    #[test]
    fn failed_create_leaves_collection_unchanged() {
        let mut store = read_only_store();
        let before = store.tasks().to_vec();
        for _ in 0..2 {
            assert!(matches!(
                store.create(titled("Pay rent")),
                Err(TaskError::Storage(StorageError::WriteError { .. }))
            ));
        }
        assert_eq!(store.tasks(), before.as_slice());
    }

    #[test]
    fn failed_toggle_leaves_task_unchanged() {
        let mut store = read_only_store();
        assert!(store.toggle(1).is_err());
        assert!(!store.get(1).unwrap().completed);
        assert!(store.toggle(1).is_err());
        assert!(!store.get(1).unwrap().completed);
    }

    #[test]
    fn failed_delete_keeps_task() {
        let mut store = read_only_store();
        let before = store.tasks().to_vec();
        assert!(store.delete(2).is_err());
        assert_eq!(store.tasks(), before.as_slice());
    }

    #[test]
    fn create_with_blank_title_changes_nothing() {
        let mut store = store();
        let before = store.tasks().to_vec();
        assert!(matches!(store.create(titled("")), Err(TaskError::EmptyTitle)));
        assert!(matches!(
            store.create(titled(" \t\n ")),
            Err(TaskError::EmptyTitle)
        ));
        assert_eq!(store.tasks(), before.as_slice());
        // Nothing was written either
        assert_eq!(store.storage().store().get("tasks").unwrap(), None);
    }

    #[test]
    fn ids_stay_unique_when_clock_stalls() {
        let mut store = store();
        let a = store.create(titled("a")).unwrap();
        let b = store.create(titled("b")).unwrap();
        let c = store.create(titled("c")).unwrap();
        assert_eq!(a, 1_000);
        assert_eq!(b, 1_001);
        assert_eq!(c, 1_002);
    }

    #[test]
    fn ids_skip_past_existing_large_ids() {
        let mut store = TaskStore::open(TaskStorage::new(MemoryStore::new())).with_clock(|| 5);
        // seed ids are 1 and 2, clock is ahead of them
        assert_eq!(store.create(titled("b")).unwrap(), 5);
        let mut store = store.with_clock(|| 3);
        assert_eq!(store.create(titled("c")).unwrap(), 6);
    }

    #[test]
    fn ids_wrap_to_smallest_free_id_at_the_top() {
        let mut kv = MemoryStore::new();
        kv.set("tasks", r#"[{"id":18446744073709551615,"title":"a"},{"id":1,"title":"b"}]"#)
            .unwrap();
        let mut store = TaskStore::open(TaskStorage::new(kv)).with_clock(fixed_clock);
        assert_eq!(store.create(titled("c")).unwrap(), 2);
        assert_eq!(store.create(titled("d")).unwrap(), 3);
        let ids: Vec<u64> = store.tasks().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![3, 2, u64::MAX, 1]);
    }

    #[test]
    fn toggle_twice_restores_task() {
        let mut store = store();
        let original = store.get(1).unwrap().clone();
        assert_eq!(store.toggle(1).unwrap(), Some(true));
        assert!(store.get(1).unwrap().completed);
        assert_eq!(store.toggle(1).unwrap(), Some(false));
        assert_eq!(store.get(1).unwrap(), &original);
    }

    #[test]
    fn toggle_unknown_id_is_noop() {
        let mut store = store();
        let before = store.tasks().to_vec();
        assert_eq!(store.toggle(999).unwrap(), None);
        assert_eq!(store.tasks(), before.as_slice());
    }

    #[test]
    fn delete_removes_and_persists() {
        let mut store = store();
        assert!(store.delete(1).unwrap());
        assert!(store.get(1).is_none());
        assert_eq!(store.storage().load().len(), 1);
    }

    #[test]
    fn delete_unknown_id_is_noop() {
        let mut store = store();
        let before = store.tasks().to_vec();
        assert!(!store.delete(42).unwrap());
        assert_eq!(store.tasks(), before.as_slice());
    }

    #[test]
    fn deleting_everything_persists_empty_list() {
        let mut store = store();
        store.delete(1).unwrap();
        store.delete(2).unwrap();
        assert!(store.is_empty());
        // An empty stored list is not replaced by seed data
        assert!(store.storage().load().is_empty());
    }
}
