use chrono::NaiveDate;

use crate::io::kv_store::{KeyValueStore, StorageError};
use crate::model::task::{Category, Priority, Task};

/// Default key the collection lives under
pub const STORAGE_KEY: &str = "tasks";

/// Loads and saves the whole task collection as one JSON array under a
/// single key of a `KeyValueStore`.
#[derive(Debug, Clone)]
pub struct TaskStorage<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> TaskStorage<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, STORAGE_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        TaskStorage {
            store,
            key: key.into(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Load the persisted collection. An absent, unreadable, or malformed
    /// value yields the seed tasks.
    pub fn load(&self) -> Vec<Task> {
        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::debug!(key = %self.key, "no stored tasks, using seed data");
                return seed_tasks();
            }
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "could not read stored tasks, using seed data");
                return seed_tasks();
            }
        };
        match serde_json::from_str::<Option<Vec<Task>>>(&raw) {
            Ok(Some(tasks)) => {
                tracing::debug!(count = tasks.len(), "loaded tasks");
                tasks
            }
            // A stored `null` counts as absent
            Ok(None) => seed_tasks(),
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "malformed stored tasks, using seed data");
                seed_tasks()
            }
        }
    }

    /// Overwrite the persisted collection
    pub fn save(&mut self, tasks: &[Task]) -> Result<(), StorageError> {
        let json = serde_json::to_string(tasks)?;
        self.store.set(&self.key, &json)?;
        tracing::debug!(count = tasks.len(), key = %self.key, "saved tasks");
        Ok(())
    }
}

/// The two example tasks shown on first launch
pub fn seed_tasks() -> Vec<Task> {
    vec![
        Task {
            id: 1,
            title: "Welcome to TaskOS".to_string(),
            desc: "This is a demo task".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 12, 31),
            priority: Priority::High,
            category: Category::Personal,
            completed: false,
        },
        Task {
            id: 2,
            title: "Right-click or press d to delete".to_string(),
            desc: String::new(),
            date: None,
            priority: Priority::Low,
            category: Category::Work,
            completed: false,
        },
    ]
}
