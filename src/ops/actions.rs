//! Task Store mutations together with the feedback the host gives for them.
//! Shared by the TUI and the CLI.

use crate::bridge::{HostBridge, NotificationKind};
use crate::io::kv_store::{KeyValueStore, StorageError};
use crate::model::task::NewTask;
use crate::ops::task_ops::{TaskError, TaskStore};

pub const EMPTY_TITLE_ALERT: &str = "Enter a task title";
pub const INVALID_DATE_ALERT: &str = "Invalid date, use YYYY-MM-DD";

/// Create a task. An empty title raises the host alert and returns `None`.
pub fn create_task<S: KeyValueStore>(
    store: &mut TaskStore<S>,
    bridge: &mut dyn HostBridge,
    new: NewTask,
) -> Result<Option<u64>, StorageError> {
    match store.create(new) {
        Ok(id) => Ok(Some(id)),
        Err(TaskError::EmptyTitle) => {
            bridge.show_alert(EMPTY_TITLE_ALERT);
            Ok(None)
        }
        Err(TaskError::Storage(e)) => Err(e),
    }
}

/// Toggle completion. Becoming completed is a success pulse, becoming
/// incomplete again is a selection tick.
pub fn toggle_task<S: KeyValueStore>(
    store: &mut TaskStore<S>,
    bridge: &mut dyn HostBridge,
    id: u64,
) -> Result<Option<bool>, StorageError> {
    let completed = flatten(store.toggle(id))?;
    match completed {
        Some(true) => bridge.notification_occurred(NotificationKind::Success),
        Some(false) => bridge.selection_changed(),
        None => {}
    }
    Ok(completed)
}

/// Delete an already-confirmed task, with a warning pulse
pub fn delete_task<S: KeyValueStore>(
    store: &mut TaskStore<S>,
    bridge: &mut dyn HostBridge,
    id: u64,
) -> Result<bool, StorageError> {
    let removed = flatten(store.delete(id))?;
    if removed {
        bridge.notification_occurred(NotificationKind::Warning);
    }
    Ok(removed)
}

fn flatten<T: Default>(res: Result<T, TaskError>) -> Result<T, StorageError> {
    match res {
        Ok(v) => Ok(v),
        Err(TaskError::Storage(e)) => Err(e),
        Err(_) => Ok(T::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::{BridgeEvent, RecordingBridge};
    use crate::io::kv_store::MemoryStore;
    use crate::io::storage::TaskStorage;

    fn store() -> TaskStore<MemoryStore> {
        TaskStore::open(TaskStorage::new(MemoryStore::new()))
    }

    #[test]
    fn empty_title_alerts_without_change() {
        let mut store = store();
        let mut bridge = RecordingBridge::new();
        let res = create_task(&mut store, &mut bridge, NewTask::default()).unwrap();
        assert_eq!(res, None);
        assert_eq!(store.len(), 2);
        assert_eq!(bridge.alerts(), vec![EMPTY_TITLE_ALERT]);
    }

    #[test]
    fn create_is_silent_on_success() {
        let mut store = store();
        let mut bridge = RecordingBridge::new();
        let new = NewTask {
            title: "Call mom".into(),
            ..Default::default()
        };
        assert!(create_task(&mut store, &mut bridge, new).unwrap().is_some());
        assert!(bridge.events.is_empty());
    }

    #[test]
    fn toggle_haptics_follow_new_state() {
        let mut store = store();
        let mut bridge = RecordingBridge::new();
        toggle_task(&mut store, &mut bridge, 1).unwrap();
        assert_eq!(
            bridge.last(),
            Some(&BridgeEvent::Notification(NotificationKind::Success))
        );
        toggle_task(&mut store, &mut bridge, 1).unwrap();
        assert_eq!(bridge.last(), Some(&BridgeEvent::SelectionChanged));
    }

    #[test]
    fn toggle_missing_task_is_silent() {
        let mut store = store();
        let mut bridge = RecordingBridge::new();
        assert_eq!(toggle_task(&mut store, &mut bridge, 77).unwrap(), None);
        assert!(bridge.events.is_empty());
    }

    #[test]
    fn delete_warns_only_when_removed() {
        let mut store = store();
        let mut bridge = RecordingBridge::new();
        assert!(!delete_task(&mut store, &mut bridge, 77).unwrap());
        assert!(bridge.events.is_empty());
        assert!(delete_task(&mut store, &mut bridge, 2).unwrap());
        assert_eq!(
            bridge.events,
            vec![BridgeEvent::Notification(NotificationKind::Warning)]
        );
    }
}
