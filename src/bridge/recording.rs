use super::{BackButton, HostBridge, NotificationKind};

/// A call made on the bridge
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BridgeEvent {
    Ready,
    Expand,
    HeaderColor(String),
    Notification(NotificationKind),
    SelectionChanged,
    Alert(String),
}

/// Bridge that records calls instead of acting on them.
/// Used for headless sessions and tests.
#[derive(Debug, Clone, Default)]
pub struct RecordingBridge {
    pub events: Vec<BridgeEvent>,
    back: BackButton,
}

impl RecordingBridge {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alerts(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                BridgeEvent::Alert(msg) => Some(msg.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn last(&self) -> Option<&BridgeEvent> {
        self.events.last()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl HostBridge for RecordingBridge {
    fn ready(&mut self) {
        self.events.push(BridgeEvent::Ready);
    }

    fn expand(&mut self) {
        self.events.push(BridgeEvent::Expand);
    }

    fn set_header_color(&mut self, color: &str) {
        self.events.push(BridgeEvent::HeaderColor(color.to_string()));
    }

    fn notification_occurred(&mut self, kind: NotificationKind) {
        self.events.push(BridgeEvent::Notification(kind));
    }

    fn selection_changed(&mut self) {
        self.events.push(BridgeEvent::SelectionChanged);
    }

    fn show_alert(&mut self, message: &str) {
        self.events.push(BridgeEvent::Alert(message.to_string()));
    }

    fn back_button(&mut self) -> &mut BackButton {
        &mut self.back
    }
}
