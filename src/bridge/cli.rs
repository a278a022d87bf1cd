use super::{BackButton, HostBridge, NotificationKind};

/// Bridge for one-shot CLI commands: alerts go to stderr, haptics are logged.
#[derive(Debug, Default)]
pub struct CliBridge {
    back: BackButton,
}

impl CliBridge {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HostBridge for CliBridge {
    fn ready(&mut self) {}

    fn expand(&mut self) {}

    fn set_header_color(&mut self, _color: &str) {}

    fn notification_occurred(&mut self, kind: NotificationKind) {
        tracing::debug!(?kind, "haptic notification");
    }

    fn selection_changed(&mut self) {
        tracing::debug!("haptic selection");
    }

    fn show_alert(&mut self, message: &str) {
        eprintln!("{}", message);
    }

    fn back_button(&mut self) -> &mut BackButton {
        &mut self.back
    }
}
