//! The host runtime the task list is embedded in.
//!
//! The screen never talks to the terminal (or any other host) directly for
//! haptics, alerts, or back navigation; it goes through `HostBridge`.

mod cli;
mod recording;
mod terminal;

pub use cli::CliBridge;
pub use recording::{BridgeEvent, RecordingBridge};
pub use terminal::TerminalBridge;

/// Kind of haptic notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Warning,
}

/// What a back-button press should do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackAction {
    CloseModal,
}

/// Host-owned back-navigation control.
///
/// Handlers are registered by value; `off_click` removes a previously
/// registered one. `click` reports the handlers to run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BackButton {
    visible: bool,
    handlers: Vec<BackAction>,
}

impl BackButton {
    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn on_click(&mut self, action: BackAction) {
        if !self.handlers.contains(&action) {
            self.handlers.push(action);
        }
    }

    pub fn off_click(&mut self, action: BackAction) {
        self.handlers.retain(|a| *a != action);
    }

    pub fn handlers(&self) -> &[BackAction] {
        &self.handlers
    }

    /// Press the button. Hidden buttons do nothing.
    pub fn click(&self) -> Vec<BackAction> {
        if self.visible {
            self.handlers.clone()
        } else {
            Vec::new()
        }
    }
}

/// Services the embedding host provides to the task list
pub trait HostBridge {
    /// The app finished its first layout
    fn ready(&mut self);
    /// Ask the host for the full available area
    fn expand(&mut self);
    /// Header bar color as `#RRGGBB`
    fn set_header_color(&mut self, color: &str);
    fn notification_occurred(&mut self, kind: NotificationKind);
    fn selection_changed(&mut self);
    /// Non-blocking informational message
    fn show_alert(&mut self, message: &str);
    fn back_button(&mut self) -> &mut BackButton;

    /// Alert the screen still has to present. Hosts that show alerts
    /// themselves keep the default.
    fn pending_alert(&self) -> Option<&str> {
        None
    }

    fn dismiss_alert(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_back_button_runs_nothing() {
        let mut button = BackButton::default();
        button.on_click(BackAction::CloseModal);
        assert!(button.click().is_empty());
        button.show();
        assert_eq!(button.click(), vec![BackAction::CloseModal]);
    }

    #[test]
    fn handlers_register_once_and_unregister() {
        let mut button = BackButton::default();
        button.on_click(BackAction::CloseModal);
        button.on_click(BackAction::CloseModal);
        assert_eq!(button.handlers().len(), 1);
        button.off_click(BackAction::CloseModal);
        assert!(button.handlers().is_empty());
    }
}
