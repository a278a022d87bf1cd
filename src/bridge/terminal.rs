use std::io::{self, Write};

use super::{BackButton, HostBridge, NotificationKind};

const BELL: &[u8] = b"\x07";

/// Bridge for the terminal UI. Haptics ring the bell, alerts are held
/// until the screen shows and dismisses them, and the back button is
/// pressed with `Esc`.
pub struct TerminalBridge<W: Write = io::Stdout> {
    out: W,
    haptics: bool,
    alert: Option<String>,
    back: BackButton,
}

impl TerminalBridge<io::Stdout> {
    pub fn stdout(haptics: bool) -> Self {
        Self::new(io::stdout(), haptics)
    }
}

impl<W: Write> TerminalBridge<W> {
    pub fn new(out: W, haptics: bool) -> Self {
        TerminalBridge {
            out,
            haptics,
            alert: None,
            back: BackButton::default(),
        }
    }

    fn buzz(&mut self) {
        if !self.haptics {
            return;
        }
        if let Err(e) = self.out.write_all(BELL).and_then(|_| self.out.flush()) {
            tracing::debug!(error = %e, "could not ring bell");
        }
    }

    #[cfg(test)]
    pub(crate) fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> HostBridge for TerminalBridge<W> {
    fn ready(&mut self) {
        tracing::debug!("host ready");
    }

    fn expand(&mut self) {
        // The alternate screen already spans the whole terminal
        tracing::debug!("host expand");
    }

    fn set_header_color(&mut self, color: &str) {
        // The header is drawn from the theme, which reads the same config value
        tracing::debug!(color, "host header color");
    }

    fn notification_occurred(&mut self, kind: NotificationKind) {
        tracing::trace!(?kind, "haptic notification");
        self.buzz();
    }

    fn selection_changed(&mut self) {
        // Too frequent for the bell
        tracing::trace!("haptic selection");
    }

    fn show_alert(&mut self, message: &str) {
        self.alert = Some(message.to_string());
    }

    fn back_button(&mut self) -> &mut BackButton {
        &mut self.back
    }

    fn pending_alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    fn dismiss_alert(&mut self) {
        self.alert = None;
    }
}
