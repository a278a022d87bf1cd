mod confirm;
mod form;
mod mouse;
mod navigate;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};

use crate::bridge::HostBridge;

use super::app::{App, Mode};

use confirm::handle_confirm;
use form::handle_form;
use navigate::handle_navigate;

/// Handle a key event in the current mode
pub fn handle_key<B: HostBridge>(app: &mut App<B>, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    // Ctrl-C always quits, whatever is on screen
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    // A pending alert swallows the next key
    if app.bridge.pending_alert().is_some() {
        app.bridge.dismiss_alert();
        return;
    }

    app.status_message = None;

    match app.mode() {
        Mode::Navigate => handle_navigate(app, key),
        Mode::Modal => handle_form(app, key),
        Mode::Confirm => handle_confirm(app, key),
    }
}

/// Mouse clicks on pills, cards, and the add button
pub fn handle_mouse<B: HostBridge>(app: &mut App<B>, event: MouseEvent) {
    mouse::handle_mouse(app, event);
}

/// Handle a bracketed paste event. Only the creation form takes text.
pub fn handle_paste<B: HostBridge>(app: &mut App<B>, text: &str) {
    if app.mode() != Mode::Modal || text.is_empty() {
        return;
    }
    if let Some(input) = app.modal.focused_input() {
        input.insert_str(text);
    }
}
