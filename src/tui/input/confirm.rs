use crossterm::event::{KeyCode, KeyEvent};

use crate::bridge::HostBridge;
use crate::tui::app::App;

/// While the delete prompt is up nothing but yes/no gets through
pub(super) fn handle_confirm<B: HostBridge>(app: &mut App<B>, key: KeyEvent) {
    match key.code {
        KeyCode::Char('y' | 'Y') | KeyCode::Enter => app.confirm_delete(),
        KeyCode::Char('n' | 'N') | KeyCode::Esc => app.cancel_delete(),
        _ => {}
    }
}
