use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::bridge::HostBridge;
use crate::tui::app::App;

/// Keys while the new-task form is open
pub(super) fn handle_form<B: HostBridge>(app: &mut App<B>, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (_, KeyCode::Esc) => app.press_back(),
        (KeyModifiers::CONTROL, KeyCode::Char('s')) | (_, KeyCode::Enter) => app.submit_modal(),

        // Field focus
        (_, KeyCode::Tab | KeyCode::Down) => app.modal.focus = app.modal.focus.next(),
        (_, KeyCode::BackTab | KeyCode::Up) => app.modal.focus = app.modal.focus.prev(),

        // Choice fields
        (_, KeyCode::Left | KeyCode::Right | KeyCode::Char(' ')) if !app.modal.focus.is_text() => {
            app.modal.cycle_choice(key.code != KeyCode::Left);
        }

        // Text fields
        (_, code) => {
            let Some(input) = app.modal.focused_input() else {
                return;
            };
            match code {
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    input.insert_char(c)
                }
                KeyCode::Backspace => input.backspace(),
                KeyCode::Delete => input.delete(),
                KeyCode::Left => input.move_left(),
                KeyCode::Right => input.move_right(),
                KeyCode::Home => input.move_home(),
                KeyCode::End => input.move_end(),
                _ => {}
            }
        }
    }
}
