use crossterm::event::{KeyCode, KeyEvent};

use crate::bridge::HostBridge;
use crate::model::Filter;
use crate::tui::app::App;

pub(super) fn handle_navigate<B: HostBridge>(app: &mut App<B>, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,

        // Cursor
        KeyCode::Down | KeyCode::Char('j') => app.move_cursor(1),
        KeyCode::Up | KeyCode::Char('k') => app.move_cursor(-1),
        KeyCode::Home | KeyCode::Char('g') => app.cursor = 0,
        KeyCode::End | KeyCode::Char('G') => {
            let len = app.visible().len();
            app.cursor = len.saturating_sub(1);
        }

        // Tap / long press on the selected card
        KeyCode::Enter | KeyCode::Char(' ') => app.toggle_selected(),
        KeyCode::Delete | KeyCode::Char('d') => app.request_delete_selected(),

        // Floating add button
        KeyCode::Char('a' | '+' | 'n') => app.open_modal(),

        // Filter pills
        KeyCode::BackTab => app.cycle_filter(false),
        KeyCode::Tab => app.cycle_filter(true),
        KeyCode::Char(c @ '1'..='9') => {
            let idx = c as usize - '1' as usize;
            if let Some(filter) = Filter::pills().into_iter().nth(idx) {
                app.set_filter(filter);
            }
        }

        KeyCode::Esc => app.press_back(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::super::handle_key;
    use super::super::test_keys::*;
    use crate::bridge::{BridgeEvent, NotificationKind};
    use crate::model::{Category, Filter};
    use crate::tui::app::Mode;
    use crate::tui::render::test_helpers::app;
    use crossterm::event::KeyCode;

    #[test]
    fn enter_toggles_selected() {
        let mut app = app();
        handle_key(&mut app, key(KeyCode::Enter));
        assert!(app.store.get(1).unwrap().completed);
        assert_eq!(
            app.bridge.last(),
            Some(&BridgeEvent::Notification(NotificationKind::Success))
        );
        // Cursor followed the task down; space un-toggles it
        handle_key(&mut app, ch(' '));
        assert!(!app.store.get(1).unwrap().completed);
        assert_eq!(app.bridge.last(), Some(&BridgeEvent::SelectionChanged));
    }

    #[test]
    fn d_asks_then_y_deletes() {
        let mut app = app();
        handle_key(&mut app, ch('j'));
        handle_key(&mut app, ch('d'));
        assert_eq!(app.mode(), Mode::Confirm);
        handle_key(&mut app, ch('y'));
        assert!(app.store.get(2).is_none());
        assert_eq!(app.mode(), Mode::Navigate);
    }

    #[test]
    fn number_keys_pick_pills() {
        let mut app = app();
        handle_key(&mut app, ch('2'));
        assert_eq!(app.filter, Filter::Urgent);
        handle_key(&mut app, ch('4'));
        assert_eq!(app.filter, Filter::Category(Category::Work));
        handle_key(&mut app, ch('9'));
        assert_eq!(app.filter, Filter::Category(Category::Work));
        handle_key(&mut app, ch('1'));
        assert_eq!(app.filter, Filter::All);
    }

    #[test]
    fn tab_cycles_pills() {
        let mut app = app();
        handle_key(&mut app, key(KeyCode::Tab));
        assert_eq!(app.filter, Filter::Urgent);
        handle_key(&mut app, key(KeyCode::BackTab));
        assert_eq!(app.filter, Filter::All);
    }

    #[test]
    fn a_opens_modal() {
        let mut app = app();
        handle_key(&mut app, ch('a'));
        assert_eq!(app.mode(), Mode::Modal);
    }

    #[test]
    fn end_and_home_move_cursor() {
        let mut app = app();
        handle_key(&mut app, ch('G'));
        assert_eq!(app.cursor, 1);
        handle_key(&mut app, ch('g'));
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn q_quits() {
        let mut app = app();
        handle_key(&mut app, ch('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn keys_on_empty_list_are_harmless() {
        let mut app = app();
        app.store.delete(1).unwrap();
        app.store.delete(2).unwrap();
        handle_key(&mut app, key(KeyCode::Enter));
        handle_key(&mut app, ch('d'));
        handle_key(&mut app, ch('G'));
        assert_eq!(app.mode(), Mode::Navigate);
        assert_eq!(app.cursor, 0);
    }
}
