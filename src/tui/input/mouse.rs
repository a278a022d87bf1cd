use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::bridge::HostBridge;
use crate::tui::app::{App, Mode};

/// Left click is a tap, right click stands in for a long press.
/// Hit regions come from the last draw.
pub(super) fn handle_mouse<B: HostBridge>(app: &mut App<B>, event: MouseEvent) {
    if app.bridge.pending_alert().is_some() {
        if matches!(event.kind, MouseEventKind::Down(_)) {
            app.bridge.dismiss_alert();
        }
        return;
    }
    if app.mode() != Mode::Navigate {
        return;
    }

    let (col, row) = (event.column, event.row);
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(filter) = app.hits.pill_at(col, row).cloned() {
                app.set_filter(filter);
            } else if let Some(id) = app.hits.card_at(col, row) {
                app.toggle(id);
            } else if app.hits.on_add_button(col, row) {
                app.open_modal();
            }
        }
        MouseEventKind::Down(MouseButton::Right) => {
            if let Some(id) = app.hits.card_at(col, row) {
                app.request_delete(id);
            }
        }
        MouseEventKind::ScrollDown => app.move_cursor(1),
        MouseEventKind::ScrollUp => app.move_cursor(-1),
        _ => {}
    }
}
