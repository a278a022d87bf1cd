pub mod filter_bar;
pub mod form_popup;
pub mod popups;
pub mod status_row;
pub mod task_list;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::Block;

use crate::bridge::HostBridge;

use super::app::App;

/// Main render function: dispatches to sub-renderers
pub fn render<B: HostBridge>(frame: &mut Frame, app: &mut App<B>) {
    let area = frame.area();
    app.hits.clear();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: header (title + pills) | task list | status row
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // title, pills, spacing
            Constraint::Min(1),    // task list
            Constraint::Length(1), // status row
        ])
        .split(area);

    filter_bar::render_filter_bar(frame, app, chunks[0]);
    task_list::render_task_list(frame, app, chunks[1]);
    status_row::render_status_row(frame, app, chunks[2]);

    // Overlays, bottom to top
    if app.modal.is_open() {
        form_popup::render_form_popup(frame, app, chunks[1]);
    }
    if app.confirm.is_some() {
        popups::render_confirm_popup(frame, app, area);
    }
    if app.bridge.pending_alert().is_some() {
        popups::render_alert(frame, app, area);
    }
}

pub(super) fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width, height)
}
