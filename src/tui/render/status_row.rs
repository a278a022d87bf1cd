use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::bridge::HostBridge;
use crate::tui::app::{App, Mode};
use crate::util::unicode::{display_width, truncate_to_width};

pub const ADD_BUTTON_LABEL: &str = " + New task ";

fn key_hints(mode: Mode) -> &'static str {
    match mode {
        Mode::Navigate => "j/k move  enter done  d delete  tab filter  q quit",
        Mode::Modal => "tab next field  \u{2190}/\u{2192} choose  enter save  esc back",
        Mode::Confirm => "y delete  n keep",
    }
}

/// Render the status row (bottom of screen): a status message or key
/// hints on the left, the add button on the right while navigating.
pub fn render_status_row<B: HostBridge>(frame: &mut Frame, app: &mut App<B>, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;
    let mode = app.mode();

    let button_w = if mode == Mode::Navigate {
        display_width(ADD_BUTTON_LABEL)
    } else {
        0
    };
    let room = width.saturating_sub(button_w + 2);

    let mut spans = vec![Span::styled(" ", Style::default().bg(bg))];
    if let Some(msg) = &app.status_message {
        spans.push(Span::styled(
            truncate_to_width(msg, room),
            Style::default().fg(app.theme.red).bg(bg),
        ));
    } else if app.show_key_hints {
        spans.push(Span::styled(
            truncate_to_width(key_hints(mode), room),
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }

    if button_w > 0 && button_w < width {
        let used: usize = spans.iter().map(|s| display_width(&s.content)).sum();
        let pad = width.saturating_sub(used + button_w + 1);
        spans.push(Span::styled(" ".repeat(pad), Style::default().bg(bg)));
        spans.push(Span::styled(
            ADD_BUTTON_LABEL,
            Style::default()
                .fg(app.theme.background)
                .bg(app.theme.blue)
                .add_modifier(Modifier::BOLD),
        ));
        let x = area.x + (used + pad) as u16;
        app.hits.add_button = Some(Rect::new(x, area.y, button_w as u16, 1));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
