use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::bridge::HostBridge;
use crate::tui::app::App;
use crate::util::unicode::display_width;

use super::centered_rect_fixed;

/// Delete confirmation: the task title and a yes/no prompt
pub fn render_confirm_popup<B: HostBridge>(frame: &mut Frame, app: &App<B>, area: Rect) {
    let Some(pending) = &app.confirm else {
        return;
    };
    let bg = app.theme.background;
    let header = Style::default()
        .fg(app.theme.red)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let quoted = format!("\u{201c}{}\u{201d}", pending.title);

    let mut lines = vec![
        (" Delete task?".to_string(), header),
        (String::new(), Style::default().bg(bg)),
    ];
    let popup_w: u16 = 44.min(area.width.saturating_sub(2));
    let inner_w = popup_w.saturating_sub(2) as usize;
    for s in wrap_text(" ", &quoted, inner_w) {
        lines.push((s, Style::default().fg(app.theme.text_bright).bg(bg)));
    }
    lines.push((String::new(), Style::default().bg(bg)));
    lines.push((
        " y delete   n keep".to_string(),
        Style::default().fg(app.theme.dim).bg(bg),
    ));

    render_box(frame, app, area, popup_w, lines, app.theme.red);
}

/// Host alert, shown until any key or click
pub fn render_alert<B: HostBridge>(frame: &mut Frame, app: &App<B>, area: Rect) {
    let Some(message) = app.bridge.pending_alert() else {
        return;
    };
    let bg = app.theme.background;
    let popup_w = ((display_width(message) + 6) as u16)
        .clamp(24, 60)
        .min(area.width.saturating_sub(2));
    let inner_w = popup_w.saturating_sub(2) as usize;

    let mut lines = vec![(String::new(), Style::default().bg(bg))];
    for s in wrap_text(" ", message, inner_w) {
        lines.push((
            s,
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ));
    }
    lines.push((String::new(), Style::default().bg(bg)));
    lines.push((
        " press any key".to_string(),
        Style::default().fg(app.theme.dim).bg(bg),
    ));

    render_box(frame, app, area, popup_w, lines, app.theme.yellow);
}

fn render_box<B: HostBridge>(
    frame: &mut Frame,
    app: &App<B>,
    area: Rect,
    popup_w: u16,
    styled_lines: Vec<(String, Style)>,
    border: ratatui::style::Color,
) {
    let bg = app.theme.background;
    let popup_h = ((styled_lines.len() as u16) + 2).min(area.height);
    let overlay_area = centered_rect_fixed(popup_w, popup_h, area);
    frame.render_widget(Clear, overlay_area);

    let lines: Vec<Line> = styled_lines
        .into_iter()
        .map(|(text, style)| Line::from(Span::styled(text, style)))
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border).bg(bg))
        .style(Style::default().bg(bg));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, overlay_area);
}

/// Word-wrap `text` into lines of at most `max_width` cells.
/// Every line (including the first) is prefixed with `indent`.
fn wrap_text(indent: &str, text: &str, max_width: usize) -> Vec<String> {
    let indent_len = display_width(indent);
    let mut lines = Vec::new();
    let mut current = indent.to_string();

    for word in text.split_whitespace() {
        let current_w = display_width(&current);
        let space = if current_w == indent_len { 0 } else { 1 };
        if current_w + space + display_width(word) > max_width && current_w > indent_len {
            lines.push(current);
            current = indent.to_string();
        }
        if display_width(&current) > indent_len {
            current.push(' ');
        }
        current.push_str(word);
    }
    if display_width(&current) > indent_len || lines.is_empty() {
        lines.push(current);
    }
    lines
}
