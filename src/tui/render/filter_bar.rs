use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::bridge::HostBridge;
use crate::model::Filter;
use crate::ops::projection;
use crate::tui::app::App;
use crate::util::unicode::display_width;

/// Render the header: app title row, then the filter pills
pub fn render_filter_bar<B: HostBridge>(frame: &mut Frame, app: &mut App<B>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title
            Constraint::Length(1), // pills
            Constraint::Length(1), // spacing
        ])
        .split(area);

    render_title(frame, app, chunks[0]);
    render_pills(frame, app, chunks[1]);
}

fn render_title<B: HostBridge>(frame: &mut Frame, app: &App<B>, area: Rect) {
    let header = app.theme.header;
    let (open, done) = projection::counts(app.store.tasks(), &Filter::All);
    let left = " TaskOS";
    let right = format!("{} open · {} done ", open, done);

    let mut spans = vec![Span::styled(
        left,
        Style::default()
            .fg(app.theme.text_bright)
            .bg(header)
            .add_modifier(Modifier::BOLD),
    )];
    let width = area.width as usize;
    let used = display_width(left) + display_width(&right);
    if used < width {
        spans.push(Span::styled(" ".repeat(width - used), Style::default().bg(header)));
        spans.push(Span::styled(right, Style::default().fg(app.theme.dim).bg(header)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(header));
    frame.render_widget(paragraph, area);
}

/// One pill per filter; exactly one is drawn active. Records pill hit regions.
fn render_pills<B: HostBridge>(frame: &mut Frame, app: &mut App<B>, area: Rect) {
    let bg = app.theme.background;
    let mut spans: Vec<Span> = vec![Span::styled(" ", Style::default().bg(bg))];
    let mut col = area.x + 1;

    for pill in Filter::pills() {
        let label = format!(" {} ", pill.label());
        let w = display_width(&label) as u16;
        if col + w > area.x + area.width {
            break;
        }
        let style = if pill == app.filter {
            Style::default()
                .fg(app.theme.background)
                .bg(app.theme.highlight)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.text).bg(app.theme.selection_bg)
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::styled(" ", Style::default().bg(bg)));
        app.hits.pills.push((Rect::new(col, area.y, w, 1), pill));
        col += w + 1;
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn header_shows_title_counts_and_pills() {
        let mut app = app();
        let output = render_to_string(TERM_W, 3, |frame, area| {
            render_filter_bar(frame, &mut app, area);
        });
        let lines: Vec<&str> = output.lines().collect();
        assert!(lines[0].starts_with(" TaskOS"));
        assert!(lines[0].ends_with("2 open · 0 done"));
        assert_eq!(lines[1], "  All   Urgent   Personal   Work");
    }

    #[test]
    fn pill_regions_are_recorded_in_order() {
        let mut app = app();
        render_to_string(TERM_W, 3, |frame, area| {
            render_filter_bar(frame, &mut app, area);
        });
        let filters: Vec<Filter> = app.hits.pills.iter().map(|(_, f)| f.clone()).collect();
        assert_eq!(filters, Filter::pills());
        let (all_rect, _) = &app.hits.pills[0];
        assert_eq!((all_rect.x, all_rect.y, all_rect.width), (1, 1, 5));
        let (urgent_rect, _) = &app.hits.pills[1];
        assert_eq!(urgent_rect.x, 7);
    }

    #[test]
    fn narrow_terminal_drops_pills_that_do_not_fit() {
        let mut app = app();
        render_to_string(16, 3, |frame, area| {
            render_filter_bar(frame, &mut app, area);
        });
        assert_eq!(app.hits.pills.len(), 2);
    }
}
