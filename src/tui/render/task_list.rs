use std::fmt::Write as _;

use chrono::NaiveDate;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::bridge::HostBridge;
use crate::model::{Priority, Task};
use crate::tui::app::App;
use crate::util::unicode::{display_width, truncate_to_width};

/// Rows per card: title, meta, gap
pub const CARD_HEIGHT: u16 = 3;

/// Everything one card shows, independent of how it is drawn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskCard {
    pub id: u64,
    pub completed: bool,
    pub title: String,
    /// Priority and its badge label; absent for low priority
    pub badge: Option<(Priority, &'static str)>,
    /// Formatted due date
    pub date: Option<String>,
    pub category_glyph: &'static str,
    pub has_note: bool,
}

impl TaskCard {
    pub fn checkbox(&self) -> &'static str {
        if self.completed { "●" } else { "○" }
    }
}

/// Map the projected tasks to cards, one per task, in order
pub fn build_cards(tasks: &[&Task], date_format: &str) -> Vec<TaskCard> {
    tasks
        .iter()
        .map(|task| TaskCard {
            id: task.id,
            completed: task.completed,
            title: task.title.clone(),
            badge: task.priority.badge().map(|label| (task.priority, label)),
            date: task.date.map(|d| format_date(d, date_format)),
            category_glyph: task.category.glyph(),
            has_note: task.has_desc(),
        })
        .collect()
}

/// Format a due date with a chrono format string. A bad format string
/// falls back to ISO dates instead of failing the draw.
pub fn format_date(date: NaiveDate, fmt: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", date.format(fmt)).is_err() {
        return date.format("%Y-%m-%d").to_string();
    }
    out
}

/// Render the projected list as cards, or the empty-state placeholder.
/// The whole list is rebuilt on every draw.
pub fn render_task_list<B: HostBridge>(frame: &mut Frame, app: &mut App<B>, area: Rect) {
    let cards = build_cards(&app.visible(), &app.date_format);

    if cards.is_empty() {
        render_empty_state(frame, app, area);
        return;
    }

    app.clamp_cursor();
    let per_page = ((area.height / CARD_HEIGHT) as usize).max(1);
    if app.cursor < app.scroll_offset {
        app.scroll_offset = app.cursor;
    } else if app.cursor >= app.scroll_offset + per_page {
        app.scroll_offset = app.cursor + 1 - per_page;
    }
    app.scroll_offset = app.scroll_offset.min(cards.len().saturating_sub(per_page));

    let mut y = area.y;
    for (i, card) in cards.iter().enumerate().skip(app.scroll_offset).take(per_page) {
        let rows = CARD_HEIGHT.min(area.y + area.height - y);
        if rows == 0 {
            break;
        }
        let card_area = Rect::new(area.x, y, area.width, rows.min(2));
        render_card(frame, app, card, i == app.cursor, card_area);
        app.hits.cards.push((card_area, card.id));
        y += CARD_HEIGHT;
    }
}

fn render_card<B: HostBridge>(
    frame: &mut Frame,
    app: &App<B>,
    card: &TaskCard,
    is_cursor: bool,
    area: Rect,
) {
    let theme = &app.theme;
    let bg = if is_cursor { theme.selection_bg } else { theme.card };
    let width = area.width as usize;

    // Title row
    let marker = if is_cursor { "▌" } else { " " };
    let check_color = if card.completed { theme.green } else { theme.dim };
    let mut title_style = Style::default().fg(theme.text_bright).bg(bg);
    if card.completed {
        title_style = title_style
            .fg(theme.dim)
            .add_modifier(Modifier::CROSSED_OUT);
    } else if is_cursor {
        title_style = title_style.add_modifier(Modifier::BOLD);
    }
    let prefix_width = 4; // marker, checkbox, two spaces
    let title = truncate_to_width(&card.title, width.saturating_sub(prefix_width + 1));
    let title_line = Line::from(vec![
        Span::styled(marker, Style::default().fg(theme.highlight).bg(bg)),
        Span::styled(card.checkbox(), Style::default().fg(check_color).bg(bg)),
        Span::styled("  ", Style::default().bg(bg)),
        Span::styled(title, title_style),
    ]);

    // Meta row: badge, date, category, note
    let dim = Style::default().fg(theme.dim).bg(bg);
    let mut meta: Vec<Span> = vec![Span::styled("    ", Style::default().bg(bg))];
    if let Some((priority, label)) = card.badge {
        push_sep(&mut meta, dim);
        meta.push(Span::styled(
            format!(" {} ", label),
            Style::default()
                .fg(theme.background)
                .bg(theme.priority_color(priority))
                .add_modifier(Modifier::BOLD),
        ));
    }
    if let Some(date) = &card.date {
        push_sep(&mut meta, dim);
        meta.push(Span::styled(format!("📅 {}", date), dim));
    }
    push_sep(&mut meta, dim);
    meta.push(Span::styled(card.category_glyph, dim));
    if card.has_note {
        push_sep(&mut meta, dim);
        meta.push(Span::styled("📝", dim));
    }

    let mut lines = vec![title_line, Line::from(meta)];
    lines.truncate(area.height as usize);
    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

/// Separator between meta items; the first span is the indent
fn push_sep(meta: &mut Vec<Span<'_>>, style: Style) {
    if meta.len() > 1 {
        meta.push(Span::styled(" · ", style));
    }
}

fn render_empty_state<B: HostBridge>(frame: &mut Frame, app: &App<B>, area: Rect) {
    let msg = "No tasks here";
    let hint = "press a to add one";
    let pad = |s: &str| " ".repeat((area.width as usize).saturating_sub(display_width(s)) / 2);
    let top = area.height.saturating_sub(2) / 2;

    let mut lines: Vec<Line> = (0..top).map(|_| Line::from("")).collect();
    lines.push(Line::from(Span::styled(
        format!("{}{}", pad(msg), msg),
        Style::default().fg(app.theme.text),
    )));
    lines.push(Line::from(Span::styled(
        format!("{}{}", pad(hint), hint),
        Style::default().fg(app.theme.dim),
    )));

    let paragraph = Paragraph::new(lines).style(Style::default().bg(app.theme.background));
    frame.render_widget(paragraph, area);
}
