use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use unicode_segmentation::UnicodeSegmentation;

use crate::bridge::HostBridge;
use crate::model::Priority;
use crate::tui::app::App;
use crate::tui::modal::{Field, Modal};
use crate::tui::text_input::TextInput;
use crate::util::unicode::{display_width, pad_to_width};

use super::centered_rect_fixed;

const LABEL_W: usize = 10;
const DATE_PLACEHOLDER: &str = "YYYY-MM-DD";

fn priority_label(p: Priority) -> &'static str {
    match p {
        Priority::Low => "Low",
        Priority::Medium => "Medium",
        Priority::High => "High",
    }
}

/// Visible slice of a text field and the cursor column within it.
/// Long values scroll so the cursor stays in view.
fn visible_text(input: &TextInput, width: usize) -> (String, usize) {
    let before = input.before_cursor();
    let before_w = display_width(before);
    if before_w < width {
        return (pad_to_width(input.text(), width), before_w);
    }
    // Keep the tail of the text before the cursor
    let mut kept: Vec<&str> = Vec::new();
    let mut w = 0;
    for g in before.graphemes(true).rev() {
        let gw = display_width(g);
        if w + gw >= width {
            break;
        }
        w += gw;
        kept.push(g);
    }
    kept.reverse();
    (pad_to_width(&kept.concat(), width), w)
}

/// The new-task form, centered over the list
pub fn render_form_popup<B: HostBridge>(frame: &mut Frame, app: &App<B>, area: Rect) {
    let modal = &app.modal;
    if !modal.is_open() {
        return;
    }
    let theme = &app.theme;
    let bg = theme.background;

    let popup_w: u16 = 56.min(area.width.saturating_sub(2));
    let popup_h: u16 = (Field::ORDER.len() as u16 + 4).min(area.height);
    let overlay_area = centered_rect_fixed(popup_w, popup_h, area);
    frame.render_widget(Clear, overlay_area);

    let inner_w = popup_w.saturating_sub(2) as usize;
    let value_w = inner_w.saturating_sub(LABEL_W + 2);
    let mut lines: Vec<Line> = Vec::new();
    let mut cursor: Option<Position> = None;

    for (row, field) in Field::ORDER.iter().enumerate() {
        let focused = *field == modal.focus;
        let label_style = if focused {
            Style::default()
                .fg(theme.highlight)
                .bg(bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.dim).bg(bg)
        };
        let value_bg = if focused { theme.selection_bg } else { theme.card };
        let value_style = Style::default().fg(theme.text_bright).bg(value_bg);

        let mut spans = vec![
            Span::styled(" ", Style::default().bg(bg)),
            Span::styled(pad_to_width(field.label(), LABEL_W), label_style),
        ];
        match field_input(modal, *field) {
            Some(input) => {
                if input.is_empty() && *field == Field::Date && !focused {
                    spans.push(Span::styled(
                        pad_to_width(DATE_PLACEHOLDER, value_w),
                        Style::default().fg(theme.dim).bg(value_bg),
                    ));
                } else {
                    let (text, col) = visible_text(input, value_w);
                    spans.push(Span::styled(text, value_style));
                    if focused {
                        cursor = Some(Position::new(
                            overlay_area.x + 1 + 1 + LABEL_W as u16 + col as u16,
                            overlay_area.y + 1 + row as u16,
                        ));
                    }
                }
            }
            None => {
                let choice = match field {
                    Field::Priority => priority_label(modal.priority).to_string(),
                    _ => modal.category.label(),
                };
                let arrows = if focused {
                    Style::default().fg(theme.highlight).bg(value_bg)
                } else {
                    Style::default().fg(theme.dim).bg(value_bg)
                };
                let choice_style = match field {
                    Field::Priority => value_style.fg(theme.priority_color(modal.priority)),
                    _ => value_style,
                };
                spans.push(Span::styled("\u{2039} ", arrows));
                spans.push(Span::styled(
                    pad_to_width(&choice, value_w.saturating_sub(4)),
                    choice_style,
                ));
                spans.push(Span::styled(" \u{203a}", arrows));
            }
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " enter save  esc back",
        Style::default().fg(theme.dim).bg(bg),
    )));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.highlight).bg(bg))
        .title(Span::styled(
            " New task ",
            Style::default()
                .fg(theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ))
        .style(Style::default().bg(bg));
    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, overlay_area);

    // No terminal cursor while an alert sits on top
    if app.bridge.pending_alert().is_none() {
        if let Some(pos) = cursor {
            frame.set_cursor_position(pos);
        }
    }
}

fn field_input(modal: &Modal, field: Field) -> Option<&TextInput> {
    match field {
        Field::Title => Some(&modal.title),
        Field::Description => Some(&modal.desc),
        Field::Date => Some(&modal.date),
        Field::Priority | Field::Category => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn closed_form_draws_nothing() {
        let app = app();
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_form_popup(frame, &app, area);
        });
        assert_eq!(output, "");
    }

    #[test]
    fn open_form_lists_fields_and_defaults() {
        let mut app = app();
        app.open_modal();
        app.modal.title.insert_str("Water plants");
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_form_popup(frame, &app, area);
        });
        assert!(output.contains("New task"));
        assert!(output.contains("Title"));
        assert!(output.contains("Water plants"));
        assert!(output.contains("Notes"));
        assert!(output.contains(DATE_PLACEHOLDER));
        assert!(output.contains("Medium"));
        assert!(output.contains("Personal"));
    }

    #[test]
    fn long_text_scrolls_to_cursor() {
        let mut input = TextInput::new();
        input.insert_str("abcdefghij");
        let (text, col) = visible_text(&input, 5);
        assert_eq!(text, "ghij ");
        assert_eq!(col, 4);

        input.move_home();
        let (text, col) = visible_text(&input, 5);
        assert_eq!(text, "abcd\u{2026}");
        assert_eq!(col, 0);
    }
}
