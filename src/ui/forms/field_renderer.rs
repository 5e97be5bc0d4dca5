//! Field rendering utilities for forms

use crate::preferences::Palette;
use crate::state::FormField;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw a form field, with its error (if any) on the bottom border
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    label: &str,
    is_active: bool,
    error: Option<&str>,
    palette: &Palette,
) {
    let style = if is_active {
        Style::default().fg(palette.accent)
    } else {
        Style::default().fg(palette.text)
    };

    let border_style = if error.is_some() {
        Style::default().fg(palette.error)
    } else if is_active {
        Style::default().fg(palette.accent)
    } else {
        Style::default().fg(palette.muted)
    };

    let display_str = field.display_value();
    let cursor = if is_active && !field.is_choice() {
        "▌"
    } else {
        ""
    };
    let cursor_style = Style::default().fg(palette.accent);

    let content = if field.is_multiline {
        let mut lines: Vec<Line> = display_str
            .lines()
            .map(|l| Line::styled(l.to_string(), style))
            .collect();
        if display_str.ends_with('\n') {
            lines.push(Line::from(""));
        }
        if let Some(last) = lines.last_mut() {
            last.spans.push(Span::styled(cursor, cursor_style));
        } else {
            lines.push(Line::from(Span::styled(cursor, cursor_style)));
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(display_str, style),
            Span::styled(cursor, cursor_style),
        ]))
    };

    let mut block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(border_style);
    if let Some(error) = error {
        block = block.title_bottom(Line::styled(
            format!(" {error} "),
            Style::default().fg(palette.error),
        ));
    }

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}
