//! Task form modal rendering

use super::field_renderer::draw_field;
use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use crate::state::{ErrorKey, Field, FieldSet, SubmissionStatus, TaskForm, TASK_INPUTS};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Span,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub const MODAL_SIZE: (u16, u16) = (70, 24);

pub fn draw_task_form(frame: &mut Frame, area: Rect, form: &TaskForm, app: &App) {
    let t = app.translator();
    let palette = app.palette();

    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(format!(
            " {} · {} (#{}) ",
            t.t("titles.newTask", "New Task"),
            form.project_name(),
            form.project_id()
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.accent))
        .style(Style::default().bg(palette.background).fg(palette.text));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints: Vec<Constraint> = TASK_INPUTS
        .iter()
        .map(|field| match field {
            Field::Description => Constraint::Min(5),
            _ => Constraint::Length(3),
        })
        .collect();
    constraints.extend([
        Constraint::Length(1),             // Submission error
        Constraint::Length(BUTTON_HEIGHT), // Save
        Constraint::Length(1),             // Help
    ]);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    let active = form.active_input();
    for (idx, field) in TASK_INPUTS.iter().enumerate() {
        let Some(input) = form.fields().get(*field) else {
            continue;
        };
        let (key, default) = field.label();
        let error = form.error(*field).map(|e| e.message(t));
        draw_field(
            frame,
            chunks[idx],
            input,
            &t.t(key, default),
            active == Some(*field),
            error.as_deref(),
            palette,
        );
    }

    let rest = &chunks[TASK_INPUTS.len()..];
    if let Some(error) = form.error(ErrorKey::Submit) {
        frame.render_widget(
            Paragraph::new(Span::styled(
                error.message(t),
                Style::default().fg(palette.error),
            )),
            rest[0],
        );
    }

    let button_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(rest[1]);
    let submitting = form.submission_status() == SubmissionStatus::InFlight;
    let label = if submitting {
        t.t("buttons.saving", "Saving...")
    } else {
        t.t("buttons.save", "Save")
    };
    render_button(
        frame,
        button_row[1],
        &label,
        form.is_buttons_row_active(),
        !submitting,
        palette,
    );

    let help = format!("Tab:focus  Enter:next/save  {SUBMIT_SHORTCUT}:save  Esc:cancel");
    frame.render_widget(
        Paragraph::new(Span::styled(help, Style::default().fg(palette.muted))),
        rest[2],
    );
}
