//! Login modal rendering

use super::field_renderer::draw_field;
use crate::app::App;
use crate::state::{ErrorKey, FieldSet, LoginForm, SubmissionStatus, LOGIN_INPUTS};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Span,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub const MODAL_SIZE: (u16, u16) = (52, 16);

pub fn draw_login_form(frame: &mut Frame, area: Rect, form: &LoginForm, app: &App) {
    let t = app.translator();
    let palette = app.palette();

    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(format!(" {} ", t.t("titles.login", "Login")))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.accent))
        .style(Style::default().bg(palette.background).fg(palette.text));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Email
            Constraint::Length(3),             // Password
            Constraint::Min(1),                // Submission error
            Constraint::Length(BUTTON_HEIGHT), // Login
        ])
        .split(inner);

    let active = form.active_input();
    for (idx, field) in LOGIN_INPUTS.iter().enumerate() {
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

    if let Some(error) = form.error(ErrorKey::Submit) {
        frame.render_widget(
            Paragraph::new(Span::styled(
                error.message(t),
                Style::default().fg(palette.error),
            ))
            .wrap(Wrap { trim: true }),
            chunks[2],
        );
    }

    let submitting = form.submission_status() == SubmissionStatus::InFlight;
    let label = if submitting {
        t.t("buttons.loggingIn", "Logging in...")
    } else {
        t.t("buttons.login", "Login")
    };
    render_button(
        frame,
        chunks[3],
        &label,
        form.is_buttons_row_active(),
        !submitting,
        palette,
    );
}
