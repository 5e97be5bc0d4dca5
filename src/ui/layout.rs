//! Layout components (header, status bar)

use crate::app::App;
use crate::state::ModalForm;
use crate::platform::SUBMIT_SHORTCUT;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into header, content and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Draw the title line with the active preferences
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let palette = app.palette();
    let prefs = app.preferences();
    let (theme_key, theme_default) = prefs.theme.toggle_label_key();

    let left = Line::from(vec![
        Span::styled(
            format!(" {} ", app.t("titles.title", "Build Your Project")),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            app.t("messages.welcome", "Welcome to Build Your Project"),
            Style::default().fg(palette.muted),
        ),
    ]);
    frame.render_widget(Paragraph::new(left), area);

    let right = format!(
        " t:{}  l:{} [{}] ",
        app.t(theme_key, theme_default),
        app.t("messages.changeLanguage", "Change Language"),
        app.translator().language().code()
    );
    let width = (right.chars().count() as u16).min(area.width);
    let right_area = Rect {
        x: area.x + area.width.saturating_sub(width),
        y: area.y,
        width,
        height: 1,
    };
    frame.render_widget(
        Paragraph::new(right).style(Style::default().fg(palette.muted)),
        right_area,
    );
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let palette = app.palette();
    let mut spans = vec![Span::styled(
        format!(" {}", get_hints(app.session.as_ref().map(|s| &s.form))),
        Style::default().fg(palette.background),
    )];

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            msg.as_str(),
            Style::default()
                .fg(palette.background)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(palette.status_bar));
    frame.render_widget(status, area);
}

/// Keyboard hints for what currently has focus
fn get_hints(modal: Option<&ModalForm>) -> String {
    match modal {
        Some(ModalForm::Project(_)) => format!(
            "Tab:focus  ←/→:choose  Enter:add/select  Del:remove  {SUBMIT_SHORTCUT}:create  Esc:close"
        ),
        Some(ModalForm::Task(_)) => format!("Tab:focus  {SUBMIT_SHORTCUT}:save  Esc:close"),
        Some(ModalForm::Login(_)) => "Tab:focus  Enter:login  Esc:close".to_string(),
        None => "j/k:nav  n:new  a:task  i:login  r:refresh  t:theme  l:language  q:quit"
            .to_string(),
    }
}
