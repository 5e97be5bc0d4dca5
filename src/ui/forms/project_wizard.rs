//! Project wizard modal rendering

use super::field_renderer::draw_field;
use crate::app::App;
use crate::i18n::Translator;
use crate::platform::{NEXT_STEP_SHORTCUT, PREV_STEP_SHORTCUT, SUBMIT_SHORTCUT};
use crate::preferences::Palette;
use crate::state::{
    ErrorKey, Field, FieldSet, ProjectWizard, SubmissionStatus, WizardStep, BUTTON_BACK, BUTTON_CANCEL,
    BUTTON_PRIMARY,
};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Width and height of the wizard modal
pub const MODAL_SIZE: (u16, u16) = (76, 26);

/// Draw the wizard modal into `area`
pub fn draw_project_wizard(frame: &mut Frame, area: Rect, wizard: &ProjectWizard, app: &App) {
    let t = app.translator();
    let palette = app.palette();
    let step = wizard.current_step();

    frame.render_widget(Clear, area);
    let (title_key, title_default) = step.title();
    let block = Block::default()
        .title(format!(
            " {} · {} {}/3: {} ",
            t.t("titles.newProject", "New Project"),
            t.t("wizard.step", "Step"),
            step.number(),
            t.t(title_key, title_default)
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.accent))
        .style(Style::default().bg(palette.background).fg(palette.text));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),             // Step indicator
            Constraint::Min(0),                // Step body
            Constraint::Length(1),             // Submission error
            Constraint::Length(BUTTON_HEIGHT), // Actions
            Constraint::Length(1),             // Help
        ])
        .split(inner);

    draw_step_indicator(frame, chunks[0], step, t, palette);
    match step {
        WizardStep::Basics | WizardStep::Schedule => {
            draw_inputs(frame, chunks[1], wizard, t, palette)
        }
        WizardStep::Review => draw_review(frame, chunks[1], wizard, t, palette),
    }

    if let Some(error) = wizard.error(ErrorKey::Submit) {
        frame.render_widget(
            Paragraph::new(Span::styled(
                error.message(t),
                Style::default().fg(palette.error),
            )),
            chunks[2],
        );
    }

    draw_actions(frame, chunks[3], wizard, t, palette);

    let help = format!(
        "Tab:focus  {NEXT_STEP_SHORTCUT}:next  {PREV_STEP_SHORTCUT}:back  {SUBMIT_SHORTCUT}:create  Esc:cancel"
    );
    frame.render_widget(
        Paragraph::new(Span::styled(help, Style::default().fg(palette.muted))),
        chunks[4],
    );
}

fn draw_step_indicator(
    frame: &mut Frame,
    area: Rect,
    current: WizardStep,
    t: &Translator,
    palette: &Palette,
) {
    let mut spans = Vec::new();
    for step in WizardStep::ALL {
        if !spans.is_empty() {
            spans.push(Span::styled(" ─ ", Style::default().fg(palette.muted)));
        }
        let (key, default) = step.title();
        let label = format!("{} {}", step.number(), t.t(key, default));
        let style = if step == current {
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD)
        } else if step < current {
            Style::default().fg(palette.success)
        } else {
            Style::default().fg(palette.muted)
        };
        spans.push(Span::styled(label, style));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_inputs(
    frame: &mut Frame,
    area: Rect,
    wizard: &ProjectWizard,
    t: &Translator,
    palette: &Palette,
) {
    let inputs = wizard.current_step().inputs();
    let mut constraints: Vec<Constraint> = inputs
        .iter()
        .map(|field| match field {
            Field::Description => Constraint::Min(5),
            _ => Constraint::Length(3),
        })
        .collect();
    let shows_collaborators = inputs.contains(&Field::Email);
    if shows_collaborators {
        constraints.push(Constraint::Min(2));
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let active = wizard.active_input();
    for (idx, field) in inputs.iter().enumerate() {
        let Some(input) = wizard.fields().get(*field) else {
            continue;
        };
        let (key, default) = field.label();
        let error = wizard.error(*field).map(|e| e.message(t));
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

    if shows_collaborators {
        let mut lines = vec![Line::styled(
            t.t("messages.emailMessage", "Type an email and press Enter"),
            Style::default().fg(palette.muted),
        )];
        lines.extend(collaborator_lines(wizard, t, palette));
        frame.render_widget(
            Paragraph::new(lines).wrap(Wrap { trim: false }),
            chunks[inputs.len()],
        );
    }
}

fn collaborator_lines<'a>(
    wizard: &'a ProjectWizard,
    t: &Translator,
    palette: &Palette,
) -> Vec<Line<'a>> {
    if wizard.collaborators().is_empty() {
        return vec![Line::styled(
            t.t("messages.noCollaborators", "No collaborators added"),
            Style::default().fg(palette.muted),
        )];
    }
    wizard
        .collaborators()
        .iter()
        .map(|email| Line::from(format!("  • {email}")))
        .collect()
}

fn draw_review(
    frame: &mut Frame,
    area: Rect,
    wizard: &ProjectWizard,
    t: &Translator,
    palette: &Palette,
) {
    let label_style = Style::default()
        .fg(palette.accent)
        .add_modifier(Modifier::BOLD);
    let mut lines = Vec::new();
    for field in [
        Field::Name,
        Field::Description,
        Field::ProjectType,
        Field::Template,
        Field::StartDate,
        Field::DueDate,
    ] {
        let (key, default) = field.label();
        lines.push(Line::from(vec![
            Span::styled(format!("{}: ", t.t(key, default)), label_style),
            Span::raw(wizard.value(field).to_string()),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::styled(
        format!("{}:", t.t("inputs.collaborators", "Collaborators")),
        label_style,
    ));
    lines.extend(collaborator_lines(wizard, t, palette));

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

fn draw_actions(
    frame: &mut Frame,
    area: Rect,
    wizard: &ProjectWizard,
    t: &Translator,
    palette: &Palette,
) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let focused = wizard.is_buttons_row_active();
    let selected = |button| focused && wizard.selected_button == button;
    let submitting = wizard.submission_status() == SubmissionStatus::InFlight;
    let on_review = wizard.current_step() == WizardStep::Review;

    render_button(
        frame,
        chunks[0],
        &t.t("buttons.back", "Back"),
        selected(BUTTON_BACK),
        wizard.current_step() != WizardStep::Basics && !submitting,
        palette,
    );

    let primary = if submitting {
        t.t("buttons.saving", "Saving...")
    } else if on_review {
        t.t("buttons.createProject", "Create Project")
    } else {
        t.t("buttons.next", "Next")
    };
    render_button(
        frame,
        chunks[1],
        &primary,
        selected(BUTTON_PRIMARY),
        !submitting,
        palette,
    );

    render_button(
        frame,
        chunks[2],
        &t.t("buttons.cancel", "Cancel"),
        selected(BUTTON_CANCEL),
        true,
        palette,
    );
}
