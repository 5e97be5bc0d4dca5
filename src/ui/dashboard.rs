//! Dashboard: the user's projects

use crate::app::App;
use crate::state::LoadState;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

/// Draw the project list and the selected project's description
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let palette = app.palette();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(6)])
        .split(area);

    let block = Block::default()
        .title(format!(" {} ", app.t("titles.myProjects", "My Projects")))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.accent));

    let placeholder = match app.state.load_state {
        LoadState::NotLoaded | LoadState::Loading => {
            Some(app.t("messages.loadingProjects", "Loading projects..."))
        }
        LoadState::Failed if app.state.projects.is_empty() => Some(app.t(
            "messages.errorLoadingProjects",
            "Could not load projects",
        )),
        _ if app.state.projects.is_empty() => Some(app.t(
            "messages.noProjects",
            "No projects yet. Press n to create one.",
        )),
        _ => None,
    };

    if let Some(text) = placeholder {
        frame.render_widget(
            Paragraph::new(Span::styled(text, Style::default().fg(palette.muted))).block(block),
            chunks[0],
        );
    } else {
        let items: Vec<ListItem> = app
            .state
            .projects
            .iter()
            .enumerate()
            .map(|(idx, project)| {
                let is_selected = idx == app.state.selected_index;
                let prefix = if is_selected { "▸ " } else { "  " };
                let style = if is_selected {
                    Style::default()
                        .fg(palette.accent)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(palette.text)
                };

                let mut spans = vec![Span::styled(prefix, style)];
                if let Some(id) = project.id {
                    spans.push(Span::styled(
                        format!("#{id} "),
                        Style::default().fg(palette.muted),
                    ));
                }
                spans.push(Span::styled(project.name.as_str(), style));
                if let Some(kind) = &project.project_type {
                    spans.push(Span::styled(
                        format!("  [{kind}]"),
                        Style::default().fg(palette.muted),
                    ));
                }
                ListItem::new(Line::from(spans))
            })
            .collect();

        let mut list_state = ListState::default().with_selected(Some(app.state.selected_index));
        frame.render_stateful_widget(List::new(items).block(block), chunks[0], &mut list_state);
    }

    let description = app
        .state
        .selected_project()
        .map(|p| p.description.clone())
        .unwrap_or_default();
    frame.render_widget(
        Paragraph::new(description)
            .style(Style::default().fg(palette.text))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .title(format!(" {} ", app.t("inputs.description", "Description")))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(palette.muted)),
            ),
        chunks[1],
    );
}
