//! UI module for rendering the TUI

mod components;
mod dashboard;
mod forms;
mod layout;

pub use forms::modal_area;

use crate::app::App;
use components::render_error_dialog;
use ratatui::{style::Style, widgets::Block, Frame};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let palette = app.palette();

    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background).fg(palette.text)),
        area,
    );

    let (header_area, main_area, status_area) = layout::create_layout(area);
    layout::draw_header(frame, header_area, app);
    dashboard::draw(frame, main_area, app);
    layout::draw_status_bar(frame, status_area, app);

    if let Some(session) = app.session.as_ref() {
        forms::draw_modal(frame, app, session);
    }

    if let Some(error) = app.state.current_error() {
        render_error_dialog(frame, error, palette, app.translator());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockProjectApi;
    use crate::auth::TokenStore;
    use crate::config::TuiConfig;
    use crate::state::{Field, ModalForm, ProjectWizard};
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;

    fn app() -> App {
        App::with_parts(
            Arc::new(MockProjectApi::new()),
            TokenStore::with_path(None),
            TuiConfig::default(),
            false,
        )
    }

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 32)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_dashboard_shows_loading_before_first_load() {
        assert!(render(&app()).contains("Loading projects..."));
    }

    fn wizard_mut(app: &mut App) -> &mut ProjectWizard {
        match app.session.as_mut().map(|s| &mut s.form) {
            Some(ModalForm::Project(wizard)) => wizard,
            other => panic!("expected the project wizard, got {other:?}"),
        }
    }

    #[test]
    fn test_wizard_renders_step_and_inline_error() {
        let mut app = app();
        app.open_wizard();
        wizard_mut(&mut app).next();

        let screen = render(&app);
        assert!(screen.contains("Step 1/3"));
        assert!(screen.contains("Project name is required"));
    }

    #[test]
    fn test_submitting_shows_saving_label() {
        let mut app = app();
        app.open_wizard();
        {
            let wizard = wizard_mut(&mut app);
            wizard.update_field(Field::Name, "Thesis");
            wizard.update_field(Field::Description, "Paper");
            wizard.next();
            wizard.update_field(Field::StartDate, "2025-03-01");
            wizard.update_field(Field::DueDate, "2025-03-02");
            wizard.next();
            wizard.begin_submit().unwrap();
        }
        assert!(render(&app).contains("Saving..."));
    }

    #[test]
    fn test_task_form_names_its_project() {
        let mut app = app();
        app.state.set_projects(vec![crate::api::ProjectSummary {
            id: Some(4),
            name: "Thesis".into(),
            description: String::new(),
            project_type: None,
        }]);
        app.open_task_form();

        let screen = render(&app);
        assert!(screen.contains("New Task · Thesis"));
        assert!(screen.contains("Save"));
    }

    #[test]
    fn test_login_masks_password() {
        let mut app = app();
        app.open_login();
        if let Some(ModalForm::Login(form)) = app.session.as_mut().map(|s| &mut s.form) {
            form.update_field(Field::Password, "hunter2");
        }

        let screen = render(&app);
        assert!(screen.contains("•••••••"));
        assert!(!screen.contains("hunter2"));
    }

    #[test]
    fn test_error_dialog_is_drawn() {
        let mut app = app();
        app.push_error("Failed to save preferences");
        assert!(render(&app).contains("Failed to save preferences"));
    }
}
