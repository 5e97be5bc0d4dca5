//! Form rendering module
//!
//! - `field_renderer`: Field rendering utilities
//! - `project_wizard`: The project creation modal
//! - `task_form`: The task creation modal
//! - `login_form`: The login modal

mod field_renderer;
mod login_form;
mod project_wizard;
mod task_form;

use crate::app::App;
use crate::state::{ModalForm, ModalSession};
use ratatui::{layout::Rect, Frame};

/// Screen area of a `width` x `height` modal centered in `area`, shrunk to fit
pub fn centered_modal(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Where `form` is drawn inside `area`
pub fn modal_area(form: &ModalForm, area: Rect) -> Rect {
    let (width, height) = match form {
        ModalForm::Project(_) => project_wizard::MODAL_SIZE,
        ModalForm::Task(_) => task_form::MODAL_SIZE,
        ModalForm::Login(_) => login_form::MODAL_SIZE,
    };
    centered_modal(area, width, height)
}

/// Draw the open modal over whatever is on screen
pub fn draw_modal(frame: &mut Frame, app: &App, session: &ModalSession) {
    let area = modal_area(&session.form, frame.area());
    match &session.form {
        ModalForm::Project(wizard) => project_wizard::draw_project_wizard(frame, area, wizard, app),
        ModalForm::Task(form) => task_form::draw_task_form(frame, area, form, app),
        ModalForm::Login(form) => login_form::draw_login_form(frame, area, form, app),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{LoginForm, ProjectWizard};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_modal_is_centered() {
        let area = centered_modal(Rect::new(0, 0, 120, 40), 76, 26);
        assert_eq!(area, Rect::new(22, 7, 76, 26));
    }

    #[test]
    fn test_modal_shrinks_to_small_terminal() {
        let area = centered_modal(Rect::new(0, 0, 60, 20), 76, 26);
        assert_eq!(area, Rect::new(0, 0, 60, 20));
    }

    #[test]
    fn test_modal_respects_offset() {
        let area = centered_modal(Rect::new(4, 2, 80, 30), 76, 26);
        assert_eq!(area, Rect::new(6, 4, 76, 26));
    }

    #[test]
    fn test_each_form_has_its_own_size() {
        let screen = Rect::new(0, 0, 120, 40);
        let wizard = modal_area(&ModalForm::Project(ProjectWizard::new()), screen);
        let login = modal_area(&ModalForm::Login(LoginForm::new()), screen);
        assert!(login.width < wizard.width);
        assert!(login.height < wizard.height);
    }
}
