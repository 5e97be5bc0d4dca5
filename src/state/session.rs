//! Open modal sessions and background API results

use super::forms::{LoginForm, ProjectWizard, TaskForm};
use crate::api::{CreatedProject, CreatedTask, LoginTokens, ProjectSummary, SubmissionFailure};
use ratatui::layout::{Position, Rect};
use uuid::Uuid;

/// Form shown in the modal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalForm {
    Project(ProjectWizard),
    Task(TaskForm),
    Login(LoginForm),
}

impl ModalForm {
    pub fn is_submitting(&self) -> bool {
        match self {
            Self::Project(wizard) => wizard.is_submitting(),
            Self::Task(form) => form.is_submitting(),
            Self::Login(form) => form.is_submitting(),
        }
    }

    /// Throw away everything entered so far
    pub fn discard(&mut self) {
        match self {
            Self::Project(wizard) => wizard.cancel(),
            Self::Task(form) => form.cancel(),
            Self::Login(form) => *form = LoginForm::new(),
        }
    }

    /// Short name for logs
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Project(_) => "project wizard",
            Self::Task(_) => "task form",
            Self::Login(_) => "login form",
        }
    }
}

/// One opening of a modal form
///
/// Dropping the session is what closes the modal. Results reported for a
/// session id that is no longer current are discarded.
#[derive(Debug, Clone)]
pub struct ModalSession {
    pub id: Uuid,
    pub form: ModalForm,
    /// Where the modal was last drawn, for outside-click detection
    pub modal_area: Option<Rect>,
}

impl ModalSession {
    pub fn new(form: ModalForm) -> Self {
        Self {
            id: Uuid::new_v4(),
            form,
            modal_area: None,
        }
    }

    /// Whether a click at (`column`, `row`) lands outside the drawn modal
    ///
    /// Before the first draw there is no modal to click outside of.
    pub fn is_outside(&self, column: u16, row: u16) -> bool {
        self.modal_area
            .is_some_and(|area| !area.contains(Position::new(column, row)))
    }
}

/// Result of a background request
///
/// Form results carry the id of the session that started them; project
/// lists carry the refresh generation that requested them.
#[derive(Debug)]
pub enum ApiReport {
    Projects {
        generation: u64,
        result: Result<Vec<ProjectSummary>, SubmissionFailure>,
    },
    ProjectCreated {
        session_id: Uuid,
        result: Result<CreatedProject, SubmissionFailure>,
    },
    TaskCreated {
        session_id: Uuid,
        result: Result<CreatedTask, SubmissionFailure>,
    },
    LoggedIn {
        session_id: Uuid,
        result: Result<LoginTokens, SubmissionFailure>,
    },
}

impl ApiReport {
    /// Whether the backend answered 401
    pub fn is_unauthorized(&self) -> bool {
        let failure = match self {
            Self::Projects { result, .. } => result.as_ref().err(),
            Self::ProjectCreated { result, .. } => result.as_ref().err(),
            Self::TaskCreated { result, .. } => result.as_ref().err(),
            Self::LoggedIn { result, .. } => result.as_ref().err(),
        };
        matches!(failure, Some(SubmissionFailure::Unauthorized))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project_session() -> ModalSession {
        ModalSession::new(ModalForm::Project(ProjectWizard::new()))
    }

    #[test]
    fn test_sessions_get_distinct_ids() {
        assert_ne!(project_session().id, project_session().id);
    }

    #[test]
    fn test_not_outside_before_first_draw() {
        let session = ModalSession::new(ModalForm::Login(LoginForm::new()));
        assert!(!session.is_outside(0, 0));
    }

    #[test]
    fn test_outside_detection() {
        let mut session = project_session();
        session.modal_area = Some(Rect::new(10, 5, 20, 10));
        assert!(!session.is_outside(10, 5));
        assert!(!session.is_outside(29, 14));
        assert!(session.is_outside(30, 14));
        assert!(session.is_outside(9, 5));
        assert!(session.is_outside(15, 15));
    }

    #[test]
    fn test_unauthorized_detection() {
        let denied = ApiReport::Projects {
            generation: 1,
            result: Err(SubmissionFailure::Unauthorized),
        };
        let rejected = ApiReport::TaskCreated {
            session_id: Uuid::new_v4(),
            result: Err(SubmissionFailure::Rejected {
                status: 403,
                detail: None,
            }),
        };
        let loaded = ApiReport::Projects {
            generation: 1,
            result: Ok(Vec::new()),
        };
        assert!(denied.is_unauthorized());
        assert!(!rejected.is_unauthorized());
        assert!(!loaded.is_unauthorized());
    }
}
