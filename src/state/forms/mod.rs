//! Form domain layer
//!
//! Field values, validation rules, the project wizard state machine and the
//! single-page task and login forms. Nothing here touches the terminal or
//! the network directly.

mod field;
mod form_state;
mod login_form;
mod task_form;
mod validation;

pub use field::{ErrorKey, Field, FieldSet, FormField};
pub use form_state::{
    Form, FormOutcome, ProjectWizard, SubmissionStatus, SubmitOutcome, WizardStep, BUTTON_BACK,
    BUTTON_CANCEL, BUTTON_PRIMARY,
};
pub use login_form::{LoginForm, LOGIN_INPUTS};
pub use task_form::{TaskForm, TASK_INPUTS};
