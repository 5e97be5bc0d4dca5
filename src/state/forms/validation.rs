//! Validation rules for the project wizard, task form and login form
//!
//! Everything here is pure: it reads field values and returns structured
//! errors. The wizard decides what to do with them.

use super::field::{ErrorKey, Field, FieldSet};
use super::form_state::{ProjectFields, WizardStep};
use crate::api::SubmissionFailure;
use crate::i18n::Translator;
use chrono::NaiveDate;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Date format accepted for start and due dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Errors keyed by the field (or submit slot) they belong to
pub type FieldErrors = BTreeMap<ErrorKey, FormError>;

/// A field-level or submission error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    NameRequired,
    DescriptionRequired,
    StartDateRequired,
    DueDateRequired,
    InvalidDate,
    DueDateBeforeStart,
    EmailEmpty,
    EmailInvalid,
    EmailDuplicate,
    TaskNameRequired,
    TaskDescriptionRequired,
    ResponsibleRequired,
    PasswordRequired,
    InvalidCredentials,
    /// Project creation failed
    Submission(SubmissionFailure),
    TaskSubmission(SubmissionFailure),
}

impl FormError {
    /// Translated message for display
    pub fn message(&self, t: &Translator) -> String {
        let (key, default) = match self {
            Self::NameRequired => ("messages.projectNameRequired", "Project name is required"),
            Self::DescriptionRequired => (
                "messages.projectDescriptionRequired",
                "Project description is required",
            ),
            Self::StartDateRequired => ("messages.startDateRequired", "Start date is required"),
            Self::DueDateRequired => ("messages.dueDateRequired", "Due date is required"),
            Self::InvalidDate => ("messages.invalidDate", "Use the YYYY-MM-DD format"),
            Self::DueDateBeforeStart => (
                "messages.dueDateBeforeStart",
                "Due date cannot be before the start date",
            ),
            Self::EmailEmpty => ("messages.emailCantBeEmpty", "Email cannot be empty"),
            Self::EmailInvalid => ("messages.invalidEmailFormat", "Invalid email format"),
            Self::EmailDuplicate => (
                "messages.emailAlreadyAdded",
                "This email has already been added",
            ),
            Self::TaskNameRequired => ("messages.taskNameRequired", "Task name is required"),
            Self::TaskDescriptionRequired => (
                "messages.taskDescriptionRequired",
                "Task description is required",
            ),
            Self::ResponsibleRequired => (
                "messages.responsibleRequired",
                "Select a responsible person",
            ),
            Self::PasswordRequired => ("messages.passwordRequired", "Password is required"),
            Self::InvalidCredentials => (
                "messages.invalidCredentials",
                "Invalid credentials. Check your email and password.",
            ),
            Self::Submission(failure) => return failure.message(t),
            Self::TaskSubmission(failure) => {
                return failure.message_or(t, "messages.errorNewTask", "Error creating new task")
            }
        };
        t.t(key, default)
    }
}

/// Parse a `YYYY-MM-DD` date, ignoring surrounding whitespace
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

/// Syntactic `local@domain.tld` check
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// Check a collaborator email against the current list
///
/// Order: blank after trimming, then malformed, then duplicate. The last two
/// checks see the input as typed, so padded input counts as malformed.
pub fn check_collaborator(email: &str, existing: &[String]) -> Result<String, FormError> {
    if email.trim().is_empty() {
        return Err(FormError::EmailEmpty);
    }
    if !is_valid_email(email) {
        return Err(FormError::EmailInvalid);
    }
    if existing.iter().any(|e| e == email) {
        return Err(FormError::EmailDuplicate);
    }
    Ok(email.to_string())
}

/// Errors for exactly the fields checked by `step`
pub fn validate_step(step: WizardStep, fields: &ProjectFields) -> FieldErrors {
    let mut errors = FieldErrors::new();
    match step {
        WizardStep::Basics => {
            if fields.text(Field::Name).trim().is_empty() {
                errors.insert(Field::Name.into(), FormError::NameRequired);
            }
            if fields.text(Field::Description).trim().is_empty() {
                errors.insert(Field::Description.into(), FormError::DescriptionRequired);
            }
        }
        WizardStep::Schedule => {
            let start = check_date(fields.text(Field::StartDate), FormError::StartDateRequired);
            let due = check_date(fields.text(Field::DueDate), FormError::DueDateRequired);
            match (start, due) {
                (Ok(start), Ok(due)) => {
                    if due < start {
                        errors.insert(Field::DueDate.into(), FormError::DueDateBeforeStart);
                    }
                }
                (start, due) => {
                    if let Err(e) = start {
                        errors.insert(Field::StartDate.into(), e);
                    }
                    if let Err(e) = due {
                        errors.insert(Field::DueDate.into(), e);
                    }
                }
            }
        }
        WizardStep::Review => {}
    }
    errors
}

/// Errors for the task form: every input is required
pub fn validate_task(fields: &impl FieldSet) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if fields.text(Field::Name).trim().is_empty() {
        errors.insert(Field::Name.into(), FormError::TaskNameRequired);
    }
    if fields.text(Field::Description).trim().is_empty() {
        errors.insert(Field::Description.into(), FormError::TaskDescriptionRequired);
    }
    if let Err(e) = check_date(fields.text(Field::DueDate), FormError::DueDateRequired) {
        errors.insert(Field::DueDate.into(), e);
    }
    if fields.text(Field::Responsible).trim().is_empty() {
        errors.insert(Field::Responsible.into(), FormError::ResponsibleRequired);
    }
    errors
}

/// Errors for the login form
pub fn validate_login(fields: &impl FieldSet) -> FieldErrors {
    let mut errors = FieldErrors::new();
    let email = fields.text(Field::Email).trim();
    if email.is_empty() {
        errors.insert(Field::Email.into(), FormError::EmailEmpty);
    } else if !is_valid_email(email) {
        errors.insert(Field::Email.into(), FormError::EmailInvalid);
    }
    if fields.text(Field::Password).is_empty() {
        errors.insert(Field::Password.into(), FormError::PasswordRequired);
    }
    errors
}

fn check_date(value: &str, missing: FormError) -> Result<NaiveDate, FormError> {
    if value.trim().is_empty() {
        return Err(missing);
    }
    parse_date(value).ok_or(FormError::InvalidDate)
}
