//! Login form

use super::field::{ErrorKey, Field, FieldSet, FormField};
use super::form_state::{Form, FormOutcome, SubmissionStatus};
use super::validation::{self, FieldErrors, FormError};
use crate::api::{LoginRequest, LoginTokens, SubmissionFailure};

pub const LOGIN_INPUTS: [Field; 2] = [Field::Email, Field::Password];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginFields {
    pub email: FormField,
    pub password: FormField,
}

impl LoginFields {
    pub fn new() -> Self {
        Self {
            email: FormField::text(Field::Email, false),
            password: FormField::secret(Field::Password),
        }
    }
}

impl Default for LoginFields {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldSet for LoginFields {
    fn get(&self, field: Field) -> Option<&FormField> {
        match field {
            Field::Email => Some(&self.email),
            Field::Password => Some(&self.password),
            _ => None,
        }
    }

    fn get_mut(&mut self, field: Field) -> Option<&mut FormField> {
        match field {
            Field::Email => Some(&mut self.email),
            Field::Password => Some(&mut self.password),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoginForm {
    fields: LoginFields,
    errors: FieldErrors,
    submission_status: SubmissionStatus,
    pub active_field_index: usize,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &LoginFields {
        &self.fields
    }

    pub fn error(&self, key: impl Into<ErrorKey>) -> Option<&FormError> {
        self.errors.get(&key.into())
    }

    pub fn submission_status(&self) -> SubmissionStatus {
        self.submission_status
    }

    pub fn is_submitting(&self) -> bool {
        self.submission_status == SubmissionStatus::InFlight
    }

    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        self.fields.set(field, value.into());
        self.errors.remove(&field.into());
    }

    /// Validate and mark the login request as in flight
    pub fn begin_submit(&mut self) -> Result<LoginRequest, FormOutcome<LoginTokens>> {
        if self.is_submitting() {
            return Err(FormOutcome::AlreadyInFlight);
        }
        let errors = validation::validate_login(&self.fields);
        if !errors.is_empty() {
            if let Some(idx) = LOGIN_INPUTS
                .iter()
                .position(|field| errors.contains_key(&(*field).into()))
            {
                self.active_field_index = idx;
            }
            self.errors = errors;
            return Err(FormOutcome::Invalid);
        }

        self.errors.remove(&ErrorKey::Submit);
        self.submission_status = SubmissionStatus::InFlight;
        Ok(LoginRequest {
            email: self.fields.email.as_text().trim().to_string(),
            password: self.fields.password.as_text().to_string(),
        })
    }

    /// Apply the login response
    ///
    /// Anything other than a transport failure means the backend turned the
    /// credentials down.
    pub fn finish_submit(
        &mut self,
        result: Result<LoginTokens, SubmissionFailure>,
    ) -> FormOutcome<LoginTokens> {
        if !self.is_submitting() {
            tracing::debug!("Ignoring login result with nothing in flight");
            return FormOutcome::Ignored;
        }
        match result {
            Ok(tokens) => {
                *self = Self::new();
                self.submission_status = SubmissionStatus::Succeeded;
                FormOutcome::Succeeded(tokens)
            }
            Err(failure) => {
                tracing::warn!("Login failed: {failure}");
                let error = match failure {
                    SubmissionFailure::Transport(_) => FormError::Submission(failure),
                    _ => FormError::InvalidCredentials,
                };
                self.errors.insert(ErrorKey::Submit, error);
                self.submission_status = SubmissionStatus::Failed;
                FormOutcome::Failed
            }
        }
    }

    pub fn active_input(&self) -> Option<Field> {
        LOGIN_INPUTS.get(self.active_field_index).copied()
    }

    pub fn is_buttons_row_active(&self) -> bool {
        self.active_input().is_none()
    }

    pub fn input_char(&mut self, c: char) {
        if let Some(field) = self.active_input() {
            if let Some(value) = self.fields.get(field).and_then(|f| f.with_char(c)) {
                self.update_field(field, value);
            }
        }
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.active_input() {
            if let Some(value) = self.fields.get(field).and_then(FormField::without_last_char) {
                self.update_field(field, value);
            }
        }
    }
}

impl Form for LoginForm {
    fn field_count(&self) -> usize {
        LOGIN_INPUTS.len() + 1
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.field_count() - 1);
    }
}
