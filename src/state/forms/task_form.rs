//! Task creation form
//!
//! A single page: every input is validated on submit, and the request is
//! split into `begin_submit`/`finish_submit` like the project wizard.

use super::field::{ErrorKey, Field, FieldSet, FormField};
use super::form_state::{Form, FormOutcome, SubmissionStatus};
use super::validation::{self, parse_date, FieldErrors, FormError};
use crate::api::{CreatedTask, NewTaskRequest, SubmissionFailure};

/// Task inputs, in focus order
pub const TASK_INPUTS: [Field; 4] = [
    Field::Name,
    Field::Description,
    Field::Responsible,
    Field::DueDate,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskFields {
    pub name: FormField,
    pub description: FormField,
    pub responsible: FormField,
    pub due_date: FormField,
}

impl TaskFields {
    pub fn new() -> Self {
        Self {
            name: FormField::text(Field::Name, false),
            description: FormField::text(Field::Description, true),
            responsible: FormField::text(Field::Responsible, false),
            due_date: FormField::text(Field::DueDate, false),
        }
    }
}

impl Default for TaskFields {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldSet for TaskFields {
    fn get(&self, field: Field) -> Option<&FormField> {
        match field {
            Field::Name => Some(&self.name),
            Field::Description => Some(&self.description),
            Field::Responsible => Some(&self.responsible),
            Field::DueDate => Some(&self.due_date),
            _ => None,
        }
    }

    fn get_mut(&mut self, field: Field) -> Option<&mut FormField> {
        match field {
            Field::Name => Some(&mut self.name),
            Field::Description => Some(&mut self.description),
            Field::Responsible => Some(&mut self.responsible),
            Field::DueDate => Some(&mut self.due_date),
            _ => None,
        }
    }
}

/// New task for one project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskForm {
    project_id: i64,
    project_name: String,
    fields: TaskFields,
    errors: FieldErrors,
    submission_status: SubmissionStatus,
    pub active_field_index: usize,
}

impl TaskForm {
    pub fn new(project_id: i64, project_name: impl Into<String>) -> Self {
        Self {
            project_id,
            project_name: project_name.into(),
            fields: TaskFields::new(),
            errors: FieldErrors::new(),
            submission_status: SubmissionStatus::Idle,
            active_field_index: 0,
        }
    }

    pub fn project_id(&self) -> i64 {
        self.project_id
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn fields(&self) -> &TaskFields {
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

    /// Set a field value and drop any error attached to it
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        self.fields.set(field, value.into());
        self.errors.remove(&field.into());
    }

    pub fn validate(&self) -> FieldErrors {
        validation::validate_task(&self.fields)
    }

    /// Validate and mark the submission as in flight
    ///
    /// On invalid input the error map is replaced and focus jumps to the
    /// first failing input.
    pub fn begin_submit(&mut self) -> Result<NewTaskRequest, FormOutcome<CreatedTask>> {
        if self.is_submitting() {
            return Err(FormOutcome::AlreadyInFlight);
        }

        let errors = self.validate();
        let due_date = parse_date(self.fields.due_date.as_text());
        let Some(due_date) = due_date.filter(|_| errors.is_empty()) else {
            if let Some(idx) = TASK_INPUTS
                .iter()
                .position(|field| errors.contains_key(&(*field).into()))
            {
                self.active_field_index = idx;
            }
            self.errors = errors;
            return Err(FormOutcome::Invalid);
        };

        let request = NewTaskRequest {
            name: self.fields.name.as_text().trim().to_string(),
            description: self.fields.description.as_text().trim().to_string(),
            due_date,
            responsible: self.fields.responsible.as_text().trim().to_string(),
            project_id: self.project_id,
        };
        self.errors.remove(&ErrorKey::Submit);
        self.submission_status = SubmissionStatus::InFlight;
        Ok(request)
    }

    /// Apply the result of the request started by [`begin_submit`](Self::begin_submit)
    pub fn finish_submit(
        &mut self,
        result: Result<CreatedTask, SubmissionFailure>,
    ) -> FormOutcome<CreatedTask> {
        if !self.is_submitting() {
            tracing::debug!("Ignoring task result with nothing in flight");
            return FormOutcome::Ignored;
        }
        match result {
            Ok(created) => {
                tracing::info!(
                    "Task {:?} created in project {} with id {:?}",
                    created.name,
                    self.project_id,
                    created.id
                );
                self.cancel();
                self.submission_status = SubmissionStatus::Succeeded;
                FormOutcome::Succeeded(created)
            }
            Err(failure) => {
                tracing::warn!("Task submission failed: {failure}");
                self.errors
                    .insert(ErrorKey::Submit, FormError::TaskSubmission(failure));
                self.submission_status = SubmissionStatus::Failed;
                FormOutcome::Failed
            }
        }
    }

    /// Throw away everything entered so far, keeping the target project
    pub fn cancel(&mut self) {
        *self = Self::new(self.project_id, std::mem::take(&mut self.project_name));
    }

    /// Input under focus, `None` when the save button is focused
    pub fn active_input(&self) -> Option<Field> {
        TASK_INPUTS.get(self.active_field_index).copied()
    }

    pub fn is_buttons_row_active(&self) -> bool {
        self.active_input().is_none()
    }

    /// Type a character into the focused input
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

impl Form for TaskForm {
    fn field_count(&self) -> usize {
        // inputs + save button
        TASK_INPUTS.len() + 1
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.field_count() - 1);
    }
}
