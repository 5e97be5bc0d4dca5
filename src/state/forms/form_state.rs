//! Project creation wizard state and transitions

use super::field::{ErrorKey, Field, FieldSet, FormField, PROJECT_TYPES, TEMPLATES};
use super::validation::{self, parse_date, FieldErrors, FormError};
use crate::api::{CreatedProject, NewProjectRequest, ProjectApi, SubmissionFailure};

/// Trait for common form focus operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Wizard steps, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum WizardStep {
    /// Name, description, type and template
    #[default]
    Basics = 1,
    /// Dates and collaborators
    Schedule = 2,
    /// Read-only summary
    Review = 3,
}

impl WizardStep {
    pub const ALL: [WizardStep; 3] = [Self::Basics, Self::Schedule, Self::Review];

    pub fn number(self) -> u8 {
        self as u8
    }

    /// Following step, capped at review
    pub fn next(self) -> Self {
        match self {
            Self::Basics => Self::Schedule,
            Self::Schedule | Self::Review => Self::Review,
        }
    }

    /// Preceding step, floored at basics
    pub fn prev(self) -> Self {
        match self {
            Self::Basics | Self::Schedule => Self::Basics,
            Self::Review => Self::Schedule,
        }
    }

    /// Fields whose errors belong to this step
    pub fn validated_fields(self) -> &'static [Field] {
        match self {
            Self::Basics => &[Field::Name, Field::Description],
            Self::Schedule => &[Field::StartDate, Field::DueDate],
            Self::Review => &[],
        }
    }

    /// Inputs shown on this step, in focus order
    pub fn inputs(self) -> &'static [Field] {
        match self {
            Self::Basics => &[
                Field::Name,
                Field::Description,
                Field::ProjectType,
                Field::Template,
            ],
            Self::Schedule => &[Field::StartDate, Field::DueDate, Field::Email],
            Self::Review => &[],
        }
    }

    pub fn title(self) -> (&'static str, &'static str) {
        match self {
            Self::Basics => ("wizard.stepBasics", "Basic info"),
            Self::Schedule => ("wizard.stepSchedule", "Dates & collaborators"),
            Self::Review => ("wizard.stepReview", "Review"),
        }
    }
}

/// Where the last submission stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    InFlight,
    Succeeded,
    Failed,
}

/// All wizard fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectFields {
    pub name: FormField,
    pub description: FormField,
    pub project_type: FormField,
    pub template: FormField,
    pub start_date: FormField,
    pub due_date: FormField,
    pub email: FormField,
}

impl ProjectFields {
    pub fn new() -> Self {
        Self {
            name: FormField::text(Field::Name, false),
            description: FormField::text(Field::Description, true),
            project_type: FormField::choice(Field::ProjectType, PROJECT_TYPES),
            template: FormField::choice(Field::Template, TEMPLATES),
            start_date: FormField::text(Field::StartDate, false),
            due_date: FormField::text(Field::DueDate, false),
            email: FormField::text(Field::Email, false),
        }
    }
}

impl FieldSet for ProjectFields {
    fn get(&self, field: Field) -> Option<&FormField> {
        match field {
            Field::Name => Some(&self.name),
            Field::Description => Some(&self.description),
            Field::ProjectType => Some(&self.project_type),
            Field::Template => Some(&self.template),
            Field::StartDate => Some(&self.start_date),
            Field::DueDate => Some(&self.due_date),
            Field::Email => Some(&self.email),
            Field::Responsible | Field::Password => None,
        }
    }

    fn get_mut(&mut self, field: Field) -> Option<&mut FormField> {
        match field {
            Field::Name => Some(&mut self.name),
            Field::Description => Some(&mut self.description),
            Field::ProjectType => Some(&mut self.project_type),
            Field::Template => Some(&mut self.template),
            Field::StartDate => Some(&mut self.start_date),
            Field::DueDate => Some(&mut self.due_date),
            Field::Email => Some(&mut self.email),
            Field::Responsible | Field::Password => None,
        }
    }
}

impl Default for ProjectFields {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything the wizard knows about the project being created
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    pub current_step: WizardStep,
    pub fields: ProjectFields,
    pub collaborators: Vec<String>,
    pub errors: FieldErrors,
    pub submission_status: SubmissionStatus,
}

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Submit only works from the review step
    NotOnReview,
    /// A submission is already running
    AlreadyInFlight,
    /// Validation failed; the wizard moved back to `step`
    Invalid { step: WizardStep },
    /// The project was created and the wizard was reset; the host should close it
    Succeeded(CreatedProject),
    /// The backend or transport failed; the error is stored under the submit key
    Failed,
    /// A result arrived with nothing in flight; state is unchanged
    Ignored,
}

impl SubmitOutcome {
    /// Whether the host should close the wizard
    pub fn closes_wizard(&self) -> bool {
        matches!(self, SubmitOutcome::Succeeded(_))
    }
}

/// Result of submitting a single-page form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormOutcome<T> {
    /// A submission is already running
    AlreadyInFlight,
    /// Validation failed; errors are on the fields
    Invalid,
    /// The request succeeded and the form was reset; the host should close it
    Succeeded(T),
    /// The backend or transport failed; the error is stored under the submit key
    Failed,
    /// A result arrived with nothing in flight; state is unchanged
    Ignored,
}

impl<T> FormOutcome<T> {
    /// Whether the host should close the form
    pub fn closes_form(&self) -> bool {
        matches!(self, FormOutcome::Succeeded(_))
    }
}

/// Button order on the actions row
pub const BUTTON_BACK: usize = 0;
pub const BUTTON_PRIMARY: usize = 1;
pub const BUTTON_CANCEL: usize = 2;
const BUTTON_COUNT: usize = 3;

/// Three-step project creation form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectWizard {
    state: FormState,
    pub active_field_index: usize,
    /// Which button is selected when on the actions row (0=Back, 1=Next/Create, 2=Cancel)
    pub selected_button: usize,
}

impl ProjectWizard {
    pub fn new() -> Self {
        Self {
            state: FormState::default(),
            active_field_index: 0,
            selected_button: BUTTON_PRIMARY,
        }
    }

    pub fn current_step(&self) -> WizardStep {
        self.state.current_step
    }

    pub fn fields(&self) -> &ProjectFields {
        &self.state.fields
    }

    pub fn value(&self, field: Field) -> &str {
        self.state.fields.text(field)
    }

    pub fn collaborators(&self) -> &[String] {
        &self.state.collaborators
    }

    pub fn error(&self, key: impl Into<ErrorKey>) -> Option<&FormError> {
        self.state.errors.get(&key.into())
    }

    pub fn submission_status(&self) -> SubmissionStatus {
        self.state.submission_status
    }

    pub fn is_submitting(&self) -> bool {
        self.state.submission_status == SubmissionStatus::InFlight
    }

    /// Set a field value and drop any error attached to it
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        self.state.fields.set(field, value.into());
        self.state.errors.remove(&field.into());
    }

    /// Add the pending email input as a collaborator
    pub fn add_collaborator(&mut self) -> bool {
        let email = self.value(Field::Email).to_string();
        self.add_collaborator_email(&email)
    }

    /// Add `email` as a collaborator, or record why it was refused
    pub fn add_collaborator_email(&mut self, email: &str) -> bool {
        match validation::check_collaborator(email, &self.state.collaborators) {
            Ok(email) => {
                tracing::debug!("Added collaborator {email}");
                self.state.collaborators.push(email);
                self.state.fields.email.clear();
                self.state.errors.remove(&Field::Email.into());
                true
            }
            Err(error) => {
                self.state.errors.insert(Field::Email.into(), error);
                false
            }
        }
    }

    pub fn remove_collaborator(&mut self, email: &str) {
        if let Some(idx) = self.state.collaborators.iter().position(|e| e == email) {
            self.state.collaborators.remove(idx);
        }
    }

    pub fn validate_step(&self, step: WizardStep) -> FieldErrors {
        validation::validate_step(step, &self.state.fields)
    }

    /// Advance one step if the current step validates
    pub fn next(&mut self) -> bool {
        let step = self.state.current_step;
        let errors = self.validate_step(step);
        if !errors.is_empty() {
            self.state.errors.extend(errors);
            return false;
        }
        for field in step.validated_fields() {
            self.state.errors.remove(&(*field).into());
        }
        self.go_to(step.next());
        true
    }

    pub fn previous(&mut self) {
        self.go_to(self.state.current_step.prev());
    }

    /// Validate everything and mark the submission as in flight
    ///
    /// Returns the request body to send, or the outcome that stopped the submit.
    pub fn begin_submit(&mut self) -> Result<NewProjectRequest, SubmitOutcome> {
        if self.state.current_step != WizardStep::Review {
            return Err(SubmitOutcome::NotOnReview);
        }
        if self.is_submitting() {
            return Err(SubmitOutcome::AlreadyInFlight);
        }

        let basics = self.validate_step(WizardStep::Basics);
        let schedule = self.validate_step(WizardStep::Schedule);
        if !basics.is_empty() || !schedule.is_empty() {
            let step = if basics.is_empty() {
                WizardStep::Schedule
            } else {
                WizardStep::Basics
            };
            self.state.errors.extend(basics);
            self.state.errors.extend(schedule);
            self.go_to(step);
            return Err(SubmitOutcome::Invalid { step });
        }

        let (Some(created_at), Some(due_date)) = (
            parse_date(self.state.fields.start_date.as_text()),
            parse_date(self.state.fields.due_date.as_text()),
        ) else {
            self.go_to(WizardStep::Schedule);
            return Err(SubmitOutcome::Invalid {
                step: WizardStep::Schedule,
            });
        };
        let fields = &self.state.fields;
        let request = NewProjectRequest {
            name: fields.name.as_text().trim().to_string(),
            description: fields.description.as_text().trim().to_string(),
            project_type: fields.project_type.as_text().to_string(),
            template: fields.template.as_text().to_string(),
            collaborators: self.state.collaborators.clone(),
            created_at,
            due_date,
        };

        self.state.errors.remove(&ErrorKey::Submit);
        self.state.submission_status = SubmissionStatus::InFlight;
        Ok(request)
    }

    /// Apply the result of the request started by [`begin_submit`](Self::begin_submit)
    pub fn finish_submit(
        &mut self,
        result: Result<CreatedProject, SubmissionFailure>,
    ) -> SubmitOutcome {
        if !self.is_submitting() {
            tracing::debug!("Ignoring submission result with nothing in flight");
            return SubmitOutcome::Ignored;
        }
        match result {
            Ok(created) => {
                tracing::info!("Project {:?} created with id {:?}", created.name, created.id);
                self.reset();
                self.state.submission_status = SubmissionStatus::Succeeded;
                SubmitOutcome::Succeeded(created)
            }
            Err(failure) => {
                tracing::warn!("Project submission failed: {failure}");
                self.state
                    .errors
                    .insert(ErrorKey::Submit, FormError::Submission(failure));
                self.state.submission_status = SubmissionStatus::Failed;
                SubmitOutcome::Failed
            }
        }
    }

    /// Validate, send and apply the result in one go
    #[allow(dead_code)]
    pub async fn submit<C>(&mut self, client: &C, token: Option<String>) -> SubmitOutcome
    where
        C: ProjectApi + ?Sized,
    {
        let request = match self.begin_submit() {
            Ok(request) => request,
            Err(outcome) => return outcome,
        };
        let result = client.create_project(&request, token).await;
        self.finish_submit(result)
    }

    /// Throw away everything entered so far
    pub fn cancel(&mut self) {
        self.reset();
    }

    fn reset(&mut self) {
        *self = Self::new();
    }

    fn go_to(&mut self, step: WizardStep) {
        if self.state.current_step != step {
            self.state.current_step = step;
            self.active_field_index = 0;
            self.selected_button = BUTTON_PRIMARY;
        }
    }

    /// Input under focus, `None` when the actions row is focused
    pub fn active_input(&self) -> Option<Field> {
        self.state
            .current_step
            .inputs()
            .get(self.active_field_index)
            .copied()
    }

    /// Returns true if the actions row is currently active
    pub fn is_buttons_row_active(&self) -> bool {
        self.active_input().is_none()
    }

    /// Move to the next button (wraps around)
    pub fn next_button(&mut self) {
        self.selected_button = (self.selected_button + 1) % BUTTON_COUNT;
    }

    /// Move to the previous button (wraps around)
    pub fn prev_button(&mut self) {
        if self.selected_button == 0 {
            self.selected_button = BUTTON_COUNT - 1;
        } else {
            self.selected_button -= 1;
        }
    }

    /// Type a character into the focused text input
    pub fn input_char(&mut self, c: char) {
        if let Some(field) = self.active_input() {
            if let Some(value) = self.state.fields.get(field).and_then(|f| f.with_char(c)) {
                self.update_field(field, value);
            }
        }
    }

    /// Delete the last character of the focused text input
    pub fn backspace(&mut self) {
        if let Some(field) = self.active_input() {
            if let Some(value) = self
                .state
                .fields
                .get(field)
                .and_then(FormField::without_last_char)
            {
                self.update_field(field, value);
            }
        }
    }

    /// Select the adjacent option of the focused choice input
    pub fn cycle_choice(&mut self, forward: bool) {
        if let Some(field) = self.active_input() {
            if let Some(option) = self
                .state
                .fields
                .get(field)
                .and_then(|f| f.cycled_option(forward))
            {
                self.update_field(field, option);
            }
        }
    }
}

impl Default for ProjectWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for ProjectWizard {
    fn field_count(&self) -> usize {
        // inputs + actions row
        self.state.current_step.inputs().len() + 1
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.field_count() - 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockProjectApi;
    use pretty_assertions::assert_eq;

    fn filled_basics() -> ProjectWizard {
        let mut wizard = ProjectWizard::new();
        wizard.update_field(Field::Name, "Thesis");
        wizard.update_field(Field::Description, "Final undergraduate paper");
        wizard
    }

    fn on_review() -> ProjectWizard {
        let mut wizard = filled_basics();
        assert!(wizard.next());
        wizard.update_field(Field::StartDate, "2025-03-01");
        wizard.update_field(Field::DueDate, "2025-11-30");
        assert!(wizard.add_collaborator_email("ana@uni.br"));
        assert!(wizard.next());
        assert_eq!(wizard.current_step(), WizardStep::Review);
        wizard
    }

    mod steps {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_step_numbers() {
            let numbers: Vec<_> = WizardStep::ALL.iter().map(|s| s.number()).collect();
            assert_eq!(numbers, vec![1, 2, 3]);
        }

        #[test]
        fn test_next_caps_and_prev_floors() {
            assert_eq!(WizardStep::Review.next(), WizardStep::Review);
            assert_eq!(WizardStep::Basics.prev(), WizardStep::Basics);
        }

        #[test]
        fn test_review_has_no_inputs() {
            assert!(WizardStep::Review.inputs().is_empty());
            assert!(WizardStep::Review.validated_fields().is_empty());
        }
    }

    mod update_field {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_sets_value() {
            let mut wizard = ProjectWizard::new();
            wizard.update_field(Field::Name, "Thesis");
            assert_eq!(wizard.value(Field::Name), "Thesis");
        }

        #[test]
        fn test_clears_only_that_error() {
            let mut wizard = ProjectWizard::new();
            assert!(!wizard.next());
            assert!(wizard.error(Field::Name).is_some());

            wizard.update_field(Field::Name, "T");
            assert!(wizard.error(Field::Name).is_none());
            assert_eq!(
                wizard.error(Field::Description),
                Some(&FormError::DescriptionRequired)
            );
        }

        #[test]
        fn test_clearing_does_not_revalidate() {
            let mut wizard = ProjectWizard::new();
            wizard.next();
            wizard.update_field(Field::Name, "   ");
            assert!(wizard.error(Field::Name).is_none());
        }

        #[test]
        fn test_choice_field_by_value() {
            let mut wizard = ProjectWizard::new();
            wizard.update_field(Field::ProjectType, "ABNT");
            assert_eq!(wizard.value(Field::ProjectType), "ABNT");
        }

        #[test]
        fn test_email_edit_clears_email_error() {
            let mut wizard = ProjectWizard::new();
            wizard.add_collaborator();
            assert_eq!(wizard.error(Field::Email), Some(&FormError::EmailEmpty));
            wizard.update_field(Field::Email, "a");
            assert!(wizard.error(Field::Email).is_none());
        }
    }

    mod collaborators {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_add_from_pending_input() {
            let mut wizard = ProjectWizard::new();
            wizard.update_field(Field::Email, "ana@uni.br");
            assert!(wizard.add_collaborator());
            assert_eq!(wizard.collaborators(), ["ana@uni.br".to_string()]);
            assert_eq!(wizard.value(Field::Email), "");
            assert!(wizard.error(Field::Email).is_none());
        }

        #[test]
        fn test_surrounding_whitespace_is_malformed() {
            let mut wizard = ProjectWizard::new();
            wizard.update_field(Field::Email, " ana@uni.br");
            assert!(!wizard.add_collaborator());
            assert_eq!(wizard.error(Field::Email), Some(&FormError::EmailInvalid));
            assert_eq!(wizard.value(Field::Email), " ana@uni.br");
            assert!(wizard.collaborators().is_empty());
        }

        #[test]
        fn test_duplicate_rejected() {
            let mut wizard = ProjectWizard::new();
            assert!(wizard.add_collaborator_email("ana@uni.br"));
            assert!(!wizard.add_collaborator_email("ana@uni.br"));
            assert_eq!(wizard.collaborators().len(), 1);
            assert_eq!(wizard.error(Field::Email), Some(&FormError::EmailDuplicate));
        }

        #[test]
        fn test_invalid_keeps_pending_input() {
            let mut wizard = ProjectWizard::new();
            wizard.update_field(Field::Email, "ana@uni");
            assert!(!wizard.add_collaborator());
            assert_eq!(wizard.value(Field::Email), "ana@uni");
            assert_eq!(wizard.error(Field::Email), Some(&FormError::EmailInvalid));
            assert!(wizard.collaborators().is_empty());
        }

        #[test]
        fn test_preserves_insertion_order() {
            let mut wizard = ProjectWizard::new();
            for email in ["c@x.io", "a@x.io", "b@x.io"] {
                assert!(wizard.add_collaborator_email(email));
            }
            assert_eq!(wizard.collaborators(), ["c@x.io", "a@x.io", "b@x.io"]);
        }

        #[test]
        fn test_remove_present() {
            let mut wizard = ProjectWizard::new();
            wizard.add_collaborator_email("a@x.io");
            wizard.add_collaborator_email("b@x.io");
            wizard.remove_collaborator("a@x.io");
            assert_eq!(wizard.collaborators(), ["b@x.io"]);
        }

        #[test]
        fn test_remove_absent_is_noop() {
            let mut wizard = ProjectWizard::new();
            wizard.add_collaborator_email("a@x.io");
            let before = wizard.clone();
            wizard.remove_collaborator("zzz@x.io");
            assert_eq!(wizard, before);
        }
    }

    mod navigation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_fresh_form_scenario() {
            let mut wizard = ProjectWizard::new();
            wizard.update_field(Field::Name, "Thesis");
            wizard.update_field(Field::Description, "");
            assert!(!wizard.next());
            assert_eq!(wizard.current_step(), WizardStep::Basics);
            assert_eq!(
                wizard.error(Field::Description),
                Some(&FormError::DescriptionRequired)
            );
            assert!(wizard.error(Field::Name).is_none());
        }

        #[test]
        fn test_next_requires_non_blank_after_trim() {
            for (name, description, advances) in [
                ("Thesis", "Paper", true),
                ("  ", "Paper", false),
                ("Thesis", "\t\n", false),
                ("", "", false),
            ] {
                let mut wizard = ProjectWizard::new();
                wizard.update_field(Field::Name, name);
                wizard.update_field(Field::Description, description);
                assert_eq!(wizard.next(), advances, "{name:?}/{description:?}");
                let expected = if advances {
                    WizardStep::Schedule
                } else {
                    WizardStep::Basics
                };
                assert_eq!(wizard.current_step(), expected);
                assert_eq!(wizard.error(Field::Name).is_some(), name.trim().is_empty());
                assert_eq!(
                    wizard.error(Field::Description).is_some(),
                    description.trim().is_empty()
                );
            }
        }

        #[test]
        fn test_next_keeps_unrelated_errors() {
            let mut wizard = filled_basics();
            wizard.add_collaborator_email("bad");
            assert!(wizard.next());
            assert_eq!(wizard.error(Field::Email), Some(&FormError::EmailInvalid));
        }

        #[test]
        fn test_next_then_previous_round_trip() {
            let mut wizard = filled_basics();
            wizard.add_collaborator_email("ana@uni.br");
            let fields = wizard.fields().clone();
            let collaborators = wizard.collaborators().to_vec();

            assert!(wizard.next());
            wizard.previous();

            assert_eq!(wizard.current_step(), WizardStep::Basics);
            assert_eq!(wizard.fields(), &fields);
            assert_eq!(wizard.collaborators(), collaborators.as_slice());
        }

        #[test]
        fn test_previous_keeps_errors() {
            let mut wizard = filled_basics();
            wizard.next();
            wizard.next();
            assert!(wizard.error(Field::StartDate).is_some());
            wizard.previous();
            assert!(wizard.error(Field::StartDate).is_some());
        }

        #[test]
        fn test_previous_floors_at_first_step() {
            let mut wizard = ProjectWizard::new();
            wizard.previous();
            assert_eq!(wizard.current_step(), WizardStep::Basics);
        }

        #[test]
        fn test_next_caps_at_review() {
            let mut wizard = on_review();
            assert!(wizard.next());
            assert_eq!(wizard.current_step(), WizardStep::Review);
        }

        #[test]
        fn test_schedule_blocks_due_before_start() {
            let mut wizard = filled_basics();
            wizard.next();
            wizard.update_field(Field::StartDate, "2025-05-02");
            wizard.update_field(Field::DueDate, "2025-05-01");
            assert!(!wizard.next());
            assert_eq!(
                wizard.error(Field::DueDate),
                Some(&FormError::DueDateBeforeStart)
            );
        }
    }

    mod focus {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_field_count_includes_actions_row() {
            let wizard = ProjectWizard::new();
            assert_eq!(wizard.field_count(), 5);
        }

        #[test]
        fn test_next_field_cycles() {
            let mut wizard = ProjectWizard::new();
            for _ in 0..5 {
                wizard.next_field();
            }
            assert_eq!(wizard.active_field_index, 0);
        }

        #[test]
        fn test_prev_field_wraps_to_actions_row() {
            let mut wizard = ProjectWizard::new();
            wizard.prev_field();
            assert!(wizard.is_buttons_row_active());
        }

        #[test]
        fn test_set_active_field_clamps() {
            let mut wizard = ProjectWizard::new();
            wizard.set_active_field(100);
            assert_eq!(wizard.active_field_index, 4);
        }

        #[test]
        fn test_step_change_resets_focus() {
            let mut wizard = filled_basics();
            wizard.set_active_field(3);
            wizard.next();
            assert_eq!(wizard.active_field_index, 0);
            assert_eq!(wizard.active_input(), Some(Field::StartDate));
        }

        #[test]
        fn test_review_only_has_actions_row() {
            let wizard = on_review();
            assert_eq!(wizard.field_count(), 1);
            assert!(wizard.is_buttons_row_active());
        }

        #[test]
        fn test_buttons_wrap() {
            let mut wizard = ProjectWizard::new();
            wizard.selected_button = BUTTON_CANCEL;
            wizard.next_button();
            assert_eq!(wizard.selected_button, BUTTON_BACK);
            wizard.prev_button();
            assert_eq!(wizard.selected_button, BUTTON_CANCEL);
        }

        #[test]
        fn test_input_char_and_backspace_edit_focused_field() {
            let mut wizard = ProjectWizard::new();
            wizard.input_char('h');
            wizard.input_char('i');
            assert_eq!(wizard.value(Field::Name), "hi");
            wizard.backspace();
            assert_eq!(wizard.value(Field::Name), "h");
        }

        #[test]
        fn test_input_char_ignored_on_choice() {
            let mut wizard = ProjectWizard::new();
            wizard.set_active_field(2);
            wizard.input_char('x');
            assert_eq!(wizard.value(Field::ProjectType), "TCC");
        }

        #[test]
        fn test_cycle_choice() {
            let mut wizard = ProjectWizard::new();
            wizard.set_active_field(2);
            wizard.cycle_choice(true);
            assert_eq!(wizard.value(Field::ProjectType), "Artigo Acadêmico");
            wizard.cycle_choice(false);
            wizard.cycle_choice(false);
            assert_eq!(wizard.value(Field::ProjectType), "ABNT");
        }
    }

    mod submission {
        use super::*;
        use pretty_assertions::assert_eq;
        use chrono::NaiveDate;
        use mockall::predicate::always;

        #[test]
        fn test_begin_submit_requires_review_step() {
            let mut wizard = filled_basics();
            assert_eq!(wizard.begin_submit(), Err(SubmitOutcome::NotOnReview));
            assert_eq!(wizard.submission_status(), SubmissionStatus::Idle);
        }

        #[test]
        fn test_begin_submit_builds_request() {
            let mut wizard = on_review();
            let request = wizard.begin_submit().unwrap();
            assert_eq!(
                request,
                NewProjectRequest {
                    name: "Thesis".into(),
                    description: "Final undergraduate paper".into(),
                    project_type: "TCC".into(),
                    template: "Introdução, Objetivo, Conclusão...".into(),
                    collaborators: vec!["ana@uni.br".into()],
                    created_at: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
                    due_date: NaiveDate::from_ymd_opt(2025, 11, 30).unwrap(),
                }
            );
            assert!(wizard.is_submitting());
        }

        #[test]
        fn test_at_most_one_in_flight() {
            let mut wizard = on_review();
            assert!(wizard.begin_submit().is_ok());
            assert_eq!(wizard.begin_submit(), Err(SubmitOutcome::AlreadyInFlight));
        }

        #[test]
        fn test_invalid_routes_to_earliest_step() {
            let mut wizard = on_review();
            wizard.update_field(Field::Name, "");
            wizard.update_field(Field::DueDate, "2020-01-01");

            assert_eq!(
                wizard.begin_submit(),
                Err(SubmitOutcome::Invalid {
                    step: WizardStep::Basics
                })
            );
            assert_eq!(wizard.current_step(), WizardStep::Basics);
            assert_eq!(wizard.error(Field::Name), Some(&FormError::NameRequired));
            assert_eq!(
                wizard.error(Field::DueDate),
                Some(&FormError::DueDateBeforeStart)
            );
            assert_eq!(wizard.submission_status(), SubmissionStatus::Idle);
        }

        #[test]
        fn test_invalid_schedule_only_routes_to_schedule() {
            let mut wizard = on_review();
            wizard.update_field(Field::StartDate, "tomorrow");
            assert_eq!(
                wizard.begin_submit(),
                Err(SubmitOutcome::Invalid {
                    step: WizardStep::Schedule
                })
            );
            assert_eq!(wizard.current_step(), WizardStep::Schedule);
        }

        #[test]
        fn test_finish_without_begin_is_ignored() {
            let mut wizard = on_review();
            let before = wizard.clone();
            assert_eq!(
                wizard.finish_submit(Ok(CreatedProject::default())),
                SubmitOutcome::Ignored
            );
            assert_eq!(wizard, before);
        }

        #[test]
        fn test_late_failure_after_success_is_ignored() {
            let mut wizard = on_review();
            wizard.begin_submit().unwrap();
            assert!(wizard
                .finish_submit(Ok(CreatedProject::default()))
                .closes_wizard());

            let outcome = wizard.finish_submit(Err(SubmissionFailure::Unauthorized));
            assert_eq!(outcome, SubmitOutcome::Ignored);
            assert!(wizard.error(ErrorKey::Submit).is_none());
            assert_eq!(wizard.submission_status(), SubmissionStatus::Succeeded);
        }

        #[tokio::test]
        async fn test_success_resets_and_requests_close() {
            let mut client = MockProjectApi::new();
            client
                .expect_create_project()
                .withf(|request, token| {
                    request.name == "Thesis" && token.as_deref() == Some("tok")
                })
                .times(1)
                .returning(|_, _| {
                    Ok(CreatedProject {
                        id: Some(42),
                        name: "Thesis".into(),
                    })
                });

            let mut wizard = on_review();
            let outcome = wizard.submit(&client, Some("tok".into())).await;

            assert!(outcome.closes_wizard());
            assert_eq!(wizard.current_step(), WizardStep::Basics);
            assert_eq!(wizard.fields(), &ProjectFields::new());
            assert!(wizard.collaborators().is_empty());
            assert!(wizard.state.errors.is_empty());
            assert_eq!(wizard.submission_status(), SubmissionStatus::Succeeded);
        }

        #[tokio::test]
        async fn test_unauthorized_keeps_data_on_review() {
            let mut client = MockProjectApi::new();
            client
                .expect_create_project()
                .with(always(), always())
                .times(1)
                .returning(|_, _| Err(SubmissionFailure::Unauthorized));

            let mut wizard = on_review();
            let fields = wizard.fields().clone();
            let outcome = wizard.submit(&client, None).await;

            assert_eq!(outcome, SubmitOutcome::Failed);
            assert!(!outcome.closes_wizard());
            assert_eq!(wizard.current_step(), WizardStep::Review);
            assert_eq!(
                wizard.error(ErrorKey::Submit),
                Some(&FormError::Submission(SubmissionFailure::Unauthorized))
            );
            assert_eq!(wizard.fields(), &fields);
            assert_eq!(wizard.collaborators(), ["ana@uni.br"]);
            assert_eq!(wizard.submission_status(), SubmissionStatus::Failed);
        }

        #[tokio::test]
        async fn test_retry_after_failure_clears_submit_error() {
            let mut client = MockProjectApi::new();
            let mut calls = 0;
            client.expect_create_project().times(2).returning(move |_, _| {
                calls += 1;
                if calls == 1 {
                    Err(SubmissionFailure::Transport("timed out".into()))
                } else {
                    Ok(CreatedProject::default())
                }
            });

            let mut wizard = on_review();
            assert_eq!(wizard.submit(&client, None).await, SubmitOutcome::Failed);
            assert!(wizard.error(ErrorKey::Submit).is_some());

            assert!(wizard.submit(&client, None).await.closes_wizard());
            assert!(wizard.error(ErrorKey::Submit).is_none());
        }

        #[test]
        fn test_begin_submit_clears_previous_failure() {
            let mut wizard = on_review();
            wizard.begin_submit().unwrap();
            wizard.finish_submit(Err(SubmissionFailure::Unauthorized));
            assert!(wizard.error(ErrorKey::Submit).is_some());

            wizard.begin_submit().unwrap();
            assert!(wizard.error(ErrorKey::Submit).is_none());
            assert!(wizard.is_submitting());
        }

        #[tokio::test]
        async fn test_invalid_submit_never_calls_client() {
            let mut client = MockProjectApi::new();
            client.expect_create_project().never();

            let mut wizard = on_review();
            wizard.update_field(Field::Description, " ");
            let outcome = wizard.submit(&client, None).await;
            assert_eq!(
                outcome,
                SubmitOutcome::Invalid {
                    step: WizardStep::Basics
                }
            );
        }

        #[test]
        fn test_cancel_resets_everything() {
            let mut wizard = on_review();
            wizard.cancel();
            assert_eq!(wizard, ProjectWizard::new());
        }
    }
}
