//! Application state and core logic

use crate::api::{ApiClient, ProjectApi, ProjectSummary, SubmissionFailure};
use crate::auth::TokenStore;
use crate::config::TuiConfig;
use crate::i18n::Translator;
use crate::platform;
use crate::preferences::{Palette, PreferenceStore, Preferences};
use crate::state::{
    ApiReport, AppState, Field, Form, FormOutcome, LoadState, LoginForm, ModalForm, ModalSession,
    ProjectWizard, SubmitOutcome, TaskForm, WizardStep, BUTTON_BACK, BUTTON_CANCEL,
    BUTTON_PRIMARY,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use uuid::Uuid;

/// What a key press inside a modal asks the app to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ModalAction {
    Submit,
    Close,
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Open modal form, if any
    pub session: Option<ModalSession>,
    /// Project API used for every backend request
    api: Arc<dyn ProjectApi>,
    tokens: TokenStore,
    preferences: PreferenceStore,
    preference_rx: watch::Receiver<Preferences>,
    translator: Translator,
    palette: Palette,
    config: TuiConfig,
    /// Whether preference changes are written back to the config file
    persist_config: bool,
    /// Bumped on every refresh; older project lists are dropped
    refresh_generation: u64,
    reports_tx: mpsc::UnboundedSender<ApiReport>,
    reports_rx: mpsc::UnboundedReceiver<ApiReport>,
    /// Whether the app should quit
    quit: bool,
    /// Last known terminal area
    pub terminal_area: Option<Rect>,
}

impl App {
    /// Create a new App talking to the configured backend and start loading projects
    ///
    /// Must be called inside a Tokio runtime.
    pub fn new() -> Result<Self> {
        let config = TuiConfig::load().unwrap_or_else(|e| {
            tracing::warn!("Could not read config, using defaults: {e}");
            TuiConfig::default()
        });
        let api = ApiClient::from_config(&config)?;
        tracing::info!("Using project API at {}", api.base_url());

        let mut app = Self::with_parts(Arc::new(api), TokenStore::new(), config, true);
        app.refresh_projects();
        Ok(app)
    }

    /// Assemble an App from explicit collaborators
    pub fn with_parts(
        api: Arc<dyn ProjectApi>,
        tokens: TokenStore,
        config: TuiConfig,
        persist_config: bool,
    ) -> Self {
        let preferences = PreferenceStore::new(config.preferences());
        let preference_rx = preferences.subscribe();
        let current = preferences.current();
        let (reports_tx, reports_rx) = mpsc::unbounded_channel();

        Self {
            state: AppState::default(),
            session: None,
            api,
            tokens,
            preferences,
            preference_rx,
            translator: Translator::new(current.language),
            palette: current.theme.palette(),
            config,
            persist_config,
            refresh_generation: 0,
            reports_tx,
            reports_rx,
            quit: false,
            terminal_area: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn translator(&self) -> &Translator {
        &self.translator
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn preferences(&self) -> Preferences {
        self.preferences.current()
    }

    /// Translate `key` in the current language
    pub fn t(&self, key: &str, default: &str) -> String {
        self.translator.t(key, default)
    }

    pub fn is_modal_open(&self) -> bool {
        self.session.is_some()
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Record the terminal size and where the open modal lands in it
    pub fn set_terminal_area(&mut self, area: Rect) {
        self.terminal_area = Some(area);
        if let Some(session) = self.session.as_mut() {
            session.modal_area = Some(crate::ui::modal_area(&session.form, area));
        }
    }

    fn open_modal(&mut self, form: ModalForm) {
        let mut session = ModalSession::new(form);
        if let Some(area) = self.terminal_area {
            session.modal_area = Some(crate::ui::modal_area(&session.form, area));
        }
        tracing::debug!("Opened {} session {}", session.form.kind(), session.id);
        self.session = Some(session);
    }

    /// Open a fresh project wizard
    pub fn open_wizard(&mut self) {
        self.open_modal(ModalForm::Project(ProjectWizard::new()));
    }

    /// Open the task form for the selected project
    pub fn open_task_form(&mut self) {
        let Some((id, name)) = self
            .state
            .selected_project()
            .and_then(|project| Some((project.id?, project.name.clone())))
        else {
            self.state.status_message =
                Some(self.t("messages.selectProjectFirst", "Select a project first"));
            return;
        };
        self.open_modal(ModalForm::Task(TaskForm::new(id, name)));
    }

    pub fn open_login(&mut self) {
        self.open_modal(ModalForm::Login(LoginForm::new()));
    }

    /// Close the open modal, discarding its data
    pub fn close_modal(&mut self) {
        if let Some(mut session) = self.session.take() {
            session.form.discard();
            tracing::debug!("Closed {} session {}", session.form.kind(), session.id);
        }
    }

    /// Start reloading the dashboard project list in the background
    pub fn refresh_projects(&mut self) {
        self.refresh_generation += 1;
        self.state.load_state = LoadState::Loading;

        let generation = self.refresh_generation;
        let api = Arc::clone(&self.api);
        let token = self.tokens.get_token();
        spawn_report(self.reports_tx.clone(), async move {
            ApiReport::Projects {
                generation,
                result: api.list_projects(token).await,
            }
        });
    }

    /// Pick up preference changes and persist them
    pub fn sync_preferences(&mut self) {
        if !self.preference_rx.has_changed().unwrap_or(false) {
            return;
        }
        let prefs = *self.preference_rx.borrow_and_update();
        self.translator = Translator::new(prefs.language);
        self.palette = prefs.theme.palette();
        self.config.set_preferences(prefs);

        if self.persist_config {
            if let Err(e) = self.config.save() {
                tracing::warn!("Failed to save preferences: {e}");
                self.push_error(format!("Failed to save preferences: {e}"));
            }
        }
    }

    /// Apply every background result that has arrived
    pub fn poll_reports(&mut self) {
        while let Ok(report) = self.reports_rx.try_recv() {
            self.apply_report(report);
        }
    }

    fn apply_report(&mut self, report: ApiReport) {
        if report.is_unauthorized() {
            self.forget_token();
        }

        match report {
            ApiReport::Projects { generation, result } => self.apply_projects(generation, result),
            ApiReport::ProjectCreated { session_id, result } => {
                let Some(ModalForm::Project(wizard)) = self.current_form(session_id) else {
                    return;
                };
                if wizard.finish_submit(result).closes_wizard() {
                    self.close_modal();
                    self.state.status_message =
                        Some(self.t("messages.projectCreated", "Project created!"));
                    self.refresh_projects();
                }
            }
            ApiReport::TaskCreated { session_id, result } => {
                let Some(ModalForm::Task(form)) = self.current_form(session_id) else {
                    return;
                };
                if form.finish_submit(result).closes_form() {
                    self.close_modal();
                    self.state.status_message =
                        Some(self.t("messages.taskCreated", "Task created!"));
                }
            }
            ApiReport::LoggedIn { session_id, result } => {
                let Some(ModalForm::Login(form)) = self.current_form(session_id) else {
                    return;
                };
                if let FormOutcome::Succeeded(tokens) = form.finish_submit(result) {
                    self.close_modal();
                    if let Err(e) = self.tokens.save_token(&tokens.access) {
                        tracing::warn!("Failed to save access token: {e:#}");
                        self.push_error(format!("Failed to save access token: {e:#}"));
                        return;
                    }
                    self.state.status_message = Some(self.t("messages.loggedIn", "Logged in"));
                    self.refresh_projects();
                }
            }
        }
    }

    fn apply_projects(
        &mut self,
        generation: u64,
        result: Result<Vec<ProjectSummary>, SubmissionFailure>,
    ) {
        if generation != self.refresh_generation {
            tracing::debug!("Discarding project list from refresh {generation}");
            return;
        }
        match result {
            Ok(projects) => {
                tracing::info!("Loaded {} projects", projects.len());
                self.state.set_projects(projects);
            }
            Err(failure) => {
                tracing::warn!("Failed to load projects: {failure}");
                self.state.load_state = LoadState::Failed;
                self.state.status_message = Some(format!(
                    "{}: {}",
                    self.t("messages.errorLoadingProjects", "Could not load projects"),
                    failure.message(&self.translator)
                ));
                if failure == SubmissionFailure::Unauthorized && self.session.is_none() {
                    self.open_login();
                }
            }
        }
    }

    /// Form of the session that started a request, if it is still open
    fn current_form(&mut self, session_id: Uuid) -> Option<&mut ModalForm> {
        match self.session.as_mut() {
            Some(session) if session.id == session_id => Some(&mut session.form),
            _ => {
                tracing::debug!("Discarding result for closed session {session_id}");
                None
            }
        }
    }

    /// Drop the stored token after the backend rejected it
    fn forget_token(&mut self) {
        tracing::info!("Backend answered 401, clearing the stored token");
        if let Err(e) = self.tokens.clear_token() {
            tracing::warn!("Failed to remove access token: {e:#}");
            self.push_error(format!("Failed to remove access token: {e:#}"));
        }
    }

    /// Start a background request for the open form
    fn submit_modal(&mut self) {
        let token = self.tokens.get_token();
        let api = Arc::clone(&self.api);
        let tx = self.reports_tx.clone();
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let session_id = session.id;

        match &mut session.form {
            ModalForm::Project(wizard) => {
                let request = match wizard.begin_submit() {
                    Ok(request) => request,
                    Err(SubmitOutcome::Invalid { step }) => {
                        tracing::debug!("Submission blocked by step {}", step.number());
                        return;
                    }
                    Err(outcome) => {
                        tracing::debug!("Submission not started: {outcome:?}");
                        return;
                    }
                };
                tracing::info!("Submitting project {:?}", request.name);
                spawn_report(tx, async move {
                    ApiReport::ProjectCreated {
                        session_id,
                        result: api.create_project(&request, token).await,
                    }
                });
            }
            ModalForm::Task(form) => {
                let request = match form.begin_submit() {
                    Ok(request) => request,
                    Err(outcome) => {
                        tracing::debug!("Task submission not started: {outcome:?}");
                        return;
                    }
                };
                tracing::info!(
                    "Submitting task {:?} for project {}",
                    request.name,
                    request.project_id
                );
                spawn_report(tx, async move {
                    ApiReport::TaskCreated {
                        session_id,
                        result: api.create_task(&request, token).await,
                    }
                });
            }
            ModalForm::Login(form) => {
                let request = match form.begin_submit() {
                    Ok(request) => request,
                    Err(outcome) => {
                        tracing::debug!("Login not started: {outcome:?}");
                        return;
                    }
                };
                tracing::info!("Logging in as {}", request.email);
                spawn_report(tx, async move {
                    ApiReport::LoggedIn {
                        session_id,
                        result: api.login(&request).await,
                    }
                });
            }
        }
    }

    /// Handle key events
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Error dialog swallows keys until dismissed
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        if self.session.is_some() {
            self.handle_modal_key(key);
        } else {
            self.handle_dashboard_key(key);
        }
        self.sync_preferences();
        Ok(())
    }

    fn handle_dashboard_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Char('n') => self.open_wizard(),
            KeyCode::Char('a') => self.open_task_form(),
            KeyCode::Char('i') => self.open_login(),
            KeyCode::Char('r') => {
                self.state.status_message = None;
                self.refresh_projects();
            }
            KeyCode::Char('t') => {
                self.preferences.toggle_theme();
            }
            KeyCode::Char('l') => {
                self.preferences.toggle_language();
            }
            KeyCode::Char('j') | KeyCode::Down => self.state.move_selection_down(),
            KeyCode::Char('k') | KeyCode::Up => self.state.move_selection_up(),
            _ => {}
        }
    }

    fn handle_modal_key(&mut self, key: KeyEvent) {
        let command = platform::is_command(key.modifiers);
        match key.code {
            KeyCode::Esc => {
                self.close_modal();
                return;
            }
            KeyCode::Char('s') if command => {
                self.submit_modal();
                return;
            }
            _ => {}
        }

        let Some(session) = self.session.as_mut() else {
            return;
        };
        if session.form.is_submitting() {
            return;
        }
        let action = match &mut session.form {
            ModalForm::Project(wizard) => wizard_key(wizard, key, command),
            ModalForm::Task(form) => task_key(form, key, command),
            ModalForm::Login(form) => login_key(form, key, command),
        };
        match action {
            Some(ModalAction::Submit) => self.submit_modal(),
            Some(ModalAction::Close) => self.close_modal(),
            None => {}
        }
    }

    /// Handle mouse events
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<()> {
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            let outside = self
                .session
                .as_ref()
                .is_some_and(|session| session.is_outside(mouse.column, mouse.row));
            if outside {
                self.close_modal();
            }
        }
        Ok(())
    }
}

fn spawn_report<F>(tx: mpsc::UnboundedSender<ApiReport>, work: F)
where
    F: Future<Output = ApiReport> + Send + 'static,
{
    tokio::spawn(async move {
        if tx.send(work.await).is_err() {
            tracing::debug!("App gone before a background request finished");
        }
    });
}

fn wizard_key(wizard: &mut ProjectWizard, key: KeyEvent, command: bool) -> Option<ModalAction> {
    match key.code {
        KeyCode::Char('n') if command => {
            wizard.next();
        }
        KeyCode::Char('b') if command => wizard.previous(),
        KeyCode::Tab => wizard.next_field(),
        KeyCode::BackTab => wizard.prev_field(),
        KeyCode::Left if wizard.is_buttons_row_active() => wizard.prev_button(),
        KeyCode::Right if wizard.is_buttons_row_active() => wizard.next_button(),
        KeyCode::Left => wizard.cycle_choice(false),
        KeyCode::Right => wizard.cycle_choice(true),
        KeyCode::Enter => match wizard.active_input() {
            None => match wizard.selected_button {
                BUTTON_BACK => wizard.previous(),
                BUTTON_PRIMARY if wizard.current_step() == WizardStep::Review => {
                    return Some(ModalAction::Submit)
                }
                BUTTON_PRIMARY => {
                    wizard.next();
                }
                BUTTON_CANCEL => return Some(ModalAction::Close),
                _ => {}
            },
            Some(Field::Email) => {
                wizard.add_collaborator();
            }
            Some(Field::Description) => wizard.input_char('\n'),
            Some(_) => wizard.next_field(),
        },
        KeyCode::Delete if wizard.active_input() == Some(Field::Email) => {
            if let Some(last) = wizard.collaborators().last().cloned() {
                wizard.remove_collaborator(&last);
            }
        }
        KeyCode::Backspace => wizard.backspace(),
        KeyCode::Char(c) if !command => wizard.input_char(c),
        _ => {}
    }
    None
}

fn task_key(form: &mut TaskForm, key: KeyEvent, command: bool) -> Option<ModalAction> {
    match key.code {
        KeyCode::Tab => form.next_field(),
        KeyCode::BackTab => form.prev_field(),
        KeyCode::Enter => match form.active_input() {
            None => return Some(ModalAction::Submit),
            Some(Field::Description) => form.input_char('\n'),
            Some(_) => form.next_field(),
        },
        KeyCode::Backspace => form.backspace(),
        KeyCode::Char(c) if !command => form.input_char(c),
        _ => {}
    }
    None
}

fn login_key(form: &mut LoginForm, key: KeyEvent, command: bool) -> Option<ModalAction> {
    match key.code {
        KeyCode::Tab => form.next_field(),
        KeyCode::BackTab => form.prev_field(),
        KeyCode::Enter => match form.active_input() {
            Some(Field::Email) => form.next_field(),
            _ => return Some(ModalAction::Submit),
        },
        KeyCode::Backspace => form.backspace(),
        KeyCode::Char(c) if !command => form.input_char(c),
        _ => {}
    }
    None
}
