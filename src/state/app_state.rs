//! Application state definitions

use crate::api::ProjectSummary;
use std::collections::VecDeque;

/// Where the project list stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    NotLoaded,
    Loading,
    Loaded,
    Failed,
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    // Data
    pub projects: Vec<ProjectSummary>,
    pub load_state: LoadState,

    // Selection
    pub selected_index: usize,

    // Feedback
    pub status_message: Option<String>,
    error_queue: VecDeque<String>,
}

impl AppState {
    /// Move selection down
    pub fn move_selection_down(&mut self) {
        let max = self.projects.len();
        if max > 0 && self.selected_index < max - 1 {
            self.selected_index += 1;
        }
    }

    /// Move selection up
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn selected_project(&self) -> Option<&ProjectSummary> {
        self.projects.get(self.selected_index)
    }

    /// Replace the project list, keeping the selection in range
    pub fn set_projects(&mut self, projects: Vec<ProjectSummary>) {
        self.projects = projects;
        self.load_state = LoadState::Loaded;
        if self.selected_index >= self.projects.len() {
            self.selected_index = self.projects.len().saturating_sub(1);
        }
    }

    /// Queue an error for the error dialog
    pub fn push_error(&mut self, message: String) {
        self.error_queue.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.error_queue.is_empty()
    }

    /// Error shown in the dialog, oldest first
    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn project(id: i64, name: &str) -> ProjectSummary {
        ProjectSummary {
            id: Some(id),
            name: name.into(),
            description: String::new(),
            project_type: Some("TCC".into()),
        }
    }

    fn state_with(count: usize) -> AppState {
        let mut state = AppState::default();
        state.set_projects((0..count as i64).map(|i| project(i, "p")).collect());
        state
    }

    mod selection {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_move_down_stops_at_last() {
            let mut state = state_with(2);
            state.move_selection_down();
            state.move_selection_down();
            assert_eq!(state.selected_index, 1);
        }

        #[test]
        fn test_move_down_on_empty_list() {
            let mut state = AppState::default();
            state.move_selection_down();
            assert_eq!(state.selected_index, 0);
            assert!(state.selected_project().is_none());
        }

        #[test]
        fn test_move_up_stops_at_first() {
            let mut state = state_with(3);
            state.move_selection_up();
            assert_eq!(state.selected_index, 0);
        }

        #[test]
        fn test_set_projects_clamps_selection() {
            let mut state = state_with(5);
            state.selected_index = 4;
            state.set_projects(vec![project(1, "only")]);
            assert_eq!(state.selected_index, 0);
            assert_eq!(state.selected_project().map(|p| p.name.as_str()), Some("only"));
            assert_eq!(state.load_state, LoadState::Loaded);
        }
    }

    mod errors {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_queue_is_fifo() {
            let mut state = AppState::default();
            state.push_error("first".into());
            state.push_error("second".into());
            assert_eq!(state.current_error(), Some("first"));
            state.dismiss_error();
            assert_eq!(state.current_error(), Some("second"));
            state.dismiss_error();
            assert!(!state.has_errors());
        }

        #[test]
        fn test_dismiss_on_empty_queue() {
            let mut state = AppState::default();
            state.dismiss_error();
            assert!(state.current_error().is_none());
        }
    }
}
