//! Trait abstraction for the project API to enable mocking in tests

use super::error::SubmissionFailure;
use super::payload::{
    CreatedProject, CreatedTask, LoginRequest, LoginTokens, NewProjectRequest, NewTaskRequest,
    ProjectSummary,
};
use async_trait::async_trait;

/// Project API operations used by the TUI
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProjectApi: Send + Sync {
    /// List the projects the token's user participates in
    async fn list_projects(
        &self,
        token: Option<String>,
    ) -> Result<Vec<ProjectSummary>, SubmissionFailure>;

    /// Create a project
    async fn create_project(
        &self,
        request: &NewProjectRequest,
        token: Option<String>,
    ) -> Result<CreatedProject, SubmissionFailure>;

    /// Create a task inside a project
    async fn create_task(
        &self,
        request: &NewTaskRequest,
        token: Option<String>,
    ) -> Result<CreatedTask, SubmissionFailure>;

    /// Exchange credentials for an access token
    async fn login(&self, request: &LoginRequest) -> Result<LoginTokens, SubmissionFailure>;
}
