//! Project API module for REST communication with the backend

mod client;
mod error;
mod payload;
mod traits;

pub use client::ApiClient;
pub use error::SubmissionFailure;
pub use payload::{
    CreatedProject, CreatedTask, LoginRequest, LoginTokens, NewProjectRequest, NewTaskRequest,
    ProjectSummary,
};
pub use traits::ProjectApi;

#[cfg(test)]
pub use traits::MockProjectApi;
