//! Request and response bodies for the project API

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Body of `POST projetos/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProjectRequest {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub project_type: String,
    pub template: String,
    pub collaborators: Vec<String>,
    pub created_at: NaiveDate,
    pub due_date: NaiveDate,
}

/// Whatever the backend echoes back for a created project
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct CreatedProject {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: String,
}

/// Dashboard entry from `GET projetos/`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProjectSummary {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, rename = "type")]
    pub project_type: Option<String>,
}

/// Body of `POST tarefas/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTaskRequest {
    pub name: String,
    pub description: String,
    pub due_date: NaiveDate,
    /// Assignee email
    pub responsible: String,
    pub project_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct CreatedTask {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: String,
}

/// Body of `POST login/`
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Tokens issued by `POST login/`
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct LoginTokens {
    pub access: String,
    #[serde(default)]
    pub refresh: Option<String>,
}

impl fmt::Debug for LoginTokens {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginTokens")
            .field("access", &"<redacted>")
            .field("refresh", &self.refresh.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
