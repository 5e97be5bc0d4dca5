//! HTTP client for the Build Your Project REST API
//!
//! Thin `reqwest` wrapper. Every failure is mapped into a
//! [`SubmissionFailure`] so callers can branch on it exhaustively.

use super::error::SubmissionFailure;
use super::payload::{
    CreatedProject, CreatedTask, LoginRequest, LoginTokens, NewProjectRequest, NewTaskRequest,
    ProjectSummary,
};
use super::traits::ProjectApi;
use crate::config::TuiConfig;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// Default API base URL
const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

/// Environment variable overriding the configured base URL
const BASE_URL_ENV: &str = "BYP_API_URL";

/// Projects collection, relative to the base URL
const PROJECTS_ENDPOINT: &str = "projetos/";

const TASKS_ENDPOINT: &str = "tarefas/";

const LOGIN_ENDPOINT: &str = "login/";

/// Client for the project API
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: Option<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        })
    }

    /// Build a client from config, letting `BYP_API_URL` override the base URL
    pub fn from_config(config: &TuiConfig) -> Result<Self> {
        let base_url = std::env::var(BASE_URL_ENV)
            .ok()
            .filter(|url| !url.trim().is_empty())
            .or_else(|| config.api_base_url.clone());
        Self::new(base_url, config.request_timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join a relative endpoint to the base URL with exactly one slash
    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    fn authorize(request: RequestBuilder, token: Option<&str>) -> RequestBuilder {
        match token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Turn a non-success response into a failure, passing successes through
    async fn check(response: Response) -> Result<Response, SubmissionFailure> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        tracing::debug!("API responded {status}: {body}");
        Err(SubmissionFailure::from_response(status.as_u16(), &body))
    }

    /// POST `body` and read whatever comes back, tolerating bodies we cannot parse
    async fn create<B, R>(
        &self,
        path: &str,
        body: &B,
        token: Option<String>,
    ) -> Result<R, SubmissionFailure>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned + Default,
    {
        let request = Self::authorize(
            self.http.post(self.endpoint(path)).json(body),
            token.as_deref(),
        );
        let response = Self::check(request.send().await?).await?;

        // Body is informational; a 2xx already means the record exists
        let body = response.text().await.unwrap_or_default();
        Ok(serde_json::from_str(&body).unwrap_or_else(|e| {
            tracing::debug!("Unparseable response from {path} ({e}): {body}");
            R::default()
        }))
    }
}

#[async_trait]
impl ProjectApi for ApiClient {
    async fn list_projects(
        &self,
        token: Option<String>,
    ) -> Result<Vec<ProjectSummary>, SubmissionFailure> {
        let request = Self::authorize(
            self.http.get(self.endpoint(PROJECTS_ENDPOINT)),
            token.as_deref(),
        );
        let response = Self::check(request.send().await?).await?;
        Ok(response.json().await?)
    }

    async fn create_project(
        &self,
        project: &NewProjectRequest,
        token: Option<String>,
    ) -> Result<CreatedProject, SubmissionFailure> {
        self.create(PROJECTS_ENDPOINT, project, token).await
    }

    async fn create_task(
        &self,
        task: &NewTaskRequest,
        token: Option<String>,
    ) -> Result<CreatedTask, SubmissionFailure> {
        self.create(TASKS_ENDPOINT, task, token).await
    }

    async fn login(&self, credentials: &LoginRequest) -> Result<LoginTokens, SubmissionFailure> {
        let request = self.http.post(self.endpoint(LOGIN_ENDPOINT)).json(credentials);
        let response = Self::check(request.send().await?).await?;
        Ok(response.json().await?)
    }
}
