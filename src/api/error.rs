//! Failure kinds reported by the project API boundary

use crate::i18n::Translator;
use serde_json::Value;
use thiserror::Error;

/// Why a request to the project API did not succeed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionFailure {
    /// The backend refused the credentials (HTTP 401)
    #[error("unauthorized")]
    Unauthorized,
    /// Any other non-success HTTP status, with the decoded body if it was JSON
    #[error("request rejected with status {status}")]
    Rejected { status: u16, detail: Option<Value> },
    /// The request never produced an HTTP response
    #[error("transport error: {0}")]
    Transport(String),
}

impl SubmissionFailure {
    /// Classify a non-success response
    pub fn from_response(status: u16, body: &str) -> Self {
        if status == 401 {
            return Self::Unauthorized;
        }
        let detail = serde_json::from_str::<Value>(body).ok();
        Self::Rejected { status, detail }
    }

    /// Field-level messages from the response detail, joined by spaces
    pub fn detail_message(&self) -> Option<String> {
        let Self::Rejected {
            detail: Some(detail),
            ..
        } = self
        else {
            return None;
        };
        let mut messages = Vec::new();
        collect_messages(detail, &mut messages);
        if messages.is_empty() {
            None
        } else {
            Some(messages.join(" "))
        }
    }

    /// User-facing message for a failed project creation
    pub fn message(&self, t: &Translator) -> String {
        self.message_or(t, "messages.errorNewProject", "Error creating new project")
    }

    /// User-facing message, using `generic_key` when a rejection carries no detail
    pub fn message_or(&self, t: &Translator, generic_key: &str, generic_default: &str) -> String {
        match self {
            Self::Unauthorized => t.t(
                "messages.serviceUnavailable",
                "Service unavailable or session expired. Please log in again.",
            ),
            Self::Rejected { .. } => self
                .detail_message()
                .unwrap_or_else(|| t.t(generic_key, generic_default)),
            Self::Transport(message) => message.clone(),
        }
    }
}

impl From<reqwest::Error> for SubmissionFailure {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

fn collect_messages(value: &Value, out: &mut Vec<String>) {
    match value {
        Value::String(s) => {
            let s = s.trim();
            if !s.is_empty() {
                out.push(s.to_string());
            }
        }
        Value::Array(items) => items.iter().for_each(|v| collect_messages(v, out)),
        Value::Object(map) => map.values().for_each(|v| collect_messages(v, out)),
        Value::Null | Value::Bool(_) | Value::Number(_) => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn en() -> Translator {
        Translator::new(Language::En)
    }

    #[test]
    fn test_401_is_unauthorized() {
        assert_eq!(
            SubmissionFailure::from_response(401, "{\"detail\": \"nope\"}"),
            SubmissionFailure::Unauthorized
        );
    }

    #[test]
    fn test_other_status_keeps_json_detail() {
        let failure = SubmissionFailure::from_response(400, r#"{"name": ["This field is required."]}"#);
        assert_eq!(
            failure,
            SubmissionFailure::Rejected {
                status: 400,
                detail: Some(json!({"name": ["This field is required."]})),
            }
        );
    }

    #[test]
    fn test_non_json_body_has_no_detail() {
        let failure = SubmissionFailure::from_response(502, "<html>Bad Gateway</html>");
        assert_eq!(
            failure,
            SubmissionFailure::Rejected {
                status: 502,
                detail: None
            }
        );
    }

    #[test]
    fn test_detail_messages_joined_by_spaces() {
        let failure = SubmissionFailure::Rejected {
            status: 400,
            detail: Some(json!({
                "description": ["This field may not be blank."],
                "name": ["This field is required.", "Too short."]
            })),
        };
        assert_eq!(
            failure.message(&en()),
            "This field may not be blank. This field is required. Too short."
        );
    }

    #[test]
    fn test_top_level_detail_string() {
        let failure = SubmissionFailure::Rejected {
            status: 500,
            detail: Some(json!({"detail": "Internal error"})),
        };
        assert_eq!(failure.message(&en()), "Internal error");
    }

    #[test]
    fn test_empty_detail_falls_back_to_generic() {
        let failure = SubmissionFailure::Rejected {
            status: 400,
            detail: Some(json!({"name": []})),
        };
        assert_eq!(failure.message(&en()), "Error creating new project");
    }

    #[test]
    fn test_unauthorized_message_is_fixed() {
        assert_eq!(
            SubmissionFailure::Unauthorized.message(&en()),
            "Service unavailable or session expired. Please log in again."
        );
    }

    #[test]
    fn test_transport_message_passes_through() {
        let failure = SubmissionFailure::Transport("connection refused".into());
        assert_eq!(failure.message(&en()), "connection refused");
    }

    #[test]
    fn test_generic_message_is_translated() {
        let failure = SubmissionFailure::Rejected {
            status: 500,
            detail: None,
        };
        assert_eq!(
            failure.message(&Translator::new(Language::Pt)),
            "Erro inesperado ao criar projeto."
        );
    }
}
