use reqwest::StatusCode;
use shared_types::ErrorResponse;
use std::error::Error;

/// Message shown when a read is attempted without a token.
pub const MISSING_TOKEN_MESSAGE: &str = "Please select a JWT token";

/// Client error types. Every variant is terminal for the action that raised it.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("{0}")]
    Validation(String),

    #[error("API error: {status}")]
    Api {
        status: StatusCode,
        body: serde_json::Value,
    },

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    pub fn missing_token() -> Self {
        Self::Validation(MISSING_TOKEN_MESSAGE.to_string())
    }

    /// The backend's `detail` field for API errors, flattened to a string.
    pub fn detail(&self) -> Option<String> {
        let Self::Api { body, .. } = self else {
            return None;
        };
        let response: ErrorResponse = serde_json::from_value(body.clone()).ok()?;
        Some(match response.detail {
            serde_json::Value::String(detail) => detail,
            other => other.to_string(),
        })
    }

    /// Text rendered into the output area for this failure.
    pub fn to_display_text(&self) -> String {
        match self {
            Self::Validation(message) => message.clone(),
            Self::Api { status, body } => {
                let pretty = serde_json::to_string_pretty(body)
                    .unwrap_or_else(|_| body.to_string());
                format!("Error: {}\n{}", status.as_u16(), pretty)
            }
            Self::Transport(e) => format!("Network Error: {}", transport_message(e)),
            Self::Serialization(e) => format!("Network Error: {e}"),
        }
    }
}

/// Flattens the reqwest error chain so the root cause (e.g. "Connection
/// refused") is part of the message.
fn transport_message(err: &reqwest::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !message.contains(&cause_text) {
            message.push_str(": ");
            message.push_str(&cause_text);
        }
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_text_is_verbatim() {
        let err = ClientError::missing_token();
        assert_eq!(err.to_display_text(), "Please select a JWT token");
    }

    #[test]
    fn test_api_error_text() {
        let err = ClientError::Api {
            status: StatusCode::UNAUTHORIZED,
            body: serde_json::json!({"error": "unauthorized"}),
        };

        assert_eq!(
            err.to_display_text(),
            "Error: 401\n{\n  \"error\": \"unauthorized\"\n}"
        );
    }

    #[test]
    fn test_detail_from_backend_error_body() {
        let err = ClientError::Api {
            status: StatusCode::UNAUTHORIZED,
            body: serde_json::json!({"detail": "Could not validate credentials"}),
        };
        assert_eq!(err.detail().as_deref(), Some("Could not validate credentials"));

        let err = ClientError::Api {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            body: serde_json::json!({"detail": [{"msg": "field required"}]}),
        };
        assert_eq!(err.detail().as_deref(), Some(r#"[{"msg":"field required"}]"#));

        let err = ClientError::Api {
            status: StatusCode::UNAUTHORIZED,
            body: serde_json::json!({"error": "unauthorized"}),
        };
        assert_eq!(err.detail(), None);
        assert_eq!(ClientError::missing_token().detail(), None);
    }

    #[test]
    fn test_serialization_error_text() {
        let parse_err = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let text = ClientError::from(parse_err).to_display_text();
        assert!(text.starts_with("Network Error: "));
    }
}
