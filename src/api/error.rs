use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// The backend answered with a non-2xx status. `message` is resolved
    /// from the response body by [`error_message`].
    #[error("{message}")]
    Http { status: StatusCode, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid JSON in response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
}

impl ApiError {
    /// Status code of the failed request, if this error carries one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            ApiError::Network(e) => e.status(),
            _ => None,
        }
    }
}

/// Truncate response text echoed into an error message, backing up to a
/// char boundary so multibyte content cannot split mid-character.
pub(crate) fn truncate_text(text: &str, max_len: usize) -> &str {
    if text.len() <= max_len {
        return text;
    }
    let mut end = max_len;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

/// Resolve a user-facing message from an error response body.
///
/// Fixed priority list, in order:
/// 1. the body's `detail` string field (FastAPI convention)
/// 2. the body's `message` string field
/// 3. a generic `"HTTP error! status: <code>"` string
///
/// Non-object bodies (plain text, arrays) and non-string `detail`/`message`
/// values fall through to the next entry in the list.
pub fn error_message(body: Option<&Value>, status: StatusCode) -> String {
    if let Some(Value::Object(map)) = body {
        for field in ["detail", "message"] {
            if let Some(Value::String(text)) = map.get(field) {
                if !text.is_empty() {
                    return text.clone();
                }
            }
        }
    }
    format!("HTTP error! status: {}", status.as_u16())
}
