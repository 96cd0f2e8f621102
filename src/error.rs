use derive_builder::UninitializedFieldError;
use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BoxcError {
    /// A parameter was rejected before any request was sent.
    #[error("Invalid parameters: {0}")]
    Validation(String),

    #[error("No access token set; call set_access_token first")]
    Unauthorized,

    /// The OAuth endpoint refused the application credentials or nonce.
    #[error("Authentication rejected: status {status}, body {body}")]
    Auth { status: StatusCode, body: Value },

    #[error("API returned an error: status {status}, body {body}")]
    Http { status: StatusCode, body: Value },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Failed to parse JSON response at `{path}`: {message}")]
    Deserialize { path: String, message: String },

    #[error("Failed to serialize request body: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl BoxcError {
    /// HTTP status of the rejected response, if there was one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            BoxcError::Http { status, .. } | BoxcError::Auth { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_auth_error(&self) -> bool {
        match self {
            BoxcError::Unauthorized | BoxcError::Auth { .. } => true,
            BoxcError::Http { status, .. } => {
                *status == StatusCode::UNAUTHORIZED || *status == StatusCode::FORBIDDEN
            }
            _ => false,
        }
    }
}

impl From<UninitializedFieldError> for BoxcError {
    fn from(err: UninitializedFieldError) -> Self {
        BoxcError::Validation(format!("missing required field `{}`", err.field_name()))
    }
}
