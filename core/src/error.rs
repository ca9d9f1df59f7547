//! Error types for the JSON HTTP client.
//!
//! # Design
//! Only failures that abort a call are errors. A response with a non-2xx
//! status is not one of them: it is reported as `Reply::NonSuccess` by the
//! `send` entry points and downgraded to the result type's default value by
//! `get`/`post`/`put`.

use thiserror::Error;

/// Errors returned by `JsonHttpClient` calls.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The connection could not be established, timed out, or broke while
    /// the response was being read.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The request payload could not be serialized to JSON.
    #[error("failed to serialize request body: {0}")]
    Serialization(String),

    /// A successful response body was not valid JSON for the requested type.
    #[error("failed to deserialize response body: {0}")]
    Deserialization(String),
}

impl ClientError {
    pub fn is_transport(&self) -> bool {
        matches!(self, ClientError::Transport(_))
    }

    pub fn is_deserialization(&self) -> bool {
        matches!(self, ClientError::Deserialization(_))
    }
}

impl From<ureq::Error> for ClientError {
    fn from(err: ureq::Error) -> Self {
        ClientError::Transport(err.to_string())
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Transport(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
