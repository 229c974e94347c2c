//! Client error taxonomy
//!
//! Every failure of a [`SnippetClient`](crate::SnippetClient) call maps to
//! exactly one variant so callers can decide between redirecting, reporting
//! and degrading without inspecting status codes themselves.

use thiserror::Error;

/// Errors returned by snippet service calls.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClientError {
    /// The request was not authenticated (HTTP 401).
    #[error("Unauthorized")]
    Unauthorized,

    /// The requested snippet does not exist (HTTP 404).
    #[error("Not found")]
    NotFound,

    /// The service answered with any other non-success status.
    ///
    /// `message` carries the `message` field of the error body when the
    /// service sent one.
    #[error("Request rejected with status {status}")]
    Rejected { status: u16, message: Option<String> },

    /// The request never produced a response (connection, timeout, ...).
    #[error("Transport error: {0}")]
    Transport(String),

    /// The response body could not be decoded.
    #[error("Invalid response body: {0}")]
    Decode(String),
}

impl ClientError {
    /// The server supplied error message, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ClientError::Rejected {
                message: Some(message),
                ..
            } if !message.is_empty() => Some(message),
            _ => None,
        }
    }

    /// Whether the caller should be sent away to authenticate.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ClientError::Unauthorized)
    }

    /// Whether the target entity does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::NotFound)
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::Decode(err.to_string())
        } else {
            ClientError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Decode(err.to_string())
    }
}
