//! Frame errors and centralized helpers for HTTP error responses.
//!
//! Use these helpers to ensure all error bodies are consistent, explicit, and
//! include a code and context.

use std::fmt;

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde_json::json;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameError {
    /// The POST body is not a frame request.
    MalformedBody(String),
    /// The echoed state is neither JSON nor percent-encoded JSON of a game state.
    MalformedState(String),
    /// The echoed state parses but breaks the game's invariants.
    InconsistentState(&'static str),
    UnknownGame(String),
    EncodeState(String),
}

impl FrameError {
    pub fn code(&self) -> &'static str {
        match self {
            FrameError::MalformedBody(_) => "MALFORMED_BODY",
            FrameError::MalformedState(_) => "MALFORMED_STATE",
            FrameError::InconsistentState(_) => "INCONSISTENT_STATE",
            FrameError::UnknownGame(_) => "UNKNOWN_GAME",
            FrameError::EncodeState(_) => "ENCODE_STATE",
        }
    }

    fn context(&self) -> Option<&str> {
        match self {
            FrameError::InconsistentState(game) => Some(*game),
            FrameError::UnknownGame(slug) => Some(slug.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameError::MalformedBody(err) => write!(f, "malformed frame request: {}", err),
            FrameError::MalformedState(err) => write!(f, "malformed game state: {}", err),
            FrameError::InconsistentState(game) => write!(f, "inconsistent {} state", game),
            FrameError::UnknownGame(slug) => write!(f, "unknown game '{}'", slug),
            FrameError::EncodeState(err) => write!(f, "could not encode game state: {}", err),
        }
    }
}

impl std::error::Error for FrameError {}

impl ResponseError for FrameError {
    fn status_code(&self) -> StatusCode {
        match self {
            FrameError::UnknownGame(_) => StatusCode::NOT_FOUND,
            FrameError::MalformedBody(_)
            | FrameError::MalformedState(_)
            | FrameError::InconsistentState(_) => StatusCode::BAD_REQUEST,
            FrameError::EncodeState(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        http_error_response(self.code(), &self.to_string(), self.context(), self.status_code())
    }
}

/// Returns an HTTP error response with a JSON body.
///
/// # Arguments
/// - `code`: Unique error code.
/// - `message`: Human-readable error message.
/// - `context`: Optional context string.
/// - `status`: HTTP status code.
pub fn http_error_response(
    code: &str,
    message: &str,
    context: Option<&str>,
    status: StatusCode,
) -> HttpResponse {
    HttpResponse::build(status).json(json!({
        "error": {
            "code": code,
            "message": message,
            "context": context.unwrap_or(""),
        }
    }))
}
