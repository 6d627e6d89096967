//! Error types for the showfinder library
//!
//! Provides a single error enum with human-readable messages
//! and Tauri-compatible serialization.

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Error type for all showfinder operations
///
/// Implements Display for human-readable messages and Serialize
/// for Tauri command compatibility.
#[derive(Error, Debug)]
pub enum ShowfinderError {
    /// HTTP request failed (connection, timeout, body read)
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("Unexpected HTTP status {status} for {url}")]
    Status { status: u16, url: String },

    /// Requested resource does not exist (HTTP 404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Response body was not the expected JSON shape
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Markup template failed to render
    #[error("Failed to render markup: {0}")]
    RenderError(#[from] askama::Error),

    /// Show ID is not a valid TVMaze identifier
    #[error("Invalid show ID: {0}")]
    InvalidId(String),
}

impl From<serde_json::Error> for ShowfinderError {
    fn from(err: serde_json::Error) -> Self {
        ShowfinderError::ParseError(err.to_string())
    }
}

impl Serialize for ShowfinderError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type alias for showfinder operations
pub type Result<T> = std::result::Result<T, ShowfinderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_status() {
        let error = ShowfinderError::Status {
            status: 503,
            url: "https://api.tvmaze.com/shows/1/episodes".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Unexpected HTTP status 503 for https://api.tvmaze.com/shows/1/episodes"
        );
    }

    #[test]
    fn test_error_display_not_found() {
        let error = ShowfinderError::NotFound("/shows/999999/episodes".to_string());
        assert_eq!(error.to_string(), "Not found: /shows/999999/episodes");
    }

    #[test]
    fn test_error_display_invalid_id() {
        let error = ShowfinderError::InvalidId("abc".to_string());
        assert_eq!(error.to_string(), "Invalid show ID: abc");
    }

    #[test]
    fn test_error_from_json_error() {
        let json_err = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let error = ShowfinderError::from(json_err);
        assert!(matches!(error, ShowfinderError::ParseError(_)));
        assert!(error.to_string().starts_with("Failed to parse API response:"));
    }

    #[test]
    fn test_error_from_render_error() {
        let error = ShowfinderError::from(askama::Error::Fmt(std::fmt::Error));
        assert!(matches!(error, ShowfinderError::RenderError(_)));
        assert!(error.to_string().starts_with("Failed to render markup:"));
    }

    #[test]
    fn test_error_serialize() {
        let error = ShowfinderError::InvalidId("".to_string());
        let json = serde_json::to_string(&error).expect("Serialization should succeed");
        assert_eq!(json, "\"Invalid show ID: \"");
    }
}
