//! Error types for the Mojang API client.
//!
//! # Design
//! A profile that does not exist is not an error: lookups return `Ok(None)`
//! for it. Every other non-success response lands in `Request` with the raw
//! status code and body for debugging. Failures that never touch the network
//! (identifier formatting, textures decoding) get their own variants so
//! callers can tell malformed input from malformed upstream data.

use thiserror::Error;

/// Errors returned by `MojangClient` parse methods and `MojangApi` calls.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The string is neither a dashed nor an undashed 32-digit hex identifier.
    #[error("Invalid UUID format for string: [{0}]")]
    InvalidFormat(String),

    /// A profile record lacks a property that is expected to be present.
    #[error("property not found: {0}")]
    PropertyNotFound(String),

    /// The nested textures payload is not valid Base64 or not valid JSON.
    #[error("failed to decode textures payload: {0}")]
    Decode(#[from] DecodeError),

    /// The server returned a status outside the success/absence set of the
    /// endpoint.
    #[error("HTTP {status}: {body}")]
    Request { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// The transport failed before a response was received.
    #[error("transport failed: {0}")]
    Transport(String),
}

impl ApiError {
    /// HTTP status code carried by a `Request` error.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Request { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Failure while decoding the Base64-encoded JSON of a textures property.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),
}
