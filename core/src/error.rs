//! Error types for the request client.
//!
//! # Design
//! Every call ends in exactly one `ApiError` or one value. `Network` covers
//! anything that prevented a response from arriving; `HttpStatus` means a
//! response arrived with a non-2xx status and carries the raw code and body
//! so the caller can decide what to show.

use std::fmt;

/// Errors returned by `RequestClient` and its transports.
#[derive(Debug)]
pub enum ApiError {
    /// The request never produced a response (refused, reset, DNS, ...).
    Network(String),

    /// The server answered with a non-2xx status.
    HttpStatus { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    SerializationError(String),

    /// The caller's cancellation token fired before the response arrived.
    Cancelled,

    /// The endpoint configuration is missing or empty.
    Config(String),
}

impl ApiError {
    /// Status code of an `HttpStatus` error, `None` for everything else.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
            ApiError::HttpStatus { status, body } => {
                write!(f, "HTTP {status}: {body}")
            }
            ApiError::DeserializationError(msg) => {
                write!(f, "deserialization failed: {msg}")
            }
            ApiError::SerializationError(msg) => {
                write!(f, "serialization failed: {msg}")
            }
            ApiError::Cancelled => write!(f, "request cancelled"),
            ApiError::Config(msg) => write!(f, "invalid configuration: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}
