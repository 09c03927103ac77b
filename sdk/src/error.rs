//! Error types for the user service SDK.
//!
//! # Design
//! The taxonomy mirrors the three ways a round-trip can fail: the network
//! itself (`Transport`), the server answering with a non-success status
//! (`UnexpectedStatus`), and a success body that does not match the expected
//! shape (`Deserialization`). Status is checked before the body is parsed,
//! so a 500 with garbage in it is always `UnexpectedStatus`. `InvalidBaseUrl`
//! is raised at adapter construction, never during a call.

use thiserror::Error;

/// Errors returned by the request adapter and everything built on it.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The configured base address is empty or not a well-formed URL.
    #[error("invalid base address: {0}")]
    InvalidBaseUrl(String),

    /// The network exchange itself failed — unreachable host, refused
    /// connection, broken stream.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The server answered with a non-success status code.
    #[error("unexpected status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),
}
