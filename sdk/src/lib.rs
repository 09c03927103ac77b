//! Typed HTTP client SDK for the user service.
//!
//! # Overview
//! Exposes the user service's resources through `UserServiceClient`, a typed
//! façade that knows nothing about transport or authentication. Both concerns
//! sit behind narrow traits — `RequestAdapter` executes request descriptions
//! and `AuthenticationProvider` decorates them with credentials — so either
//! can be swapped without touching the generated request/response contract.
//!
//! # Design
//! - `RequestInformation` describes an intended call as plain data; it is
//!   never executed directly.
//! - `HttpRequestAdapter` is the single chokepoint that resolves a request
//!   against the configured base address, attaches authentication, performs
//!   the round-trip and deserializes the body into the expected type.
//! - No retries, no timeouts, no caching: every failure propagates to the
//!   caller unchanged as an `ApiError`.

pub mod adapter;
pub mod auth;
pub mod client;
pub mod error;
pub mod request;
pub mod types;

pub use adapter::{HttpRequestAdapter, RequestAdapter};
pub use auth::{AnonymousAuthenticationProvider, AuthenticationProvider};
pub use client::UserServiceClient;
pub use error::ApiError;
pub use request::{HttpMethod, RequestInformation};
pub use types::User;
