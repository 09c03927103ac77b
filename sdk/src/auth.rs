//! Authentication providers for outgoing requests.
//!
//! # Design
//! A provider decorates a `RequestInformation` with credential material
//! before the adapter executes it. The adapter holds the provider behind a
//! trait object, so a bearer-token or API-key variant can replace the
//! anonymous one without the adapter knowing which is active.

use crate::request::RequestInformation;

/// Attaches credential material to an outgoing request description.
///
/// Implementations must be idempotent — authenticating the same request
/// twice leaves it in the same state as authenticating it once — and must
/// not have side effects beyond mutating the request.
pub trait AuthenticationProvider: Send + Sync {
    fn authenticate(&self, request: &mut RequestInformation);
}

/// Provider for endpoints that require no credentials. Leaves the request
/// untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnonymousAuthenticationProvider;

impl AuthenticationProvider for AnonymousAuthenticationProvider {
    fn authenticate(&self, _request: &mut RequestInformation) {}
}
