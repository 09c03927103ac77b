//! Typed façade over a `RequestAdapter` for the user service API.
//!
//! # Design
//! One method per remote resource, each of which only shapes a
//! `RequestInformation` and hands it to the adapter. No transport logic, no
//! transformation of payloads — what the server returns is what the caller
//! gets, eagerly materialized.

use crate::adapter::RequestAdapter;
use crate::error::ApiError;
use crate::request::{HttpMethod, RequestInformation};
use crate::types::User;

/// Client for the user service, generic over the adapter that executes its
/// requests.
#[derive(Debug, Clone)]
pub struct UserServiceClient<A> {
    adapter: A,
}

impl<A: RequestAdapter> UserServiceClient<A> {
    pub fn new(adapter: A) -> Self {
        Self { adapter }
    }

    /// Fetch the full user collection from `GET /users`.
    ///
    /// Returns the backend's array in its original order, unfiltered. An
    /// empty backend array yields an empty `Vec`, not an error.
    pub async fn fetch_users(&self) -> Result<Vec<User>, ApiError> {
        let request = RequestInformation::new(HttpMethod::Get, "/users");
        self.adapter.send(request).await
    }
}
