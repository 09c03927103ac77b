//! Domain DTOs for the user service API.
//!
//! # Design
//! These types mirror the user-service's schema but are defined
//! independently, keeping the SDK free of any server-framework coupling.
//! Integration tests catch schema drift between the two crates.

use serde::{Deserialize, Serialize};

/// A single user returned by the API. The consumer only ever reads and
/// forwards these; the backend owns them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub name: String,
}
