//! Backend service exposing a read-only user collection over HTTP.
//!
//! # Design
//! A constant responder: `GET /users` serves a fixed in-memory dataset, no
//! mutation, no persistence. The dataset sits behind the small
//! `UserRepository` read trait so a real storage layer could replace
//! `InMemoryUserRepository` without touching the endpoint.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub name: String,
}

/// Read-only access to the user collection.
pub trait UserRepository: Send + Sync {
    fn list(&self) -> Vec<User>;
}

/// Fixed in-memory dataset standing in for a persistence layer.
pub struct InMemoryUserRepository {
    users: Vec<User>,
}

impl InMemoryUserRepository {
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    /// The canonical two-user dataset this service ships with.
    pub fn seeded() -> Self {
        Self::new(vec![
            User {
                id: 1,
                name: "Alice".to_string(),
            },
            User {
                id: 2,
                name: "Bob".to_string(),
            },
        ])
    }
}

impl UserRepository for InMemoryUserRepository {
    fn list(&self) -> Vec<User> {
        self.users.clone()
    }
}

type Repository = Arc<dyn UserRepository>;

pub fn app() -> Router {
    app_with_repository(Arc::new(InMemoryUserRepository::seeded()))
}

pub fn app_with_repository(repository: Repository) -> Router {
    Router::new()
        .route("/users", get(list_users))
        .with_state(repository)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_users(State(repository): State<Repository>) -> Json<Vec<User>> {
    Json(repository.list())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_serializes_to_json() {
        let user = User {
            id: 1,
            name: "Alice".to_string(),
        };
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["name"], "Alice");
    }

    #[test]
    fn seeded_repository_lists_alice_then_bob() {
        let repo = InMemoryUserRepository::seeded();
        let users = repo.list();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].id, 1);
        assert_eq!(users[0].name, "Alice");
        assert_eq!(users[1].id, 2);
        assert_eq!(users[1].name, "Bob");
    }

    #[test]
    fn repository_list_is_stable() {
        let repo = InMemoryUserRepository::seeded();
        assert_eq!(repo.list(), repo.list());
    }

    #[test]
    fn empty_repository_lists_nothing() {
        let repo = InMemoryUserRepository::new(Vec::new());
        assert!(repo.list().is_empty());
    }
}
