//! Request descriptions as plain data.
//!
//! # Design
//! A `RequestInformation` captures an intended call — method, path, headers —
//! without any transport state. The client builds one per operation and hands
//! it to a `RequestAdapter` for execution; nothing in this module touches the
//! network. All fields use owned types so descriptions can be moved freely
//! between the client, the authentication provider and the adapter.

/// HTTP method for a request description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub(crate) fn as_reqwest(self) -> reqwest::Method {
        match self {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// An intended call described as plain data.
///
/// Built by `UserServiceClient` operations and executed by a
/// `RequestAdapter`. The path may be relative (resolved against the adapter's
/// base address) or absolute (used as-is). Only an `AuthenticationProvider`
/// mutates a description after construction, via [`add_header`].
///
/// [`add_header`]: RequestInformation::add_header
#[derive(Debug, Clone)]
pub struct RequestInformation {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
}

impl RequestInformation {
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            headers: Vec::new(),
        }
    }

    /// Append a header unless one with the same name is already present.
    /// Keeps authentication providers idempotent when invoked twice.
    pub fn add_header(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        if self.headers.iter().any(|(existing, _)| *existing == name) {
            return;
        }
        self.headers.push((name, value.into()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_request_has_no_headers() {
        let req = RequestInformation::new(HttpMethod::Get, "/users");
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "/users");
        assert!(req.headers.is_empty());
    }

    #[test]
    fn add_header_appends() {
        let mut req = RequestInformation::new(HttpMethod::Get, "/users");
        req.add_header("authorization", "Bearer token");
        assert_eq!(
            req.headers,
            vec![("authorization".to_string(), "Bearer token".to_string())]
        );
    }

    #[test]
    fn add_header_ignores_duplicate_names() {
        let mut req = RequestInformation::new(HttpMethod::Get, "/users");
        req.add_header("authorization", "first");
        req.add_header("authorization", "second");
        assert_eq!(req.headers.len(), 1);
        assert_eq!(req.headers[0].1, "first");
    }
}
