use crate::auth::error::AuthError;
use serde::Serialize;
use std::fmt::{Debug, Formatter};

pub(crate) mod client;
pub use client::AuthClient;
pub mod endpoint;
pub use endpoint::Endpoint;
pub mod error;

#[cfg(test)]
use mockall::automock;

/// The JSON body posted to the login endpoint.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

// Keeps passwords out of logs.
impl Debug for Credentials {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Authenticator: Send + Sync {
    /// Posts the credentials once and returns the parsed success body.
    async fn login(&self, credentials: &Credentials) -> Result<serde_json::Value, AuthError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_serialize_as_username_and_password() {
        let credentials = Credentials::new("ada@example.com", "hunter2");
        let json = serde_json::to_value(&credentials).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"username": "ada@example.com", "password": "hunter2"})
        );
    }

    #[test]
    fn test_credentials_debug_redacts_password() {
        let credentials = Credentials::new("ada@example.com", "hunter2");
        let debug = format!("{:?}", credentials);
        assert!(debug.contains("ada@example.com"));
        assert!(!debug.contains("hunter2"));
    }
}
