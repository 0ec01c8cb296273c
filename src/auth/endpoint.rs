//! Validated login endpoint address.

use crate::auth::error::AuthError;
use reqwest::Url;
use std::fmt::{Display, Formatter};

/// An absolute `http`/`https` URL the credentials are posted to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint(Url);

impl Endpoint {
    /// Parses and validates an endpoint.
    ///
    /// Scheme-less addresses such as `10.0.0.1:8195/api/users/login` are rejected rather than
    /// guessed at: the URL parser would read `10.0.0.1` as garbage and `localhost:8195` as a
    /// scheme named `localhost`.
    pub fn parse(raw: &str) -> Result<Self, AuthError> {
        let raw = raw.trim();
        let invalid = |reason: &str| AuthError::InvalidEndpoint {
            url: raw.to_string(),
            reason: reason.to_string(),
        };

        if !raw.contains("://") {
            return Err(invalid(
                "missing URL scheme, use http:// or https:// in front of the address",
            ));
        }

        let url = Url::parse(raw).map_err(|e| invalid(&e.to_string()))?;
        match url.scheme() {
            "http" | "https" => {}
            other => return Err(invalid(&format!("unsupported scheme '{}'", other))),
        }
        if url.host_str().is_none_or(str::is_empty) {
            return Err(invalid("missing host"));
        }

        Ok(Self(url))
    }

    /// Joins a base URL and a path the way the environment defaults are built.
    pub fn from_base(base: &str, path: &str) -> Result<Self, AuthError> {
        Self::parse(&format!(
            "{}/{}",
            base.trim_end_matches('/'),
            path.trim_start_matches('/')
        ))
    }

    pub fn url(&self) -> &Url {
        &self.0
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Display for Endpoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_http_and_https() {
        let endpoint = Endpoint::parse("http://37.60.249.24:8195/api/users/login").unwrap();
        assert_eq!(endpoint.as_str(), "http://37.60.249.24:8195/api/users/login");
        assert!(Endpoint::parse("https://auth.example.com/login").is_ok());
    }

    #[test]
    fn test_rejects_missing_scheme() {
        for raw in ["37.60.249.24:8195/api/users/login", "localhost:8195/api/users/login"] {
            match Endpoint::parse(raw) {
                Err(AuthError::InvalidEndpoint { url, reason }) => {
                    assert_eq!(url, raw);
                    assert!(reason.contains("scheme"), "unexpected reason: {}", reason);
                }
                other => panic!("expected invalid endpoint for {}, got {:?}", raw, other),
            }
        }
    }

    #[test]
    fn test_rejects_other_schemes() {
        assert!(matches!(
            Endpoint::parse("ftp://example.com/login"),
            Err(AuthError::InvalidEndpoint { .. })
        ));
    }

    #[test]
    fn test_from_base_joins_slashes() {
        let endpoint = Endpoint::from_base("http://localhost:8195/", "/api/users/login").unwrap();
        assert_eq!(endpoint.as_str(), "http://localhost:8195/api/users/login");
    }
}
