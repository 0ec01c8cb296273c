//! Login endpoint client
//!
//! Posts credentials as JSON and hands back the success body untouched.

use crate::auth::error::AuthError;
use crate::auth::{Authenticator, Credentials, Endpoint};
use reqwest::{Client, ClientBuilder, Response};
use std::time::Duration;
use tracing::{debug, info, warn};

// User-Agent string with CLI version
const USER_AGENT: &str = concat!("login-form/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct AuthClient {
    client: Client,
    endpoint: Endpoint,
}

impl AuthClient {
    /// Creates a client for `endpoint`.
    ///
    /// With `timeout` set to `None` a request may wait forever for an answer.
    pub fn new(endpoint: Endpoint, timeout: Option<Duration>) -> Result<Self, AuthError> {
        let mut builder = ClientBuilder::new().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    async fn handle_response_status(response: Response) -> Result<Response, AuthError> {
        if !response.status().is_success() {
            return Err(AuthError::from_response(response).await);
        }
        Ok(response)
    }

    /// An empty success body is shown as `null`.
    fn decode_response(bytes: &[u8]) -> Result<serde_json::Value, AuthError> {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(serde_json::Value::Null);
        }
        serde_json::from_slice(bytes).map_err(AuthError::Decode)
    }
}

#[async_trait::async_trait]
impl Authenticator for AuthClient {
    async fn login(&self, credentials: &Credentials) -> Result<serde_json::Value, AuthError> {
        debug!("POST {} for {}", self.endpoint, credentials.username);
        let response = self
            .client
            .post(self.endpoint.url().clone())
            .json(credentials)
            .send()
            .await
            .inspect_err(|e| warn!("Request to {} failed: {}", self.endpoint, e))?;

        let response = Self::handle_response_status(response)
            .await
            .inspect_err(|e| {
                warn!(
                    "Login rejected with status {}: {}",
                    e.status().unwrap_or_default(),
                    e.user_message()
                )
            })?;
        let status = response.status();
        let response_bytes = response.bytes().await?;
        let body = Self::decode_response(&response_bytes)?;
        info!("Login succeeded with status {}", status);
        Ok(body)
    }
}
