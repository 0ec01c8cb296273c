use crate::auth::Endpoint;
use crate::auth::error::AuthError;
use crate::consts::cli_consts::LOGIN_PATH;
use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// Represents the deployments the login form can talk to.
#[derive(Clone, Default, Copy, PartialEq, Eq)]
pub enum Environment {
    /// Auth service running on this machine.
    Local,
    /// The deployed auth service.
    #[default]
    Production,
}

impl Environment {
    /// Returns the auth service base URL associated with the environment.
    pub fn base_url(&self) -> String {
        match self {
            Environment::Local => "http://localhost:8195".to_string(),
            Environment::Production => "http://37.60.249.24:8195".to_string(),
        }
    }

    /// The login endpoint of this environment.
    pub fn login_endpoint(&self) -> Result<Endpoint, AuthError> {
        Endpoint::from_base(&self.base_url(), LOGIN_PATH)
    }
}

impl FromStr for Environment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Environment::Local),
            "production" | "prod" => Ok(Environment::Production),
            _ => Err(()),
        }
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Local => write!(f, "Local"),
            Environment::Production => write!(f, "Production"),
        }
    }
}

impl Debug for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Environment::{}, URL: {}", self, self.base_url())
    }
}
