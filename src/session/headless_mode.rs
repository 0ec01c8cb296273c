//! Headless mode execution
//!
//! One submission through the same lifecycle as the TUI, reported on the console.

use crate::auth::Authenticator;
use crate::form::{Field, LoginForm, SubmissionState, SubmitBlocked};
use crate::report;
use std::error::Error;

/// How a headless submission ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadlessOutcome {
    /// The pretty-printed response body.
    Success(String),
    /// The inline error text.
    Failure(String),
}

/// Runs the form lifecycle once for the given credentials.
pub async fn submit_once(
    authenticator: &dyn Authenticator,
    email: &str,
    password: &str,
) -> Result<HeadlessOutcome, Box<dyn Error>> {
    let mut form = LoginForm::new(false).with_email(email);
    form.set_field(Field::Password, password);

    let submission = match form.submit() {
        Ok(submission) => submission,
        Err(SubmitBlocked::Invalid(e)) => return Err(e.into()),
        Err(SubmitBlocked::InFlight) => return Err("A login is already in progress".into()),
    };

    let result = authenticator.login(&submission.credentials).await;
    form.resolve(submission.ticket, result);

    match form.state() {
        SubmissionState::Error(message) => Ok(HeadlessOutcome::Failure(message.clone())),
        _ => match form.response_text() {
            Some(body) => Ok(HeadlessOutcome::Success(body)),
            None => Err("Login finished without a response".into()),
        },
    }
}

/// Runs the application in headless mode
///
/// Prints the response body on success. A failed login is reported and turned into an
/// error so the process exits non-zero.
///
/// # Arguments
/// * `authenticator` - Performs the request
/// * `endpoint` - Shown in the start message
/// * `email`, `password` - The credentials to submit
pub async fn run_headless_mode(
    authenticator: &dyn Authenticator,
    endpoint: &str,
    email: &str,
    password: &str,
) -> Result<(), Box<dyn Error>> {
    report!(Info, "Submitting", "{} to {}", email, endpoint);

    let outcome = tokio::select! {
        outcome = submit_once(authenticator, email, password) => outcome?,
        _ = tokio::signal::ctrl_c() => return Err("Interrupted".into()),
    };

    match outcome {
        HeadlessOutcome::Success(body) => {
            report!(Success, "Login successful");
            println!("{}", body);
            Ok(())
        }
        HeadlessOutcome::Failure(message) => {
            report!(Error, "Login failed", "{}", message);
            Err(message.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::MockAuthenticator;
    use crate::auth::error::AuthError;
    use crate::form::validation::ValidationError;
    use serde_json::json;

    #[tokio::test]
    async fn test_submit_once_success_returns_pretty_body() {
        let mut authenticator = MockAuthenticator::new();
        authenticator
            .expect_login()
            .times(1)
            .returning(|_| Ok(json!({"token": "abc"})));

        let outcome = submit_once(&authenticator, "ada@example.com", "hunter2")
            .await
            .unwrap();
        assert_eq!(
            outcome,
            HeadlessOutcome::Success("{\n  \"token\": \"abc\"\n}".to_string())
        );
    }

    #[tokio::test]
    async fn test_submit_once_failure_returns_inline_error() {
        let mut authenticator = MockAuthenticator::new();
        authenticator.expect_login().times(1).returning(|_| {
            Err(AuthError::Http {
                status: 500,
                message: None,
            })
        });

        let outcome = submit_once(&authenticator, "ada@example.com", "hunter2")
            .await
            .unwrap();
        assert_eq!(
            outcome,
            HeadlessOutcome::Failure("Login failed. Please try again.".to_string())
        );
    }

    #[tokio::test]
    /// Field checks run before any request is made.
    async fn test_submit_once_rejects_invalid_email() {
        let mut authenticator = MockAuthenticator::new();
        authenticator.expect_login().never();

        let error = submit_once(&authenticator, "not-an-email", "hunter2")
            .await
            .unwrap_err();
        assert_eq!(error.to_string(), ValidationError::InvalidEmail.to_string());
    }
}
