//! Submission lifecycle of the login form
//!
//! `idle -> loading -> success | error`, driven by [`LoginForm::submit`] and
//! [`LoginForm::resolve`]. The form never performs the request itself; callers take the
//! [`Submission`] it hands out, run it, and feed the outcome back with the same ticket.

use crate::auth::Credentials;
use crate::auth::error::AuthError;
use crate::form::validation::{self, Field, ValidationError};
use serde_json::Value;
use tracing::{debug, info, warn};

/// What the user typed. Kept as-is after a submission.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FormState {
    pub email: String,
    pub password: String,
}

impl FormState {
    fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
        }
    }
}

/// Where the current submission stands. Exactly one at a time.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Loading,
    Success(Value),
    Error(String),
}

/// The control receiving key input.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub enum Focus {
    #[default]
    Email,
    Password,
    Submit,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Email => Focus::Password,
            Focus::Password => Focus::Submit,
            Focus::Submit => Focus::Email,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Focus::Email => Focus::Submit,
            Focus::Password => Focus::Email,
            Focus::Submit => Focus::Password,
        }
    }

    /// The text field behind this control, if any.
    pub fn field(self) -> Option<Field> {
        match self {
            Focus::Email => Some(Field::Email),
            Focus::Password => Some(Field::Password),
            Focus::Submit => None,
        }
    }
}

impl From<Field> for Focus {
    fn from(field: Field) -> Self {
        match field {
            Field::Email => Focus::Email,
            Field::Password => Focus::Password,
        }
    }
}

/// An accepted submit: the request to send and the ticket to resolve it with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub ticket: u64,
    pub credentials: Credentials,
}

/// Why a submit did not start a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitBlocked {
    /// A request is already in flight; the submit control is disabled.
    InFlight,
    /// A field failed its check.
    Invalid(ValidationError),
}

#[derive(Debug, Default)]
pub struct LoginForm {
    fields: FormState,
    state: SubmissionState,

    /// Last successful body. Survives dismissal of the modal.
    response: Option<Value>,

    modal_open: bool,

    /// Ticket of the request currently in flight.
    in_flight: Option<u64>,
    next_ticket: u64,

    /// Whether editing a field clears a displayed error.
    clear_error_on_edit: bool,
}

impl LoginForm {
    pub fn new(clear_error_on_edit: bool) -> Self {
        Self {
            clear_error_on_edit,
            ..Self::default()
        }
    }

    /// Pre-fills the email field.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.fields.email = email.into();
        self
    }

    pub fn fields(&self) -> &FormState {
        &self.fields
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn response(&self) -> Option<&Value> {
        self.response.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, SubmissionState::Loading)
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    /// The inline error, if the last submission failed.
    pub fn error(&self) -> Option<&str> {
        match &self.state {
            SubmissionState::Error(message) => Some(message),
            _ => None,
        }
    }

    /// The stored response laid out with two-space indentation.
    pub fn response_text(&self) -> Option<String> {
        self.response()
            .map(|value| serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string()))
    }

    pub fn push_char(&mut self, field: Field, c: char) {
        self.fields.field_mut(field).push(c);
        self.after_edit();
    }

    pub fn pop_char(&mut self, field: Field) {
        if self.fields.field_mut(field).pop().is_some() {
            self.after_edit();
        }
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        *self.fields.field_mut(field) = value.into();
        self.after_edit();
    }

    fn after_edit(&mut self) {
        if self.clear_error_on_edit && matches!(self.state, SubmissionState::Error(_)) {
            debug!("Clearing inline error after edit");
            self.state = SubmissionState::Idle;
        }
    }

    /// Starts a submission.
    ///
    /// Moves to `Loading` and clears any previous error. A submit while loading is a
    /// no-op, as is one that fails the field checks.
    pub fn submit(&mut self) -> Result<Submission, SubmitBlocked> {
        if self.is_loading() {
            debug!("Submit ignored, a request is already in flight");
            return Err(SubmitBlocked::InFlight);
        }
        validation::validate(&self.fields).map_err(SubmitBlocked::Invalid)?;

        self.next_ticket += 1;
        let ticket = self.next_ticket;
        self.in_flight = Some(ticket);
        self.state = SubmissionState::Loading;

        let credentials = Credentials::new(self.fields.email.trim(), self.fields.password.clone());
        info!("Submitting login #{} for {}", ticket, credentials.username);
        Ok(Submission {
            ticket,
            credentials,
        })
    }

    /// Applies the outcome of the request issued under `ticket`.
    ///
    /// Returns `false` and leaves the form untouched when the ticket is not the one in flight.
    pub fn resolve(&mut self, ticket: u64, result: Result<Value, AuthError>) -> bool {
        if self.in_flight != Some(ticket) {
            debug!("Dropping result for stale login #{}", ticket);
            return false;
        }
        self.in_flight = None;

        match result {
            Ok(body) => {
                info!("Login #{} succeeded", ticket);
                self.response = Some(body.clone());
                self.state = SubmissionState::Success(body);
                self.modal_open = true;
            }
            Err(e) => {
                warn!("Login #{} failed: {}", ticket, e);
                self.state = SubmissionState::Error(e.user_message());
            }
        }
        true
    }

    /// Hides the modal. The stored response is kept.
    pub fn dismiss_modal(&mut self) {
        if !self.modal_open {
            return;
        }
        self.modal_open = false;
        if matches!(self.state, SubmissionState::Success(_)) {
            self.state = SubmissionState::Idle;
        }
    }

    /// Shows the stored response again. Returns `false` if there is none or a request is
    /// in flight.
    pub fn reopen_modal(&mut self) -> bool {
        if self.response.is_none() || self.is_loading() {
            return false;
        }
        self.modal_open = true;
        true
    }
}
