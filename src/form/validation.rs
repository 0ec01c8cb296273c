//! Native-style field checks run before a submission is accepted.

use crate::form::state::FormState;
use thiserror::Error;

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Field {
    Email,
    Password,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill out the {0} field.")]
    Missing(Field),

    #[error("Please enter an email address like name@example.com.")]
    InvalidEmail,
}

impl ValidationError {
    /// The field that should receive focus.
    pub fn field(&self) -> Field {
        match self {
            ValidationError::Missing(field) => *field,
            ValidationError::InvalidEmail => Field::Email,
        }
    }
}

/// Both fields are required and the email needs a `local@domain` shape.
pub fn validate(fields: &FormState) -> Result<(), ValidationError> {
    let email = fields.email.trim();
    if email.is_empty() {
        return Err(ValidationError::Missing(Field::Email));
    }
    if !is_email_shaped(email) {
        return Err(ValidationError::InvalidEmail);
    }
    if fields.password.is_empty() {
        return Err(ValidationError::Missing(Field::Password));
    }
    Ok(())
}

fn is_email_shaped(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(email: &str, password: &str) -> FormState {
        FormState {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_accepts_filled_fields() {
        assert_eq!(validate(&fields("ada@example.com", "hunter2")), Ok(()));
        assert_eq!(validate(&fields("  ada@example.com ", "x")), Ok(()));
    }

    #[test]
    fn test_requires_both_fields() {
        assert_eq!(
            validate(&fields("", "hunter2")),
            Err(ValidationError::Missing(Field::Email))
        );
        assert_eq!(
            validate(&fields("ada@example.com", "")),
            Err(ValidationError::Missing(Field::Password))
        );
    }

    #[test]
    fn test_rejects_malformed_email() {
        for email in ["ada", "@example.com", "ada@", "a da@example.com", "a@b@c"] {
            assert_eq!(
                validate(&fields(email, "hunter2")),
                Err(ValidationError::InvalidEmail),
                "{} should be rejected",
                email
            );
        }
    }

    #[test]
    fn test_error_points_at_field() {
        assert_eq!(ValidationError::InvalidEmail.field(), Field::Email);
        assert_eq!(
            ValidationError::Missing(Field::Password).to_string(),
            "Please fill out the password field."
        );
    }
}
