//! Login form state and its submission lifecycle.

pub mod state;
pub mod validation;

pub use state::{Focus, LoginForm, Submission, SubmissionState, SubmitBlocked};
pub use validation::Field;
