//! Events sent from background requests back to the UI loop.

use crate::auth::error::AuthError;
use serde_json::Value;

#[derive(Debug)]
pub enum LoginEvent {
    /// The request issued under `ticket` finished.
    Resolved {
        ticket: u64,
        result: Result<Value, AuthError>,
    },
}
