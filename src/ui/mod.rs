// Module declarations
mod app;
pub mod components;
mod login;
mod modal;
// Re-exports for external use
pub use app::{App, run};
