//! TUI mode execution

use crate::auth::{AuthClient, Authenticator};
use crate::form::LoginForm;
use crate::{report, ui};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::sync::Arc;
use std::{error::Error, io};

/// Runs the interactive login form
///
/// This function handles:
/// 1. Terminal setup and cleanup
/// 2. UI application initialization and execution
///
/// # Arguments
/// * `client` - Client posting to the resolved endpoint
/// * `form` - Initial form state (possibly with a pre-filled email)
pub async fn run_tui_mode(client: AuthClient, form: LoginForm) -> Result<(), Box<dyn Error>> {
    let endpoint = client.endpoint().clone();
    report!(Info, "Starting login form", "{}", endpoint);

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    // Initialize the terminal with Crossterm backend
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let authenticator: Arc<dyn Authenticator> = Arc::new(client);
    let app = ui::App::new(form, authenticator, endpoint);
    let result = ui::run(&mut terminal, app).await;

    // Clean up the terminal after running the application
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result?;
    report!(Success, "Login form closed");
    Ok(())
}
