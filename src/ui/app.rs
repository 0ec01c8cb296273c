//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::auth::{Authenticator, Endpoint};
use crate::consts::cli_consts::{EVENT_QUEUE_SIZE, UI_POLL_INTERVAL_MS};
use crate::consts::messages;
use crate::events::LoginEvent;
use crate::form::{Focus, LoginForm, Submission, SubmitBlocked};
use crate::ui::login::{LoginView, render_login};
use crate::ui::modal::{body_width, render_modal, wrap_body};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{Frame, Terminal, backend::Backend};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// What the UI loop should do after a key press.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Action {
    Continue,
    Quit,
}

/// Assumed until the first draw reports the real size.
const DEFAULT_SCREEN_WIDTH: u16 = 80;

/// Application state
pub struct App {
    /// The login form and its submission lifecycle.
    form: LoginForm,

    /// The control receiving key input.
    focus: Focus,

    /// Hint shown under the button, e.g. a failed field check.
    notice: Option<String>,

    /// First visible row of the response modal.
    modal_scroll: u16,

    /// Terminal width at the last draw. The modal wraps its body to fit it.
    screen_width: u16,

    /// Shown in the footer.
    endpoint: Endpoint,

    /// Performs the login requests.
    authenticator: Arc<dyn Authenticator>,

    /// Request results flow from spawned tasks to the UI through this channel.
    event_sender: mpsc::Sender<LoginEvent>,
    event_receiver: mpsc::Receiver<LoginEvent>,

    /// Cancelled on teardown so no request outlives the UI.
    shutdown: CancellationToken,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(form: LoginForm, authenticator: Arc<dyn Authenticator>, endpoint: Endpoint) -> Self {
        let (event_sender, event_receiver) = mpsc::channel(EVENT_QUEUE_SIZE);
        Self {
            form,
            focus: Focus::default(),
            notice: None,
            modal_scroll: 0,
            screen_width: DEFAULT_SCREEN_WIDTH,
            endpoint,
            authenticator,
            event_sender,
            event_receiver,
            shutdown: CancellationToken::new(),
        }
    }

    #[cfg(test)]
    pub fn form(&self) -> &LoginForm {
        &self.form
    }

    pub fn resize(&mut self, screen_width: u16) {
        self.screen_width = screen_width;
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Handles a single key press.
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        // Skip events that are not KeyEventKind::Press
        if key.kind == KeyEventKind::Release {
            return Action::Continue;
        }
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl && key.code == KeyCode::Char('c') {
            return Action::Quit;
        }

        if self.form.is_modal_open() {
            self.handle_modal_key(key);
            return Action::Continue;
        }

        match key.code {
            KeyCode::Esc => return Action::Quit,
            KeyCode::Char('r') if ctrl => {
                self.modal_scroll = 0;
                if !self.form.reopen_modal() {
                    let notice = if self.form.is_loading() {
                        messages::REQUEST_IN_PROGRESS
                    } else {
                        messages::NO_RESPONSE_YET
                    };
                    self.notice = Some(notice.to_string());
                }
            }
            KeyCode::Tab | KeyCode::Down => self.focus = self.focus.next(),
            KeyCode::BackTab | KeyCode::Up => self.focus = self.focus.previous(),
            KeyCode::Enter => self.submit(),
            KeyCode::Char(' ') if self.focus == Focus::Submit => self.submit(),
            KeyCode::Backspace => {
                if let Some(field) = self.focus.field() {
                    self.notice = None;
                    self.form.pop_char(field);
                }
            }
            KeyCode::Char(c) if !ctrl => {
                if let Some(field) = self.focus.field() {
                    self.notice = None;
                    self.form.push_char(field, c);
                }
            }
            _ => {}
        }
        Action::Continue
    }

    fn handle_modal_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => {
                self.form.dismiss_modal();
                self.modal_scroll = 0;
            }
            KeyCode::Up => self.modal_scroll = self.modal_scroll.saturating_sub(1),
            KeyCode::Down => self.scroll_modal_to(self.modal_scroll.saturating_add(1)),
            KeyCode::PageUp => self.modal_scroll = self.modal_scroll.saturating_sub(10),
            KeyCode::PageDown => self.scroll_modal_to(self.modal_scroll.saturating_add(10)),
            KeyCode::Home => self.modal_scroll = 0,
            KeyCode::End => self.scroll_modal_to(u16::MAX),
            _ => {}
        }
    }

    /// Scrolls the modal, counting rows as they are wrapped on screen.
    fn scroll_modal_to(&mut self, row: u16) {
        let rows = self
            .form
            .response_text()
            .map(|text| wrap_body(&text, body_width(self.screen_width)).len())
            .unwrap_or(0);
        let rows = u16::try_from(rows).unwrap_or(u16::MAX);
        self.modal_scroll = row.min(rows.saturating_sub(1));
    }

    /// Submits the form. Does nothing while a request is in flight.
    fn submit(&mut self) {
        match self.form.submit() {
            Ok(submission) => {
                self.notice = None;
                self.spawn_request(submission);
            }
            Err(SubmitBlocked::InFlight) => {}
            Err(SubmitBlocked::Invalid(e)) => {
                self.focus = e.field().into();
                self.notice = Some(e.to_string());
            }
        }
    }

    fn spawn_request(&self, submission: Submission) {
        let authenticator = Arc::clone(&self.authenticator);
        let sender = self.event_sender.clone();
        let shutdown = self.shutdown.clone();

        tokio::spawn(async move {
            let Submission {
                ticket,
                credentials,
            } = submission;
            tokio::select! {
                biased;
                _ = shutdown.cancelled() => {
                    debug!("Login #{} cancelled on shutdown", ticket);
                }
                result = authenticator.login(&credentials) => {
                    // The receiver is gone once the UI has been torn down.
                    let _ = sender.send(LoginEvent::Resolved { ticket, result }).await;
                }
            }
        });
    }

    /// Applies a finished request to the form.
    pub fn apply_event(&mut self, event: LoginEvent) {
        match event {
            LoginEvent::Resolved { ticket, result } => {
                if self.form.resolve(ticket, result) && self.form.is_modal_open() {
                    self.modal_scroll = 0;
                }
            }
        }
    }

    /// Applies every finished request without waiting.
    pub fn apply_pending_events(&mut self) {
        while let Ok(event) = self.event_receiver.try_recv() {
            self.apply_event(event);
        }
    }

    /// Waits for the next finished request.
    #[cfg(test)]
    async fn next_event(&mut self) -> Option<LoginEvent> {
        self.event_receiver.recv().await
    }

    /// Cancels any request still in flight.
    pub fn shutdown(&self) {
        self.shutdown.cancel();
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    loop {
        app.apply_pending_events();
        app.resize(terminal.size()?.width);
        terminal.draw(|f| render(f, &app))?;

        // Poll for key events
        if event::poll(Duration::from_millis(UI_POLL_INTERVAL_MS))? {
            if let Event::Key(key) = event::read()? {
                if app.handle_key(key) == Action::Quit {
                    app.shutdown();
                    return Ok(());
                }
            }
        }
    }
}

/// Renders the login screen, with the response modal on top when it is open.
pub fn render(f: &mut Frame, app: &App) {
    let view = LoginView {
        focus: app.focus(),
        notice: app.notice(),
        endpoint: app.endpoint.as_str(),
    };
    render_login(f, &app.form, view);

    if app.form.is_modal_open() {
        if let Some(body) = app.form.response_text() {
            render_modal(f, &body, app.modal_scroll);
        }
    }
}
