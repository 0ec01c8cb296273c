//! Login screen module

use crate::consts::messages;
use crate::form::{Focus, LoginForm};
use crate::ui::components::{Button, TextInput, centered_rect, render_card};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

const CARD_WIDTH: u16 = 56;
const CARD_HEIGHT: u16 = 22;

/// What the login screen needs besides the form itself.
#[derive(Debug, Clone, Copy)]
pub struct LoginView<'a> {
    pub focus: Focus,
    pub notice: Option<&'a str>,
    pub endpoint: &'a str,
}

/// Renders the login card with both inputs, the inline error and the submit button.
pub fn render_login(f: &mut Frame, form: &LoginForm, view: LoginView<'_>) {
    let [body, footer] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(f.area());

    let card_area = centered_rect(CARD_WIDTH, CARD_HEIGHT, body);
    let content = render_card(
        f,
        card_area,
        messages::CARD_TITLE,
        messages::CARD_DESCRIPTION,
    );

    let [email_area, _, password_area, _, error_area, button_area, notice_area] =
        Layout::vertical([
            Constraint::Length(TextInput::HEIGHT),
            Constraint::Length(1),
            Constraint::Length(TextInput::HEIGHT),
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(Button::HEIGHT),
            Constraint::Length(1),
        ])
        .areas(content);

    let fields = form.fields();
    let email = TextInput::new(messages::EMAIL_LABEL, &fields.email)
        .placeholder(messages::EMAIL_PLACEHOLDER)
        .focused(view.focus == Focus::Email);
    let password = TextInput::new(messages::PASSWORD_LABEL, &fields.password)
        .placeholder(messages::PASSWORD_PLACEHOLDER)
        .masked(true)
        .focused(view.focus == Focus::Password);

    if !form.is_modal_open() {
        match view.focus {
            Focus::Email => f.set_cursor_position(email.cursor_position(email_area)),
            Focus::Password => f.set_cursor_position(password.cursor_position(password_area)),
            Focus::Submit => {}
        }
    }
    f.render_widget(email, email_area);
    f.render_widget(password, password_area);

    if let Some(error) = form.error() {
        f.render_widget(
            Paragraph::new(error)
                .style(Style::default().fg(Color::Red))
                .wrap(Wrap { trim: true }),
            error_area,
        );
    }

    let label = if form.is_loading() {
        messages::SUBMIT_LOADING_LABEL
    } else {
        messages::SUBMIT_LABEL
    };
    f.render_widget(
        Button::new(label)
            .focused(view.focus == Focus::Submit)
            .disabled(form.is_loading()),
        button_area,
    );

    if let Some(notice) = view.notice {
        f.render_widget(
            Line::styled(notice, Style::default().fg(Color::Yellow)),
            notice_area,
        );
    }

    render_footer(f, footer, view.endpoint);
}

fn render_footer(f: &mut Frame, area: Rect, endpoint: &str) {
    let footer = Paragraph::new(Line::from(vec![
        Span::styled(
            "[Enter] Login | [Tab] Next | [Ctrl+R] Last response | [Esc] Quit",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}", endpoint),
            Style::default().fg(Color::DarkGray),
        ),
    ]))
    .alignment(Alignment::Center);
    f.render_widget(footer, area);
}
