//! Response modal
//!
//! Shows the stored response body, pretty-printed, with a close button. Lines wider than the
//! dialog are broken onto the next row so long tokens stay readable in full.

use crate::consts::messages;
use crate::ui::components::{Button, render_dialog};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Margin};
use ratatui::prelude::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

/// Columns left free on each side of the dialog.
const SCREEN_MARGIN: u16 = 2;

/// Dialog borders plus the body padding, both sides.
const BODY_INSET: u16 = 4;

/// Rows of JSON shown before the body scrolls.
const MAX_BODY_ROWS: u16 = 16;

fn dialog_width(screen_width: u16) -> u16 {
    screen_width.saturating_sub(SCREEN_MARGIN * 2)
}

/// Columns available to the body on a screen `screen_width` wide.
pub fn body_width(screen_width: u16) -> u16 {
    dialog_width(screen_width).saturating_sub(BODY_INSET).max(1)
}

/// Splits every line of `body` into rows of at most `width` characters. Nothing is trimmed.
pub fn wrap_body(body: &str, width: u16) -> Vec<String> {
    let width = usize::from(width.max(1));
    let mut rows = Vec::new();
    for line in body.lines() {
        let chars: Vec<char> = line.chars().collect();
        if chars.is_empty() {
            rows.push(String::new());
        } else {
            rows.extend(chars.chunks(width).map(|chunk| chunk.iter().collect::<String>()));
        }
    }
    if rows.is_empty() {
        rows.push(String::new());
    }
    rows
}

pub fn render_modal(f: &mut Frame, body: &str, scroll: u16) {
    let screen_width = f.area().width;
    let rows = wrap_body(body, body_width(screen_width));
    let body_rows = u16::try_from(rows.len())
        .unwrap_or(u16::MAX)
        .clamp(1, MAX_BODY_ROWS);
    // Body plus its padding, a spacer, the button and the dialog borders.
    let height = body_rows + 2 + 1 + Button::HEIGHT + 2;

    let inner = render_dialog(f, messages::MODAL_TITLE, dialog_width(screen_width), height);
    let [body_area, _, button_area] = Layout::vertical([
        Constraint::Min(1),
        Constraint::Length(1),
        Constraint::Length(Button::HEIGHT),
    ])
    .areas(inner);

    let pre_style = Style::default().fg(Color::White).bg(Color::DarkGray);
    f.buffer_mut().set_style(body_area, pre_style);
    let lines: Vec<Line> = rows.into_iter().map(Line::from).collect();
    f.render_widget(
        Paragraph::new(lines).style(pre_style).scroll((scroll, 0)),
        body_area.inner(Margin::new(1, 1)),
    );

    let [button_area] = Layout::horizontal([Constraint::Length(12)]).areas(button_area);
    f.render_widget(
        Button::new(messages::MODAL_CLOSE_LABEL).focused(true),
        button_area,
    );
}
