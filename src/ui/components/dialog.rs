//! Dialog component
//!
//! Centered panel drawn over a dimmed backdrop.

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Clear};

/// A `width` x `height` rectangle centered in `area`, shrunk to fit.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let [area] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    area
}

/// Dims everything already drawn, then draws an empty dialog and returns its inner area.
pub fn render_dialog(f: &mut Frame, title: &str, width: u16, height: u16) -> Rect {
    let screen = f.area();
    f.buffer_mut().set_style(
        screen,
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::DIM),
    );

    let area = centered_rect(width, height, screen);
    let block = Block::default()
        .title(Line::styled(
            format!(" {} ", title),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Thick)
        .border_style(Style::default().fg(Color::Green));
    let inner = block.inner(area);

    f.render_widget(Clear, area);
    f.render_widget(block, area);
    inner
}
