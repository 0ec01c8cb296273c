//! Card component
//!
//! Bordered panel with a title and a one-line description.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Margin, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders};

/// Renders the card frame and returns the content area below the description.
pub fn render_card(f: &mut Frame, area: Rect, title: &str, description: &str) -> Rect {
    let block = Block::default()
        .title(Line::styled(
            format!(" {} ", title),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area).inner(Margin::new(1, 0));
    f.render_widget(block, area);

    let [description_area, _, content_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(inner);

    f.render_widget(
        Line::styled(description, Style::default().fg(Color::Gray)),
        description_area,
    );

    content_area
}
