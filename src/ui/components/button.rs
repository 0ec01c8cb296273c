//! Button component

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Widget};

/// Bordered, centered label. Takes three rows.
#[derive(Debug, Clone)]
pub struct Button<'a> {
    label: &'a str,
    focused: bool,
    disabled: bool,
}

impl<'a> Button<'a> {
    pub const HEIGHT: u16 = 3;

    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            focused: false,
            disabled: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    fn style(&self) -> Style {
        if self.disabled {
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM)
        } else if self.focused {
            Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::LightBlue)
        }
    }
}

impl Widget for Button<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = self.style();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(style);

        Paragraph::new(self.label)
            .alignment(Alignment::Center)
            .style(style)
            .block(block)
            .render(area, buf);
    }
}
