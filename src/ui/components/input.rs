//! Labelled text input.

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Widget};

const MASK: char = '•';

/// A label line above a bordered single-line box. Takes four rows.
#[derive(Debug, Clone)]
pub struct TextInput<'a> {
    label: &'a str,
    value: &'a str,
    placeholder: &'a str,
    masked: bool,
    focused: bool,
}

impl<'a> TextInput<'a> {
    pub const HEIGHT: u16 = 4;

    pub fn new(label: &'a str, value: &'a str) -> Self {
        Self {
            label,
            value,
            placeholder: "",
            masked: false,
            focused: false,
        }
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn masked(mut self, masked: bool) -> Self {
        self.masked = masked;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn layout(area: Rect) -> (Rect, Rect) {
        let [label_area, box_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(3)]).areas(area);
        (label_area, box_area)
    }

    /// Where the terminal cursor goes when this input has focus.
    pub fn cursor_position(&self, area: Rect) -> Position {
        let (_, box_area) = Self::layout(area);
        let width = box_area.width.saturating_sub(2);
        let len = self.value.chars().count() as u16;
        Position::new(
            box_area.x + 1 + len.min(width.saturating_sub(1)),
            box_area.y + 1,
        )
    }

    /// The visible text: masked if needed, scrolled so the end stays in view.
    fn display_text(&self, width: usize) -> String {
        let text: String = if self.masked {
            std::iter::repeat_n(MASK, self.value.chars().count()).collect()
        } else {
            self.value.to_string()
        };
        let len = text.chars().count();
        let keep = width.saturating_sub(1);
        if len > keep {
            text.chars().skip(len - keep).collect()
        } else {
            text
        }
    }
}

impl Widget for TextInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (label_area, box_area) = Self::layout(area);

        Line::styled(
            self.label,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .render(label_area, buf);

        let border_color = if self.focused {
            Color::Cyan
        } else {
            Color::DarkGray
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color));

        let content = if self.value.is_empty() {
            Span::styled(
                self.placeholder,
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )
        } else {
            Span::raw(self.display_text(box_area.width.saturating_sub(2) as usize))
        };

        Paragraph::new(Line::from(content))
            .block(block)
            .render(box_area, buf);
    }
}
