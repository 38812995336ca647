//! Bottom status bar: persistent context on the left, transient feedback in
//! the middle, key hints on the right.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::StatusBarViewModel;

use super::status_level_to_color;

pub struct StatusBarView<'a> {
    model: &'a StatusBarViewModel,
}

impl<'a> StatusBarView<'a> {
    pub fn new(model: &'a StatusBarViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for StatusBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(inner);

        let mut left = vec![Span::raw(self.model.context.clone())];
        if !self.model.status_message.is_empty() {
            let color = status_level_to_color(self.model.status_level);
            left.push(Span::raw(" | "));
            left.push(Span::styled(
                self.model.status_message.clone(),
                Style::default().fg(color),
            ));
        }
        Paragraph::new(Line::from(left)).render(chunks[0], buf);

        let mut hints = Vec::new();
        for hint in &self.model.key_hints {
            hints.push(Span::styled(
                format!("[{}]", hint.key),
                Style::default().fg(Color::Yellow),
            ));
            hints.push(Span::raw(format!("{} ", hint.action)));
        }
        Paragraph::new(Line::from(hints))
            .alignment(ratatui::layout::Alignment::Right)
            .render(chunks[1], buf);
    }
}
