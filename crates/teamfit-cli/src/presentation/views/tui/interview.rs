//! Interview screen widgets: history list, session panel, transcript pane,
//! and the new-interview form.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget, Wrap},
};

use crate::presentation::formatters::time::format_date;
use crate::presentation::view_models::{
    HistoryViewModel, SessionViewModel, TranscriptEntryViewModel, TranscriptViewModel,
};

use super::status_level_to_color;

// --------------------------------------------------------
// History list
// --------------------------------------------------------

pub struct HistoryListView<'a> {
    model: &'a HistoryViewModel,
}

impl<'a> HistoryListView<'a> {
    pub fn new(model: &'a HistoryViewModel) -> Self {
        Self { model }
    }

    pub fn is_empty(&self) -> bool {
        self.model.interviews.is_empty()
    }

    fn title(&self) -> String {
        let mut title = format!(
            "Interview History ({} of {}, {} selected)",
            self.model.visible, self.model.total, self.model.selected
        );
        if let Some(search) = &self.model.search {
            title.push_str(&format!(" | search: {}", search));
        }
        if let Some(status) = &self.model.status_filter {
            title.push_str(&format!(" | status: {}", status));
        }
        title
    }

    pub fn render_empty(&self, area: Rect, buf: &mut Buffer) {
        let message = if self.model.total == 0 {
            "No interviews yet. Press n to create one."
        } else {
            "No interviews match the current filters."
        };
        Paragraph::new(message)
            .block(Block::default().title(self.title()).borders(Borders::ALL))
            .render(area, buf);
    }

    pub fn build_list(&self) -> (List<'static>, usize) {
        let items: Vec<ListItem> = self
            .model
            .interviews
            .iter()
            .map(|entry| {
                let marker = if entry.selected { "[x] " } else { "[ ] " };
                let marker_style = if entry.selected {
                    Style::default().fg(Color::Yellow)
                } else {
                    Style::default()
                };
                let status_style = match entry.status.as_str() {
                    "completed" => Style::default().fg(Color::Green),
                    "in-progress" => Style::default().fg(Color::Yellow),
                    _ => Style::default(),
                };
                let date = entry
                    .created_at
                    .as_deref()
                    .map(format_date)
                    .unwrap_or_else(|| "-".to_string());

                let mut spans = vec![
                    Span::styled(marker.to_string(), marker_style),
                    Span::raw(format!("{:<21}", entry.candidate_name)),
                    Span::raw(format!("{:<22}", entry.role)),
                    Span::styled(format!("{:<12}", entry.status), status_style),
                    Span::raw(format!("{:<12}", date)),
                ];
                if entry.has_transcript {
                    spans.push(Span::styled("T", Style::default().fg(Color::Cyan)));
                }
                ListItem::new(Line::from(spans))
            })
            .collect();

        let count = items.len();
        let list = List::new(items)
            .block(Block::default().title(self.title()).borders(Borders::ALL))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
        (list, count)
    }
}

// --------------------------------------------------------
// Session panel
// --------------------------------------------------------

pub struct SessionPanel<'a> {
    model: &'a SessionViewModel,
}

impl<'a> SessionPanel<'a> {
    pub fn new(model: &'a SessionViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for SessionPanel<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let model = self.model;
        let block = Block::default()
            .title("Interview Session")
            .borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = vec![
            Line::from(Span::styled(
                format!("{} {}", model.badge.icon(), model.badge.label),
                Style::default()
                    .fg(status_level_to_color(model.badge.level))
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(format!("{} - {}", model.candidate_name, model.role)),
            Line::from(vec![
                Span::styled("Agent: ", Style::default().add_modifier(Modifier::DIM)),
                Span::raw(model.agent_id.clone()),
            ]),
            Line::from(vec![
                Span::styled("Link:  ", Style::default().add_modifier(Modifier::DIM)),
                Span::styled(
                    model.interview_link.clone(),
                    Style::default().fg(Color::Cyan),
                ),
            ]),
        ];

        if !model.next_steps.is_empty() {
            lines.push(Line::from(""));
            lines.push(Line::from("Next steps:"));
            for step in &model.next_steps {
                let mut spans = vec![Span::raw(format!("  - {}", step.description))];
                if let Some(command) = &step.command {
                    spans.push(Span::raw(": "));
                    spans.push(Span::styled(
                        command.clone(),
                        Style::default().fg(Color::Cyan),
                    ));
                }
                lines.push(Line::from(spans));
            }
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}

// --------------------------------------------------------
// Transcript pane
// --------------------------------------------------------

pub struct TranscriptPanel<'a> {
    model: &'a TranscriptViewModel,
}

impl<'a> TranscriptPanel<'a> {
    pub fn new(model: &'a TranscriptViewModel) -> Self {
        Self { model }
    }

    pub fn title(&self) -> String {
        format!(
            "Transcript - {} ({} messages)",
            self.model.candidate_name, self.model.message_count
        )
    }

    /// Body lines for a scrollable paragraph; the caller owns the offset.
    pub fn lines(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::new();

        if self.model.entries.is_empty() {
            lines.push(Line::from(
                "No transcript content available yet. The interview may still be in progress.",
            ));
            return lines;
        }

        for entry in &self.model.entries {
            match entry {
                TranscriptEntryViewModel::Message {
                    speaker,
                    content,
                    timestamp,
                } => {
                    let speaker_color = if speaker == "Candidate" {
                        Color::Green
                    } else {
                        Color::Cyan
                    };
                    let mut header = vec![Span::styled(
                        format!("{}:", speaker),
                        Style::default().fg(speaker_color),
                    )];
                    if !timestamp.is_empty() {
                        header.push(Span::styled(
                            format!("  {}", timestamp),
                            Style::default().add_modifier(Modifier::DIM),
                        ));
                    }
                    lines.push(Line::from(header));
                    lines.push(Line::from(content.clone()));
                    lines.push(Line::from(""));
                }
                TranscriptEntryViewModel::Answer { question, answer } => {
                    lines.push(Line::from(vec![
                        Span::styled("Q: ", Style::default().fg(Color::Cyan)),
                        Span::raw(question.clone()),
                    ]));
                    lines.push(Line::from(vec![
                        Span::styled("A: ", Style::default().fg(Color::Green)),
                        Span::raw(answer.clone()),
                    ]));
                    lines.push(Line::from(""));
                }
            }
        }

        if let Some(path) = &self.model.saved_to {
            lines.push(Line::from(Span::styled(
                format!("Saved to {}", path),
                Style::default().fg(Color::Green),
            )));
        }
        lines
    }
}

// --------------------------------------------------------
// New interview form
// --------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    Name,
    Role,
    Email,
}

impl FormFocus {
    pub fn next(self) -> Self {
        match self {
            FormFocus::Name => FormFocus::Role,
            FormFocus::Role => FormFocus::Email,
            FormFocus::Email => FormFocus::Name,
        }
    }
}

pub struct CreateFormView<'a> {
    pub name: &'a str,
    pub role: &'a str,
    pub email: &'a str,
    pub focus: FormFocus,
    pub error: Option<&'a str>,
}

impl<'a> CreateFormView<'a> {
    fn field_line(&self, label: &str, value: &str, focused: bool) -> Line<'static> {
        let cursor = if focused { "_" } else { "" };
        let style = if focused {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        Line::from(vec![
            Span::raw(if focused { "> " } else { "  " }),
            Span::styled(format!("{:<18}", label), style),
            Span::raw(format!("{}{}", value, cursor)),
        ])
    }
}

impl<'a> Widget for CreateFormView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title("New Interview")
            .borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = vec![
            Line::from(""),
            self.field_line("Candidate name *", self.name, self.focus == FormFocus::Name),
            self.field_line("Role *", self.role, self.focus == FormFocus::Role),
            self.field_line("Email", self.email, self.focus == FormFocus::Email),
            Line::from(""),
            Line::from(Span::styled(
                "  Enter: start interview   Tab: next field   Esc: cancel",
                Style::default().add_modifier(Modifier::DIM),
            )),
        ];

        if let Some(error) = self.error {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!("  {}", error),
                Style::default().fg(Color::Red),
            )));
        }

        Paragraph::new(lines).render(inner, buf);
    }
}
