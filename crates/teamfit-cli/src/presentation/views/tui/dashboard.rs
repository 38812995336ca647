//! Dashboard screen widgets: pool overview, candidate list, detail overlay.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Gauge, List, ListItem, Paragraph, Widget, Wrap},
};

use crate::presentation::formatters::display::{build_meter, format_score};
use crate::presentation::formatters::text::recommendation_label;
use crate::presentation::formatters::time::format_date;
use crate::presentation::view_models::{CandidateDetailViewModel, DashboardViewModel};

use super::{recommendation_color, score_color};

// --------------------------------------------------------
// Overview
// --------------------------------------------------------

pub struct OverviewView<'a> {
    model: &'a DashboardViewModel,
}

impl<'a> OverviewView<'a> {
    pub fn new(model: &'a DashboardViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for OverviewView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title("Team Compatibility")
            .borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks =
            Layout::vertical([Constraint::Length(2), Constraint::Length(1)]).split(inner);

        let overview = &self.model.overview;
        let count = |value: Option<u32>| {
            value
                .map(|n| n.to_string())
                .unwrap_or_else(|| "N/A".to_string())
        };

        let mut lines = vec![Line::from(vec![
            Span::styled("Team size: ", Style::default().add_modifier(Modifier::DIM)),
            Span::raw(count(overview.team_size)),
            Span::raw("  "),
            Span::styled("Candidates: ", Style::default().add_modifier(Modifier::DIM)),
            Span::raw(count(overview.candidates_count)),
            Span::raw("  "),
            Span::styled(
                "Above threshold: ",
                Style::default().add_modifier(Modifier::DIM),
            ),
            Span::raw(count(overview.candidates_above_threshold)),
        ])];

        let mut second = Vec::new();
        if let Some(ts) = &overview.generated_at {
            second.push(Span::styled(
                "Analyzed: ",
                Style::default().add_modifier(Modifier::DIM),
            ));
            second.push(Span::raw(format_date(ts)));
        }
        if let Some(pending) = &self.model.pending_analysis {
            if !second.is_empty() {
                second.push(Span::raw("  "));
            }
            second.push(Span::styled(
                format!("Pending analysis: {} queued", pending.count),
                Style::default().fg(ratatui::style::Color::Yellow),
            ));
        }
        lines.push(Line::from(second));
        Paragraph::new(lines).render(chunks[0], buf);

        match overview.average_compatibility {
            Some(average) => {
                let ratio = average.clamp(0.0, 1.0);
                Gauge::default()
                    .gauge_style(Style::default().fg(score_color(average)))
                    .ratio(ratio)
                    .label(format!("{} average compatibility", format_score(average)))
                    .render(chunks[1], buf);
            }
            None => {
                Paragraph::new("average compatibility unknown").render(chunks[1], buf);
            }
        }
    }
}

// --------------------------------------------------------
// Candidate list
// --------------------------------------------------------

pub struct CandidateListView<'a> {
    model: &'a DashboardViewModel,
}

impl<'a> CandidateListView<'a> {
    pub fn new(model: &'a DashboardViewModel) -> Self {
        Self { model }
    }

    pub fn is_empty(&self) -> bool {
        self.model.candidates.is_empty()
    }

    fn title(&self) -> String {
        format!(
            "Candidates ({} of {}) | sort: {} | status: {}",
            self.model.visible_candidates,
            self.model.total_candidates,
            self.model.sort,
            self.model.status_filter.to_lowercase()
        )
    }

    /// Empty-state widget for when the filter hides everything.
    pub fn render_empty(&self, area: Rect, buf: &mut Buffer) {
        let message = if self.model.total_candidates == 0 {
            "No candidates analyzed yet."
        } else {
            "No candidates match the current filter."
        };
        Paragraph::new(message)
            .block(Block::default().title(self.title()).borders(Borders::ALL))
            .render(area, buf);
    }

    /// List plus item count, for stateful rendering with a `ListState`.
    pub fn build_list(&self) -> (List<'static>, usize) {
        let items: Vec<ListItem> = self
            .model
            .candidates
            .iter()
            .map(|card| {
                let header = Line::from(vec![
                    Span::styled(
                        format!("{:<24}", card.name),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(format!("{:<22}", card.position)),
                    Span::styled(
                        format!("{:>7}", format_score(card.compatibility_score)),
                        Style::default().fg(score_color(card.compatibility_score)),
                    ),
                    Span::raw("  "),
                    Span::styled(
                        recommendation_label(&card.recommendation),
                        Style::default().fg(recommendation_color(card.recommendation_rank)),
                    ),
                ]);
                let traits = Line::from(Span::styled(
                    format!(
                        "    {}",
                        card.traits
                            .iter()
                            .map(|entry| format!("{} {:.0}%", entry.label, entry.value_pct))
                            .collect::<Vec<_>>()
                            .join("  ")
                    ),
                    Style::default().add_modifier(Modifier::DIM),
                ));
                ListItem::new(Text::from(vec![header, traits]))
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
// Detail overlay
// --------------------------------------------------------

pub struct CandidateDetailPanel<'a> {
    model: &'a CandidateDetailViewModel,
}

impl<'a> CandidateDetailPanel<'a> {
    pub fn new(model: &'a CandidateDetailViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for CandidateDetailPanel<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let model = self.model;
        let block = Block::default()
            .title(format!("{} - Detailed Analysis", model.name))
            .borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = vec![Line::from(format!("{} ({})", model.position, model.id))];

        let mut verdict = vec![
            Span::styled(
                format_score(model.compatibility_score),
                Style::default().fg(score_color(model.compatibility_score)),
            ),
            Span::raw("  "),
            Span::styled(
                recommendation_label(&model.recommendation),
                Style::default().fg(recommendation_color(model.recommendation_rank)),
            ),
        ];
        if let Some(confidence) = model.confidence_level {
            verdict.push(Span::raw(format!(
                "  confidence {:.0}%",
                confidence * 100.0
            )));
        }
        lines.push(Line::from(verdict));
        lines.push(Line::from(""));

        if !model.summary.is_empty() {
            lines.push(Line::from(model.summary.clone()));
            lines.push(Line::from(""));
        }

        for entry in &model.traits {
            lines.push(Line::from(format!(
                "{:<18} {}",
                entry.name,
                build_meter(entry.value_pct, 20)
            )));
        }

        let sections: [(&str, &[String]); 3] = [
            ("Strengths", &model.strengths),
            ("Areas of Consideration", &model.concerns),
            ("Recommendations", &model.recommendations),
        ];
        for (heading, items) in sections {
            if items.is_empty() {
                continue;
            }
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                heading,
                Style::default().add_modifier(Modifier::BOLD),
            )));
            for item in items {
                lines.push(Line::from(format!("  - {}", item)));
            }
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}
