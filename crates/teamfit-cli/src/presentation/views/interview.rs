use std::fmt;

use owo_colors::OwoColorize;

use crate::presentation::formatters::options::FormatOptions;
use crate::presentation::formatters::time::{format_date, format_relative_time};
use crate::presentation::view_models::{
    HistoryViewModel, SessionViewModel, TranscriptEntryViewModel, TranscriptViewModel,
};

const DIVIDER_WIDTH: usize = 72;

// --------------------------------------------------------
// History View
// --------------------------------------------------------

pub struct HistoryView<'a> {
    model: &'a HistoryViewModel,
    options: &'a FormatOptions,
}

impl<'a> HistoryView<'a> {
    pub fn new(model: &'a HistoryViewModel, options: &'a FormatOptions) -> Self {
        Self { model, options }
    }

    fn paint_status(&self, status: &str) -> String {
        let padded = format!("{:<12}", status);
        if !self.options.enable_color {
            return padded;
        }
        match status {
            "completed" => padded.green().to_string(),
            "in-progress" => padded.yellow().to_string(),
            _ => padded,
        }
    }

    fn render_filters(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut parts = Vec::new();
        if let Some(search) = &self.model.search {
            parts.push(format!("search \"{}\"", search));
        }
        if let Some(status) = &self.model.status_filter {
            parts.push(format!("status {}", status));
        }
        if !parts.is_empty() {
            writeln!(f, "Filters: {}", parts.join(", "))?;
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<'a> fmt::Display for HistoryView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Interview History")?;
        writeln!(f, "{}", "=".repeat(DIVIDER_WIDTH))?;

        if let Some(notice) = &self.model.notice {
            if self.options.enable_color {
                writeln!(f, "{} {}", notice.icon(), notice.label.yellow())?;
            } else {
                writeln!(f, "Warning: {}", notice.label)?;
            }
            writeln!(f)?;
        }

        self.render_filters(f)?;

        if self.model.total == 0 {
            writeln!(f, "No interviews yet.")?;
            return Ok(());
        }
        if self.model.interviews.is_empty() {
            writeln!(f, "No interviews match the current filters.")?;
            return Ok(());
        }

        writeln!(
            f,
            "     {:<12} {:<21} {:<22} {:<12} {:<12} {:<13} TRANSCRIPT",
            "AGENT ID", "CANDIDATE", "ROLE", "STATUS", "DATE", "DURATION"
        )?;
        writeln!(f, "{}", "-".repeat(DIVIDER_WIDTH))?;

        for entry in &self.model.interviews {
            let marker = if entry.selected { "[x]" } else { "[ ]" };
            let date = entry
                .created_at
                .as_deref()
                .map(|ts| {
                    if self.options.relative_time {
                        format_relative_time(ts)
                    } else {
                        format_date(ts)
                    }
                })
                .unwrap_or_else(|| "-".to_string());
            writeln!(
                f,
                "{:<4} {:<12} {:<21} {:<22} {} {:<12} {:<13} {}",
                marker,
                entry.agent_id,
                entry.candidate_name,
                entry.role,
                self.paint_status(&entry.status),
                date,
                entry.duration.as_deref().unwrap_or("-"),
                if entry.has_transcript { "yes" } else { "no" }
            )?;
        }

        writeln!(f)?;
        writeln!(
            f,
            "{} shown of {} total, {} selected",
            self.model.visible, self.model.total, self.model.selected
        )?;
        Ok(())
    }
}

// --------------------------------------------------------
// Session View
// --------------------------------------------------------

pub struct SessionView<'a> {
    model: &'a SessionViewModel,
    options: &'a FormatOptions,
}

impl<'a> SessionView<'a> {
    pub fn new(model: &'a SessionViewModel, options: &'a FormatOptions) -> Self {
        Self { model, options }
    }
}

impl<'a> fmt::Display for SessionView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let model = self.model;
        if self.options.enable_color {
            writeln!(f, "{} {}", model.badge.icon(), model.badge.label.bold())?;
        } else {
            writeln!(f, "Status: {}", model.badge.label)?;
        }
        writeln!(f)?;

        writeln!(f, "{} - {}", model.candidate_name, model.role)?;
        writeln!(f, "Agent: {}", model.agent_id)?;
        if self.options.enable_color {
            writeln!(f, "Link:  {}", model.interview_link.cyan())?;
        } else {
            writeln!(f, "Link:  {}", model.interview_link)?;
        }

        if !model.next_steps.is_empty() {
            writeln!(f)?;
            writeln!(f, "Next steps:")?;
            for step in &model.next_steps {
                write!(f, "  • {}", step.description)?;
                if let Some(command) = &step.command {
                    if self.options.enable_color {
                        write!(f, ": {}", command.cyan())?;
                    } else {
                        write!(f, ": {}", command)?;
                    }
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

// --------------------------------------------------------
// Transcript View
// --------------------------------------------------------

pub struct TranscriptView<'a> {
    model: &'a TranscriptViewModel,
    options: &'a FormatOptions,
}

impl<'a> TranscriptView<'a> {
    pub fn new(model: &'a TranscriptViewModel, options: &'a FormatOptions) -> Self {
        Self { model, options }
    }

    fn paint_speaker(&self, speaker: &str) -> String {
        if !self.options.enable_color {
            return format!("{}:", speaker);
        }
        if speaker == "Candidate" {
            format!("{}:", speaker.green())
        } else {
            format!("{}:", speaker.cyan())
        }
    }
}

impl<'a> fmt::Display for TranscriptView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let model = self.model;
        writeln!(
            f,
            "Interview Transcript - {} ({})",
            model.candidate_name, model.agent_id
        )?;
        writeln!(f, "{}", "=".repeat(DIVIDER_WIDTH))?;
        writeln!(f, "{} message(s)", model.message_count)?;
        writeln!(f)?;

        if model.entries.is_empty() {
            writeln!(
                f,
                "No transcript content available yet. The interview may still be in progress."
            )?;
        }

        for entry in &model.entries {
            match entry {
                TranscriptEntryViewModel::Message {
                    speaker,
                    content,
                    timestamp,
                } => {
                    writeln!(f, "{} {}", self.paint_speaker(speaker), content)?;
                    if !timestamp.is_empty() {
                        if self.options.enable_color {
                            writeln!(f, "  {}", timestamp.dimmed())?;
                        } else {
                            writeln!(f, "  {}", timestamp)?;
                        }
                    }
                    writeln!(f)?;
                }
                TranscriptEntryViewModel::Answer { question, answer } => {
                    writeln!(f, "Q: {}", question)?;
                    writeln!(f, "A: {}", answer)?;
                    writeln!(f)?;
                }
            }
        }

        if let Some(path) = &model.saved_to {
            writeln!(f, "Saved to {}", path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::presenters::{present_history, present_session, present_transcript};
    use crate::presentation::view_models::HistorySource;
    use teamfit_core::{HistoryState, SessionController};
    use teamfit_testing::fixtures;

    fn plain() -> FormatOptions {
        FormatOptions {
            enable_color: false,
            relative_time: false,
        }
    }

    #[test]
    fn test_history_table_rows_and_summary() {
        let mut state = HistoryState::new();
        state.load(fixtures::history());
        state.toggle("agent_101").unwrap();
        let model = present_history(&state, HistorySource::Api);
        let output = HistoryView::new(&model, &plain()).to_string();

        assert!(output.contains("[x]  agent_101"));
        assert!(output.contains("[ ]  agent_102"));
        assert!(output.contains("Jordan Banks"));
        assert!(output.contains("3 shown of 3 total, 1 selected"));
        assert!(!output.contains("Warning:"));
    }

    #[test]
    fn test_history_sample_notice_line() {
        let mut state = HistoryState::new();
        state.load(fixtures::history());
        let model = present_history(&state, HistorySource::Sample);
        let output = HistoryView::new(&model, &plain()).to_string();
        assert!(output.contains("Warning: Interview API unreachable, showing sample history"));
    }

    #[test]
    fn test_history_empty_and_filtered_states() {
        let mut state = HistoryState::new();
        let output =
            HistoryView::new(&present_history(&state, HistorySource::Api), &plain()).to_string();
        assert!(output.contains("No interviews yet."));

        state.load(fixtures::history());
        state.set_search("zelda");
        let output =
            HistoryView::new(&present_history(&state, HistorySource::Api), &plain()).to_string();
        assert!(output.contains("No interviews match the current filters."));
        assert!(output.contains("Filters: search \"zelda\""));
    }

    #[test]
    fn test_session_view_shows_link_and_hint() {
        let mut controller = SessionController::new();
        let records = fixtures::history();
        controller.resume(&records[0], "https://agent.ai-interviewer.com");
        let model = present_session(&controller).unwrap();
        let output = SessionView::new(&model, &plain()).to_string();

        assert!(output.contains("Status: Live"));
        assert!(output.contains("Jordan Banks - Backend Engineer"));
        assert!(output.contains("Link:  https://agent.ai-interviewer.com/agent_101"));
        assert!(output.contains("teamfit interview transcript agent_101"));
    }

    #[test]
    fn test_transcript_message_layout() {
        let data = fixtures::transcript();
        let model = present_transcript(&data, "agent_101", "Jordan Banks", None);
        let output = TranscriptView::new(&model, &plain()).to_string();

        assert!(output.contains("Interview Transcript - Jordan Banks (agent_101)"));
        assert!(output.contains("3 message(s)"));
        assert!(output.contains("AI Interviewer:"));
        assert!(output.contains("Candidate:"));
    }

    #[test]
    fn test_transcript_empty_placeholder() {
        let data: teamfit_types::TranscriptData = serde_json::from_str(r#"{}"#).unwrap();
        let model = present_transcript(&data, "agent_103", "Priya Natarajan", None);
        let output = TranscriptView::new(&model, &plain()).to_string();
        assert!(output
            .contains("No transcript content available yet. The interview may still be in progress."));
    }

    #[test]
    fn test_transcript_saved_line() {
        let data = fixtures::transcript();
        let model = present_transcript(
            &data,
            "agent_101",
            "Jordan Banks",
            Some("./interview_transcript_Jordan_Banks_2024-02-01.json".to_string()),
        );
        let output = TranscriptView::new(&model, &plain()).to_string();
        assert!(output.contains("Saved to ./interview_transcript_Jordan_Banks_2024-02-01.json"));
    }
}
