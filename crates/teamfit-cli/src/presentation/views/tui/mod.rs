//! TUI View Components
//!
//! Stateless Ratatui Widget implementations over the same ViewModels the
//! plain-text views render. Scroll state and keyboard handling stay with the
//! interactive loops in the handlers; these widgets only map ViewModel data
//! to Ratatui primitives. Color mapping from StatusLevel happens here.

pub mod dashboard;
pub mod interview;
pub mod status_bar;

pub use dashboard::{CandidateDetailPanel, CandidateListView, OverviewView};
pub use interview::{CreateFormView, FormFocus, HistoryListView, SessionPanel, TranscriptPanel};
pub use status_bar::StatusBarView;

use crate::presentation::view_models::StatusLevel;
use ratatui::style::Color;

/// Convert StatusLevel to a Ratatui color
pub(crate) fn status_level_to_color(level: StatusLevel) -> Color {
    match level {
        StatusLevel::Success => Color::Green,
        StatusLevel::Info => Color::Cyan,
        StatusLevel::Warning => Color::Yellow,
        StatusLevel::Error => Color::Red,
    }
}

/// Score color bands shared by every compatibility readout.
pub(crate) fn score_color(score: f64) -> Color {
    if score >= 0.8 {
        Color::Green
    } else if score >= 0.6 {
        Color::Blue
    } else if score >= 0.4 {
        Color::Yellow
    } else {
        Color::Red
    }
}

pub(crate) fn recommendation_color(rank: u8) -> Color {
    match rank {
        4 => Color::Green,
        3 => Color::Blue,
        2 => Color::Yellow,
        1 => Color::Red,
        _ => Color::DarkGray,
    }
}
