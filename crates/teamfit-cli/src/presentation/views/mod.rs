// Views contain the formatting logic that turns ViewModels into final output

pub mod dashboard;
pub mod interview;
pub mod tui;

pub use dashboard::{CandidateDetailView, DashboardView};
pub use interview::{HistoryView, SessionView, TranscriptView};
