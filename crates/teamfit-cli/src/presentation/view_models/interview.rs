use serde::Serialize;

use super::common::{Guidance, StatusBadge};

// ============================================================================
// History
// ============================================================================

/// Where the history rows came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HistorySource {
    Api,
    Sample,
}

#[derive(Debug, Clone, Serialize)]
pub struct HistoryViewModel {
    pub interviews: Vec<HistoryEntryViewModel>,
    pub total: usize,
    pub visible: usize,
    pub selected: usize,
    pub source: HistorySource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_filter: Option<String>,
    /// Set when the rows are sample data because the API was unreachable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<StatusBadge>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HistoryEntryViewModel {
    pub agent_id: String,
    pub candidate_name: String,
    pub role: String,
    pub status: String,
    pub created_at: Option<String>,
    pub duration: Option<String>,
    pub has_transcript: bool,
    pub selected: bool,
}

// ============================================================================
// Session
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct SessionViewModel {
    pub agent_id: String,
    pub candidate_name: String,
    pub role: String,
    pub interview_link: String,
    /// 'Live' or 'Refreshed'.
    pub status: String,
    pub badge: StatusBadge,
    pub next_steps: Vec<Guidance>,
}

// ============================================================================
// Transcript
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct TranscriptViewModel {
    pub agent_id: String,
    pub candidate_name: String,
    pub entries: Vec<TranscriptEntryViewModel>,
    pub message_count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saved_to: Option<String>,
}

/// A transcript renders either as a turn-by-turn exchange or as
/// question/answer pairs, depending on what the backend produced.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TranscriptEntryViewModel {
    Message {
        speaker: String,
        content: String,
        timestamp: String,
    },
    Answer {
        question: String,
        answer: String,
    },
}
