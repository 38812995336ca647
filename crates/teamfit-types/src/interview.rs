use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// 1. Interview history
// ==========================================

/// One row of the interview history list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewRecord {
    pub agent_id: String,
    pub candidate_name: String,
    pub role: String,
    /// Free-form lifecycle status ("completed", "in-progress", ...).
    pub status: String,
    /// RFC 3339 creation timestamp, when the backend recorded one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default)]
    pub has_transcript: bool,
}

/// Wire wrapper for GET /api/interview-history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewHistory {
    #[serde(default)]
    pub interviews: Vec<InterviewRecord>,
}

/// Canned history shown when the history endpoint is unreachable.
pub fn sample_history() -> Vec<InterviewRecord> {
    vec![
        InterviewRecord {
            agent_id: "agent_001".to_string(),
            candidate_name: "John Smith".to_string(),
            role: "Software Engineer".to_string(),
            status: "completed".to_string(),
            created_at: Some("2024-01-15T10:30:00Z".to_string()),
            duration: Some("25 minutes".to_string()),
            has_transcript: true,
        },
        InterviewRecord {
            agent_id: "agent_002".to_string(),
            candidate_name: "Sarah Johnson".to_string(),
            role: "Frontend Developer".to_string(),
            status: "completed".to_string(),
            created_at: Some("2024-01-14T14:15:00Z".to_string()),
            duration: Some("30 minutes".to_string()),
            has_transcript: true,
        },
        InterviewRecord {
            agent_id: "agent_003".to_string(),
            candidate_name: "Mike Davis".to_string(),
            role: "Backend Developer".to_string(),
            status: "in-progress".to_string(),
            created_at: Some("2024-01-16T09:00:00Z".to_string()),
            duration: Some("In progress".to_string()),
            has_transcript: false,
        },
    ]
}

// ==========================================
// 2. Interview sessions
// ==========================================

/// Body of POST /api/create-interview.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateInterviewRequest {
    pub candidate_name: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidate_email: Option<String>,
}

/// A live interview session, either freshly created or resumed from history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewSession {
    pub agent_id: String,
    pub candidate_name: String,
    pub role: String,
    /// URL the candidate joins; shown verbatim in the session panel.
    pub interview_link: String,
}

impl InterviewSession {
    /// Rebuilds the join link for a historical interview.
    pub fn resume(record: &InterviewRecord, interview_base_url: &str) -> Self {
        Self {
            agent_id: record.agent_id.clone(),
            candidate_name: record.candidate_name.clone(),
            role: record.role.clone(),
            interview_link: format!(
                "{}/{}",
                interview_base_url.trim_end_matches('/'),
                record.agent_id
            ),
        }
    }
}

// ==========================================
// 3. Transcripts
// ==========================================

/// Payload of GET /api/interview-transcript/{agent_id}.
///
/// The backend answers 200 even for known failures, flagging them with
/// `success: false` plus an `error` message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptData {
    #[serde(default = "default_true")]
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub messages: Vec<TranscriptMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted_transcript: Option<FormattedTranscript>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

fn default_true() -> bool {
    true
}

impl TranscriptData {
    /// File name for a saved transcript: spaces in the candidate name become
    /// underscores, suffixed with the capture date.
    pub fn download_filename(candidate_name: &str, date: NaiveDate) -> String {
        let name = candidate_name.split_whitespace().collect::<Vec<_>>().join("_");
        format!("interview_transcript_{}_{}.json", name, date.format("%Y-%m-%d"))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptMessage {
    /// Speaker role as recorded by the interview agent ("user" is the candidate).
    pub role: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl TranscriptMessage {
    pub fn speaker(&self) -> &str {
        if self.role == "user" {
            "Candidate"
        } else {
            "AI Interviewer"
        }
    }
}

/// Alternative transcript shape some agent versions return: the conversation
/// regrouped into question/answer pairs under the candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedTranscript {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidate: Option<TranscriptCandidate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptCandidate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub responses: Vec<QaPair>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QaPair {
    pub question: String,
    pub answer: String,
}

// ==========================================
// 4. Analysis hand-off
// ==========================================

/// One selected interview queued for compatibility analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub agent_id: String,
    pub candidate_name: String,
    pub role: String,
}

impl AnalysisRequest {
    pub fn from_record(record: &InterviewRecord) -> Self {
        Self {
            agent_id: record.agent_id.clone(),
            candidate_name: record.candidate_name.clone(),
            role: record.role.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_download_filename_replaces_spaces() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 20).unwrap();
        assert_eq!(
            TranscriptData::download_filename("John Smith", date),
            "interview_transcript_John_Smith_2024-01-20.json"
        );
        assert_eq!(
            TranscriptData::download_filename("  Ana  de la Cruz ", date),
            "interview_transcript_Ana_de_la_Cruz_2024-01-20.json"
        );
    }

    #[test]
    fn test_transcript_success_defaults_to_true() {
        let data: TranscriptData = serde_json::from_str(r#"{"messages": []}"#).unwrap();
        assert!(data.success);

        let failed: TranscriptData =
            serde_json::from_str(r#"{"success": false, "error": "no transcript"}"#).unwrap();
        assert!(!failed.success);
        assert_eq!(failed.error.as_deref(), Some("no transcript"));
    }

    #[test]
    fn test_transcript_speaker_labels() {
        let candidate = TranscriptMessage {
            role: "user".to_string(),
            content: "Hi".to_string(),
            timestamp: None,
        };
        let interviewer = TranscriptMessage {
            role: "assistant".to_string(),
            content: "Welcome".to_string(),
            timestamp: None,
        };
        assert_eq!(candidate.speaker(), "Candidate");
        assert_eq!(interviewer.speaker(), "AI Interviewer");
    }

    #[test]
    fn test_session_resume_builds_join_link() {
        let record = &sample_history()[0];
        let session = InterviewSession::resume(record, "https://agent.example.com/");
        assert_eq!(session.agent_id, "agent_001");
        assert_eq!(session.interview_link, "https://agent.example.com/agent_001");
    }

    #[test]
    fn test_history_wrapper_tolerates_missing_list() {
        let history: InterviewHistory = serde_json::from_str("{}").unwrap();
        assert!(history.interviews.is_empty());
    }
}
