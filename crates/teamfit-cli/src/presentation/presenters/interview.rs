use teamfit_core::{Error, HistoryState, Result, SessionController};
use teamfit_types::TranscriptData;

use crate::args::hints;
use crate::presentation::view_models::{
    Guidance, HistoryEntryViewModel, HistorySource, HistoryViewModel, SessionViewModel,
    StatusBadge, TranscriptEntryViewModel, TranscriptViewModel,
};

pub fn present_history(state: &HistoryState, source: HistorySource) -> HistoryViewModel {
    let interviews = state
        .visible_records()
        .map(|record| HistoryEntryViewModel {
            agent_id: record.agent_id.clone(),
            candidate_name: record.candidate_name.clone(),
            role: record.role.clone(),
            status: record.status.clone(),
            created_at: record.created_at.clone(),
            duration: record.duration.clone(),
            has_transcript: record.has_transcript,
            selected: state.is_selected(&record.agent_id),
        })
        .collect();

    let notice = match source {
        HistorySource::Api => None,
        HistorySource::Sample => Some(StatusBadge::warning(
            "Interview API unreachable, showing sample history",
        )),
    };

    HistoryViewModel {
        interviews,
        total: state.records().len(),
        visible: state.visible_len(),
        selected: state.selection_count(),
        source,
        search: (!state.search().is_empty()).then(|| state.search().to_string()),
        status_filter: state.status_filter().map(str::to_string),
        notice,
    }
}

pub fn present_session(controller: &SessionController) -> Result<SessionViewModel> {
    let session = controller.session().ok_or(Error::NoActiveSession)?;
    let status = controller.status();

    let next_steps = vec![
        Guidance::new("Share the interview link with the candidate"),
        Guidance::new("Fetch the transcript once the interview has wrapped up").with_command(
            hints::fmt::interview_transcript(
                &session.agent_id,
                &session.candidate_name,
                &session.role,
            ),
        ),
    ];

    Ok(SessionViewModel {
        agent_id: session.agent_id.clone(),
        candidate_name: session.candidate_name.clone(),
        role: session.role.clone(),
        interview_link: session.interview_link.clone(),
        status: status.label().to_string(),
        badge: StatusBadge::success(status.label()),
        next_steps,
    })
}

/// Transcripts arrive either as raw agent messages or as pre-grouped
/// question/answer pairs. Messages win when both are present.
pub fn present_transcript(
    data: &TranscriptData,
    agent_id: &str,
    fallback_candidate: &str,
    saved_to: Option<String>,
) -> TranscriptViewModel {
    let entries: Vec<TranscriptEntryViewModel> = if !data.messages.is_empty() {
        data.messages
            .iter()
            .map(|message| TranscriptEntryViewModel::Message {
                speaker: message.speaker().to_string(),
                content: message.content.clone(),
                timestamp: message.timestamp.clone().unwrap_or_default(),
            })
            .collect()
    } else {
        data.formatted_transcript
            .as_ref()
            .and_then(|formatted| formatted.candidate.as_ref())
            .map(|candidate| {
                candidate
                    .responses
                    .iter()
                    .map(|pair| TranscriptEntryViewModel::Answer {
                        question: pair.question.clone(),
                        answer: pair.answer.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default()
    };

    let candidate_name = data
        .formatted_transcript
        .as_ref()
        .and_then(|formatted| formatted.candidate.as_ref())
        .map(|candidate| candidate.name.clone())
        .unwrap_or_else(|| fallback_candidate.to_string());

    TranscriptViewModel {
        agent_id: data
            .agent_id
            .clone()
            .unwrap_or_else(|| agent_id.to_string()),
        candidate_name,
        message_count: data.message_count.unwrap_or(entries.len() as u32),
        entries,
        saved_to,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use teamfit_testing::fixtures;

    fn loaded_history() -> HistoryState {
        let mut state = HistoryState::new();
        state.load(fixtures::history());
        state
    }

    #[test]
    fn test_history_marks_selected_rows() {
        let mut state = loaded_history();
        state.toggle("agent_102").unwrap();
        let model = present_history(&state, HistorySource::Api);

        let selected: Vec<&str> = model
            .interviews
            .iter()
            .filter(|entry| entry.selected)
            .map(|entry| entry.agent_id.as_str())
            .collect();
        assert_eq!(selected, vec!["agent_102"]);
        assert_eq!(model.selected, 1);
        assert!(model.notice.is_none());
    }

    #[test]
    fn test_history_sample_source_carries_notice() {
        let model = present_history(&loaded_history(), HistorySource::Sample);
        assert!(model.notice.is_some());
    }

    #[test]
    fn test_history_echoes_active_filters() {
        let mut state = loaded_history();
        state.set_search("jordan");
        state.set_status_filter(Some("completed".to_string()));
        let model = present_history(&state, HistorySource::Api);

        assert_eq!(model.search.as_deref(), Some("jordan"));
        assert_eq!(model.status_filter.as_deref(), Some("completed"));
        assert_eq!(model.visible, 1);
        assert_eq!(model.total, 3);
    }

    #[test]
    fn test_session_requires_active_session() {
        let controller = SessionController::new();
        assert!(present_session(&controller).is_err());
    }

    #[test]
    fn test_session_carries_transcript_hint() {
        let mut controller = SessionController::new();
        let records = fixtures::history();
        controller.resume(&records[0], "https://agent.ai-interviewer.com");
        let model = present_session(&controller).unwrap();

        assert_eq!(model.status, "Live");
        assert!(model.next_steps.iter().any(|step| step
            .command
            .as_deref()
            .is_some_and(|cmd| cmd.contains("interview transcript agent_101"))));
    }

    #[test]
    fn test_transcript_prefers_messages() {
        let data = fixtures::transcript();
        let model = present_transcript(&data, "agent_101", "Jordan Banks", None);

        assert_eq!(model.entries.len(), 3);
        assert!(matches!(
            model.entries[0],
            TranscriptEntryViewModel::Message { .. }
        ));
    }

    #[test]
    fn test_transcript_falls_back_to_qa_pairs() {
        let data: TranscriptData = serde_json::from_str(&fixtures::qa_transcript_json()).unwrap();
        let model = present_transcript(&data, "agent_102", "unused", None);

        assert_eq!(model.candidate_name, "Elena Petrova");
        assert_eq!(model.entries.len(), 2);
        assert!(matches!(
            model.entries[0],
            TranscriptEntryViewModel::Answer { .. }
        ));
    }

    #[test]
    fn test_transcript_empty_payload_yields_no_entries() {
        let data: TranscriptData = serde_json::from_str(r#"{"success": true}"#).unwrap();
        let model = present_transcript(&data, "agent_103", "Priya Natarajan", None);

        assert_eq!(model.agent_id, "agent_103");
        assert_eq!(model.candidate_name, "Priya Natarajan");
        assert!(model.entries.is_empty());
        assert_eq!(model.message_count, 0);
    }
}
