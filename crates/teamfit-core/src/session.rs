use teamfit_types::{CreateInterviewRequest, InterviewRecord, InterviewSession, TranscriptData};

use crate::error::{Error, Result};

/// Lifecycle status shown next to the active session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Idle,
    Live,
    Refreshed,
}

impl Default for SessionStatus {
    fn default() -> Self {
        Self::Idle
    }
}

impl SessionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            SessionStatus::Idle => "Idle",
            SessionStatus::Live => "Live",
            SessionStatus::Refreshed => "Refreshed",
        }
    }
}

/// Interview session lifecycle.
///
/// At most one session is active at a time. Creation validates inputs before
/// any request goes out, transcript access demands an active session, and
/// starting a new interview resets everything including a fetched transcript.
#[derive(Debug, Default)]
pub struct SessionController {
    session: Option<InterviewSession>,
    transcript: Option<TranscriptData>,
    status: SessionStatus,
}

impl SessionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates the setup form. Whitespace-only fields are rejected here,
    /// before any network request.
    pub fn prepare_create(
        candidate_name: &str,
        role: &str,
        candidate_email: Option<&str>,
    ) -> Result<CreateInterviewRequest> {
        let candidate_name = candidate_name.trim();
        let role = role.trim();
        if candidate_name.is_empty() || role.is_empty() {
            return Err(Error::Validation(
                "Please fill in all required fields.".to_string(),
            ));
        }
        let candidate_email = candidate_email
            .map(str::trim)
            .filter(|email| !email.is_empty());
        Ok(CreateInterviewRequest {
            candidate_name: candidate_name.to_string(),
            role: role.to_string(),
            candidate_email: candidate_email.map(str::to_string),
        })
    }

    /// Installs a newly created session, replacing any previous one.
    pub fn begin(&mut self, session: InterviewSession) {
        self.session = Some(session);
        self.transcript = None;
        self.status = SessionStatus::Live;
    }

    /// Re-opens a historical interview as the active session.
    pub fn resume(&mut self, record: &InterviewRecord, interview_base_url: &str) {
        self.begin(InterviewSession::resume(record, interview_base_url));
    }

    /// Marks the session link as reloaded. No-op without a session.
    pub fn refresh(&mut self) -> bool {
        if self.session.is_none() {
            return false;
        }
        self.status = SessionStatus::Refreshed;
        true
    }

    /// The session a transcript fetch would target.
    pub fn transcript_target(&self) -> Result<&InterviewSession> {
        self.session.as_ref().ok_or(Error::NoActiveSession)
    }

    /// Stores a fetched transcript for the active session.
    pub fn store_transcript(&mut self, transcript: TranscriptData) -> Result<()> {
        if self.session.is_none() {
            return Err(Error::NoActiveSession);
        }
        self.transcript = Some(transcript);
        Ok(())
    }

    /// Ends the current session and clears everything for a new one.
    pub fn start_new(&mut self) {
        self.session = None;
        self.transcript = None;
        self.status = SessionStatus::Idle;
    }

    pub fn session(&self) -> Option<&InterviewSession> {
        self.session.as_ref()
    }

    pub fn transcript(&self) -> Option<&TranscriptData> {
        self.transcript.as_ref()
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn is_live(&self) -> bool {
        self.session.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> InterviewSession {
        InterviewSession {
            agent_id: "agent_042".to_string(),
            candidate_name: "Jane Roe".to_string(),
            role: "Staff Engineer".to_string(),
            interview_link: "https://agent.example.com/agent_042".to_string(),
        }
    }

    fn transcript() -> TranscriptData {
        TranscriptData {
            success: true,
            agent_id: Some("agent_042".to_string()),
            messages: vec![],
            formatted_transcript: None,
            message_count: Some(0),
            error: None,
        }
    }

    #[test]
    fn test_create_requires_name_and_role() {
        let err = SessionController::prepare_create("", "Engineer", None).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert_eq!(err.to_string(), "Please fill in all required fields.");

        let err = SessionController::prepare_create("Jane Roe", "   ", None).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));

        let request =
            SessionController::prepare_create("  Jane Roe ", " Staff Engineer ", None).unwrap();
        assert_eq!(request.candidate_name, "Jane Roe");
        assert_eq!(request.role, "Staff Engineer");
    }

    #[test]
    fn test_create_drops_blank_email() {
        let request =
            SessionController::prepare_create("Jane Roe", "Engineer", Some("  ")).unwrap();
        assert_eq!(request.candidate_email, None);

        let request =
            SessionController::prepare_create("Jane Roe", "Engineer", Some("jane@example.com"))
                .unwrap();
        assert_eq!(request.candidate_email.as_deref(), Some("jane@example.com"));
    }

    #[test]
    fn test_transcript_requires_active_session() {
        let mut controller = SessionController::new();
        assert!(matches!(
            controller.transcript_target(),
            Err(Error::NoActiveSession)
        ));
        assert!(matches!(
            controller.store_transcript(transcript()),
            Err(Error::NoActiveSession)
        ));
    }

    #[test]
    fn test_session_lifecycle() {
        let mut controller = SessionController::new();
        assert_eq!(controller.status(), SessionStatus::Idle);

        controller.begin(session());
        assert!(controller.is_live());
        assert_eq!(controller.status(), SessionStatus::Live);
        assert_eq!(controller.transcript_target().unwrap().agent_id, "agent_042");

        assert!(controller.refresh());
        assert_eq!(controller.status(), SessionStatus::Refreshed);

        controller.store_transcript(transcript()).unwrap();
        assert!(controller.transcript().is_some());

        controller.start_new();
        assert!(!controller.is_live());
        assert!(controller.transcript().is_none());
        assert_eq!(controller.status(), SessionStatus::Idle);
    }

    #[test]
    fn test_refresh_without_session_is_noop() {
        let mut controller = SessionController::new();
        assert!(!controller.refresh());
        assert_eq!(controller.status(), SessionStatus::Idle);
    }

    #[test]
    fn test_new_session_drops_previous_transcript() {
        let mut controller = SessionController::new();
        controller.begin(session());
        controller.store_transcript(transcript()).unwrap();

        let mut replacement = session();
        replacement.agent_id = "agent_043".to_string();
        controller.begin(replacement);
        assert!(controller.transcript().is_none());
        assert_eq!(controller.status(), SessionStatus::Live);
    }

    #[test]
    fn test_resume_synthesizes_link_from_base_url() {
        let record = InterviewRecord {
            agent_id: "agent_007".to_string(),
            candidate_name: "Sam Lee".to_string(),
            role: "SRE".to_string(),
            status: "completed".to_string(),
            created_at: None,
            duration: None,
            has_transcript: true,
        };
        let mut controller = SessionController::new();
        controller.resume(&record, "https://agent.ai-interviewer.com");
        let session = controller.session().unwrap();
        assert_eq!(
            session.interview_link,
            "https://agent.ai-interviewer.com/agent_007"
        );
        assert_eq!(controller.status(), SessionStatus::Live);
    }
}
