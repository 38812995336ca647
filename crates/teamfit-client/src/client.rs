use std::time::Duration;

use serde::de::DeserializeOwned;
use teamfit_types::{
    AnalysisDataset, CreateInterviewRequest, InterviewHistory, InterviewRecord, InterviewSession,
    TranscriptData,
};

use crate::error::{Error, Result};

const DASHBOARD_DATA: &str = "/api/dashboard-data";
const INTERVIEW_HISTORY: &str = "/api/interview-history";
const INTERVIEW_TRANSCRIPT: &str = "/api/interview-transcript";
const CREATE_INTERVIEW: &str = "/api/create-interview";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Blocking client for the analytics backend.
///
/// One instance per invocation; endpoints are resolved against a single base
/// URL taken from config or the `--api-url` flag.
pub struct ApiClient {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url: String = base_url.into();
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full compatibility dataset for the dashboard.
    ///
    /// There is no fallback payload here: callers surface failures as a
    /// terminal error state instead of rendering an empty dashboard.
    pub fn fetch_dashboard_data(&self) -> Result<AnalysisDataset> {
        self.get_json(&self.url(DASHBOARD_DATA))
    }

    pub fn fetch_interview_history(&self) -> Result<Vec<InterviewRecord>> {
        let history: InterviewHistory = self.get_json(&self.url(INTERVIEW_HISTORY))?;
        Ok(history.interviews)
    }

    /// Transcript for one interview.
    ///
    /// The identity parameters let the backend label the transcript when the
    /// agent store has no candidate name on file. A `success: false` body is
    /// mapped to [`Error::Api`] so callers never hold a failed transcript.
    pub fn fetch_transcript(
        &self,
        agent_id: &str,
        candidate_name: &str,
        role: &str,
    ) -> Result<TranscriptData> {
        let url = format!("{}/{}", self.url(INTERVIEW_TRANSCRIPT), agent_id);
        let response = self
            .http
            .get(&url)
            .query(&[("candidate_name", candidate_name), ("role", role)])
            .send()?;
        let transcript: TranscriptData = Self::decode(response)?;
        if !transcript.success {
            let message = transcript
                .error
                .unwrap_or_else(|| "transcript not available".to_string());
            return Err(Error::Api(message));
        }
        Ok(transcript)
    }

    pub fn create_interview(&self, request: &CreateInterviewRequest) -> Result<InterviewSession> {
        let response = self
            .http
            .post(self.url(CREATE_INTERVIEW))
            .json(request)
            .send()?;
        Self::decode(response)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self.http.get(url).send()?;
        Self::decode(response)
    }

    fn decode<T: DeserializeOwned>(response: reqwest::blocking::Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Transport {
                status: status.as_u16(),
                detail: error_detail(response),
            });
        }
        let body = response.text()?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// Pulls a human-readable message out of an error response. The backend uses
/// `error` for its own failures and `detail` for framework-level ones.
fn error_detail(response: reqwest::blocking::Response) -> String {
    let Ok(body) = response.text() else {
        return String::new();
    };
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(&body) {
        for key in ["error", "detail"] {
            if let Some(message) = value.get(key).and_then(|v| v.as_str()) {
                return message.to_string();
            }
        }
    }
    body.trim().chars().take(200).collect()
}
