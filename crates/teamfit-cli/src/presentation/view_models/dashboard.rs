use serde::Serialize;

/// Everything the dashboard surface needs, precomputed and render-agnostic.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardViewModel {
    pub overview: OverviewViewModel,
    pub team_members: Vec<TeamMemberViewModel>,
    /// Candidates by compatibility, best first, filter ignored.
    pub ranking: Vec<RankingEntryViewModel>,
    /// Candidate counts per distinct recommendation status.
    pub distribution: Vec<DistributionEntryViewModel>,
    /// Visible candidates in the active sort order.
    pub candidates: Vec<CandidateCardViewModel>,
    pub sort: String,
    pub status_filter: String,
    pub total_candidates: usize,
    pub visible_candidates: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending_analysis: Option<PendingAnalysisViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OverviewViewModel {
    pub team_size: Option<u32>,
    pub candidates_count: Option<u32>,
    /// 0.0..=1.0 as the backend reports it.
    pub average_compatibility: Option<f64>,
    pub candidates_above_threshold: Option<u32>,
    pub generated_at: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TeamMemberViewModel {
    pub name: String,
    pub position: String,
    pub initials: String,
    pub traits: Vec<TraitEntryViewModel>,
}

/// One Big Five axis, midpoint-filled when the backend did not score it.
#[derive(Debug, Clone, Serialize)]
pub struct TraitEntryViewModel {
    pub label: String,
    pub name: String,
    pub value_pct: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RankingEntryViewModel {
    pub name: String,
    pub compatibility_score: f64,
    pub recommendation: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DistributionEntryViewModel {
    pub status: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct CandidateCardViewModel {
    pub id: String,
    pub name: String,
    pub position: String,
    pub initials: String,
    pub compatibility_score: f64,
    pub recommendation: String,
    pub recommendation_rank: u8,
    /// At most two strengths; the detail view shows the full list.
    pub top_strengths: Vec<String>,
    pub traits: Vec<TraitEntryViewModel>,
}

/// Interviews queued for analysis by a previous `interview` invocation.
#[derive(Debug, Clone, Serialize)]
pub struct PendingAnalysisViewModel {
    pub count: usize,
    pub candidate_names: Vec<String>,
}

/// Full drill-down for one candidate.
#[derive(Debug, Clone, Serialize)]
pub struct CandidateDetailViewModel {
    pub id: String,
    pub name: String,
    pub position: String,
    pub initials: String,
    pub compatibility_score: f64,
    pub confidence_level: Option<f64>,
    pub recommendation: String,
    pub recommendation_rank: u8,
    pub summary: String,
    pub strengths: Vec<String>,
    pub concerns: Vec<String>,
    pub recommendations: Vec<String>,
    pub traits: Vec<TraitEntryViewModel>,
}
