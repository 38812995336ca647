mod common;
mod dashboard;
mod interview;

pub use common::{Guidance, KeyHint, StatusBadge, StatusBarViewModel, StatusLevel};
pub use dashboard::{
    CandidateCardViewModel, CandidateDetailViewModel, DashboardViewModel,
    DistributionEntryViewModel, OverviewViewModel, PendingAnalysisViewModel,
    RankingEntryViewModel, TeamMemberViewModel, TraitEntryViewModel,
};
pub use interview::{
    HistoryEntryViewModel, HistorySource, HistoryViewModel, SessionViewModel,
    TranscriptEntryViewModel, TranscriptViewModel,
};
