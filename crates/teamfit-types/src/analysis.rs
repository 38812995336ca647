use std::collections::BTreeMap;
use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

// ==========================================
// 1. Dataset (GET /api/dashboard-data)
// ==========================================

/// Root payload returned by the analytics backend.
///
/// Candidate entries stay in server order. Consumers derive sorted/filtered
/// projections from this structure without ever mutating it, so repeated
/// re-sorts cannot compound.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisDataset {
    /// Run metadata. Older backends emit this under `metadata`.
    #[serde(
        rename = "analysis_metadata",
        alias = "metadata",
        skip_serializing_if = "Option::is_none"
    )]
    pub metadata: Option<AnalysisMetadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_insights: Option<TeamInsights>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_summary: Option<TeamSummary>,
    #[serde(default)]
    pub candidates_analysis: Vec<CandidateAnalysis>,
}

impl AnalysisDataset {
    pub fn candidate_count(&self) -> usize {
        self.candidates_analysis.len()
    }

    /// Looks a candidate up by its stable id.
    pub fn candidate(&self, id: &str) -> Option<&CandidateAnalysis> {
        self.candidates_analysis
            .iter()
            .find(|c| c.candidate_info.id == id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidates_count: Option<u32>,
    /// RFC 3339 timestamp of the analysis run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamInsights {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidate_pool_summary: Option<CandidatePoolSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidatePoolSummary {
    /// Mean compatibility across the pool, 0.0..=1.0.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_compatibility: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidates_above_threshold: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamSummary {
    #[serde(default)]
    pub members: Vec<TeamMember>,
}

/// Existing team member profile shown alongside the candidate pool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamMember {
    pub name: String,
    #[serde(default)]
    pub position: String,
    /// Raw trait keys as the backend emitted them; normalize via
    /// [`TraitProfile::from_raw`] before charting.
    #[serde(default)]
    pub traits_summary: BTreeMap<String, f64>,
}

// ==========================================
// 2. Candidate analysis entries
// ==========================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateAnalysis {
    pub candidate_info: CandidateInfo,
    pub ai_analysis: AiAnalysis,
    pub overall_recommendation: RecommendationInfo,
}

impl CandidateAnalysis {
    pub fn id(&self) -> &str {
        &self.candidate_info.id
    }

    pub fn name(&self) -> &str {
        &self.candidate_info.name
    }

    pub fn compatibility_score(&self) -> f64 {
        self.ai_analysis.compatibility_score
    }

    pub fn recommendation(&self) -> &Recommendation {
        &self.overall_recommendation.status
    }

    /// Normalized Big Five profile for this candidate.
    pub fn trait_profile(&self) -> TraitProfile {
        TraitProfile::from_raw(&self.candidate_info.personality_traits)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateInfo {
    /// Stable identifier, unique within a dataset.
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub personality_traits: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiAnalysis {
    /// Overall team-fit score, 0.0..=1.0.
    pub compatibility_score: f64,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub concerns: Vec<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
    #[serde(default)]
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence_level: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationInfo {
    pub status: Recommendation,
}

// ==========================================
// 3. Recommendation ranking
// ==========================================

/// Hiring verdict attached to every analyzed candidate.
///
/// The wire value is an upper-case status string. The four known verdicts get
/// a strict rank for ordered views; any other status ranks below all of them
/// and keeps its original text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Recommendation {
    Highly,
    Recommended,
    Conditionally,
    Not,
    Other(String),
}

impl Recommendation {
    /// Sort weight, higher is better. Unknown statuses sort last.
    pub fn rank(&self) -> u8 {
        match self {
            Recommendation::Highly => 4,
            Recommendation::Recommended => 3,
            Recommendation::Conditionally => 2,
            Recommendation::Not => 1,
            Recommendation::Other(_) => 0,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Recommendation::Highly => "HIGHLY RECOMMENDED",
            Recommendation::Recommended => "RECOMMENDED",
            Recommendation::Conditionally => "CONDITIONALLY RECOMMENDED",
            Recommendation::Not => "NOT RECOMMENDED",
            Recommendation::Other(s) => s,
        }
    }

    /// Case-insensitive status comparison, used by the dashboard filter.
    pub fn matches(&self, other: &Recommendation) -> bool {
        self.as_str().eq_ignore_ascii_case(other.as_str())
    }
}

impl From<String> for Recommendation {
    fn from(raw: String) -> Self {
        match raw.trim().to_uppercase().as_str() {
            "HIGHLY RECOMMENDED" => Recommendation::Highly,
            "RECOMMENDED" => Recommendation::Recommended,
            "CONDITIONALLY RECOMMENDED" => Recommendation::Conditionally,
            "NOT RECOMMENDED" => Recommendation::Not,
            _ => Recommendation::Other(raw.trim().to_string()),
        }
    }
}

impl From<Recommendation> for String {
    fn from(rec: Recommendation) -> Self {
        match rec {
            Recommendation::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ==========================================
// 4. Big Five trait profiles
// ==========================================

/// Canonical Big Five axis names, in chart order.
pub const TRAIT_NAMES: [&str; 5] = [
    "Openness",
    "Conscientiousness",
    "Extraversion",
    "Agreeableness",
    "Neuroticism",
];

/// Single-letter axis labels for compact charts.
pub const TRAIT_LABELS: [&str; 5] = ["O", "C", "E", "A", "N"];

/// Neutral midpoint substituted for axes the backend did not score.
pub const TRAIT_MIDPOINT_PCT: f64 = 50.0;

// Shortened key variants some backends emit ("open" for "openness", etc).
static TRAIT_ALIASES: Lazy<BTreeMap<&'static str, &'static str>> = Lazy::new(|| {
    BTreeMap::from([
        ("open", "openness"),
        ("conscientious", "conscientiousness"),
        ("agreeable", "agreeableness"),
    ])
});

/// Normalized Big Five scores on the 0.0..=1.0 scale, one slot per axis.
///
/// Built once when a dataset is installed. Unknown keys are dropped, missing
/// axes stay `None` so views can substitute [`TRAIT_MIDPOINT_PCT`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TraitProfile {
    pub openness: Option<f64>,
    pub conscientiousness: Option<f64>,
    pub extraversion: Option<f64>,
    pub agreeableness: Option<f64>,
    pub neuroticism: Option<f64>,
}

impl TraitProfile {
    /// Folds raw backend keys onto the canonical axes.
    ///
    /// Keys are lower-cased and space-folded before lookup, then resolved
    /// through the alias table. Keys that still match no axis are dropped.
    pub fn from_raw(raw: &BTreeMap<String, f64>) -> Self {
        let mut profile = Self::default();
        for (key, value) in raw {
            if let Some(slot) = profile.slot_for(key) {
                *slot = Some(*value);
            }
        }
        profile
    }

    fn slot_for(&mut self, key: &str) -> Option<&mut Option<f64>> {
        let folded = key.trim().to_lowercase().replace(' ', "_");
        let canonical = TRAIT_ALIASES
            .get(folded.as_str())
            .copied()
            .unwrap_or(folded.as_str());
        match canonical {
            "openness" => Some(&mut self.openness),
            "conscientiousness" => Some(&mut self.conscientiousness),
            "extraversion" => Some(&mut self.extraversion),
            "agreeableness" => Some(&mut self.agreeableness),
            "neuroticism" => Some(&mut self.neuroticism),
            _ => None,
        }
    }

    /// Score for the axis at `index` in [`TRAIT_NAMES`] order.
    pub fn axis(&self, index: usize) -> Option<f64> {
        match index {
            0 => self.openness,
            1 => self.conscientiousness,
            2 => self.extraversion,
            3 => self.agreeableness,
            4 => self.neuroticism,
            _ => None,
        }
    }

    /// Percentage values in canonical axis order, midpoint for missing axes.
    pub fn percentages(&self) -> [f64; 5] {
        let mut out = [TRAIT_MIDPOINT_PCT; 5];
        for (index, slot) in out.iter_mut().enumerate() {
            if let Some(value) = self.axis(index) {
                *slot = value * 100.0;
            }
        }
        out
    }

    pub fn is_empty(&self) -> bool {
        (0..TRAIT_NAMES.len()).all(|index| self.axis(index).is_none())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn traits(pairs: &[(&str, f64)]) -> BTreeMap<String, f64> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), *v))
            .collect()
    }

    #[test]
    fn test_recommendation_rank_order() {
        let highly = Recommendation::from("HIGHLY RECOMMENDED".to_string());
        let recommended = Recommendation::from("RECOMMENDED".to_string());
        let conditional = Recommendation::from("CONDITIONALLY RECOMMENDED".to_string());
        let not = Recommendation::from("NOT RECOMMENDED".to_string());
        let unknown = Recommendation::from("PENDING REVIEW".to_string());

        assert!(highly.rank() > recommended.rank());
        assert!(recommended.rank() > conditional.rank());
        assert!(conditional.rank() > not.rank());
        assert!(not.rank() > unknown.rank());
    }

    #[test]
    fn test_recommendation_parse_is_case_insensitive() {
        let rec = Recommendation::from("highly recommended".to_string());
        assert_eq!(rec, Recommendation::Highly);
        assert_eq!(rec.as_str(), "HIGHLY RECOMMENDED");
    }

    #[test]
    fn test_recommendation_unknown_keeps_text() {
        let rec = Recommendation::from("  Take a Chance ".to_string());
        assert_eq!(rec.as_str(), "Take a Chance");
        assert_eq!(rec.rank(), 0);
    }

    #[test]
    fn test_recommendation_wire_round_trip() {
        let json = "\"CONDITIONALLY RECOMMENDED\"";
        let rec: Recommendation = serde_json::from_str(json).unwrap();
        assert_eq!(rec, Recommendation::Conditionally);
        assert_eq!(serde_json::to_string(&rec).unwrap(), json);
    }

    #[test]
    fn test_trait_profile_canonical_keys() {
        let profile = TraitProfile::from_raw(&traits(&[
            ("openness", 0.8),
            ("conscientiousness", 0.7),
            ("extraversion", 0.6),
            ("agreeableness", 0.5),
            ("neuroticism", 0.4),
        ]));
        assert_eq!(
            profile.percentages(),
            [80.0, 70.0, 60.0, 50.0, 40.0]
        );
    }

    #[test]
    fn test_trait_profile_aliases_and_case_folding() {
        let profile = TraitProfile::from_raw(&traits(&[
            ("open", 0.9),
            ("Conscientious", 0.6),
            ("AGREEABLE", 0.3),
        ]));
        assert_eq!(profile.openness, Some(0.9));
        assert_eq!(profile.conscientiousness, Some(0.6));
        assert_eq!(profile.agreeableness, Some(0.3));
        assert_eq!(profile.extraversion, None);
    }

    #[test]
    fn test_trait_profile_drops_unknown_keys_and_fills_midpoint() {
        let profile = TraitProfile::from_raw(&traits(&[("grit", 0.95), ("openness", 0.2)]));
        assert_eq!(profile.percentages(), [20.0, 50.0, 50.0, 50.0, 50.0]);
        assert!(!profile.is_empty());
    }

    #[test]
    fn test_dataset_accepts_legacy_metadata_key() {
        let json = r#"{
            "metadata": { "team_size": 5, "candidates_count": 2, "timestamp": "2024-01-20T12:00:00Z" },
            "candidates_analysis": []
        }"#;
        let dataset: AnalysisDataset = serde_json::from_str(json).unwrap();
        let metadata = dataset.metadata.unwrap();
        assert_eq!(metadata.team_size, Some(5));

        let current = r#"{
            "analysis_metadata": { "team_size": 7 },
            "candidates_analysis": []
        }"#;
        let dataset: AnalysisDataset = serde_json::from_str(current).unwrap();
        assert_eq!(dataset.metadata.unwrap().team_size, Some(7));
    }

    #[test]
    fn test_dataset_candidate_lookup() {
        let json = r#"{
            "candidates_analysis": [{
                "candidate_info": { "id": "cand_1", "name": "Ada Li", "position": "Platform Engineer" },
                "ai_analysis": { "compatibility_score": 0.82 },
                "overall_recommendation": { "status": "RECOMMENDED" }
            }]
        }"#;
        let dataset: AnalysisDataset = serde_json::from_str(json).unwrap();
        assert_eq!(dataset.candidate_count(), 1);
        assert_eq!(dataset.candidate("cand_1").unwrap().name(), "Ada Li");
        assert!(dataset.candidate("cand_2").is_none());
    }
}
