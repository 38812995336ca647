use std::collections::BTreeMap;

use teamfit_types::{AnalysisDataset, CandidateAnalysis, Recommendation, TraitProfile};

use crate::error::{Error, Result};

/// Sort order for the candidate grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Compatibility score, best first.
    Compatibility,
    /// Candidate name, A to Z.
    Name,
    /// Recommendation rank, best first.
    Recommendation,
}

impl Default for SortKey {
    fn default() -> Self {
        Self::Compatibility
    }
}

/// Chart-ready trait axes for one visible candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct TraitChart {
    /// Percentage per canonical axis, midpoint-filled.
    pub values: [f64; 5],
}

impl TraitChart {
    fn new(profile: &TraitProfile) -> Self {
        Self {
            values: profile.percentages(),
        }
    }
}

/// Dashboard state: one immutable dataset plus derived projections.
///
/// Sort and filter changes always recompute the view from the full dataset,
/// so switching orders can never compound an earlier rearrangement. The chart
/// registry is rebuilt in the same pass and therefore always matches the
/// visible candidates.
#[derive(Debug, Default)]
pub struct DashboardController {
    dataset: Option<AnalysisDataset>,
    profiles: BTreeMap<String, TraitProfile>,
    view: Vec<usize>,
    charts: BTreeMap<String, TraitChart>,
    sort: SortKey,
    filter: Option<Recommendation>,
    generation: u64,
}

impl DashboardController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a (re)load and returns its token.
    ///
    /// Completions carrying an older token are dropped, so a slow early
    /// response cannot overwrite a newer dataset.
    pub fn begin_load(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// Installs a fetched dataset if `token` is still the latest load.
    ///
    /// Returns false when the result was stale and ignored. Trait profiles
    /// are normalized once here; projection changes reuse them.
    pub fn complete_load(&mut self, token: u64, dataset: AnalysisDataset) -> bool {
        if token != self.generation {
            return false;
        }
        self.profiles = dataset
            .candidates_analysis
            .iter()
            .map(|candidate| (candidate.id().to_string(), candidate.trait_profile()))
            .collect();
        self.dataset = Some(dataset);
        self.rebuild();
        true
    }

    pub fn is_loaded(&self) -> bool {
        self.dataset.is_some()
    }

    pub fn dataset(&self) -> Option<&AnalysisDataset> {
        self.dataset.as_ref()
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
        self.rebuild();
    }

    /// `None` shows every recommendation status.
    pub fn set_filter(&mut self, filter: Option<Recommendation>) {
        self.filter = filter;
        self.rebuild();
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }

    pub fn filter(&self) -> Option<&Recommendation> {
        self.filter.as_ref()
    }

    /// Currently visible candidates, filter applied, in sort order.
    pub fn visible(&self) -> Vec<&CandidateAnalysis> {
        let Some(dataset) = &self.dataset else {
            return Vec::new();
        };
        self.view
            .iter()
            .map(|&index| &dataset.candidates_analysis[index])
            .collect()
    }

    pub fn visible_len(&self) -> usize {
        self.view.len()
    }

    pub fn total_len(&self) -> usize {
        self.dataset
            .as_ref()
            .map(|dataset| dataset.candidate_count())
            .unwrap_or(0)
    }

    /// Candidate by id, independent of the current filter.
    pub fn candidate(&self, id: &str) -> Result<&CandidateAnalysis> {
        self.dataset
            .as_ref()
            .and_then(|dataset| dataset.candidate(id))
            .ok_or_else(|| Error::NotFound(id.to_string()))
    }

    /// Normalized trait profile for any candidate in the dataset.
    pub fn profile(&self, id: &str) -> Option<&TraitProfile> {
        self.profiles.get(id)
    }

    /// Chart registry. Keys are exactly the visible candidate ids.
    pub fn charts(&self) -> &BTreeMap<String, TraitChart> {
        &self.charts
    }

    fn rebuild(&mut self) {
        let Some(dataset) = &self.dataset else {
            self.view.clear();
            self.charts.clear();
            return;
        };

        let candidates = &dataset.candidates_analysis;
        let mut view: Vec<usize> = (0..candidates.len())
            .filter(|&index| match &self.filter {
                None => true,
                Some(wanted) => candidates[index].recommendation().matches(wanted),
            })
            .collect();

        match self.sort {
            SortKey::Compatibility => view.sort_by(|&a, &b| {
                candidates[b]
                    .compatibility_score()
                    .total_cmp(&candidates[a].compatibility_score())
            }),
            SortKey::Name => view.sort_by_key(|&index| candidates[index].name().to_lowercase()),
            SortKey::Recommendation => view.sort_by(|&a, &b| {
                candidates[b]
                    .recommendation()
                    .rank()
                    .cmp(&candidates[a].recommendation().rank())
            }),
        }

        // Rebuilt from scratch so registry keys always equal the visible ids.
        self.charts.clear();
        for &index in &view {
            let candidate = &candidates[index];
            if let Some(profile) = self.profiles.get(candidate.id()) {
                self.charts
                    .insert(candidate.id().to_string(), TraitChart::new(profile));
            }
        }

        self.view = view;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap as Map;
    use teamfit_types::{AiAnalysis, CandidateInfo, RecommendationInfo};

    fn candidate(id: &str, name: &str, score: f64, status: &str) -> CandidateAnalysis {
        let mut personality_traits = Map::new();
        personality_traits.insert("openness".to_string(), 0.6);
        CandidateAnalysis {
            candidate_info: CandidateInfo {
                id: id.to_string(),
                name: name.to_string(),
                position: "Engineer".to_string(),
                personality_traits,
            },
            ai_analysis: AiAnalysis {
                compatibility_score: score,
                strengths: vec![],
                concerns: vec![],
                recommendations: vec![],
                summary: String::new(),
                confidence_level: None,
            },
            overall_recommendation: RecommendationInfo {
                status: Recommendation::from(status.to_string()),
            },
        }
    }

    fn dataset() -> AnalysisDataset {
        AnalysisDataset {
            metadata: None,
            team_insights: None,
            team_summary: None,
            candidates_analysis: vec![
                candidate("cand_a", "Mallory", 0.2, "NOT RECOMMENDED"),
                candidate("cand_b", "alice", 0.9, "HIGHLY RECOMMENDED"),
                candidate("cand_c", "Bob", 0.6, "RECOMMENDED"),
            ],
        }
    }

    fn loaded() -> DashboardController {
        let mut controller = DashboardController::new();
        let token = controller.begin_load();
        assert!(controller.complete_load(token, dataset()));
        controller
    }

    fn visible_ids(controller: &DashboardController) -> Vec<String> {
        controller
            .visible()
            .iter()
            .map(|c| c.id().to_string())
            .collect()
    }

    #[test]
    fn test_sort_by_compatibility_descending() {
        let controller = loaded();
        let scores: Vec<f64> = controller
            .visible()
            .iter()
            .map(|c| c.compatibility_score())
            .collect();
        assert_eq!(scores, vec![0.9, 0.6, 0.2]);
    }

    #[test]
    fn test_sort_by_name_is_case_insensitive() {
        let mut controller = loaded();
        controller.set_sort(SortKey::Name);
        let names: Vec<&str> = controller.visible().iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["alice", "Bob", "Mallory"]);
    }

    #[test]
    fn test_sort_by_recommendation_rank() {
        let mut controller = loaded();
        controller.set_sort(SortKey::Recommendation);
        let ids = visible_ids(&controller);
        assert_eq!(ids, vec!["cand_b", "cand_c", "cand_a"]);
    }

    #[test]
    fn test_resort_never_compounds() {
        let mut controller = loaded();
        let first = visible_ids(&controller);
        controller.set_sort(SortKey::Name);
        controller.set_sort(SortKey::Recommendation);
        controller.set_sort(SortKey::Compatibility);
        assert_eq!(visible_ids(&controller), first);
        // Dataset order itself is untouched by any amount of re-sorting.
        let raw: Vec<&str> = controller
            .dataset()
            .unwrap()
            .candidates_analysis
            .iter()
            .map(|c| c.id())
            .collect();
        assert_eq!(raw, vec!["cand_a", "cand_b", "cand_c"]);
    }

    #[test]
    fn test_filter_exact_status_and_all_restores() {
        let mut controller = loaded();
        controller.set_filter(Some(Recommendation::Not));
        assert_eq!(visible_ids(&controller), vec!["cand_a"]);
        controller.set_filter(None);
        assert_eq!(controller.visible_len(), 3);
    }

    #[test]
    fn test_chart_registry_matches_visible_ids() {
        let mut controller = loaded();
        controller.set_filter(Some(Recommendation::Highly));
        let keys: Vec<&String> = controller.charts().keys().collect();
        assert_eq!(keys, vec!["cand_b"]);

        // Re-applying the same projection is idempotent.
        controller.set_filter(Some(Recommendation::Highly));
        assert_eq!(controller.charts().len(), 1);

        controller.set_filter(None);
        assert_eq!(controller.charts().len(), 3);
    }

    #[test]
    fn test_chart_values_come_from_normalized_profiles() {
        let controller = loaded();
        let chart = controller.charts().get("cand_b").unwrap();
        assert_eq!(chart.values, [60.0, 50.0, 50.0, 50.0, 50.0]);
    }

    #[test]
    fn test_stale_load_is_dropped() {
        let mut controller = DashboardController::new();
        let stale = controller.begin_load();
        let current = controller.begin_load();
        assert!(!controller.complete_load(stale, dataset()));
        assert!(!controller.is_loaded());

        let mut fresh = dataset();
        fresh.candidates_analysis.truncate(1);
        assert!(controller.complete_load(current, fresh));
        assert_eq!(controller.total_len(), 1);

        // A very late completion of the stale load changes nothing.
        assert!(!controller.complete_load(stale, dataset()));
        assert_eq!(controller.total_len(), 1);
    }

    #[test]
    fn test_candidate_lookup_ignores_filter() {
        let mut controller = loaded();
        controller.set_filter(Some(Recommendation::Highly));
        assert_eq!(controller.candidate("cand_a").unwrap().name(), "Mallory");
        let err = controller.candidate("cand_x").unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }
}
