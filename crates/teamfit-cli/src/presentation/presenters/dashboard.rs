use teamfit_core::{DashboardController, Result, SortKey};
use teamfit_types::{
    AnalysisRequest, CandidateAnalysis, Recommendation, TraitProfile, TRAIT_LABELS,
    TRAIT_MIDPOINT_PCT, TRAIT_NAMES,
};

use crate::presentation::formatters::text::format_initials;
use crate::presentation::view_models::{
    CandidateCardViewModel, CandidateDetailViewModel, DashboardViewModel,
    DistributionEntryViewModel, OverviewViewModel, PendingAnalysisViewModel,
    RankingEntryViewModel, TeamMemberViewModel, TraitEntryViewModel,
};

pub fn present_dashboard(
    controller: &DashboardController,
    pending: Option<&[AnalysisRequest]>,
) -> DashboardViewModel {
    let dataset = controller.dataset();

    let overview = {
        let metadata = dataset.and_then(|d| d.metadata.as_ref());
        let pool = dataset
            .and_then(|d| d.team_insights.as_ref())
            .and_then(|insights| insights.candidate_pool_summary.as_ref());
        OverviewViewModel {
            team_size: metadata.and_then(|m| m.team_size),
            candidates_count: metadata.and_then(|m| m.candidates_count),
            average_compatibility: pool.and_then(|p| p.average_compatibility),
            candidates_above_threshold: pool.and_then(|p| p.candidates_above_threshold),
            generated_at: metadata.and_then(|m| m.timestamp.clone()),
        }
    };

    let team_members = dataset
        .and_then(|d| d.team_summary.as_ref())
        .map(|summary| {
            summary
                .members
                .iter()
                .map(|member| TeamMemberViewModel {
                    name: member.name.clone(),
                    position: member.position.clone(),
                    initials: format_initials(&member.name),
                    // Members list only the axes the backend scored; no
                    // midpoint filling, unlike candidate charts.
                    traits: scored_trait_entries(&TraitProfile::from_raw(&member.traits_summary)),
                })
                .collect()
        })
        .unwrap_or_default();

    // Ranking and distribution summarize the whole pool, filter ignored.
    let all_candidates: &[CandidateAnalysis] =
        dataset.map(|d| d.candidates_analysis.as_slice()).unwrap_or(&[]);

    let mut ranked: Vec<&CandidateAnalysis> = all_candidates.iter().collect();
    ranked.sort_by(|a, b| b.compatibility_score().total_cmp(&a.compatibility_score()));
    let ranking = ranked
        .iter()
        .map(|candidate| RankingEntryViewModel {
            name: candidate.name().to_string(),
            compatibility_score: candidate.compatibility_score(),
            recommendation: candidate.recommendation().to_string(),
        })
        .collect();

    let distribution = build_distribution(all_candidates);

    let candidates = controller
        .visible()
        .iter()
        .map(|candidate| {
            let values = controller
                .charts()
                .get(candidate.id())
                .map(|chart| chart.values)
                .unwrap_or([TRAIT_MIDPOINT_PCT; 5]);
            CandidateCardViewModel {
                id: candidate.id().to_string(),
                name: candidate.name().to_string(),
                position: candidate.candidate_info.position.clone(),
                initials: format_initials(candidate.name()),
                compatibility_score: candidate.compatibility_score(),
                recommendation: candidate.recommendation().to_string(),
                recommendation_rank: candidate.recommendation().rank(),
                top_strengths: candidate
                    .ai_analysis
                    .strengths
                    .iter()
                    .take(2)
                    .cloned()
                    .collect(),
                traits: trait_entries(values),
            }
        })
        .collect();

    let pending_analysis = pending.map(|requests| PendingAnalysisViewModel {
        count: requests.len(),
        candidate_names: requests
            .iter()
            .map(|request| request.candidate_name.clone())
            .collect(),
    });

    DashboardViewModel {
        overview,
        team_members,
        ranking,
        distribution,
        candidates,
        sort: sort_name(controller.sort()).to_string(),
        status_filter: controller
            .filter()
            .map(|status| status.to_string())
            .unwrap_or_else(|| "all".to_string()),
        total_candidates: controller.total_len(),
        visible_candidates: controller.visible_len(),
        pending_analysis,
    }
}

pub fn present_candidate_detail(
    controller: &DashboardController,
    candidate_id: &str,
) -> Result<CandidateDetailViewModel> {
    let candidate = controller.candidate(candidate_id)?;
    let values = controller
        .profile(candidate_id)
        .map(TraitProfile::percentages)
        .unwrap_or([TRAIT_MIDPOINT_PCT; 5]);

    Ok(CandidateDetailViewModel {
        id: candidate.id().to_string(),
        name: candidate.name().to_string(),
        position: candidate.candidate_info.position.clone(),
        initials: format_initials(candidate.name()),
        compatibility_score: candidate.compatibility_score(),
        confidence_level: candidate.ai_analysis.confidence_level,
        recommendation: candidate.recommendation().to_string(),
        recommendation_rank: candidate.recommendation().rank(),
        summary: candidate.ai_analysis.summary.clone(),
        strengths: candidate.ai_analysis.strengths.clone(),
        concerns: candidate.ai_analysis.concerns.clone(),
        recommendations: candidate.ai_analysis.recommendations.clone(),
        traits: trait_entries(values),
    })
}

fn trait_entries(values: [f64; 5]) -> Vec<TraitEntryViewModel> {
    TRAIT_NAMES
        .iter()
        .zip(TRAIT_LABELS.iter())
        .zip(values.iter())
        .map(|((name, label), value)| TraitEntryViewModel {
            label: label.to_string(),
            name: name.to_string(),
            value_pct: *value,
        })
        .collect()
}

fn scored_trait_entries(profile: &TraitProfile) -> Vec<TraitEntryViewModel> {
    (0..TRAIT_NAMES.len())
        .filter_map(|index| {
            profile.axis(index).map(|value| TraitEntryViewModel {
                label: TRAIT_LABELS[index].to_string(),
                name: TRAIT_NAMES[index].to_string(),
                value_pct: value * 100.0,
            })
        })
        .collect()
}

/// Candidate counts per distinct status, best rank first, unknown last.
fn build_distribution(candidates: &[CandidateAnalysis]) -> Vec<DistributionEntryViewModel> {
    let mut entries: Vec<(Recommendation, usize)> = Vec::new();
    for candidate in candidates {
        let status = candidate.recommendation();
        match entries.iter_mut().find(|(seen, _)| seen.matches(status)) {
            Some((_, count)) => *count += 1,
            None => entries.push((status.clone(), 1)),
        }
    }
    entries.sort_by(|a, b| b.0.rank().cmp(&a.0.rank()));
    entries
        .into_iter()
        .map(|(status, count)| DistributionEntryViewModel {
            status: status.to_string(),
            count,
        })
        .collect()
}

fn sort_name(sort: SortKey) -> &'static str {
    match sort {
        SortKey::Compatibility => "compatibility",
        SortKey::Name => "name",
        SortKey::Recommendation => "recommendation",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use teamfit_testing::fixtures;

    fn loaded() -> DashboardController {
        let mut controller = DashboardController::new();
        let token = controller.begin_load();
        assert!(controller.complete_load(token, fixtures::dataset()));
        controller
    }

    #[test]
    fn test_ranking_covers_whole_pool_best_first() {
        let mut controller = loaded();
        controller.set_filter(Some(Recommendation::Highly));
        let model = present_dashboard(&controller, None);

        assert_eq!(model.visible_candidates, 1);
        assert_eq!(model.ranking.len(), 4);
        assert_eq!(model.ranking[0].name, "Jordan Banks");
        assert_eq!(model.ranking[3].name, "Tom Oduya");
    }

    #[test]
    fn test_distribution_counts_by_rank_order() {
        let controller = loaded();
        let model = present_dashboard(&controller, None);

        let statuses: Vec<&str> = model
            .distribution
            .iter()
            .map(|entry| entry.status.as_str())
            .collect();
        assert_eq!(
            statuses,
            vec![
                "HIGHLY RECOMMENDED",
                "RECOMMENDED",
                "CONDITIONALLY RECOMMENDED",
                "NOT RECOMMENDED"
            ]
        );
        assert!(model.distribution.iter().all(|entry| entry.count == 1));
    }

    #[test]
    fn test_cards_take_at_most_two_strengths() {
        let controller = loaded();
        let model = present_dashboard(&controller, None);
        assert!(model
            .candidates
            .iter()
            .all(|card| card.top_strengths.len() <= 2));
    }

    #[test]
    fn test_card_traits_match_chart_registry() {
        let controller = loaded();
        let model = present_dashboard(&controller, None);
        let card = model
            .candidates
            .iter()
            .find(|card| card.id == "cand_01")
            .unwrap();
        let chart = controller.charts().get("cand_01").unwrap();
        let values: Vec<f64> = card.traits.iter().map(|t| t.value_pct).collect();
        assert_eq!(values, chart.values.to_vec());
    }

    #[test]
    fn test_pending_analysis_listed_when_present() {
        let controller = loaded();
        let requests = vec![AnalysisRequest {
            agent_id: "agent_101".to_string(),
            candidate_name: "Jordan Banks".to_string(),
            role: "Backend Engineer".to_string(),
        }];
        let model = present_dashboard(&controller, Some(&requests));
        let pending = model.pending_analysis.unwrap();
        assert_eq!(pending.count, 1);
        assert_eq!(pending.candidate_names, vec!["Jordan Banks"]);

        let model = present_dashboard(&controller, None);
        assert!(model.pending_analysis.is_none());
    }

    #[test]
    fn test_detail_carries_full_lists() {
        let controller = loaded();
        let detail = present_candidate_detail(&controller, "cand_01").unwrap();
        assert_eq!(detail.initials, "JB");
        assert!(detail.strengths.len() >= 2);
        assert!(!detail.summary.is_empty());
        assert_eq!(detail.traits.len(), 5);
    }

    #[test]
    fn test_detail_unknown_candidate_fails() {
        let controller = loaded();
        assert!(present_candidate_detail(&controller, "cand_99").is_err());
    }

    #[test]
    fn test_member_traits_skip_unscored_axes() {
        let dataset: teamfit_types::AnalysisDataset = serde_json::from_str(
            r#"{
                "team_summary": {
                    "members": [
                        { "name": "Ana Ruiz", "traits_summary": { "openness": 0.7 } }
                    ]
                },
                "candidates_analysis": []
            }"#,
        )
        .unwrap();
        let mut controller = DashboardController::new();
        let token = controller.begin_load();
        assert!(controller.complete_load(token, dataset));

        let model = present_dashboard(&controller, None);
        let member = &model.team_members[0];
        assert_eq!(member.traits.len(), 1);
        assert_eq!(member.traits[0].name, "Openness");
        assert_eq!(member.traits[0].value_pct, 70.0);
    }
}
