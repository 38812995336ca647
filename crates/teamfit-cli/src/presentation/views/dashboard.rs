use std::fmt;

use owo_colors::OwoColorize;

use crate::presentation::formatters::display::{build_meter, format_score};
use crate::presentation::formatters::options::FormatOptions;
use crate::presentation::formatters::text::recommendation_label;
use crate::presentation::formatters::time::{format_date, format_relative_time};
use crate::presentation::view_models::{
    CandidateCardViewModel, CandidateDetailViewModel, DashboardViewModel, TraitEntryViewModel,
};

const DIVIDER_WIDTH: usize = 72;
const METER_WIDTH: usize = 20;

/// Score color bands match the web dashboard: green from 0.8, blue from 0.6,
/// amber from 0.4, red below.
fn paint_score(text: &str, score: f64, enable_color: bool) -> String {
    if !enable_color {
        return text.to_string();
    }
    if score >= 0.8 {
        text.green().to_string()
    } else if score >= 0.6 {
        text.blue().to_string()
    } else if score >= 0.4 {
        text.yellow().to_string()
    } else {
        text.red().to_string()
    }
}

fn paint_recommendation(text: &str, rank: u8, enable_color: bool) -> String {
    if !enable_color {
        return text.to_string();
    }
    match rank {
        4 => text.green().to_string(),
        3 => text.blue().to_string(),
        2 => text.yellow().to_string(),
        1 => text.red().to_string(),
        _ => text.dimmed().to_string(),
    }
}

fn trait_summary_line(traits: &[TraitEntryViewModel]) -> String {
    traits
        .iter()
        .map(|entry| format!("{} {:.0}%", entry.label, entry.value_pct))
        .collect::<Vec<_>>()
        .join("  ")
}

// --------------------------------------------------------
// Dashboard View
// --------------------------------------------------------

pub struct DashboardView<'a> {
    model: &'a DashboardViewModel,
    options: &'a FormatOptions,
}

impl<'a> DashboardView<'a> {
    pub fn new(model: &'a DashboardViewModel, options: &'a FormatOptions) -> Self {
        Self { model, options }
    }

    fn render_overview(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let overview = &self.model.overview;
        writeln!(f, "OVERVIEW")?;
        writeln!(f, "{}", "-".repeat(DIVIDER_WIDTH))?;

        let count = |value: Option<u32>| {
            value
                .map(|n| n.to_string())
                .unwrap_or_else(|| "N/A".to_string())
        };
        writeln!(f, "Team size:          {}", count(overview.team_size))?;
        writeln!(f, "Candidates:         {}", count(overview.candidates_count))?;

        let average = overview
            .average_compatibility
            .map(|score| paint_score(&format_score(score), score, self.options.enable_color))
            .unwrap_or_else(|| "N/A".to_string());
        writeln!(f, "Avg compatibility:  {}", average)?;
        writeln!(
            f,
            "Above threshold:    {}",
            count(overview.candidates_above_threshold)
        )?;

        if let Some(ts) = &overview.generated_at {
            let shown = if self.options.relative_time {
                format_relative_time(ts)
            } else {
                format_date(ts)
            };
            writeln!(f, "Analyzed:           {}", shown)?;
        }
        Ok(())
    }

    fn render_pending(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let Some(pending) = &self.model.pending_analysis else {
            return Ok(());
        };
        let line = format!(
            "{} interview(s) queued for the next analysis run: {}",
            pending.count,
            pending.candidate_names.join(", ")
        );
        writeln!(f)?;
        if self.options.enable_color {
            writeln!(f, "⏳ {}", line.yellow())
        } else {
            writeln!(f, "Pending: {}", line)
        }
    }

    fn render_team(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.model.team_members.is_empty() {
            return Ok(());
        }
        writeln!(f)?;
        writeln!(f, "CURRENT TEAM ({})", self.model.team_members.len())?;
        writeln!(f, "{}", "-".repeat(DIVIDER_WIDTH))?;
        for member in &self.model.team_members {
            writeln!(
                f,
                "[{}] {:<24} {}",
                member.initials, member.name, member.position
            )?;
            if !member.traits.is_empty() {
                writeln!(f, "     {}", trait_summary_line(&member.traits))?;
            }
        }
        Ok(())
    }

    fn render_ranking(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.model.ranking.is_empty() {
            return Ok(());
        }
        writeln!(f)?;
        writeln!(f, "COMPATIBILITY RANKING")?;
        writeln!(f, "{}", "-".repeat(DIVIDER_WIDTH))?;
        for (position, entry) in self.model.ranking.iter().enumerate() {
            let meter = build_meter(entry.compatibility_score * 100.0, METER_WIDTH);
            writeln!(
                f,
                "{:>2}. {:<24} {}",
                position + 1,
                entry.name,
                paint_score(&meter, entry.compatibility_score, self.options.enable_color)
            )?;
        }
        Ok(())
    }

    fn render_distribution(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.model.distribution.is_empty() {
            return Ok(());
        }
        writeln!(f)?;
        writeln!(f, "RECOMMENDATION MIX")?;
        writeln!(f, "{}", "-".repeat(DIVIDER_WIDTH))?;
        for entry in &self.model.distribution {
            writeln!(
                f,
                "{:<28} {}",
                recommendation_label(&entry.status),
                entry.count
            )?;
        }
        Ok(())
    }

    fn render_candidates(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f)?;
        writeln!(
            f,
            "CANDIDATES (showing {} of {}, sort: {}, status: {})",
            self.model.visible_candidates,
            self.model.total_candidates,
            self.model.sort,
            self.model.status_filter.to_lowercase()
        )?;
        writeln!(f, "{}", "-".repeat(DIVIDER_WIDTH))?;

        if self.model.candidates.is_empty() {
            if self.model.total_candidates == 0 {
                writeln!(f, "No candidates analyzed yet.")?;
            } else {
                writeln!(f, "No candidates match the current filter.")?;
            }
            return Ok(());
        }

        for card in &self.model.candidates {
            self.render_card(f, card)?;
        }
        Ok(())
    }

    fn render_card(&self, f: &mut fmt::Formatter, card: &CandidateCardViewModel) -> fmt::Result {
        let score = format_score(card.compatibility_score);
        let label = recommendation_label(&card.recommendation);
        writeln!(
            f,
            "[{}] {:<24} {:<22} {}  {}",
            card.initials,
            card.name,
            card.position,
            paint_score(&score, card.compatibility_score, self.options.enable_color),
            paint_recommendation(&label, card.recommendation_rank, self.options.enable_color)
        )?;
        writeln!(f, "     {}", trait_summary_line(&card.traits))?;
        for strength in &card.top_strengths {
            writeln!(f, "     + {}", strength)?;
        }
        Ok(())
    }
}

impl<'a> fmt::Display for DashboardView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Team Compatibility Dashboard")?;
        writeln!(f)?;
        self.render_overview(f)?;
        self.render_pending(f)?;
        self.render_team(f)?;
        self.render_ranking(f)?;
        self.render_distribution(f)?;
        self.render_candidates(f)?;
        Ok(())
    }
}

// --------------------------------------------------------
// Candidate Detail View
// --------------------------------------------------------

pub struct CandidateDetailView<'a> {
    model: &'a CandidateDetailViewModel,
    options: &'a FormatOptions,
}

impl<'a> CandidateDetailView<'a> {
    pub fn new(model: &'a CandidateDetailViewModel, options: &'a FormatOptions) -> Self {
        Self { model, options }
    }

    fn render_list(
        &self,
        f: &mut fmt::Formatter,
        heading: &str,
        bullet: &str,
        items: &[String],
    ) -> fmt::Result {
        if items.is_empty() {
            return Ok(());
        }
        writeln!(f)?;
        writeln!(f, "{}", heading)?;
        writeln!(f, "{}", "-".repeat(DIVIDER_WIDTH))?;
        for item in items {
            writeln!(f, "{} {}", bullet, item)?;
        }
        Ok(())
    }
}

impl<'a> fmt::Display for CandidateDetailView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let model = self.model;
        writeln!(f, "{} - Detailed Analysis", model.name)?;
        writeln!(f, "{} ({})", model.position, model.id)?;
        writeln!(f, "{}", "=".repeat(DIVIDER_WIDTH))?;

        let score = format_score(model.compatibility_score);
        write!(
            f,
            "Compatibility: {}   Verdict: {}",
            paint_score(&score, model.compatibility_score, self.options.enable_color),
            paint_recommendation(
                &recommendation_label(&model.recommendation),
                model.recommendation_rank,
                self.options.enable_color
            )
        )?;
        if let Some(confidence) = model.confidence_level {
            write!(f, "   Confidence: {:.0}%", confidence * 100.0)?;
        }
        writeln!(f)?;

        if !model.summary.is_empty() {
            writeln!(f)?;
            writeln!(f, "AI Analysis Summary")?;
            writeln!(f, "{}", "-".repeat(DIVIDER_WIDTH))?;
            writeln!(f, "{}", model.summary)?;
        }

        if !model.traits.is_empty() {
            writeln!(f)?;
            writeln!(f, "Personality Profile")?;
            writeln!(f, "{}", "-".repeat(DIVIDER_WIDTH))?;
            for entry in &model.traits {
                writeln!(
                    f,
                    "{:<18} {}",
                    entry.name,
                    build_meter(entry.value_pct, METER_WIDTH)
                )?;
            }
        }

        self.render_list(f, "Strengths", "+", &model.strengths)?;
        self.render_list(f, "Areas of Consideration", "-", &model.concerns)?;
        self.render_list(f, "Recommendations", "*", &model.recommendations)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::presenters::present_dashboard;
    use teamfit_core::DashboardController;
    use teamfit_testing::fixtures;

    fn plain() -> FormatOptions {
        FormatOptions {
            enable_color: false,
            relative_time: false,
        }
    }

    fn loaded() -> DashboardController {
        let mut controller = DashboardController::new();
        let token = controller.begin_load();
        assert!(controller.complete_load(token, fixtures::dataset()));
        controller
    }

    #[test]
    fn test_dashboard_lists_candidates_in_sort_order() {
        let controller = loaded();
        let model = present_dashboard(&controller, None);
        let output = DashboardView::new(&model, &plain()).to_string();

        let jordan = output.find("Jordan Banks").unwrap();
        let tom = output.find("Tom Oduya").unwrap();
        assert!(jordan < tom);
        assert!(output.contains("92.0%"));
        assert!(output.contains("Highly Recommended"));
    }

    #[test]
    fn test_dashboard_overview_falls_back_to_na() {
        let mut controller = DashboardController::new();
        let token = controller.begin_load();
        let dataset: teamfit_types::AnalysisDataset =
            serde_json::from_str(r#"{"candidates_analysis": []}"#).unwrap();
        assert!(controller.complete_load(token, dataset));

        let model = present_dashboard(&controller, None);
        let output = DashboardView::new(&model, &plain()).to_string();
        assert!(output.contains("Team size:          N/A"));
        assert!(output.contains("No candidates analyzed yet."));
    }

    #[test]
    fn test_dashboard_filtered_empty_state() {
        let mut controller = loaded();
        controller.set_filter(Some(teamfit_types::Recommendation::Other(
            "ON HOLD".to_string(),
        )));
        let model = present_dashboard(&controller, None);
        let output = DashboardView::new(&model, &plain()).to_string();
        assert!(output.contains("No candidates match the current filter."));
    }

    #[test]
    fn test_dashboard_shows_pending_queue() {
        let controller = loaded();
        let requests = vec![teamfit_types::AnalysisRequest {
            agent_id: "agent_101".to_string(),
            candidate_name: "Jordan Banks".to_string(),
            role: "Backend Engineer".to_string(),
        }];
        let model = present_dashboard(&controller, Some(&requests));
        let output = DashboardView::new(&model, &plain()).to_string();
        assert!(output.contains("1 interview(s) queued for the next analysis run: Jordan Banks"));
    }

    #[test]
    fn test_detail_renders_all_sections() {
        let controller = loaded();
        let model =
            crate::presentation::presenters::present_candidate_detail(&controller, "cand_01")
                .unwrap();
        let output = CandidateDetailView::new(&model, &plain()).to_string();

        assert!(output.contains("Jordan Banks - Detailed Analysis"));
        assert!(output.contains("Confidence: 88%"));
        assert!(output.contains("AI Analysis Summary"));
        assert!(output.contains("Personality Profile"));
        assert!(output.contains("Areas of Consideration"));
        assert!(output.contains("+ Deep distributed-systems experience"));
    }
}
