use clap::ValueEnum;
use std::fmt;
use teamfit_core::SortKey;
use teamfit_types::Recommendation;

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text output
    Plain,
    /// Machine-readable JSON output
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Plain => write!(f, "plain"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Sort order for the dashboard candidate grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum SortField {
    /// Compatibility score, best first
    Compatibility,
    /// Candidate name, A to Z
    Name,
    /// Recommendation rank, best first
    Recommendation,
}

impl SortField {
    pub fn to_sort_key(self) -> SortKey {
        match self {
            SortField::Compatibility => SortKey::Compatibility,
            SortField::Name => SortKey::Name,
            SortField::Recommendation => SortKey::Recommendation,
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortField::Compatibility => write!(f, "compatibility"),
            SortField::Name => write!(f, "name"),
            SortField::Recommendation => write!(f, "recommendation"),
        }
    }
}

/// Recommendation-status filter for the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum RecommendationFilter {
    /// No filtering
    All,
    /// HIGHLY RECOMMENDED only
    Highly,
    /// RECOMMENDED only
    Recommended,
    /// CONDITIONALLY RECOMMENDED only
    Conditionally,
    /// NOT RECOMMENDED only
    Not,
}

impl RecommendationFilter {
    /// `None` means show everything.
    pub fn to_status(self) -> Option<Recommendation> {
        match self {
            RecommendationFilter::All => None,
            RecommendationFilter::Highly => Some(Recommendation::Highly),
            RecommendationFilter::Recommended => Some(Recommendation::Recommended),
            RecommendationFilter::Conditionally => Some(Recommendation::Conditionally),
            RecommendationFilter::Not => Some(Recommendation::Not),
        }
    }
}

impl fmt::Display for RecommendationFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecommendationFilter::All => write!(f, "all"),
            RecommendationFilter::Highly => write!(f, "highly"),
            RecommendationFilter::Recommended => write!(f, "recommended"),
            RecommendationFilter::Conditionally => write!(f, "conditionally"),
            RecommendationFilter::Not => write!(f, "not"),
        }
    }
}
