/// Render a 0..=100 percentage as a fixed-width meter: `[████░░░░] 52.0%`
pub fn build_meter(pct: f64, width: usize) -> String {
    let pct = pct.clamp(0.0, 100.0);
    let filled = ((pct / 100.0) * width as f64) as usize;
    let filled = filled.min(width);
    let empty = width - filled;

    format!("[{}{}] {:.1}%", "█".repeat(filled), "░".repeat(empty), pct)
}

/// Compatibility scores arrive on a 0..=1 scale and display as percentages.
pub fn format_score(score: f64) -> String {
    format!("{:.1}%", score * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_meter_midpoint() {
        assert_eq!(build_meter(50.0, 10), "[█████░░░░░] 50.0%");
    }

    #[test]
    fn test_build_meter_empty() {
        assert_eq!(build_meter(0.0, 4), "[░░░░] 0.0%");
    }

    #[test]
    fn test_build_meter_full() {
        assert_eq!(build_meter(100.0, 4), "[████] 100.0%");
    }

    #[test]
    fn test_build_meter_clamps_out_of_range() {
        assert_eq!(build_meter(140.0, 4), "[████] 100.0%");
    }

    #[test]
    fn test_format_score_scales_to_percent() {
        assert_eq!(format_score(0.92), "92.0%");
        assert_eq!(format_score(0.555), "55.5%");
    }
}
