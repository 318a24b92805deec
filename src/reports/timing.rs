use tracing::debug;

use super::aggregator::Extraction;
use super::patterns;
use crate::models::{Metric, TimingSummary};

/// Primary strategy: the timing summary table emitted by csynth.
///
/// ```text
/// +--------+-------+----------+------------+
/// |  Clock | Target| Estimated| Uncertainty|
/// +--------+-------+----------+------------+
/// |ap_clk  |   5.00|     3.634|        0.62|
/// +--------+-------+----------+------------+
/// ```
const TIMING_TABLE: &str = r"(?s)\|\s*Clock\s*\|\s*Target\s*\|\s*Estimated\s*\|\s*Uncertainty\s*\|[^\n]*\n[^\n|]*\n\s*\|([^|\n]+)\|([^|\n]+)\|([^|\n]+)\|([^|\n]+)\|";

const TARGET_FALLBACKS: &[&str] = &[r"(?i)\bTarget\s*[:=]\s*([0-9]+\.?[0-9]*)\s*ns?\b"];
const ESTIMATED_FALLBACKS: &[&str] = &[r"(?i)\bEstimated\s*[:=]\s*([0-9]+\.?[0-9]*)\s*ns?\b"];
const UNCERTAINTY_FALLBACKS: &[&str] =
    &[r"(?i)\bUncertainty\s*[:=]\s*([0-9]+\.?[0-9]*)\s*ns?\b"];

/// Extracts the clock summary from a timing report.
///
/// The target period falls back to the value from the synthesis request
/// when the report omits it. A missing estimate marks the whole summary
/// unavailable with a warning — a value is never fabricated.
pub fn extract(content: &str, fallback_target_ns: f64) -> Extraction<TimingSummary> {
    let mut warnings = Vec::new();
    let mut clock_name = None;
    let mut target = None;
    let mut estimated = None;
    let mut uncertainty = None;

    if let Some(caps) = patterns::first_captures(&[TIMING_TABLE], content) {
        let name = caps[1].trim();
        if !name.is_empty() {
            clock_name = Some(name.to_string());
        }
        target = parse_ns(caps[2].trim(), "target clock period", &mut warnings);
        estimated = parse_ns(caps[3].trim(), "estimated clock period", &mut warnings);
        uncertainty = parse_ns(caps[4].trim(), "clock uncertainty", &mut warnings);
    } else {
        // Labeled-line scraping for layouts without the summary table.
        if let Some(raw) = patterns::first_capture(TARGET_FALLBACKS, content) {
            target = parse_ns(raw, "target clock period", &mut warnings);
        }
        if let Some(raw) = patterns::first_capture(ESTIMATED_FALLBACKS, content) {
            estimated = parse_ns(raw, "estimated clock period", &mut warnings);
        }
        if let Some(raw) = patterns::first_capture(UNCERTAINTY_FALLBACKS, content) {
            uncertainty = parse_ns(raw, "clock uncertainty", &mut warnings);
        }
    }

    let target = target.unwrap_or_else(|| {
        debug!(
            fallback_ns = fallback_target_ns,
            "Timing report omits the target period, using the requested clock"
        );
        fallback_target_ns
    });

    let Some(estimated) = estimated else {
        warnings.push("timing: estimated clock period missing from report".to_string());
        return Extraction {
            value: Metric::Unavailable,
            warnings,
        };
    };

    let summary = TimingSummary::new(
        clock_name,
        target,
        Metric::Known(estimated),
        uncertainty.unwrap_or(0.0),
    );
    Extraction {
        value: Metric::Known(summary),
        warnings,
    }
}

fn parse_ns(raw: &str, field: &str, warnings: &mut Vec<String>) -> Option<f64> {
    match raw.parse::<f64>() {
        Ok(v) if v >= 0.0 => Some(v),
        _ => {
            warnings.push(format!("timing: malformed {} '{}'", field, raw));
            None
        }
    }
}
