use serde::{Deserialize, Serialize};

use super::metric::Metric;

/// Clock summary extracted from the timing section of a synthesis report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingSummary {
    /// Clock name as reported by the tool (e.g. "ap_clk"), if present.
    pub clock_name: Option<String>,
    /// Requested clock period in nanoseconds.
    pub clock_period_target_ns: f64,
    /// Tool's estimated achievable period. Never fabricated when the report
    /// omits it.
    pub clock_period_estimated_ns: Metric<f64>,
    /// Clock uncertainty in nanoseconds. Zero when the report omits it.
    pub clock_uncertainty_ns: f64,
    /// Whether the estimate meets the target. Derived at construction from
    /// the two period fields; `Unavailable` when the estimate is missing.
    pub timing_met: Metric<bool>,
}

impl TimingSummary {
    pub fn new(
        clock_name: Option<String>,
        clock_period_target_ns: f64,
        clock_period_estimated_ns: Metric<f64>,
        clock_uncertainty_ns: f64,
    ) -> Self {
        let timing_met = clock_period_estimated_ns.map(|est| est <= clock_period_target_ns);
        Self {
            clock_name,
            clock_period_target_ns,
            clock_period_estimated_ns,
            clock_uncertainty_ns,
            timing_met,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timing_met_when_estimate_under_target() {
        let summary = TimingSummary::new(None, 5.0, Metric::Known(3.2), 0.62);
        assert_eq!(summary.timing_met, Metric::Known(true));
    }

    #[test]
    fn test_timing_met_at_exact_target() {
        let summary = TimingSummary::new(None, 5.0, Metric::Known(5.0), 0.0);
        assert_eq!(summary.timing_met, Metric::Known(true));
    }

    #[test]
    fn test_timing_not_met_when_estimate_over_target() {
        let summary = TimingSummary::new(None, 5.0, Metric::Known(5.01), 0.0);
        assert_eq!(summary.timing_met, Metric::Known(false));
    }

    #[test]
    fn test_timing_met_unavailable_without_estimate() {
        let summary = TimingSummary::new(None, 5.0, Metric::Unavailable, 0.0);
        assert_eq!(summary.timing_met, Metric::Unavailable);
    }
}
