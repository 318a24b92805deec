use crate::models::{EvaluationResult, LatencySummary, Metric, ResourceSummary, TimingSummary};

/// Partial result of one extractor: the summary (possibly unavailable)
/// plus the warnings recovered while parsing it.
#[derive(Debug)]
pub struct Extraction<T> {
    pub value: Metric<T>,
    pub warnings: Vec<String>,
}

impl<T> Extraction<T> {
    pub fn known(value: T) -> Self {
        Self {
            value: Metric::Known(value),
            warnings: Vec::new(),
        }
    }

    pub fn unavailable(warning: impl Into<String>) -> Self {
        Self {
            value: Metric::Unavailable,
            warnings: vec![warning.into()],
        }
    }

    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }
}

/// Merges the three partial results and the locator's not-found signals
/// into one result. This is the terminal sink: it never fails, so partial
/// evaluations remain usable — a resource estimate is still worth
/// returning when the timing report is missing.
///
/// `None` for a sub-result means the report artifact was never located.
/// Warnings accumulate in fixed order (timing, latency, resource) so
/// identical inputs produce identical results.
pub fn aggregate(
    timing: Option<Extraction<TimingSummary>>,
    latency: Option<Extraction<LatencySummary>>,
    resource: Option<Extraction<ResourceSummary>>,
) -> EvaluationResult {
    let mut warnings = Vec::new();

    let timing = merge(timing, "timing report not found", &mut warnings);
    let latency = merge(latency, "latency report not found", &mut warnings);
    let resource = merge(resource, "resource report not found", &mut warnings);

    EvaluationResult {
        timing,
        latency,
        resource,
        warnings,
    }
}

fn merge<T>(
    extraction: Option<Extraction<T>>,
    missing_msg: &str,
    warnings: &mut Vec<String>,
) -> Metric<T> {
    match extraction {
        Some(e) => {
            warnings.extend(e.warnings);
            e.value
        }
        None => {
            warnings.push(missing_msg.to_string());
            Metric::Unavailable
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aggregate_all_missing_still_returns() {
        let result = aggregate(None, None, None);
        assert!(!result.is_complete());
        assert_eq!(
            result.warnings,
            vec![
                "timing report not found",
                "latency report not found",
                "resource report not found",
            ]
        );
    }

    #[test]
    fn test_aggregate_partial_keeps_known_summaries() {
        let timing = Extraction::known(TimingSummary::new(
            None,
            5.0,
            Metric::Known(3.2),
            0.0,
        ));
        let result = aggregate(Some(timing), None, None);
        assert!(result.timing.is_known());
        assert_eq!(result.latency, Metric::Unavailable);
        assert_eq!(result.warnings.len(), 2);
    }

    #[test]
    fn test_aggregate_preserves_warning_order() {
        let timing: Extraction<TimingSummary> = Extraction::unavailable("timing: estimate missing");
        let resource: Extraction<ResourceSummary> =
            Extraction::unavailable("resource: summary missing");
        let result = aggregate(Some(timing), None, Some(resource));
        assert_eq!(
            result.warnings,
            vec![
                "timing: estimate missing",
                "latency report not found",
                "resource: summary missing",
            ]
        );
    }
}
