use serde::{Deserialize, Serialize};

use super::latency::LatencySummary;
use super::metric::Metric;
use super::resource::ResourceSummary;
use super::timing::TimingSummary;

/// The aggregate result of one synthesis evaluation. Immutable once
/// constructed; this is the sole value returned to the caller.
///
/// Any sub-summary may be `Unavailable` when its report was missing or
/// unparseable — partial evaluations stay usable because synthesis runs
/// are expensive. Every unavailable sub-summary has a matching entry in
/// `warnings`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub timing: Metric<TimingSummary>,
    pub latency: Metric<LatencySummary>,
    pub resource: Metric<ResourceSummary>,
    /// Extraction problems recovered into messages, in deterministic order
    /// (timing first, then latency, then resource).
    pub warnings: Vec<String>,
}

impl EvaluationResult {
    /// True when all three sub-summaries were extracted.
    pub fn is_complete(&self) -> bool {
        self.timing.is_known() && self.latency.is_known() && self.resource.is_known()
    }
}
