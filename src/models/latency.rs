use serde::{Deserialize, Serialize};

use super::metric::Metric;

/// Loop trip count as reported by the tool. Loops whose bound the tool
/// cannot determine report `Unbounded`, never a numeric sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum TripCount {
    Bounded(u64),
    Unbounded,
}

/// Per-loop latency statistics from the nested loop detail table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoopLatency {
    /// Loop label from the report, with the nesting dashes stripped.
    pub name: String,
    pub trip_count: TripCount,
    /// Worst-case loop latency in clock cycles.
    pub latency: u64,
    /// Achieved initiation interval for pipelined loops. Distinct from
    /// latency; `Unavailable` when the loop is not pipelined.
    pub iteration_interval: Metric<u64>,
}

/// Design-level latency summary with the per-loop breakdown nested inside.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatencySummary {
    pub latency_cycles_min: u64,
    pub latency_cycles_max: u64,
    /// Cycles between successive invocations of the design.
    pub interval_min: u64,
    pub interval_max: u64,
    /// Pipeline type column of the summary row ("none", "function", ...).
    pub pipeline_type: Option<String>,
    /// Pipeline depth when the tool emits it for pipelined functions.
    pub pipeline_depth: Option<u64>,
    /// Loop entries in report order: outer loops precede inner loops.
    pub loops: Vec<LoopLatency>,
}
