use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::metric::Metric;

/// Used/available pair for one FPGA resource type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceUsage {
    pub used: u64,
    /// Device capacity for this resource. `Unavailable` when the report
    /// row is missing — never assumed to be zero or full.
    pub available: Metric<u64>,
}

impl ResourceUsage {
    pub fn new(used: u64, available: Metric<u64>) -> Self {
        Self { used, available }
    }

    /// Fraction of the device consumed, recomputed from used/available.
    /// The report's own percentage row is advisory only and never read.
    /// Undefined when capacity is unknown or zero.
    pub fn utilization(&self) -> Metric<f64> {
        match self.available {
            Metric::Known(avail) if avail > 0 => {
                Metric::Known(self.used as f64 / avail as f64)
            }
            _ => Metric::Unavailable,
        }
    }
}

impl Default for ResourceUsage {
    fn default() -> Self {
        Self {
            used: 0,
            available: Metric::Unavailable,
        }
    }
}

/// Resource utilization summary across the standard fabric resource types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceSummary {
    pub bram: ResourceUsage,
    pub dsp: ResourceUsage,
    pub ff: ResourceUsage,
    pub lut: ResourceUsage,
    /// Resource columns this tool version reports beyond the standard four
    /// (URAM, SRL, ...). Preserved rather than dropped so new tool versions
    /// stay readable. BTreeMap keeps serialization order deterministic.
    pub extra: BTreeMap<String, ResourceUsage>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utilization_recomputed_from_counts() {
        let usage = ResourceUsage::new(10, Metric::Known(40));
        assert_eq!(usage.utilization(), Metric::Known(0.25));
    }

    #[test]
    fn test_utilization_undefined_for_zero_capacity() {
        let usage = ResourceUsage::new(0, Metric::Known(0));
        assert_eq!(usage.utilization(), Metric::Unavailable);
    }

    #[test]
    fn test_utilization_undefined_for_unknown_capacity() {
        let usage = ResourceUsage::new(7, Metric::Unavailable);
        assert_eq!(usage.utilization(), Metric::Unavailable);
    }
}
