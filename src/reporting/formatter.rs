use std::fmt::Write as _;

use crate::models::{EvaluationResult, Metric, TripCount};
use crate::utils::formatting::{format_period, format_utilization};

/// Renders an evaluation result as a human-readable summary. The core
/// itself never prints; the CLI decides where this goes.
pub fn format_evaluation_text(result: &EvaluationResult) -> String {
    let mut out = String::new();

    out.push_str("Timing\n");
    match result.timing.known() {
        Some(timing) => {
            if let Some(clock) = &timing.clock_name {
                let _ = writeln!(out, "  clock:       {}", clock);
            }
            let _ = writeln!(
                out,
                "  target:      {}",
                format_period(timing.clock_period_target_ns)
            );
            let _ = writeln!(
                out,
                "  estimated:   {}",
                match timing.clock_period_estimated_ns {
                    Metric::Known(ns) => format_period(ns),
                    Metric::Unavailable => "n/a".to_string(),
                }
            );
            let _ = writeln!(
                out,
                "  uncertainty: {}",
                format_period(timing.clock_uncertainty_ns)
            );
            let _ = writeln!(
                out,
                "  timing met:  {}",
                match timing.timing_met {
                    Metric::Known(true) => "yes",
                    Metric::Known(false) => "no",
                    Metric::Unavailable => "n/a",
                }
            );
        }
        None => out.push_str("  unavailable\n"),
    }

    out.push_str("\nLatency\n");
    match result.latency.known() {
        Some(latency) => {
            let _ = writeln!(
                out,
                "  latency:     {} - {} cycles",
                latency.latency_cycles_min, latency.latency_cycles_max
            );
            let _ = writeln!(
                out,
                "  interval:    {} - {} cycles",
                latency.interval_min, latency.interval_max
            );
            if let Some(pipeline) = &latency.pipeline_type {
                let _ = writeln!(out, "  pipeline:    {}", pipeline);
            }
            if let Some(depth) = latency.pipeline_depth {
                let _ = writeln!(out, "  depth:       {}", depth);
            }
            for entry in &latency.loops {
                let trip = match entry.trip_count {
                    TripCount::Bounded(n) => n.to_string(),
                    TripCount::Unbounded => "unbounded".to_string(),
                };
                let ii = match entry.iteration_interval {
                    Metric::Known(ii) => format!(", II {}", ii),
                    Metric::Unavailable => String::new(),
                };
                let _ = writeln!(
                    out,
                    "  loop {}: {} cycles, trip {}{}",
                    entry.name, entry.latency, trip, ii
                );
            }
        }
        None => out.push_str("  unavailable\n"),
    }

    out.push_str("\nResources\n");
    match result.resource.known() {
        Some(resource) => {
            let rows = [
                ("BRAM", &resource.bram),
                ("DSP", &resource.dsp),
                ("FF", &resource.ff),
                ("LUT", &resource.lut),
            ];
            for (name, usage) in rows {
                let _ = writeln!(
                    out,
                    "  {:<5} {:>8} / {:<8} ({})",
                    name,
                    usage.used,
                    match usage.available {
                        Metric::Known(a) => a.to_string(),
                        Metric::Unavailable => "?".to_string(),
                    },
                    format_utilization(usage.utilization())
                );
            }
            for (name, usage) in &resource.extra {
                let _ = writeln!(
                    out,
                    "  {:<5} {:>8} / {:<8} ({})",
                    name,
                    usage.used,
                    match usage.available {
                        Metric::Known(a) => a.to_string(),
                        Metric::Unavailable => "?".to_string(),
                    },
                    format_utilization(usage.utilization())
                );
            }
        }
        None => out.push_str("  unavailable\n"),
    }

    if !result.warnings.is_empty() {
        out.push_str("\nWarnings\n");
        for warning in &result.warnings {
            let _ = writeln!(out, "  - {}", warning);
        }
    }

    out
}
