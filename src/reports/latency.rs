use regex::Regex;

use super::aggregator::Extraction;
use super::patterns;
use crate::models::{LatencySummary, LoopLatency, Metric, TripCount};

/// Primary strategy: the latency summary row emitted by csynth.
///
/// ```text
/// +-----+-----+-----+-----+---------+
/// |  Latency  |  Interval | Pipeline|
/// | min | max | min | max |   Type  |
/// +-----+-----+-----+-----+---------+
/// |  101|  101|  102|  102|   none  |
/// +-----+-----+-----+-----+---------+
/// ```
const LATENCY_TABLE: &str = r"(?s)\|\s*min\s*\|\s*max\s*\|\s*min\s*\|\s*max\s*\|[^\n]*\n[^\n|]*\n\s*\|([^|\n]+)\|([^|\n]+)\|([^|\n]+)\|([^|\n]+)\|([^|\n]+)\|";

/// Fallback: a bare five-column numeric row ending in a pipeline-type
/// word, for layouts where the two-line header is mangled. The type-word
/// alternation keeps loop-detail rows (ending in yes/no) from matching.
const LATENCY_ROW_FALLBACK: &str =
    r"\|\s*(\d+)\s*\|\s*(\d+)\s*\|\s*(\d+)\s*\|\s*(\d+)\s*\|\s*(none|function|dataflow)\s*\|";

const PIPELINE_DEPTH: &str = r"(?i)\bPipeline\s*Depth\s*[:=]?\s*(\d+)";

/// One row of the nested `* Loop:` detail table. The leading dashes on the
/// loop name encode nesting depth; report order is outer-before-inner and
/// must be preserved.
const LOOP_ROW: &str = r"(?m)^\s*\|(\s*-+[^|\n]*)\|([^|\n]+)\|([^|\n]+)\|([^|\n]+)\|([^|\n]+)\|([^|\n]+)\|([^|\n]+)\|([^|\n]+)\|";

/// Extracts the design-level latency summary and the per-loop breakdown.
///
/// Absence of the loop table is normal (combinational designs omit it);
/// absence of the top-level summary marks the whole extraction unavailable
/// with a warning.
pub fn extract(content: &str) -> Extraction<LatencySummary> {
    let mut warnings = Vec::new();

    let Some(caps) = patterns::first_captures(&[LATENCY_TABLE, LATENCY_ROW_FALLBACK], content)
    else {
        return Extraction::unavailable("latency: design-level summary missing from report");
    };

    let latency_min = parse_cycles(caps[1].trim(), "latency min", &mut warnings);
    let latency_max = parse_cycles(caps[2].trim(), "latency max", &mut warnings);
    let interval_min = parse_cycles(caps[3].trim(), "interval min", &mut warnings);
    let interval_max = parse_cycles(caps[4].trim(), "interval max", &mut warnings);

    let (Some(latency_min), Some(latency_max), Some(interval_min), Some(interval_max)) =
        (latency_min, latency_max, interval_min, interval_max)
    else {
        // Variable-latency designs report `?` here; without the design
        // totals the summary is not usable.
        return Extraction {
            value: Metric::Unavailable,
            warnings,
        };
    };

    let pipeline_type = match caps[5].trim() {
        "" | "-" => None,
        other => Some(other.to_string()),
    };

    let pipeline_depth = patterns::first_capture(&[PIPELINE_DEPTH], content)
        .and_then(|raw| raw.parse::<u64>().ok());

    let loops = extract_loops(content, &mut warnings);

    Extraction {
        value: Metric::Known(LatencySummary {
            latency_cycles_min: latency_min,
            latency_cycles_max: latency_max,
            interval_min,
            interval_max,
            pipeline_type,
            pipeline_depth,
            loops,
        }),
        warnings,
    }
}

fn extract_loops(content: &str, warnings: &mut Vec<String>) -> Vec<LoopLatency> {
    // Scope the scan to the loop detail section when the marker is present;
    // the row shape alone identifies loops otherwise.
    let section = match content.find("* Loop:") {
        Some(idx) => &content[idx..],
        None => content,
    };

    let row_re = Regex::new(LOOP_ROW).unwrap();
    let mut loops = Vec::new();

    for caps in row_re.captures_iter(section) {
        let name = caps[1].trim().trim_start_matches('-').trim().to_string();

        let latency = match caps[3].trim().parse::<u64>() {
            Ok(v) => v,
            Err(_) => {
                warnings.push(format!(
                    "latency: loop '{}' has non-numeric latency '{}', row skipped",
                    name,
                    caps[3].trim()
                ));
                continue;
            }
        };

        // Achieved initiation interval; `-` means the loop is not pipelined.
        let iteration_interval = match caps[5].trim().parse::<u64>() {
            Ok(v) => Metric::Known(v),
            Err(_) => Metric::Unavailable,
        };

        let trip_count = match caps[7].trim().parse::<u64>() {
            Ok(v) => TripCount::Bounded(v),
            // `?` for bounds the tool cannot determine.
            Err(_) => TripCount::Unbounded,
        };

        loops.push(LoopLatency {
            name,
            trip_count,
            latency,
            iteration_interval,
        });
    }

    loops
}

fn parse_cycles(raw: &str, field: &str, warnings: &mut Vec<String>) -> Option<u64> {
    match raw.parse::<u64>() {
        Ok(v) => Some(v),
        Err(_) => {
            warnings.push(format!("latency: malformed {} '{}'", field, raw));
            None
        }
    }
}
