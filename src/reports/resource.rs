use super::aggregator::Extraction;
use super::patterns;
use crate::models::{Metric, ResourceSummary, ResourceUsage};

/// Header row of the utilization summary table. The captured cell list
/// names the resource columns for this tool version.
const HEADER_ROW: &str = r"(?m)^\s*\|\s*Name\s*\|(.+)\|\s*$";
const TOTAL_ROW: &str = r"(?m)^\s*\|\s*Total\s*\|(.+)\|\s*$";
const AVAILABLE_ROW: &str = r"(?m)^\s*\|\s*Available\s*\|(.+)\|\s*$";

/// Labeled-line fallbacks when the summary table is absent, populating
/// used counts only.
const BRAM_FALLBACKS: &[&str] = &[r"(?i)\bBRAM(?:_18K)?\s*[:=]\s*(\d+)"];
const DSP_FALLBACKS: &[&str] = &[r"(?i)\bDSP(?:48E?)?\s*[:=]\s*(\d+)"];
const FF_FALLBACKS: &[&str] = &[r"(?i)\bFF\s*[:=]\s*(\d+)"];
const LUT_FALLBACKS: &[&str] = &[r"(?i)\bLUT\s*[:=]\s*(\d+)"];

/// Extracts per-resource used/available counts from a utilization report.
///
/// The report's own percentage row is advisory only and never read; ratios
/// are recomputed downstream from the counts to avoid propagating the
/// tool's rounding. Columns beyond the standard four are preserved in
/// `extra` so future tool versions stay readable.
pub fn extract(content: &str) -> Extraction<ResourceSummary> {
    let mut warnings = Vec::new();

    let header = patterns::first_capture(&[HEADER_ROW], content);
    let totals = patterns::first_capture(&[TOTAL_ROW], content);

    let (Some(header), Some(totals)) = (header, totals) else {
        return extract_fallback(content);
    };

    let columns = split_cells(header);
    let used_cells = split_cells(totals);
    let available_cells = patterns::first_capture(&[AVAILABLE_ROW], content)
        .map(split_cells)
        .unwrap_or_default();
    if available_cells.is_empty() {
        warnings.push("resource: available capacities missing from report".to_string());
    }

    let mut summary = ResourceSummary {
        bram: ResourceUsage::default(),
        dsp: ResourceUsage::default(),
        ff: ResourceUsage::default(),
        lut: ResourceUsage::default(),
        extra: Default::default(),
    };
    let mut seen = [false; 4];

    for (idx, column) in columns.iter().enumerate() {
        let used = parse_count(used_cells.get(idx), column, "used", &mut warnings).unwrap_or(0);
        let available = match parse_count(available_cells.get(idx), column, "available", &mut warnings)
        {
            Some(v) => Metric::Known(v),
            None => Metric::Unavailable,
        };
        let usage = ResourceUsage::new(used, available);

        let upper = column.to_uppercase();
        if upper.starts_with("BRAM") {
            summary.bram = usage;
            seen[0] = true;
        } else if upper.starts_with("DSP") {
            summary.dsp = usage;
            seen[1] = true;
        } else if upper == "FF" {
            summary.ff = usage;
            seen[2] = true;
        } else if upper == "LUT" {
            summary.lut = usage;
            seen[3] = true;
        } else {
            summary.extra.insert(column.clone(), usage);
        }
    }

    for (kind, present) in ["BRAM", "DSP", "FF", "LUT"].iter().zip(seen) {
        if !present {
            warnings.push(format!("resource: {} row missing", kind));
        }
    }

    Extraction {
        value: Metric::Known(summary),
        warnings,
    }
}

/// Per-resource scraping when the summary table is entirely absent.
/// Capacities are unknown on this path, so every `available` stays
/// unavailable rather than defaulting to zero or full.
fn extract_fallback(content: &str) -> Extraction<ResourceSummary> {
    let mut warnings = Vec::new();
    let mut any = false;

    let mut scrape = |fallbacks: &[&str], kind: &str| -> ResourceUsage {
        match patterns::first_capture(fallbacks, content).and_then(|raw| raw.parse::<u64>().ok()) {
            Some(used) => {
                any = true;
                ResourceUsage::new(used, Metric::Unavailable)
            }
            None => {
                warnings.push(format!("resource: {} row missing", kind));
                ResourceUsage::default()
            }
        }
    };

    let summary = ResourceSummary {
        bram: scrape(BRAM_FALLBACKS, "BRAM"),
        dsp: scrape(DSP_FALLBACKS, "DSP"),
        ff: scrape(FF_FALLBACKS, "FF"),
        lut: scrape(LUT_FALLBACKS, "LUT"),
        extra: Default::default(),
    };

    if !any {
        return Extraction::unavailable("resource: utilization summary missing from report");
    }

    Extraction {
        value: Metric::Known(summary),
        warnings,
    }
}

fn split_cells(row: &str) -> Vec<String> {
    row.split('|').map(|cell| cell.trim().to_string()).collect()
}

/// `-` cells mean zero in csynth tables; anything else must be numeric.
fn parse_count(
    cell: Option<&String>,
    column: &str,
    role: &str,
    warnings: &mut Vec<String>,
) -> Option<u64> {
    let cell = cell?;
    if cell == "-" {
        return Some(0);
    }
    match cell.parse::<u64>() {
        Ok(v) => Some(v),
        Err(_) => {
            warnings.push(format!(
                "resource: malformed {} count for {} '{}'",
                role, column, cell
            ));
            None
        }
    }
}
