use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use hlseval::errors::HlsEvalError;
use hlseval::models::{Metric, TripCount};
use hlseval::reports::evaluate_project;

const FULL_REPORT: &str = "\
================================================================
== Vivado HLS Report for 'top'
================================================================
* Date:           Mon Aug 24 11:02:41 2026

================================================================
== Performance Estimates
================================================================
+ Timing (ns):
    * Summary:
    +--------+-------+----------+------------+
    |  Clock | Target| Estimated| Uncertainty|
    +--------+-------+----------+------------+
    |ap_clk  |   5.00|     3.634|        0.62|
    +--------+-------+----------+------------+

+ Latency (clock cycles):
    * Summary:
    +-----+-----+-----+-----+---------+
    |  Latency  |  Interval | Pipeline|
    | min | max | min | max |   Type  |
    +-----+-----+-----+-----+---------+
    |  101|  101|  102|  102|   none  |
    +-----+-----+-----+-----+---------+

    + Detail:
        * Instance:
        N/A

        * Loop:
        +----------+-----+-----+----------+-----------+-----------+------+----------+
        |          |  Latency  | Iteration|  Initiation Interval  | Trip |          |
        | Loop Name| min | max |  Latency |  achieved |   target  | Count| Pipelined|
        +----------+-----+-----+----------+-----------+-----------+------+----------+
        |- ROW     |  100|  100|        10|          -|          -|    10|    no    |
        |-- COL    |    8|    8|         2|          1|          1|     4|    yes   |
        +----------+-----+-----+----------+-----------+-----------+------+----------+

================================================================
== Utilization Estimates
================================================================
* Summary:
+-----------------+---------+-------+--------+--------+-----+
|       Name      | BRAM_18K| DSP48E|   FF   |   LUT  | URAM|
+-----------------+---------+-------+--------+--------+-----+
|DSP              |        -|      -|       -|       -|    -|
|Expression       |        -|      -|       0|      29|    -|
|Multiplexer      |        -|      -|       -|      15|    -|
|Register         |        -|      -|      10|       -|    -|
+-----------------+---------+-------+--------+--------+-----+
|Total            |        2|      3|      10|      44|    0|
+-----------------+---------+-------+--------+--------+-----+
|Available        |     1824|   1728|  548160|  274080|    0|
+-----------------+---------+-------+--------+--------+-----+
|Utilization (%)  |       ~0|      1|       1|       2|    0|
+-----------------+---------+-------+--------+--------+-----+
";

fn write_project(dir: &TempDir, report: &str) -> PathBuf {
    let report_dir = dir.path().join("top_prj/solution1/syn/report");
    fs::create_dir_all(&report_dir).unwrap();
    fs::write(report_dir.join("top_csynth.rpt"), report).unwrap();
    dir.path().to_path_buf()
}

#[test]
fn test_full_report_populates_all_summaries() {
    let dir = TempDir::new().unwrap();
    let project = write_project(&dir, FULL_REPORT);

    let result = evaluate_project(&project, 5.0).unwrap();
    assert!(result.is_complete());
    assert!(result.warnings.is_empty());

    let timing = result.timing.known().unwrap();
    assert_eq!(timing.clock_period_target_ns, 5.0);
    assert_eq!(timing.clock_period_estimated_ns, Metric::Known(3.634));
    assert_eq!(timing.timing_met, Metric::Known(true));

    let latency = result.latency.known().unwrap();
    assert_eq!(latency.latency_cycles_max, 101);
    assert_eq!(latency.interval_max, 102);

    let resource = result.resource.known().unwrap();
    assert_eq!(resource.ff.used, 10);
    assert_eq!(resource.lut.available, Metric::Known(274080));
}

#[test]
fn test_loop_entries_preserve_report_order() {
    let dir = TempDir::new().unwrap();
    let project = write_project(&dir, FULL_REPORT);

    let result = evaluate_project(&project, 5.0).unwrap();
    let latency = result.latency.known().unwrap();

    let names: Vec<&str> = latency.loops.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, vec!["ROW", "COL"]);
    assert_eq!(latency.loops[0].trip_count, TripCount::Bounded(10));
    assert_eq!(latency.loops[1].iteration_interval, Metric::Known(1));
}

#[test]
fn test_zero_capacity_never_reports_a_ratio() {
    let dir = TempDir::new().unwrap();
    let project = write_project(&dir, FULL_REPORT);

    let result = evaluate_project(&project, 5.0).unwrap();
    let resource = result.resource.known().unwrap();

    // The URAM column reports available=0; its ratio must be undefined.
    let uram = resource.extra.get("URAM").unwrap();
    assert_eq!(uram.available, Metric::Known(0));
    assert_eq!(uram.utilization(), Metric::Unavailable);
}

#[test]
fn test_missing_bram_column_defaults_with_warning() {
    let report = "\
+ Timing (ns):
    +--------+-------+----------+------------+
    |  Clock | Target| Estimated| Uncertainty|
    +--------+-------+----------+------------+
    |ap_clk  |   5.00|     3.634|        0.62|
    +--------+-------+----------+------------+

    | min | max | min | max |   Type  |
    +-----+-----+-----+-----+---------+
    |   12|   12|   13|   13|   none  |
    +-----+-----+-----+-----+---------+

|       Name      | DSP48E|   FF   |   LUT  |
+-----------------+-------+--------+--------+
|Total            |      3|      10|      44|
+-----------------+-------+--------+--------+
|Available        |   1728|  548160|  274080|
+-----------------+-------+--------+--------+
";
    let dir = TempDir::new().unwrap();
    let project = write_project(&dir, report);

    let result = evaluate_project(&project, 5.0).unwrap();
    let resource = result.resource.known().unwrap();

    assert_eq!(resource.bram.used, 0);
    assert_eq!(resource.bram.available, Metric::Unavailable);
    assert_eq!(resource.dsp.used, 3);
    assert_eq!(resource.ff.used, 10);
    assert_eq!(resource.lut.used, 44);
    assert!(result.warnings.iter().any(|w| w.contains("BRAM row missing")));
}

#[test]
fn test_missing_latency_summary_keeps_other_sections() {
    let report = "\
+ Timing (ns):
    +--------+-------+----------+------------+
    |  Clock | Target| Estimated| Uncertainty|
    +--------+-------+----------+------------+
    |ap_clk  |   5.00|     4.100|        0.62|
    +--------+-------+----------+------------+

    + Detail:
        * Loop:
        |- L1     |  100|  100|         2|          1|          1|   100|    yes   |

|       Name      | BRAM_18K| DSP48E|   FF   |   LUT  |
+-----------------+---------+-------+--------+--------+
|Total            |        0|      0|      10|      44|
+-----------------+---------+-------+--------+--------+
|Available        |     1824|   1728|  548160|  274080|
+-----------------+---------+-------+--------+--------+
";
    let dir = TempDir::new().unwrap();
    let project = write_project(&dir, report);

    let result = evaluate_project(&project, 5.0).unwrap();
    assert_eq!(result.latency, Metric::Unavailable);
    assert!(result.timing.is_known());
    assert!(result.resource.is_known());
    assert!(result
        .warnings
        .iter()
        .any(|w| w.contains("latency") && w.contains("summary missing")));
}

#[test]
fn test_empty_project_returns_result_with_warnings() {
    let dir = TempDir::new().unwrap();

    // No reports at all: every summary unavailable, never an error.
    let result = evaluate_project(dir.path(), 5.0).unwrap();
    assert_eq!(result.timing, Metric::Unavailable);
    assert_eq!(result.latency, Metric::Unavailable);
    assert_eq!(result.resource, Metric::Unavailable);
    assert_eq!(result.warnings.len(), 3);
}

#[test]
fn test_missing_project_dir_is_an_error() {
    let err = evaluate_project(&PathBuf::from("/nonexistent/hlseval-project"), 5.0).unwrap_err();
    assert!(matches!(err, HlsEvalError::ProjectNotFound(_)));
}

#[test]
fn test_extraction_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let project = write_project(&dir, FULL_REPORT);

    let first = evaluate_project(&project, 5.0).unwrap();
    let second = evaluate_project(&project, 5.0).unwrap();

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_labeled_timing_lines_without_table() {
    let report = "\
Timing estimate
Target: 5.0ns
Estimated: 3.2ns

    | min | max | min | max |   Type  |
    +-----+-----+-----+-----+---------+
    |    1|    1|    1|    1|   none  |
    +-----+-----+-----+-----+---------+
";
    let dir = TempDir::new().unwrap();
    let project = write_project(&dir, report);

    let result = evaluate_project(&project, 9.9).unwrap();
    let timing = result.timing.known().unwrap();
    assert_eq!(timing.clock_period_target_ns, 5.0);
    assert_eq!(timing.clock_period_estimated_ns, Metric::Known(3.2));
    assert_eq!(timing.timing_met, Metric::Known(true));
}
