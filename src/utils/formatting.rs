use crate::models::Metric;

pub fn format_period(ns: f64) -> String {
    format!("{:.3} ns", ns)
}

pub fn format_utilization(ratio: Metric<f64>) -> String {
    match ratio {
        Metric::Known(r) => format!("{:.1}%", r * 100.0),
        Metric::Unavailable => "n/a".to_string(),
    }
}

pub fn format_duration(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.1}s", ms as f64 / 1000.0)
    } else if ms < 3_600_000 {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    } else {
        let hours = ms / 3_600_000;
        let mins = (ms % 3_600_000) / 60_000;
        format!("{}h {}m", hours, mins)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_utilization() {
        assert_eq!(format_utilization(Metric::Known(0.247)), "24.7%");
        assert_eq!(format_utilization(Metric::Unavailable), "n/a");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(850), "850ms");
        assert_eq!(format_duration(2500), "2.5s");
        assert_eq!(format_duration(125_000), "2m 5s");
    }
}
