use std::path::{Path, PathBuf};
use std::time::SystemTime;

use tracing::debug;

use super::ReportKind;

/// Conventional report locations per kind, relative to the project root,
/// tried in order. All three kinds currently resolve to the csynth text
/// report; the lists stay per-kind so layout variants (e.g. XML exports)
/// can be added for one kind without touching the others.
fn candidate_patterns(kind: ReportKind) -> &'static [&'static str] {
    match kind {
        ReportKind::Timing | ReportKind::Latency | ReportKind::Resource => &[
            "*_prj/solution*/syn/report/*_csynth.rpt",
            "solution*/syn/report/*_csynth.rpt",
            "syn/report/*_csynth.rpt",
            "*_csynth.rpt",
        ],
    }
}

/// Finds the report artifact for `kind` under `project_dir`.
///
/// Read-only filesystem probe. When several candidates match one pattern
/// the most recently modified wins (the latest synthesis run). `None`
/// means not found — the caller decides whether synthesis failed entirely
/// or only partially.
pub fn locate(project_dir: &Path, kind: ReportKind) -> Option<PathBuf> {
    for pattern in candidate_patterns(kind) {
        let full_pattern = project_dir.join(pattern);
        let Ok(entries) = glob::glob(&full_pattern.to_string_lossy()) else {
            continue;
        };

        let mut newest: Option<(SystemTime, PathBuf)> = None;
        for path in entries.flatten() {
            if !path.is_file() {
                continue;
            }
            let modified = path
                .metadata()
                .and_then(|m| m.modified())
                .unwrap_or(SystemTime::UNIX_EPOCH);
            match &newest {
                Some((best, _)) if *best >= modified => {}
                _ => newest = Some((modified, path)),
            }
        }

        if let Some((_, path)) = newest {
            debug!(kind = kind.label(), path = %path.display(), "Located report artifact");
            return Some(path);
        }
    }

    debug!(kind = kind.label(), project = %project_dir.display(), "No report artifact found");
    None
}
