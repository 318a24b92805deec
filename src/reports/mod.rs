pub mod aggregator;
pub mod latency;
pub mod locator;
pub mod patterns;
pub mod resource;
pub mod timing;

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::errors::HlsEvalError;
use crate::models::EvaluationResult;
use self::aggregator::Extraction;

/// The aspect of a synthesis run a report artifact describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Timing,
    Latency,
    Resource,
}

impl ReportKind {
    pub fn label(&self) -> &'static str {
        match self {
            ReportKind::Timing => "timing",
            ReportKind::Latency => "latency",
            ReportKind::Resource => "resource",
        }
    }
}

/// One located report file, read into memory. Read-only input to the
/// extractors; dropped once parsed.
#[derive(Debug)]
pub struct ReportArtifact {
    pub kind: ReportKind,
    pub raw_content: String,
    pub source_path: PathBuf,
}

/// Extracts all metrics from the reports under `project_dir`.
///
/// `fallback_clock_ns` is the requested clock period, used as the timing
/// target when the report omits it. Pure read-only pass over the project
/// directory: the three extractions are independent and share no state.
///
/// Parsing problems never fail this call — they surface as warnings on
/// the result. Only total absence of the project directory is an error.
pub fn evaluate_project(
    project_dir: &Path,
    fallback_clock_ns: f64,
) -> Result<EvaluationResult, HlsEvalError> {
    if !project_dir.is_dir() {
        return Err(HlsEvalError::ProjectNotFound(
            project_dir.display().to_string(),
        ));
    }

    let timing = load_artifact(project_dir, ReportKind::Timing)
        .map(|outcome| match outcome {
            ArtifactOutcome::Read(artifact) => {
                timing::extract(&artifact.raw_content, fallback_clock_ns)
            }
            ArtifactOutcome::Unreadable(msg) => Extraction::unavailable(msg),
        });
    let latency = load_artifact(project_dir, ReportKind::Latency).map(|outcome| match outcome {
        ArtifactOutcome::Read(artifact) => latency::extract(&artifact.raw_content),
        ArtifactOutcome::Unreadable(msg) => Extraction::unavailable(msg),
    });
    let resource = load_artifact(project_dir, ReportKind::Resource).map(|outcome| match outcome {
        ArtifactOutcome::Read(artifact) => resource::extract(&artifact.raw_content),
        ArtifactOutcome::Unreadable(msg) => Extraction::unavailable(msg),
    });

    Ok(aggregator::aggregate(timing, latency, resource))
}

enum ArtifactOutcome {
    Read(ReportArtifact),
    /// Located but unreadable. Recovered into a warning like any other
    /// extraction-level problem.
    Unreadable(String),
}

fn load_artifact(project_dir: &Path, kind: ReportKind) -> Option<ArtifactOutcome> {
    let path = locator::locate(project_dir, kind)?;
    match std::fs::read_to_string(&path) {
        Ok(raw_content) => {
            debug!(kind = kind.label(), bytes = raw_content.len(), "Read report artifact");
            Some(ArtifactOutcome::Read(ReportArtifact {
                kind,
                raw_content,
                source_path: path,
            }))
        }
        Err(e) => {
            warn!(kind = kind.label(), path = %path.display(), error = %e, "Report artifact unreadable");
            Some(ArtifactOutcome::Unreadable(format!(
                "{} report unreadable: {}",
                kind.label(),
                e
            )))
        }
    }
}
