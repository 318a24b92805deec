use std::path::PathBuf;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{info, warn};

use super::discovery::find_vivado_hls;
use super::tcl;
use crate::errors::HlsEvalError;
use crate::models::SynthesisRequest;
use crate::reports::{locator, ReportKind};

/// Narrow seam between the extraction core and the external synthesis
/// tool: given a request, produce a project directory containing report
/// artifacts, or fail. The core only ever sees the directory, so it can
/// be tested entirely against captured fixtures.
#[async_trait]
pub trait ProjectMaterializer {
    async fn materialize(&self, request: &SynthesisRequest) -> Result<PathBuf, HlsEvalError>;
}

/// Drives a local vivado_hls install: writes the source and TCL script
/// into a work directory, runs csynth, persists the tool log.
pub struct VivadoHlsMaterializer {
    work_dir: PathBuf,
}

impl VivadoHlsMaterializer {
    pub fn new(work_dir: impl Into<PathBuf>) -> Self {
        Self {
            work_dir: work_dir.into(),
        }
    }

    fn resolve_tool(&self, request: &SynthesisRequest) -> Result<PathBuf, HlsEvalError> {
        request
            .tool_install_path
            .clone()
            .or_else(find_vivado_hls)
            .ok_or_else(|| {
                HlsEvalError::ExternalTool(
                    "vivado_hls not found; pass --vivado-path or add it to PATH".into(),
                )
            })
    }
}

#[async_trait]
impl ProjectMaterializer for VivadoHlsMaterializer {
    async fn materialize(&self, request: &SynthesisRequest) -> Result<PathBuf, HlsEvalError> {
        request.validate()?;
        let tool = self.resolve_tool(request)?;

        // Each run owns a fresh work directory.
        if self.work_dir.exists() {
            tokio::fs::remove_dir_all(&self.work_dir).await?;
        }
        tokio::fs::create_dir_all(&self.work_dir).await?;

        let source_name = format!("{}.cpp", request.top_function);
        tokio::fs::write(self.work_dir.join(&source_name), &request.source_text).await?;

        let script = tcl::render_run_script(request, &source_name);
        tokio::fs::write(self.work_dir.join("run.tcl"), script).await?;

        info!(
            tool = %tool.display(),
            top = %request.top_function,
            part = %request.target_device,
            "Running synthesis"
        );

        let output = Command::new(&tool)
            .arg("-f")
            .arg("run.tcl")
            .current_dir(&self.work_dir)
            .output()
            .await
            .map_err(|e| {
                HlsEvalError::ExternalTool(format!("failed to launch {}: {}", tool.display(), e))
            })?;

        let mut log = String::from_utf8_lossy(&output.stdout).into_owned();
        if !output.stderr.is_empty() {
            log.push_str("\n\nSTDERR:\n");
            log.push_str(&String::from_utf8_lossy(&output.stderr));
        }
        tokio::fs::write(self.work_dir.join("vivado_hls.log"), &log).await?;

        if !output.status.success() {
            // Synthesis tools exit nonzero on non-fatal warnings while
            // still writing reports. Only total report absence is fatal.
            if locator::locate(&self.work_dir, ReportKind::Timing).is_some() {
                warn!(status = %output.status, "Synthesis exited nonzero but left reports, continuing");
            } else {
                return Err(HlsEvalError::ExternalTool(format!(
                    "synthesis failed ({}): {}",
                    output.status,
                    log_tail(&log, 500)
                )));
            }
        }

        Ok(self.work_dir.clone())
    }
}

fn log_tail(log: &str, max_chars: usize) -> String {
    let count = log.chars().count();
    log.chars().skip(count.saturating_sub(max_chars)).collect()
}
