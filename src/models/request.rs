use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::errors::HlsEvalError;

pub const DEFAULT_TOP_FUNCTION: &str = "top";
pub const DEFAULT_TARGET_DEVICE: &str = "xczu7ev-ffvc1156-2-e";
pub const DEFAULT_CLOCK_PERIOD_NS: f64 = 5.0;

/// A single synthesis job: the source to synthesize and the constraints to
/// synthesize it under. Immutable once handed to the evaluator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynthesisRequest {
    /// C/C++ source text containing the top-level function.
    pub source_text: String,
    /// Name of the top-level function to synthesize.
    pub top_function: String,
    /// Target FPGA part identifier. Opaque to this tool, passed through to
    /// the synthesis engine verbatim.
    pub target_device: String,
    /// Requested clock period in nanoseconds. Also serves as the timing
    /// target fallback when the report omits it.
    pub clock_period_ns: f64,
    /// Explicit vivado_hls executable path; discovered when absent.
    pub tool_install_path: Option<PathBuf>,
}

impl SynthesisRequest {
    pub fn new(source_text: impl Into<String>) -> Self {
        Self {
            source_text: source_text.into(),
            top_function: DEFAULT_TOP_FUNCTION.to_string(),
            target_device: DEFAULT_TARGET_DEVICE.to_string(),
            clock_period_ns: DEFAULT_CLOCK_PERIOD_NS,
            tool_install_path: None,
        }
    }

    /// Checks the request before any materialization or parsing happens.
    /// Validation failures are always surfaced to the caller, never
    /// downgraded to warnings.
    pub fn validate(&self) -> Result<(), HlsEvalError> {
        if self.source_text.trim().is_empty() {
            return Err(HlsEvalError::Request("source text is empty".into()));
        }
        if self.top_function.trim().is_empty() {
            return Err(HlsEvalError::Request("top function name is empty".into()));
        }
        if !self.clock_period_ns.is_finite() || self.clock_period_ns <= 0.0 {
            return Err(HlsEvalError::Request(format!(
                "clock period must be positive, got {}",
                self.clock_period_ns
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_defaults() {
        let request = SynthesisRequest::new("void top() {}");
        assert!(request.validate().is_ok());
        assert_eq!(request.top_function, "top");
        assert_eq!(request.clock_period_ns, 5.0);
    }

    #[test]
    fn test_validate_empty_source() {
        let request = SynthesisRequest::new("   \n\t");
        assert!(matches!(request.validate(), Err(HlsEvalError::Request(_))));
    }

    #[test]
    fn test_validate_empty_top_function() {
        let mut request = SynthesisRequest::new("void top() {}");
        request.top_function = String::new();
        assert!(matches!(request.validate(), Err(HlsEvalError::Request(_))));
    }

    #[test]
    fn test_validate_nonpositive_clock() {
        let mut request = SynthesisRequest::new("void top() {}");
        request.clock_period_ns = 0.0;
        assert!(request.validate().is_err());
        request.clock_period_ns = -2.5;
        assert!(request.validate().is_err());
        request.clock_period_ns = f64::NAN;
        assert!(request.validate().is_err());
    }
}
