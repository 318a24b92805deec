use crate::models::SynthesisRequest;

/// Renders the TCL driver script for one synthesis run: open a fresh
/// project, add the source, constrain part and clock, run csynth, exit.
pub fn render_run_script(request: &SynthesisRequest, source_file_name: &str) -> String {
    format!(
        "# Project settings\n\
         open_project -reset {top}_prj\n\
         add_files {src}\n\
         set_top {top}\n\
         \n\
         # Create solution\n\
         open_solution -reset \"solution1\"\n\
         set_part {{{part}}}\n\
         create_clock -period {clock} -name default\n\
         \n\
         # Synthesis process\n\
         csynth_design\n\
         \n\
         exit\n",
        top = request.top_function,
        src = source_file_name,
        part = request.target_device,
        clock = request.clock_period_ns,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_run_script() {
        let mut request = SynthesisRequest::new("void conv() {}");
        request.top_function = "conv".to_string();
        request.clock_period_ns = 4.0;

        let script = render_run_script(&request, "conv.cpp");
        assert!(script.contains("open_project -reset conv_prj"));
        assert!(script.contains("add_files conv.cpp"));
        assert!(script.contains("set_top conv"));
        assert!(script.contains("set_part {xczu7ev-ffvc1156-2-e}"));
        assert!(script.contains("create_clock -period 4 -name default"));
        assert!(script.contains("csynth_design"));
        assert!(script.trim_end().ends_with("exit"));
    }
}
