use std::path::{Path, PathBuf};

use tracing::debug;

/// Conventional install locations probed before falling back to PATH.
const COMMON_INSTALL_PATHS: &[&str] = &[
    "/opt/Xilinx/Vivado/2018.3/bin/vivado_hls",
    "/opt/Xilinx/Vivado_HLS/2018.3/bin/vivado_hls",
    "/tools/Xilinx/Vivado/2018.3/bin/vivado_hls",
    r"C:\Xilinx\Vivado\2018.3\bin\vivado_hls.bat",
    r"C:\Xilinx\Vivado_HLS\2018.3\bin\vivado_hls.bat",
    r"D:\Xilinx\Vivado\2018.3\bin\vivado_hls.bat",
    r"D:\Xilinx\Vivado_HLS\2018.3\bin\vivado_hls.bat",
];

/// Probes for a vivado_hls executable: conventional install paths first,
/// then every directory on PATH. Read-only; returns `None` when nothing
/// is found so the caller can ask for an explicit path.
pub fn find_vivado_hls() -> Option<PathBuf> {
    for path in COMMON_INSTALL_PATHS {
        let candidate = Path::new(path);
        if candidate.is_file() {
            debug!(path = %candidate.display(), "Found vivado_hls at conventional location");
            return Some(candidate.to_path_buf());
        }
    }
    search_path_env()
}

fn search_path_env() -> Option<PathBuf> {
    let path_var = std::env::var_os("PATH")?;
    for dir in std::env::split_paths(&path_var) {
        for name in ["vivado_hls", "vivado_hls.bat", "vivado_hls.exe"] {
            let candidate = dir.join(name);
            if candidate.is_file() {
                debug!(path = %candidate.display(), "Found vivado_hls on PATH");
                return Some(candidate);
            }
        }
    }
    None
}
