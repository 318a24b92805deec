use clap::{Args, Parser, Subcommand};

use crate::models::request::{DEFAULT_TARGET_DEVICE, DEFAULT_TOP_FUNCTION};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_HASH"),
    ", built ",
    env!("BUILD_TIMESTAMP"),
    ")"
);

#[derive(Parser)]
#[command(
    name = "hlseval",
    version,
    long_version = LONG_VERSION,
    about = "Vivado HLS synthesis driver and report metric extractor"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Synthesize a source file and report its metrics
    Eval(EvalArgs),
    /// Extract metrics from an existing project directory
    Parse(ParseArgs),
}

#[derive(Args, Clone)]
pub struct EvalArgs {
    /// C/C++ source file, or "-" for stdin
    #[arg(short, long)]
    pub source: String,

    /// Top-level function name
    #[arg(short, long, default_value = DEFAULT_TOP_FUNCTION)]
    pub top: String,

    /// Target FPGA part identifier
    #[arg(long, default_value = DEFAULT_TARGET_DEVICE)]
    pub part: String,

    /// Clock period in nanoseconds
    #[arg(long, default_value_t = 5.0)]
    pub clock: f64,

    /// Explicit vivado_hls executable path (discovered when omitted)
    #[arg(long)]
    pub vivado_path: Option<String>,

    /// Work directory for the generated project
    #[arg(long, default_value = "./build")]
    pub work_dir: String,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Clone)]
pub struct ParseArgs {
    /// Project directory containing synthesis reports
    #[arg(short, long)]
    pub project: String,

    /// Requested clock period, used as the timing target fallback
    #[arg(long, default_value_t = 5.0)]
    pub clock: f64,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}
