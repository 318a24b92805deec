use clap::Parser;
use tracing_subscriber::EnvFilter;

use hlseval::cli::{self, Cli, Commands};
use hlseval::errors::HlsEvalError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(!cli.no_color)
        .init();

    let result = match cli.command {
        Commands::Eval(args) => cli::eval::handle_eval(args, cli.quiet).await,
        Commands::Parse(args) => cli::parse::handle_parse(args).await,
    };

    match result {
        Ok(()) => {}
        Err(e) => {
            eprintln!("Error: {}", e);
            let exit_code = match &e {
                HlsEvalError::Request(_) => 2,
                HlsEvalError::ExternalTool(_) => 3,
                HlsEvalError::ProjectNotFound(_) => 4,
                _ => 1,
            };
            std::process::exit(exit_code);
        }
    }
}
