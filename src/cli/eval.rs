use std::path::PathBuf;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use crate::cli::commands::EvalArgs;
use crate::errors::HlsEvalError;
use crate::models::{EvaluationResult, SynthesisRequest};
use crate::project::{ProjectMaterializer, VivadoHlsMaterializer};
use crate::reporting::format_evaluation_text;
use crate::reports;
use crate::utils::formatting::format_duration;

pub async fn handle_eval(args: EvalArgs, quiet: bool) -> Result<(), HlsEvalError> {
    let source_text = read_source(&args.source).await?;

    let request = SynthesisRequest {
        source_text,
        top_function: args.top.clone(),
        target_device: args.part.clone(),
        clock_period_ns: args.clock,
        tool_install_path: args.vivado_path.clone().map(PathBuf::from),
    };
    request.validate()?;

    let started = std::time::Instant::now();
    let spinner = (!quiet && !args.json).then(make_spinner);

    let materializer = VivadoHlsMaterializer::new(&args.work_dir);
    let materialized = materializer.materialize(&request).await;

    if let Some(spinner) = &spinner {
        spinner.finish_and_clear();
    }
    let project_dir = materialized?;

    let elapsed = format_duration(started.elapsed().as_millis() as u64);
    info!(elapsed = %elapsed, project = %project_dir.display(), "Synthesis finished");
    if !quiet && !args.json {
        println!("{} ({})", style("Synthesis complete").green().bold(), elapsed);
    }

    let result = reports::evaluate_project(&project_dir, request.clock_period_ns)?;
    print_result(&result, args.json)
}

pub(crate) fn print_result(result: &EvaluationResult, json: bool) -> Result<(), HlsEvalError> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
    } else {
        print!("{}", format_evaluation_text(result));
    }
    Ok(())
}

fn make_spinner() -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    bar.set_style(
        ProgressStyle::default_spinner()
            .template("  {spinner:.cyan} {msg}")
            .unwrap(),
    );
    bar.set_message("Running synthesis...");
    bar.enable_steady_tick(std::time::Duration::from_millis(120));
    bar
}

async fn read_source(path: &str) -> Result<String, HlsEvalError> {
    if path == "-" {
        use tokio::io::AsyncReadExt;
        let mut buf = String::new();
        tokio::io::stdin().read_to_string(&mut buf).await?;
        Ok(buf)
    } else {
        Ok(tokio::fs::read_to_string(path).await?)
    }
}
