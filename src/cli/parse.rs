use std::path::Path;

use crate::cli::commands::ParseArgs;
use crate::errors::HlsEvalError;
use crate::reports;

/// Extraction without synthesis: runs the locator and extractors against
/// a project directory produced by an earlier run.
pub async fn handle_parse(args: ParseArgs) -> Result<(), HlsEvalError> {
    let result = reports::evaluate_project(Path::new(&args.project), args.clock)?;
    super::eval::print_result(&result, args.json)
}
