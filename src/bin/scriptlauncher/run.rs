use std::process::ExitCode;

use clap::Args;

use scriptlauncher::engine::{ExecutionError, ExecutionResult, ScriptExecutionEngine};
use scriptlauncher::store::ScriptStore;

use crate::style::Style;

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Id or name of the script to run
    script: String,
}

/// The line to show for an execution, and whether it counts as a success
pub fn report(outcome: &Result<ExecutionResult, ExecutionError>, sty: Style) -> (String, bool) {
    match outcome {
        Ok(result) if result.is_ignored() => (sty.ignored(&result.message), true),
        Ok(result) => (sty.success(&result.message), true),
        Err(e) => (sty.failure(&e.to_string()), false),
    }
}

/// Run a single script and report the outcome.
///
/// # Errors
///
/// Returns an error if no script matches. Execution failures are reported and turned into a
/// failing exit code instead.
pub fn run(
    args: &RunArgs,
    store: &impl ScriptStore,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let script = store
        .find(&args.script)
        .ok_or_else(|| format!("no script with id or name '{}'", args.script))?;

    let outcome = ScriptExecutionEngine::system().execute_one(&script);
    let (line, success) = report(&outcome, Style::new());
    if success {
        println!("{line}");
        Ok(ExitCode::SUCCESS)
    } else {
        eprintln!("{line}");
        Ok(ExitCode::FAILURE)
    }
}
