use std::process::ExitCode;

use scriptlauncher::engine::ScriptExecutionEngine;
use scriptlauncher::startup::{StartupSummary, run_startup_action};
use scriptlauncher::store::ScriptStore;

use crate::style::Style;

/// Run the startup batch and print a summary. A failing script never fails the command.
///
/// # Errors
///
/// Never fails; the signature matches the other subcommands.
pub fn run(store: &impl ScriptStore) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let sty = Style::new();
    let engine = ScriptExecutionEngine::system();
    let summary = run_startup_action(store, &engine);
    match summary {
        StartupSummary::NoStartupScripts => eprintln!("{}", sty.dim(&summary.to_string())),
        StartupSummary::Executed(report) => {
            println!("{} {}", sty.arrow(), summary);
            let mut parts = vec![format!("{} started", report.started)];
            if report.ignored > 0 {
                parts.push(format!("{} ignored", report.ignored));
            }
            if report.failed > 0 {
                parts.push(format!("{} failed", report.failed));
            }
            println!("  {}", sty.dim(&parts.join(", ")));
        }
    }
    Ok(ExitCode::SUCCESS)
}
