use std::process::ExitCode;

use clap::Args;
use inquire::Confirm;

use scriptlauncher::store::ScriptStore;

use crate::style::Style;

#[derive(Args, Debug)]
pub struct RemoveArgs {
    /// Id or name of the script to delete
    script: String,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

/// Delete a script after confirming with the user.
///
/// # Errors
///
/// Returns an error if the script does not exist, the prompt fails, or the store cannot be
/// written.
pub fn run(
    args: &RemoveArgs,
    store: &mut impl ScriptStore,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let sty = Style::new();
    let script = store
        .find(&args.script)
        .ok_or_else(|| format!("no script with id or name '{}'", args.script))?;

    let kind = if script.is_startup_script {
        "startup script"
    } else {
        "script"
    };
    if !args.yes {
        let confirmed = Confirm::new(&format!(
            "Are you sure you want to delete {kind} '{}'?",
            script.name
        ))
        .with_default(false)
        .prompt()?;
        if !confirmed {
            eprintln!("{}", sty.dim("Cancelled."));
            return Ok(ExitCode::SUCCESS);
        }
    }

    store.remove(&script.id)?;
    println!("{}", sty.success(&format!("Removed {kind} '{}'", script.name)));
    Ok(ExitCode::SUCCESS)
}
