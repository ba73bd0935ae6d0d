use std::process::ExitCode;

use clap::Args;

use scriptlauncher::scripts::ScriptDefinition;
use scriptlauncher::store::ScriptStore;

use crate::style::Style;

#[derive(Args, Debug)]
pub struct EditArgs {
    /// Id or name of the script to change
    script: String,

    #[arg(short, long)]
    name: Option<String>,

    #[arg(short = 'x', long)]
    command: Option<String>,

    /// Working directory; pass an empty string to inherit the caller's
    #[arg(long)]
    cwd: Option<String>,

    #[arg(short, long)]
    description: Option<String>,

    #[arg(long)]
    startup: Option<bool>,

    #[arg(long)]
    ignore_errors: Option<bool>,

    #[arg(long)]
    enabled: Option<bool>,
}

/// The edited copy of `script`: given fields replaced, everything else (including the id) kept
pub fn apply(args: &EditArgs, mut script: ScriptDefinition) -> ScriptDefinition {
    if let Some(ref name) = args.name {
        script.name.clone_from(name);
    }
    if let Some(ref command) = args.command {
        script.command.clone_from(command);
    }
    if let Some(ref cwd) = args.cwd {
        script.working_directory.clone_from(cwd);
    }
    if let Some(ref description) = args.description {
        script.description.clone_from(description);
    }
    if let Some(startup) = args.startup {
        script.is_startup_script = startup;
    }
    if let Some(ignore_errors) = args.ignore_errors {
        script.ignore_errors = ignore_errors;
    }
    if let Some(enabled) = args.enabled {
        script.is_enabled = enabled;
    }
    script
}

/// Replace the stored script with an edited copy.
///
/// # Errors
///
/// Returns an error if the script does not exist, the edited fields are invalid, or the
/// store cannot be written.
pub fn run(
    args: &EditArgs,
    store: &mut impl ScriptStore,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let current = store
        .find(&args.script)
        .ok_or_else(|| format!("no script with id or name '{}'", args.script))?;

    let script = apply(args, current);
    script.validate_input()?;

    let name = script.name.clone();
    store.update(script)?;
    println!("{}", Style::new().success(&format!("Updated script '{name}'")));
    Ok(ExitCode::SUCCESS)
}
