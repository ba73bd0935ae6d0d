use std::process::ExitCode;

use clap::Args;

use scriptlauncher::scripts::ScriptDefinition;
use scriptlauncher::store::ScriptStore;

use crate::style::Style;

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Display name
    #[arg(short, long)]
    name: String,

    /// Executable or shell command line
    #[arg(short = 'x', long)]
    command: String,

    /// Working directory (inherits the caller's when omitted)
    #[arg(long)]
    cwd: Option<String>,

    /// Free-text description
    #[arg(short, long)]
    description: Option<String>,

    /// Run as part of the startup batch
    #[arg(long)]
    startup: bool,

    /// Treat failures as ignored instead of errors
    #[arg(long)]
    ignore_errors: bool,

    /// Store the script disabled
    #[arg(long)]
    disabled: bool,
}

/// Validate and store a new script.
///
/// # Errors
///
/// Returns an error if the name or command is blank, or the store cannot be written.
pub fn run(
    args: &AddArgs,
    store: &mut impl ScriptStore,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let script = ScriptDefinition {
        name: args.name.clone(),
        command: args.command.clone(),
        working_directory: args.cwd.clone().unwrap_or_default(),
        description: args.description.clone().unwrap_or_default(),
        is_enabled: !args.disabled,
        is_startup_script: args.startup,
        ignore_errors: args.ignore_errors,
        ..ScriptDefinition::create_empty()
    };
    script.validate_input()?;

    let id = script.id.clone();
    let name = script.name.clone();
    store.add(script)?;
    let sty = Style::new();
    println!("{} {}", sty.success(&format!("Added script '{name}'")), sty.dim(&id));
    Ok(ExitCode::SUCCESS)
}
