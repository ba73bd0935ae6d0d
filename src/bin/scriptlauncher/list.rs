use std::fmt::Write as _;
use std::process::ExitCode;

use clap::Args;

use scriptlauncher::scripts::ScriptDefinition;
use scriptlauncher::store::ScriptStore;

use crate::style::Style;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only startup scripts
    #[arg(long, conflicts_with = "regular")]
    startup: bool,

    /// Only scripts that are not startup scripts
    #[arg(long)]
    regular: bool,

    /// Show ids and commands
    #[arg(short, long)]
    long: bool,
}

/// One listing entry: `name [TAGS] - description`, plus id and command when `long` is set
pub fn render(script: &ScriptDefinition, long: bool, sty: Style) -> String {
    let mut line = sty.bold(&script.name);
    for tag in script.tags() {
        line.push(' ');
        line.push_str(&sty.tag(tag));
    }
    if !script.description.is_empty() {
        let _ = write!(line, " - {}", script.description);
    }
    if long {
        let _ = write!(line, "\n    {} {}", sty.dim(&script.id), script.command);
        if !script.working_directory.is_empty() {
            line.push_str(&sty.dim(&format!(" (in {})", script.working_directory)));
        }
    }
    line
}

/// Print scripts in insertion order.
///
/// # Errors
///
/// Never fails; the signature matches the other subcommands.
pub fn run(
    args: &ListArgs,
    store: &impl ScriptStore,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let sty = Style::new();
    let scripts = if args.startup {
        store
            .list_all()
            .into_iter()
            .filter(|s| s.is_startup_script)
            .collect()
    } else if args.regular {
        store.list_non_startup()
    } else {
        store.list_all()
    };

    if scripts.is_empty() {
        eprintln!("{}", sty.dim("No scripts configured."));
        return Ok(ExitCode::SUCCESS);
    }
    for script in &scripts {
        println!("{}", render(script, args.long, sty));
    }
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(long: bool) -> String {
        let scripts = [
            ScriptDefinition {
                id: "1".to_string(),
                name: "dev server".to_string(),
                command: "npm run dev".to_string(),
                working_directory: "web".to_string(),
                description: "Frontend with hot reload".to_string(),
                is_startup_script: true,
                ignore_errors: true,
                ..Default::default()
            },
            ScriptDefinition {
                id: "2".to_string(),
                name: "build".to_string(),
                command: "build.sh".to_string(),
                is_enabled: false,
                ..Default::default()
            },
            ScriptDefinition {
                id: "3".to_string(),
                name: "lint".to_string(),
                command: "cargo clippy".to_string(),
                ..Default::default()
            },
        ];
        scripts
            .iter()
            .map(|s| render(s, long, Style::plain()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_render_listing() {
        insta::assert_snapshot!(listing(false), @r"
        dev server [STARTUP] [IGNORE ERRORS] - Frontend with hot reload
        build [DISABLED]
        lint
        ");
    }

    #[test]
    fn test_render_long_listing() {
        insta::assert_snapshot!(listing(true), @r"
        dev server [STARTUP] [IGNORE ERRORS] - Frontend with hot reload
            1 npm run dev (in web)
        build [DISABLED]
            2 build.sh
        lint
            3 cargo clippy
        ");
    }
}
