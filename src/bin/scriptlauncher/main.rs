mod add;
mod edit;
mod init;
mod list;
mod remove;
mod run;
mod startup;
mod style;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use scriptlauncher::open_store;

#[derive(Parser, Debug)]
#[command(
    name = "scriptlauncher",
    about = "Run named shell-command scripts on demand or at startup"
)]
struct Cli {
    /// Path to config file (auto-detected if not specified)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log file path (enables file logging in addition to stderr)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Log debug messages
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create an empty config file in the current directory
    Init(init::InitArgs),
    /// List configured scripts
    List(list::ListArgs),
    /// Add a new script
    Add(add::AddArgs),
    /// Replace fields of an existing script
    Edit(edit::EditArgs),
    /// Delete a script
    Remove(remove::RemoveArgs),
    /// Run a single script by id or name
    Run(run::RunArgs),
    /// Run all enabled startup scripts
    Startup,
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let log_file = cli
        .log_file
        .as_ref()
        .map(std::fs::File::create)
        .transpose()?;
    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    scriptlauncher::logger::init(level, log_file);

    let open = || open_store(cli.config.as_deref()).map(|(store, _)| store);

    match cli.command {
        Commands::Init(ref args) => init::run(args, cli.config.as_deref()),
        Commands::List(ref args) => list::run(args, &open()?),
        Commands::Add(ref args) => add::run(args, &mut open()?),
        Commands::Edit(ref args) => edit::run(args, &mut open()?),
        Commands::Remove(ref args) => remove::run(args, &mut open()?),
        Commands::Run(ref args) => run::run(args, &open()?),
        Commands::Startup => startup::run(&open()?),
    }
}
