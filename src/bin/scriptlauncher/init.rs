use std::path::Path;
use std::process::ExitCode;

use clap::Args;

use scriptlauncher::config_file::FILENAMES;
use scriptlauncher::store::FileStore;

use crate::style::Style;

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Overwrite an existing config file
    #[arg(long)]
    force: bool,
}

/// Write an empty config file to `--config` or `./.scripts.yaml`.
///
/// # Errors
///
/// Returns an error if the file exists (without `--force`) or cannot be written.
pub fn run(
    args: &InitArgs,
    config: Option<&Path>,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let path = match config {
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir()?.join(FILENAMES[0]),
    };
    if path.exists() && !args.force {
        return Err(format!(
            "config file already exists at {} (use --force to overwrite)",
            path.display()
        )
        .into());
    }
    FileStore::create(&path)?;
    println!("{}", Style::new().success(&format!("Created {}", path.display())));
    Ok(ExitCode::SUCCESS)
}
