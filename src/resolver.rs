//! Turning a stored command string into a concrete process invocation

use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::platform::HostPlatform;

/// The concrete invocation for a script: what to run, and where
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Program followed by its arguments
    pub argv: Vec<String>,
    /// Working directory to apply to the child, when one was configured and usable
    pub effective_dir: Option<PathBuf>,
}

/// Decides how a command string is launched on a given host platform.
///
/// A command containing whitespace is a shell command line and gets wrapped in the platform
/// shell. A command without whitespace is a bare executable reference, resolved against the
/// working directory when it is relative and a file exists there.
#[derive(Debug, Clone, Default)]
pub struct CommandResolver<P> {
    platform: P,
}

impl<P: HostPlatform> CommandResolver<P> {
    #[must_use]
    pub fn new(platform: P) -> Self {
        Self { platform }
    }

    /// Resolve `command` in the context of `working_directory`. Never fails: anything that
    /// cannot be resolved falls back to running the command verbatim.
    #[must_use]
    pub fn resolve(&self, command: &str, working_directory: &str) -> Resolution {
        let effective_dir = resolve_working_directory(working_directory);

        let argv = if command.chars().any(char::is_whitespace) {
            let (shell, flag) = self.platform.shell();
            vec![shell.to_string(), flag.to_string(), command.to_string()]
        } else {
            vec![resolve_executable(command, effective_dir.as_deref())]
        };

        debug!(
            "Resolved '{command}' to [{}] (cwd: {})",
            argv.join(", "),
            effective_dir
                .as_deref()
                .map_or_else(|| "inherited".to_string(), |d| d.display().to_string())
        );
        Resolution {
            argv,
            effective_dir,
        }
    }
}

/// An absolute, existing directory, or `None` when the setting is blank or unusable
fn resolve_working_directory(working_directory: &str) -> Option<PathBuf> {
    if working_directory.trim().is_empty() {
        return None;
    }
    let dir = match std::path::absolute(working_directory) {
        Ok(dir) => dir,
        Err(e) => {
            warn!("Unable to resolve working directory '{working_directory}': {e}");
            return None;
        }
    };
    if dir.is_dir() {
        debug!("Using working directory: {}", dir.display());
        Some(dir)
    } else {
        warn!("Working directory does not exist: {working_directory}");
        None
    }
}

fn resolve_executable(command: &str, effective_dir: Option<&Path>) -> String {
    let Some(dir) = effective_dir else {
        return command.to_string();
    };
    if Path::new(command).is_absolute() {
        return command.to_string();
    }
    let candidate = dir.join(command);
    if candidate.is_file() {
        candidate.to_string_lossy().into_owned()
    } else {
        warn!("Executable not found at: {}", candidate.display());
        command.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::FixedPlatform;

    fn unix() -> CommandResolver<FixedPlatform> {
        CommandResolver::new(FixedPlatform::unix())
    }

    #[test]
    fn test_command_with_space_is_shell_wrapped() {
        let resolution = unix().resolve("echo hello | wc -c", "");
        assert_eq!(resolution.argv, vec!["sh", "-c", "echo hello | wc -c"]);
        assert_eq!(resolution.effective_dir, None);

        let resolution =
            CommandResolver::new(FixedPlatform::windows()).resolve("dir /b > out.txt", "");
        assert_eq!(resolution.argv, vec!["cmd", "/c", "dir /b > out.txt"]);
    }

    #[test]
    fn test_any_whitespace_selects_shell() {
        let resolution = unix().resolve("make\tbuild", "");
        assert_eq!(resolution.argv.len(), 3);
        assert_eq!(resolution.argv[2], "make\tbuild");
    }

    #[test]
    fn test_quoted_path_with_space_is_treated_as_shell_line() {
        let resolution = CommandResolver::new(FixedPlatform::windows())
            .resolve(r#""C:\Program Files\app.exe""#, "");
        assert_eq!(resolution.argv[0], "cmd");
    }

    #[test]
    fn test_bare_command_without_directory_is_verbatim() {
        let resolution = unix().resolve("./build.sh", "");
        assert_eq!(resolution.argv, vec!["./build.sh"]);
        assert_eq!(resolution.effective_dir, None);
    }

    #[test]
    fn test_relative_executable_found_in_working_directory() {
        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("build.sh");
        std::fs::write(&script, "#!/bin/sh\n").unwrap();

        let resolution = unix().resolve("build.sh", &dir.path().to_string_lossy());
        assert_eq!(resolution.argv, vec![script.to_string_lossy().into_owned()]);
        assert_eq!(resolution.effective_dir.as_deref(), Some(dir.path()));
    }

    #[test]
    fn test_relative_executable_missing_falls_back_to_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let resolution = unix().resolve("build.sh", &dir.path().to_string_lossy());
        assert_eq!(resolution.argv, vec!["build.sh"]);
        assert_eq!(resolution.effective_dir.as_deref(), Some(dir.path()));
    }

    #[test]
    fn test_absolute_executable_is_not_joined() {
        let dir = tempfile::tempdir().unwrap();
        let resolution = unix().resolve("/bin/true", &dir.path().to_string_lossy());
        assert_eq!(resolution.argv, vec!["/bin/true"]);
    }

    #[test]
    fn test_missing_working_directory_is_dropped() {
        for command in ["build.sh", "make all"] {
            let resolution = unix().resolve(command, "/does/not/exist");
            assert_eq!(resolution.effective_dir, None);
        }
    }

    #[test]
    fn test_file_as_working_directory_is_dropped() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("not-a-dir");
        std::fs::write(&file, "").unwrap();
        let resolution = unix().resolve("make", &file.to_string_lossy());
        assert_eq!(resolution.effective_dir, None);
        assert_eq!(resolution.argv, vec!["make"]);
    }

    #[test]
    fn test_resolve_is_repeatable() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("run"), "").unwrap();
        let resolver = unix();
        let cwd = dir.path().to_string_lossy();
        assert_eq!(resolver.resolve("run", &cwd), resolver.resolve("run", &cwd));
        assert_eq!(resolver.resolve("run it", &cwd), resolver.resolve("run it", &cwd));
    }
}
