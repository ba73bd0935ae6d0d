//! Starting external processes without waiting for them

use std::path::Path;
use std::process::{Command as ProcessCommand, Stdio};

use log::{debug, info, warn};

/// Whether a process was spawned, and why not if it wasn't
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchOutcome {
    pub started: bool,
    pub failure_reason: Option<String>,
}

impl LaunchOutcome {
    #[must_use]
    pub fn started() -> Self {
        Self {
            started: true,
            failure_reason: None,
        }
    }

    #[must_use]
    pub fn failed(reason: impl Into<String>) -> Self {
        Self {
            started: false,
            failure_reason: Some(reason.into()),
        }
    }
}

/// Spawns a resolved invocation.
///
/// Success means the process was started, not that it finished or exited cleanly.
pub trait ProcessLauncher {
    fn launch(&self, argv: &[String], effective_dir: Option<&Path>) -> LaunchOutcome;
}

impl<L: ProcessLauncher + ?Sized> ProcessLauncher for &L {
    fn launch(&self, argv: &[String], effective_dir: Option<&Path>) -> LaunchOutcome {
        (**self).launch(argv, effective_dir)
    }
}

/// Launches real child processes through `std::process`.
///
/// Children get null stdio and are reaped by a detached thread; their exit status is only
/// logged.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLauncher;

impl ProcessLauncher for SystemLauncher {
    fn launch(&self, argv: &[String], effective_dir: Option<&Path>) -> LaunchOutcome {
        let Some((program, args)) = argv.split_first() else {
            return LaunchOutcome::failed("empty command");
        };

        let mut command = ProcessCommand::new(program);
        command
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        if let Some(dir) = effective_dir {
            command.current_dir(dir);
        }

        info!("Executing command: {}", argv.join(" "));
        match command.spawn() {
            Ok(mut child) => {
                let pid = child.id();
                let label = program.clone();
                let reaper = std::thread::Builder::new()
                    .name(format!("reap-{pid}"))
                    .spawn(move || match child.wait() {
                        Ok(status) => debug!("Process {pid} ({label}) exited: {status}"),
                        Err(e) => warn!("Unable to wait for process {pid} ({label}): {e}"),
                    });
                if let Err(e) = reaper {
                    warn!("Unable to start reaper for process {pid}: {e}");
                }
                LaunchOutcome::started()
            }
            Err(e) => LaunchOutcome::failed(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_argv_fails() {
        let outcome = SystemLauncher.launch(&[], None);
        assert!(!outcome.started);
        assert_eq!(outcome.failure_reason.as_deref(), Some("empty command"));
    }

    #[test]
    fn test_missing_executable_fails_with_reason() {
        let outcome = SystemLauncher.launch(
            &["definitely-not-a-real-program-7f3a".to_string()],
            None,
        );
        assert!(!outcome.started);
        assert!(outcome.failure_reason.is_some());
    }

    #[cfg(unix)]
    #[test]
    fn test_spawn_in_directory() {
        let dir = tempfile::tempdir().unwrap();
        let argv = vec![
            "sh".to_string(),
            "-c".to_string(),
            "touch marker".to_string(),
        ];
        let outcome = SystemLauncher.launch(&argv, Some(dir.path()));
        assert_eq!(outcome, LaunchOutcome::started());

        let marker = dir.path().join("marker");
        for _ in 0..100 {
            if marker.exists() {
                break;
            }
            std::thread::sleep(std::time::Duration::from_millis(20));
        }
        assert!(marker.exists());
    }

    #[test]
    fn test_missing_directory_fails_at_spawn() {
        let argv = vec!["sh".to_string()];
        let outcome = SystemLauncher.launch(&argv, Some(Path::new("/does/not/exist")));
        assert!(!outcome.started);
    }
}
