//! Script execution: validation, resolution, launch and error policy
//!
//! A single execution walks `validate -> resolve -> launch` once, with no retries. Failures
//! are hard errors unless the script sets `ignore_errors`, in which case they become an
//! ignored result instead. Batch execution runs every startup script in order and never lets
//! one script's failure stop the rest.

use std::fmt;

use log::{debug, error, info, warn};
use thiserror::Error;

use crate::launcher::{ProcessLauncher, SystemLauncher};
use crate::platform::{HostPlatform, SystemPlatform};
use crate::resolver::CommandResolver;
use crate::scripts::ScriptDefinition;

/// Hard failures surfaced to the caller of [`ScriptExecutionEngine::execute_one`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExecutionError {
    #[error("Cannot execute invalid script: {name}")]
    InvalidScript { name: String },
    #[error("Cannot execute disabled script: {name}")]
    Disabled { name: String },
    #[error("Failed to execute script '{name}': {reason}")]
    Launch { name: String, reason: String },
}

/// How an execution that did not hard-fail ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionStatus {
    /// The process was spawned
    Started,
    /// The script was invalid, and `ignore_errors` absorbed it; nothing ran
    IgnoredValidationFailure,
    /// The script was disabled, and `ignore_errors` absorbed it; nothing ran
    IgnoredDisabled,
    /// Spawning failed, and `ignore_errors` absorbed it
    IgnoredLaunchFailure,
}

/// Result of an execution that did not hard-fail
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    pub status: ExecutionStatus,
    pub message: String,
}

impl ExecutionResult {
    #[must_use]
    pub fn is_ignored(&self) -> bool {
        self.status != ExecutionStatus::Started
    }
}

impl fmt::Display for ExecutionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Counts from a batch run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Scripts handed to `execute_one`
    pub attempted: usize,
    pub started: usize,
    pub ignored: usize,
    pub failed: usize,
    /// Entries that were disabled or not startup scripts
    pub skipped: usize,
}

/// Runs script definitions as external processes
#[derive(Debug, Clone, Default)]
pub struct ScriptExecutionEngine<L, P> {
    launcher: L,
    resolver: CommandResolver<P>,
}

impl ScriptExecutionEngine<SystemLauncher, SystemPlatform> {
    /// An engine that spawns real processes on the current host
    #[must_use]
    pub fn system() -> Self {
        Self::new(SystemLauncher, SystemPlatform)
    }
}

impl<L: ProcessLauncher, P: HostPlatform> ScriptExecutionEngine<L, P> {
    #[must_use]
    pub fn new(launcher: L, platform: P) -> Self {
        Self {
            launcher,
            resolver: CommandResolver::new(platform),
        }
    }

    #[must_use]
    pub fn resolver(&self) -> &CommandResolver<P> {
        &self.resolver
    }

    /// Execute a single script.
    ///
    /// # Errors
    ///
    /// Returns `ExecutionError::InvalidScript` if the name or command is blank,
    /// `ExecutionError::Disabled` if the script is disabled, and `ExecutionError::Launch` if
    /// the process could not be spawned. None of these are returned when the script sets
    /// `ignore_errors`; an ignored result is returned instead.
    pub fn execute_one(
        &self,
        script: &ScriptDefinition,
    ) -> Result<ExecutionResult, ExecutionError> {
        if let Err(e) = validate(script) {
            warn!("{e}");
            if script.ignore_errors {
                let (status, message) = match e {
                    ExecutionError::Disabled { .. } => (
                        ExecutionStatus::IgnoredDisabled,
                        format!("Script disabled (ignored): {}", script.name),
                    ),
                    _ => (
                        ExecutionStatus::IgnoredValidationFailure,
                        format!("Script validation failed (ignored): {}", script.name),
                    ),
                };
                return Ok(ExecutionResult { status, message });
            }
            return Err(e);
        }

        info!("Executing script: {}", script.name);
        let resolution = self
            .resolver
            .resolve(&script.command, &script.working_directory);
        let outcome = self
            .launcher
            .launch(&resolution.argv, resolution.effective_dir.as_deref());

        if outcome.started {
            info!("Successfully started script: {}", script.name);
            return Ok(ExecutionResult {
                status: ExecutionStatus::Started,
                message: format!("Script '{}' executed successfully", script.name),
            });
        }

        let reason = outcome
            .failure_reason
            .unwrap_or_else(|| "unknown error".to_string());
        if script.ignore_errors {
            warn!("Failed to execute script '{}': {reason}", script.name);
            return Ok(ExecutionResult {
                status: ExecutionStatus::IgnoredLaunchFailure,
                message: format!(
                    "Script execution failed (ignored): {} - {reason}",
                    script.name
                ),
            });
        }
        Err(ExecutionError::Launch {
            name: script.name.clone(),
            reason,
        })
    }

    /// Execute startup scripts in order, containing each script's failure.
    ///
    /// Entries that are disabled or not flagged as startup scripts are skipped even if the
    /// caller passed them in.
    pub fn execute_batch(&self, scripts: &[ScriptDefinition]) -> BatchReport {
        info!("Executing {} startup scripts", scripts.len());
        let mut report = BatchReport::default();

        for script in scripts {
            if !script.runs_at_startup() {
                debug!("Skipping non-startup or disabled script: {}", script.name);
                report.skipped += 1;
                continue;
            }

            info!("Executing startup script: {}", script.name);
            report.attempted += 1;
            match self.execute_one(script) {
                Ok(result) if result.is_ignored() => {
                    warn!("Startup script failure ignored: {result}");
                    report.ignored += 1;
                }
                Ok(_) => report.started += 1,
                Err(e) => {
                    error!("Startup script failed: {}: {e}", script.name);
                    report.failed += 1;
                }
            }
        }

        info!(
            "Startup scripts done: {} started, {} ignored, {} failed, {} skipped",
            report.started, report.ignored, report.failed, report.skipped
        );
        report
    }
}

fn validate(script: &ScriptDefinition) -> Result<(), ExecutionError> {
    if !script.is_valid() {
        return Err(ExecutionError::InvalidScript {
            name: script.name.clone(),
        });
    }
    if !script.is_enabled {
        return Err(ExecutionError::Disabled {
            name: script.name.clone(),
        });
    }
    Ok(())
}
