//! Startup hook and the manual "run startup scripts" action

use std::fmt;

use log::info;

use crate::engine::{BatchReport, ScriptExecutionEngine};
use crate::launcher::ProcessLauncher;
use crate::platform::HostPlatform;
use crate::store::ScriptStore;

/// What the manual action did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartupSummary {
    NoStartupScripts,
    Executed(BatchReport),
}

impl fmt::Display for StartupSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StartupSummary::NoStartupScripts => f.write_str(
                "No enabled startup scripts found. Add startup scripts with `scriptlauncher add --startup`.",
            ),
            StartupSummary::Executed(report) => {
                write!(f, "Manually executed {} startup script(s).", report.attempted)
            }
        }
    }
}

/// Run the startup batch once at initialization.
pub fn run_startup_hook<S, L, P>(store: &S, engine: &ScriptExecutionEngine<L, P>) -> BatchReport
where
    S: ScriptStore + ?Sized,
    L: ProcessLauncher,
    P: HostPlatform,
{
    info!("Loaded {} scripts", store.list_all().len());
    engine.execute_batch(&store.list_startup_enabled())
}

/// Run the startup batch on demand, reporting when there is nothing to run.
pub fn run_startup_action<S, L, P>(
    store: &S,
    engine: &ScriptExecutionEngine<L, P>,
) -> StartupSummary
where
    S: ScriptStore + ?Sized,
    L: ProcessLauncher,
    P: HostPlatform,
{
    let scripts = store.list_startup_enabled();
    if scripts.is_empty() {
        return StartupSummary::NoStartupScripts;
    }
    StartupSummary::Executed(engine.execute_batch(&scripts))
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::path::Path;

    use super::*;
    use crate::launcher::LaunchOutcome;
    use crate::platform::FixedPlatform;
    use crate::scripts::ScriptDefinition;
    use crate::store::MemoryStore;

    #[derive(Default)]
    struct CountingLauncher {
        count: Cell<usize>,
    }

    impl ProcessLauncher for CountingLauncher {
        fn launch(&self, _argv: &[String], _dir: Option<&Path>) -> LaunchOutcome {
            self.count.set(self.count.get() + 1);
            LaunchOutcome::started()
        }
    }

    fn script(id: &str, startup: bool) -> ScriptDefinition {
        ScriptDefinition {
            id: id.to_string(),
            name: id.to_string(),
            command: "true".to_string(),
            is_startup_script: startup,
            ..Default::default()
        }
    }

    #[test]
    fn test_action_without_startup_scripts() {
        let launcher = CountingLauncher::default();
        let engine = ScriptExecutionEngine::new(&launcher, FixedPlatform::unix());
        let store = MemoryStore::new(vec![script("a", false)]);
        let summary = run_startup_action(&store, &engine);
        assert_eq!(summary, StartupSummary::NoStartupScripts);
        assert_eq!(launcher.count.get(), 0);
    }

    #[test]
    fn test_action_reports_count() {
        let launcher = CountingLauncher::default();
        let engine = ScriptExecutionEngine::new(&launcher, FixedPlatform::unix());
        let store = MemoryStore::new(vec![
            script("a", true),
            script("b", false),
            script("c", true),
        ]);
        let summary = run_startup_action(&store, &engine);
        assert_eq!(summary.to_string(), "Manually executed 2 startup script(s).");
        assert_eq!(launcher.count.get(), 2);
    }

    #[test]
    fn test_hook_runs_only_enabled_startup_scripts() {
        let launcher = CountingLauncher::default();
        let engine = ScriptExecutionEngine::new(&launcher, FixedPlatform::unix());
        let mut disabled = script("d", true);
        disabled.is_enabled = false;
        let store = MemoryStore::new(vec![script("a", true), disabled]);
        let report = run_startup_hook(&store, &engine);
        assert_eq!(report.started, 1);
        assert_eq!(launcher.count.get(), 1);
    }
}
