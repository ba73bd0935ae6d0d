use std::io::Write;
use std::time::Instant;

use log::{Log, Metadata, Record};
use parking_lot::Mutex;

struct LauncherLogger {
    file: Option<Mutex<std::fs::File>>,
    filter: log::LevelFilter,
    start: Instant,
}

impl LauncherLogger {
    fn format(&self, record: &Record) -> String {
        let elapsed = self.start.elapsed().as_secs_f64();
        format!(
            "[{elapsed:.3}s] [{}] {} - {}",
            record.level(),
            record.target(),
            record.args()
        )
    }
}

impl Log for LauncherLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.filter
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = self.format(record);
        let _ = writeln!(std::io::stderr().lock(), "{line}");

        if let Some(ref file) = self.file {
            let _ = writeln!(file.lock(), "{line}");
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
        if let Some(ref file) = self.file {
            let _ = file.lock().flush();
        }
    }
}

/// Level from `RUST_LOG`, defaulting to `default` when unset or unparsable
fn level_from_env(default: log::LevelFilter) -> log::LevelFilter {
    std::env::var("RUST_LOG")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

/// Initialize the global logger. Must be called once before any logging.
///
/// # Panics
///
/// Panics if called more than once.
pub fn init(default: log::LevelFilter, log_file: Option<std::fs::File>) {
    let filter = level_from_env(default);

    let logger = LauncherLogger {
        file: log_file.map(Mutex::new),
        filter,
        start: Instant::now(),
    };

    log::set_boxed_logger(Box::new(logger)).expect("logger already initialized");
    log::set_max_level(filter);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line() {
        let logger = LauncherLogger {
            file: None,
            filter: log::LevelFilter::Info,
            start: Instant::now(),
        };
        let line = logger.format(
            &Record::builder()
                .args(format_args!("Executing script: build"))
                .level(log::Level::Warn)
                .target("scriptlauncher::engine")
                .build(),
        );
        assert!(line.starts_with("[0."));
        assert!(line.ends_with("] [WARN] scriptlauncher::engine - Executing script: build"));
    }

    #[test]
    fn test_enabled_respects_filter() {
        let logger = LauncherLogger {
            file: None,
            filter: log::LevelFilter::Info,
            start: Instant::now(),
        };
        let debug = Metadata::builder().level(log::Level::Debug).build();
        let error = Metadata::builder().level(log::Level::Error).build();
        assert!(!logger.enabled(&debug));
        assert!(logger.enabled(&error));
    }
}
