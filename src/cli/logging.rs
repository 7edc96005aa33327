//! Tracing subscriber setup for the CLI.

use super::CliError;
use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Where log lines go.
#[derive(Debug)]
pub(super) enum LogTarget {
    /// No subscriber is installed.
    Off,
    /// Human-readable lines on stderr.
    Stderr,
    /// Plain lines appended to a file.
    File(PathBuf),
}

impl LogTarget {
    /// Log to `file` if given, otherwise fall back to `default`.
    pub(super) fn file_or(file: Option<PathBuf>, default: LogTarget) -> Self {
        file.map_or(default, LogTarget::File)
    }
}

/// `RUST_LOG` if set, `info` otherwise.
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber.
///
/// # Errors
///
/// Returns an error if the log file cannot be created or a subscriber is
/// already installed.
pub(super) fn init(target: LogTarget) -> Result<(), CliError> {
    let result = match target {
        LogTarget::Off => return Ok(()),
        LogTarget::Stderr => tracing_subscriber::fmt()
            .with_env_filter(env_filter())
            .with_writer(std::io::stderr)
            .try_init(),
        LogTarget::File(path) => {
            let file = File::options().create(true).append(true).open(&path).map_err(|e| {
                CliError::new(format!("Failed to open log file {}: {e}", path.display()))
            })?;
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .try_init()
        }
    };
    result.map_err(|e| CliError::new(format!("Failed to initialise logging: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_or_prefers_file() {
        let target = LogTarget::file_or(Some(PathBuf::from("game.log")), LogTarget::Off);
        assert!(matches!(target, LogTarget::File(p) if p == PathBuf::from("game.log")));
        assert!(matches!(
            LogTarget::file_or(None, LogTarget::Stderr),
            LogTarget::Stderr
        ));
    }

    #[test]
    fn test_off_installs_nothing() {
        assert!(init(LogTarget::Off).is_ok());
    }

    #[test]
    fn test_unwritable_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("no-such-dir").join("game.log");
        let err = init(LogTarget::File(missing)).unwrap_err();
        assert!(err.to_string().contains("Failed to open log file"));
    }
}
