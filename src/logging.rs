//! Log output for the CLI.
//!
//! Filtering follows `RUST_LOG`. Headless runs write to stderr; the TUI writes to a file so
//! log lines never land on the alternate screen.

use std::env;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Used when `RUST_LOG` is unset or unparsable. Dependencies stay quiet.
pub const DEFAULT_FILTER: &str = "login_form=warn";

/// Where log lines go.
#[derive(Debug, Clone)]
pub enum LogSink {
    Stderr,
    File(PathBuf),
}

/// Builds the event filter from a `RUST_LOG`-style directive string.
pub fn env_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the process-wide subscriber.
pub fn init(sink: LogSink) -> io::Result<()> {
    let filter = env_filter(env::var("RUST_LOG").ok().as_deref());
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    let installed = match sink {
        LogSink::Stderr => builder.with_writer(io::stderr).try_init(),
        LogSink::File(path) => {
            let (Some(dir), Some(file_name)) = (path.parent(), path.file_name()) else {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("not a log file path: {}", path.display()),
                ));
            };
            std::fs::create_dir_all(dir)?;
            builder
                .with_ansi(false)
                .with_writer(tracing_appender::rolling::never(dir, file_name))
                .try_init()
        }
    };
    installed.map_err(|e| io::Error::other(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Emits one event per case under `filter` and returns what was written.
    fn capture(filter: EnvFilter) -> String {
        let buffer = SharedBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            tracing::warn!("own warning");
            tracing::info!("own info");
            tracing::warn!(target: "hyper::client", "dependency warning");
        });
        String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap()
    }

    #[test]
    fn test_default_filter_keeps_own_warnings_only() {
        let written = capture(env_filter(None));
        assert!(written.contains("own warning"));
        assert!(!written.contains("own info"));
        assert!(!written.contains("dependency warning"));
    }

    #[test]
    fn test_rust_log_directives_override_default() {
        let written = capture(env_filter(Some("login_form=info")));
        assert!(written.contains("own info"));
        assert!(!written.contains("dependency warning"));

        let written = capture(env_filter(Some("warn")));
        assert!(written.contains("dependency warning"));
    }

    #[test]
    fn test_invalid_directives_fall_back_to_default() {
        let written = capture(env_filter(Some("login_form=loud")));
        assert!(written.contains("own warning"));
        assert!(!written.contains("own info"));
    }
}
