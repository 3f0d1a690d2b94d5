use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

// ── Logging bootstrap ──────────────────────────────────────────────────────────

/// Initialise the global `tracing` subscriber.
///
/// `log_level` is mapped to a [`tracing_subscriber::EnvFilter`] directive,
/// falling back to `"info"` if the level string is not recognised. Output
/// goes to stderr so it never fights the TUI for stdout; pass `log_file` to
/// append there instead.
pub fn setup_logging(log_level: &str, log_file: Option<&PathBuf>) -> anyhow::Result<()> {
    let lower = log_level.to_lowercase();
    let directive = match lower.as_str() {
        "warning" => "warn",
        other => other,
    };
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("info"));

    match log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            let layer = fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Arc::new(file));
            tracing_subscriber::registry().with(filter).with(layer).init();
        }
        None => {
            let layer = fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr);
            tracing_subscriber::registry().with(filter).with(layer).init();
        }
    }

    Ok(())
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // The global subscriber can only be installed once per process, so a
    // single test exercises the file-writer branch end-to-end.
    #[test]
    fn test_setup_logging_to_file() {
        let dir = std::env::temp_dir().join("suburb-lens-test-logs");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("test.log");

        setup_logging("DEBUG", Some(&path)).expect("logging initialises");
        tracing::info!("bootstrap test line");

        assert!(path.exists());
        std::fs::remove_file(&path).ok();
    }
}
