use thiserror::Error;

/// All errors produced by suburb-lens.
///
/// Note the deliberate absence of a "missing value" variant: an absent or
/// unparsable listing field is a normal state, propagated as
/// [`crate::models::RawNumber::Absent`] / NaN through the pipeline, never as
/// an error. The variants here belong to the ingestion boundary and the
/// application shell.
#[derive(Error, Debug)]
pub enum LensError {
    /// The listings request could not complete (DNS, TLS, timeout, ...).
    #[error("Request failed: {0}")]
    Transport(String),

    /// The listings API answered with a non-success status.
    #[error("API returned status {status}: {message}")]
    Api { status: u16, message: String },

    /// The listings API answered 200 but carried an explicit error payload.
    #[error("API error: {0}")]
    Payload(String),

    /// A JSON document could not be parsed.
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// An error originating from the terminal / TUI layer.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Pass-through for raw I/O errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catch-all for errors from third-party crates via `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience alias used throughout the lens crates.
pub type Result<T> = std::result::Result<T, LensError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_transport() {
        let err = LensError::Transport("connection refused".to_string());
        assert_eq!(err.to_string(), "Request failed: connection refused");
    }

    #[test]
    fn test_error_display_api() {
        let err = LensError::Api {
            status: 503,
            message: "service unavailable".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("503"));
        assert!(msg.contains("service unavailable"));
    }

    #[test]
    fn test_error_display_payload() {
        let err = LensError::Payload("unknown suburb".to_string());
        assert_eq!(err.to_string(), "API error: unknown suburb");
    }

    #[test]
    fn test_error_display_terminal() {
        let err = LensError::Terminal("raw mode failed".to_string());
        assert_eq!(err.to_string(), "Terminal error: raw mode failed");
    }

    #[test]
    fn test_error_display_config() {
        let err = LensError::Config("bad timeout".to_string());
        assert_eq!(err.to_string(), "Configuration error: bad timeout");
    }

    #[test]
    fn test_error_from_serde_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{oops}").unwrap_err();
        let err: LensError = json_err.into();
        assert!(err.to_string().contains("Failed to parse JSON"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: LensError = io_err.into();
        assert!(err.to_string().contains("denied"));
    }
}
