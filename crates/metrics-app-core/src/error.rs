//! Shared error type across metrics-app crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid startup configuration.
    Config,
    /// Metrics registry or encoder failure.
    Metrics,
    /// Tracer / subscriber setup failure.
    Telemetry,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::Config => "CONFIG",
            ClientCode::Metrics => "METRICS",
            ClientCode::Telemetry => "TELEMETRY",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid config: {0}")]
    Config(String),
    #[error("metrics: {0}")]
    Metrics(#[from] prometheus::Error),
    #[error("telemetry: {0}")]
    Telemetry(String),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("internal: {0}")]
    Internal(String),
}

impl AppError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            AppError::Config(_) => ClientCode::Config,
            AppError::Metrics(_) => ClientCode::Metrics,
            AppError::Telemetry(_) => ClientCode::Telemetry,
            AppError::Io(_) | AppError::Internal(_) => ClientCode::Internal,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_report_internal() {
        let err: AppError = std::io::Error::new(std::io::ErrorKind::AddrInUse, "port taken").into();
        assert_eq!(err.client_code().as_str(), "INTERNAL");
        assert_eq!(err.to_string(), "io: port taken");
    }

    #[test]
    fn duplicate_registration_is_a_metrics_error() {
        let registry = prometheus::Registry::new();
        let c = prometheus::IntCounter::new("dup_total", "dup").unwrap();
        registry.register(Box::new(c.clone())).unwrap();

        let err: AppError = registry.register(Box::new(c)).expect_err("must fail").into();
        assert_eq!(err.client_code(), ClientCode::Metrics);
    }
}
