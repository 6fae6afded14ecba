//! Settings loader (environment only).
//!
//! The service takes no flags and reads no files; the only knobs are the
//! Jaeger agent address variables. Everything else is fixed at its default.

pub mod schema;

use metrics_app_core::error::{AppError, Result};

pub use schema::{DelayRange, Settings};

pub const ENV_AGENT_HOST: &str = "JAEGER_AGENT_HOST";
pub const ENV_AGENT_PORT: &str = "JAEGER_AGENT_PORT";

pub fn load_from_env() -> Result<Settings> {
    load_from_lookup(|key| std::env::var(key).ok())
}

/// Build settings from an arbitrary key lookup. Unset keys keep their defaults.
pub fn load_from_lookup<F>(lookup: F) -> Result<Settings>
where
    F: Fn(&str) -> Option<String>,
{
    let mut cfg = Settings::default();

    if let Some(host) = lookup(ENV_AGENT_HOST) {
        cfg.jaeger_agent_host = host;
    }
    if let Some(port) = lookup(ENV_AGENT_PORT) {
        cfg.jaeger_agent_port = port
            .trim()
            .parse()
            .map_err(|e| AppError::Config(format!("{ENV_AGENT_PORT}={port:?}: {e}")))?;
    }

    cfg.validate()?;
    Ok(cfg)
}
