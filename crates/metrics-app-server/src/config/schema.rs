use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;

use rand::Rng;

use metrics_app_core::error::{AppError, Result};

pub const DEFAULT_SERVICE_NAME: &str = "python-metrics-app";
pub const DEFAULT_LISTEN_PORT: u16 = 5000;
pub const DEFAULT_AGENT_HOST: &str = "localhost";
pub const DEFAULT_AGENT_PORT: u16 = 6831;

#[derive(Debug, Clone)]
pub struct Settings {
    pub listen: SocketAddr,
    pub service_name: String,
    pub jaeger_agent_host: String,
    pub jaeger_agent_port: u16,
    pub delay: DelayRange,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            listen: SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_LISTEN_PORT)),
            service_name: DEFAULT_SERVICE_NAME.into(),
            jaeger_agent_host: DEFAULT_AGENT_HOST.into(),
            jaeger_agent_port: DEFAULT_AGENT_PORT,
            delay: DelayRange::default(),
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<()> {
        if self.jaeger_agent_host.trim().is_empty() {
            return Err(AppError::Config("JAEGER_AGENT_HOST must not be empty".into()));
        }
        if self.jaeger_agent_port == 0 {
            return Err(AppError::Config("JAEGER_AGENT_PORT must be between 1 and 65535".into()));
        }
        if self.service_name.is_empty() {
            return Err(AppError::Config("service name must not be empty".into()));
        }

        self.delay.validate()?;

        Ok(())
    }

    /// `host:port` of the Jaeger agent (UDP).
    pub fn agent_endpoint(&self) -> String {
        format!("{}:{}", self.jaeger_agent_host, self.jaeger_agent_port)
    }
}

/// Bounds of the simulated work in the greeting handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelayRange {
    pub min: Duration,
    pub max: Duration,
}

impl Default for DelayRange {
    fn default() -> Self {
        Self {
            min: Duration::from_millis(100),
            max: Duration::from_millis(300),
        }
    }
}

impl DelayRange {
    pub fn new(min: Duration, max: Duration) -> Self {
        Self { min, max }
    }

    pub fn validate(&self) -> Result<()> {
        if self.min > self.max {
            return Err(AppError::Config("delay.min must not exceed delay.max".into()));
        }
        Ok(())
    }

    /// Draw uniformly from `[min, max]`.
    pub fn sample(&self) -> Duration {
        if self.min >= self.max {
            return self.min;
        }
        let secs = rand::thread_rng().gen_range(self.min.as_secs_f64()..=self.max.as_secs_f64());
        Duration::from_secs_f64(secs)
    }
}
