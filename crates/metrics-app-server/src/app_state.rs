//! Shared application state.
//!
//! Holds the settings and the single metrics registry. Handlers receive it
//! through axum's `State` extractor; nothing here is a global.

use std::sync::Arc;

use metrics_app_core::error::Result;
use metrics_app_core::AppMetrics;

use crate::config::Settings;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: Settings,
    metrics: AppMetrics,
}

impl AppState {
    /// Build state with a freshly registered metrics registry.
    pub fn new(cfg: Settings) -> Result<Self> {
        let metrics = AppMetrics::new()?;
        Ok(Self::with_metrics(cfg, metrics))
    }

    pub fn with_metrics(cfg: Settings, metrics: AppMetrics) -> Self {
        Self {
            inner: Arc::new(AppStateInner { cfg, metrics }),
        }
    }

    pub fn cfg(&self) -> &Settings {
        &self.inner.cfg
    }

    pub fn metrics(&self) -> &AppMetrics {
        &self.inner.metrics
    }
}
