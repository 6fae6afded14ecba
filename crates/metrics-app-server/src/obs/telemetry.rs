//! Tracer provider, Jaeger agent exporter and the `tracing` subscriber.

use opentelemetry::global;
use opentelemetry_sdk::propagation::TraceContextPropagator;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use metrics_app_core::error::{AppError, Result};

use crate::config::Settings;

const DEFAULT_LOG_FILTER: &str = "info";

/// Handle returned by [`init`]; call [`Telemetry::shutdown`] before exit so
/// buffered spans reach the agent.
#[must_use]
pub struct Telemetry {
    agent_endpoint: String,
}

/// Install the global tracer provider and subscriber.
///
/// Spans are batched on the Tokio runtime and shipped to the agent over UDP,
/// so this must run inside a runtime.
pub fn init(cfg: &Settings) -> Result<Telemetry> {
    global::set_text_map_propagator(TraceContextPropagator::new());

    let agent_endpoint = cfg.agent_endpoint();
    let tracer = opentelemetry_jaeger::new_agent_pipeline()
        .with_endpoint(agent_endpoint.clone())
        .with_service_name(cfg.service_name.clone())
        .with_auto_split_batch(true)
        .install_batch(opentelemetry_sdk::runtime::Tokio)
        .map_err(|e| AppError::Telemetry(format!("jaeger pipeline ({agent_endpoint}): {e}")))?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()))
        .with(fmt::layer())
        .with(tracing_opentelemetry::layer().with_tracer(tracer))
        .try_init()
        .map_err(|e| AppError::Telemetry(format!("subscriber init failed: {e}")))?;

    tracing::info!(
        service_name = %cfg.service_name,
        agent = %agent_endpoint,
        "tracing initialized"
    );

    Ok(Telemetry { agent_endpoint })
}

impl Telemetry {
    /// Flush pending spans and drop the global provider.
    ///
    /// The batch processor blocks while draining, so it runs off the async
    /// worker threads.
    pub async fn shutdown(self) {
        tracing::info!(agent = %self.agent_endpoint, "flushing spans");
        if let Err(e) = tokio::task::spawn_blocking(global::shutdown_tracer_provider).await {
            tracing::warn!(error = %e, "tracer shutdown task failed");
        }
    }
}
