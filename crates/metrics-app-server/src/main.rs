//! metrics-app
//!
//! - `GET /`        : greeting, counted and timed
//! - `GET /metrics` : Prometheus text format
//! - Every request traced and exported to a Jaeger agent

use metrics_app_core::error::Result;
use metrics_app_server::{app_state::AppState, config, obs, router};

#[tokio::main]
async fn main() -> Result<()> {
    let cfg = config::load_from_env()?;
    let telemetry = obs::telemetry::init(&cfg)?;

    let listen = cfg.listen;
    let state = AppState::new(cfg)?;
    let app = router::build_router(state);

    tracing::info!(%listen, "metrics-app starting");
    let listener = tokio::net::TcpListener::bind(listen).await?;

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    telemetry.shutdown().await;
    served?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "ctrl-c handler unavailable");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "SIGTERM handler unavailable");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("signal received, starting graceful shutdown");
}
