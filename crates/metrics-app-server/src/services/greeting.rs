use axum::extract::State;

use crate::app_state::AppState;

pub const GREETING: &str = "Hello from Python App with metrics and tracing!";

/// `GET /`: count the request, time a simulated unit of work, greet.
pub async fn index(State(state): State<AppState>) -> &'static str {
    let metrics = state.metrics();
    metrics.inc_requests();

    let timer = metrics.start_latency_timer();
    let delay = state.cfg().delay.sample();
    tracing::debug!(delay_ms = delay.as_millis() as u64, "simulating work");
    tokio::time::sleep(delay).await;
    timer.observe_duration();

    GREETING
}
