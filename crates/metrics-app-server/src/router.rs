//! Route table.
//!
//! Exactly two `GET` routes, registered once at startup. Everything else
//! falls through to axum's default 404 / 405.

use axum::{routing::get, Router};

use crate::{app_state::AppState, obs, ops, services};

pub fn build_router(state: AppState) -> Router {
    let routes = Router::new()
        .route("/", get(services::index))
        .route("/metrics", get(ops::metrics))
        .with_state(state);

    obs::trace::instrument(routes)
}
