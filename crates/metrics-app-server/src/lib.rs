//! metrics-app service library entry.
//!
//! Wires settings, the shared metrics registry, handlers and the tracing
//! middleware into an axum `Router`. Consumed by the binary (`main.rs`) and by
//! integration tests.

pub mod app_state;
pub mod config;
pub mod error;
pub mod obs;
pub mod ops;
pub mod router;
pub mod services;
