//! Observability wiring.
//!
//! `telemetry` sets up logging plus the Jaeger trace pipeline once per
//! process; `trace` is the per-request span middleware that feeds it.

pub mod telemetry;
pub mod trace;
