//! metrics-app core: error surface and the process-wide metrics registry.
//!
//! This crate holds the pieces shared by the HTTP service and its tests. It
//! carries no transport or runtime dependencies; the server crate decides how
//! instruments are exposed.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Registration and encoding failures surface as `AppError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod metrics;

/// Shared result type.
pub use error::{AppError, Result};
pub use metrics::AppMetrics;
