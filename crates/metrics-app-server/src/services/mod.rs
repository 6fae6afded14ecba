//! Request handlers that do the service's (simulated) work.

pub mod greeting;

pub use greeting::{index, GREETING};
