//! sw-core: stable foundation for seaflow.
//!
//! Contains:
//! - units (uom SI types + constructors)
//! - numeric (Real + tolerances + float helpers)
//! - timing (env-gated performance counters)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod timing;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{SwError, SwResult};
pub use numeric::*;
pub use units::*;
