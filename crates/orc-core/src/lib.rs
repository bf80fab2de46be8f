//! orc-core: shared foundation for the ORC pump workspace.
//!
//! Contains:
//! - units (uom SI types + constructors)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)
//! - timing (wall-clock instrumentation used around model calls)

pub mod error;
pub mod numeric;
pub mod timing;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::CoreError;
pub use numeric::*;
pub use units::*;
