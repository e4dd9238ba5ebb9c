//! shaft-core: stable foundation for the shaft design solver.
//!
//! Contains:
//! - units (uom SI types + constructors for loads and stresses)
//! - numeric (Real + tolerances + float helpers)
//! - loading (validated physical parameters for a single solve)
//! - error (shared error types)

pub mod error;
pub mod loading;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{CoreError, CoreResult};
pub use loading::ShaftLoading;
pub use numeric::*;
pub use units::*;
