//! tc-core: stable foundation for turbocycle.
//!
//! Contains:
//! - numeric (Real + guarded divide + float helpers)
//! - interp (1-D/2-D piecewise-linear tables with extrapolation detection)
//! - constants (US-customary reference conditions and unit conversions)
//! - error (shared error types)

pub mod constants;
pub mod error;
pub mod interp;
pub mod numeric;

// Re-exports: nice ergonomics for downstream crates
pub use constants::*;
pub use error::{CoreError, CoreResult};
pub use interp::{Lookup, Table1, Table2};
pub use numeric::*;
