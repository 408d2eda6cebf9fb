//! tc-components: gas-path component library for turbocycle.
//!
//! Each component is an immutable configuration struct plus a `compute`
//! method: a deterministic algebraic map from an upstream [`Station`] (and
//! command inputs) to a downstream station and typed side outputs. The only
//! per-instance mutable state is the diagnostic latch passed in by the
//! caller, which suppresses repeated extrapolation advisories and never
//! affects numeric results.
//!
//! Units are US customary throughout: lbm/s, BTU/lbm, degR, psia, rpm,
//! ft-lbf, hp.

pub mod ambient;
pub mod burner;
pub mod compressor;
pub mod diag;
pub mod duct;
pub mod error;
pub mod gas;
pub mod inlet;
pub mod nozzle;
pub mod sfc;
pub mod shaft;
pub mod splitter;
pub mod static_calc;
pub mod station;
pub mod turbine;
pub mod valve;

// Re-exports
pub use ambient::{Ambient, AmbientDiag, AmbientOutputs};
pub use burner::{Burner, BurnerDiag, BurnerOutputs};
pub use compressor::{
    BleedSpec, Compressor, CompressorDiag, CompressorHealth, CompressorOutputs,
};
pub use diag::ExtrapLatch;
pub use duct::{Duct, DuctDiag};
pub use error::{ComponentError, ComponentResult};
pub use gas::GasTables;
pub use inlet::{Inlet, InletDiag};
pub use nozzle::{Nozzle, NozzleDiag, NozzleGeometry, NozzleOutputs};
pub use sfc::{FuelConsumption, fuel_consumption};
pub use shaft::{Shaft, ShaftOutputs};
pub use splitter::split;
pub use static_calc::{SolveMode, StaticCalc, StaticDiag, StaticOutputs};
pub use station::Station;
pub use turbine::{CoolingPort, Turbine, TurbineDiag, TurbineHealth, TurbineOutputs};
pub use valve::{BleedValve, ValveDiag, ValveOutputs};
