//! tc-cycle: steady-state twin-spool turbofan gas-path evaluator.
//!
//! An [`Engine`] is a fixed component network (ambient through nozzles, two
//! spools) evaluated at one operating point per call. The caller supplies
//! flight conditions, a command vector of solver guesses, balance targets,
//! and turbomachinery health modifiers; the evaluation returns the residual
//! vector an external Newton solver drives to zero, together with the full
//! station survey and shaft diagnostics.
//!
//! [`gtf::engine`] builds the bundled geared-turbofan deck.

pub mod boundary;
pub mod engine;
pub mod error;
pub mod gtf;

pub use boundary::{
    Commands, Controls, Diagnostics, Environment, Evaluation, HealthParams, Outputs, Residuals,
    States, Targets,
};
pub use engine::{Engine, EngineDiag};
pub use error::{CycleError, CycleResult};
