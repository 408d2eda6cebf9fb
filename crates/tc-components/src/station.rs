//! The gas-path state propagated station to station.

use serde::{Deserialize, Serialize};
use tc_core::Real;

/// Thermodynamic state at a gas-path station.
///
/// Every component consumes one of these and produces another; auxiliary
/// bleed/cooling streams are carried as independent stations.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Station {
    /// Mass flow (lbm/s)
    pub w: Real,
    /// Specific total enthalpy (BTU/lbm)
    pub ht: Real,
    /// Total temperature (degR)
    pub tt: Real,
    /// Total pressure (psia)
    pub pt: Real,
    /// Fuel-air ratio (fraction)
    pub far: Real,
}

impl Station {
    pub fn new(w: Real, ht: Real, tt: Real, pt: Real, far: Real) -> Self {
        Self { w, ht, tt, pt, far }
    }

    /// Same state with a different mass flow.
    pub fn with_flow(&self, w: Real) -> Self {
        Self { w, ..*self }
    }

    /// Same state with a different total pressure.
    pub fn with_pressure(&self, pt: Real) -> Self {
        Self { pt, ..*self }
    }
}
