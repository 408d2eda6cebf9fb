//! Inlet with ram pressure recovery.

use serde::{Deserialize, Serialize};
use tc_core::interp::Table1;
use tc_core::numeric::guarded_div;
use tc_core::Real;

use crate::diag::ExtrapLatch;
use crate::station::Station;

/// Inlet: flow, enthalpy, temperature, and fuel-air ratio pass through;
/// total pressure is scaled by a base recovery times a recovery looked up
/// against the ram pressure ratio Pt/Ps_amb.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Inlet {
    pub name: String,
    /// Base (scalar) pressure recovery.
    pub e_ram_base: Real,
    /// Pressure recovery vs ram ratio Pt/Ps_amb.
    pub e_ram_vs_pr: Table1,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct InletDiag {
    pub recovery: ExtrapLatch,
}

impl Inlet {
    pub fn compute(&self, inflow: &Station, ps_amb: Real, diag: &mut InletDiag) -> Station {
        let ram_pr = guarded_div(inflow.pt, ps_amb);
        let e_ram = self.e_ram_vs_pr.lookup(ram_pr);
        diag.recovery.note(&self.name, "eRam_vs_PR", e_ram.extrapolated);
        inflow.with_pressure(inflow.pt * self.e_ram_base * e_ram.value)
    }
}
