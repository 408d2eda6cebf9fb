//! Static-state recovery from total conditions.
//!
//! Given a station's totals, find the static temperature, pressure, density,
//! and Mach number consistent with either a known flow area (iterative) or a
//! known Mach number (direct).

use serde::{Deserialize, Serialize};
use tc_core::constants::{BTU_TO_FT_LBF, GRAVITY, SQIN_PER_SQFT};
use tc_core::numeric::{clamp, guarded_div};
use tc_core::Real;

use crate::diag::ExtrapLatch;
use crate::gas::GasTables;
use crate::station::Station;

const MAX_ITER: usize = 50;
const MACH_TOL: Real = 1e-8;
const MACH_MIN: Real = 1e-6;
const MACH_MAX: Real = 1.0;
/// Under-relaxation factor on the Mach update.
const RELAX: Real = 0.5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolveMode {
    /// Flow area is fixed; Mach is solved from continuity.
    KnownArea,
    /// Mach is fixed; the consistent flow area is reported.
    KnownMach,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StaticCalc {
    pub name: String,
    pub mode: SolveMode,
    /// Flow area (in^2). Input for `KnownArea`, output for `KnownMach`.
    pub area: Real,
    /// Initial Mach (`KnownArea`) or the fixed Mach (`KnownMach`).
    pub mach: Real,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct StaticDiag {
    pub gas: ExtrapLatch,
}

#[derive(Clone, Copy, Debug)]
pub struct StaticOutputs {
    /// Static temperature (degR)
    pub ts: Real,
    /// Static pressure (psia)
    pub ps: Real,
    /// Static density (lbm/ft^3)
    pub rho: Real,
    /// Mach number
    pub mach: Real,
    /// Flow area (in^2)
    pub area: Real,
    /// Velocity (ft/s)
    pub v: Real,
    /// Iterations used (0 for `KnownMach`)
    pub iterations: usize,
}

/// Isentropic statics at a given Mach, plus velocity from continuity-free
/// relations. Shared by both solve modes.
fn statics_at_mach(
    st: &Station,
    gamma: Real,
    r_mech: Real,
    mach: Real,
) -> (Real, Real, Real, Real) {
    let ram = 1.0 + 0.5 * (gamma - 1.0) * mach * mach;
    let ts = st.tt / ram;
    let ps = st.pt / ram.powf(gamma / (gamma - 1.0));
    let rho = ps * SQIN_PER_SQFT / (r_mech * ts);
    let a = (gamma * GRAVITY * r_mech * ts).sqrt();
    (ts, ps, rho, mach * a)
}

impl StaticCalc {
    pub fn compute(&self, st: &Station, gas: &GasTables, diag: &mut StaticDiag) -> StaticOutputs {
        let g = gas.gamma(st.far, st.tt);
        let r = gas.r(st.far);
        diag.gas.note(&self.name, "gamma", g.extrapolated);
        diag.gas.note(&self.name, "R", r.extrapolated);
        let gamma = g.value;
        let r_mech = r.value * BTU_TO_FT_LBF;

        match self.mode {
            SolveMode::KnownMach => {
                let mach = clamp(self.mach, MACH_MIN, MACH_MAX);
                let (ts, ps, rho, v) = statics_at_mach(st, gamma, r_mech, mach);
                let area = guarded_div(st.w, rho * v) * SQIN_PER_SQFT;
                StaticOutputs { ts, ps, rho, mach, area, v, iterations: 0 }
            }
            SolveMode::KnownArea => {
                let area_ft2 = self.area / SQIN_PER_SQFT;
                let mut mach = clamp(self.mach, MACH_MIN, MACH_MAX);
                let mut result = statics_at_mach(st, gamma, r_mech, mach);
                let mut iterations = 0;
                for it in 1..=MAX_ITER {
                    iterations = it;
                    let (_, _, rho, _) = result;
                    // Velocity demanded by continuity at this density
                    let v_cont = guarded_div(st.w, rho * area_ft2);
                    let a = (gamma * GRAVITY * r_mech * result.0).sqrt();
                    let mach_new = clamp(v_cont / a, MACH_MIN, MACH_MAX);
                    let step = mach_new - mach;
                    mach += RELAX * step;
                    result = statics_at_mach(st, gamma, r_mech, mach);
                    if step.abs() < MACH_TOL {
                        break;
                    }
                }
                let (ts, ps, rho, _) = result;
                let v = guarded_div(st.w, rho * area_ft2);
                StaticOutputs { ts, ps, rho, mach, area: self.area, v, iterations }
            }
        }
    }
}
