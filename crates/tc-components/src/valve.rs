//! Bleed valve (variable bleed between two flow paths).

use serde::{Deserialize, Serialize};
use tc_core::constants::{P_STD, T_STD};
use tc_core::interp::Table1;
use tc_core::numeric::{clamp, guarded_div};
use tc_core::Real;

use crate::diag::ExtrapLatch;
use crate::station::Station;

/// Valve bleeding flow from an upstream (higher-pressure) path into a sink
/// path. The commanded position maps to an open-area fraction through
/// `frac_vs_pos`; the corrected flow per unit area comes from a table
/// against the valve pressure ratio, then is un-corrected with the upstream
/// totals:
///
///   Wth = frac Ae Wc/A(PR) (Pt/P_std) / sqrt(Tt/T_std)
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BleedValve {
    pub name: String,
    /// Valve flow area when fully open (in^2).
    pub area: Real,
    /// Open-area fraction vs commanded position. Clamped to [0, 1].
    pub frac_vs_pos: Table1,
    /// Corrected flow per unit area vs valve pressure ratio Pt_up/Pt_sink.
    pub wc_per_area_vs_pr: Table1,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ValveDiag {
    pub flow: ExtrapLatch,
}

#[derive(Clone, Copy, Debug)]
pub struct ValveOutputs {
    /// Bled flow (lbm/s)
    pub w_through: Real,
    /// Open-area fraction actually applied
    pub area_frac: Real,
}

impl BleedValve {
    pub fn compute(
        &self,
        position: Real,
        upstream: &Station,
        pt_sink: Real,
        diag: &mut ValveDiag,
    ) -> ValveOutputs {
        let area_frac = clamp(self.frac_vs_pos.lookup(position).value, 0.0, 1.0);
        let pr = guarded_div(upstream.pt, pt_sink);
        let wc_per_area = self.wc_per_area_vs_pr.lookup(pr);
        diag.flow.note(&self.name, "WcPerArea_vs_PR", wc_per_area.extrapolated);

        let theta = upstream.tt / T_STD;
        let delta = upstream.pt / P_STD;
        let w_through =
            (area_frac * self.area * wc_per_area.value.max(0.0)) * delta / theta.sqrt();
        ValveOutputs { w_through, area_frac }
    }
}
