//! Duct with Mach-scaled pressure loss.

use serde::{Deserialize, Serialize};
use tc_core::Real;

use crate::gas::GasTables;
use crate::static_calc::{SolveMode, StaticCalc, StaticDiag, StaticOutputs};
use crate::station::Station;

/// Constant-area duct. The design pressure loss `dp_loss` is scaled by the
/// square of the ratio of the actual duct Mach (recovered from the duct's
/// flow area) to the design Mach:
///
///   Pt_out = (1 - (M/M_des)^2 dP) Pt_in
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Duct {
    pub name: String,
    /// Design fractional total-pressure loss dP/P.
    pub dp_loss: Real,
    /// Design Mach number the loss was quoted at.
    pub mn_des: Real,
    /// Duct flow area (in^2).
    pub area: Real,
    /// Initial Mach guess for the static solve.
    pub mn_guess: Real,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct DuctDiag {
    pub statics: StaticDiag,
}

impl Duct {
    pub fn compute(&self, inflow: &Station, gas: &GasTables, diag: &mut DuctDiag) -> Station {
        let statics = self.statics(inflow, gas, diag);
        let m_ratio = statics.mach / self.mn_des;
        let pt_out = (1.0 - m_ratio * m_ratio * self.dp_loss) * inflow.pt;
        inflow.with_pressure(pt_out)
    }

    /// Static state inside the duct (used for the loss scaling above).
    pub fn statics(&self, inflow: &Station, gas: &GasTables, diag: &mut DuctDiag) -> StaticOutputs {
        let calc = StaticCalc {
            name: self.name.clone(),
            mode: SolveMode::KnownArea,
            area: self.area,
            mach: self.mn_guess,
        };
        calc.compute(inflow, gas, &mut diag.statics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tc_core::interp::{Table1, Table2};

    fn gas() -> GasTables {
        let r = Table1::new(vec![0.0, 0.05], vec![0.0686, 0.0686]).unwrap();
        let g = Table2::new(vec![0.0, 0.05], vec![300.0, 10000.0], vec![1.4; 4]).unwrap();
        GasTables::new(r, g).unwrap()
    }

    #[test]
    fn zero_flow_means_zero_loss() {
        let duct = Duct {
            name: "duct".into(),
            dp_loss: 0.01,
            mn_des: 0.45,
            area: 286.9,
            mn_guess: 0.45,
        };
        let st = Station::new(0.0, 124.5, 518.67, 14.696, 0.0);
        let mut diag = DuctDiag::default();
        let out = duct.compute(&st, &gas(), &mut diag);
        assert!((out.pt - st.pt).abs() < 1e-6);
    }

    #[test]
    fn loss_grows_with_flow() {
        let duct = Duct {
            name: "duct".into(),
            dp_loss: 0.01,
            mn_des: 0.45,
            area: 286.9,
            mn_guess: 0.45,
        };
        let gas = gas();
        let mut diag = DuctDiag::default();
        let slow = duct.compute(&Station::new(40.0, 124.5, 518.67, 14.696, 0.0), &gas, &mut diag);
        let fast = duct.compute(&Station::new(80.0, 124.5, 518.67, 14.696, 0.0), &gas, &mut diag);
        assert!(slow.pt < 14.696);
        assert!(fast.pt < slow.pt);
        // Loss never exceeds dP at sonic overspeed of the design Mach ratio
        assert!(fast.pt > 14.696 * (1.0 - (1.0 / 0.45f64).powi(2) * 0.01));
    }

    #[test]
    fn only_pressure_changes() {
        let duct = Duct {
            name: "duct".into(),
            dp_loss: 0.015,
            mn_des: 0.45,
            area: 115.6,
            mn_guess: 0.45,
        };
        let st = Station::new(60.0, 130.0, 540.0, 25.0, 0.0);
        let mut diag = DuctDiag::default();
        let out = duct.compute(&st, &gas(), &mut diag);
        assert_eq!(out.w, st.w);
        assert_eq!(out.ht, st.ht);
        assert_eq!(out.tt, st.tt);
        assert_eq!(out.far, st.far);
        assert!(out.pt < st.pt);
    }
}
