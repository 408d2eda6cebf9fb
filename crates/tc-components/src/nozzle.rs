//! Exhaust nozzle: throat/exit statics, flow capacity, and gross thrust.
//!
//! The throat state follows from the nozzle pressure ratio: below the
//! critical ratio the throat expands to ambient static pressure; at or
//! above it the throat chokes at Mach 1 and the throat static pressure is
//! set by the critical ratio. The flow the nozzle can pass at that state is
//! compared against the flow the gas path delivers and returned as a
//! residual. Gross thrust combines exit momentum and the pressure term over
//! the exit area, with discharge, velocity, and thrust coefficients looked
//! up against the pressure ratio and a thermal-growth factor on the areas.

use serde::{Deserialize, Serialize};
use tc_core::constants::{BTU_TO_FT_LBF, GRAVITY, SQIN_PER_SQFT};
use tc_core::interp::Table1;
use tc_core::numeric::guarded_div;
use tc_core::Real;

use crate::diag::ExtrapLatch;
use crate::gas::GasTables;
use crate::station::Station;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NozzleGeometry {
    /// Exit plane is the throat.
    Convergent,
    /// Divergent section expands supersonically when choked; behaves as a
    /// convergent nozzle otherwise.
    ConvergentDivergent,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Nozzle {
    pub name: String,
    pub geometry: NozzleGeometry,
    /// Discharge coefficient vs nozzle pressure ratio.
    pub cd_vs_pr: Table1,
    /// Velocity coefficient vs nozzle pressure ratio.
    pub cv_vs_pr: Table1,
    /// Gross-thrust coefficient vs nozzle pressure ratio; `None` applies
    /// the velocity coefficient to the momentum term instead.
    pub cfg_vs_pr: Option<Table1>,
    /// Thermal growth factor on areas vs total temperature.
    pub tg_vs_tt: Table1,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct NozzleDiag {
    pub coeffs: ExtrapLatch,
    pub gas: ExtrapLatch,
}

#[derive(Clone, Copy, Debug)]
pub struct NozzleOutputs {
    /// Gross thrust (lbf)
    pub fg: Real,
    /// Flow-match residual (W - W_calc) / W.
    pub nerr: Real,
    /// Flow the nozzle passes at the solved throat state (lbm/s)
    pub w_calc: Real,
    pub choked: bool,
    /// Effective throat area after thermal growth (in^2)
    pub ath: Real,
    /// Effective exit area after thermal growth (in^2)
    pub ax: Real,
    /// Throat static pressure (psia)
    pub ps_th: Real,
    /// Throat static temperature (degR)
    pub ts_th: Real,
    /// Throat Mach
    pub mach_th: Real,
    /// Throat velocity (ft/s)
    pub v_th: Real,
    /// Exit static pressure (psia)
    pub ps_x: Real,
    /// Exit Mach
    pub mach_x: Real,
    /// Exit velocity (ft/s)
    pub v_x: Real,
}

/// Area ratio A/A* for isentropic flow at Mach `m`.
fn area_ratio(gamma: Real, m: Real) -> Real {
    let e = (gamma + 1.0) / (2.0 * (gamma - 1.0));
    (1.0 / m) * ((2.0 / (gamma + 1.0)) * (1.0 + 0.5 * (gamma - 1.0) * m * m)).powf(e)
}

/// Supersonic Mach matching an exit-to-throat area ratio, by bisection.
fn supersonic_mach(gamma: Real, ratio: Real) -> Real {
    if ratio <= 1.0 {
        return 1.0;
    }
    let (mut lo, mut hi) = (1.0, 10.0);
    for _ in 0..60 {
        let mid = 0.5 * (lo + hi);
        if area_ratio(gamma, mid) < ratio {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    0.5 * (lo + hi)
}

impl Nozzle {
    /// Evaluate at an upstream station against ambient static pressure,
    /// with geometric throat and exit areas (in^2) supplied per call so
    /// variable-area nozzles can be commanded.
    pub fn compute(
        &self,
        inflow: &Station,
        ps_amb: Real,
        a_throat: Real,
        a_exit: Real,
        gas: &GasTables,
        diag: &mut NozzleDiag,
    ) -> NozzleOutputs {
        let g = gas.gamma(inflow.far, inflow.tt);
        let r = gas.r(inflow.far);
        diag.gas.note(&self.name, "gamma", g.extrapolated);
        diag.gas.note(&self.name, "R", r.extrapolated);
        let gamma = g.value;
        let r_mech = r.value * BTU_TO_FT_LBF;
        let gm1 = gamma - 1.0;

        let pq = guarded_div(inflow.pt, ps_amb);
        let tg = self.tg_vs_tt.lookup(inflow.tt);
        let cd = self.cd_vs_pr.lookup(pq);
        let cv = self.cv_vs_pr.lookup(pq);
        diag.coeffs.note(&self.name, "TG_vs_Tt", tg.extrapolated);
        diag.coeffs.note(&self.name, "Cd_vs_PR", cd.extrapolated);
        diag.coeffs.note(&self.name, "Cv_vs_PR", cv.extrapolated);

        let ath = a_throat * tg.value;
        let pr_crit = (0.5 * (gamma + 1.0)).powf(gamma / gm1);
        let choked = pq >= pr_crit;

        let (mach_th, ps_th) = if choked {
            (1.0, inflow.pt / pr_crit)
        } else {
            // Throat expands to ambient; Mach from the isentropic relation
            let m2 = (pq.max(1.0).powf(gm1 / gamma) - 1.0) * 2.0 / gm1;
            (m2.max(0.0).sqrt(), ps_amb)
        };
        let ts_th = inflow.tt / (1.0 + 0.5 * gm1 * mach_th * mach_th);
        let a_th = (gamma * GRAVITY * r_mech * ts_th).sqrt();
        let v_th = mach_th * a_th;
        let rho_th = ps_th * SQIN_PER_SQFT / (r_mech * ts_th);
        let w_calc = cd.value * rho_th * (ath / SQIN_PER_SQFT) * v_th;

        // Exit plane
        let (ax, ps_x, mach_x, v_x) = match self.geometry {
            NozzleGeometry::Convergent => (ath, ps_th, mach_th, v_th),
            NozzleGeometry::ConvergentDivergent => {
                let ax = a_exit * tg.value;
                if choked && ax > ath {
                    let mach_x = supersonic_mach(gamma, ax / ath);
                    let ram = 1.0 + 0.5 * gm1 * mach_x * mach_x;
                    let ps_x = inflow.pt / ram.powf(gamma / gm1);
                    let ts_x = inflow.tt / ram;
                    let v_x = mach_x * (gamma * GRAVITY * r_mech * ts_x).sqrt();
                    (ax, ps_x, mach_x, v_x)
                } else {
                    (ath, ps_th, mach_th, v_th)
                }
            }
        };

        let momentum = inflow.w * v_x * cv.value / GRAVITY;
        let pressure = (ps_x - ps_amb) * ax;
        let fg = match &self.cfg_vs_pr {
            Some(tbl) => {
                let cfg = tbl.lookup(pq);
                diag.coeffs.note(&self.name, "Cfg_vs_PR", cfg.extrapolated);
                cfg.value * (momentum + pressure)
            }
            None => momentum + pressure,
        };

        let nerr = guarded_div(inflow.w - w_calc, inflow.w);

        NozzleOutputs {
            fg,
            nerr,
            w_calc,
            choked,
            ath,
            ax,
            ps_th,
            ts_th,
            mach_th,
            v_th,
            ps_x,
            mach_x,
            v_x,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tc_core::constants::P_STD;
    use tc_core::interp::Table2;

    fn gas() -> GasTables {
        let r = Table1::new(vec![0.0, 0.05], vec![0.0686, 0.0686]).unwrap();
        let g = Table2::new(vec![0.0, 0.05], vec![300.0, 10000.0], vec![1.4; 4]).unwrap();
        GasTables::new(r, g).unwrap()
    }

    fn unit(x: Real) -> Table1 {
        Table1::new(vec![0.0, 10000.0], vec![x, x]).unwrap()
    }

    fn nozzle(geometry: NozzleGeometry) -> Nozzle {
        Nozzle {
            name: "noz".into(),
            geometry,
            cd_vs_pr: unit(1.0),
            cv_vs_pr: unit(1.0),
            cfg_vs_pr: Some(unit(0.9975)),
            tg_vs_tt: unit(1.0),
        }
    }

    #[test]
    fn critical_pressure_ratio_boundary() {
        let gas = gas();
        let mut diag = NozzleDiag::default();
        let noz = nozzle(NozzleGeometry::Convergent);
        // gamma = 1.4: PRcrit = 1.2^3.5 = 1.8929
        let low = Station::new(50.0, 0.2401 * 1000.0, 1000.0, P_STD * 1.5, 0.0);
        let out = noz.compute(&low, P_STD, 400.0, 400.0, &gas, &mut diag);
        assert!(!out.choked);
        assert!(out.mach_th < 1.0);
        assert_eq!(out.ps_th, P_STD);

        let high = Station::new(50.0, 0.2401 * 1000.0, 1000.0, P_STD * 2.5, 0.0);
        let out = noz.compute(&high, P_STD, 400.0, 400.0, &gas, &mut diag);
        assert!(out.choked);
        assert_eq!(out.mach_th, 1.0);
        assert!((out.ps_th - P_STD * 2.5 / 1.2f64.powf(3.5)).abs() < 1e-9);
        assert!(out.ps_th > P_STD);
    }

    #[test]
    fn flow_capacity_scales_with_area() {
        let gas = gas();
        let mut diag = NozzleDiag::default();
        let noz = nozzle(NozzleGeometry::Convergent);
        let st = Station::new(50.0, 0.2401 * 1000.0, 1000.0, P_STD * 3.0, 0.0);
        let small = noz.compute(&st, P_STD, 200.0, 200.0, &gas, &mut diag);
        let large = noz.compute(&st, P_STD, 400.0, 400.0, &gas, &mut diag);
        assert!((large.w_calc - 2.0 * small.w_calc).abs() < 1e-9);
    }

    #[test]
    fn matched_flow_zeroes_residual() {
        let gas = gas();
        let mut diag = NozzleDiag::default();
        let noz = nozzle(NozzleGeometry::Convergent);
        let feed = Station::new(50.0, 0.2401 * 1000.0, 1000.0, P_STD * 3.0, 0.0);
        let w_calc = noz.compute(&feed, P_STD, 400.0, 400.0, &gas, &mut diag).w_calc;
        let matched = feed.with_flow(w_calc);
        let out = noz.compute(&matched, P_STD, 400.0, 400.0, &gas, &mut diag);
        assert!(out.nerr.abs() < 1e-12);
        assert!(out.fg > 0.0);
    }

    #[test]
    fn unchoked_thrust_is_pure_momentum() {
        let gas = gas();
        let mut diag = NozzleDiag::default();
        let noz = nozzle(NozzleGeometry::Convergent);
        let st = Station::new(50.0, 0.2401 * 1000.0, 1000.0, P_STD * 1.5, 0.0);
        let out = noz.compute(&st, P_STD, 400.0, 400.0, &gas, &mut diag);
        // Exit at ambient pressure, so only the momentum term remains
        let expect = 0.9975 * 50.0 * out.v_x / GRAVITY;
        assert!((out.fg - expect).abs() < 1e-9);
    }

    #[test]
    fn divergent_section_expands_when_choked() {
        let gas = gas();
        let mut diag = NozzleDiag::default();
        let con = nozzle(NozzleGeometry::Convergent);
        let cd = nozzle(NozzleGeometry::ConvergentDivergent);
        let st = Station::new(50.0, 0.2401 * 1500.0, 1500.0, P_STD * 5.0, 0.0);
        let base = con.compute(&st, P_STD, 200.0, 200.0, &gas, &mut diag);
        let out = cd.compute(&st, P_STD, 200.0, 300.0, &gas, &mut diag);
        assert!(out.choked);
        assert!(out.mach_x > 1.0);
        assert!(out.v_x > base.v_x);
        assert!(out.ps_x < base.ps_x);
        // Same throat state either way
        assert_eq!(out.w_calc, base.w_calc);
    }

    #[test]
    fn thermal_growth_scales_areas() {
        let gas = gas();
        let mut diag = NozzleDiag::default();
        let mut noz = nozzle(NozzleGeometry::Convergent);
        noz.tg_vs_tt = Table1::new(vec![0.0, 10000.0], vec![1.02, 1.02]).unwrap();
        let st = Station::new(50.0, 0.2401 * 1000.0, 1000.0, P_STD * 3.0, 0.0);
        let out = noz.compute(&st, P_STD, 400.0, 400.0, &gas, &mut diag);
        assert!((out.ath - 408.0).abs() < 1e-9);
    }

    #[test]
    fn area_ratio_solve_is_consistent() {
        // Solved supersonic Mach reproduces the requested area ratio
        let m = supersonic_mach(1.4, 2.0);
        assert!((area_ratio(1.4, m) - 2.0).abs() < 1e-9);
        assert!(m > 1.5 && m < 2.5);
        assert_eq!(supersonic_mach(1.4, 1.0), 1.0);
    }
}
