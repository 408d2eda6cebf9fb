//! Ambient atmosphere and freestream conditions.

use serde::{Deserialize, Serialize};
use tc_core::constants::{BTU_TO_FT_LBF, GRAVITY};
use tc_core::interp::Table1;
use tc_core::Real;

use crate::diag::ExtrapLatch;
use crate::gas::GasTables;

/// Standard-atmosphere model: static temperature and pressure vs altitude,
/// plus compressible ram recovery to totals at the flight Mach number.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Ambient {
    pub name: String,
    /// Fuel-air ratio of the freestream (normally zero).
    pub far: Real,
    /// Static temperature vs altitude (degR vs ft).
    pub ts_vs_alt: Table1,
    /// Static pressure vs altitude (psia vs ft).
    pub ps_vs_alt: Table1,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct AmbientDiag {
    pub atmosphere: ExtrapLatch,
    pub gas: ExtrapLatch,
}

#[derive(Clone, Copy, Debug)]
pub struct AmbientOutputs {
    /// Freestream total enthalpy (BTU/lbm)
    pub ht: Real,
    /// Freestream total temperature (degR)
    pub tt: Real,
    /// Freestream total pressure (psia)
    pub pt: Real,
    /// Fuel-air ratio
    pub far: Real,
    /// Ambient static pressure (psia)
    pub ps: Real,
    /// Ambient static temperature (degR)
    pub ts: Real,
    /// Flight velocity (ft/s)
    pub v0: Real,
}

impl Ambient {
    /// Evaluate the atmosphere at `alt` (ft), flight Mach `mach`, and
    /// temperature offset `d_t_amb` (degR added to the standard-day static).
    pub fn compute(
        &self,
        alt: Real,
        mach: Real,
        d_t_amb: Real,
        gas: &GasTables,
        diag: &mut AmbientDiag,
    ) -> AmbientOutputs {
        let ts_look = self.ts_vs_alt.lookup(alt);
        let ps_look = self.ps_vs_alt.lookup(alt);
        diag.atmosphere.note(&self.name, "Ts_vs_alt", ts_look.extrapolated);
        diag.atmosphere.note(&self.name, "Ps_vs_alt", ps_look.extrapolated);

        let ts = ts_look.value + d_t_amb;
        let ps = ps_look.value;

        let g = gas.gamma(self.far, ts);
        let r = gas.r(self.far);
        diag.gas.note(&self.name, "gamma", g.extrapolated);
        diag.gas.note(&self.name, "R", r.extrapolated);
        let gamma = g.value;

        let ram = 1.0 + 0.5 * (gamma - 1.0) * mach * mach;
        let tt = ts * ram;
        let pt = ps * ram.powf(gamma / (gamma - 1.0));

        let ht_look = gas.enthalpy(tt, self.far);
        diag.gas.note(&self.name, "enthalpy", ht_look.extrapolated);

        // Speed of sound uses R in mechanical units (ft-lbf/(lbm degR))
        let r_mech = r.value * BTU_TO_FT_LBF;
        let v0 = mach * (gamma * GRAVITY * r_mech * ts).sqrt();

        AmbientOutputs {
            ht: ht_look.value,
            tt,
            pt,
            far: self.far,
            ps,
            ts,
            v0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gas::GasTables;
    use tc_core::constants::{P_STD, T_STD};
    use tc_core::interp::{Table1, Table2};

    fn gas() -> GasTables {
        let r = Table1::new(vec![0.0, 0.05], vec![0.0686, 0.0686]).unwrap();
        let g = Table2::new(
            vec![0.0, 0.05],
            vec![300.0, 10000.0],
            vec![1.4; 4],
        )
        .unwrap();
        GasTables::new(r, g).unwrap()
    }

    fn ambient() -> Ambient {
        Ambient {
            name: "amb".into(),
            far: 0.0,
            ts_vs_alt: Table1::new(vec![0.0, 36089.0], vec![T_STD, 389.97]).unwrap(),
            ps_vs_alt: Table1::new(vec![0.0, 36089.0], vec![P_STD, 3.283]).unwrap(),
        }
    }

    #[test]
    fn sea_level_static_matches_standard_day() {
        let mut diag = AmbientDiag::default();
        let out = ambient().compute(0.0, 0.0, 0.0, &gas(), &mut diag);
        assert_eq!(out.ts, T_STD);
        assert_eq!(out.ps, P_STD);
        assert_eq!(out.tt, T_STD);
        assert_eq!(out.pt, P_STD);
        assert_eq!(out.v0, 0.0);
        assert!(!diag.atmosphere.seen());
    }

    #[test]
    fn ram_rise_at_mach() {
        let mut diag = AmbientDiag::default();
        let out = ambient().compute(0.0, 0.5, 0.0, &gas(), &mut diag);
        // Tt/Ts = 1 + 0.2 M^2 = 1.05
        assert!((out.tt / out.ts - 1.05).abs() < 1e-12);
        assert!(out.pt > out.ps);
        assert!(out.v0 > 0.0);
    }

    #[test]
    fn temperature_offset_shifts_static_only() {
        let mut diag = AmbientDiag::default();
        let base = ambient().compute(0.0, 0.0, 0.0, &gas(), &mut diag);
        let hot = ambient().compute(0.0, 0.0, 27.0, &gas(), &mut diag);
        assert!((hot.ts - base.ts - 27.0).abs() < 1e-12);
        assert_eq!(hot.ps, base.ps);
    }

    #[test]
    fn altitude_above_grid_latches_advisory() {
        let mut diag = AmbientDiag::default();
        let _ = ambient().compute(80000.0, 0.0, 0.0, &gas(), &mut diag);
        assert!(diag.atmosphere.seen());
    }
}
