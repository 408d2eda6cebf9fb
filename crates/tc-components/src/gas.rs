//! Calorically-perfect gas property tables.
//!
//! The working fluid is characterized by two lookups shared by every
//! component in a cycle: gas constant vs fuel-air ratio, and ratio of
//! specific heats vs (fuel-air ratio, total temperature). All derived
//! properties (cp, enthalpy, temperature-from-enthalpy) come from these.

use serde::{Deserialize, Serialize};
use tc_core::interp::{Lookup, Table1, Table2};
use tc_core::{CoreResult, Real};

/// Gas constant and specific-heat-ratio tables for one working fluid.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GasTables {
    /// Gas constant vs fuel-air ratio (BTU/(lbm degR)).
    r_vs_far: Table1,
    /// Ratio of specific heats vs (fuel-air ratio, total temperature).
    gamma_vs_far_tt: Table2,
}

impl GasTables {
    pub fn new(r_vs_far: Table1, gamma_vs_far_tt: Table2) -> CoreResult<Self> {
        Ok(Self { r_vs_far, gamma_vs_far_tt })
    }

    /// Gas constant (BTU/(lbm degR)).
    pub fn r(&self, far: Real) -> Lookup {
        self.r_vs_far.lookup(far)
    }

    /// Ratio of specific heats.
    pub fn gamma(&self, far: Real, tt: Real) -> Lookup {
        self.gamma_vs_far_tt.lookup(far, tt)
    }

    /// Specific heat at constant pressure, cp = gamma R / (gamma - 1)
    /// (BTU/(lbm degR)).
    pub fn cp(&self, far: Real, tt: Real) -> Lookup {
        let r = self.r(far);
        let g = self.gamma(far, tt);
        Lookup {
            value: g.value * r.value / (g.value - 1.0),
            extrapolated: r.extrapolated || g.extrapolated,
        }
    }

    /// Specific total enthalpy at a total temperature, h = cp T (BTU/lbm).
    pub fn enthalpy(&self, tt: Real, far: Real) -> Lookup {
        let cp = self.cp(far, tt);
        Lookup { value: cp.value * tt, extrapolated: cp.extrapolated }
    }

    /// Total temperature recovered from specific total enthalpy, T = h / cp.
    ///
    /// cp depends (weakly, through the gamma table) on the temperature being
    /// solved for, so the inversion takes a cp at the standard-day reference
    /// and refines with two fixed-point passes. For a gamma table that is
    /// flat in temperature this is exact after the first pass.
    pub fn temperature(&self, ht: Real, far: Real) -> Lookup {
        let mut extrap = false;
        let mut tt = {
            let cp = self.cp(far, tc_core::constants::T_STD);
            extrap |= cp.extrapolated;
            ht / cp.value
        };
        for _ in 0..2 {
            let cp = self.cp(far, tt);
            extrap |= cp.extrapolated;
            tt = ht / cp.value;
        }
        Lookup { value: tt, extrapolated: extrap }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tc_core::constants::T_STD;

    fn air() -> GasTables {
        let r = Table1::new(vec![0.0, 0.05], vec![0.0686, 0.0686]).unwrap();
        let g = Table2::new(
            vec![0.0, 0.05],
            vec![300.0, 10000.0],
            vec![1.4, 1.4, 1.4, 1.4],
        )
        .unwrap();
        GasTables::new(r, g).unwrap()
    }

    #[test]
    fn cp_from_gamma_and_r() {
        let gas = air();
        let cp = gas.cp(0.0, T_STD).value;
        // 1.4 * 0.0686 / 0.4
        assert!((cp - 0.2401).abs() < 1e-12);
    }

    #[test]
    fn enthalpy_temperature_inverse() {
        let gas = air();
        let ht = gas.enthalpy(T_STD, 0.0).value;
        let tt = gas.temperature(ht, 0.0).value;
        assert!((tt - T_STD).abs() < 1e-9);
    }

    #[test]
    fn enthalpy_scales_with_temperature() {
        let gas = air();
        let h1 = gas.enthalpy(500.0, 0.0).value;
        let h2 = gas.enthalpy(1000.0, 0.0).value;
        assert!((h2 - 2.0 * h1).abs() < 1e-9);
    }
}
