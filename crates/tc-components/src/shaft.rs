//! Shaft dynamics: net torque to speed derivative.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use tc_core::constants::HP_PER_RPM_TO_FT_LBF;
use tc_core::numeric::guarded_div;
use tc_core::Real;

use crate::error::{ComponentError, ComponentResult};

/// Rigid shaft with rotational inertia. At a steady operating point the net
/// torque vanishes and `ndot` is a residual for the outer balance.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Shaft {
    pub name: String,
    /// Polar moment of inertia (slug-ft^2).
    pub inertia: Real,
}

#[derive(Clone, Copy, Debug)]
pub struct ShaftOutputs {
    /// Mechanical speed, echoed (rpm)
    pub nmech: Real,
    /// Speed derivative (rpm/s)
    pub ndot: Real,
}

impl Shaft {
    pub fn new(name: impl Into<String>, inertia: Real) -> ComponentResult<Self> {
        if !(inertia > 0.0) {
            return Err(ComponentError::InvalidArg { what: "shaft inertia must be positive" });
        }
        Ok(Self { name: name.into(), inertia })
    }

    /// Balance the shaft: sum component torques (ft-lbf, signed) and a
    /// direct power extraction (hp, positive = load), convert the power to
    /// torque at the current speed, and integrate against the inertia.
    pub fn compute(&self, torques: &[Real], pwr_extract_hp: Real, nmech: Real) -> ShaftOutputs {
        let trq_sum: Real = torques.iter().sum();
        let trq_pwr = HP_PER_RPM_TO_FT_LBF * guarded_div(pwr_extract_hp, nmech);
        let ndot = (trq_sum + trq_pwr) * 60.0 / (2.0 * PI * self.inertia);
        ShaftOutputs { nmech, ndot }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_inertia() {
        assert!(Shaft::new("lp", 0.0).is_err());
        assert!(Shaft::new("lp", -1.0).is_err());
        assert!(Shaft::new("lp", 17.44).is_ok());
    }

    #[test]
    fn balanced_torques_give_zero_ndot() {
        let shaft = Shaft::new("lp", 17.44).unwrap();
        let out = shaft.compute(&[1500.0, -900.0, -600.0], 0.0, 5000.0);
        assert!(out.ndot.abs() < 1e-12);
        assert_eq!(out.nmech, 5000.0);
    }

    #[test]
    fn power_extraction_decelerates() {
        let shaft = Shaft::new("hp", 1.86).unwrap();
        let out = shaft.compute(&[0.0], -350.0, 20000.0);
        assert!(out.ndot < 0.0);
    }

    #[test]
    fn ndot_scales_inversely_with_inertia() {
        let light = Shaft::new("a", 1.0).unwrap();
        let heavy = Shaft::new("b", 10.0).unwrap();
        let a = light.compute(&[100.0], 0.0, 5000.0);
        let b = heavy.compute(&[100.0], 0.0, 5000.0);
        assert!((a.ndot / b.ndot - 10.0).abs() < 1e-9);
    }

    #[test]
    fn stopped_shaft_ignores_power_term() {
        let shaft = Shaft::new("lp", 17.44).unwrap();
        let out = shaft.compute(&[250.0], 400.0, 0.0);
        let expect = 250.0 * 60.0 / (2.0 * PI * 17.44);
        assert!((out.ndot - expect).abs() < 1e-9);
    }
}
