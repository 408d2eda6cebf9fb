//! Map-based compressor with fractional bleeds and stall-margin accounting.
//!
//! The operating point is located on a scaled performance map by corrected
//! speed and an R-line coordinate. Map reads give corrected flow, pressure
//! ratio, and efficiency in map coordinates; design scalars (optionally
//! perturbed by health modifiers) move them to engine coordinates. The
//! mismatch between the flow the map supplies and the flow the gas path
//! carries is returned as a residual for the outer balance.

use serde::{Deserialize, Serialize};
use tc_core::constants::{BTU_PER_SEC_TO_HP, HP_PER_RPM_TO_FT_LBF, P_STD, T_STD};
use tc_core::interp::{Table1, Table2};
use tc_core::numeric::guarded_div;
use tc_core::Real;

use crate::diag::ExtrapLatch;
use crate::gas::GasTables;
use crate::station::Station;

/// One fractional bleed port.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct BleedSpec {
    /// Fraction of inlet flow extracted.
    pub frac_w: Real,
    /// Position of the port in the enthalpy rise (0 = inlet, 1 = exit).
    pub frac_ht: Real,
    /// Position of the port in the pressure rise.
    pub frac_pt: Real,
}

/// Multiplicative health perturbations applied to the map scalars as
/// `s * (1 + modifier)`. All zeros for a nominal machine.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct CompressorHealth {
    pub wc: Real,
    pub pr: Real,
    pub eff: Real,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Compressor {
    pub name: String,
    /// Map corrected flow vs (R-line, map corrected speed).
    pub wc_map: Table2,
    /// Map pressure ratio vs (R-line, map corrected speed).
    pub pr_map: Table2,
    /// Map adiabatic efficiency vs (R-line, map corrected speed).
    pub eff_map: Table2,
    /// Surge pressure ratio vs map corrected flow.
    pub surge_pr: Table1,
    /// Corrected-speed scalar (rpm per unit map speed).
    pub s_nc: Real,
    /// Corrected-flow scalar.
    pub s_wc: Real,
    /// Pressure-ratio scalar, applied to PR - 1.
    pub s_pr: Real,
    /// Efficiency scalar.
    pub s_eff: Real,
    /// Fractional bleed ports, extracted between inlet and exit.
    pub bleeds: Vec<BleedSpec>,
    /// Enthalpy-rise position charged to customer bleed.
    pub cust_frac_ht: Real,
    /// Pressure-rise position of the customer bleed port.
    pub cust_frac_pt: Real,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct CompressorDiag {
    pub map: ExtrapLatch,
    pub surge: ExtrapLatch,
    pub gas: ExtrapLatch,
}

#[derive(Clone, Debug)]
pub struct CompressorOutputs {
    pub outlet: Station,
    /// Fractional bleed extractions, one station per configured port.
    pub bleeds: Vec<Station>,
    /// Customer bleed extraction (zero-flow station when not commanded).
    pub customer: Station,
    /// Shaft torque (ft-lbf, negative: the compressor absorbs power).
    pub torque: Real,
    /// Flow-match residual (Wc_in - Wc_map_scaled) / Wc_in.
    pub nerr: Real,
    /// Inlet corrected flow (lbm/s)
    pub wc_in: Real,
    /// Inlet corrected speed (rpm)
    pub nc: Real,
    /// Map corrected speed
    pub nc_map: Real,
    /// Map corrected flow read from the map
    pub wc_map: Real,
    /// Map pressure ratio read from the map
    pub pr_map: Real,
    /// Map efficiency read from the map
    pub eff_map: Real,
    /// Applied pressure ratio
    pub pr: Real,
    /// Applied adiabatic efficiency
    pub eff: Real,
    /// Stall margin in map coordinates (percent)
    pub sm_map: Real,
    /// Stall margin at the operating point in engine coordinates (percent)
    pub sm_avail: Real,
    /// Net shaft power absorbed, after bleed credits (hp, negative)
    pub pwr: Real,
}

impl Compressor {
    pub fn compute(
        &self,
        inflow: &Station,
        nmech: Real,
        rline: Real,
        w_customer: Real,
        health: CompressorHealth,
        gas: &GasTables,
        diag: &mut CompressorDiag,
    ) -> CompressorOutputs {
        let theta = inflow.tt / T_STD;
        let delta = inflow.pt / P_STD;
        let rt = theta.sqrt();
        let wc_in = inflow.w * rt / delta;
        let nc = guarded_div(nmech, rt);
        let nc_map = nc / self.s_nc;

        let wc_look = self.wc_map.lookup(rline, nc_map);
        let pr_look = self.pr_map.lookup(rline, nc_map);
        let eff_look = self.eff_map.lookup(rline, nc_map);
        diag.map.note(&self.name, "Wc_map", wc_look.extrapolated);
        diag.map.note(&self.name, "PR_map", pr_look.extrapolated);
        diag.map.note(&self.name, "Eff_map", eff_look.extrapolated);

        let s_wc = self.s_wc * (1.0 + health.wc);
        let s_pr = self.s_pr * (1.0 + health.pr);
        let s_eff = self.s_eff * (1.0 + health.eff);

        let wc_scaled = wc_look.value * s_wc;
        let pr = 1.0 + (pr_look.value - 1.0) * s_pr;
        let eff = eff_look.value * s_eff;

        // Isentropic exit state at the applied pressure ratio
        let g = gas.gamma(inflow.far, inflow.tt);
        diag.gas.note(&self.name, "gamma", g.extrapolated);
        let gamma = g.value;
        let tt_ideal = inflow.tt * pr.powf((gamma - 1.0) / gamma);
        let ht_ideal = gas.enthalpy(tt_ideal, inflow.far);
        diag.gas.note(&self.name, "enthalpy", ht_ideal.extrapolated);

        let ht_out = inflow.ht + guarded_div(ht_ideal.value - inflow.ht, eff);
        let tt_out = gas.temperature(ht_out, inflow.far);
        diag.gas.note(&self.name, "temperature", tt_out.extrapolated);
        let pt_out = inflow.pt * pr;

        // Bleed extractions, positioned along the rise
        let mut bleeds = Vec::with_capacity(self.bleeds.len());
        let mut w_bled = 0.0;
        let mut pwr_bleed_credit = 0.0;
        for port in &self.bleeds {
            let w_b = port.frac_w * inflow.w;
            let ht_b = inflow.ht + port.frac_ht * (ht_out - inflow.ht);
            let pt_b = inflow.pt + port.frac_pt * (pt_out - inflow.pt);
            let tt_b = gas.temperature(ht_b, inflow.far);
            diag.gas.note(&self.name, "temperature", tt_b.extrapolated);
            bleeds.push(Station::new(w_b, ht_b, tt_b.value, pt_b, inflow.far));
            w_bled += w_b;
            // The port sees only part of the rise; the remainder is a power
            // credit back to the shaft.
            pwr_bleed_credit += w_b * (ht_out - ht_b) * BTU_PER_SEC_TO_HP;
        }

        let cust_ht = inflow.ht + self.cust_frac_ht * (ht_out - inflow.ht);
        let cust_pt = inflow.pt + self.cust_frac_pt * (pt_out - inflow.pt);
        let cust_tt = gas.temperature(cust_ht, inflow.far);
        diag.gas.note(&self.name, "temperature", cust_tt.extrapolated);
        let customer = Station::new(w_customer, cust_ht, cust_tt.value, cust_pt, inflow.far);
        w_bled += w_customer;
        pwr_bleed_credit += w_customer * (ht_out - cust_ht) * BTU_PER_SEC_TO_HP;

        let w_out = inflow.w - w_bled;
        let outlet = Station::new(w_out, ht_out, tt_out.value, pt_out, inflow.far);

        // Power as if the full inlet flow saw the full rise, then credit
        // back the part of the rise the bled flows never saw.
        let pwr_full = inflow.w * (inflow.ht - ht_out) * BTU_PER_SEC_TO_HP;
        let pwr = pwr_full + pwr_bleed_credit;
        let torque = HP_PER_RPM_TO_FT_LBF * guarded_div(pwr, nmech);

        let nerr = guarded_div(wc_in - wc_scaled, wc_in);

        // Stall margins: in map coordinates at the map read, and in engine
        // coordinates at the operating point.
        let spr_map = self.surge_pr.lookup(wc_look.value);
        diag.surge.note(&self.name, "surge_PR", spr_map.extrapolated);
        let sm_map = 100.0 * guarded_div(spr_map.value - pr_look.value, pr_look.value);

        let wc_map_op = guarded_div(wc_in, s_wc);
        let spr_op = self.surge_pr.lookup(wc_map_op);
        diag.surge.note(&self.name, "surge_PR", spr_op.extrapolated);
        let spr = 1.0 + (spr_op.value - 1.0) * s_pr;
        let sm_avail = 100.0 * guarded_div(spr - pr, pr);

        CompressorOutputs {
            outlet,
            bleeds,
            customer,
            torque,
            nerr,
            wc_in,
            nc,
            nc_map,
            wc_map: wc_look.value,
            pr_map: pr_look.value,
            eff_map: eff_look.value,
            pr,
            eff,
            sm_map,
            sm_avail,
            pwr,
        }
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

    /// Flat synthetic map: Wc 100, PR 2, Eff 0.85 everywhere; surge PR 3.
    fn compressor() -> Compressor {
        let rline = vec![1.0, 3.0];
        let nc = vec![0.5, 1.5];
        Compressor {
            name: "comp".into(),
            wc_map: Table2::new(rline.clone(), nc.clone(), vec![100.0; 4]).unwrap(),
            pr_map: Table2::new(rline.clone(), nc.clone(), vec![2.0; 4]).unwrap(),
            eff_map: Table2::new(rline, nc, vec![0.85; 4]).unwrap(),
            surge_pr: Table1::new(vec![50.0, 150.0], vec![3.0, 3.0]).unwrap(),
            s_nc: 5000.0,
            s_wc: 1.0,
            s_pr: 1.0,
            s_eff: 1.0,
            bleeds: vec![],
            cust_frac_ht: 0.5,
            cust_frac_pt: 0.5,
        }
    }

    fn std_inlet(w: Real) -> Station {
        // Standard-day totals; ht consistent with cp = 0.2401
        Station::new(w, 0.2401 * T_STD, T_STD, P_STD, 0.0)
    }

    #[test]
    fn matched_flow_zeroes_residual() {
        let mut diag = CompressorDiag::default();
        let out = compressor().compute(
            &std_inlet(100.0),
            5000.0,
            2.0,
            0.0,
            CompressorHealth::default(),
            &gas(),
            &mut diag,
        );
        assert!(out.nerr.abs() < 1e-12);
        assert!((out.nc_map - 1.0).abs() < 1e-12);
        assert!((out.outlet.pt - 2.0 * P_STD).abs() < 1e-9);
        assert!(!diag.map.seen());
    }

    #[test]
    fn compression_follows_isentropic_relation_through_efficiency() {
        let mut diag = CompressorDiag::default();
        let inl = std_inlet(100.0);
        let out = compressor().compute(
            &inl,
            5000.0,
            2.0,
            0.0,
            CompressorHealth::default(),
            &gas(),
            &mut diag,
        );
        let tt_ideal = T_STD * 2.0f64.powf(0.4 / 1.4);
        let ht_ideal = 0.2401 * tt_ideal;
        let expect = inl.ht + (ht_ideal - inl.ht) / 0.85;
        assert!((out.outlet.ht - expect).abs() < 1e-9);
        assert!(out.outlet.tt > inl.tt);
        // Work input shows up as negative power and torque
        assert!(out.pwr < 0.0);
        assert!(out.torque < 0.0);
    }

    #[test]
    fn stall_margin_from_surge_line() {
        let mut diag = CompressorDiag::default();
        let out = compressor().compute(
            &std_inlet(100.0),
            5000.0,
            2.0,
            0.0,
            CompressorHealth::default(),
            &gas(),
            &mut diag,
        );
        // (3 - 2) / 2 in percent, identical in both coordinate systems for
        // unity scalars
        assert!((out.sm_map - 50.0).abs() < 1e-9);
        assert!((out.sm_avail - 50.0).abs() < 1e-9);
    }

    #[test]
    fn bleed_port_sees_partial_rise() {
        let mut cfg = compressor();
        cfg.bleeds = vec![BleedSpec { frac_w: 0.1, frac_ht: 0.5, frac_pt: 0.25 }];
        let mut diag = CompressorDiag::default();
        let inl = std_inlet(100.0);
        let out = cfg.compute(
            &inl,
            5000.0,
            2.0,
            0.0,
            CompressorHealth::default(),
            &gas(),
            &mut diag,
        );
        assert!((out.outlet.w - 90.0).abs() < 1e-12);
        let b = &out.bleeds[0];
        assert!((b.w - 10.0).abs() < 1e-12);
        assert!((b.ht - 0.5 * (inl.ht + out.outlet.ht)).abs() < 1e-12);
        assert!((b.pt - (inl.pt + 0.25 * (out.outlet.pt - inl.pt))).abs() < 1e-12);
        // The credit makes the net power smaller in magnitude than the
        // full-flow figure
        let pwr_full = 100.0 * (inl.ht - out.outlet.ht) * BTU_PER_SEC_TO_HP;
        assert!(out.pwr > pwr_full);
        assert!(out.pwr < 0.0);
    }

    #[test]
    fn customer_bleed_reduces_exit_flow() {
        let mut diag = CompressorDiag::default();
        let out = compressor().compute(
            &std_inlet(100.0),
            5000.0,
            2.0,
            2.5,
            CompressorHealth::default(),
            &gas(),
            &mut diag,
        );
        assert!((out.outlet.w - 97.5).abs() < 1e-12);
        assert!((out.customer.w - 2.5).abs() < 1e-12);
    }

    #[test]
    fn health_modifiers_shift_scalars() {
        let mut diag = CompressorDiag::default();
        let gas = gas();
        let nominal = compressor().compute(
            &std_inlet(100.0),
            5000.0,
            2.0,
            0.0,
            CompressorHealth::default(),
            &gas,
            &mut diag,
        );
        let degraded = compressor().compute(
            &std_inlet(100.0),
            5000.0,
            2.0,
            0.0,
            CompressorHealth { wc: -0.05, pr: 0.0, eff: -0.05 },
            &gas,
            &mut diag,
        );
        // Less map flow supplied: residual moves positive
        assert!(degraded.nerr > nominal.nerr);
        // Lower efficiency: hotter exit for the same pressure ratio
        assert!(degraded.outlet.ht > nominal.outlet.ht);
        assert_eq!(degraded.outlet.pt, nominal.outlet.pt);
    }

    #[test]
    fn off_grid_speed_latches_advisory() {
        let mut diag = CompressorDiag::default();
        let _ = compressor().compute(
            &std_inlet(100.0),
            // nc_map = 4, beyond the grid
            20000.0,
            2.0,
            0.0,
            CompressorHealth::default(),
            &gas(),
            &mut diag,
        );
        assert!(diag.map.seen());
    }
}
