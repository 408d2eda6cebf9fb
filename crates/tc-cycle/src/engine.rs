//! The twin-spool engine network and its single-point evaluation.

use serde::{Deserialize, Serialize};
use tc_components::{
    split, Ambient, AmbientDiag, BleedValve, Burner, BurnerDiag, Compressor, CompressorDiag,
    Duct, DuctDiag, GasTables, Inlet, InletDiag, Nozzle, NozzleDiag, Shaft, Station, StaticCalc,
    StaticDiag, Turbine, TurbineDiag, ValveDiag,
};
use tc_core::constants::GRAVITY;
use tc_core::Real;

use crate::boundary::{
    Commands, Controls, Diagnostics, Environment, Evaluation, HealthParams, Outputs, Residuals,
    States, Targets,
};
use crate::error::{CycleError, CycleResult};

/// A complete engine deck: gas model, every gas-path component, and the
/// shaft/gear arrangement. Immutable during evaluation; the same deck can
/// serve any number of operating-point evaluations.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Engine {
    pub gas: GasTables,
    pub ambient: Ambient,
    pub inlet: Inlet,
    pub fan: Compressor,
    pub lpc: Compressor,
    pub hpc: Compressor,
    /// Splitter-to-LPC transition duct
    pub duct2: Duct,
    /// LPC-to-HPC transition duct
    pub duct25: Duct,
    /// Bypass duct ahead of the fan nozzle
    pub duct17: Duct,
    /// HPT-to-LPT interturbine duct
    pub duct45: Duct,
    /// LPT exit duct ahead of the core nozzle
    pub duct5: Duct,
    /// Variable bleed valve, LPC exit into the bypass
    pub vbv: BleedValve,
    /// Static-state recovery at the HPC exit
    pub hpc_exit_static: StaticCalc,
    pub burner: Burner,
    pub hpt: Turbine,
    pub lpt: Turbine,
    /// Variable-area fan nozzle; throat and exit track the area command
    pub bypass_nozzle: Nozzle,
    pub core_nozzle: Nozzle,
    pub core_nozzle_throat_area: Real,
    /// Deck geometry; a convergent core nozzle exhausts at the throat, so
    /// this area only participates for a con-di configuration.
    pub core_nozzle_exit_area: Real,
    /// Fan reduction gear ratio (N2 to fan speed)
    pub gear_ratio: Real,
    pub lp_shaft: Shaft,
    /// LPT-to-LP-shaft transmission efficiency applied to the LPT torque
    pub lp_shaft_eff: Real,
    pub hp_shaft: Shaft,
}

/// Advisory latches for one evaluation context, one set per component
/// instance. Fresh latches warn again; a reused set stays quiet after the
/// first advisory per instance and table.
#[derive(Clone, Copy, Debug, Default)]
pub struct EngineDiag {
    pub ambient: AmbientDiag,
    pub inlet: InletDiag,
    pub fan: CompressorDiag,
    pub lpc: CompressorDiag,
    pub hpc: CompressorDiag,
    pub duct2: DuctDiag,
    pub duct25: DuctDiag,
    pub duct17: DuctDiag,
    pub duct45: DuctDiag,
    pub duct5: DuctDiag,
    pub vbv: ValveDiag,
    pub hpc_exit_static: StaticDiag,
    pub burner: BurnerDiag,
    pub hpt: TurbineDiag,
    pub lpt: TurbineDiag,
    pub bypass_nozzle: NozzleDiag,
    pub core_nozzle: NozzleDiag,
}

impl Engine {
    /// Freestream totals and statics for external trim logic:
    /// `[Tt0, Pt0, Ts0, Ps0]`.
    pub fn ambient_conditions(&self, env: &Environment, diag: &mut EngineDiag) -> [Real; 4] {
        let amb = self
            .ambient
            .compute(env.alt, env.mach, env.d_t_amb, &self.gas, &mut diag.ambient);
        [amb.tt, amb.pt, amb.ts, amb.ps]
    }

    /// Evaluate the network once at the given operating point.
    ///
    /// Pure with respect to the deck: the only mutation is the advisory
    /// latch set, which never feeds back into the numbers. Component
    /// evaluation follows the gas path; the three flow-path guesses (W,
    /// R-lines, PRs, BPR) close through the residual vector.
    pub fn evaluate(
        &self,
        env: &Environment,
        cmd: &Commands,
        targets: &Targets,
        health: &HealthParams,
        diag: &mut EngineDiag,
    ) -> CycleResult<Evaluation> {
        // Freestream
        let amb = self
            .ambient
            .compute(env.alt, env.mach, env.d_t_amb, &self.gas, &mut diag.ambient);
        let st0 = Station::new(cmd.w, amb.ht, amb.tt, amb.pt, amb.far);
        let fdrag = cmd.w * amb.v0 / GRAVITY;

        // Inlet and fan
        let st2 = self.inlet.compute(&st0, amb.ps, &mut diag.inlet);
        let n_fan = cmd.n2 / self.gear_ratio;
        let fan = self.fan.compute(
            &st2,
            n_fan,
            cmd.fan_rline,
            0.0,
            health.fan,
            &self.gas,
            &mut diag.fan,
        );

        // Splitter: bypass leg (13) and core leg (22)
        let (st13, st22) = split(&fan.outlet, cmd.bpr);

        // Core leg through the booster
        let st23 = self.duct2.compute(&st22, &self.gas, &mut diag.duct2);
        let lpc = self.lpc.compute(
            &st23,
            cmd.n2,
            cmd.lpc_rline,
            0.0,
            health.lpc,
            &self.gas,
            &mut diag.lpc,
        );

        // Variable bleed valve moves LPC-exit flow into the bypass
        let vbv = self
            .vbv
            .compute(cmd.vbv_pos, &lpc.outlet, st13.pt, &mut diag.vbv);
        let st24 = lpc.outlet.with_flow(lpc.outlet.w - vbv.w_through);
        let st15 = st13.with_flow(st13.w + vbv.w_through);

        let st25 = self.duct25.compute(&st24, &self.gas, &mut diag.duct25);

        // Bypass leg to the fan nozzle
        let st17 = self.duct17.compute(&st15, &self.gas, &mut diag.duct17);
        let byp_noz = self.bypass_nozzle.compute(
            &st17,
            amb.ps,
            cmd.vafn_area,
            cmd.vafn_area,
            &self.gas,
            &mut diag.bypass_nozzle,
        );

        // High-pressure compressor and its exit statics
        let hpc = self.hpc.compute(
            &st25,
            cmd.n3,
            cmd.hpc_rline,
            0.0,
            health.hpc,
            &self.gas,
            &mut diag.hpc,
        );
        let hpc_statics =
            self.hpc_exit_static
                .compute(&hpc.outlet, &self.gas, &mut diag.hpc_exit_static);

        // Burner
        let burner = self
            .burner
            .compute(cmd.wf, &hpc.outlet, &self.gas, &mut diag.burner);

        // Turbines; HPC bleeds 2 and 3 cool the HPT, bleed 1 the LPT
        if hpc.bleeds.len() != 3 {
            return Err(CycleError::Config {
                what: "HPC must carry three fractional bleed ports",
            });
        }
        let hpt = self.hpt.compute(
            &burner.outlet,
            cmd.n3,
            cmd.hpt_pr,
            &[hpc.bleeds[1], hpc.bleeds[2]],
            health.hpt,
            &self.gas,
            &mut diag.hpt,
        )?;
        let st48 = self.duct45.compute(&hpt.outlet, &self.gas, &mut diag.duct45);
        let lpt = self.lpt.compute(
            &st48,
            cmd.n2,
            cmd.lpt_pr,
            &[hpc.bleeds[0]],
            health.lpt,
            &self.gas,
            &mut diag.lpt,
        )?;

        // Core nozzle
        let st7 = self.duct5.compute(&lpt.outlet, &self.gas, &mut diag.duct5);
        let core_noz = self.core_nozzle.compute(
            &st7,
            amb.ps,
            self.core_nozzle_throat_area,
            self.core_nozzle_exit_area,
            &self.gas,
            &mut diag.core_nozzle,
        );

        // Shaft balances; the fan torque crosses the reduction gear
        let lp = self.lp_shaft.compute(
            &[
                fan.torque / self.gear_ratio,
                lpc.torque,
                lpt.torque * self.lp_shaft_eff,
            ],
            cmd.lp_pwr,
            cmd.n2,
        );
        let hp = self
            .hp_shaft
            .compute(&[hpc.torque, hpt.torque], cmd.hp_pwr, cmd.n3);

        // Performance summary
        let fg = byp_noz.fg + core_noz.fg;
        let fc = tc_components::fuel_consumption(cmd.wf, fg, fdrag);

        let residuals = Residuals {
            fan_flow: fan.nerr,
            lpc_flow: lpc.nerr,
            hpc_flow: hpc.nerr,
            hpt_flow: hpt.nerr,
            lpt_flow: lpt.nerr,
            core_nozzle_flow: core_noz.nerr,
            bypass_nozzle_flow: byp_noz.nerr,
            lp_accel: lp.ndot,
            hp_accel: hp.ndot,
            lpc_stall_margin: lpc.sm_map - targets.lpc_sm,
            net_thrust: fc.fnet - targets.fnet,
            tt45: hpt.outlet.tt - targets.tt45,
        };

        let states = States { n2: lp.nmech, n3: hp.nmech };
        let controls = Controls {
            wf: cmd.wf,
            hp_pwr: cmd.hp_pwr,
            lp_pwr: cmd.lp_pwr,
        };

        let outputs = Outputs {
            n_fan: lp.nmech / self.gear_ratio,
            n2: lp.nmech,
            n3: hp.nmech,
            w0: st0.w,
            tt0: st0.tt,
            pt0: st0.pt,
            w2: st2.w,
            tt2: st2.tt,
            pt2: st2.pt,
            w21: fan.outlet.w,
            tt21: fan.outlet.tt,
            pt21: fan.outlet.pt,
            w13: st13.w,
            tt13: st13.tt,
            pt13: st13.pt,
            w15: st15.w,
            tt15: st15.tt,
            pt15: st15.pt,
            w17: st17.w,
            tt17: st17.tt,
            pt17: st17.pt,
            w22: st22.w,
            tt22: st22.tt,
            pt22: st22.pt,
            w23: st23.w,
            tt23: st23.tt,
            pt23: st23.pt,
            w24a: lpc.outlet.w,
            tt24a: lpc.outlet.tt,
            pt24a: lpc.outlet.pt,
            w24: st24.w,
            tt24: st24.tt,
            pt24: st24.pt,
            w25: st25.w,
            tt25: st25.tt,
            pt25: st25.pt,
            w36: hpc.outlet.w,
            tt36: hpc.outlet.tt,
            pt36: hpc.outlet.pt,
            ps36: hpc_statics.ps,
            w4: burner.outlet.w,
            tt4: burner.outlet.tt,
            pt4: burner.outlet.pt,
            w45: hpt.outlet.w,
            tt45: hpt.outlet.tt,
            pt45: hpt.outlet.pt,
            w48: st48.w,
            tt48: st48.tt,
            pt48: st48.pt,
            w5: lpt.outlet.w,
            tt5: lpt.outlet.tt,
            pt5: lpt.outlet.pt,
            w7: st7.w,
            tt7: st7.tt,
            pt7: st7.pt,
            fdrag,
            fg,
            fnet: fc.fnet,
            fg_bypass: byp_noz.fg,
            fg_core: core_noz.fg,
            tsfc: fc.sfc,
            sm_fan: fan.sm_map,
            sm_lpc: lpc.sm_map,
            sm_hpc: hpc.sm_map,
        };

        let diagnostics = Diagnostics {
            nc_lpc: lpc.nc,
            nc_hpc: hpc.nc,
            nc_map_fan: fan.nc_map,
            nc_map_lpc: lpc.nc_map,
            nc_map_hpc: hpc.nc_map,
            nc_map_hpt: hpt.nc_map,
            nc_map_lpt: lpt.nc_map,
            trq_fan: fan.torque,
            trq_lpc: lpc.torque,
            trq_hpc: hpc.torque,
            trq_hpt: hpt.torque,
            trq_lpt: lpt.torque,
            ps0: amb.ps,
        };

        Ok(Evaluation {
            residuals,
            states,
            controls,
            outputs,
            diagnostics,
        })
    }

    /// Flat-vector entry point: validates lengths, then evaluates.
    pub fn evaluate_flat(
        &self,
        env: &[Real],
        cmd: &[Real],
        targets: &[Real],
        health: &[Real],
        diag: &mut EngineDiag,
    ) -> CycleResult<Evaluation> {
        let env = Environment::from_slice(env)?;
        let cmd = Commands::from_slice(cmd)?;
        let targets = Targets::from_slice(targets)?;
        let health = HealthParams::from_slice(health)?;
        self.evaluate(&env, &cmd, &targets, &health, diag)
    }
}
