//! Typed boundary vectors for the evaluator.
//!
//! The external solver exchanges flat `f64` vectors with the engine. Every
//! vector has a named-record form here, with `from_slice`/`to_array`
//! preserving the element order the flat interface promises. Changing any
//! of these orders is a wire-format break.

use serde::{Deserialize, Serialize};
use tc_components::{CompressorHealth, TurbineHealth};
use tc_core::numeric::ensure_finite;
use tc_core::Real;

use crate::error::{CycleError, CycleResult};

pub const ENV_LEN: usize = 3;
pub const CMD_LEN: usize = 14;
pub const TARGET_LEN: usize = 3;
pub const HEALTH_LEN: usize = 13;
pub const RESIDUAL_LEN: usize = 12;
pub const STATE_LEN: usize = 2;
pub const CONTROL_LEN: usize = 3;
pub const OUTPUT_LEN: usize = 64;
pub const DIAG_LEN: usize = 13;

fn expect_len(slice: &[Real], expected: usize, what: &'static str) -> CycleResult<()> {
    if slice.len() != expected {
        return Err(CycleError::LengthMismatch {
            what,
            expected,
            got: slice.len(),
        });
    }
    Ok(())
}

/// Length plus element-wise finiteness. A NaN or Inf smuggled in through
/// the flat interface would otherwise propagate silently through every
/// downstream station.
fn expect_vector(slice: &[Real], expected: usize, what: &'static str) -> CycleResult<()> {
    expect_len(slice, expected, what)?;
    for &v in slice {
        ensure_finite(v, what)?;
    }
    Ok(())
}

/// Flight condition.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct Environment {
    /// Altitude (ft)
    pub alt: Real,
    /// Flight Mach number
    pub mach: Real,
    /// Delta from standard-day static temperature (degR)
    pub d_t_amb: Real,
}

impl Environment {
    pub fn from_slice(v: &[Real]) -> CycleResult<Self> {
        expect_vector(v, ENV_LEN, "environment vector")?;
        Ok(Self { alt: v[0], mach: v[1], d_t_amb: v[2] })
    }

    pub fn to_array(self) -> [Real; ENV_LEN] {
        [self.alt, self.mach, self.d_t_amb]
    }
}

/// Solver guesses and actuator commands for one evaluation.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct Commands {
    /// Engine inlet mass flow guess (lbm/s)
    pub w: Real,
    /// Fan operating-line coordinate guess
    pub fan_rline: Real,
    /// LPC operating-line coordinate guess
    pub lpc_rline: Real,
    /// HPC operating-line coordinate guess
    pub hpc_rline: Real,
    /// Bypass ratio guess
    pub bpr: Real,
    /// HPT pressure ratio guess
    pub hpt_pr: Real,
    /// LPT pressure ratio guess
    pub lpt_pr: Real,
    /// Fuel flow (lbm/s)
    pub wf: Real,
    /// Variable-area fan nozzle throat area command (in^2)
    pub vafn_area: Real,
    /// Variable bleed valve position command
    pub vbv_pos: Real,
    /// LP spool mechanical speed (rpm)
    pub n2: Real,
    /// HP spool mechanical speed (rpm)
    pub n3: Real,
    /// HP shaft power extraction (hp)
    pub hp_pwr: Real,
    /// LP shaft power extraction (hp)
    pub lp_pwr: Real,
}

impl Commands {
    pub fn from_slice(v: &[Real]) -> CycleResult<Self> {
        expect_vector(v, CMD_LEN, "command vector")?;
        Ok(Self {
            w: v[0],
            fan_rline: v[1],
            lpc_rline: v[2],
            hpc_rline: v[3],
            bpr: v[4],
            hpt_pr: v[5],
            lpt_pr: v[6],
            wf: v[7],
            vafn_area: v[8],
            vbv_pos: v[9],
            n2: v[10],
            n3: v[11],
            hp_pwr: v[12],
            lp_pwr: v[13],
        })
    }

    pub fn to_array(self) -> [Real; CMD_LEN] {
        [
            self.w,
            self.fan_rline,
            self.lpc_rline,
            self.hpc_rline,
            self.bpr,
            self.hpt_pr,
            self.lpt_pr,
            self.wf,
            self.vafn_area,
            self.vbv_pos,
            self.n2,
            self.n3,
            self.hp_pwr,
            self.lp_pwr,
        ]
    }
}

/// Balance targets for the trim residuals.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct Targets {
    /// Target LPC stall margin (percent)
    pub lpc_sm: Real,
    /// Target net thrust (lbf)
    pub fnet: Real,
    /// Target HPT exit total temperature (degR)
    pub tt45: Real,
}

impl Targets {
    pub fn from_slice(v: &[Real]) -> CycleResult<Self> {
        expect_vector(v, TARGET_LEN, "target vector")?;
        Ok(Self { lpc_sm: v[0], fnet: v[1], tt45: v[2] })
    }

    pub fn to_array(self) -> [Real; TARGET_LEN] {
        [self.lpc_sm, self.fnet, self.tt45]
    }
}

/// Turbomachinery health modifiers, one group per machine.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct HealthParams {
    pub fan: CompressorHealth,
    pub lpc: CompressorHealth,
    pub hpc: CompressorHealth,
    pub hpt: TurbineHealth,
    pub lpt: TurbineHealth,
}

impl HealthParams {
    pub fn from_slice(v: &[Real]) -> CycleResult<Self> {
        expect_vector(v, HEALTH_LEN, "health vector")?;
        Ok(Self {
            fan: CompressorHealth { wc: v[0], pr: v[1], eff: v[2] },
            lpc: CompressorHealth { wc: v[3], pr: v[4], eff: v[5] },
            hpc: CompressorHealth { wc: v[6], pr: v[7], eff: v[8] },
            hpt: TurbineHealth { wc: v[9], eff: v[10] },
            lpt: TurbineHealth { wc: v[11], eff: v[12] },
        })
    }

    pub fn to_array(self) -> [Real; HEALTH_LEN] {
        [
            self.fan.wc,
            self.fan.pr,
            self.fan.eff,
            self.lpc.wc,
            self.lpc.pr,
            self.lpc.eff,
            self.hpc.wc,
            self.hpc.pr,
            self.hpc.eff,
            self.hpt.wc,
            self.hpt.eff,
            self.lpt.wc,
            self.lpt.eff,
        ]
    }
}

/// Residuals the outer solver drives to zero.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct Residuals {
    /// Fan flow-match residual
    pub fan_flow: Real,
    /// LPC flow-match residual
    pub lpc_flow: Real,
    /// HPC flow-match residual
    pub hpc_flow: Real,
    /// HPT flow-match residual
    pub hpt_flow: Real,
    /// LPT flow-match residual
    pub lpt_flow: Real,
    /// Core nozzle flow-match residual
    pub core_nozzle_flow: Real,
    /// Bypass nozzle flow-match residual
    pub bypass_nozzle_flow: Real,
    /// LP spool acceleration (rpm/s)
    pub lp_accel: Real,
    /// HP spool acceleration (rpm/s)
    pub hp_accel: Real,
    /// LPC stall margin minus its target
    pub lpc_stall_margin: Real,
    /// Net thrust minus its target
    pub net_thrust: Real,
    /// HPT exit temperature minus its target
    pub tt45: Real,
}

impl Residuals {
    pub fn to_array(self) -> [Real; RESIDUAL_LEN] {
        [
            self.fan_flow,
            self.lpc_flow,
            self.hpc_flow,
            self.hpt_flow,
            self.lpt_flow,
            self.core_nozzle_flow,
            self.bypass_nozzle_flow,
            self.lp_accel,
            self.hp_accel,
            self.lpc_stall_margin,
            self.net_thrust,
            self.tt45,
        ]
    }
}

/// Spool speeds echoed as solver states.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct States {
    pub n2: Real,
    pub n3: Real,
}

impl States {
    pub fn to_array(self) -> [Real; STATE_LEN] {
        [self.n2, self.n3]
    }
}

/// Control inputs echoed back to the caller.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct Controls {
    pub wf: Real,
    pub hp_pwr: Real,
    pub lp_pwr: Real,
}

impl Controls {
    pub fn to_array(self) -> [Real; CONTROL_LEN] {
        [self.wf, self.hp_pwr, self.lp_pwr]
    }
}

/// Station survey and performance summary.
///
/// Station numbering: 0 freestream, 2 inlet exit, 21 fan exit, 13/15/17
/// bypass leg, 22/23 core leg into the LPC, 24a LPC exit, 24 aft of the
/// bleed valve, 25 HPC face, 36 HPC exit, 4 burner exit, 45 HPT exit,
/// 48 LPT face, 5 LPT exit, 7 core nozzle face.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct Outputs {
    /// Fan mechanical speed, aft of the reduction gear (rpm)
    pub n_fan: Real,
    pub n2: Real,
    pub n3: Real,
    pub w0: Real,
    pub tt0: Real,
    pub pt0: Real,
    pub w2: Real,
    pub tt2: Real,
    pub pt2: Real,
    pub w21: Real,
    pub tt21: Real,
    pub pt21: Real,
    pub w13: Real,
    pub tt13: Real,
    pub pt13: Real,
    pub w15: Real,
    pub tt15: Real,
    pub pt15: Real,
    pub w17: Real,
    pub tt17: Real,
    pub pt17: Real,
    pub w22: Real,
    pub tt22: Real,
    pub pt22: Real,
    pub w23: Real,
    pub tt23: Real,
    pub pt23: Real,
    pub w24a: Real,
    pub tt24a: Real,
    pub pt24a: Real,
    pub w24: Real,
    pub tt24: Real,
    pub pt24: Real,
    pub w25: Real,
    pub tt25: Real,
    pub pt25: Real,
    pub w36: Real,
    pub tt36: Real,
    pub pt36: Real,
    /// HPC exit static pressure (psia)
    pub ps36: Real,
    pub w4: Real,
    pub tt4: Real,
    pub pt4: Real,
    pub w45: Real,
    pub tt45: Real,
    pub pt45: Real,
    pub w48: Real,
    pub tt48: Real,
    pub pt48: Real,
    pub w5: Real,
    pub tt5: Real,
    pub pt5: Real,
    pub w7: Real,
    pub tt7: Real,
    pub pt7: Real,
    /// Ram drag (lbf)
    pub fdrag: Real,
    /// Total gross thrust (lbf)
    pub fg: Real,
    /// Net thrust (lbf)
    pub fnet: Real,
    /// Bypass nozzle gross thrust (lbf)
    pub fg_bypass: Real,
    /// Core nozzle gross thrust (lbf)
    pub fg_core: Real,
    /// Thrust specific fuel consumption (lbm/hr/lbf)
    pub tsfc: Real,
    /// Fan stall margin, map coordinates (percent)
    pub sm_fan: Real,
    /// LPC stall margin, map coordinates (percent)
    pub sm_lpc: Real,
    /// HPC stall margin, map coordinates (percent)
    pub sm_hpc: Real,
}

impl Outputs {
    pub fn to_array(self) -> [Real; OUTPUT_LEN] {
        [
            self.n_fan,
            self.n2,
            self.n3,
            self.w0,
            self.tt0,
            self.pt0,
            self.w2,
            self.tt2,
            self.pt2,
            self.w21,
            self.tt21,
            self.pt21,
            self.w13,
            self.tt13,
            self.pt13,
            self.w15,
            self.tt15,
            self.pt15,
            self.w17,
            self.tt17,
            self.pt17,
            self.w22,
            self.tt22,
            self.pt22,
            self.w23,
            self.tt23,
            self.pt23,
            self.w24a,
            self.tt24a,
            self.pt24a,
            self.w24,
            self.tt24,
            self.pt24,
            self.w25,
            self.tt25,
            self.pt25,
            self.w36,
            self.tt36,
            self.pt36,
            self.ps36,
            self.w4,
            self.tt4,
            self.pt4,
            self.w45,
            self.tt45,
            self.pt45,
            self.w48,
            self.tt48,
            self.pt48,
            self.w5,
            self.tt5,
            self.pt5,
            self.w7,
            self.tt7,
            self.pt7,
            self.fdrag,
            self.fg,
            self.fnet,
            self.fg_bypass,
            self.fg_core,
            self.tsfc,
            self.sm_fan,
            self.sm_lpc,
            self.sm_hpc,
        ]
    }
}

/// Shaft-and-speed diagnostics for monitoring, not for the balance.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct Diagnostics {
    /// LPC inlet corrected speed (rpm)
    pub nc_lpc: Real,
    /// HPC inlet corrected speed (rpm)
    pub nc_hpc: Real,
    pub nc_map_fan: Real,
    pub nc_map_lpc: Real,
    pub nc_map_hpc: Real,
    pub nc_map_hpt: Real,
    pub nc_map_lpt: Real,
    /// Torques (ft-lbf), compressors negative, turbines positive
    pub trq_fan: Real,
    pub trq_lpc: Real,
    pub trq_hpc: Real,
    pub trq_hpt: Real,
    pub trq_lpt: Real,
    /// Ambient static pressure (psia)
    pub ps0: Real,
}

impl Diagnostics {
    pub fn to_array(self) -> [Real; DIAG_LEN] {
        [
            self.nc_lpc,
            self.nc_hpc,
            self.nc_map_fan,
            self.nc_map_lpc,
            self.nc_map_hpc,
            self.nc_map_hpt,
            self.nc_map_lpt,
            self.trq_fan,
            self.trq_lpc,
            self.trq_hpc,
            self.trq_hpt,
            self.trq_lpt,
            self.ps0,
        ]
    }
}

/// Everything one evaluation produces.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct Evaluation {
    pub residuals: Residuals,
    pub states: States,
    pub controls: Controls,
    pub outputs: Outputs,
    pub diagnostics: Diagnostics,
}
