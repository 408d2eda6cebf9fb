//! Reference conditions and unit conversions (US customary).
//!
//! All station quantities in the workspace use lbm/s, BTU/lbm, degR, psia.

use crate::numeric::Real;

/// Standard-day sea-level static temperature (degR)
pub const T_STD: Real = 518.67;

/// Standard-day sea-level static pressure (psia)
pub const P_STD: Real = 14.696;

/// Gravitational acceleration (ft/s^2)
pub const GRAVITY: Real = 32.174049;

/// 1 BTU/s expressed in horsepower
pub const BTU_PER_SEC_TO_HP: Real = 1.4148532;

/// Torque (ft-lbf) per horsepower at 1 rpm: 33000 / (2 pi)
pub const HP_PER_RPM_TO_FT_LBF: Real = 5252.113122033024;

/// Mechanical equivalent of heat (ft-lbf per BTU)
pub const BTU_TO_FT_LBF: Real = 778.169262;

/// Seconds per hour, for specific-fuel-consumption conversion
pub const SECS_PER_HR: Real = 3600.0;

/// Square inches per square foot
pub const SQIN_PER_SQFT: Real = 144.0;
