//! Net thrust and specific fuel consumption.

use tc_core::constants::SECS_PER_HR;
use tc_core::numeric::guarded_div;
use tc_core::Real;

#[derive(Clone, Copy, Debug)]
pub struct FuelConsumption {
    /// Net thrust (lbf)
    pub fnet: Real,
    /// Thrust specific fuel consumption (lbm/hr per lbf)
    pub sfc: Real,
}

/// Net thrust from total gross thrust and ram drag, and the specific fuel
/// consumption at that thrust. SFC reads zero at vanishing net thrust
/// rather than diverging.
pub fn fuel_consumption(wf: Real, fg_total: Real, fdrag: Real) -> FuelConsumption {
    let fnet = fg_total - fdrag;
    let sfc = guarded_div(wf * SECS_PER_HR, fnet);
    FuelConsumption { fnet, sfc }
}
