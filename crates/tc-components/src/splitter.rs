//! Flow splitter.

use tc_core::Real;

use crate::station::Station;

/// Split an upstream station into (bypass, core) legs at bypass ratio `bpr`.
///
/// Both legs carry the upstream thermodynamic state unchanged; only flow is
/// divided: W_bypass = W bpr / (bpr + 1). A negative commanded bypass ratio
/// is treated as zero.
pub fn split(upstream: &Station, bpr: Real) -> (Station, Station) {
    let bpr = bpr.max(0.0);
    let w_bypass = upstream.w * bpr / (bpr + 1.0);
    let w_core = upstream.w - w_bypass;
    (upstream.with_flow(w_bypass), upstream.with_flow(w_core))
}
