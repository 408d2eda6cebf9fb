//! Per-instance diagnostic latches.
//!
//! A latch notes the first occurrence of a numeric anomaly (a table lookup
//! that left its grid) with a `tracing` advisory and stays silent afterward.
//! Latches live outside the immutable component configs so that configs can
//! be shared across concurrent evaluations, each owning its own latch set.

/// One-shot advisory latch for a class of anomaly on one component instance.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExtrapLatch {
    seen: bool,
}

impl ExtrapLatch {
    /// Record a lookup outcome. Warns once, on the first extrapolated lookup.
    pub fn note(&mut self, block: &str, table: &'static str, extrapolated: bool) {
        if extrapolated && !self.seen {
            tracing::warn!(
                block,
                table,
                "lookup outside table grid; extrapolating from edge segment \
                 (further occurrences for this instance are suppressed)"
            );
            self.seen = true;
        }
    }

    /// Whether this latch has ever fired.
    pub fn seen(&self) -> bool {
        self.seen
    }
}
