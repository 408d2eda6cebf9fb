//! Piecewise-linear table lookup for performance maps and property tables.
//!
//! Queries outside the grid are answered by linear extrapolation from the
//! nearest edge segment and flagged, never rejected. The caller decides what
//! to do with the flag (components latch it into a one-time advisory).

use crate::error::{CoreError, CoreResult};
use crate::numeric::Real;
use serde::{Deserialize, Serialize};

/// Result of a table lookup.
#[derive(Clone, Copy, Debug)]
pub struct Lookup {
    pub value: Real,
    /// True if the query fell outside the grid on any axis.
    pub extrapolated: bool,
}

/// Locate the segment containing `q`, returning (segment index, out-of-range).
fn segment(grid: &[Real], q: Real) -> (usize, bool) {
    let n = grid.len();
    if q < grid[0] {
        return (0, true);
    }
    if q > grid[n - 1] {
        return (n - 2, true);
    }
    let upper = grid.partition_point(|&g| g <= q);
    (upper.saturating_sub(1).min(n - 2), false)
}

fn check_grid(grid: &[Real], what: &'static str) -> CoreResult<()> {
    if grid.len() < 2 {
        return Err(CoreError::InvalidArg { what });
    }
    if grid.windows(2).any(|w| w[1] <= w[0]) {
        return Err(CoreError::GridNotIncreasing { what });
    }
    Ok(())
}

/// 1-D piecewise-linear table over a strictly increasing grid.
///
/// Deserialization routes through [`Table1::new`], so a malformed table in
/// a stored deck is rejected with the same error a direct construction
/// would produce.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "Table1Data")]
pub struct Table1 {
    x: Vec<Real>,
    y: Vec<Real>,
}

#[derive(Deserialize)]
struct Table1Data {
    x: Vec<Real>,
    y: Vec<Real>,
}

impl TryFrom<Table1Data> for Table1 {
    type Error = CoreError;

    fn try_from(d: Table1Data) -> CoreResult<Self> {
        Self::new(d.x, d.y)
    }
}

impl Table1 {
    pub fn new(x: Vec<Real>, y: Vec<Real>) -> CoreResult<Self> {
        check_grid(&x, "Table1 grid")?;
        if y.len() != x.len() {
            return Err(CoreError::LengthMismatch {
                what: "Table1 values",
                expected: x.len(),
                got: y.len(),
            });
        }
        Ok(Self { x, y })
    }

    pub fn lookup(&self, q: Real) -> Lookup {
        let (i, extrapolated) = segment(&self.x, q);
        let t = (q - self.x[i]) / (self.x[i + 1] - self.x[i]);
        Lookup {
            value: self.y[i] + t * (self.y[i + 1] - self.y[i]),
            extrapolated,
        }
    }
}

/// 2-D bilinear table over a rectangular, possibly non-uniform grid.
///
/// `values` is row-major: `values[i * y.len() + j]` is the sample at
/// `(x[i], y[j])`. Bilinear interpolation composes two 1-D interpolations;
/// out-of-range queries extrapolate from the edge cell.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "Table2Data")]
pub struct Table2 {
    x: Vec<Real>,
    y: Vec<Real>,
    values: Vec<Real>,
}

#[derive(Deserialize)]
struct Table2Data {
    x: Vec<Real>,
    y: Vec<Real>,
    values: Vec<Real>,
}

impl TryFrom<Table2Data> for Table2 {
    type Error = CoreError;

    fn try_from(d: Table2Data) -> CoreResult<Self> {
        Self::new(d.x, d.y, d.values)
    }
}

impl Table2 {
    pub fn new(x: Vec<Real>, y: Vec<Real>, values: Vec<Real>) -> CoreResult<Self> {
        check_grid(&x, "Table2 x grid")?;
        check_grid(&y, "Table2 y grid")?;
        if values.len() != x.len() * y.len() {
            return Err(CoreError::LengthMismatch {
                what: "Table2 values",
                expected: x.len() * y.len(),
                got: values.len(),
            });
        }
        Ok(Self { x, y, values })
    }

    fn at(&self, i: usize, j: usize) -> Real {
        self.values[i * self.y.len() + j]
    }

    pub fn lookup(&self, qx: Real, qy: Real) -> Lookup {
        let (i, ex) = segment(&self.x, qx);
        let (j, ey) = segment(&self.y, qy);
        let tx = (qx - self.x[i]) / (self.x[i + 1] - self.x[i]);
        let ty = (qy - self.y[j]) / (self.y[j + 1] - self.y[j]);

        let v00 = self.at(i, j);
        let v10 = self.at(i + 1, j);
        let v01 = self.at(i, j + 1);
        let v11 = self.at(i + 1, j + 1);

        let value = (1.0 - tx) * (1.0 - ty) * v00
            + tx * (1.0 - ty) * v10
            + (1.0 - tx) * ty * v01
            + tx * ty * v11;

        Lookup {
            value,
            extrapolated: ex || ey,
        }
    }
}
