//! Knot vector construction and span location.

use serde::{Deserialize, Serialize};

/// Boundary behaviour of a generated knot vector.
///
/// `Open` spaces all knots uniformly, so the curve does not in general
/// pass through its first and last control points. `Clamped` repeats the
/// boundary knot values `degree + 1` times, forcing the curve to
/// interpolate its endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoundaryMode {
    Open,
    Clamped,
}

/// Build the knot vector for `count` control points (or basis functions)
/// of the given degree.
///
/// The result has `degree + count + 1` non-decreasing values in [0, 1].
/// In `Open` mode `knot[i] = i / (size - 1)`; in `Clamped` mode the first
/// and last `degree + 1` knots are pinned to 0 and 1 and the interior
/// knots are spaced as `(i - degree) / (size - 1 - 2 * degree)`.
pub fn knot_vector(degree: usize, count: usize, mode: BoundaryMode) -> Vec<f64> {
    let size = degree + count + 1;
    let mut knots = Vec::with_capacity(size);
    for i in 0..size {
        let v = match mode {
            BoundaryMode::Open => i as f64 / (size - 1) as f64,
            BoundaryMode::Clamped => {
                if i < degree + 1 {
                    0.0
                } else if i >= size - degree - 1 {
                    1.0
                } else {
                    (i - degree) as f64 / (size - 1 - 2 * degree) as f64
                }
            }
        };
        knots.push(v);
    }
    knots
}

/// Locate the knot span containing `u`.
///
/// Returns the first index `k` with `knots[k] <= u < knots[k+1]`, or
/// `knots.len() - 1` when no half-open span contains `u` (in particular
/// at the upper end of the knot range). Linear scan; knot vectors here
/// are short.
pub fn find_span(knots: &[f64], u: f64) -> usize {
    if knots.is_empty() {
        return 0;
    }
    for k in 0..knots.len() - 1 {
        if u >= knots[k] && u < knots[k + 1] {
            return k;
        }
    }
    knots.len() - 1
}
