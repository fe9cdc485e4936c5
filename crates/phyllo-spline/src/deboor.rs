//! De Boor point evaluation for B-spline curves.
//!
//! Evaluates a curve point by knot-insertion style affine blending of the
//! control points influencing the span containing `u`.

use phyllo_core::{Point3, Tolerance};

use crate::knot::find_span;

/// Evaluate a point on a B-spline curve at parameter `u`.
///
/// `knots` must be non-decreasing with
/// `knots.len() == control_points.len() + degree + 1`. Parameters outside
/// the curve domain `[knots[degree], knots[len-1-degree]]` are snapped to
/// the nearest domain boundary. An empty knot vector or control polygon
/// yields the origin.
pub fn curve_point(u: f64, degree: usize, control_points: &[Point3], knots: &[f64]) -> Point3 {
    if knots.is_empty() || control_points.is_empty() {
        return Point3::ZERO;
    }

    let mut u = u;
    let mut k = find_span(knots, u);

    // The curve is only defined on [u_degree, u_{len-1-degree}].
    if k < degree {
        k = degree;
        u = knots[k];
    }
    if k >= knots.len() - 1 - degree {
        k = knots.len() - 1 - degree;
        u = knots[k];
    }

    // A degree-0 spline is piecewise constant: return the span's single
    // control point. The upper clamp lands one past the last index here,
    // since no multiplicity round narrows the window for degree 0.
    if degree == 0 {
        return control_points[k.min(control_points.len() - 1)];
    }

    // Knot multiplicity s at u reduces the number of insertion rounds.
    let mut s = 0;
    if Tolerance::default().parametric_eq(u, knots[k]) {
        s = 1;
        for i in (1..=k).rev() {
            if knots[i] == knots[i - 1] {
                s += 1;
            } else {
                break;
            }
        }
        s = s.min(degree);
    }
    let h = degree - s;

    // Copy the control points influencing this span.
    let mut pts = vec![Point3::ZERO; degree + 1 - s];
    for i in s..=degree {
        pts[degree - i] = control_points[k - i];
    }

    // Insert u h times; each round narrows the active window by one.
    for r in 1..=h {
        for i in ((k - degree + r)..=(k - s)).rev() {
            let denom = knots[i + degree - r + 1] - knots[i];
            // A zero-length span contributes nothing.
            let omega = if denom > 0.0 { (u - knots[i]) / denom } else { 0.0 };
            let j = i - (k - degree);
            pts[j] = (1.0 - omega) * pts[j - 1] + omega * pts[j];
        }
    }

    pts[degree - s]
}
