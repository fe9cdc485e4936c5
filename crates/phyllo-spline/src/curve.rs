//! B-spline curve with a mutable control polygon and a derived
//! first-derivative curve.

use phyllo_core::{PhylloError, Point3, Result, Vector3};
use serde::{Deserialize, Serialize};

use crate::deboor;
use crate::knot::{knot_vector, BoundaryMode};

/// Trait for parametric curves in 3D space.
pub trait Curve: Send + Sync {
    /// Evaluate the curve at parameter `u`.
    fn point_at(&self, u: f64) -> Point3;

    /// Evaluate the first-derivative vector at parameter `u`.
    fn tangent_at(&self, u: f64) -> Vector3;

    /// Return the parameter domain `(u_min, u_max)`.
    fn domain(&self) -> (f64, f64);
}

/// A B-spline curve defined by a degree, boundary mode, and control
/// polygon.
///
/// The knot vector is generated from the boundary mode (or supplied
/// wholesale via [`set_knots`](BSplineCurve::set_knots)). The control
/// points of the first-derivative curve are re-derived after every
/// mutation, so [`tangent_at`](Curve::tangent_at) evaluates a true
/// lower-degree B-spline rather than a finite difference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BSplineCurve {
    degree: usize,
    mode: BoundaryMode,
    control_points: Vec<Point3>,
    knots: Vec<f64>,
    deriv_control_points: Vec<Point3>,
    deriv_knots: Vec<f64>,
}

impl BSplineCurve {
    /// Create a curve from an ordered control polygon.
    ///
    /// `degree` is coerced to at least 1.
    pub fn new(control_points: Vec<Point3>, degree: usize, mode: BoundaryMode) -> Self {
        let mut curve = Self {
            degree: degree.max(1),
            mode,
            control_points,
            knots: Vec::new(),
            deriv_control_points: Vec::new(),
            deriv_knots: Vec::new(),
        };
        curve.rebuild_knots();
        curve.rebuild_derivative();
        curve
    }

    /// Replace the control polygon, degree, and boundary mode wholesale.
    ///
    /// The knot vector and the derivative curve are rebuilt.
    pub fn set_control_points(
        &mut self,
        control_points: Vec<Point3>,
        degree: usize,
        mode: BoundaryMode,
    ) {
        self.degree = degree.max(1);
        self.mode = mode;
        self.control_points = control_points;
        self.rebuild_knots();
        self.rebuild_derivative();
    }

    /// Insert one control point, keeping the polygon sorted by ascending
    /// x coordinate.
    ///
    /// The knot vector and the derivative curve are rebuilt for the new
    /// point count.
    pub fn insert_control_point(&mut self, point: Point3) {
        let index = self
            .control_points
            .iter()
            .position(|p| point.x <= p.x)
            .unwrap_or(self.control_points.len());
        self.control_points.insert(index, point);
        self.rebuild_knots();
        self.rebuild_derivative();
    }

    /// Replace the knot vector.
    ///
    /// The replacement must match the current length; on mismatch the
    /// prior knots are retained and an error is returned. Accepted values
    /// are clamped into [0, 1]. Only the derivative curve is re-derived.
    pub fn set_knots(&mut self, knots: Vec<f64>) -> Result<()> {
        if knots.len() != self.knots.len() {
            return Err(PhylloError::KnotLengthMismatch {
                expected: self.knots.len(),
                actual: knots.len(),
            });
        }
        self.knots = knots;
        for knot in &mut self.knots {
            *knot = knot.clamp(0.0, 1.0);
        }
        self.rebuild_derivative();
        Ok(())
    }

    pub fn degree(&self) -> usize {
        self.degree
    }

    pub fn boundary_mode(&self) -> BoundaryMode {
        self.mode
    }

    pub fn control_points(&self) -> &[Point3] {
        &self.control_points
    }

    pub fn knots(&self) -> &[f64] {
        &self.knots
    }

    fn rebuild_knots(&mut self) {
        self.knots = knot_vector(self.degree, self.control_points.len(), self.mode);
    }

    // D_i = p / (u_{i+p+1} - u_{i+1}) * (P_{i+1} - P_i); the derivative
    // knot vector is the primary one with its first and last knots
    // removed.
    fn rebuild_derivative(&mut self) {
        let p = self.degree;
        self.deriv_control_points.clear();
        for i in 0..self.control_points.len().saturating_sub(1) {
            let span = self.knots[i + p + 1] - self.knots[i + 1];
            let d = p as f64 / span * (self.control_points[i + 1] - self.control_points[i]);
            self.deriv_control_points.push(d);
        }
        self.deriv_knots = self.knots[1..self.knots.len() - 1].to_vec();
    }
}

impl Curve for BSplineCurve {
    fn point_at(&self, u: f64) -> Point3 {
        deboor::curve_point(u, self.degree, &self.control_points, &self.knots)
    }

    fn tangent_at(&self, u: f64) -> Vector3 {
        deboor::curve_point(
            u,
            self.degree - 1,
            &self.deriv_control_points,
            &self.deriv_knots,
        )
    }

    fn domain(&self) -> (f64, f64) {
        let p = self.degree;
        (self.knots[p], self.knots[self.knots.len() - p - 1])
    }
}
