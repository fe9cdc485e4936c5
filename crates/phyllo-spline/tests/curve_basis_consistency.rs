use approx::assert_relative_eq;
use phyllo_core::{Point3, Tolerance};
use phyllo_spline::{BSplineCurve, BasisFunctionSet, BoundaryMode, Curve};

fn polygon() -> Vec<Point3> {
    vec![
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 2.0, 0.5),
        Point3::new(2.0, -1.0, 1.0),
        Point3::new(3.0, 1.5, 1.5),
        Point3::new(4.0, 0.0, 2.0),
    ]
}

fn weighted_sum(weights: &[f64], points: &[Point3]) -> Point3 {
    weights
        .iter()
        .zip(points)
        .fold(Point3::ZERO, |acc, (&w, &p)| acc + w * p)
}

#[test]
fn curve_point_equals_weighted_control_points_clamped() {
    let curve = BSplineCurve::new(polygon(), 3, BoundaryMode::Clamped);
    let basis = BasisFunctionSet::new(5, 3, BoundaryMode::Clamped);
    assert_eq!(basis.knots(), curve.knots());

    for i in 0..=40 {
        let u = i as f64 / 40.0;
        let direct = curve.point_at(u);
        let blended = weighted_sum(&basis.evaluate_at(u), curve.control_points());
        assert_relative_eq!(direct.x, blended.x, epsilon = 1e-12);
        assert_relative_eq!(direct.y, blended.y, epsilon = 1e-12);
        assert_relative_eq!(direct.z, blended.z, epsilon = 1e-12);
    }
}

#[test]
fn curve_point_equals_weighted_control_points_open() {
    let curve = BSplineCurve::new(polygon(), 3, BoundaryMode::Open);
    let basis = BasisFunctionSet::new(5, 3, BoundaryMode::Open);
    assert_eq!(basis.knots(), curve.knots());

    let (lo, hi) = curve.domain();
    for i in 0..=40 {
        let u = lo + (hi - lo) * i as f64 / 40.0;
        let direct = curve.point_at(u);
        let blended = weighted_sum(&basis.evaluate_at(u), curve.control_points());
        assert_relative_eq!(direct.x, blended.x, epsilon = 1e-12);
        assert_relative_eq!(direct.y, blended.y, epsilon = 1e-12);
        assert_relative_eq!(direct.z, blended.z, epsilon = 1e-12);
    }
}

// The basis evaluator narrows its clamped span index by one relative to
// the curve evaluator. At u = 1 both must land on the last span: the
// final basis function carries all the weight exactly where the curve
// interpolates its last control point.
#[test]
fn last_span_parity_at_upper_boundary() {
    let curve = BSplineCurve::new(polygon(), 3, BoundaryMode::Clamped);
    let basis = BasisFunctionSet::new(5, 3, BoundaryMode::Clamped);

    let weights = basis.evaluate_at(1.0);
    assert_eq!(weights[4], 1.0);
    assert!(weights[..4].iter().all(|&w| w == 0.0));

    let end = curve.point_at(1.0);
    assert!((end - curve.control_points()[4]).length() < Tolerance::DEFAULT_LINEAR);
}

#[test]
fn consistency_survives_knot_replacement() {
    let mut curve = BSplineCurve::new(polygon(), 3, BoundaryMode::Clamped);
    let mut basis = BasisFunctionSet::new(5, 3, BoundaryMode::Clamped);

    // Shift the single interior knot on both sides.
    let mut knots = curve.knots().to_vec();
    knots[4] = 0.3;
    curve.set_knots(knots.clone()).unwrap();
    basis.set_knots(knots).unwrap();

    for i in 0..=20 {
        let u = i as f64 / 20.0;
        let direct = curve.point_at(u);
        let blended = weighted_sum(&basis.evaluate_at(u), curve.control_points());
        assert_relative_eq!(direct.x, blended.x, epsilon = 1e-12);
        assert_relative_eq!(direct.y, blended.y, epsilon = 1e-12);
        assert_relative_eq!(direct.z, blended.z, epsilon = 1e-12);
    }
}
