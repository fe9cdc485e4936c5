//! Place organs along a clamped stem curve and report their positions
//! and growth directions, plus a basis-weight profile.

use phyllo_core::Point3;
use phyllo_spline::{BSplineCurve, BasisFunctionSet, BoundaryMode, Curve};

fn main() {
    let stem = BSplineCurve::new(
        vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.2, 0.1, 1.0),
            Point3::new(0.5, -0.1, 2.0),
            Point3::new(0.9, 0.0, 3.0),
        ],
        3,
        BoundaryMode::Clamped,
    );

    let organs = 8;
    for i in 0..organs {
        let u = i as f64 / (organs - 1) as f64;
        let p = stem.point_at(u);
        let t = stem.tangent_at(u);
        println!(
            "organ {i}: u={u:.3} position=({:.3}, {:.3}, {:.3}) tangent=({:.3}, {:.3}, {:.3})",
            p.x, p.y, p.z, t.x, t.y, t.z
        );
    }

    let mut profile = BasisFunctionSet::new(organs, 3, BoundaryMode::Clamped);
    profile.generate_default_samples();
    let mid = profile.default_sample_count() / 2;
    print!("profile weights at mid-height:");
    for f in 0..profile.len() {
        print!(" {:.3}", profile.sample_at(mid, f));
    }
    println!();
}
