//! B-spline curve and basis-function evaluation for placing plant organs
//! along smooth curves.

pub mod basis;
pub mod curve;
pub mod deboor;
pub mod knot;

pub use basis::BasisFunctionSet;
pub use curve::{BSplineCurve, Curve};
pub use knot::{find_span, knot_vector, BoundaryMode};
